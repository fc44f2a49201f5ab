/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@fortlet-lang.com
 * Website:  https://www.fortlet-lang.com
 * Github:   https://github.com/samwilcox/fortlet
 *
 * License:
 * This file is part of the FORTLET language tooling project.
 *
 * FORTLET is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.fortlet-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::CheckError;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for FORTLET check failures.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for FORTLET and designed to remain readable without color.
/// Rendering is strictly a presentation concern: the scanner and acceptor
/// never print, they only return structured error values.
pub struct DiagnosticPrinter {
    /// Full source text of the program being checked.
    ///
    /// Stored as a single string so we can easily extract specific
    /// lines for error reporting. This is the *original* text, before
    /// case folding, so the user sees what they actually wrote.
    source: String,

    /// Name of the source (a file name, or a sample label in the demo
    /// driver). Used only for display purposes.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source.
    ///
    /// Both parameters accept any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: syntax error on line 6: expected THEN, but found IDENTIFIER 'A'
    ///   --> broken.flt:6:5
    ///    |
    ///  6 |     A = 10
    ///    |     ^
    ///
    /// help: every IF (...) condition must be followed by THEN
    /// ```
    pub fn print(&self, error: &CheckError) {
        let (line, column) = self.locate(error);

        // Lines are 1-indexed in diagnostics, but the collection is
        // 0-indexed; `saturating_sub` guards a reported line of 0.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        // Build a caret underline pointing at the reported column.
        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);

        if let Some(help) = error.help() {
            eprintln!("\nhelp: {}", help);
        }
    }

    /// The line/column pair to point the caret at.
    ///
    /// Lexical errors carry an exact span. Tokens carry no column, so for
    /// syntax errors one is recovered by locating the found lexeme within
    /// its reported line; the search is case-insensitive because scanning
    /// happens over case-folded text while we display the original.
    fn locate(&self, error: &CheckError) -> (usize, usize) {
        match error {
            CheckError::Lexical(e) => (e.span.line, e.span.column),
            CheckError::Syntax(e) => (e.line, self.column_of(e.line, &e.found_lexeme)),
        }
    }

    fn column_of(&self, line: usize, lexeme: &str) -> usize {
        if lexeme.is_empty() {
            return 0;
        }

        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        src_line
            .to_ascii_uppercase()
            .find(&lexeme.to_ascii_uppercase())
            .unwrap_or(0)
    }
}
