/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types produced by the
 *            FORTLET scanner and consumed by the syntax acceptor.
 *
 * Author:    Sam Wilcox
 * Email:     sam@fortlet-lang.com
 * Website:   https://www.fortlet-lang.com
 * GitHub:    https://github.com/samwilcox/fortlet
 *
 * License:
 * This file is part of the FORTLET language tooling project.
 *
 * FORTLET is dual-licensed under the terms of:
 *   - The MIT License
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

use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the FORTLET dialect.
///
/// `TokenKind` identifies how a span of source text should be interpreted
/// by the acceptor.
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Acceptor → valid / first error
/// ```
///
/// The set is closed: the dialect has seven reserved words, three symbol
/// classes, identifiers and numeric literals, and the end-of-input marker.
/// Each reserved word gets its own kind (rather than a single `Keyword`
/// catch-all) because the grammar rules match on the specific word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// The `PROGRAM` reserved word that opens a compilation unit.
    Program,

    /// The `INTEGER` reserved word opening a variable declaration.
    Integer,

    /// The `REAL` reserved word opening a variable declaration.
    Real,

    /// The `IF` reserved word opening a conditional.
    If,

    /// The `THEN` reserved word separating a condition from its body.
    Then,

    /// The `END` reserved word, closing either the program or an `IF`.
    End,

    /// The `PRINT` reserved word opening an output statement.
    Print,

    /// A user-defined name: a letter followed by letters, digits or
    /// underscores. Reserved words never classify as identifiers, but a
    /// name that merely *starts* with one (`PROGRAMX`) does.
    Identifier,

    /// A numeric literal, either integral (`100`) or decimal (`45.67`).
    Number,

    /// The assignment symbol `=`.
    Assign,

    /// One of the single-character operator symbols: `+ - * / ( )`.
    ///
    /// The grammar does not distinguish which operator character appears;
    /// all six share this kind.
    Operator,

    /// The comma separator used by `PRINT *, NAME`.
    Comma,

    /// End-of-input marker.
    ///
    /// Always appended as the **final token** during scanning, exactly
    /// once, and used by the acceptor to detect exhausted input.
    Eof,
}

impl TokenKind {
    /// The uppercase grammar name of this kind, as it appears in
    /// diagnostics (`PROGRAM`, `IDENTIFIER`, `EOF`, ...).
    pub fn grammar_name(&self) -> &'static str {
        match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::End => "END",
            TokenKind::Print => "PRINT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.grammar_name())
    }
}

/// Represents a **single lexical token** produced by the FORTLET scanner.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The exact source text that produced it (`lexeme`)
/// - The line number for error reporting
///
/// # Example Tokens
/// ```text
/// PROGRAM  →  { kind: Program,    lexeme: "PROGRAM", line: 1 }
/// TOTAL    →  { kind: Identifier, lexeme: "TOTAL",   line: 2 }
/// 45.67    →  { kind: Number,     lexeme: "45.67",   line: 3 }
/// ```
///
/// Tokens are created once during scanning and never mutated; the whole
/// sequence is handed to the acceptor and discarded after the pass.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact (case-folded) source text that produced this token.
    ///
    /// Empty only for the terminating `Eof` marker.
    pub lexeme: String,

    /// The 1-based line number on which this token begins.
    ///
    /// Line numbers are monotonically non-decreasing across a scanned
    /// sequence.
    pub line: usize,
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints only the token's lexeme, the exact text the user wrote,
    /// rather than the full internal structure. `Debug` remains available
    /// for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
