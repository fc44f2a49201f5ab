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

use serde::Serialize;
use std::error::Error;
use std::fmt;

use crate::lexer::token::TokenKind;
use crate::span::Span;

/// What the acceptor was looking for when a mismatch occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expected {
    /// A specific token kind requested by `expect`.
    Kind(TokenKind),

    /// Any of the statement-opening kinds (`INTEGER`, `REAL`,
    /// `IDENTIFIER`, `PRINT`, `IF`); reported when statement dispatch
    /// sees a token outside that set.
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Statement => write!(f, "the start of a statement"),
        }
    }
}

/// Raised the instant scanning reaches a character claimed only by the
/// catch-all pattern. No partial token sequence survives the failure.
#[derive(Debug, Clone, Serialize)]
pub struct LexicalError {
    /// Exact location of the offending character.
    pub span: Span,

    /// The character the language does not know.
    pub character: char,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl LexicalError {
    pub fn new(span: Span, character: char) -> Self {
        Self {
            span,
            character,
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Stable error code used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        "E_LEX"
    }

    /// 1-based line the error was raised on.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lexical error on line {}: unexpected character '{}'",
            self.span.line, self.character
        )
    }
}

impl Error for LexicalError {}

/// Raised the instant `expect` observes a token of the wrong kind, or
/// statement dispatch sees a kind no statement starts with. Fatal to the
/// whole validation pass; no recovery is attempted.
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxError {
    /// 1-based line of the offending token.
    pub line: usize,

    /// What the grammar required at this point.
    pub expected: Expected,

    /// The kind that was actually found.
    pub found_kind: TokenKind,

    /// The lexeme that was actually found (empty for `EOF`).
    pub found_lexeme: String,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(
        line: usize,
        expected: Expected,
        found_kind: TokenKind,
        found_lexeme: impl Into<String>,
    ) -> Self {
        Self {
            line,
            expected,
            found_kind,
            found_lexeme: found_lexeme.into(),
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Stable error code used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        "E_SYNTAX"
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found_kind == TokenKind::Eof {
            write!(
                f,
                "syntax error on line {}: expected {}, but the input ended",
                self.line, self.expected
            )
        } else {
            write!(
                f,
                "syntax error on line {}: expected {}, but found {} '{}'",
                self.line, self.expected, self.found_kind, self.found_lexeme
            )
        }
    }
}

impl Error for SyntaxError {}

/// Either failure from the two-stage pipeline. Callers that run scanning
/// and validation in sequence (the demo driver, `crate::check`) surface
/// this; the stages themselves only ever produce their own kind.
#[derive(Debug, Clone, Serialize)]
pub enum CheckError {
    Lexical(LexicalError),
    Syntax(SyntaxError),
}

impl CheckError {
    /// Stable error code of the underlying failure.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Lexical(e) => e.code(),
            CheckError::Syntax(e) => e.code(),
        }
    }

    /// 1-based line the underlying failure was raised on.
    pub fn line(&self) -> usize {
        match self {
            CheckError::Lexical(e) => e.line(),
            CheckError::Syntax(e) => e.line,
        }
    }

    /// Help text attached to the underlying failure, if any.
    pub fn help(&self) -> Option<&str> {
        match self {
            CheckError::Lexical(e) => e.help.as_deref(),
            CheckError::Syntax(e) => e.help.as_deref(),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Lexical(e) => write!(f, "{}", e),
            CheckError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CheckError {}

impl From<LexicalError> for CheckError {
    fn from(error: LexicalError) -> Self {
        CheckError::Lexical(error)
    }
}

impl From<SyntaxError> for CheckError {
    fn from(error: SyntaxError) -> Self {
        CheckError::Syntax(error)
    }
}
