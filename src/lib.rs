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

//! Syntax checking for FORTLET, a minimal Fortran-like dialect: program
//! header, typed variable declarations, assignment, `PRINT`, and a
//! single-branch conditional.
//!
//! The pipeline is two stages consumed in strict order:
//!
//! ```text
//! source text → tokenize → Vec<Token> → validate → valid / first error
//! ```
//!
//! [`tokenize`] scans case-folded text once, left to right, against a
//! priority-ordered pattern table and produces a token sequence ending in
//! `EOF`, or the first [`LexicalError`]. [`validate`] walks that sequence
//! by recursive descent with exactly one token of lookahead and no
//! backtracking, and returns `Ok(())` or the first [`SyntaxError`]. No
//! syntax tree is built; the acceptor proves grammar membership only.
//!
//! Both stages are pure over their input: each call owns its own scanner
//! or cursor state and nothing survives the call.

/// Rendering of check failures against the offending source line.
pub mod diagnostics;

/// Structured error values for both pipeline stages.
pub mod error;

/// The scanner: tokens, the pattern table, the scanning loop.
pub mod lexer;

/// The recursive-descent acceptor.
pub mod parser;

/// Source locations for diagnostics.
pub mod span;

pub use error::{CheckError, Expected, LexicalError, SyntaxError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::validate;
pub use span::Span;

/// Runs both stages over raw source text.
///
/// On success returns the token sequence, so callers (the demo driver,
/// tests) can render a trace of what was scanned. Either stage's first
/// error ends the check; when scanning fails, validation never runs.
pub fn check(source: &str) -> Result<Vec<Token>, CheckError> {
    let tokens = tokenize(source)?;
    validate(tokens.clone())?;
    Ok(tokens)
}
