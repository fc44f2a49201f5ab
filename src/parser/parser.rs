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

use crate::error::{Expected, SyntaxError};
use crate::lexer::token::{Token, TokenKind};

/// Walks a token sequence against the FORTLET grammar and reports success
/// or the first structural violation.
///
/// The acceptor proves grammar membership only: no syntax tree is built,
/// no recovery is attempted, and the first mismatch ends the pass. The
/// sequence must be the output of `tokenize`, terminated by `Eof`; trailing
/// tokens after the program's closing `END` are rejected.
pub fn validate(tokens: Vec<Token>) -> Result<(), SyntaxError> {
    // `tokenize` always terminates the stream with EOF; guard hand-built
    // sequences so the cursor never starts out of bounds.
    if tokens.is_empty() {
        return Err(SyntaxError::new(
            1,
            Expected::Kind(TokenKind::Program),
            TokenKind::Eof,
            "",
        ));
    }

    let mut parser = Parser { tokens, current: 0 };
    parser.program()?;
    parser.expect(TokenKind::Eof)?;
    Ok(())
}

/// Single-use validation state: the token sequence plus one cursor,
/// constructed per invocation and discarded on return.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) current: usize,
}

impl Parser {
    /// program := 'PROGRAM' IDENTIFIER statement* 'END'
    fn program(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Program)?;
        self.expect(TokenKind::Identifier)?;
        self.statements()?;
        self.expect(TokenKind::End)?;
        Ok(())
    }
}
