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
use crate::parser::parser::Parser;

impl Parser {
    /// The token under the cursor, without advancing.
    pub(crate) fn peek(&self) -> &Token {
        // The sequence always carries a terminating EOF; clamping keeps
        // lookahead valid even past it.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Consumes and returns the current token if it has the requested
    /// kind; otherwise reports the mismatch against that token's line.
    /// The failure is fatal to the whole pass.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let found = self.peek();
            Err(SyntaxError::new(
                found.line,
                Expected::Kind(kind),
                found.kind,
                found.lexeme.clone(),
            ))
        }
    }

    /// Checks the current token's kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes and returns the current token unconditionally.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    /// True once the cursor rests on the terminating `EOF`.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}
