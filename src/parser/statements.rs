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
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Zero or more statements, driven purely by lookahead: the loop ends
    /// when `END` or `EOF` comes up, never by a count. The caller decides
    /// which terminator it actually requires.
    pub(crate) fn statements(&mut self) -> Result<(), SyntaxError> {
        while !self.check(TokenKind::End) && !self.is_at_end() {
            self.statement()?;
        }
        Ok(())
    }

    /// statement := var_decl | assignment | print_stmt | if_stmt
    ///
    /// Dispatch is decided by the kind of the lookahead token alone; any
    /// kind outside the dispatch set is a syntax error naming the
    /// unexpected token.
    pub(crate) fn statement(&mut self) -> Result<(), SyntaxError> {
        match self.peek().kind {
            TokenKind::Integer | TokenKind::Real => self.var_decl(),
            TokenKind::Identifier => self.assignment(),
            TokenKind::Print => self.print_stmt(),
            TokenKind::If => self.if_stmt(),
            _ => {
                let found = self.peek();
                Err(SyntaxError::new(
                    found.line,
                    Expected::Statement,
                    found.kind,
                    found.lexeme.clone(),
                ))
            }
        }
    }

    /// var_decl := ('INTEGER' | 'REAL') IDENTIFIER
    fn var_decl(&mut self) -> Result<(), SyntaxError> {
        if self.check(TokenKind::Integer) {
            self.expect(TokenKind::Integer)?;
        } else {
            self.expect(TokenKind::Real)?;
        }
        self.expect(TokenKind::Identifier)?;
        Ok(())
    }

    /// assignment := IDENTIFIER '=' (NUMBER | IDENTIFIER)
    ///
    /// The right-hand side is a single literal or a single name; there is
    /// no expression grammar in this dialect.
    fn assignment(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        if self.check(TokenKind::Number) {
            self.expect(TokenKind::Number)?;
        } else {
            self.expect(TokenKind::Identifier)?;
        }
        Ok(())
    }

    /// print_stmt := 'PRINT' '*' ',' IDENTIFIER
    fn print_stmt(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::Operator)?; // the '*'
        self.expect(TokenKind::Comma)?;
        self.expect(TokenKind::Identifier)?;
        Ok(())
    }

    /// if_stmt := 'IF' '(' IDENTIFIER ')' 'THEN' statement 'END' 'IF'
    ///
    /// The closing `END IF` pair belongs to this rule and is consumed in
    /// full before it returns; the `END` that terminates the program is
    /// the caller's. The body is exactly one nested statement.
    fn if_stmt(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::Operator)?; // '('
        self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Operator)?; // ')'
        self.expect(TokenKind::Then)
            .map_err(|e| e.with_help("every IF (...) condition must be followed by THEN"))?;
        self.statement()?;
        self.expect(TokenKind::End)?;
        self.expect(TokenKind::If)?;
        Ok(())
    }
}
