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

use crate::error::LexicalError;
use crate::lexer::patterns::{PatternClass, PATTERNS};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Converts raw source text into a complete token sequence, or the first
/// lexical error.
///
/// The dialect is case-insensitive; the input is folded to uppercase
/// before scanning, so `program`, `Program` and `PROGRAM` produce the
/// identical reserved-word token. On success the returned sequence always
/// ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

/// Single-use scanning state, constructed per invocation and discarded
/// on return.
pub struct Lexer {
    /// Case-folded source text.
    source: String,

    /// Byte offset of the next unscanned position.
    current: usize,

    /// 1-based line of the current position.
    line: usize,

    /// Byte offset where the current line begins, for error columns.
    line_start: usize,

    /// Completed output, in source order.
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a scanner over the given source text with the cursor at
    /// position 0, the line counter at 1 and an empty output buffer.
    ///
    /// Folding happens here, before any scanning or line counting, so the
    /// folded text is what every pattern sees.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_ascii_uppercase(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs the complete single forward pass over the source.
    ///
    /// Scans one token at a time until the input is exhausted, then
    /// appends the terminating `Eof` marker. Stops at the first character
    /// no pattern other than the catch-all claims; in that case no token
    /// sequence survives.
    pub fn scan_tokens(&mut self) -> Result<(), LexicalError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line: self.line,
        });

        Ok(())
    }

    /// Claims the span at the current position using the first matching
    /// pattern of the table and advances past it.
    fn scan_token(&mut self) -> Result<(), LexicalError> {
        let rest = &self.source[self.current..];

        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(rest) {
                Some(m) => m,
                None => continue,
            };

            let text = matched.as_str();

            match pattern.class {
                PatternClass::Comment => {}

                PatternClass::Whitespace => {
                    for (offset, ch) in text.char_indices() {
                        if ch == '\n' {
                            self.line += 1;
                            self.line_start = self.current + offset + 1;
                        }
                    }
                }

                PatternClass::Emit(kind) => self.tokens.push(Token {
                    kind,
                    lexeme: text.to_string(),
                    line: self.line,
                }),

                PatternClass::Reject => return Err(self.reject(text)),
            }

            self.current += matched.end();
            return Ok(());
        }

        // The catch-all keeps the table total, so no position reaches this
        // point; treat it like a rejected character rather than panicking.
        let rest = self.source[self.current..].to_string();
        Err(self.reject(&rest))
    }

    fn reject(&self, text: &str) -> LexicalError {
        let character = text.chars().next().unwrap_or('\0');
        LexicalError::new(
            Span::new(self.line, self.current - self.line_start),
            character,
        )
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
