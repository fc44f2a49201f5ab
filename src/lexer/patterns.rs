/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * File:      patterns.rs
 * Purpose:   Defines the complete lexical vocabulary of the FORTLET
 *            dialect as a priority-ordered table of regex patterns.
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

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::token::TokenKind;

/// What the scanner does with a span claimed by a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternClass {
    /// A `--` comment running to the end of its line; discarded.
    Comment,

    /// A run of blanks, tabs, carriage returns and newlines; discarded,
    /// but its newline count drives the scanner's line counter.
    Whitespace,

    /// Materialized into a token of the given kind.
    Emit(TokenKind),

    /// The trailing catch-all; a position claimed by it holds a character
    /// the language does not know, which is a lexical error.
    Reject,
}

/// One entry of the lexical vocabulary: a pattern class paired with its
/// compiled, position-anchored regex.
pub struct LexPattern {
    pub class: PatternClass,
    pub regex: Regex,
}

lazy_static! {
    /// The lexical vocabulary of the FORTLET dialect, in priority order.
    ///
    /// The scanner tries these patterns at each position, in table order,
    /// and the first match wins. Two ordering rules are load-bearing:
    ///
    /// - Reserved words are listed before the generic identifier pattern,
    ///   and each carries a trailing word boundary so it only claims
    ///   whole words. `PROGRAM` therefore lexes as a reserved word while
    ///   `PROGRAMX` falls through to the identifier pattern as one name.
    /// - The catch-all sits last and matches any single remaining
    ///   character, making the scan total: every position is claimed by
    ///   exactly one pattern, and a position claimed by the catch-all is
    ///   a lexical error rather than a token.
    ///
    /// Patterns are matched against case-folded (uppercased) text, so the
    /// identifier pattern only needs the uppercase alphabet.
    pub static ref PATTERNS: Vec<LexPattern> = vec![
        pattern(PatternClass::Comment, r"^--[^\n]*"),
        pattern(PatternClass::Whitespace, r"^[ \t\r\n]+"),
        pattern(PatternClass::Emit(TokenKind::Number), r"^[0-9]+(\.[0-9]*)?"),
        pattern(PatternClass::Emit(TokenKind::Assign), r"^="),
        pattern(PatternClass::Emit(TokenKind::Operator), r"^[+\-*/()]"),
        pattern(PatternClass::Emit(TokenKind::Print), r"^PRINT\b"),
        pattern(PatternClass::Emit(TokenKind::Program), r"^PROGRAM\b"),
        pattern(PatternClass::Emit(TokenKind::Integer), r"^INTEGER\b"),
        pattern(PatternClass::Emit(TokenKind::Real), r"^REAL\b"),
        pattern(PatternClass::Emit(TokenKind::If), r"^IF\b"),
        pattern(PatternClass::Emit(TokenKind::Then), r"^THEN\b"),
        pattern(PatternClass::Emit(TokenKind::End), r"^END\b"),
        pattern(PatternClass::Emit(TokenKind::Comma), r"^,"),
        pattern(PatternClass::Emit(TokenKind::Identifier), r"^[A-Z][A-Z0-9_]*"),
        pattern(PatternClass::Reject, r"(?s)^."),
    ];
}

fn pattern(class: PatternClass, source: &str) -> LexPattern {
    LexPattern {
        class,
        // Every pattern in the table is a fixed literal above; compilation
        // cannot fail for user input.
        regex: Regex::new(source).expect("lexical pattern must compile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_only_claim_whole_words() {
        let program = PATTERNS
            .iter()
            .find(|p| p.class == PatternClass::Emit(TokenKind::Program))
            .unwrap();

        assert_eq!(program.regex.find("PROGRAM DEMO").unwrap().as_str(), "PROGRAM");
        assert!(program.regex.find("PROGRAMX").is_none());
    }

    #[test]
    fn every_position_is_claimed_by_some_pattern() {
        for text in ["@", "\u{7}", "X", "9", "\n", "?"] {
            assert!(
                PATTERNS.iter().any(|p| p.regex.is_match(text)),
                "no pattern claimed {:?}",
                text
            );
        }
    }

    #[test]
    fn catch_all_is_last() {
        assert_eq!(PATTERNS.last().unwrap().class, PatternClass::Reject);
    }
}
