/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the FORTLET scanner.
 *
 * This module wires together all scanner sub-modules, including:
 *   - Token and token-kind definitions
 *   - The priority-ordered lexical pattern table
 *   - The scanning loop itself
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

/// Token definitions:
/// - `TokenKind`, the closed set of lexical categories
/// - `Token`, a classified, line-tagged span of source text
pub mod token;

/// The lexical vocabulary:
/// - one regex per pattern, in priority order
/// - reserved words before identifiers, catch-all last
pub mod patterns;

/// The scanner:
/// - case folding, the single forward pass, line counting
/// - the `tokenize(source)` entry point
pub mod lexer;

/// Re-export the public scanning entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::tokenize;
pub use token::{Token, TokenKind};
