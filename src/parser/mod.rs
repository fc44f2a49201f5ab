/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the FORTLET recursive-descent acceptor.
 *
 * This module wires together all acceptor sub-modules, including:
 *   - Core acceptor control logic
 *   - Statement-rule procedures
 *   - Shared cursor helpers
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

/// Core acceptor orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `validate(tokens)` entry point
/// - The `program` rule
pub mod parser;

/// Statement-level rules:
/// - variable declarations
/// - assignment
/// - PRINT
/// - IF ... THEN ... END IF
pub mod statements;

/// Shared cursor helpers:
/// - single-token lookahead (`peek`)
/// - kind checks and consumption (`check`, `expect`, `advance`)
pub mod helpers;

/// Re-export the public validation entry point so callers can use:
/// `crate::parser::validate(...)`
pub use parser::validate;
