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

/// A precise source location used in error values and diagnostics.
///
/// Tokens themselves only carry a line number; the full `Span` is produced
/// where the scanner knows the exact offset, such as at the point of a
/// lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 0-based byte offset within that line.
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
