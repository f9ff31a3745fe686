// Kerf - Streaming G-code Parser
//
// Copyright (c) 2025 Kerf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resource limits for G-code parsing.
//!
//! These limits bound the resources a parser may consume, protecting
//! against malformed or hostile input (a multi-gigabyte "line" with no
//! newline, a block with thousands of words, an endless stream). Every
//! ceiling is optional; `None` means unbounded.

/// Configurable resource ceilings.
///
/// # Examples
///
/// ```
/// use kerf_core::Limits;
///
/// // Defaults suit trusted CAM output.
/// let limits = Limits::default();
/// assert_eq!(limits.max_input_size, Some(100 * 1024 * 1024));
///
/// // Tighter ceilings for untrusted uploads.
/// let strict = Limits::strict();
/// assert_eq!(strict.max_line_length, Some(4 * 1024));
///
/// // Or no ceilings at all.
/// let unlimited = Limits::unlimited();
/// assert_eq!(unlimited.max_blocks, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total bytes consumed from the source (default: 100 MiB).
    pub max_input_size: Option<u64>,
    /// Maximum number of emitted blocks (default: 10,000,000).
    pub max_blocks: Option<u64>,
    /// Maximum words in a single block (default: 50).
    pub max_words_per_block: Option<usize>,
    /// Maximum bytes in a single line (default: 256 KiB). The trailing
    /// delimiter does not count against this ceiling, only against
    /// `max_input_size`.
    pub max_line_length: Option<usize>,
    /// Maximum number of delimited lines (default: 5,000,000).
    pub max_lines: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: Some(100 * 1024 * 1024), // 100 MiB
            max_blocks: Some(10_000_000),
            max_words_per_block: Some(50),
            max_line_length: Some(256 * 1024), // 256 KiB
            max_lines: Some(5_000_000),
        }
    }
}

impl Limits {
    /// No ceilings at all. Appropriate only for trusted input.
    pub fn unlimited() -> Self {
        Self {
            max_input_size: None,
            max_blocks: None,
            max_words_per_block: None,
            max_line_length: None,
            max_lines: None,
        }
    }

    /// Conservative ceilings for untrusted input.
    pub fn strict() -> Self {
        Self {
            max_input_size: Some(10 * 1024 * 1024), // 10 MiB
            max_blocks: Some(1_000_000),
            max_words_per_block: Some(25),
            max_line_length: Some(4 * 1024), // 4 KiB
            max_lines: Some(500_000),
        }
    }
}
