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

//! Error types for G-code parsing.
//!
//! All tokenizer and driver failures are surfaced as [`ParseError`]. Every
//! error that originates from a specific source line carries its 1-based
//! line number; use [`ParseError::line`] to extract it uniformly.
//!
//! Errors are terminal for the stream: once a parser has returned an error
//! it should be discarded. G-code is a directive language, so a hard stop
//! is preferable to mid-stream misinterpretation. Callers that want to
//! resume can start a fresh parser at a known line boundary.

use thiserror::Error;

/// Errors that can occur while tokenizing or streaming G-code.
///
/// # Examples
///
/// ```
/// use kerf_core::ParseError;
///
/// let err = ParseError::UnclosedComment { line: 12 };
/// assert_eq!(err.line(), Some(12));
/// assert!(err.to_string().contains("line 12"));
/// ```
#[derive(Error, Debug)]
pub enum ParseError {
    /// An address letter with no value, e.g. a bare `G` at end of line.
    #[error("empty value for word '{letter}' at line {line}")]
    EmptyValue { line: u64, letter: char },

    /// A value that is not a valid decimal number. Scientific notation is
    /// rejected.
    #[error("invalid number '{text}' at line {line}")]
    InvalidNumber { line: u64, text: String },

    /// A `(` comment left open at end of line (strict mode).
    #[error("unclosed comment at line {line}")]
    UnclosedComment { line: u64 },

    /// A `"` string left open at end of line.
    #[error("unclosed string at line {line}")]
    UnclosedString { line: u64 },

    /// A byte the tokenizer does not understand in its current state.
    #[error("unexpected character 0x{byte:02x} at line {line}")]
    UnexpectedCharacter { line: u64, byte: u8 },

    /// Total input exceeded `max_input_size`.
    #[error("input exceeds maximum size of {limit} bytes")]
    InputTooLarge { limit: u64 },

    /// The byte source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Emitted block count exceeded `max_blocks`.
    #[error("block count exceeds maximum of {limit}")]
    TooManyBlocks { limit: u64 },

    /// Delimited line count exceeded `max_lines`.
    #[error("line count exceeds maximum of {limit}")]
    TooManyLines { limit: u64 },

    /// A single line exceeded `max_line_length` before its newline.
    #[error("line {line} exceeds maximum length of {limit} bytes")]
    LineTooLong { line: u64, limit: usize },

    /// A single block exceeded `max_words_per_block`.
    #[error("block at line {line} exceeds maximum of {limit} words")]
    BlockTooLarge { line: u64, limit: usize },

    /// The provided `*nnn` checksum does not match the computed XOR.
    #[error("checksum mismatch at line {line}: expected {expected}, computed {computed}")]
    ChecksumMismatch {
        line: u64,
        expected: u8,
        computed: u8,
    },

    /// The `*nnn` checksum suffix is malformed.
    #[error("malformed checksum at line {line}")]
    InvalidChecksum { line: u64 },

    /// An `N` word violated line-number validation.
    #[error("invalid line number at line {line}: {message}")]
    InvalidLineNumber { line: u64, message: String },
}

impl ParseError {
    /// The 1-based source line the error refers to, if any.
    ///
    /// Stream-level failures (`InputTooLarge`, `Io`, `TooManyBlocks`,
    /// `TooManyLines`) are not tied to a single line and return `None`.
    #[inline]
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::EmptyValue { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnclosedComment { line }
            | Self::UnclosedString { line }
            | Self::UnexpectedCharacter { line, .. }
            | Self::LineTooLong { line, .. }
            | Self::BlockTooLarge { line, .. }
            | Self::ChecksumMismatch { line, .. }
            | Self::InvalidChecksum { line }
            | Self::InvalidLineNumber { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Create an `InvalidLineNumber` error.
    #[inline]
    pub(crate) fn invalid_line_number(line: u64, message: impl Into<String>) -> Self {
        Self::InvalidLineNumber {
            line,
            message: message.into(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
