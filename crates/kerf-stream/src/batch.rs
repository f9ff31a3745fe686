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

//! Batch collection: drain a parser into owned storage.
//!
//! [`Program`] is the owned counterpart of streaming iteration: every
//! block's words live in one contiguous buffer and each block records its
//! subrange, so collected data is compact and cache-friendly. The
//! top-level [`parse`] family covers the common call sites.

use std::io::Read;
use std::path::Path;

use kerf_core::{Block, ParseError, ParserOptions, Real, Word};

use crate::parser::Parser;

/// Span of one block inside a [`Program`]'s word buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockSpan {
    start: usize,
    len: usize,
    line_number: u64,
}

/// A fully collected G-code program.
///
/// Produced by [`Parser::collect_program`] or the [`parse`] functions.
/// Blocks are exposed as the same [`Block`] view type the streaming driver
/// yields, borrowed from the program instead of from parser scratch.
///
/// # Examples
///
/// ```
/// let program = kerf_stream::parse(b"G21\nG1 X4.5 Y-2\n").unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program.word_count(), 4);
///
/// let motion = program.get(1).unwrap();
/// assert_eq!(motion.line_number, 2);
/// assert_eq!(motion.words[1].value.as_number(), Some(4.5));
///
/// // Every block's words are a subrange of one contiguous buffer.
/// let total: usize = program.iter().map(|b| b.len()).sum();
/// assert_eq!(total, program.words().len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Program<F: Real = f64> {
    spans: Vec<BlockSpan>,
    words: Vec<Word<F>>,
}

impl<F: Real> Program<F> {
    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the program has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of words across all blocks.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The contiguous word buffer backing all blocks.
    #[inline]
    pub fn words(&self) -> &[Word<F>] {
        &self.words
    }

    /// The block at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Block<'_, F>> {
        self.spans.get(index).map(|span| Block {
            words: &self.words[span.start..span.start + span.len],
            line_number: span.line_number,
        })
    }

    /// Iterate the blocks in source order.
    pub fn iter(&self) -> ProgramBlocks<'_, F> {
        ProgramBlocks {
            program: self,
            index: 0,
        }
    }
}

impl<'a, F: Real> IntoIterator for &'a Program<F> {
    type Item = Block<'a, F>;
    type IntoIter = ProgramBlocks<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Program`]'s blocks.
pub struct ProgramBlocks<'a, F: Real = f64> {
    program: &'a Program<F>,
    index: usize,
}

impl<'a, F: Real> Iterator for ProgramBlocks<'a, F> {
    type Item = Block<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.program.get(self.index)?;
        self.index += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.program.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<F: Real> ExactSizeIterator for ProgramBlocks<'_, F> {}

impl<'i, F: Real> Parser<'i, F> {
    /// Drain the stream into a [`Program`].
    ///
    /// Capacity is pre-allocated from the limit hints to reduce
    /// reallocation during collection. On error all partially collected
    /// state is dropped and the error propagates.
    pub fn collect_program(mut self) -> Result<Program<F>, ParseError> {
        let limits = &self.options().limits;
        let block_hint = limits.max_blocks.map_or(1000, |max| max.min(1000)) as usize;
        let word_hint = block_hint.saturating_mul(limits.max_words_per_block.unwrap_or(50));

        let mut spans = Vec::with_capacity(block_hint);
        let mut words = Vec::with_capacity(word_hint);
        loop {
            let Some(block) = self.next_block()? else {
                break;
            };
            let start = words.len();
            words.extend_from_slice(block.words);
            spans.push(BlockSpan {
                start,
                len: block.words.len(),
                line_number: block.line_number,
            });
        }
        Ok(Program { spans, words })
    }
}

/// Parse a byte slice with default options.
pub fn parse(input: &[u8]) -> Result<Program, ParseError> {
    Parser::from_slice(input).collect_program()
}

/// Parse a byte slice with explicit options.
pub fn parse_with_options(input: &[u8], options: ParserOptions) -> Result<Program, ParseError> {
    Parser::from_slice_with_options(input, options).collect_program()
}

/// Open and parse a file with default options.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Program, ParseError> {
    Parser::from_path(path)?.collect_program()
}

/// Open and parse a file with explicit options.
pub fn parse_path_with_options(
    path: impl AsRef<Path>,
    options: ParserOptions,
) -> Result<Program, ParseError> {
    Parser::from_path_with_options(path, options)?.collect_program()
}

/// Parse from any byte reader with default options.
pub fn parse_reader<R: Read>(reader: R) -> Result<Program, ParseError> {
    Parser::from_reader(reader).collect_program()
}

/// Parse from any byte reader with explicit options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParserOptions,
) -> Result<Program, ParseError> {
    Parser::from_reader_with_options(reader, options).collect_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerf_core::{Limits, Value};

    // ==================== Collection tests ====================

    #[test]
    fn test_collect_simple_program() {
        let program = parse(b"N10 G1 X1\nN20 G1 X2\n").unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program.word_count(), 6);
        assert_eq!(program.get(0).unwrap().line_number, 1);
        assert_eq!(program.get(1).unwrap().line_number, 2);
    }

    #[test]
    fn test_empty_program() {
        let program = parse(b"(nothing here)\n\n").unwrap();
        assert!(program.is_empty());
        assert_eq!(program.word_count(), 0);
        assert!(program.get(0).is_none());
    }

    #[test]
    fn test_word_buffer_is_contiguous() {
        let program = parse(b"G1 X1\nG2 X2 Y2\nG3\n").unwrap();
        let mut offset = 0;
        for block in &program {
            let from_buffer = &program.words()[offset..offset + block.len()];
            assert_eq!(from_buffer, block.words);
            offset += block.len();
        }
        assert_eq!(offset, program.word_count());
    }

    #[test]
    fn test_string_payloads_survive_collection() {
        let program = parse(b"P\"one\"\nP\"two\"\n").unwrap();
        assert_eq!(
            program.get(0).unwrap().words[0].value,
            Value::String(b"one".to_vec())
        );
        assert_eq!(
            program.get(1).unwrap().words[0].value,
            Value::String(b"two".to_vec())
        );
    }

    #[test]
    fn test_error_propagates_from_collection() {
        let err = parse(b"G1 X1\nG1 X1.2.3\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_options_respected() {
        let options = ParserOptions::builder()
            .limits(Limits {
                max_blocks: Some(1),
                ..Limits::unlimited()
            })
            .build();
        assert!(matches!(
            parse_with_options(b"G1\nG2\n", options),
            Err(ParseError::TooManyBlocks { limit: 1 })
        ));
    }

    // ==================== Iterator tests ====================

    #[test]
    fn test_iter_matches_get() {
        let program = parse(b"G1 X1\nG2 X2\nG3 X3\n").unwrap();
        let via_iter: Vec<u64> = program.iter().map(|b| b.line_number).collect();
        let via_get: Vec<u64> = (0..program.len())
            .map(|i| program.get(i).unwrap().line_number)
            .collect();
        assert_eq!(via_iter, via_get);
    }

    #[test]
    fn test_iter_is_exact_size() {
        let program = parse(b"G1\nG2\nG3\n").unwrap();
        let mut iter = program.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    // ==================== Reader collection tests ====================

    #[test]
    fn test_parse_reader() {
        let cursor = std::io::Cursor::new(b"G1 X1\n".to_vec());
        let program = parse_reader(cursor).unwrap();
        assert_eq!(program.len(), 1);
    }
}
