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

//! The streaming driver.
//!
//! [`Parser`] owns a byte source plus the scratch buffers and counters,
//! and drives the `kerf-core` tokenizer once per acquired line. Blocks
//! are yielded as views into the scratch; the scratch is cleared (but not
//! freed) at the start of every [`next_block`](Parser::next_block) call,
//! so iteration runs in O(max line length) steady-state memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use kerf_core::lex::{tokenize_line, WordBuffer};
use kerf_core::{Block, OwnedBlock, ParseError, ParserOptions, Real};

use crate::source::ByteSource;

/// Streaming G-code parser.
///
/// One parser is a stateful cursor over one source; independent parsers
/// are fully independent. All failure modes are explicit [`ParseError`]
/// values and are terminal for the stream.
///
/// # Ephemeral blocks
///
/// The [`Block`] returned by [`next_block`](Self::next_block) borrows the
/// parser, so the borrow checker prevents it from outliving the next
/// iteration. Use [`Block::to_owned`], [`into_blocks`](Self::into_blocks),
/// or [`collect_program`](Self::collect_program) to retain data.
///
/// # Examples
///
/// ```
/// use kerf_stream::Parser;
///
/// fn main() -> Result<(), kerf_stream::ParseError> {
///     let mut parser: Parser = Parser::from_slice(b"N10 G1 X4.5\n(comment)\nN20 G0 Y0\n");
///
///     let first = parser.next_block()?.unwrap();
///     assert_eq!(first.line_number, 1);
///     assert_eq!(first.len(), 3);
///
///     // The comment line yields nothing; the next block is line 3.
///     let second = parser.next_block()?.unwrap();
///     assert_eq!(second.line_number, 3);
///
///     assert!(parser.next_block()?.is_none());
///     assert_eq!(parser.blocks_parsed(), 2);
///     Ok(())
/// }
/// ```
pub struct Parser<'i, F: Real = f64> {
    source: ByteSource<'i>,
    options: ParserOptions,
    line_buffer: Vec<u8>,
    words: WordBuffer<F>,
    bytes_read: u64,
    line_number: u64,
    blocks_parsed: u64,
    last_line_number: Option<u64>,
}

impl<'i, F: Real> Parser<'i, F> {
    fn new(source: ByteSource<'i>, options: ParserOptions) -> Self {
        Self {
            source,
            options,
            line_buffer: Vec::new(),
            words: WordBuffer::new(),
            bytes_read: 0,
            line_number: 0,
            blocks_parsed: 0,
            last_line_number: None,
        }
    }

    /// Parse from a borrowed byte slice.
    pub fn from_slice(input: &'i [u8]) -> Self {
        Self::from_slice_with_options(input, ParserOptions::default())
    }

    /// Parse from a borrowed byte slice with explicit options.
    pub fn from_slice_with_options(input: &'i [u8], options: ParserOptions) -> Self {
        Self::new(ByteSource::from_slice(input), options)
    }

    /// Open and parse a file. The handle is owned by the parser and closed
    /// when it drops.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::from_path_with_options(path, ParserOptions::default())
    }

    /// Open and parse a file with explicit options.
    pub fn from_path_with_options(
        path: impl AsRef<Path>,
        options: ParserOptions,
    ) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self::new(ByteSource::from_file(file), options))
    }

    /// Parse from any byte reader.
    ///
    /// The reader is moved into the parser; pass `&mut reader` to keep
    /// ownership on the caller side (the parser never tears down what it
    /// does not own).
    pub fn from_reader<R: Read + 'i>(reader: R) -> Self {
        Self::from_reader_with_options(reader, ParserOptions::default())
    }

    /// Parse from any byte reader with explicit options.
    pub fn from_reader_with_options<R: Read + 'i>(reader: R, options: ParserOptions) -> Self {
        Self::new(ByteSource::from_reader(reader), options)
    }

    /// The options this parser was created with.
    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Total bytes consumed from the source, delimiters included.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// 1-based index of the most recently acquired line. Readable after an
    /// error for diagnostics.
    #[inline]
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Number of blocks yielded so far.
    #[inline]
    pub fn blocks_parsed(&self) -> u64 {
        self.blocks_parsed
    }

    /// The most recent validated `N` line number, if any.
    #[inline]
    pub fn last_line_number(&self) -> Option<u64> {
        self.last_line_number
    }

    /// Advance to the next non-empty block.
    ///
    /// Returns `Ok(None)` when the source is exhausted. The returned view
    /// is valid until the next call; its word storage is reused.
    pub fn next_block(&mut self) -> Result<Option<Block<'_, F>>, ParseError> {
        loop {
            self.words.clear();
            if self.acquire_line()?.is_none() {
                return Ok(None);
            }
            let produced = tokenize_line(
                &self.line_buffer,
                self.line_number,
                &self.options,
                &mut self.last_line_number,
                &mut self.words,
            )?;
            if !produced {
                continue;
            }
            self.blocks_parsed += 1;
            if let Some(max) = self.options.limits.max_blocks {
                if self.blocks_parsed > max {
                    return Err(ParseError::TooManyBlocks { limit: max });
                }
            }
            return Ok(Some(Block {
                words: self.words.words(),
                line_number: self.line_number,
            }));
        }
    }

    /// Convert into a standard iterator of deep-copied blocks.
    pub fn into_blocks(self) -> Blocks<'i, F> {
        Blocks {
            parser: self,
            done: false,
        }
    }

    /// Read one line into `line_buffer`, enforcing the input-size budget
    /// and the line-length ceiling. Returns `None` at end of input and
    /// whether a delimiter was consumed otherwise.
    fn acquire_line(&mut self) -> Result<Option<bool>, ParseError> {
        self.line_buffer.clear();

        let max_input = self.options.limits.max_input_size;
        if let Some(max) = max_input {
            if self.bytes_read >= max {
                return Err(ParseError::InputTooLarge { limit: max });
            }
        }
        let line_cap = self.options.limits.max_line_length;

        loop {
            let chunk = self.source.fill_buf()?;
            if chunk.is_empty() {
                if self.line_buffer.is_empty() {
                    return Ok(None);
                }
                self.finish_line(false)?;
                return Ok(Some(false));
            }

            let newline = memchr::memchr(b'\n', chunk);
            let content_in_chunk = newline.unwrap_or(chunk.len());
            let total = self.line_buffer.len() + content_in_chunk;

            // A delimiter byte counts against the input budget but not the
            // line ceiling.
            let budget_hit = max_input.filter(|max| {
                let remaining = max - self.bytes_read;
                total as u64 + u64::from(newline.is_some()) > remaining
            });
            let line_hit = line_cap.filter(|cap| total > *cap);
            match (budget_hit, line_hit) {
                (Some(max), Some(cap)) => {
                    return Err(if max - self.bytes_read < cap as u64 {
                        ParseError::InputTooLarge { limit: max }
                    } else {
                        ParseError::LineTooLong {
                            line: self.line_number + 1,
                            limit: cap,
                        }
                    });
                }
                (Some(max), None) => return Err(ParseError::InputTooLarge { limit: max }),
                (None, Some(cap)) => {
                    return Err(ParseError::LineTooLong {
                        line: self.line_number + 1,
                        limit: cap,
                    });
                }
                (None, None) => {}
            }

            self.line_buffer.extend_from_slice(&chunk[..content_in_chunk]);
            let delimited = newline.is_some();
            self.source
                .consume(content_in_chunk + usize::from(delimited));
            if delimited {
                self.finish_line(true)?;
                return Ok(Some(true));
            }
        }
    }

    /// Account for an acquired line and bump the line counter.
    fn finish_line(&mut self, delimited: bool) -> Result<(), ParseError> {
        self.bytes_read += self.line_buffer.len() as u64 + u64::from(delimited);
        self.line_number += 1;
        if let Some(max) = self.options.limits.max_lines {
            if self.line_number > max {
                return Err(ParseError::TooManyLines { limit: max });
            }
        }
        Ok(())
    }
}

/// Iterator of deep-copied blocks, created by [`Parser::into_blocks`].
///
/// Yields `Result` items and fuses after the first error (errors are
/// terminal for the stream).
pub struct Blocks<'i, F: Real = f64> {
    parser: Parser<'i, F>,
    done: bool,
}

impl<'i, F: Real> Blocks<'i, F> {
    /// The underlying parser, for counter access.
    #[inline]
    pub fn parser(&self) -> &Parser<'i, F> {
        &self.parser
    }
}

impl<F: Real> Iterator for Blocks<'_, F> {
    type Item = Result<OwnedBlock<F>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.next_block() {
            Ok(Some(block)) => Some(Ok(block.to_owned())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
