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

//! Streaming G-code parser.
//!
//! This crate drives the `kerf-core` tokenizer over a byte source (a
//! borrowed slice, a file opened from a path, or any [`std::io::Read`]),
//! yielding one [`Block`] per effective source line. Scratch buffers
//! are reused across iterations, so single-pass consumption runs in
//! O(max line length) memory regardless of input size.
//!
//! # Streaming
//!
//! [`Parser::next_block`] returns a view that borrows the parser; it is
//! valid until the next call. This is the zero-copy path:
//!
//! ```
//! use kerf_stream::Parser;
//!
//! fn main() -> Result<(), kerf_stream::ParseError> {
//!     let mut parser: Parser = Parser::from_slice(b"G21\nG1 X4.5 Y-2\n");
//!
//!     let mut words = 0;
//!     while let Some(block) = parser.next_block()? {
//!         words += block.len();
//!     }
//!     assert_eq!(words, 4);
//!     Ok(())
//! }
//! ```
//!
//! # Owned iteration
//!
//! [`Parser::into_blocks`] adapts the parser into a standard iterator of
//! deep-copied [`OwnedBlock`] items:
//!
//! ```
//! use kerf_stream::Parser;
//!
//! let parser: Parser = Parser::from_slice(b"G1 X1\nG1 X2\n");
//! let blocks: Result<Vec<_>, _> = parser.into_blocks().collect();
//! assert_eq!(blocks.unwrap().len(), 2);
//! ```
//!
//! # Batch collection
//!
//! [`parse`] and friends drain the whole stream into a [`Program`] whose
//! word storage is one contiguous buffer:
//!
//! ```
//! let program = kerf_stream::parse(b"N10 G1 X1\nN20 G1 X2\n").unwrap();
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.word_count(), 6);
//! ```
//!
//! # Errors
//!
//! Every failure, from malformed syntax and checksum mismatches to
//! resource-limit breaches and I/O, is a [`ParseError`]. Errors are
//! terminal: discard the
//! parser and start a new one at a known line boundary to resume.

mod batch;
mod parser;
mod source;

pub use batch::{
    parse, parse_path, parse_path_with_options, parse_reader, parse_reader_with_options,
    parse_with_options, Program, ProgramBlocks,
};
pub use parser::{Blocks, Parser};

/// Re-export of the core data model for convenience.
pub use kerf_core::{
    AddressConfig, AddressError, Block, Limits, OwnedBlock, ParseError, ParseResult,
    ParserOptions, ParserOptionsBuilder, Real, Value, Word,
};
