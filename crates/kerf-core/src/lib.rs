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

//! Core tokenizer and data model for the Kerf G-code parser.
//!
//! This crate provides everything below the I/O layer:
//!
//! - [`Word`], [`Value`], [`Block`], and [`OwnedBlock`]: the data model
//!   for tokenized G-code
//! - [`AddressConfig`]: dialect configuration for accepted address letters
//! - [`Limits`] and [`ParserOptions`]: resource ceilings and behavioral
//!   toggles
//! - [`lex`]: the line tokenizer state machine
//! - [`ParseError`]: the error taxonomy shared with the streaming layer
//!
//! Most applications should use the streaming driver in `kerf-stream`
//! instead of calling the tokenizer directly; the [`lex`] module is exposed
//! for advanced use cases such as tokenizing lines acquired by foreign I/O
//! stacks.
//!
//! # Example
//!
//! ```
//! use kerf_core::lex::{tokenize_line, WordBuffer};
//! use kerf_core::{ParserOptions, Value};
//!
//! let options = ParserOptions::default();
//! let mut words = WordBuffer::new();
//! let mut last_line_number = None;
//!
//! let produced =
//!     tokenize_line(b"G1 X4.5", 1, &options, &mut last_line_number, &mut words).unwrap();
//!
//! assert!(produced);
//! assert_eq!(words.words().len(), 2);
//! assert_eq!(words.words()[0].letter, b'G');
//! assert_eq!(words.words()[1].value, Value::Number(4.5));
//! ```

pub mod lex;

mod address;
mod block;
mod error;
mod limits;
mod options;
mod value;

pub use address::{AddressConfig, AddressError};
pub use block::{Block, OwnedBlock};
pub use error::{ParseError, ParseResult};
pub use lex::{tokenize_line, WordBuffer};
pub use limits::Limits;
pub use options::{ParserOptions, ParserOptionsBuilder};
pub use value::{Real, Value, Word};
