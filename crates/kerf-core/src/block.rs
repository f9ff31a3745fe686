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

//! Blocks: one effective line of G-code.
//!
//! The streaming driver yields [`Block`] views into scratch storage that
//! is reused on the next iteration; the borrow checker ties each view to
//! the parser borrow, so a stale view cannot outlive its data. Callers
//! that need to retain a block call [`Block::to_owned`].

use std::fmt;

use crate::value::{Real, Word};

/// A borrowed view of one tokenized block.
///
/// Emitted blocks are never empty: lines that produce no words produce no
/// block either. `line_number` is the 1-based index of the source line the
/// block came from.
///
/// # Examples
///
/// ```
/// use kerf_core::{Block, Word};
///
/// let words = vec![Word::number(b'G', 1.0), Word::number(b'X', 4.5)];
/// let block = Block { words: &words, line_number: 3 };
/// assert_eq!(block.len(), 2);
/// assert_eq!(block.to_string(), "G1 X4.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'a, F: Real = f64> {
    /// The block's words, in source order.
    pub words: &'a [Word<F>],
    /// 1-based source line number.
    pub line_number: u64,
}

impl<'a, F: Real> Block<'a, F> {
    /// Number of words in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Emitted blocks are never empty; this exists for slice-like
    /// completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the block's words.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, Word<F>> {
        self.words.iter()
    }

    /// Deep-copy the block, duplicating every word and string payload.
    pub fn to_owned(&self) -> OwnedBlock<F> {
        OwnedBlock {
            words: self.words.to_vec(),
            line_number: self.line_number,
        }
    }
}

impl<'a, 'b, F: Real> IntoIterator for &'b Block<'a, F> {
    type Item = &'a Word<F>;
    type IntoIter = std::slice::Iter<'a, Word<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl<F: Real> fmt::Display for Block<'_, F> {
    /// Renders the canonical single-line form: words separated by single
    /// spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// An owned block, produced by [`Block::to_owned`] or the owned-block
/// iterator of the streaming driver.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedBlock<F: Real = f64> {
    /// The block's words, in source order.
    pub words: Vec<Word<F>>,
    /// 1-based source line number.
    pub line_number: u64,
}

impl<F: Real> OwnedBlock<F> {
    /// Borrow the owned block as a [`Block`] view.
    #[inline]
    pub fn as_block(&self) -> Block<'_, F> {
        Block {
            words: &self.words,
            line_number: self.line_number,
        }
    }
}

impl<F: Real> fmt::Display for OwnedBlock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_block().fmt(f)
    }
}
