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

//! Byte sources for the streaming driver.
//!
//! A source is a tagged variant over the three supported producers. Slices
//! are walked with an internal cursor; files and readers are wrapped in a
//! `BufReader` so per-byte scanning is amortized over buffered chunks.
//! A file opened by the parser is closed when the source drops; a
//! caller-supplied reader is dropped but never otherwise torn down, so
//! callers that want their reader back pass `&mut r` (any `&mut R: Read`
//! is itself a reader).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

pub(crate) enum ByteSource<'i> {
    Slice { data: &'i [u8], pos: usize },
    File(BufReader<File>),
    Reader(BufReader<Box<dyn Read + 'i>>),
}

impl<'i> ByteSource<'i> {
    pub(crate) fn from_slice(data: &'i [u8]) -> Self {
        Self::Slice { data, pos: 0 }
    }

    pub(crate) fn from_file(file: File) -> Self {
        Self::File(BufReader::new(file))
    }

    pub(crate) fn from_reader<R: Read + 'i>(reader: R) -> Self {
        Self::Reader(BufReader::new(Box::new(reader)))
    }

    /// The current buffered chunk; empty means end of input.
    pub(crate) fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Slice { data, pos } => Ok(&data[*pos..]),
            Self::File(reader) => reader.fill_buf(),
            Self::Reader(reader) => reader.fill_buf(),
        }
    }

    /// Mark `amount` bytes of the current chunk as consumed.
    pub(crate) fn consume(&mut self, amount: usize) {
        match self {
            Self::Slice { data, pos } => *pos = (*pos + amount).min(data.len()),
            Self::File(reader) => reader.consume(amount),
            Self::Reader(reader) => reader.consume(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_slice_cursor() {
        let mut source = ByteSource::from_slice(b"abcdef");
        assert_eq!(source.fill_buf().unwrap(), b"abcdef");
        source.consume(2);
        assert_eq!(source.fill_buf().unwrap(), b"cdef");
        source.consume(4);
        assert_eq!(source.fill_buf().unwrap(), b"");
    }

    #[test]
    fn test_slice_consume_clamped() {
        let mut source = ByteSource::from_slice(b"ab");
        source.consume(10);
        assert_eq!(source.fill_buf().unwrap(), b"");
    }

    #[test]
    fn test_reader_buffers_chunks() {
        let mut source = ByteSource::from_reader(Cursor::new(b"hello".to_vec()));
        let chunk = source.fill_buf().unwrap();
        assert_eq!(chunk, b"hello");
        source.consume(5);
        assert_eq!(source.fill_buf().unwrap(), b"");
    }

    #[test]
    fn test_borrowed_reader_survives() {
        let mut cursor = Cursor::new(b"data".to_vec());
        {
            let mut source = ByteSource::from_reader(&mut cursor);
            source.fill_buf().unwrap();
            source.consume(4);
        }
        // The caller still owns the cursor after the source is gone.
        assert_eq!(cursor.position(), 4);
    }
}
