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

//! Trailing `*nnn` checksum verification.
//!
//! Serial G-code senders append `*` plus the decimal XOR of every byte on
//! the line before the `*`. Verification runs as a pre-pass over the raw
//! line; tokenization then sees only the prefix before the marker.

use crate::error::ParseError;

/// Verify a trailing checksum if present, returning the line prefix to
/// tokenize.
///
/// The *last* `*` on the line is the marker. The 1 to 3 decimal digits
/// after it are the provided checksum; only ASCII whitespace may follow
/// them (CRLF input leaves a CR on the line). Anything else, zero digits,
/// more than 3 digits, or a value over 255 is `InvalidChecksum`; a
/// well-formed value that differs from the computed XOR is
/// `ChecksumMismatch`.
pub(super) fn split_checksum(line: &[u8], line_number: u64) -> Result<&[u8], ParseError> {
    let Some(star) = memchr::memrchr(b'*', line) else {
        return Ok(line);
    };

    let computed = line[..star].iter().fold(0u8, |acc, &b| acc ^ b);

    let tail = &line[star + 1..];
    let digit_count = tail.iter().take_while(|b| b.is_ascii_digit()).count();
    let (digits, rest) = tail.split_at(digit_count);
    if digits.is_empty() || digits.len() > 3 {
        return Err(ParseError::InvalidChecksum { line: line_number });
    }
    if !rest.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r')) {
        return Err(ParseError::InvalidChecksum { line: line_number });
    }

    let expected = std::str::from_utf8(digits)
        .ok()
        .and_then(|text| text.parse::<u8>().ok())
        .ok_or(ParseError::InvalidChecksum { line: line_number })?;

    if expected != computed {
        return Err(ParseError::ChecksumMismatch {
            line: line_number,
            expected,
            computed,
        });
    }
    Ok(&line[..star])
}
