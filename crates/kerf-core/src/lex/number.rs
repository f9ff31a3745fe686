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

//! Numeric literal finalization and `N` line-number validation.
//!
//! The state machine delimits a numeric literal as a run of digits, dots,
//! and signs; this module turns that byte run into a value. Accepted
//! forms: optional leading sign, optional integer digits, optional decimal
//! point with fractional digits (`4`, `-2`, `.5`, `1.`, `+0.25`).
//! Scientific notation is rejected by contract even though exponent
//! markers cannot normally reach the literal (an `e` terminates it).

use crate::error::ParseError;
use crate::options::ParserOptions;
use crate::value::Real;

/// Finalize the numeric literal `raw` for the word `letter`.
///
/// Applies line-number validation when the letter is `N`/`n` and the
/// options ask for it, updating `last_line_number` on success.
pub(super) fn finish_number<F: Real>(
    raw: &[u8],
    letter: u8,
    line_number: u64,
    options: &ParserOptions,
    last_line_number: &mut Option<u64>,
) -> Result<F, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::EmptyValue {
            line: line_number,
            letter: char::from(letter),
        });
    }
    if raw.iter().any(|&b| b == b'e' || b == b'E') {
        return Err(invalid_number(raw, line_number));
    }

    let text = std::str::from_utf8(raw).map_err(|_| invalid_number(raw, line_number))?;
    let value: F = text.parse().map_err(|_| invalid_number(raw, line_number))?;

    if options.validate_line_numbers && letter.eq_ignore_ascii_case(&b'N') {
        let sequence = validate_line_number(value.to_f64(), line_number, *last_line_number)?;
        *last_line_number = Some(sequence);
    }
    Ok(value)
}

fn validate_line_number(value: f64, line: u64, last: Option<u64>) -> Result<u64, ParseError> {
    if value < 0.0 {
        return Err(ParseError::invalid_line_number(
            line,
            format!("line number {} is negative", value),
        ));
    }
    if value.fract() != 0.0 {
        return Err(ParseError::invalid_line_number(
            line,
            format!("line number {} is not an integer", value),
        ));
    }
    if value > u64::MAX as f64 {
        return Err(ParseError::invalid_line_number(
            line,
            format!("line number {} is out of range", value),
        ));
    }
    let sequence = value as u64;
    if let Some(last) = last {
        if sequence <= last {
            return Err(ParseError::invalid_line_number(
                line,
                format!("line number {} does not increase past {}", sequence, last),
            ));
        }
    }
    Ok(sequence)
}

fn invalid_number(raw: &[u8], line: u64) -> ParseError {
    ParseError::InvalidNumber {
        line,
        text: String::from_utf8_lossy(raw).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(raw: &[u8]) -> Result<f64, ParseError> {
        let options = ParserOptions::default();
        let mut last = None;
        finish_number(raw, b'X', 1, &options, &mut last)
    }

    // ==================== Accepted form tests ====================

    #[test]
    fn test_plain_forms() {
        assert_eq!(finish(b"4").unwrap(), 4.0);
        assert_eq!(finish(b"-2").unwrap(), -2.0);
        assert_eq!(finish(b"+7").unwrap(), 7.0);
        assert_eq!(finish(b"0").unwrap(), 0.0);
    }

    #[test]
    fn test_fractional_forms() {
        assert_eq!(finish(b".5").unwrap(), 0.5);
        assert_eq!(finish(b"-.25").unwrap(), -0.25);
        assert_eq!(finish(b"1.").unwrap(), 1.0);
        assert_eq!(finish(b"3.1415").unwrap(), 3.1415);
    }

    // ==================== Rejected form tests ====================

    #[test]
    fn test_empty_is_empty_value() {
        assert!(matches!(
            finish(b""),
            Err(ParseError::EmptyValue { letter: 'X', .. })
        ));
    }

    #[test]
    fn test_exponent_markers_rejected() {
        assert!(matches!(
            finish(b"1e5"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            finish(b"1E5"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        for raw in [&b"+"[..], b"-", b".", b"+-1", b"1.2.3", b"1-2"] {
            assert!(
                matches!(finish(raw), Err(ParseError::InvalidNumber { .. })),
                "{:?} should be rejected",
                String::from_utf8_lossy(raw)
            );
        }
    }

    // ==================== Line number validation tests ====================

    fn finish_n(raw: &[u8], last: &mut Option<u64>) -> Result<f64, ParseError> {
        let options = ParserOptions::default();
        finish_number(raw, b'N', 1, &options, last)
    }

    #[test]
    fn test_first_line_number_accepted() {
        let mut last = None;
        assert_eq!(finish_n(b"0", &mut last).unwrap(), 0.0);
        assert_eq!(last, Some(0));
    }

    #[test]
    fn test_increasing_sequence_tracked() {
        let mut last = None;
        finish_n(b"10", &mut last).unwrap();
        finish_n(b"20", &mut last).unwrap();
        assert_eq!(last, Some(20));
    }

    #[test]
    fn test_equal_line_number_rejected() {
        let mut last = Some(10);
        assert!(matches!(
            finish_n(b"10", &mut last),
            Err(ParseError::InvalidLineNumber { .. })
        ));
    }

    #[test]
    fn test_decreasing_line_number_rejected() {
        let mut last = Some(10);
        assert!(matches!(
            finish_n(b"5", &mut last),
            Err(ParseError::InvalidLineNumber { .. })
        ));
        // The failed word must not clobber the tracked state.
        assert_eq!(last, Some(10));
    }

    #[test]
    fn test_fractional_line_number_rejected() {
        let mut last = None;
        assert!(matches!(
            finish_n(b"1.5", &mut last),
            Err(ParseError::InvalidLineNumber { .. })
        ));
    }

    #[test]
    fn test_negative_line_number_rejected() {
        let mut last = None;
        assert!(matches!(
            finish_n(b"-1", &mut last),
            Err(ParseError::InvalidLineNumber { .. })
        ));
    }

    #[test]
    fn test_validation_skipped_when_disabled() {
        let options = ParserOptions::builder()
            .validate_line_numbers(false)
            .build();
        let mut last = None;
        let value: f64 = finish_number(b"-1.5", b'N', 1, &options, &mut last).unwrap();
        assert_eq!(value, -1.5);
        assert_eq!(last, None);
    }

    #[test]
    fn test_non_n_letters_not_validated() {
        let options = ParserOptions::default();
        let mut last = Some(100);
        let value: f64 = finish_number(b"5", b'X', 1, &options, &mut last).unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(last, Some(100));
    }

    // ==================== Property tests ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// A float's default rendering is its shortest exact decimal
            /// form, so finalizing it recovers the value bit-for-bit.
            #[test]
            fn prop_rendered_floats_roundtrip(value in -1_000_000.0..1_000_000.0f64) {
                let rendered = format!("{}", value);
                prop_assert_eq!(finish(rendered.as_bytes()).unwrap(), value);
            }

            /// Arbitrary runs of number bytes either parse or error; they
            /// never panic.
            #[test]
            fn prop_number_runs_never_panic(raw in "[0-9+.\\-]{0,12}") {
                let _ = finish(raw.as_bytes());
            }
        }
    }
}
