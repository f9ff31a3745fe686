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

//! Parser configuration.
//!
//! [`ParserOptions`] bundles the accepted-letter dialect, the resource
//! [`Limits`], and the behavioral toggles. Options are immutable once a
//! parser has been created from them.

use crate::address::AddressConfig;
use crate::limits::Limits;

/// Behavioral configuration for a parser.
///
/// All toggles default to on, which matches the strictest useful
/// interpretation of common G-code streams (checksums verified when
/// present, line numbers validated, unclosed comments rejected).
///
/// # Examples
///
/// ```
/// use kerf_core::{AddressConfig, Limits, ParserOptions};
///
/// // Field access.
/// let options = ParserOptions::default();
/// assert!(options.validate_checksum);
///
/// // Fluent construction.
/// let options = ParserOptions::builder()
///     .addresses(AddressConfig::rs274ngc())
///     .limits(Limits::strict())
///     .validate_line_numbers(false)
///     .build();
/// assert!(!options.validate_line_numbers);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParserOptions {
    /// Accepted address letters.
    pub addresses: AddressConfig,
    /// Resource ceilings.
    pub limits: Limits,
    /// Fail with `UnclosedComment` when a `(` comment is still open at end
    /// of line. When off the comment is silently treated as closed.
    pub strict_comments: bool,
    /// Skip lines that produce no words. Empty tokenizations never surface
    /// as blocks in the current implementation, so disabling this has no
    /// observable effect; the toggle is kept for configuration
    /// compatibility.
    pub skip_empty_lines: bool,
    /// Silently skip bytes the tokenizer does not recognize between words.
    /// When off such bytes fail with `UnexpectedCharacter`.
    pub ignore_unknown_characters: bool,
    /// Allow `"` after an address letter to start a quoted-string value.
    /// When off the quote is treated as an unknown character.
    pub support_quoted_strings: bool,
    /// Verify trailing `*nnn` XOR checksums.
    pub validate_checksum: bool,
    /// Require `N` words to be strictly increasing non-negative integers.
    pub validate_line_numbers: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            addresses: AddressConfig::full(),
            limits: Limits::default(),
            strict_comments: true,
            skip_empty_lines: true,
            ignore_unknown_characters: true,
            support_quoted_strings: true,
            validate_checksum: true,
            validate_line_numbers: true,
        }
    }
}

impl ParserOptions {
    /// Create a builder initialized with the defaults.
    pub fn builder() -> ParserOptionsBuilder {
        ParserOptionsBuilder::new()
    }
}

/// Fluent builder for [`ParserOptions`].
///
/// # Examples
///
/// ```
/// use kerf_core::ParserOptions;
///
/// let options = ParserOptions::builder()
///     .validate_checksum(false)
///     .strict_comments(false)
///     .build();
/// assert!(!options.validate_checksum);
/// assert!(!options.strict_comments);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    /// Create a builder initialized with the defaults.
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
        }
    }

    /// Set the accepted address letters.
    pub fn addresses(mut self, addresses: AddressConfig) -> Self {
        self.options.addresses = addresses;
        self
    }

    /// Set the resource ceilings.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Toggle rejection of unclosed `(` comments.
    pub fn strict_comments(mut self, on: bool) -> Self {
        self.options.strict_comments = on;
        self
    }

    /// Toggle skipping of wordless lines.
    pub fn skip_empty_lines(mut self, on: bool) -> Self {
        self.options.skip_empty_lines = on;
        self
    }

    /// Toggle skipping of unrecognized bytes.
    pub fn ignore_unknown_characters(mut self, on: bool) -> Self {
        self.options.ignore_unknown_characters = on;
        self
    }

    /// Toggle quoted-string values.
    pub fn support_quoted_strings(mut self, on: bool) -> Self {
        self.options.support_quoted_strings = on;
        self
    }

    /// Toggle `*nnn` checksum verification.
    pub fn validate_checksum(mut self, on: bool) -> Self {
        self.options.validate_checksum = on;
        self
    }

    /// Toggle `N` line-number validation.
    pub fn validate_line_numbers(mut self, on: bool) -> Self {
        self.options.validate_line_numbers = on;
        self
    }

    /// Finish building.
    pub fn build(self) -> ParserOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default tests ====================

    #[test]
    fn test_defaults_all_on() {
        let options = ParserOptions::default();
        assert!(options.strict_comments);
        assert!(options.skip_empty_lines);
        assert!(options.ignore_unknown_characters);
        assert!(options.support_quoted_strings);
        assert!(options.validate_checksum);
        assert!(options.validate_line_numbers);
    }

    #[test]
    fn test_default_embeds_full_dialect_and_default_limits() {
        let options = ParserOptions::default();
        assert_eq!(options.addresses, AddressConfig::full());
        assert_eq!(options.limits, Limits::default());
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(ParserOptions::builder().build(), ParserOptions::default());
    }

    #[test]
    fn test_builder_sets_every_toggle() {
        let options = ParserOptions::builder()
            .strict_comments(false)
            .skip_empty_lines(false)
            .ignore_unknown_characters(false)
            .support_quoted_strings(false)
            .validate_checksum(false)
            .validate_line_numbers(false)
            .build();
        assert!(!options.strict_comments);
        assert!(!options.skip_empty_lines);
        assert!(!options.ignore_unknown_characters);
        assert!(!options.support_quoted_strings);
        assert!(!options.validate_checksum);
        assert!(!options.validate_line_numbers);
    }

    #[test]
    fn test_builder_sets_dialect_and_limits() {
        let options = ParserOptions::builder()
            .addresses(AddressConfig::rs274ngc())
            .limits(Limits::unlimited())
            .build();
        assert_eq!(options.addresses, AddressConfig::rs274ngc());
        assert_eq!(options.limits, Limits::unlimited());
    }

    #[test]
    fn test_options_clone_eq() {
        let options = ParserOptions::builder().validate_checksum(false).build();
        assert_eq!(options, options.clone());
    }
}
