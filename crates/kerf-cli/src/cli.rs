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

//! Command definitions and option mapping.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use kerf_core::{AddressConfig, Limits, ParserOptions};

use crate::commands;
use crate::error::CliResult;

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate G-code files and report per-file verdicts.
    Check(CheckArgs),
    /// Report block, word, line, and byte counts per file.
    Stats(StatsArgs),
    /// Print the tokenized form of each block in one file.
    Dump(DumpArgs),
}

impl Commands {
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Self::Check(args) => commands::check(args),
            Self::Stats(args) => commands::stats(args),
            Self::Dump(args) => commands::dump(args),
        }
    }
}

#[derive(Args)]
pub struct CheckArgs {
    /// Files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Files to measure.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

#[derive(Args)]
pub struct DumpArgs {
    /// File to dump.
    pub file: PathBuf,

    /// Stop after this many blocks.
    #[arg(long)]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

/// Flags shared by every subcommand, mapped onto parser options.
#[derive(Args)]
pub struct DialectArgs {
    /// Accepted address letters (default: A-Z).
    #[arg(long)]
    pub letters: Option<String>,

    /// Match address letters case-sensitively.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Skip trailing *nnn checksum verification.
    #[arg(long)]
    pub no_checksum: bool,

    /// Skip N line-number validation.
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Treat unclosed ( comments as closed at end of line.
    #[arg(long)]
    pub lenient_comments: bool,

    /// Fail on unrecognized characters instead of skipping them.
    #[arg(long)]
    pub forbid_unknown: bool,

    /// Treat quotes as ordinary unknown characters.
    #[arg(long)]
    pub no_strings: bool,

    /// Remove all resource ceilings.
    #[arg(long, conflicts_with_all = ["max_input_size", "max_line_length", "max_blocks", "max_words", "max_lines"])]
    pub unlimited: bool,

    /// Maximum total input bytes.
    #[arg(long)]
    pub max_input_size: Option<u64>,

    /// Maximum bytes per line.
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Maximum number of blocks.
    #[arg(long)]
    pub max_blocks: Option<u64>,

    /// Maximum words per block.
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Maximum number of lines.
    #[arg(long)]
    pub max_lines: Option<u64>,
}

impl DialectArgs {
    /// Build parser options from the flags.
    pub fn to_options(&self) -> CliResult<ParserOptions> {
        let addresses = match &self.letters {
            Some(letters) => AddressConfig::new(letters.as_bytes(), self.case_sensitive)?,
            None => AddressConfig::full(),
        };

        let mut limits = if self.unlimited {
            Limits::unlimited()
        } else {
            Limits::default()
        };
        if let Some(max) = self.max_input_size {
            limits.max_input_size = Some(max);
        }
        if let Some(max) = self.max_line_length {
            limits.max_line_length = Some(max);
        }
        if let Some(max) = self.max_blocks {
            limits.max_blocks = Some(max);
        }
        if let Some(max) = self.max_words {
            limits.max_words_per_block = Some(max);
        }
        if let Some(max) = self.max_lines {
            limits.max_lines = Some(max);
        }

        Ok(ParserOptions::builder()
            .addresses(addresses)
            .limits(limits)
            .strict_comments(!self.lenient_comments)
            .ignore_unknown_characters(!self.forbid_unknown)
            .support_quoted_strings(!self.no_strings)
            .validate_checksum(!self.no_checksum)
            .validate_line_numbers(!self.no_line_numbers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_dialect() -> DialectArgs {
        DialectArgs {
            letters: None,
            case_sensitive: false,
            no_checksum: false,
            no_line_numbers: false,
            lenient_comments: false,
            forbid_unknown: false,
            no_strings: false,
            unlimited: false,
            max_input_size: None,
            max_line_length: None,
            max_blocks: None,
            max_words: None,
            max_lines: None,
        }
    }

    #[test]
    fn test_default_flags_match_default_options() {
        let options = bare_dialect().to_options().unwrap();
        assert_eq!(options, ParserOptions::default());
    }

    #[test]
    fn test_negative_flags_flip_toggles() {
        let mut args = bare_dialect();
        args.no_checksum = true;
        args.lenient_comments = true;
        args.forbid_unknown = true;
        let options = args.to_options().unwrap();
        assert!(!options.validate_checksum);
        assert!(!options.strict_comments);
        assert!(!options.ignore_unknown_characters);
    }

    #[test]
    fn test_custom_letters() {
        let mut args = bare_dialect();
        args.letters = Some("GXYZ".to_string());
        args.case_sensitive = true;
        let options = args.to_options().unwrap();
        assert!(options.addresses.accepts(b'G'));
        assert!(!options.addresses.accepts(b'g'));
        assert!(!options.addresses.accepts(b'A'));
    }

    #[test]
    fn test_invalid_letters_rejected() {
        let mut args = bare_dialect();
        args.letters = Some("G1".to_string());
        assert!(args.to_options().is_err());
    }

    #[test]
    fn test_limit_overrides() {
        let mut args = bare_dialect();
        args.max_words = Some(5);
        args.max_lines = Some(10);
        let options = args.to_options().unwrap();
        assert_eq!(options.limits.max_words_per_block, Some(5));
        assert_eq!(options.limits.max_lines, Some(10));
        // Untouched ceilings keep their defaults.
        assert_eq!(options.limits.max_input_size, Limits::default().max_input_size);
    }

    #[test]
    fn test_unlimited_clears_ceilings() {
        let mut args = bare_dialect();
        args.unlimited = true;
        let options = args.to_options().unwrap();
        assert_eq!(options.limits, Limits::unlimited());
    }
}
