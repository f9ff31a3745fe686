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

//! Subcommand implementations.
//!
//! Every command streams: files are never loaded whole, so multi-gigabyte
//! programs can be checked in constant memory.

use colored::Colorize;
use std::path::Path;

use kerf_core::{ParseError, ParserOptions};
use kerf_stream::Parser;

use crate::cli::{CheckArgs, DumpArgs, StatsArgs};
use crate::error::{CliError, CliResult};

/// Per-file counters gathered by one streaming pass.
#[derive(Debug)]
struct FileReport {
    blocks: u64,
    words: u64,
    lines: u64,
    bytes: u64,
}

/// Stream one file to exhaustion, counting as we go.
fn scan_file(path: &Path, options: ParserOptions) -> Result<FileReport, ParseError> {
    let mut parser: Parser = Parser::from_path_with_options(path, options)?;
    let mut blocks = 0u64;
    let mut words = 0u64;
    while let Some(block) = parser.next_block()? {
        blocks += 1;
        words += block.len() as u64;
    }
    Ok(FileReport {
        blocks,
        words,
        lines: parser.line_number(),
        bytes: parser.bytes_read(),
    })
}

pub fn check(args: &CheckArgs) -> CliResult<()> {
    let options = args.dialect.to_options()?;
    let mut failed = 0usize;

    for path in &args.files {
        match scan_file(path, options.clone()) {
            Ok(report) => {
                println!(
                    "{} {} ({} blocks, {} words)",
                    "ok".green().bold(),
                    path.display(),
                    report.blocks,
                    report.words
                );
            }
            Err(error) => {
                failed += 1;
                let location = match error.line() {
                    Some(line) => format!(" (line {})", line),
                    None => String::new(),
                };
                println!(
                    "{} {}{}: {}",
                    "error".red().bold(),
                    path.display(),
                    location,
                    error
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: args.files.len(),
        });
    }
    Ok(())
}

pub fn stats(args: &StatsArgs) -> CliResult<()> {
    let options = args.dialect.to_options()?;

    for path in &args.files {
        let report = scan_file(path, options.clone())?;
        println!("{}", path.display().to_string().bold());
        println!("  blocks: {}", report.blocks);
        println!("  words:  {}", report.words);
        println!("  lines:  {}", report.lines);
        println!("  bytes:  {}", report.bytes);
    }
    Ok(())
}

pub fn dump(args: &DumpArgs) -> CliResult<()> {
    let options = args.dialect.to_options()?;
    dump_file(&args.file, options, args.limit)?;
    Ok(())
}

/// Print one file's blocks, stopping at `limit` if set. Returns how many
/// blocks were printed.
fn dump_file(path: &Path, options: ParserOptions, limit: Option<u64>) -> CliResult<u64> {
    let mut parser: Parser = Parser::from_path_with_options(path, options)?;

    let mut printed = 0u64;
    while let Some(block) = parser.next_block()? {
        println!("{:>6}  {}", block.line_number.to_string().dimmed(), block);
        printed += 1;
        if limit.is_some_and(|limit| printed >= limit) {
            break;
        }
    }
    Ok(printed)
}
