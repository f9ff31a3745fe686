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

//! Kerf command-line interface.
//!
//! ```bash
//! # Validate files, exiting non-zero on the first broken one
//! kerf check part1.gcode part2.gcode
//!
//! # Count blocks, words, lines, and bytes
//! kerf stats part.gcode
//!
//! # Print the tokenized form of each block
//! kerf dump part.gcode --limit 20
//! ```

mod cli;
mod commands;
mod error;

use clap::Parser;
use std::process::ExitCode;

use cli::Commands;

/// Kerf - streaming G-code parser and validator.
#[derive(Parser)]
#[command(name = "kerf")]
#[command(author, version, about = "Streaming G-code parser and validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
