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

//! CLI error type.

use thiserror::Error;

use kerf_core::{AddressError, ParseError};

/// Errors surfaced by the `kerf` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// A file failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A dialect flag was invalid.
    #[error("invalid --letters value: {0}")]
    Dialect(#[from] AddressError),

    /// One or more files failed a batch check.
    #[error("{failed} of {total} file(s) failed")]
    CheckFailed { failed: usize, total: usize },
}

pub type CliResult<T> = Result<T, CliError>;
