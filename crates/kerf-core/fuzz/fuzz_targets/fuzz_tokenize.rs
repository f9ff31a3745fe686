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

#![no_main]

use libfuzzer_sys::fuzz_target;

use kerf_core::lex::{tokenize_line, WordBuffer};
use kerf_core::ParserOptions;

fuzz_target!(|data: &[u8]| {
    let options = ParserOptions::default();
    let mut words = WordBuffer::<f64>::new();
    let mut last = None;
    // Must never panic, only return Ok/Err.
    let _ = tokenize_line(data, 1, &options, &mut last, &mut words);
});
