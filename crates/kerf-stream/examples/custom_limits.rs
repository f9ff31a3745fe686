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

//! Configuring resource limits for different trust levels.

use kerf_stream::{parse_with_options, Limits, ParserOptions};

fn main() {
    println!("Kerf custom limits example\n");

    // Default limits suit trusted CAM output.
    let defaults = Limits::default();
    println!("1. Default limits:");
    println!("   max_input_size:      {:?}", defaults.max_input_size);
    println!("   max_line_length:     {:?}", defaults.max_line_length);
    println!("   max_words_per_block: {:?}\n", defaults.max_words_per_block);

    // Strict limits for uploads from unknown senders.
    let strict = ParserOptions::builder().limits(Limits::strict()).build();
    let upload = b"G1 X1 Y2 Z3 A4 B5 C6 F1500\n";
    match parse_with_options(upload, strict) {
        Ok(program) => println!("2. Strict parse OK: {} words", program.word_count()),
        Err(error) => println!("2. Strict parse rejected: {}", error),
    }

    // A tiny custom ceiling, to show the failure mode.
    let tiny = ParserOptions::builder()
        .limits(Limits {
            max_words_per_block: Some(3),
            ..Limits::default()
        })
        .build();
    match parse_with_options(upload, tiny) {
        Ok(program) => println!("3. Tiny parse OK: {} words", program.word_count()),
        Err(error) => println!("3. Tiny parse rejected: {}", error),
    }
}
