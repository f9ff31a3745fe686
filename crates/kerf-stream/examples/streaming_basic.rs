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

//! Basic streaming: pull blocks one at a time from an in-memory program.

use kerf_stream::{ParseError, Parser, Value};

fn main() -> Result<(), ParseError> {
    let program: &[u8] = b"\
; simple square, 10mm sides
N10 G21          (metric)
N20 G90          (absolute positioning)
N30 G0 X0 Y0
N40 G1 X10 F600
N50 G1 Y10
N60 G1 X0
N70 G1 Y0
N80 M117 P\"square done\"
";

    let mut parser: Parser = Parser::from_slice(program);

    while let Some(block) = parser.next_block()? {
        print!("line {:>2}:", block.line_number);
        for word in &block {
            match &word.value {
                Value::Number(n) => print!(" {}{}", word.letter_char(), n),
                Value::String(_) => print!(" {}", word),
            }
        }
        println!();
    }

    println!(
        "\n{} blocks, {} lines, {} bytes",
        parser.blocks_parsed(),
        parser.line_number(),
        parser.bytes_read()
    );
    Ok(())
}
