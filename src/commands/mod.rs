// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod list;
pub mod search;
pub mod show;
pub mod stats;

use crate::error::Result;
use serde_json::Value;
use std::io::{self, Write};

/// Render a response body the way every subcommand prints it.
pub fn render_json(value: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

/// Write errors, including a reader that went away, are returned as `Io`.
pub fn write_json<W: Write>(out: &mut W, value: &Value, compact: bool) -> Result<()> {
    writeln!(out, "{}", render_json(value, compact)?)?;
    out.flush()?;
    Ok(())
}

pub fn print_json(value: &Value, compact: bool) -> Result<()> {
    write_json(&mut io::stdout().lock(), value, compact)
}
