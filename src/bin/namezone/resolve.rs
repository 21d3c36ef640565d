// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Implements the `resolve` command, which shows the records produced
//! by a single registration value without contacting the node.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;

use namezone::resolve::resolve;
use namezone::zone_file::{self, Lines};

use crate::args::ResolveArgs;

pub fn run(args: ResolveArgs) -> Result<()> {
    let value = match args.value {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut value = String::new();
            io::stdin()
                .read_to_string(&mut value)
                .context("failed to read the value from standard input")?;
            value
        }
    };

    // Unlike zone generation, an unparseable value is reported here:
    // the operator asked about this value specifically.
    let tree: Value = serde_json::from_str(&value)
        .with_context(|| format!("the value of {} is not valid JSON", args.label))?;
    if !tree.is_object() {
        warn!("The value of {} is not a JSON object.", args.label);
    }

    let records = resolve(args.label.domain().as_str(), &tree);
    if records.is_empty() {
        warn!("The value of {} produces no records.", args.label);
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    zone_file::write_lines(&mut stdout, Lines::new(records))
        .and_then(|_| stdout.flush())
        .context("failed to write the records")
}
