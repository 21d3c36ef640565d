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

//! Zone header templates.
//!
//! The header of a generated zone (its `$ORIGIN`, SOA record, apex NS
//! records, and so on) comes from a template file maintained by the
//! operator. The following placeholders are replaced on every line:
//!
//! | Placeholder  | Replacement                                |
//! |--------------|--------------------------------------------|
//! | `@@DOMAIN@@` | the zone suffix (apex)                     |
//! | `%%serial%%` | the serial, see [`serial_at`]              |
//! | `%%authns%%` | the authoritative nameserver               |
//! | `%%email%%`  | `hostmaster.` + the authoritative nameserver |

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

/// The Unix time subtracted from the current time to produce zone
/// serials. Changing it can make serials go backwards.
pub const SERIAL_EPOCH: u64 = 1_415_194_620;

/// Computes the zone serial for the Unix time `unix_time`. Times
/// before [`SERIAL_EPOCH`] produce 0.
pub fn serial_at(unix_time: u64) -> u64 {
    unix_time.saturating_sub(SERIAL_EPOCH)
}

/// Computes the zone serial for the current time.
pub fn current_serial() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    serial_at(now)
}

/// The values substituted into a zone header template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Substitutions {
    pub domain: String,
    pub serial: u64,
    pub auth_ns: String,
}

impl Substitutions {
    /// Replaces all placeholders in `line`.
    pub fn apply(&self, line: &str) -> String {
        line.replace("@@DOMAIN@@", &self.domain)
            .replace("%%serial%%", &self.serial.to_string())
            .replace("%%authns%%", &self.auth_ns)
            .replace("%%email%%", &format!("hostmaster.{}", self.auth_ns))
    }
}

/// An iterator over the lines of a zone header template, with
/// placeholders replaced and trailing whitespace removed.
pub struct Header<R> {
    lines: io::Lines<R>,
    substitutions: Substitutions,
}

impl<R: BufRead> Header<R> {
    pub fn new(template: R, substitutions: Substitutions) -> Self {
        Self {
            lines: template.lines(),
            substitutions,
        }
    }
}

impl<R: BufRead> Iterator for Header<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map(|line| {
                let mut line = self.substitutions.apply(&line);
                line.truncate(line.trim_end().len());
                line
            })
        })
    }
}
