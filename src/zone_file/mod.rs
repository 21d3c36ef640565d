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

//! Generation of [RFC 1035 § 5] zone files.
//!
//! A generated zone file consists of a header, produced from a template
//! by [`template::Header`], followed by one line per
//! [`ResolvedRecord`], produced by [`Lines`]. Both are iterators, so a
//! zone can be written out as it is generated without ever holding the
//! whole file in memory:
//!
//! ```
//! use namezone::rr::{ResolvedRecord, Type};
//! use namezone::zone_file::Lines;
//!
//! let records = vec![
//!     ResolvedRecord::new("www.example", Type::A, "192.0.2.1"),
//!     ResolvedRecord::new("example", Type::Ns, "ns1.example.net."),
//! ];
//! let mut lines = Lines::new(records);
//! assert_eq!(lines.next().unwrap(), format!("{:<40} IN\tA\t192.0.2.1", "www.example"));
//! assert_eq!(lines.next().unwrap(), format!("{:<40} IN\tNS\tns1.example.net.", "example"));
//! assert!(lines.next().is_none());
//! ```
//!
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

use std::io::{self, Write};

use crate::rr::ResolvedRecord;

pub mod template;

/// An iterator that formats [`ResolvedRecord`]s as zone file lines
/// (without line terminators). Records are pulled from the underlying
/// iterator only as lines are requested.
pub struct Lines<I> {
    records: I,
}

impl<I: Iterator<Item = ResolvedRecord>> Lines<I> {
    pub fn new(records: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl<I: Iterator<Item = ResolvedRecord>> Iterator for Lines<I> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| record.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

/// Writes each line produced by `lines` to `writer`, terminating each
/// with a newline. Returns the number of lines written.
pub fn write_lines<W, L>(writer: &mut W, lines: L) -> io::Result<usize>
where
    W: Write,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rr::Type;

    #[test]
    fn lines_are_produced_lazily() {
        let mut pulled = 0;
        let records = (0..3).map(|i| {
            pulled += 1;
            ResolvedRecord::new(format!("host{}", i), Type::A, format!("192.0.2.{}", i))
        });
        let mut lines = Lines::new(records);
        let first = lines.next().unwrap();
        drop(lines);
        assert!(first.starts_with("host0 "));
        assert_eq!(pulled, 1);
    }

    #[test]
    fn write_lines_terminates_each_line() {
        let records = vec![
            ResolvedRecord::new("a", Type::A, "192.0.2.1"),
            ResolvedRecord::new("b", Type::Cname, "a.example."),
        ];
        let mut out = Vec::new();
        let count = write_lines(&mut out, Lines::new(records)).unwrap();
        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("{:<40} IN\tA\t192.0.2.1\n{:<40} IN\tCNAME\ta.example.\n", "a", "b"),
        );
    }
}
