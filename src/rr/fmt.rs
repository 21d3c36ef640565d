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

//! Zone file presentation of [`ResolvedRecord`]s.

use std::fmt;

use super::ResolvedRecord;

/// The minimum width of the owner field. Owners are left-justified and
/// padded with spaces to this width.
pub const OWNER_WIDTH: usize = 40;

impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<width$} IN\t{}\t{}",
            self.domain,
            self.rr_type,
            self.value,
            width = OWNER_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::Type;
    use super::*;

    #[test]
    fn record_pads_short_owners() {
        let record = ResolvedRecord::new("sub.example.", Type::A, "203.0.113.7");
        assert_eq!(
            record.to_string(),
            "sub.example.                             IN\tA\t203.0.113.7",
        );
    }

    #[test]
    fn record_does_not_truncate_long_owners() {
        let owner = format!("{}.example.", "x".repeat(50));
        let record = ResolvedRecord::new(owner.clone(), Type::Cname, "target.example.");
        assert_eq!(
            record.to_string(),
            format!("{} IN\tCNAME\ttarget.example.", owner),
        );
    }
}
