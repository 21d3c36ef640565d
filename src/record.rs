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

//! Registrations as returned by the ledger, and their parsed content.

use serde::Deserialize;
use serde_json::Value;

/// The number of characters of the label taken up by the namespace
/// prefix (`d/`).
pub const NAMESPACE_PREFIX_LEN: usize = 2;

/// A registration exactly as the ledger node reports it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RawRecord {
    pub name: String,
    #[serde(default)]
    pub expired: bool,
    pub expires_in: Option<i64>,
    pub value: Option<String>,
}

/// The content of a [`NameRecord`].
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// The registration is expired or has no value.
    Absent,

    /// The registration has a value, but it is not valid JSON.
    Malformed,

    /// The value parsed successfully.
    Tree(Value),
}

/// A single registration with its value interpreted as a directive
/// tree.
#[derive(Clone, Debug, PartialEq)]
pub struct NameRecord {
    label: String,
    expired: bool,
    expires_in: Option<i64>,
    content: Content,
}

impl NameRecord {
    /// Creates a [`NameRecord`] from a [`RawRecord`]. The value of an
    /// expired registration is never examined. Parse failures are not
    /// errors; they leave the record without content.
    pub fn new(raw: RawRecord) -> Self {
        let content = if raw.expired {
            Content::Absent
        } else {
            match raw.value {
                Some(ref value) => match serde_json::from_str(value) {
                    Ok(tree) => Content::Tree(tree),
                    Err(_) => Content::Malformed,
                },
                None => Content::Absent,
            }
        };
        Self {
            label: raw.name,
            expired: raw.expired,
            expires_in: raw.expires_in,
            content,
        }
    }

    /// Returns the full label, including the namespace prefix.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    /// Returns the parsed directive tree, if there is one.
    pub fn content(&self) -> Option<&Value> {
        match self.content {
            Content::Tree(ref tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns whether the registration carried a value that could not
    /// be parsed.
    pub fn is_malformed(&self) -> bool {
        self.content == Content::Malformed
    }

    /// Returns the base domain for this registration: the label with
    /// the namespace prefix removed. Returns `None` if nothing is left.
    pub fn domain(&self) -> Option<&str> {
        let (start, _) = self.label.char_indices().nth(NAMESPACE_PREFIX_LEN)?;
        Some(&self.label[start..])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(name: &str, value: Option<&str>) -> RawRecord {
        RawRecord {
            name: name.to_owned(),
            expired: false,
            expires_in: Some(1000),
            value: value.map(str::to_owned),
        }
    }

    #[test]
    fn new_parses_value() {
        let record = NameRecord::new(raw("d/example", Some(r#"{"ip": "1.2.3.4"}"#)));
        assert_eq!(record.content(), Some(&json!({"ip": "1.2.3.4"})));
        assert!(!record.is_malformed());
        assert_eq!(record.expires_in(), Some(1000));
    }

    #[test]
    fn new_swallows_parse_failures() {
        let record = NameRecord::new(raw("d/example", Some("{\"ip\": ")));
        assert_eq!(record.content(), None);
        assert!(record.is_malformed());
    }

    #[test]
    fn new_ignores_value_of_expired_records() {
        let mut expired = raw("d/example", Some(r#"{"ip": "1.2.3.4"}"#));
        expired.expired = true;
        let record = NameRecord::new(expired);
        assert!(record.expired());
        assert_eq!(record.content(), None);
        assert!(!record.is_malformed());
    }

    #[test]
    fn new_accepts_non_object_content() {
        // Shape checking is the resolver's job.
        let record = NameRecord::new(raw("d/example", Some(r#"["1.2.3.4"]"#)));
        assert_eq!(record.content(), Some(&json!(["1.2.3.4"])));
    }

    #[test]
    fn missing_value_is_absent_not_malformed() {
        let record = NameRecord::new(raw("d/example", None));
        assert_eq!(record.content(), None);
        assert!(!record.is_malformed());
    }

    #[test]
    fn domain_strips_namespace_prefix() {
        assert_eq!(NameRecord::new(raw("d/example", None)).domain(), Some("example"));
        assert_eq!(NameRecord::new(raw("d/", None)).domain(), None);
        assert_eq!(NameRecord::new(raw("d", None)).domain(), None);
    }

    #[test]
    fn raw_record_deserializes_from_node_output() {
        let raw: RawRecord = serde_json::from_value(json!({
            "name": "d/example",
            "value": "{}",
            "txid": "00",
            "expires_in": 12345,
        }))
        .unwrap();
        assert_eq!(raw.name, "d/example");
        assert!(!raw.expired);
        assert_eq!(raw.expires_in, Some(12345));

        let raw: RawRecord =
            serde_json::from_value(json!({"name": "d/gone", "expired": true})).unwrap();
        assert!(raw.expired);
        assert_eq!(raw.value, None);
    }
}
