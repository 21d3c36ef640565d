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

//! Flattening of directive trees into [`ResolvedRecord`]s.
//!
//! A directive tree is a JSON object. The following keys are
//! recognized, and all others are ignored:
//!
//! * `ip`: one or more IPv4 addresses, producing A records.
//! * `ip6`: one or more IPv6 addresses, producing AAAA records.
//! * `map`: an object mapping sub-labels to nested directive trees. An
//!   empty sub-label refers to the current domain.
//! * `ns`: one or more nameserver names, producing NS records.
//! * `translate`: one or more target names, producing CNAME records.
//!
//! The keys of a node are always processed in the order listed above,
//! and the records of a `map` child are emitted where the `map` key is
//! processed, so that the output is the same for equal trees no matter
//! how their keys were ordered in the source text.
//!
//! Resolution never fails. Registrants control the trees, so anything
//! that is not of the expected shape (an invalid address, a number
//! where a string was expected, a list where an object was expected)
//! simply produces no record.
//!
//! ```
//! use namezone::resolve::resolve;
//! use namezone::rr::{ResolvedRecord, Type};
//! use serde_json::json;
//!
//! let tree = json!({"map": {"www": {"ip": "192.0.2.1"}}, "ns": "ns1.example.net"});
//! assert_eq!(
//!     resolve("example", &tree),
//!     [
//!         ResolvedRecord::new("www.example", Type::A, "192.0.2.1"),
//!         ResolvedRecord::new("example", Type::Ns, "ns1.example.net."),
//!     ],
//! );
//! ```

use log::trace;
use serde_json::{Map, Value};

use crate::rr::{ResolvedRecord, Type};
use crate::validate::{self, is_valid_dns_name, is_valid_ipv4, is_valid_ipv6};

/// Resolves the directive tree `tree` rooted at `domain`.
///
/// If `domain` is empty, nothing is produced, since every record must
/// have an owner.
pub fn resolve(domain: &str, tree: &Value) -> Vec<ResolvedRecord> {
    if domain.is_empty() {
        return Vec::new();
    }
    resolve_node(domain, tree)
}

/// Resolves an optional directive tree. `None` produces nothing.
pub fn resolve_content(domain: &str, tree: Option<&Value>) -> Vec<ResolvedRecord> {
    tree.map_or_else(Vec::new, |tree| resolve(domain, tree))
}

fn resolve_node(domain: &str, node: &Value) -> Vec<ResolvedRecord> {
    let node = match node.as_object() {
        Some(node) => node,
        None => {
            trace!("Skipping non-object directive tree at {}.", domain);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    if let Some(ips) = node.get("ip") {
        records.extend(addresses(domain, ips, Type::A, is_valid_ipv4));
    }
    if let Some(ip6s) = node.get("ip6") {
        records.extend(addresses(domain, ip6s, Type::Aaaa, is_valid_ipv6));
    }
    if let Some(map) = node.get("map") {
        match map.as_object() {
            Some(map) => records.extend(resolve_map(domain, map)),
            None => trace!("Skipping non-object map at {}.", domain),
        }
    }
    if let Some(nss) = node.get("ns") {
        records.extend(names(domain, nss, Type::Ns));
    }
    if let Some(targets) = node.get("translate") {
        records.extend(names(domain, targets, Type::Cname));
    }
    records
}

fn resolve_map(domain: &str, map: &Map<String, Value>) -> Vec<ResolvedRecord> {
    map.iter()
        .flat_map(|(sub, subtree)| {
            if sub.is_empty() {
                resolve_node(domain, subtree)
            } else {
                resolve_node(&format!("{}.{}", sub, domain), subtree)
            }
        })
        .collect()
}

/// Produces address records from the strings in `values` accepted by
/// `is_valid`.
fn addresses(
    domain: &str,
    values: &Value,
    rr_type: Type,
    is_valid: fn(&str) -> bool,
) -> Vec<ResolvedRecord> {
    strings(domain, values, rr_type)
        .filter(|address| {
            let valid = is_valid(address);
            if !valid {
                trace!("Dropping invalid {} value {:?} at {}.", rr_type, address, domain);
            }
            valid
        })
        .map(|address| ResolvedRecord::new(domain, rr_type, address))
        .collect()
}

/// Produces NS or CNAME records from the valid names in `values`,
/// making each name absolute.
fn names(domain: &str, values: &Value, rr_type: Type) -> Vec<ResolvedRecord> {
    strings(domain, values, rr_type)
        .filter(|name| {
            let valid = is_valid_dns_name(name);
            if !valid {
                trace!("Dropping invalid {} value {:?} at {}.", rr_type, name, domain);
            }
            valid
        })
        .map(|name| ResolvedRecord::new(domain, rr_type, validate::to_absolute(name)))
        .collect()
}

/// Treats `values` as a list (a lone value becomes a list of one) and
/// yields the strings in it.
fn strings<'a>(
    domain: &'a str,
    values: &'a Value,
    rr_type: Type,
) -> impl Iterator<Item = &'a str> + 'a {
    let items = match values {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };
    items.iter().filter_map(move |item| {
        let s = item.as_str();
        if s.is_none() {
            trace!("Dropping non-string {} value {} at {}.", rr_type, item, domain);
        }
        s
    })
}
