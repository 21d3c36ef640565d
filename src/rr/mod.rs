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

//! Data structures for the DNS records produced by resolution.

mod fmt;
mod rr_type;
pub use rr_type::Type;

/// A flattened, validated record produced from a directive tree.
///
/// The `domain` is never empty. It is fully qualified only if the base
/// domain handed to the resolver was; otherwise it is relative to the
/// zone origin. For [`Type::Ns`] and [`Type::Cname`] records, `value`
/// always ends with a dot. For [`Type::A`] and [`Type::Aaaa`] records,
/// `value` is a validated address literal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedRecord {
    pub domain: String,
    pub rr_type: Type,
    pub value: String,
}

impl ResolvedRecord {
    pub fn new(domain: impl Into<String>, rr_type: Type, value: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            rr_type,
            value: value.into(),
        }
    }
}
