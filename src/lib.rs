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

//! Flattens name records registered in the `d/` namespace of a
//! Namecoin-style ledger into DNS zone file records.
//!
//! The pipeline is:
//!
//! 1. [`rpc::Client`] fetches raw registrations from the ledger node.
//! 2. [`record::NameRecord`] parses each registration's value as a
//!    JSON directive tree.
//! 3. [`resolve::resolve`] walks the directive tree and produces
//!    validated [`rr::ResolvedRecord`]s.
//! 4. [`zone_file::Lines`] formats those records as zone file lines,
//!    after a header produced by [`zone_file::template`].
//!
//! Everything up to (and including) step 4 is lenient: a malformed
//! registration only ever produces fewer records.

pub mod record;
pub mod resolve;
pub mod rpc;
pub mod rr;
pub mod validate;
pub mod zone_file;
