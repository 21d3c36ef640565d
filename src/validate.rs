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

//! Syntactic validation of addresses and domain names found in
//! directive trees.
//!
//! # Known gap
//!
//! [`is_valid_dns_name`] is deliberately lenient. It accepts any
//! non-empty string made up of ASCII letters, digits, `.`, `_`, and
//! `-`. This means that it does not enforce the 63-octet label limit or
//! the 255-octet name limit of [RFC 1035 § 2.3.4], does not reject
//! labels that begin or end with a hyphen, and accepts empty labels
//! (e.g., `a..b`). Existing registrations depend on this, so it must
//! not be tightened without also changing what gets served.
//!
//! [RFC 1035 § 2.3.4]: https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Returns whether `s` is a dotted-decimal IPv4 address.
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// Returns whether `s` is an IPv6 address in colon-hex form. The
/// compressed (`::`) and mixed (`::ffff:192.0.2.1`) forms are
/// accepted.
pub fn is_valid_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Returns whether `s` is acceptable as a domain name. See the
/// [module-level documentation](self) for what this does *not* check.
pub fn is_valid_dns_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_name_octet)
}

fn is_name_octet(octet: u8) -> bool {
    octet.is_ascii_alphanumeric() || matches!(octet, b'.' | b'_' | b'-')
}

////////////////////////////////////////////////////////////////////////
// VALIDATED NAMES                                                    //
////////////////////////////////////////////////////////////////////////

/// A domain name that has passed [`is_valid_dns_name`].
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct DnsName(String);

impl DnsName {
    /// Returns the name as given, with or without a trailing dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Appends a trailing dot to `name` if it does not already have one.
pub(crate) fn to_absolute(name: &str) -> String {
    if name.ends_with('.') {
        name.to_owned()
    } else {
        format!("{}.", name)
    }
}

impl FromStr for DnsName {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            Err("name is empty")
        } else if is_valid_dns_name(text) {
            Ok(Self(text.to_owned()))
        } else {
            Err("name contains characters other than letters, digits, '.', '_', and '-'")
        }
    }
}

impl fmt::Debug for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_accepts_dotted_decimal() {
        for s in ["0.0.0.0", "1.2.3.4", "203.0.113.7", "255.255.255.255"] {
            assert!(is_valid_ipv4(s), "{}", s);
        }
    }

    #[test]
    fn ipv4_rejects_bad_octets_and_segment_counts() {
        for s in [
            "256.0.0.1",
            "1.2.3.300",
            "1.2.3",
            "1.2.3.4.5",
            "",
            "1.2.3.4 ",
            "::1",
            "not-an-ip",
        ] {
            assert!(!is_valid_ipv4(s), "{}", s);
        }
    }

    #[test]
    fn ipv6_accepts_colon_hex_forms() {
        for s in [
            "::1",
            "::",
            "2001:db8::1",
            "2001:0db8:0000:0000:0000:0000:0000:0001",
            "::ffff:192.0.2.1",
        ] {
            assert!(is_valid_ipv6(s), "{}", s);
        }
    }

    #[test]
    fn ipv6_rejects_ipv4_and_garbage() {
        for s in ["1.2.3.4", "2001:db8::1::2", "2001:db8::g", "", "fe80::1%eth0"] {
            assert!(!is_valid_ipv6(s), "{}", s);
        }
    }

    #[test]
    fn dns_name_accepts_historical_grammar() {
        for s in [
            "example",
            "example.",
            "ns1.example.net",
            "ns1.example.net.",
            "_srv._tcp.example",
            "-leading-hyphen",
            "a..b",
            ".",
        ] {
            assert!(is_valid_dns_name(s), "{}", s);
        }
    }

    #[test]
    fn dns_name_rejects_other_characters() {
        for s in ["", "ex ample", "ex*ample", "exämple", "a/b", "a\tb"] {
            assert!(!is_valid_dns_name(s), "{:?}", s);
        }
    }

    #[test]
    fn dns_name_does_not_enforce_length_limits() {
        let long_label = "a".repeat(64);
        let long_name = vec!["b".repeat(60); 10].join(".");
        assert!(is_valid_dns_name(&long_label));
        assert!(is_valid_dns_name(&long_name));
    }

    #[test]
    fn dns_name_parses_as_given() {
        let relative: DnsName = "ns1.example.net".parse().unwrap();
        let absolute: DnsName = "ns1.example.net.".parse().unwrap();
        assert_eq!(relative.as_str(), "ns1.example.net");
        assert_eq!(absolute.to_string(), "ns1.example.net.");
        assert!("".parse::<DnsName>().is_err());
        assert!("bad name".parse::<DnsName>().is_err());
    }

    #[test]
    fn to_absolute_appends_dot_only_when_missing() {
        assert_eq!(to_absolute("ns1.example.net"), "ns1.example.net.");
        assert_eq!(to_absolute("ns1.example.net."), "ns1.example.net.");
    }
}
