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

//! Implements command-line argument parsing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use namezone::validate::DnsName;

/// Parses the command line arguments.
pub fn parse() -> Args {
    Args::parse()
}

/// Generates DNS zones from ledger name registrations
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch all registrations from the node and write the zone
    Generate(GenerateArgs),

    /// Show the records a single registration value produces
    Resolve(ResolveArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Set the configuration file to use
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Write the zone to FILE instead of standard output
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Set the registration label, including the namespace prefix
    #[arg(value_name = "LABEL")]
    pub label: Label,

    /// Read the registration value from FILE instead of standard input
    #[arg(value_name = "FILE")]
    pub value: Option<PathBuf>,
}

/// A registration label given on the command line, such as
/// `d/example`. Parsing checks that the label is in the `d/` namespace
/// and that what follows the prefix is a usable domain name.
#[derive(Clone, Debug)]
pub struct Label {
    label: String,
    domain: DnsName,
}

impl Label {
    /// Returns the domain the registration's records are placed at.
    pub fn domain(&self) -> &DnsName {
        &self.domain
    }
}

impl FromStr for Label {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("d/")
            .ok_or_else(|| anyhow!("the label must begin with \"d/\""))?;
        let domain = rest
            .parse()
            .map_err(|e| anyhow!("invalid domain in label: {}", e))?;
        Ok(Self {
            label: s.to_owned(),
            domain,
        })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}
