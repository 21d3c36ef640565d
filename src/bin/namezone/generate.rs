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

//! Implements the `generate` command (i.e., building the zone).

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use namezone::record::NameRecord;
use namezone::resolve::resolve_content;
use namezone::rpc::Client;
use namezone::zone_file::template::{self, Header, Substitutions};
use namezone::zone_file::{self, Lines};

use crate::args::GenerateArgs;
use crate::config::{self, Config};

/// Counters reported once the zone has been written.
#[derive(Debug, Default, Eq, PartialEq)]
struct Summary {
    names: usize,
    expired: usize,
    malformed: usize,
    unusable_label: usize,
    records: usize,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("namezone v{} generating a zone.", env!("CARGO_PKG_VERSION"));

    info!("Loading the configuration from {}.", args.config.display());
    let config =
        config::load_from_path(&args.config).context("failed to load the configuration")?;

    // Open the template before talking to the node: fetching names
    // may be slow, so it's better to fail fast.
    let template_file = File::open(&config.template)
        .with_context(|| format!("failed to open {}", config.template.display()))?;

    let client = Client::with_timeout(config.server.0.clone(), config.timeout())
        .context("failed to set up the RPC client")?;
    info!("Querying the node at {}.", client.url());
    let height = client
        .block_count()
        .context("failed to query the node's block count")?;
    info!("The node is at block {}.", height);
    let names = client
        .names()
        .context("failed to fetch registrations from the node")?;
    info!("Fetched {} registrations.", names.len());

    let writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(writer);

    write_header(&mut writer, BufReader::new(template_file), &config).with_context(|| {
        format!(
            "failed to write the header from {}",
            config.template.display()
        )
    })?;
    let summary = write_records(&mut writer, &names).context("failed to write records")?;
    writer.flush().context("failed to write the zone")?;

    info!(
        "Wrote {} records from {} registrations \
         ({} expired, {} with unparseable values, {} with unusable labels).",
        summary.records,
        summary.names,
        summary.expired,
        summary.malformed,
        summary.unusable_label,
    );
    Ok(())
}

/// Writes the zone header, substituting the placeholders described in
/// [`template`].
fn write_header<W, R>(writer: &mut W, template: R, config: &Config) -> Result<()>
where
    W: Write,
    R: io::BufRead,
{
    let substitutions = Substitutions {
        domain: config.suffix.0.to_string(),
        serial: template::current_serial(),
        auth_ns: config.auth_ns.0.to_string(),
    };
    debug!("Using zone serial {}.", substitutions.serial);
    for line in Header::new(template, substitutions) {
        writeln!(writer, "{}", line?)?;
    }
    Ok(())
}

/// Resolves and writes the records of every registration in `names`.
fn write_records<W: Write>(writer: &mut W, names: &[NameRecord]) -> io::Result<Summary> {
    let mut summary = Summary {
        names: names.len(),
        ..Summary::default()
    };
    let records = names.iter().flat_map(|name| {
        debug!("Resolving {} ({}).", name.label(), describe_expiry(name));
        if name.expired() {
            summary.expired += 1;
        } else if name.is_malformed() {
            summary.malformed += 1;
            debug!("The value of {} is not valid JSON; skipping it.", name.label());
        }
        match name.domain() {
            Some(domain) => resolve_content(domain, name.content()),
            None => {
                summary.unusable_label += 1;
                debug!("The label {:?} has no domain; skipping it.", name.label());
                Vec::new()
            }
        }
    });
    let written = zone_file::write_lines(writer, Lines::new(records))?;
    summary.records = written;
    Ok(summary)
}

/// Describes when a registration expires, for the log.
fn describe_expiry(name: &NameRecord) -> String {
    match name.expires_in() {
        _ if name.expired() => String::from("expired"),
        Some(1) => String::from("expires in 1 block"),
        Some(blocks) => format!("expires in {} blocks", blocks),
        None => String::from("expiry unknown"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use namezone::record::RawRecord;

    use super::*;

    fn name(label: &str, expired: bool, value: Option<&str>) -> NameRecord {
        name_expiring(label, expired, None, value)
    }

    fn name_expiring(
        label: &str,
        expired: bool,
        expires_in: Option<i64>,
        value: Option<&str>,
    ) -> NameRecord {
        NameRecord::new(RawRecord {
            name: label.to_owned(),
            expired,
            expires_in,
            value: value.map(str::to_owned),
        })
    }

    #[test]
    fn write_records_skips_unusable_registrations() {
        let names = [
            name(
                "d/example",
                false,
                Some(r#"{"ip": "192.0.2.1", "map": {"www": {"ip6": "2001:db8::1"}}}"#),
            ),
            name("d/gone", true, Some(r#"{"ip": "192.0.2.2"}"#)),
            name("d/broken", false, Some("{ip: 192.0.2.3")),
            name("d/", false, Some(r#"{"ip": "192.0.2.4"}"#)),
            name("d/list", false, Some(r#"["192.0.2.5"]"#)),
        ];
        let mut out = Vec::new();
        let summary = write_records(&mut out, &names).unwrap();
        assert_eq!(
            summary,
            Summary {
                names: 5,
                expired: 1,
                malformed: 1,
                unusable_label: 1,
                records: 2,
            },
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{:<40} IN\tA\t192.0.2.1\n{:<40} IN\tAAAA\t2001:db8::1\n",
                "example", "www.example",
            ),
        );
    }

    #[test]
    fn write_header_uses_configuration() {
        let config: Config = toml::from_str(
            "server = \"http://127.0.0.1:8336/\"\n\
             suffix = \"bit.\"\n\
             auth_ns = \"ns1.example.net.\"\n",
        )
        .unwrap();
        let mut out = Vec::new();
        let template = Cursor::new("$ORIGIN @@DOMAIN@@\n@ NS %%authns%%\n");
        write_header(&mut out, template, &config).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "$ORIGIN bit.\n@ NS ns1.example.net.\n",
        );
    }

    #[test]
    fn describe_expiry_reports_remaining_blocks() {
        let value = Some("{}");
        assert_eq!(
            describe_expiry(&name_expiring("d/a", false, Some(1200), value)),
            "expires in 1200 blocks",
        );
        assert_eq!(
            describe_expiry(&name_expiring("d/a", false, Some(1), value)),
            "expires in 1 block",
        );
        assert_eq!(
            describe_expiry(&name_expiring("d/a", true, Some(-5), value)),
            "expired",
        );
        assert_eq!(describe_expiry(&name_expiring("d/a", false, None, value)), "expiry unknown");
    }
}
