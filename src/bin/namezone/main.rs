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

//! The `namezone` command-line tool.

use std::fmt::Write;
use std::process;

use env_logger::Env;
use log::error;

mod args;
mod config;
mod generate;
mod resolve;

use args::Command;

fn main() {
    let args = args::parse();

    // Logs go to standard error, so standard output carries only zone
    // data.
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    let result = match args.command {
        Command::Generate(generate_args) => generate::run(generate_args),
        Command::Resolve(resolve_args) => resolve::run(resolve_args),
    };

    if let Err(e) = result {
        let mut message = String::from("Failed:");
        for (i, cause) in e.chain().enumerate() {
            write!(message, "\n[{}] {}", i + 1, cause).unwrap();
        }
        message.push_str("\nExiting with failure.");
        error!("{}", message);
        process::exit(1);
    }
}
