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

//! Implementation of the [`Error`] type for ledger RPC failures.

use std::fmt;

use reqwest::StatusCode;

/// Errors that arise while talking to the ledger node.
#[derive(Debug)]
pub enum Error {
    /// The HTTP request could not be made or its body could not be
    /// read.
    Http(reqwest::Error),

    /// The node answered with an HTTP error status and no JSON-RPC
    /// response (typically 401 when credentials are wrong).
    Status(StatusCode),

    /// The response body was not a JSON-RPC response.
    InvalidResponse(serde_json::Error),

    /// The node returned a JSON-RPC error object.
    Rpc { code: i64, message: String },

    /// The response had neither a result nor an error.
    MissingResult,

    /// The result of the named method did not have the expected shape.
    UnexpectedResult(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Status(status) => write!(f, "the node responded with HTTP status {}", status),
            Self::InvalidResponse(e) => write!(f, "invalid JSON-RPC response: {}", e),
            Self::Rpc { code, message } => {
                write!(f, "the node returned error {}: {}", code, message)
            }
            Self::MissingResult => f.write_str("the response contained no result"),
            Self::UnexpectedResult(method) => {
                write!(f, "the result of {} had an unexpected shape", method)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}

/// A result type for ledger RPC calls.
pub type Result<T> = std::result::Result<T, Error>;
