// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::PackagistError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a PackagistError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a PackagistError) -> Self {
        let (suggestion, details) = match error {
            PackagistError::InvalidArgument(msg) => {
                let suggestion = Some(
                    "Packages are addressed as '<vendor>/<name>' (e.g., 'monolog/monolog')."
                        .to_string(),
                );
                let details = Some(format!("Rejected input: {msg}"));
                (suggestion, details)
            }
            PackagistError::HttpStatus { status, url } => {
                let suggestion = match status {
                    404 => Some(
                        "The package or endpoint does not exist. Check the vendor and package \
                         name spelling."
                            .to_string(),
                    ),
                    429 => Some(
                        "The registry is rate limiting requests. Please wait a few minutes and \
                         try again."
                            .to_string(),
                    ),
                    500..=599 => Some(
                        "The registry reported a server error. Please try again later.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("Request to {url} failed with status {status}"));
                (suggestion, details)
            }
            PackagistError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check the config file at $PACKAGIST_CONFIG (or the default config \
                     directory) and any PACKAGIST_* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            PackagistError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                    || error_string.contains("timed out")
                {
                    Some(
                        "Try increasing the timeout with PACKAGIST_API__TIMEOUT_SECS (e.g., \
                         PACKAGIST_API__TIMEOUT_SECS=120)."
                            .to_string(),
                    )
                } else {
                    Some("Check your internet connection and proxy settings.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            PackagistError::Json(json_err) => {
                let suggestion = Some(
                    "The server did not return JSON. Verify the configured base URL points at a \
                     Packagist instance."
                        .to_string(),
                );
                let details = Some(format!("Decode error: {json_err}"));
                (suggestion, details)
            }
            PackagistError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::TimedOut => Some(
                        "The request timed out. Try again or raise PACKAGIST_API__TIMEOUT_SECS."
                            .to_string(),
                    ),
                    std::io::ErrorKind::ConnectionRefused => {
                        Some("Ensure the configured base URL is reachable.".to_string())
                    }
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
