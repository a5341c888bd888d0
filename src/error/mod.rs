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

mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackagistError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP {status} returned from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PackagistError {
    /// The reader of our output went away, e.g. `packagist list | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PackagistError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

impl From<config::ConfigError> for PackagistError {
    fn from(err: config::ConfigError) -> Self {
        PackagistError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PackagistError>;
