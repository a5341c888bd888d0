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

use crate::error::Result;
use crate::user_agent;
use attohttpc::Session;
use log::trace;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The HTTP layer the client delegates to.
///
/// Implementations report transport failures as errors and hand back any
/// response they received, whatever its status. Status handling and JSON
/// decoding belong to the client.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<TransportResponse>;

    fn set_timeout(&mut self, timeout: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub url: String,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct AttohttpcTransport {
    session: Session,
}

impl AttohttpcTransport {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::api_client());
        session.timeout(DEFAULT_TIMEOUT);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self { session }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }
}

impl Default for AttohttpcTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for AttohttpcTransport {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<TransportResponse> {
        let mut request = self.session.get(url);
        for (key, value) in params {
            request = request.param(key, value);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.bytes()?;
        trace!("Received {} bytes from {final_url}", body.len());

        Ok(TransportResponse {
            status,
            url: final_url,
            body,
        })
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.session.timeout(timeout);
    }
}
