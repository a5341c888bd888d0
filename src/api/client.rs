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

use crate::api::identifier::PackageIdentifier;
use crate::api::query::{ListQuery, QueryParams, SearchQuery};
use crate::api::transport::{AttohttpcTransport, HttpTransport};
use crate::config::ApiConfig;
use crate::error::{PackagistError, Result};
use log::{debug, trace};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const PACKAGIST_BASE_URL: &str = "https://packagist.org/";

pub struct PackagistClient {
    pub(crate) transport: Box<dyn HttpTransport>,
    pub(crate) base_url: String,
}

impl PackagistClient {
    pub fn new() -> Self {
        Self::with_transport(Box::new(AttohttpcTransport::new()))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let transport =
            AttohttpcTransport::new().with_timeout(Duration::from_secs(config.timeout_secs));
        Self::with_transport(Box::new(transport)).with_base_url(config.base_url.clone())
    }

    pub fn with_transport(transport: Box<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(PACKAGIST_BASE_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_timeout(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `packages/list.json`, optionally filtered.
    pub fn list_packages(&self, filter: Option<&ListQuery>) -> Result<Value> {
        let params = filter.map(ListQuery::to_params).unwrap_or_default();
        self.get_json(&["packages", "list.json"], &params)
    }

    pub fn list_packages_by_organization(&self, vendor: &str) -> Result<Value> {
        self.list_packages(Some(&ListQuery::new().vendor(vendor)))
    }

    pub fn list_packages_by_type(&self, package_type: &str) -> Result<Value> {
        self.list_packages(Some(&ListQuery::new().package_type(package_type)))
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Value> {
        self.get_json(&["search.json"], &query.to_params())
    }

    pub fn search_by_tag(&self, tag: &str, page: u32) -> Result<Value> {
        self.search(&SearchQuery::new("").page(page).tag(tag))
    }

    pub fn search_by_type(&self, package_type: &str, page: u32) -> Result<Value> {
        self.search(&SearchQuery::new("").page(page).package_type(package_type))
    }

    /// `packages/{vendor}/{name}.json`
    pub fn package_data(&self, package: impl Into<PackageIdentifier>) -> Result<Value> {
        let package = package.into();
        let (vendor, name) = package.resolve()?;
        self.get_package_json("packages", vendor, name)
    }

    /// `p/{vendor}/{name}.json`, the document Composer installs from.
    pub fn package_metadata(&self, package: impl Into<PackageIdentifier>) -> Result<Value> {
        let package = package.into();
        let (vendor, name) = package.resolve()?;
        self.get_package_json("p", vendor, name)
    }

    pub fn statistics(&self) -> Result<Value> {
        self.get_json(&["statistics.json"], &QueryParams::new())
    }

    /// `{prefix}/{vendor}/{name}.json`. A `/` inside `name` stays a path
    /// separator; every other reserved character is percent-encoded.
    fn get_package_json(&self, prefix: &str, vendor: &str, name: &str) -> Result<Value> {
        let file = format!("{name}.json");
        let mut segments = vec![prefix, vendor];
        segments.extend(file.split('/'));
        self.get_json(&segments, &QueryParams::new())
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            PackagistError::ConfigError(format!("Invalid base URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PackagistError::ConfigError(format!("Base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url.into())
    }

    fn get_json(&self, segments: &[&str], params: &QueryParams) -> Result<Value> {
        let url = self.endpoint_url(segments)?;
        if params.is_empty() {
            debug!("API Request: {url}");
        } else {
            debug!("API Request: {url}?{}", params.to_query_string());
        }

        let response = self.transport.get(&url, params.as_slice())?;
        debug!("API Response: HTTP {} from {}", response.status, response.url);

        if !response.is_success() {
            return Err(PackagistError::HttpStatus {
                status: response.status,
                url: response.url,
            });
        }

        let value = serde_json::from_slice::<Value>(&response.body).inspect_err(|e| {
            debug!("Failed to parse response from {url} as JSON: {e}");
            trace!("Response body: {}", String::from_utf8_lossy(&response.body));
        })?;

        Ok(value)
    }
}

impl Default for PackagistClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PackagistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackagistClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
