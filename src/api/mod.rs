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

//! Client for the Packagist registry API.
//!
//! Every operation issues exactly one GET request and hands back the decoded
//! JSON body as a [`serde_json::Value`]. Failures are always returned to the
//! caller; nothing is retried and nothing is turned into an empty result.

mod client;
mod identifier;
mod query;
mod transport;

pub use client::{PACKAGIST_BASE_URL, PackagistClient};
pub use identifier::{PackageIdentifier, split_package_name};
pub use query::{ListQuery, QueryParams, SearchQuery};
pub use transport::{AttohttpcTransport, DEFAULT_TIMEOUT, HttpTransport, TransportResponse};
