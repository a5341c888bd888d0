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

use crate::api::{ListQuery, PackagistClient};
use crate::commands::print_json;
use crate::config::PackagistConfig;
use crate::error::Result;
use log::debug;
use serde_json::Value;

pub struct ListCommand {
    client: PackagistClient,
}

impl ListCommand {
    pub fn new(config: &PackagistConfig) -> Result<Self> {
        Ok(Self {
            client: PackagistClient::from_config(&config.api),
        })
    }

    pub fn with_client(client: PackagistClient) -> Self {
        Self { client }
    }

    pub fn execute(
        &self,
        vendor: Option<&str>,
        package_type: Option<&str>,
        compact: bool,
    ) -> Result<()> {
        let value = self.fetch(vendor, package_type)?;
        print_json(&value, compact)
    }

    fn fetch(&self, vendor: Option<&str>, package_type: Option<&str>) -> Result<Value> {
        match (vendor, package_type) {
            (Some(vendor), None) => self.client.list_packages_by_organization(vendor),
            (None, Some(package_type)) => self.client.list_packages_by_type(package_type),
            (None, None) => self.client.list_packages(None),
            (Some(vendor), Some(package_type)) => {
                debug!("Listing packages of type {package_type} from {vendor}");
                let filter = ListQuery::new().vendor(vendor).package_type(package_type);
                self.client.list_packages(Some(&filter))
            }
        }
    }
}
