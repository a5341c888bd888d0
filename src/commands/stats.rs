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

use crate::api::PackagistClient;
use crate::commands::print_json;
use crate::config::PackagistConfig;
use crate::error::Result;

pub struct StatsCommand {
    client: PackagistClient,
}

impl StatsCommand {
    pub fn new(config: &PackagistConfig) -> Result<Self> {
        Ok(Self {
            client: PackagistClient::from_config(&config.api),
        })
    }

    pub fn execute(&self, compact: bool) -> Result<()> {
        let value = self.client.statistics()?;
        print_json(&value, compact)
    }
}
