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

use crate::api::{PackagistClient, SearchQuery};
use crate::commands::print_json;
use crate::config::PackagistConfig;
use crate::error::Result;
use serde_json::Value;

pub struct SearchCommand {
    client: PackagistClient,
}

#[derive(Debug, Clone)]
pub struct SearchOptions<'a> {
    pub keyword: Option<&'a str>,
    pub page: u32,
    pub tag: Option<&'a str>,
    pub package_type: Option<&'a str>,
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            keyword: None,
            page: 1,
            tag: None,
            package_type: None,
        }
    }
}

impl SearchCommand {
    pub fn new(config: &PackagistConfig) -> Result<Self> {
        Ok(Self {
            client: PackagistClient::from_config(&config.api),
        })
    }

    pub fn with_client(client: PackagistClient) -> Self {
        Self { client }
    }

    pub fn execute(&self, options: &SearchOptions<'_>, compact: bool) -> Result<()> {
        let value = self.fetch(options)?;

        if let Some(total) = value.get("total").and_then(Value::as_u64) {
            log::info!("{total} matching packages, showing page {}", options.page);
        }

        print_json(&value, compact)
    }

    fn fetch(&self, options: &SearchOptions<'_>) -> Result<Value> {
        match (options.keyword, options.tag, options.package_type) {
            (None, Some(tag), None) => self.client.search_by_tag(tag, options.page),
            (None, None, Some(package_type)) => {
                self.client.search_by_type(package_type, options.page)
            }
            (keyword, tag, package_type) => {
                let mut query = SearchQuery::new(keyword.unwrap_or_default()).page(options.page);
                if let Some(tag) = tag {
                    query = query.tag(tag);
                }
                if let Some(package_type) = package_type {
                    query = query.package_type(package_type);
                }
                self.client.search(&query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_default_options_start_at_first_page() {
        assert_eq!(SearchOptions::default().page, 1);
        assert_eq!(SearchOptions::default().page, SearchQuery::default().page);
    }

    #[test]
    fn test_default_page_is_sent() {
        let mut server = Server::new();
        let m = server
            .mock("GET", "/search.json")
            .match_query(Matcher::Exact("q=monolog&page=1".to_string()))
            .with_status(200)
            .with_body(r#"{"results": [], "total": 0}"#)
            .create();

        let client = PackagistClient::new().with_base_url(server.url());
        let options = SearchOptions {
            keyword: Some("monolog"),
            ..Default::default()
        };
        SearchCommand::with_client(client).fetch(&options).unwrap();

        m.assert();
    }

    #[test]
    fn test_search_by_tag_only() {
        let mut server = Server::new();
        let m = server
            .mock("GET", "/search.json")
            .match_query(Matcher::Exact("tags=mongodb&page=3".to_string()))
            .with_status(200)
            .with_body(r#"{"results": [], "total": 0}"#)
            .create();

        let client = PackagistClient::new().with_base_url(server.url());
        let command = SearchCommand::with_client(client);
        let options = SearchOptions {
            tag: Some("mongodb"),
            page: 3,
            ..Default::default()
        };
        command.fetch(&options).unwrap();

        m.assert();
    }

    #[test]
    fn test_search_keyword_and_type() {
        let mut server = Server::new();
        let m = server
            .mock("GET", "/search.json")
            .match_query(Matcher::Exact("q=monolog&type=library&page=1".to_string()))
            .with_status(200)
            .with_body(r#"{"results": [{"name": "monolog/monolog"}], "total": 1}"#)
            .create();

        let client = PackagistClient::new().with_base_url(server.url());
        let command = SearchCommand::with_client(client);
        let options = SearchOptions {
            keyword: Some("monolog"),
            page: 1,
            package_type: Some("library"),
            ..Default::default()
        };
        let value = command.fetch(&options).unwrap();

        m.assert();
        assert_eq!(value["results"][0]["name"], "monolog/monolog");
    }
}
