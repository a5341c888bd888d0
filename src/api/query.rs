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

/// Ordered query-string parameters. Absent values never make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `k=v&k=v` form, used for logging.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Filter for `packages/list.json`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub vendor: Option<String>,
    pub package_type: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("vendor", self.vendor.as_deref());
        params.push_opt("type", self.package_type.as_deref());
        params
    }
}

/// Query for `search.json`.
///
/// Empty strings count as absent, so `SearchQuery::new("")` with a tag set
/// sends only `tags` and `page`.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: u32,
    pub tag: Option<String>,
    pub package_type: Option<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            page: 1,
            tag: None,
            package_type: None,
        }
    }
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

        let mut params = QueryParams::new();
        params.push_opt("q", non_empty(self.keyword.as_str()));
        params.push_opt("tags", self.tag.as_deref().and_then(non_empty));
        params.push_opt("type", self.package_type.as_deref().and_then(non_empty));
        params.push("page", self.page);
        params
    }
}
