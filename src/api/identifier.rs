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

use crate::error::{PackagistError, Result};

/// A package address, either as one `vendor/name` string or as its two parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageIdentifier {
    Combined(String),
    Parts { vendor: String, name: String },
}

impl PackageIdentifier {
    pub fn new(vendor: impl Into<String>, name: impl Into<String>) -> Self {
        PackageIdentifier::Parts {
            vendor: vendor.into(),
            name: name.into(),
        }
    }

    /// Resolve to `(vendor, name)` without touching the network.
    pub fn resolve(&self) -> Result<(&str, &str)> {
        match self {
            PackageIdentifier::Combined(full) => split_package_name(full, None),
            PackageIdentifier::Parts { vendor, name } => {
                split_package_name(vendor, Some(name.as_str()))
            }
        }
    }
}

impl From<&str> for PackageIdentifier {
    fn from(value: &str) -> Self {
        PackageIdentifier::Combined(value.to_string())
    }
}

impl From<String> for PackageIdentifier {
    fn from(value: String) -> Self {
        PackageIdentifier::Combined(value)
    }
}

impl From<(&str, &str)> for PackageIdentifier {
    fn from((vendor, name): (&str, &str)) -> Self {
        PackageIdentifier::new(vendor, name)
    }
}

impl From<(String, String)> for PackageIdentifier {
    fn from((vendor, name): (String, String)) -> Self {
        PackageIdentifier::Parts { vendor, name }
    }
}

/// Split a package identifier into vendor and package name.
///
/// With `name` given both values are used as-is. Without it, `vendor` must
/// hold a `/`: everything before the first one is the vendor, the remainder
/// is the name, so `"a/b/c"` becomes `("a", "b/c")`.
pub fn split_package_name<'a>(
    vendor: &'a str,
    name: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    let (vendor, name) = match name {
        Some(name) => (vendor, name),
        None => vendor.split_once('/').ok_or_else(|| {
            PackagistError::InvalidArgument("The package name is not specified".to_string())
        })?,
    };

    if vendor.is_empty() {
        return Err(PackagistError::InvalidArgument(
            "The vendor name is empty".to_string(),
        ));
    }
    if name.is_empty() {
        return Err(PackagistError::InvalidArgument(
            "The package name is empty".to_string(),
        ));
    }

    Ok((vendor, name))
}
