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

use crate::api::PACKAGIST_BASE_URL;
use crate::error::Result;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = "packagist";
const CONFIG_PATH_ENV: &str = "PACKAGIST_CONFIG";
const ENV_PREFIX: &str = "PACKAGIST";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackagistConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_base_url() -> String {
    PACKAGIST_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Where the config file is looked up: `$PACKAGIST_CONFIG`, else the
/// platform config directory.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl PackagistConfig {
    /// Load defaults, then the config file if present, then `PACKAGIST_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        Self::load_with_env(config_file_path().as_deref(), None)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env(Some(path), None)
    }

    /// `env` replaces the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if path.exists() {
                log::debug!("Loading config from {path:?}");
            } else {
                log::debug!("Config file not found at {path:?}, using defaults");
            }
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let config: PackagistConfig = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        log::debug!(
            "Using base URL {} with {}s timeout",
            config.api.base_url,
            config.api.timeout_secs
        );
        Ok(config)
    }
}
