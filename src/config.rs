// Copyright 2026 BadCompany
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

use crate::registry_core::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the embedding process reads the servers document from. The
    /// registry itself never touches the filesystem; the wrapper parses the
    /// file and hands over the tree.
    pub servers_document_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String, // "json" or "text"
    /// Operator identity stamped on audit records
    pub owner: String,
}

impl Config {
    pub fn from_env() -> Result<Self, RegistryError> {
        Ok(Self {
            servers_document_path: env::var(
                crate::registry_core::constants::config::ENV_SERVERS_DOCUMENT_PATH,
            )
            .ok()
            .map(PathBuf::from),
            log_level: env::var(crate::registry_core::constants::config::ENV_LOG_LEVEL)
                .unwrap_or_else(|_| "info".to_string()),
            log_format: env::var(crate::registry_core::constants::config::ENV_LOG_FORMAT)
                .unwrap_or_else(|_| "text".to_string()),
            owner: env::var(crate::registry_core::constants::config::ENV_OWNER)
                .unwrap_or_else(|_| "unknown".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers_document_path: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            owner: "unknown".to_string(),
        }
    }
}
