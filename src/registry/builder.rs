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

//! Registry construction from a validated document.
//!
//! The builder trusts the validator for structure and only enforces content
//! rules: uris are trimmed and must be non-empty, and two servers may not
//! share a uri. Allow-lists keep document order and duplicates as given;
//! deduplication, if ever wanted, is the evaluator's concern.

use crate::registry_core::constants::schema::*;
use crate::registry_core::credentials::Credential;
use crate::registry_core::document::Element;
use crate::registry_core::errors::BuildError;
use crate::registry_core::models::{ServerEntry, ServerRegistry};
use crate::schema::validator::ValidatedDocument;
use std::collections::HashSet;

pub struct RegistryBuilder;

impl RegistryBuilder {
    pub fn build(document: ValidatedDocument<'_>) -> Result<ServerRegistry, BuildError> {
        let mut entries = Vec::new();
        let mut seen_uris = HashSet::new();

        for (index, server) in document.root().children_named(ELEMENT_SERVER).enumerate() {
            let entry = Self::build_entry(server, index)?;
            if !seen_uris.insert(entry.uri().to_string()) {
                return Err(BuildError::DuplicateUri {
                    uri: entry.uri().to_string(),
                });
            }
            entries.push(entry);
        }

        Ok(ServerRegistry::from_entries(entries))
    }

    fn build_entry(server: &Element, index: usize) -> Result<ServerEntry, BuildError> {
        // The validator guarantees exactly one uri child.
        let uri = server
            .only_child_named(ELEMENT_URI)
            .map(|el| el.content().trim())
            .unwrap_or_default();
        if uri.is_empty() {
            return Err(BuildError::EmptyUri { index });
        }

        let credential = server
            .only_child_named(ELEMENT_AUTHENTICATION)
            .map(Self::build_credential);

        Ok(ServerEntry {
            uri: uri.to_string(),
            credential,
            allow_requests_from: server.only_child_named(ELEMENT_ALLOW_REQUESTS_FROM).is_some(),
            allow_requests_to: server.only_child_named(ELEMENT_ALLOW_REQUESTS_TO).is_some(),
            domains: Self::collect_list(server, ELEMENT_DOMAINS, ELEMENT_DOMAIN),
            hosts: Self::collect_list(server, ELEMENT_HOSTS, ELEMENT_HOST),
        })
    }

    fn build_credential(auth: &Element) -> Credential {
        let user = auth
            .only_child_named(ELEMENT_USER)
            .map(|el| el.content())
            .unwrap_or_default();
        let password = auth
            .only_child_named(ELEMENT_PASSWORD)
            .map(|el| el.content())
            .unwrap_or_default();
        Credential::new(user, password)
    }

    fn collect_list(server: &Element, list_name: &str, item_name: &str) -> Vec<String> {
        server
            .only_child_named(list_name)
            .map(|list| {
                list.children_named(item_name)
                    .map(|item| item.content().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
