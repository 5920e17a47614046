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

//! Domain models for the relaygate registry.
//!
//! Pure data structures representing server entries, the immutable registry,
//! and evaluation decisions. Free of I/O side effects; construction happens
//! in `registry::builder`, queries in `engine`.

use crate::registry_core::credentials::Credential;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One remote server configuration.
///
/// Fields are crate-private on purpose: external callers must go through
/// `AccessEvaluator::can_relay` and `CredentialProvider::credentials_for`
/// so the credential material and rule sets stay encapsulated.
#[derive(Debug, Clone)]
pub struct ServerEntry {
    pub(crate) uri: String,
    pub(crate) credential: Option<Credential>,
    /// Local contexts may originate requests to this server. Required by the
    /// current grammar, but threaded through as a flag in case the schema
    /// later relaxes the marker to optional.
    pub(crate) allow_requests_from: bool,
    /// This server may be used to reach remote destinations.
    pub(crate) allow_requests_to: bool,
    /// Domain-pattern allow-list in document order, duplicates preserved.
    /// Empty means unrestricted.
    pub(crate) domains: Vec<String>,
    /// Literal hostname allow-list, same conventions as `domains`.
    pub(crate) hosts: Vec<String>,
}

impl ServerEntry {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// True when at least one of the allow-lists restricts the relay scope.
    pub(crate) fn has_destination_scope(&self) -> bool {
        !self.domains.is_empty() || !self.hosts.is_empty()
    }
}

/// Immutable collection of [`ServerEntry`] records, built once per load.
///
/// Entries keep document order; the index maps uri to position. A reload
/// constructs a brand-new registry and swaps it in whole (see
/// `registry::handle`), so concurrent readers never observe a partial
/// update.
#[derive(Debug, Default)]
pub struct ServerRegistry {
    entries: Vec<ServerEntry>,
    by_uri: HashMap<String, usize>,
}

impl ServerRegistry {
    pub(crate) fn from_entries(entries: Vec<ServerEntry>) -> Self {
        let by_uri = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.uri.clone(), idx))
            .collect();
        Self { entries, by_uri }
    }

    pub(crate) fn lookup(&self, uri: &str) -> Option<&ServerEntry> {
        self.by_uri.get(uri).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Server uris in document order, for operator-facing listings.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.uri.as_str())
    }
}

/// Outcome of one access evaluation.
///
/// Denial is the common case on an access-control path; it is a normal,
/// expected result with a reason code, never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Decision {
    /// Request is allowed
    Allow,
    /// Request is denied with a reason code
    Deny { reason: DenyReason },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Reason codes for denials, for observability and audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DenyReason {
    /// No server entry with the requested uri
    UnknownServer,
    /// Entry does not accept requests from local contexts
    NotAllowedFrom,
    /// Entry may not relay to remote destinations
    NotAllowedTo,
    /// Destination matched neither the hosts nor the domains allow-list
    DestinationNotAllowed,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DenyReason::UnknownServer => "unknown server",
            DenyReason::NotAllowedFrom => "requests from local contexts not allowed",
            DenyReason::NotAllowedTo => "relaying to remote destinations not allowed",
            DenyReason::DestinationNotAllowed => "destination not in allow-list",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(uri: &str) -> ServerEntry {
        ServerEntry {
            uri: uri.to_string(),
            credential: None,
            allow_requests_from: true,
            allow_requests_to: true,
            domains: Vec::new(),
            hosts: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_by_uri() {
        let registry = ServerRegistry::from_entries(vec![
            entry("https://relay-a.example.com"),
            entry("https://relay-b.example.com"),
        ]);

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("https://relay-b.example.com").is_some());
        assert!(registry.lookup("https://relay-c.example.com").is_none());
    }

    #[test]
    fn test_uris_keep_document_order() {
        let registry = ServerRegistry::from_entries(vec![entry("b"), entry("a")]);
        let uris: Vec<&str> = registry.uris().collect();
        assert_eq!(uris, vec!["b", "a"]);
    }

    #[test]
    fn test_destination_scope_flag() {
        let mut scoped = entry("s");
        scoped.domains.push("example.com".to_string());
        assert!(scoped.has_destination_scope());
        assert!(!entry("u").has_destination_scope());
    }
}
