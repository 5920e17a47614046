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

//! Access evaluation engine.
//!
//! Applies the gate chain to a relay query: server lookup, inbound gate,
//! outbound gate, then destination scope against the hosts/domains
//! allow-lists. All checks are pure in-memory lookups against an immutable
//! registry snapshot.

use crate::registry_core::models::{Decision, DenyReason, ServerEntry, ServerRegistry};
use tracing::debug;

pub struct AccessEvaluator;

impl AccessEvaluator {
    /// Answer whether `server_uri` may receive requests from `origin` and,
    /// when `destination` is supplied, relay them there.
    ///
    /// Denial is a normal outcome carrying a reason code, never an error.
    pub fn can_relay(
        registry: &ServerRegistry,
        server_uri: &str,
        origin: &str,
        destination: Option<&str>,
    ) -> Decision {
        let Some(entry) = registry.lookup(server_uri) else {
            debug!(server = server_uri, origin, "relay query for unknown server");
            return Decision::Deny {
                reason: DenyReason::UnknownServer,
            };
        };

        // Inbound gate: the origin context is asking to use this server.
        // Always present post-validation, but checked defensively in case
        // the schema ever relaxes the marker to optional.
        if !entry.allow_requests_from {
            return Decision::Deny {
                reason: DenyReason::NotAllowedFrom,
            };
        }

        if let Some(destination) = destination {
            // Outbound gate: the server would relay onward.
            if !entry.allow_requests_to {
                return Decision::Deny {
                    reason: DenyReason::NotAllowedTo,
                };
            }

            if entry.has_destination_scope() && !Self::destination_in_scope(entry, destination) {
                debug!(
                    server = server_uri,
                    origin, destination, "destination outside allow-lists"
                );
                return Decision::Deny {
                    reason: DenyReason::DestinationNotAllowed,
                };
            }
        }

        Decision::Allow
    }

    fn destination_in_scope(entry: &ServerEntry, destination: &str) -> bool {
        let destination = normalize(destination);

        entry
            .hosts
            .iter()
            .any(|host| destination.eq_ignore_ascii_case(normalize(host.trim())))
            || entry
                .domains
                .iter()
                .any(|pattern| domain_matches(destination, pattern))
    }
}

/// Strip the optional FQDN trailing dot before comparison.
fn normalize(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Label-boundary domain suffix matching, ASCII case-insensitive.
///
/// `example.com` matches `example.com` and `sub.example.com` but never
/// `notexample.com`: a suffix match only counts when the character before
/// the suffix is a label separator. An empty pattern matches nothing.
pub fn domain_matches(destination: &str, pattern: &str) -> bool {
    let pattern = normalize(pattern.trim());
    if pattern.is_empty() || destination.is_empty() {
        return false;
    }

    if destination.eq_ignore_ascii_case(pattern) {
        return true;
    }

    // Suffix match on a label boundary: "<labels>.<pattern>".
    if destination.len() > pattern.len() {
        let boundary = destination.len() - pattern.len() - 1;
        // Indexing is safe only on a char boundary; '.' is ASCII so a direct
        // byte check suffices and non-boundary offsets simply fail the test.
        return destination.as_bytes()[boundary] == b'.'
            && destination[boundary + 1..].eq_ignore_ascii_case(pattern);
    }

    false
}
