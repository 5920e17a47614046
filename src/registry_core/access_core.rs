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

//! Access Core.
//!
//! The central brain of relaygate. It owns the swappable registry handle,
//! answers authorization and credential queries against the current
//! snapshot, and emits audit records for every decision and reload. It is
//! pure software logic and does not know about file formats, parsers, or
//! transports.

use serde_json::json;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::credentials::CredentialProvider;
use crate::engine::evaluator::AccessEvaluator;
use crate::registry::handle::RegistryHandle;
use crate::registry_core::audit::AuditLogger;
use crate::registry_core::constants::audit;
use crate::registry_core::credentials::Credential;
use crate::registry_core::document::Element;
use crate::registry_core::errors::RegistryError;
use crate::registry_core::models::{Decision, ServerRegistry};

pub struct AccessCore {
    pub config: Arc<Config>,
    handle: RegistryHandle,
    audit: AuditLogger,
}

impl AccessCore {
    /// Core with an empty registry; every query denies until a document is
    /// loaded.
    pub fn new(config: Arc<Config>) -> Self {
        let audit = AuditLogger::new(config.owner.clone());
        Self {
            config,
            handle: RegistryHandle::empty(),
            audit,
        }
    }

    /// Validate, build, and atomically install a new registry from
    /// `document`. On failure the previous registry keeps serving and the
    /// error is surfaced to the operator.
    pub fn reload(&self, document: &Element) -> Result<(), RegistryError> {
        match self.handle.reload(document) {
            Ok(count) => {
                self.audit.log(
                    audit::EVENT_REGISTRY_INSTALLED,
                    json!({ "servers": count }),
                );
                Ok(())
            }
            Err(e) => {
                self.audit.log(
                    audit::EVENT_RELOAD_REJECTED,
                    json!({ "error": e.to_string() }),
                );
                Err(e)
            }
        }
    }

    /// Is `server_uri` permitted to receive requests from `origin` and,
    /// when given, relay them to `destination`? Audited.
    pub fn authorize(
        &self,
        server_uri: &str,
        origin: &str,
        destination: Option<&str>,
    ) -> Decision {
        let snapshot = self.handle.current();
        let decision = AccessEvaluator::can_relay(&snapshot, server_uri, origin, destination);

        self.audit.log(
            audit::EVENT_DECISION,
            json!({
                "server": server_uri,
                "origin": origin,
                "destination": destination,
                "decision": decision,
            }),
        );

        decision
    }

    /// Authentication material for `server_uri`, cloned out of the current
    /// snapshot so the caller's lifetime is independent of reloads. The
    /// audit record names the server and user, never the password.
    pub fn credentials_for(&self, server_uri: &str) -> Option<Credential> {
        let snapshot = self.handle.current();
        let credential = CredentialProvider::credentials_for(&snapshot, server_uri).cloned();

        self.audit.log(
            audit::EVENT_CREDENTIAL_ACCESS,
            json!({
                "server": server_uri,
                "user": credential.as_ref().map(Credential::user),
                "found": credential.is_some(),
            }),
        );

        credential
    }

    /// Current registry snapshot, for operator-facing listings.
    pub fn snapshot(&self) -> Arc<ServerRegistry> {
        self.handle.current()
    }
}
