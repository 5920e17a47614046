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

//! Structured audit logging for registry decisions and reloads.
//!
//! Every access decision and every registry install/rejection is emitted on
//! the dedicated "audit" tracing target with a JSON payload, so operators can
//! route the access-control trail separately from diagnostic logs. Credential
//! material never appears in a payload.

use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct AuditEntry<'a> {
    owner: &'a str,
    timestamp: f64,
    event_type: &'a str,
    details: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct AuditLogger {
    owner: String,
}

impl AuditLogger {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    pub fn log(&self, event_type: &str, details: serde_json::Value) {
        let entry = AuditEntry {
            owner: &self.owner,
            timestamp: crate::utils::time::now(),
            event_type,
            details,
        };

        let payload = serde_json::to_string(&entry).unwrap_or_default();

        info!(
            target: "audit",
            payload = %payload,
            "AUDIT_LOG"
        );
    }
}
