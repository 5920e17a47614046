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

//! relaygate constants - single source of truth for all configuration values.
//!
//! This module centralizes the document grammar vocabulary, environment
//! variable names, and audit event types to ensure consistency and
//! maintainability. The element and attribute names are part of the
//! compatibility contract with existing deployments and must not change.

/// Document grammar vocabulary
pub mod schema {
    /// Root element holding zero or more server definitions
    pub const ELEMENT_SERVERS: &str = "servers";
    /// One remote server definition
    pub const ELEMENT_SERVER: &str = "server";
    /// The server's network endpoint identifier
    pub const ELEMENT_URI: &str = "uri";
    /// Optional credential block
    pub const ELEMENT_AUTHENTICATION: &str = "authentication";
    /// Credential user name
    pub const ELEMENT_USER: &str = "user";
    /// Credential password
    pub const ELEMENT_PASSWORD: &str = "password";
    /// Marker: local contexts may originate requests to this server
    pub const ELEMENT_ALLOW_REQUESTS_FROM: &str = "allow-requests-from";
    /// Marker: this server may relay requests to remote destinations
    pub const ELEMENT_ALLOW_REQUESTS_TO: &str = "allow-requests-to";
    /// Container of domain patterns
    pub const ELEMENT_DOMAINS: &str = "domains";
    /// One domain pattern
    pub const ELEMENT_DOMAIN: &str = "domain";
    /// Container of literal hostnames
    pub const ELEMENT_HOSTS: &str = "hosts";
    /// One literal hostname
    pub const ELEMENT_HOST: &str = "host";

    /// Credential scheme attribute on `authentication`
    pub const ATTR_TYPE: &str = "type";
    /// The only accepted credential scheme
    pub const AUTH_TYPE_BASIC: &str = "basic";
}

/// Environment variable names for `Config::from_env`
pub mod config {
    pub const ENV_SERVERS_DOCUMENT_PATH: &str = "RELAYGATE_SERVERS_DOCUMENT_PATH";
    pub const ENV_LOG_LEVEL: &str = "RELAYGATE_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "RELAYGATE_LOG_FORMAT";
    pub const ENV_OWNER: &str = "RELAYGATE_OWNER";
}

/// Audit event types emitted on the "audit" tracing target
pub mod audit {
    pub const EVENT_REGISTRY_INSTALLED: &str = "RegistryInstalled";
    pub const EVENT_RELOAD_REJECTED: &str = "ReloadRejected";
    pub const EVENT_DECISION: &str = "Decision";
    pub const EVENT_CREDENTIAL_ACCESS: &str = "CredentialAccess";
}
