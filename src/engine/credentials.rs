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

//! Credential lookup for remote servers.
//!
//! The single sanctioned path to authentication material: callers that need
//! to authenticate against a relay go through `credentials_for` and must
//! scope the returned borrow narrowly. The password stays secrecy-wrapped
//! inside the registry; nothing here copies it out.

use crate::registry_core::credentials::Credential;
use crate::registry_core::models::ServerRegistry;

pub struct CredentialProvider;

impl CredentialProvider {
    /// Authentication material for `server_uri`, or `None` when the server
    /// is unknown or carries no authentication block.
    pub fn credentials_for<'a>(
        registry: &'a ServerRegistry,
        server_uri: &str,
    ) -> Option<&'a Credential> {
        registry.lookup(server_uri)?.credential.as_ref()
    }
}
