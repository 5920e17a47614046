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

//! Atomically-swappable registry handle.
//!
//! The registry is read-mostly shared state: built once, queried for the
//! process lifetime, replaced wholesale on reload. `ArcSwap` gives lock-free
//! snapshot reads; a query in flight at the instant of a swap completes
//! against the snapshot it loaded, never a mixture of old and new entries.

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::registry::builder::RegistryBuilder;
use crate::registry_core::document::Element;
use crate::registry_core::errors::RegistryError;
use crate::registry_core::models::ServerRegistry;
use crate::schema::validator::SchemaValidator;

pub struct RegistryHandle {
    inner: ArcSwap<ServerRegistry>,
}

impl RegistryHandle {
    /// Handle over an already-built registry.
    pub fn new(registry: ServerRegistry) -> Self {
        Self {
            inner: ArcSwap::from_pointee(registry),
        }
    }

    /// Handle with no servers configured; every query denies with
    /// `UnknownServer` until a document is loaded.
    pub fn empty() -> Self {
        Self::new(ServerRegistry::default())
    }

    /// Current registry snapshot. Cheap; callers may hold it across a reload
    /// and keep reading the old state.
    pub fn current(&self) -> Arc<ServerRegistry> {
        self.inner.load_full()
    }

    /// Replace the registry wholesale.
    pub fn install(&self, registry: ServerRegistry) {
        info!(servers = registry.len(), "registry installed");
        self.inner.store(Arc::new(registry));
    }

    /// Validate and build a new registry from `document`, then swap it in.
    ///
    /// On any failure the previous registry stays in service (last-known-good)
    /// and the error is returned to the operator; a broken registry is never
    /// partially installed.
    pub fn reload(&self, document: &Element) -> Result<usize, RegistryError> {
        let registry = match Self::build_registry(document) {
            Ok(registry) => registry,
            Err(e) => {
                warn!(error = %e, "registry reload rejected, keeping previous configuration");
                return Err(e);
            }
        };

        let count = registry.len();
        self.install(registry);
        Ok(count)
    }

    fn build_registry(document: &Element) -> Result<ServerRegistry, RegistryError> {
        let validated = SchemaValidator::validate(document)?;
        let registry = RegistryBuilder::build(validated)?;
        Ok(registry)
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::empty()
    }
}
