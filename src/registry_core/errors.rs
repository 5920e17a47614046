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

// Domain error types. Validation and build failures are operator-facing;
// evaluation denials are NOT errors and live in models::Decision instead.

use thiserror::Error;

/// Structural violations of the document grammar.
///
/// The schema is strict: unrecognized elements and attributes are rejected
/// rather than ignored, since silently dropping an access-control element
/// would widen the effective permissions of a server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Root element is not `servers`
    #[error("unexpected root element '{found}' (expected 'servers')")]
    UnexpectedRoot { found: String },

    /// An element the grammar does not know about
    #[error("unknown element '{element}' inside '{parent}'")]
    UnknownElement { element: String, parent: String },

    /// An attribute the grammar does not know about
    #[error("unknown attribute '{attribute}' on '{element}'")]
    UnknownAttribute { attribute: String, element: String },

    /// A required child element is absent
    #[error("missing required element '{element}' inside '{parent}'")]
    MissingElement { element: String, parent: String },

    /// A singleton child element appears more than once
    #[error("element '{element}' appears more than once inside '{parent}'")]
    DuplicateElement { element: String, parent: String },

    /// An attribute carries a value outside its enumeration
    #[error("invalid value '{value}' for attribute '{attribute}' on '{element}'")]
    InvalidAttributeValue {
        attribute: String,
        element: String,
        value: String,
    },
}

/// Semantically invalid content in a structurally valid document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A server's uri is empty after trimming
    #[error("server #{index} has an empty uri")]
    EmptyUri { index: usize },

    /// Two server entries share a uri; precedence would be ambiguous
    #[error("duplicate server uri '{uri}'")]
    DuplicateUri { uri: String },
}

/// Top-level error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed document shape - reload aborted, previous registry kept
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Semantically invalid content - same policy
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// Configuration error (environment, logging setup)
    #[error("configuration error: {0}")]
    Configuration(String),
}
