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

//! Credential material for remote servers.
//!
//! The password is wrapped in `secrecy::Secret` so it cannot leak through
//! `Debug` formatting or accidental serialization, and is zeroized when the
//! registry it belongs to is dropped. Callers reach the plaintext only
//! through the explicit [`Credential::expose_password`] choke point.

use secrecy::{ExposeSecret, Secret};
use std::fmt;

/// Basic-auth `(user, password)` pair for one server entry.
pub struct Credential {
    user: String,
    password: Secret<String>,
}

impl Credential {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Expose the plaintext password. Keep the returned borrow short-lived;
    /// never log it and never store it outside the registry.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self {
            user: self.user.clone(),
            password: Secret::new(self.password.expose_secret().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let cred = Credential::new("svc-user", "hunter2");
        let rendered = format!("{:?}", cred);
        assert!(rendered.contains("svc-user"));
        assert!(rendered.contains("<REDACTED>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_expose_returns_verbatim() {
        let cred = Credential::new("svc-user", "hunter2");
        assert_eq!(cred.user(), "svc-user");
        assert_eq!(cred.expose_password(), "hunter2");
    }
}
