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

//! Strict structural validation of the servers document.
//!
//! Enforces the grammar
//!
//! ```text
//! servers := server*
//! server  := uri, authentication?, allow-requests-from, allow-requests-to, domains?, hosts?
//! authentication := user, password        (attribute: type = "basic", optional)
//! domains := domain*
//! hosts   := host*
//! ```
//!
//! The schema fails closed: unknown elements are rejected rather than
//! ignored, since silently skipping an access-control element would widen a
//! server's effective permissions.

use crate::registry_core::constants::schema::*;
use crate::registry_core::document::Element;
use crate::registry_core::errors::SchemaError;

/// A document tree that has passed [`SchemaValidator::validate`].
///
/// Only this wrapper can reach `RegistryBuilder::build`, so an unvalidated
/// tree cannot become a registry by construction.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedDocument<'a>(&'a Element);

impl<'a> ValidatedDocument<'a> {
    pub(crate) fn root(&self) -> &'a Element {
        self.0
    }
}

/// Validates a parsed document against the servers grammar.
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn validate(document: &Element) -> Result<ValidatedDocument<'_>, SchemaError> {
        if document.name() != ELEMENT_SERVERS {
            return Err(SchemaError::UnexpectedRoot {
                found: document.name().to_string(),
            });
        }

        for child in document.child_elements() {
            if child.name() != ELEMENT_SERVER {
                return Err(SchemaError::UnknownElement {
                    element: child.name().to_string(),
                    parent: ELEMENT_SERVERS.to_string(),
                });
            }
            Self::validate_server(child)?;
        }

        Ok(ValidatedDocument(document))
    }

    fn validate_server(server: &Element) -> Result<(), SchemaError> {
        let mut seen_uri = 0usize;
        let mut seen_authentication = 0usize;
        let mut seen_allow_from = 0usize;
        let mut seen_allow_to = 0usize;
        let mut seen_domains = 0usize;
        let mut seen_hosts = 0usize;

        for child in server.child_elements() {
            let count = match child.name() {
                ELEMENT_URI => &mut seen_uri,
                ELEMENT_AUTHENTICATION => {
                    Self::validate_authentication(child)?;
                    &mut seen_authentication
                }
                ELEMENT_ALLOW_REQUESTS_FROM => &mut seen_allow_from,
                ELEMENT_ALLOW_REQUESTS_TO => &mut seen_allow_to,
                ELEMENT_DOMAINS => {
                    Self::validate_list(child, ELEMENT_DOMAIN)?;
                    &mut seen_domains
                }
                ELEMENT_HOSTS => {
                    Self::validate_list(child, ELEMENT_HOST)?;
                    &mut seen_hosts
                }
                other => {
                    return Err(SchemaError::UnknownElement {
                        element: other.to_string(),
                        parent: ELEMENT_SERVER.to_string(),
                    });
                }
            };
            *count += 1;
        }

        Self::exactly_one(seen_uri, ELEMENT_URI, ELEMENT_SERVER)?;
        Self::exactly_one(seen_allow_from, ELEMENT_ALLOW_REQUESTS_FROM, ELEMENT_SERVER)?;
        Self::exactly_one(seen_allow_to, ELEMENT_ALLOW_REQUESTS_TO, ELEMENT_SERVER)?;
        Self::at_most_one(seen_authentication, ELEMENT_AUTHENTICATION, ELEMENT_SERVER)?;
        Self::at_most_one(seen_domains, ELEMENT_DOMAINS, ELEMENT_SERVER)?;
        Self::at_most_one(seen_hosts, ELEMENT_HOSTS, ELEMENT_SERVER)?;

        Ok(())
    }

    fn validate_authentication(auth: &Element) -> Result<(), SchemaError> {
        for (name, value) in auth.attributes() {
            if name != ATTR_TYPE {
                return Err(SchemaError::UnknownAttribute {
                    attribute: name.to_string(),
                    element: ELEMENT_AUTHENTICATION.to_string(),
                });
            }
            // Absence of the attribute is a valid default; any present value
            // other than "basic" is rejected.
            if value != AUTH_TYPE_BASIC {
                return Err(SchemaError::InvalidAttributeValue {
                    attribute: ATTR_TYPE.to_string(),
                    element: ELEMENT_AUTHENTICATION.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let mut seen_user = 0usize;
        let mut seen_password = 0usize;

        for child in auth.child_elements() {
            match child.name() {
                ELEMENT_USER => seen_user += 1,
                ELEMENT_PASSWORD => seen_password += 1,
                other => {
                    return Err(SchemaError::UnknownElement {
                        element: other.to_string(),
                        parent: ELEMENT_AUTHENTICATION.to_string(),
                    });
                }
            }
        }

        Self::exactly_one(seen_user, ELEMENT_USER, ELEMENT_AUTHENTICATION)?;
        Self::exactly_one(seen_password, ELEMENT_PASSWORD, ELEMENT_AUTHENTICATION)?;

        Ok(())
    }

    fn validate_list(list: &Element, item_name: &str) -> Result<(), SchemaError> {
        for child in list.child_elements() {
            if child.name() != item_name {
                return Err(SchemaError::UnknownElement {
                    element: child.name().to_string(),
                    parent: list.name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn exactly_one(count: usize, element: &str, parent: &str) -> Result<(), SchemaError> {
        match count {
            0 => Err(SchemaError::MissingElement {
                element: element.to_string(),
                parent: parent.to_string(),
            }),
            1 => Ok(()),
            _ => Err(SchemaError::DuplicateElement {
                element: element.to_string(),
                parent: parent.to_string(),
            }),
        }
    }

    fn at_most_one(count: usize, element: &str, parent: &str) -> Result<(), SchemaError> {
        if count > 1 {
            return Err(SchemaError::DuplicateElement {
                element: element.to_string(),
                parent: parent.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_server(uri: &str) -> Element {
        Element::new("server")
            .child(Element::new("uri").text(uri))
            .child(Element::new("allow-requests-from"))
            .child(Element::new("allow-requests-to"))
    }

    #[test]
    fn test_empty_servers_document_is_valid() {
        let doc = Element::new("servers");
        assert!(SchemaValidator::validate(&doc).is_ok());
    }

    #[test]
    fn test_minimal_server_is_valid() {
        let doc = Element::new("servers").child(minimal_server("https://relay.example.com"));
        assert!(SchemaValidator::validate(&doc).is_ok());
    }

    #[test]
    fn test_wrong_root_rejected() {
        let doc = Element::new("relays");
        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnexpectedRoot {
                found: "relays".to_string()
            }
        );
    }

    #[test]
    fn test_missing_uri_rejected() {
        let server = Element::new("server")
            .child(Element::new("allow-requests-from"))
            .child(Element::new("allow-requests-to"));
        let doc = Element::new("servers").child(server);

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingElement {
                element: "uri".to_string(),
                parent: "server".to_string()
            }
        );
    }

    #[test]
    fn test_missing_allow_markers_rejected() {
        let server = Element::new("server")
            .child(Element::new("uri").text("https://relay.example.com"))
            .child(Element::new("allow-requests-to"));
        let doc = Element::new("servers").child(server);

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingElement {
                element: "allow-requests-from".to_string(),
                parent: "server".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_uri_element_rejected() {
        let server = minimal_server("https://a").child(Element::new("uri").text("https://b"));
        let doc = Element::new("servers").child(server);

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateElement {
                element: "uri".to_string(),
                parent: "server".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_element_rejected() {
        let server = minimal_server("https://relay.example.com").child(Element::new("comment"));
        let doc = Element::new("servers").child(server);

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownElement {
                element: "comment".to_string(),
                parent: "server".to_string()
            }
        );
    }

    #[test]
    fn test_authentication_type_basic_accepted() {
        let auth = Element::new("authentication")
            .attribute("type", "basic")
            .child(Element::new("user").text("u"))
            .child(Element::new("password").text("p"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(auth));

        assert!(SchemaValidator::validate(&doc).is_ok());
    }

    #[test]
    fn test_authentication_type_absent_accepted() {
        let auth = Element::new("authentication")
            .child(Element::new("user").text("u"))
            .child(Element::new("password").text("p"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(auth));

        assert!(SchemaValidator::validate(&doc).is_ok());
    }

    #[test]
    fn test_authentication_type_oauth_rejected() {
        let auth = Element::new("authentication")
            .attribute("type", "oauth")
            .child(Element::new("user").text("u"))
            .child(Element::new("password").text("p"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(auth));

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidAttributeValue {
                attribute: "type".to_string(),
                element: "authentication".to_string(),
                value: "oauth".to_string()
            }
        );
    }

    #[test]
    fn test_authentication_missing_password_rejected() {
        let auth = Element::new("authentication").child(Element::new("user").text("u"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(auth));

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingElement {
                element: "password".to_string(),
                parent: "authentication".to_string()
            }
        );
    }

    #[test]
    fn test_stray_child_in_domains_rejected() {
        let domains = Element::new("domains")
            .child(Element::new("domain").text("example.com"))
            .child(Element::new("host").text("a.example.com"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(domains));

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownElement {
                element: "host".to_string(),
                parent: "domains".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let auth = Element::new("authentication")
            .attribute("realm", "calendar")
            .child(Element::new("user").text("u"))
            .child(Element::new("password").text("p"));
        let doc = Element::new("servers").child(minimal_server("https://a").child(auth));

        let err = SchemaValidator::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownAttribute {
                attribute: "realm".to_string(),
                element: "authentication".to_string()
            }
        );
    }
}
