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

//! relaygate: an access-control registry for remote relay servers.
//!
//! This library loads a parsed configuration document describing remote
//! proxy/relay servers, validates it against a strict grammar, and answers
//! runtime queries: may context C send requests through server S, may S
//! relay to destination D, and what are server S's credentials.

pub mod config;
pub mod engine;
pub mod registry;
pub mod registry_core;
pub mod schema;
pub mod utils;
