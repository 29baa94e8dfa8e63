// Dweve Benchdash - HPC Benchmark Dashboard Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dashboard configuration loading and validation.
//!
//! Reads a JSON configuration file (C-style comments and trailing commas
//! allowed), validates every cross-reference — canonical levels, mapping
//! entities, view level names — and converts it into the in-memory
//! [`CatalogConfig`](benchdash_core::CatalogConfig) consumed by the
//! orchestrator. Validation is fail-fast: a broken configuration never
//! reaches the render pass.

mod error;
mod loader;
mod preprocess;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, parse_config};
pub use preprocess::{preprocess, strip_comments, strip_trailing_commas};
pub use schema::{ComponentMap, ComponentMetadata, DashboardMetadata, DashboardSchema, RawTree};
