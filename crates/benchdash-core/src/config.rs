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

//! In-memory catalog configuration.
//!
//! These are plain, already-validated inputs to the
//! [`Orchestrator`](crate::Orchestrator). Parsing a configuration file into
//! this shape is the job of an external collaborator (the `benchdash-config`
//! crate).

use crate::tree::PathTree;
use indexmap::IndexMap;

/// Display metadata shared by repositories and entities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentMeta {
    /// Human-readable name.
    pub display_name: String,
    /// Free-form description, possibly empty.
    pub description: String,
}

impl ComponentMeta {
    /// Create metadata with an empty description.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: String::new(),
        }
    }

    /// Create metadata with a description.
    pub fn new(display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
        }
    }
}

/// The full in-memory input to an orchestrator.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Dashboard title, rendered on the home page.
    pub title: String,
    /// Canonical level order: one repository id per mapping level.
    pub tree_order: Vec<String>,
    /// Canonical adjacency tree relating entities across repositories.
    pub mapping: PathTree,
    /// Repository metadata, in declaration order.
    pub repositories: IndexMap<String, ComponentMeta>,
    /// Entity definitions per repository, in declaration order.
    pub components: IndexMap<String, IndexMap<String, ComponentMeta>>,
    /// Declared view structures per repository.
    pub views: IndexMap<String, PathTree>,
}
