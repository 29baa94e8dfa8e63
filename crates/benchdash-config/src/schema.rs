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

//! Serde schema for the dashboard configuration file.

use benchdash_core::{PathTree, Value};
use indexmap::IndexMap;
use serde::Deserialize;

/// An arbitrarily nested JSON tree with insertion order preserved.
///
/// Variant order matters: objects must be tried before scalars so that
/// `#[serde(untagged)]` classifies them correctly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTree {
    /// A nested mapping.
    Node(IndexMap<String, RawTree>),
    /// A string leaf.
    String(String),
    /// A boolean leaf.
    Bool(bool),
    /// An integer leaf.
    Int(i64),
    /// A float leaf.
    Float(f64),
    /// A null leaf.
    Null,
}

impl RawTree {
    /// Returns true if this is an empty mapping.
    pub fn is_empty_node(&self) -> bool {
        matches!(self, Self::Node(map) if map.is_empty())
    }

    /// Convert into a [`PathTree`].
    ///
    /// With `empty_as_null`, empty mappings become `Value::Null` leaves: the
    /// adjacency mapping uses `{}` as a branch terminator, and a Null leaf
    /// keeps the converted tree uniform-depth. View structures pass `false`
    /// so an empty object stays an empty node (declaring no views).
    pub fn to_path_tree(&self, empty_as_null: bool) -> PathTree {
        match self {
            Self::Node(map) if map.is_empty() && empty_as_null => PathTree::Leaf(Value::Null),
            Self::Node(map) => {
                let mut node = PathTree::node();
                for (key, subtree) in map {
                    // Inserting into a fresh node cannot fail.
                    let _ = node.insert(key.clone(), subtree.to_path_tree(empty_as_null));
                }
                node
            }
            Self::String(s) => PathTree::leaf(s.as_str()),
            Self::Bool(b) => PathTree::leaf(*b),
            Self::Int(n) => PathTree::leaf(*n),
            Self::Float(n) => PathTree::leaf(*n),
            Self::Null => PathTree::Leaf(Value::Null),
        }
    }
}

/// Dashboard-level metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardMetadata {
    /// Dashboard title, rendered on the home page.
    #[serde(default = "default_title")]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Default for DashboardMetadata {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
        }
    }
}

fn default_title() -> String {
    "Benchmark Dashboard".to_string()
}

/// The canonical component ordering and adjacency mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentMap {
    /// One repository id per mapping level, in canonical order.
    pub component_order: Vec<String>,
    /// Nested id-tree relating entities across repositories.
    pub mapping: RawTree,
}

/// Display metadata for a repository or entity.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentMetadata {
    /// Human-readable name.
    pub display_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// The full dashboard configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSchema {
    /// Dashboard metadata.
    #[serde(default)]
    pub metadata: DashboardMetadata,
    /// Canonical ordering and adjacency mapping.
    pub component_map: ComponentMap,
    /// Repository metadata by id.
    pub repositories: IndexMap<String, ComponentMetadata>,
    /// Entity definitions by repository id.
    pub components: IndexMap<String, IndexMap<String, ComponentMetadata>>,
    /// Declared view structures by repository id.
    #[serde(default)]
    pub views: IndexMap<String, RawTree>,
}
