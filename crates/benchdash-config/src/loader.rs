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

//! Configuration loading, validation, and conversion.
//!
//! All cross-reference checks happen here, before an orchestrator is built:
//! a broken configuration must fail fast with the offending id rather than
//! surface halfway through a render pass.

use crate::error::{ConfigError, ConfigResult};
use crate::preprocess::preprocess;
use crate::schema::{ComponentMetadata, DashboardSchema, RawTree};
use benchdash_core::{CatalogConfig, ComponentMeta};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Load, validate, and convert a configuration file.
pub fn load_config(path: &Path) -> ConfigResult<CatalogConfig> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
    parse_config(&raw)
}

/// Parse, validate, and convert configuration text.
pub fn parse_config(input: &str) -> ConfigResult<CatalogConfig> {
    let cleaned = preprocess(input);
    let schema: DashboardSchema = serde_json::from_str(&cleaned)?;
    convert(schema)
}

fn convert(schema: DashboardSchema) -> ConfigResult<CatalogConfig> {
    let order = &schema.component_map.component_order;

    for level in order {
        if !schema.repositories.contains_key(level) {
            return Err(ConfigError::invalid(format!(
                "component_order level '{}' has no repositories entry",
                level
            )));
        }
    }

    validate_mapping(&schema.component_map.mapping, order, &schema.components, &mut Vec::new())?;

    for (repo_id, structure) in &schema.views {
        if !schema.repositories.contains_key(repo_id) {
            return Err(ConfigError::invalid(format!(
                "views declared for unknown repository '{}'",
                repo_id
            )));
        }
        validate_view_levels(structure, order, repo_id)?;
    }

    let repositories: IndexMap<String, ComponentMeta> = schema
        .repositories
        .iter()
        .map(|(id, meta)| (id.clone(), to_meta(meta)))
        .collect();
    let components: IndexMap<String, IndexMap<String, ComponentMeta>> = schema
        .components
        .iter()
        .map(|(repo_id, definitions)| {
            let converted = definitions
                .iter()
                .map(|(id, meta)| (id.clone(), to_meta(meta)))
                .collect();
            (repo_id.clone(), converted)
        })
        .collect();
    let views = schema
        .views
        .iter()
        .map(|(repo_id, structure)| (repo_id.clone(), structure.to_path_tree(false)))
        .collect();

    // An entirely empty mapping means no relations; it must stay an empty
    // node rather than become a Null terminator.
    let mapping = if schema.component_map.mapping.is_empty_node() {
        benchdash_core::PathTree::node()
    } else {
        schema.component_map.mapping.to_path_tree(true)
    };

    Ok(CatalogConfig {
        title: schema.metadata.title,
        tree_order: schema.component_map.component_order,
        mapping,
        repositories,
        components,
        views,
    })
}

fn to_meta(meta: &ComponentMetadata) -> ComponentMeta {
    ComponentMeta::new(&meta.display_name, &meta.description)
}

/// Walk the mapping, checking that every key at level `i` names a defined
/// entity of `component_order[i]` and that branches terminate exactly at the
/// full level depth.
fn validate_mapping(
    tree: &RawTree,
    order: &[String],
    components: &IndexMap<String, IndexMap<String, ComponentMetadata>>,
    breadcrumb: &mut Vec<String>,
) -> ConfigResult<()> {
    let depth = breadcrumb.len();
    match tree {
        RawTree::Node(map) if !map.is_empty() => {
            let Some(level) = order.get(depth) else {
                return Err(ConfigError::invalid(format!(
                    "mapping at '{}' is deeper than component_order ({} levels)",
                    breadcrumb.join("/"),
                    order.len()
                )));
            };
            let empty = IndexMap::new();
            let known = components.get(level).unwrap_or(&empty);
            for (key, subtree) in map {
                if !known.contains_key(key) {
                    return Err(ConfigError::invalid(format!(
                        "mapping names unknown entity '{}' of '{}' (at '{}')",
                        key,
                        level,
                        breadcrumb.join("/")
                    )));
                }
                breadcrumb.push(key.clone());
                validate_mapping(subtree, order, components, breadcrumb)?;
                breadcrumb.pop();
            }
            Ok(())
        }
        // Terminators: an empty object or scalar, allowed only at full depth.
        // An entirely empty mapping (no relations) is also fine.
        _ => {
            if depth == 0 && tree.is_empty_node() {
                return Ok(());
            }
            if depth != order.len() {
                return Err(ConfigError::invalid(format!(
                    "mapping branch '{}' terminates at level {} of {}",
                    breadcrumb.join("/"),
                    depth,
                    order.len()
                )));
            }
            Ok(())
        }
    }
}

/// Check that every name in a view structure (keys and string leaves) is a
/// canonical level.
fn validate_view_levels(tree: &RawTree, order: &[String], repo_id: &str) -> ConfigResult<()> {
    let check = |name: &str| -> ConfigResult<()> {
        if order.iter().any(|level| level == name) {
            Ok(())
        } else {
            Err(ConfigError::invalid(format!(
                "view for '{}' names unknown level '{}'",
                repo_id, name
            )))
        }
    };
    match tree {
        RawTree::Node(map) => {
            for (key, subtree) in map {
                check(key)?;
                validate_view_levels(subtree, order, repo_id)?;
            }
            Ok(())
        }
        RawTree::String(level) => check(level),
        RawTree::Null => Ok(()),
        other => Err(ConfigError::invalid(format!(
            "view for '{}' has a non-name leaf: {:?}",
            repo_id, other
        ))),
    }
}
