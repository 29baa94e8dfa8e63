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

//! View orders and per-entity view bindings.
//!
//! A *view order* is the sequence of repository ids in which one rendering
//! view wants entities nested, possibly differing from the canonical level
//! order. Orders are declared as nested structures in configuration and
//! flattened here; the resulting permutation of the canonical adjacency tree
//! is bound to each entity as a [`ViewBinding`].

use crate::error::{CatalogError, CatalogResult};
use crate::tree::PathTree;
use crate::value::Value;
use indexmap::IndexMap;

/// A permuted id-subtree bound to one entity for one view.
///
/// `tree` holds entity ids only; they are resolved through repository lookups
/// at materialization time, so entities never reference each other directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBinding {
    /// Repository ids per level, starting with the owning repository.
    pub order: Vec<String>,
    /// The id-subtree below the owning entity, levels matching `order[1..]`.
    pub tree: PathTree,
}

impl ViewBinding {
    /// The signature this binding is keyed by.
    pub fn signature(&self) -> String {
        signature(&self.order)
    }
}

/// Flatten a declared view structure into its view orders.
///
/// The structure is rooted at the declaring repository, so every order starts
/// with `repo_id`. String leaves name the final level; a null leaf closes the
/// order without adding one. Any other leaf kind is a configuration error.
/// An empty structure declares no views.
pub fn view_orders(repo_id: &str, structure: &PathTree) -> CatalogResult<Vec<Vec<String>>> {
    let mut wrapped = IndexMap::new();
    wrapped.insert(repo_id.to_string(), structure.clone());
    let wrapped = PathTree::Node(wrapped);

    let mut orders = Vec::new();
    for path in wrapped.flatten() {
        let mut order = path.keys;
        match path.leaf {
            Value::String(level) => order.push(level),
            Value::Null => {}
            other => {
                return Err(CatalogError::config(format!(
                    "view structure leaf must name a level, got '{}'",
                    other
                ))
                .with_path(order.join("/")));
            }
        }
        orders.push(order);
    }
    Ok(orders)
}

/// Map a view order onto positions in the canonical level order.
///
/// `permutation[i] = tree_order.index(view_order[i])`. A level name absent
/// from the canonical order is a configuration error and fails the whole
/// pass; a partially-permuted tree would produce self-inconsistent
/// parent-id paths.
pub fn level_permutation(tree_order: &[String], view_order: &[String]) -> CatalogResult<Vec<usize>> {
    view_order
        .iter()
        .map(|name| {
            tree_order
                .iter()
                .position(|level| level == name)
                .ok_or_else(|| {
                    CatalogError::not_found(format!(
                        "view level '{}' is not in the canonical order [{}]",
                        name,
                        tree_order.join(", ")
                    ))
                    .with_path(name.clone())
                })
        })
        .collect()
}

/// The signature a view order is keyed by: every level after the owning
/// repository, joined with `-`.
pub fn signature(view_order: &[String]) -> String {
    view_order.get(1..).unwrap_or_default().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogErrorKind;

    fn n(entries: Vec<(&str, PathTree)>) -> PathTree {
        let mut tree = PathTree::node();
        for (key, subtree) in entries {
            tree.insert(key, subtree).unwrap();
        }
        tree
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // ==================== view_orders tests ====================

    #[test]
    fn test_view_orders_string_leaf() {
        // {"applications": "use_cases"} declared by "machines"
        let structure = n(vec![("applications", PathTree::leaf("use_cases"))]);
        let orders = view_orders("machines", &structure).unwrap();
        assert_eq!(orders, vec![owned(&["machines", "applications", "use_cases"])]);
    }

    #[test]
    fn test_view_orders_bare_leaf_structure() {
        // {"machines": "applications"} as a two-level order
        let structure = PathTree::leaf("applications");
        let orders = view_orders("machines", &structure).unwrap();
        assert_eq!(orders, vec![owned(&["machines", "applications"])]);
    }

    #[test]
    fn test_view_orders_multiple() {
        let structure = n(vec![
            ("applications", PathTree::leaf("use_cases")),
            ("use_cases", PathTree::leaf("applications")),
        ]);
        let orders = view_orders("machines", &structure).unwrap();
        assert_eq!(
            orders,
            vec![
                owned(&["machines", "applications", "use_cases"]),
                owned(&["machines", "use_cases", "applications"]),
            ]
        );
    }

    #[test]
    fn test_view_orders_null_leaf_closes_order() {
        let structure = n(vec![("applications", PathTree::leaf(Value::Null))]);
        let orders = view_orders("machines", &structure).unwrap();
        assert_eq!(orders, vec![owned(&["machines", "applications"])]);
    }

    #[test]
    fn test_view_orders_empty_structure() {
        let orders = view_orders("machines", &PathTree::node()).unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn test_view_orders_rejects_non_name_leaf() {
        let structure = n(vec![("applications", PathTree::leaf(Value::Int(3)))]);
        let err = view_orders("machines", &structure).unwrap_err();
        assert_eq!(err.kind, CatalogErrorKind::Config);
    }

    // ==================== level_permutation tests ====================

    #[test]
    fn test_level_permutation_identity() {
        let order = owned(&["a", "b", "c"]);
        assert_eq!(level_permutation(&order, &order).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_level_permutation_reordered() {
        let tree_order = owned(&["machines", "applications", "use_cases"]);
        let view_order = owned(&["use_cases", "machines", "applications"]);
        assert_eq!(
            level_permutation(&tree_order, &view_order).unwrap(),
            vec![2, 0, 1]
        );
    }

    #[test]
    fn test_level_permutation_unknown_level() {
        let tree_order = owned(&["machines", "applications"]);
        let view_order = owned(&["machines", "nonsense"]);
        let err = level_permutation(&tree_order, &view_order).unwrap_err();
        assert_eq!(err.kind, CatalogErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some("nonsense"));
    }

    // ==================== signature tests ====================

    #[test]
    fn test_signature_drops_owner() {
        assert_eq!(
            signature(&owned(&["machines", "applications", "use_cases"])),
            "applications-use_cases"
        );
    }

    #[test]
    fn test_signature_single_level() {
        assert_eq!(signature(&owned(&["machines"])), "");
    }

    #[test]
    fn test_binding_signature() {
        let binding = ViewBinding {
            order: owned(&["machines", "applications"]),
            tree: PathTree::node(),
        };
        assert_eq!(binding.signature(), "applications");
    }
}
