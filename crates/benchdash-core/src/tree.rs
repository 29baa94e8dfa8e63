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

//! Ordered nested mapping structure and its flatten/reconstruct algorithms.
//!
//! A [`PathTree`] represents "key → key → … → leaf" chains. Insertion order of
//! keys at every level is semantically meaningful (it defines traversal and
//! output order) and is preserved through every transformation. Depth may
//! differ across branches; only [`permute_levels`](crate::permute_levels)
//! requires uniformity.

use crate::error::{CatalogError, CatalogResult};
use crate::value::Value;
use indexmap::IndexMap;

/// One flattened root-to-leaf route through a [`PathTree`]: the key chain
/// followed by the terminal leaf value.
#[derive(Debug, Clone, PartialEq)]
pub struct TreePath {
    /// The keys from the root down to the leaf, in order.
    pub keys: Vec<String>,
    /// The terminal leaf value.
    pub leaf: Value,
}

impl TreePath {
    /// Create a new path.
    pub fn new(keys: Vec<String>, leaf: impl Into<Value>) -> Self {
        Self {
            keys,
            leaf: leaf.into(),
        }
    }

    /// The number of key levels in this path (the leaf is not counted).
    pub fn depth(&self) -> usize {
        self.keys.len()
    }
}

/// An ordered, possibly non-uniform-depth nested mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum PathTree {
    /// A terminal value.
    Leaf(Value),
    /// An ordered mapping of key to subtree.
    Node(IndexMap<String, PathTree>),
}

impl Default for PathTree {
    fn default() -> Self {
        Self::node()
    }
}

impl PathTree {
    /// Create an empty mapping node.
    pub fn node() -> Self {
        Self::Node(IndexMap::new())
    }

    /// Create a leaf.
    pub fn leaf(value: impl Into<Value>) -> Self {
        Self::Leaf(value.into())
    }

    /// Returns true if this tree is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this tree is an empty mapping node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Node(map) if map.is_empty())
    }

    /// The number of direct children (0 for a leaf).
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Node(map) => map.len(),
        }
    }

    /// Get a direct child by key.
    pub fn get(&self, key: &str) -> Option<&PathTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(map) => map.get(key),
        }
    }

    /// Insert a direct child, replacing any existing child with that key.
    ///
    /// Fails with a shape error when called on a leaf.
    pub fn insert(&mut self, key: impl Into<String>, subtree: PathTree) -> CatalogResult<()> {
        match self {
            Self::Leaf(_) => Err(CatalogError::shape("cannot insert a child into a leaf")),
            Self::Node(map) => {
                map.insert(key.into(), subtree);
                Ok(())
            }
        }
    }

    /// Iterate over direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PathTree)> {
        let iter: Box<dyn Iterator<Item = (&str, &PathTree)> + '_> = match self {
            Self::Leaf(_) => Box::new(std::iter::empty()),
            Self::Node(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
        };
        iter
    }

    /// Flatten the tree into its root-to-leaf paths.
    ///
    /// Depth-first pre-order traversal, honoring insertion order at every
    /// level. An empty tree yields an empty sequence. A bare leaf at the root
    /// yields a single path with no keys; such a path cannot be fed back to
    /// [`PathTree::from_paths`].
    pub fn flatten(&self) -> Vec<TreePath> {
        fn walk(tree: &PathTree, prefix: &mut Vec<String>, out: &mut Vec<TreePath>) {
            match tree {
                PathTree::Leaf(value) => out.push(TreePath::new(prefix.clone(), value.clone())),
                PathTree::Node(map) => {
                    for (key, subtree) in map {
                        prefix.push(key.clone());
                        walk(subtree, prefix, out);
                        prefix.pop();
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(self, &mut Vec::new(), &mut out);
        out
    }

    /// Reconstruct a tree from flattened paths.
    ///
    /// Paths are regrouped by shared key-prefixes; key order at every level
    /// follows the first-seen order among the inputs. Two paths with the same
    /// full key chain overwrite (last write wins) — this mirrors plain mapping
    /// semantics and is not treated as an error. A path that tries to descend
    /// *through* an existing leaf, or to replace an existing subtree with a
    /// leaf, fails with a duplicate violation: that shape has no mapping
    /// analogue and always indicates malformed input.
    pub fn from_paths<I>(paths: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = TreePath>,
    {
        let mut root = PathTree::node();
        for path in paths {
            let Some((last, prefix)) = path.keys.split_last() else {
                return Err(CatalogError::shape("path has no keys"));
            };

            let mut cursor = &mut root;
            for (depth, key) in prefix.iter().enumerate() {
                let map = match cursor {
                    PathTree::Node(map) => map,
                    PathTree::Leaf(_) => {
                        return Err(CatalogError::duplicate(
                            "path descends through an existing leaf",
                        )
                        .with_path(path.keys[..depth].join("/")));
                    }
                };
                let entry = map.entry(key.clone()).or_insert_with(PathTree::node);
                if entry.is_leaf() {
                    return Err(CatalogError::duplicate(
                        "path descends through an existing leaf",
                    )
                    .with_path(path.keys[..=depth].join("/")));
                }
                cursor = entry;
            }

            let PathTree::Node(map) = cursor else {
                return Err(
                    CatalogError::duplicate("path descends through an existing leaf")
                        .with_path(prefix.join("/")),
                );
            };
            if let Some(PathTree::Node(_)) = map.get(last) {
                return Err(
                    CatalogError::duplicate("leaf would replace an existing subtree")
                        .with_path(path.keys.join("/")),
                );
            }
            map.insert(last.clone(), PathTree::Leaf(path.leaf));
        }
        Ok(root)
    }

    /// Recursively merge `other` into this tree, returning the union.
    ///
    /// Where both sides hold a mapping the children are merged; on any other
    /// conflict `other` wins. New keys from `other` are appended after the
    /// existing ones.
    pub fn merge(&self, other: &PathTree) -> PathTree {
        match (self, other) {
            (PathTree::Node(a), PathTree::Node(b)) => {
                let mut out = a.clone();
                for (key, value) in b {
                    let merged = match out.get(key) {
                        Some(existing) => existing.merge(value),
                        None => value.clone(),
                    };
                    out.insert(key.clone(), merged);
                }
                PathTree::Node(out)
            }
            _ => other.clone(),
        }
    }

    /// The uniform key depth of this tree, if it has one.
    ///
    /// Returns `Some(L)` when every flattened path has exactly `L` keys
    /// (the leaf is not counted as a level), `Some(0)` for the empty tree,
    /// and `None` when branches disagree.
    pub fn uniform_depth(&self) -> Option<usize> {
        let mut depths = self.flatten().into_iter().map(|p| p.depth());
        let Some(first) = depths.next() else {
            return Some(0);
        };
        depths.all(|d| d == first).then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(entries: Vec<(&str, PathTree)>) -> PathTree {
        let mut tree = PathTree::node();
        for (key, subtree) in entries {
            tree.insert(key, subtree).unwrap();
        }
        tree
    }

    fn l(value: &str) -> PathTree {
        PathTree::leaf(value)
    }

    fn p(keys: &[&str], leaf: &str) -> TreePath {
        TreePath::new(keys.iter().map(|k| k.to_string()).collect(), leaf)
    }

    // ==================== flatten tests ====================

    #[test]
    fn test_flatten_empty() {
        assert_eq!(PathTree::node().flatten(), vec![]);
    }

    #[test]
    fn test_flatten_single_pair() {
        let tree = n(vec![("A", l("B"))]);
        assert_eq!(tree.flatten(), vec![p(&["A"], "B")]);
    }

    #[test]
    fn test_flatten_nested() {
        let tree = n(vec![("A", n(vec![("B", l("C"))]))]);
        assert_eq!(tree.flatten(), vec![p(&["A", "B"], "C")]);
    }

    #[test]
    fn test_flatten_two_branches() {
        let tree = n(vec![("A", n(vec![("B", l("C")), ("D", l("E"))]))]);
        assert_eq!(
            tree.flatten(),
            vec![p(&["A", "B"], "C"), p(&["A", "D"], "E")]
        );
    }

    #[test]
    fn test_flatten_multiple_roots() {
        let tree = n(vec![
            ("A", n(vec![("B", l("C"))])),
            ("D", n(vec![("E", l("F"))])),
        ]);
        assert_eq!(
            tree.flatten(),
            vec![p(&["A", "B"], "C"), p(&["D", "E"], "F")]
        );
    }

    #[test]
    fn test_flatten_mixed_depths() {
        // {"A": {"B": {"C": "D", "E": "F"}, "G": "H"}}
        let tree = n(vec![(
            "A",
            n(vec![("B", n(vec![("C", l("D")), ("E", l("F"))])), ("G", l("H"))]),
        )]);
        assert_eq!(
            tree.flatten(),
            vec![
                p(&["A", "B", "C"], "D"),
                p(&["A", "B", "E"], "F"),
                p(&["A", "G"], "H"),
            ]
        );
    }

    #[test]
    fn test_flatten_preserves_insertion_order() {
        let tree = n(vec![("z", l("1")), ("a", l("2")), ("m", l("3"))]);
        let keys: Vec<String> = tree.flatten().into_iter().map(|p| p.keys[0].clone()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_flatten_empty_subtree_drops_branch() {
        // An empty node has no leaves, so its branch produces no path.
        let tree = n(vec![("A", PathTree::node()), ("B", l("C"))]);
        assert_eq!(tree.flatten(), vec![p(&["B"], "C")]);
    }

    // ==================== from_paths tests ====================

    #[test]
    fn test_from_paths_empty() {
        let tree = PathTree::from_paths(vec![]).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_from_paths_round_trip() {
        let tree = n(vec![(
            "A",
            n(vec![("B", n(vec![("C", l("D")), ("E", l("F"))])), ("G", l("H"))]),
        )]);
        assert_eq!(PathTree::from_paths(tree.flatten()).unwrap(), tree);
    }

    #[test]
    fn test_from_paths_first_seen_order() {
        let paths = vec![p(&["B", "x"], "1"), p(&["A", "y"], "2"), p(&["B", "z"], "3")];
        let tree = PathTree::from_paths(paths).unwrap();
        let top: Vec<&str> = tree.children().map(|(k, _)| k).collect();
        assert_eq!(top, vec!["B", "A"]);
        let b: Vec<&str> = tree.get("B").unwrap().children().map(|(k, _)| k).collect();
        assert_eq!(b, vec!["x", "z"]);
    }

    #[test]
    fn test_from_paths_last_write_wins() {
        let paths = vec![p(&["A", "B"], "old"), p(&["A", "B"], "new")];
        let tree = PathTree::from_paths(paths).unwrap();
        assert_eq!(tree.get("A").unwrap().get("B"), Some(&l("new")));
        // Overwriting does not move the key.
        assert_eq!(tree.get("A").unwrap().len(), 1);
    }

    #[test]
    fn test_from_paths_rejects_empty_path() {
        let err = PathTree::from_paths(vec![TreePath::new(vec![], "x")]).unwrap_err();
        assert_eq!(err.kind, crate::CatalogErrorKind::Shape);
    }

    #[test]
    fn test_from_paths_rejects_descent_through_leaf() {
        let paths = vec![p(&["A"], "leaf"), p(&["A", "B"], "x")];
        let err = PathTree::from_paths(paths).unwrap_err();
        assert_eq!(err.kind, crate::CatalogErrorKind::Duplicate);
        assert_eq!(err.path.as_deref(), Some("A"));
    }

    #[test]
    fn test_from_paths_rejects_leaf_over_subtree() {
        let paths = vec![p(&["A", "B"], "x"), p(&["A"], "leaf")];
        let err = PathTree::from_paths(paths).unwrap_err();
        assert_eq!(err.kind, crate::CatalogErrorKind::Duplicate);
    }

    // ==================== merge tests ====================

    #[test]
    fn test_merge_independent_keys() {
        let a = n(vec![("x", l("1"))]);
        let b = n(vec![("y", l("2"))]);
        assert_eq!(a.merge(&b), n(vec![("x", l("1")), ("y", l("2"))]));
    }

    #[test]
    fn test_merge_scalar_overwrite() {
        let a = n(vec![("x", l("1"))]);
        let b = n(vec![("x", l("99"))]);
        assert_eq!(a.merge(&b), n(vec![("x", l("99"))]));
    }

    #[test]
    fn test_merge_nested() {
        let a = n(vec![("a", n(vec![("b", l("1"))]))]);
        let b = n(vec![("a", n(vec![("c", l("2"))]))]);
        assert_eq!(
            a.merge(&b),
            n(vec![("a", n(vec![("b", l("1")), ("c", l("2"))]))])
        );
    }

    #[test]
    fn test_merge_subtree_overwritten_by_leaf() {
        let a = n(vec![("a", n(vec![("b", l("1"))]))]);
        let b = n(vec![("a", l("42"))]);
        assert_eq!(a.merge(&b), n(vec![("a", l("42"))]));
    }

    #[test]
    fn test_merge_deep() {
        let a = n(vec![("a", n(vec![("b", n(vec![("c", l("1"))]))]))]);
        let b = n(vec![("a", n(vec![("b", n(vec![("d", l("2"))]))]))]);
        assert_eq!(
            a.merge(&b),
            n(vec![(
                "a",
                n(vec![("b", n(vec![("c", l("1")), ("d", l("2"))]))])
            )])
        );
    }

    #[test]
    fn test_merge_keeps_left_order() {
        let a = n(vec![("x", l("1")), ("a", n(vec![("b", l("2"))]))]);
        let b = n(vec![("a", n(vec![("c", l("3"))])), ("y", l("4"))]);
        let merged = a.merge(&b);
        let keys: Vec<&str> = merged.children().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["x", "a", "y"]);
    }

    // ==================== uniform_depth tests ====================

    #[test]
    fn test_uniform_depth_empty() {
        assert_eq!(PathTree::node().uniform_depth(), Some(0));
    }

    #[test]
    fn test_uniform_depth_uniform() {
        let tree = n(vec![
            ("A", n(vec![("B", l("C"))])),
            ("D", n(vec![("E", l("F"))])),
        ]);
        assert_eq!(tree.uniform_depth(), Some(2));
    }

    #[test]
    fn test_uniform_depth_non_uniform() {
        // A.B.C.D has 3 key levels, A.G.H has 2.
        let tree = n(vec![(
            "A",
            n(vec![("B", n(vec![("C", l("D"))])), ("G", l("H"))]),
        )]);
        assert_eq!(tree.uniform_depth(), None);
    }

    // ==================== accessor tests ====================

    #[test]
    fn test_insert_into_leaf_fails() {
        let mut leaf = l("x");
        let err = leaf.insert("k", PathTree::node()).unwrap_err();
        assert_eq!(err.kind, crate::CatalogErrorKind::Shape);
    }

    #[test]
    fn test_get_on_leaf() {
        assert_eq!(l("x").get("k"), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(l("x").len(), 0);
        assert!(!l("x").is_empty());
        assert!(PathTree::node().is_empty());
        assert_eq!(n(vec![("a", l("1")), ("b", l("2"))]).len(), 2);
    }

    #[test]
    fn test_tree_path_depth() {
        assert_eq!(p(&["A", "B"], "C").depth(), 2);
        assert_eq!(TreePath::new(vec![], "x").depth(), 0);
    }
}
