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

//! Level reordering for uniform-depth path trees.

use crate::error::{CatalogError, CatalogResult};
use crate::tree::{PathTree, TreePath};

/// Reorder the key levels of a uniform-depth tree.
///
/// `permutation[i]` names which original level supplies the key at new
/// position `i`: for every flattened path `[k0, …, k(L-1), leaf]` the result
/// contains `[k(permutation[0]), …, k(permutation[L-1]), leaf]`. First-seen
/// key order is preserved at every new level, so sibling order in the output
/// follows the traversal order of the input.
///
/// # Errors
///
/// - `ShapeMismatch` when the tree is not uniform depth, when the permutation
///   length differs from the level count, or when an index repeats (a
///   non-bijective permutation would silently collapse levels).
/// - `IndexOutOfRange` when an index falls outside `[0, L-1]`.
///
/// The empty tree permutes to the empty tree under the empty permutation
/// (zero levels); any other permutation against it is a `ShapeMismatch`.
pub fn permute_levels(tree: &PathTree, permutation: &[usize]) -> CatalogResult<PathTree> {
    let paths = tree.flatten();
    let Some(first) = paths.first() else {
        if permutation.is_empty() {
            return Ok(PathTree::node());
        }
        return Err(CatalogError::shape(format!(
            "permutation has {} entries but the tree is empty",
            permutation.len()
        )));
    };

    let depth = first.depth();
    for path in &paths {
        if path.depth() != depth {
            return Err(CatalogError::shape(format!(
                "tree is not uniform depth: found paths with {} and {} levels",
                depth,
                path.depth()
            ))
            .with_path(path.keys.join("/")));
        }
    }
    if permutation.len() != depth {
        return Err(CatalogError::shape(format!(
            "permutation has {} entries but the tree has {} levels",
            permutation.len(),
            depth
        )));
    }

    let mut seen = vec![false; depth];
    for &index in permutation {
        if index >= depth {
            return Err(CatalogError::index(format!(
                "permutation index {} is outside the level range [0, {}]",
                index,
                depth - 1
            )));
        }
        if seen[index] {
            return Err(CatalogError::shape(format!(
                "permutation repeats index {}",
                index
            )));
        }
        seen[index] = true;
    }

    let reordered = paths.into_iter().map(|path| {
        let keys = permutation.iter().map(|&i| path.keys[i].clone()).collect();
        TreePath::new(keys, path.leaf)
    });
    PathTree::from_paths(reordered)
}

/// Invert a permutation, so that applying `permutation` and then its inverse
/// restores the original level order.
///
/// # Errors
///
/// Same validation as [`permute_levels`]: out-of-range indices are
/// `IndexOutOfRange`, repeated indices are `ShapeMismatch`.
pub fn inverse_permutation(permutation: &[usize]) -> CatalogResult<Vec<usize>> {
    let len = permutation.len();
    let mut inverse = vec![usize::MAX; len];
    for (position, &index) in permutation.iter().enumerate() {
        if index >= len {
            return Err(CatalogError::index(format!(
                "permutation index {} is outside the level range [0, {}]",
                index,
                len.saturating_sub(1)
            )));
        }
        if inverse[index] != usize::MAX {
            return Err(CatalogError::shape(format!(
                "permutation repeats index {}",
                index
            )));
        }
        inverse[index] = position;
    }
    Ok(inverse)
}
