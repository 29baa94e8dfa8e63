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

//! Catalog entities.

use crate::config::ComponentMeta;
use crate::render::PageData;
use crate::view::ViewBinding;
use indexmap::IndexMap;

/// A named catalog entity (machine, application, use-case, …).
///
/// Entities own only their own data. Relationships to entities of other
/// repositories are bound as id-subtrees during orchestrator initialization
/// and resolved through repository lookups at materialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique id within the owning repository.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Free-form description, possibly empty.
    pub description: String,
    views: IndexMap<String, ViewBinding>,
}

impl Entity {
    /// Create an entity from its metadata.
    pub fn new(id: impl Into<String>, meta: &ComponentMeta) -> Self {
        Self {
            id: id.into(),
            display_name: meta.display_name.clone(),
            description: meta.description.clone(),
            views: IndexMap::new(),
        }
    }

    /// Bind a view, merging its tree into any existing binding with the same
    /// signature.
    pub fn bind_view(&mut self, signature: impl Into<String>, binding: ViewBinding) {
        let signature = signature.into();
        match self.views.get_mut(&signature) {
            Some(existing) => {
                existing.tree = existing.tree.merge(&binding.tree);
            }
            None => {
                self.views.insert(signature, binding);
            }
        }
    }

    /// Iterate over bound views in binding order.
    pub fn views(&self) -> impl Iterator<Item = (&str, &ViewBinding)> {
        self.views.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a bound view by signature.
    pub fn view(&self, signature: &str) -> Option<&ViewBinding> {
        self.views.get(signature)
    }

    /// Returns true if any view is bound.
    pub fn has_views(&self) -> bool {
        !self.views.is_empty()
    }

    /// The page data for this entity's index page, composing its identifier
    /// from the accumulated parent-id path.
    pub fn page_data(&self, parent_ids: &str) -> PageData {
        let self_id = format!("{}-{}", parent_ids, self.id);
        PageData {
            tags: format!("catalog, {}", self_id),
            illustration: format!("ROOT:{}.jpg", self.id),
            self_id,
            parent_ids: parent_ids.to_string(),
            title: self.display_name.clone(),
            description: self.description.clone(),
        }
    }
}
