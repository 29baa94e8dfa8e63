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

//! Ordered, uniqueness-enforcing entity collections.

use crate::config::ComponentMeta;
use crate::entity::Entity;
use crate::error::{CatalogError, CatalogResult};
use crate::render::PageData;
use crate::ROOT_PARENT_ID;

/// An ordered collection of [`Entity`]s with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    id: String,
    display_name: String,
    description: String,
    data: Vec<Entity>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new(id: impl Into<String>, meta: &ComponentMeta) -> Self {
        Self {
            id: id.into(),
            display_name: meta.display_name.clone(),
            description: meta.description.clone(),
            data: Vec::new(),
        }
    }

    /// The repository id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Add an entity unless one with the same id already exists.
    ///
    /// Insertion is idempotent and never fails: re-adding an entity (or any
    /// entity sharing its id) is a no-op.
    pub fn add(&mut self, entity: Entity) {
        if !self.has(&entity.id) {
            self.data.push(entity);
        }
    }

    /// Get an entity by id.
    pub fn get(&self, id: &str) -> CatalogResult<&Entity> {
        self.data.iter().find(|e| e.id == id).ok_or_else(|| {
            CatalogError::not_found(format!("no entity '{}' in repository '{}'", id, self.id))
                .with_path(format!("{}/{}", self.id, id))
        })
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.data.iter_mut().find(|e| e.id == id)
    }

    /// Returns true if an entity with this id exists.
    pub fn has(&self, id: &str) -> bool {
        self.data.iter().any(|e| e.id == id)
    }

    /// Iterate over entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.data.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.data.iter_mut()
    }

    /// The number of entities.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the repository holds no entities.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The page data for this repository's index page.
    pub fn page_data(&self) -> PageData {
        PageData {
            self_id: self.id.clone(),
            parent_ids: ROOT_PARENT_ID.to_string(),
            title: self.display_name.clone(),
            description: self.description.clone(),
            tags: format!("catalog, {}", self.id),
            illustration: format!("ROOT:{}.jpg", self.id),
        }
    }
}

impl<'a> IntoIterator for &'a Repository {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> ComponentMeta {
        ComponentMeta::named(name)
    }

    fn repo() -> Repository {
        Repository::new("machines", &ComponentMeta::new("Machines", "HPC systems"))
    }

    #[test]
    fn test_add_and_get() {
        let mut r = repo();
        r.add(Entity::new("m1", &meta("M1")));
        assert_eq!(r.get("m1").unwrap().display_name, "M1");
        assert!(r.has("m1"));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut r = repo();
        r.add(Entity::new("m1", &meta("M1")));
        r.add(Entity::new("m1", &meta("M1")));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_add_same_id_different_metadata_is_noop() {
        let mut r = repo();
        r.add(Entity::new("m1", &meta("M1")));
        r.add(Entity::new("m1", &meta("Other")));
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("m1").unwrap().display_name, "M1");
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let r = repo();
        let err = r.get("m7").unwrap_err();
        assert_eq!(err.kind, crate::CatalogErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some("machines/m7"));
    }

    #[test]
    fn test_iteration_order() {
        let mut r = repo();
        r.add(Entity::new("c", &meta("C")));
        r.add(Entity::new("a", &meta("A")));
        r.add(Entity::new("b", &meta("B")));
        let ids: Vec<&str> = r.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_into_iterator() {
        let mut r = repo();
        r.add(Entity::new("m1", &meta("M1")));
        let count = (&r).into_iter().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_is_empty() {
        let mut r = repo();
        assert!(r.is_empty());
        r.add(Entity::new("m1", &meta("M1")));
        assert!(!r.is_empty());
    }

    #[test]
    fn test_page_data() {
        let r = repo();
        let data = r.page_data();
        assert_eq!(data.self_id, "machines");
        assert_eq!(data.parent_ids, ROOT_PARENT_ID);
        assert_eq!(data.title, "Machines");
        assert_eq!(data.description, "HPC systems");
        assert_eq!(data.tags, "catalog, machines");
    }
}
