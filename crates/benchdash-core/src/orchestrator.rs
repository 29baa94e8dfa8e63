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

//! Catalog composition and materialization.
//!
//! The orchestrator builds all repositories from configuration, permutes the
//! canonical adjacency tree once per declared view, binds the resulting
//! id-subtrees to their entities, and drives the recursive render pass with
//! parent-id path composition. Construction and view binding happen once;
//! rendering is a pure read-and-emit traversal.

use crate::config::CatalogConfig;
use crate::entity::Entity;
use crate::error::{CatalogError, CatalogResult};
use crate::permute::permute_levels;
use crate::render::{PageData, PageKind, RenderTarget};
use crate::repository::Repository;
use crate::tree::PathTree;
use crate::view::{level_permutation, signature, view_orders, ViewBinding};
use std::io::{self, Write};
use std::path::Path;

/// Parent id assigned to top-level catalog pages.
pub const ROOT_PARENT_ID: &str = "catalog-index";

/// Filename of every generated page.
const INDEX_PAGE: &str = "index.adoc";

/// Builds repositories and their view bindings, then materializes them.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    title: String,
    tree_order: Vec<String>,
    mapping: PathTree,
    repositories: Vec<Repository>,
}

impl Orchestrator {
    /// Build all repositories and bind every declared view.
    ///
    /// Fails fast on the first inconsistency: a canonical level or view level
    /// naming an unknown repository, a view order that does not match the
    /// mapping's level count, or a non-uniform mapping.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let mut repositories: Vec<Repository> = config
            .repositories
            .iter()
            .map(|(repo_id, meta)| {
                let mut repository = Repository::new(repo_id, meta);
                if let Some(definitions) = config.components.get(repo_id) {
                    for (entity_id, entity_meta) in definitions {
                        repository.add(Entity::new(entity_id, entity_meta));
                    }
                }
                repository
            })
            .collect();

        for level in &config.tree_order {
            if !repositories.iter().any(|r| r.id() == level) {
                return Err(CatalogError::not_found(format!(
                    "canonical level '{}' names an unknown repository",
                    level
                ))
                .with_path(level.clone()));
            }
        }

        for (repo_id, structure) in &config.views {
            let index = repositories
                .iter()
                .position(|r| r.id() == repo_id)
                .ok_or_else(|| {
                    CatalogError::not_found(format!(
                        "view declared for unknown repository '{}'",
                        repo_id
                    ))
                    .with_path(repo_id.clone())
                })?;

            for order in view_orders(repo_id, structure)? {
                let permutation = level_permutation(&config.tree_order, &order)?;
                let permuted = permute_levels(&config.mapping, &permutation)?;
                let view_signature = signature(&order);
                for entity in repositories[index].iter_mut() {
                    let subtree = permuted
                        .get(&entity.id)
                        .cloned()
                        .unwrap_or_else(PathTree::node);
                    entity.bind_view(
                        view_signature.clone(),
                        ViewBinding {
                            order: order.clone(),
                            tree: subtree,
                        },
                    );
                }
            }
        }

        Ok(Self {
            title: config.title,
            tree_order: config.tree_order,
            mapping: config.mapping,
            repositories,
        })
    }

    /// The dashboard title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The canonical level order.
    pub fn tree_order(&self) -> &[String] {
        &self.tree_order
    }

    /// The canonical adjacency tree.
    pub fn mapping(&self) -> &PathTree {
        &self.mapping
    }

    /// All repositories, in declaration order.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Get a repository by id.
    pub fn repository(&self, id: &str) -> CatalogResult<&Repository> {
        self.repositories
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| {
                CatalogError::not_found(format!("no repository '{}'", id)).with_path(id.to_string())
            })
    }

    /// Find an entity by id across all repositories.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.repositories
            .iter()
            .find_map(|r| r.iter().find(|e| e.id == id))
    }

    /// Materialize the whole catalog under `base_dir`.
    ///
    /// Renders the home page, one index page per repository, and the
    /// recursive per-entity pages in view order. Any collaborator failure or
    /// unresolved id aborts the pass; partial output must not be treated as
    /// usable.
    pub fn render(&self, base_dir: &Path, target: &mut dyn RenderTarget) -> CatalogResult<()> {
        target.ensure_dir(base_dir)?;
        target.render_page(&base_dir.join(INDEX_PAGE), PageKind::Home, &self.home_page())?;

        for repository in &self.repositories {
            let repo_dir = base_dir.join(repository.id());
            target.ensure_dir(&repo_dir)?;
            target.render_page(
                &repo_dir.join(INDEX_PAGE),
                PageKind::Index,
                &repository.page_data(),
            )?;
            for entity in repository {
                let data = entity.page_data(repository.id());
                let entity_dir = repo_dir.join(&entity.id);
                target.ensure_dir(&entity_dir)?;
                target.render_page(&entity_dir.join(INDEX_PAGE), PageKind::Index, &data)?;
                for (_, binding) in entity.views() {
                    self.render_children(
                        &binding.tree,
                        &binding.order,
                        1,
                        &entity_dir,
                        &data.self_id,
                        target,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Render the children of one bound view subtree.
    ///
    /// Children always render with the subtree handed down by their parent,
    /// never with their own bindings; repositories may reference each other's
    /// entities, and following the child's own views here would recurse
    /// forever.
    fn render_children(
        &self,
        tree: &PathTree,
        order: &[String],
        level: usize,
        base_dir: &Path,
        parent_ids: &str,
        target: &mut dyn RenderTarget,
    ) -> CatalogResult<()> {
        let PathTree::Node(children) = tree else {
            return Ok(());
        };
        if children.is_empty() {
            return Ok(());
        }
        let level_id = order.get(level).ok_or_else(|| {
            CatalogError::shape(format!(
                "view tree is deeper than its declared order of {} levels",
                order.len()
            ))
            .with_path(parent_ids.to_string())
        })?;
        let repository = self.repository(level_id)?;

        for (child_id, subtree) in children {
            let child = repository.get(child_id)?;
            let data = child.page_data(parent_ids);
            let child_dir = base_dir.join(&child.id);
            target.ensure_dir(&child_dir)?;
            target.render_page(&child_dir.join(INDEX_PAGE), PageKind::Index, &data)?;
            self.render_children(subtree, order, level + 1, &child_dir, &data.self_id, target)?;
        }
        Ok(())
    }

    fn home_page(&self) -> PageData {
        PageData {
            self_id: ROOT_PARENT_ID.to_string(),
            parent_ids: String::new(),
            title: self.title.clone(),
            description: String::new(),
            tags: "catalog".to_string(),
            illustration: String::new(),
        }
    }

    /// Write the composed hierarchy as indented text.
    pub fn print_hierarchy(&self, out: &mut dyn Write) -> io::Result<()> {
        fn print_tree(tree: &PathTree, indent: usize, out: &mut dyn Write) -> io::Result<()> {
            for (key, subtree) in tree.children() {
                writeln!(out, "{}{}", "  ".repeat(indent), key)?;
                print_tree(subtree, indent + 1, out)?;
            }
            Ok(())
        }

        for repository in &self.repositories {
            writeln!(out, "{} ({})", repository.display_name(), repository.id())?;
            for entity in repository {
                writeln!(out, "  {} ({})", entity.display_name, entity.id)?;
                for (view_signature, binding) in entity.views() {
                    writeln!(out, "    [{}]", view_signature)?;
                    print_tree(&binding.tree, 3, out)?;
                }
            }
        }
        Ok(())
    }
}
