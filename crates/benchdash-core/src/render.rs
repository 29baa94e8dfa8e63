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

//! The rendering collaborator seam.
//!
//! The core computes logical output paths and page data; producing documents
//! and directories is the job of a [`RenderTarget`] implementation (see the
//! `benchdash-render` crate for the Handlebars/filesystem one). A
//! [`RecordingTarget`] is provided for tests and dry runs.

use crate::error::CatalogResult;
use std::path::{Path, PathBuf};

/// Which template a page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The dashboard home page.
    Home,
    /// A repository or entity index page.
    Index,
}

/// The data handed to the templating collaborator for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    /// Composed identifier of this page (parent path plus own id).
    pub self_id: String,
    /// Accumulated parent-id path.
    pub parent_ids: String,
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Catalog tags line.
    pub tags: String,
    /// Illustration resource reference.
    pub illustration: String,
}

/// Templating and filesystem collaborator driven by the orchestrator.
pub trait RenderTarget {
    /// Ensure an output directory exists.
    fn ensure_dir(&mut self, path: &Path) -> CatalogResult<()>;

    /// Render one page to the given output path.
    fn render_page(&mut self, path: &Path, kind: PageKind, data: &PageData) -> CatalogResult<()>;
}

/// A target that records every call instead of producing output.
///
/// Useful for asserting output paths, composed identifiers, and render order
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    /// Directories passed to [`RenderTarget::ensure_dir`], in call order.
    pub dirs: Vec<PathBuf>,
    /// Pages passed to [`RenderTarget::render_page`], in call order.
    pub pages: Vec<(PathBuf, PageKind, PageData)>,
}

impl RecordingTarget {
    /// Create an empty recording target.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered self_ids, in call order.
    pub fn self_ids(&self) -> Vec<&str> {
        self.pages.iter().map(|(_, _, d)| d.self_id.as_str()).collect()
    }

    /// The rendered page paths, in call order.
    pub fn paths(&self) -> Vec<&Path> {
        self.pages.iter().map(|(p, _, _)| p.as_path()).collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn ensure_dir(&mut self, path: &Path) -> CatalogResult<()> {
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    fn render_page(&mut self, path: &Path, kind: PageKind, data: &PageData) -> CatalogResult<()> {
        self.pages.push((path.to_path_buf(), kind, data.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(self_id: &str) -> PageData {
        PageData {
            self_id: self_id.to_string(),
            parent_ids: String::new(),
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            illustration: String::new(),
        }
    }

    #[test]
    fn test_recording_target_records_in_order() {
        let mut target = RecordingTarget::new();
        target.ensure_dir(Path::new("out")).unwrap();
        target
            .render_page(Path::new("out/index.adoc"), PageKind::Home, &data("home"))
            .unwrap();
        target
            .render_page(Path::new("out/m/index.adoc"), PageKind::Index, &data("m"))
            .unwrap();

        assert_eq!(target.dirs, vec![PathBuf::from("out")]);
        assert_eq!(target.self_ids(), vec!["home", "m"]);
        assert_eq!(
            target.paths(),
            vec![Path::new("out/index.adoc"), Path::new("out/m/index.adoc")]
        );
        assert_eq!(target.pages[0].1, PageKind::Home);
    }
}
