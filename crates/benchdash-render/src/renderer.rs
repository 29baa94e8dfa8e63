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

//! Handlebars template registry and the filesystem render target.

use crate::error::{RenderError, RenderResult};
use benchdash_core::{CatalogError, CatalogResult, PageData, PageKind, RenderTarget};
use chrono::Local;
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::Path;

const HOME_TEMPLATE: &str = include_str!("../templates/home.adoc.hbs");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.adoc.hbs");

/// Template names with their override filenames.
const TEMPLATES: [(&str, &str); 2] = [
    ("home", "home.adoc.hbs"),
    ("index", "index.adoc.hbs"),
];

/// Renders catalog pages through Handlebars templates.
///
/// Embedded AsciiDoc templates are registered by default; a template
/// directory can override any of them by filename.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with the embedded default templates.
    pub fn new() -> RenderResult<Self> {
        let mut registry = Handlebars::new();
        // Output is AsciiDoc, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("stripquotes", Box::new(stripquotes_helper));
        registry.register_helper("inttouniquestr", Box::new(int_to_unique_str_helper));
        registry.register_template_string("home", HOME_TEMPLATE)?;
        registry.register_template_string("index", INDEX_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Create a renderer, overriding defaults from a template directory.
    ///
    /// Only files matching the known template names are picked up; missing
    /// files keep their embedded default.
    pub fn with_template_dir(dir: &Path) -> RenderResult<Self> {
        let mut renderer = Self::new()?;
        for (name, filename) in TEMPLATES {
            let path = dir.join(filename);
            if path.is_file() {
                renderer.registry.register_template_file(name, &path)?;
            }
        }
        Ok(renderer)
    }

    /// Render one page kind with the given template data.
    pub fn render(&self, kind: PageKind, data: &serde_json::Value) -> RenderResult<String> {
        let name = match kind {
            PageKind::Home => "home",
            PageKind::Index => "index",
        };
        Ok(self.registry.render(name, data)?)
    }
}

/// Filesystem-backed [`RenderTarget`]: creates directories and writes pages.
pub struct FsRenderTarget {
    renderer: TemplateRenderer,
    timestamp: String,
    pages: usize,
}

impl FsRenderTarget {
    /// Create a target around a template renderer.
    ///
    /// The generation timestamp is fixed at construction so every page of one
    /// pass carries the same value.
    pub fn new(renderer: TemplateRenderer) -> Self {
        Self {
            renderer,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            pages: 0,
        }
    }

    /// The number of pages written so far.
    pub fn pages_written(&self) -> usize {
        self.pages
    }
}

impl RenderTarget for FsRenderTarget {
    fn ensure_dir(&mut self, path: &Path) -> CatalogResult<()> {
        fs::create_dir_all(path)
            .map_err(|e| CatalogError::io(format!("cannot create '{}': {}", path.display(), e)))
    }

    fn render_page(&mut self, path: &Path, kind: PageKind, data: &PageData) -> CatalogResult<()> {
        let payload = json!({
            "self_id": data.self_id,
            "parent_ids": data.parent_ids,
            "title": data.title,
            "description": data.description,
            "tags": data.tags,
            "illustration": data.illustration,
            "datetime": self.timestamp,
        });
        let text = self
            .renderer
            .render(kind, &payload)
            .map_err(|e| CatalogError::render(e.to_string()).with_path(path.display().to_string()))?;
        fs::write(path, text)
            .map_err(|e| CatalogError::io(format!("cannot write '{}': {}", path.display(), e)))?;
        self.pages += 1;
        Ok(())
    }
}

// Handlebars helpers, ported from the original template filters.

fn stripquotes_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(param.trim_matches('"'))?;
    Ok(())
}

/// Spreadsheet-style column naming: 1 -> A, 26 -> Z, 27 -> AA.
fn int_to_unique_str_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let mut n = h.param(0).and_then(|v| v.value().as_u64()).unwrap_or(0);
    let mut letters = Vec::new();
    while n > 0 {
        let remainder = ((n - 1) % 26) as u8;
        letters.push((b'A' + remainder) as char);
        n = (n - 1) / 26;
    }
    let text: String = letters.into_iter().rev().collect();
    out.write(&text)?;
    Ok(())
}
