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

//! # Benchdash - HPC Benchmark Dashboard Generator
//!
//! Benchdash reads a JSON configuration describing machines, applications,
//! use-cases, and how they relate, and generates a tree of AsciiDoc dashboard
//! pages with one overview page per component per view.
//!
//! ## Quick Start
//!
//! ```no_run
//! use benchdash::{load_config, Orchestrator, FsRenderTarget, TemplateRenderer};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load and validate the dashboard configuration
//! let config = load_config(Path::new("dashboard.json"))?;
//!
//! // Compose every repository and view
//! let orchestrator = Orchestrator::new(config)?;
//!
//! // Materialize the page tree
//! let mut target = FsRenderTarget::new(TemplateRenderer::new()?);
//! orchestrator.render(Path::new("docs/modules/ROOT"), &mut target)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`](benchdash_core): catalog model, tree algorithms, orchestration
//! - [`config`](benchdash_config): configuration loading and validation
//! - [`render`](benchdash_render): Handlebars/AsciiDoc rendering

// Re-export core types
pub use benchdash_core::{
    // Functions
    inverse_permutation,
    permute_levels,
    // Main types
    CatalogConfig,
    CatalogError,
    CatalogErrorKind,
    CatalogResult,
    ComponentMeta,
    Entity,
    Orchestrator,
    PageData,
    PageKind,
    PathTree,
    RecordingTarget,
    RenderTarget,
    Repository,
    TreePath,
    Value,
    ViewBinding,
    ROOT_PARENT_ID,
};

// Error handling extensions
mod error_ext;
pub use error_ext::CatalogResultExt;

// Re-export configuration loading
pub use benchdash_config::{load_config, parse_config, ConfigError, DashboardSchema};

// Re-export rendering
pub use benchdash_render::{FsRenderTarget, RenderError, TemplateRenderer};

/// View-order utilities.
pub mod view {
    //! View orders, signatures, and level permutations.
    pub use benchdash_core::view::{level_permutation, signature, view_orders, ViewBinding};
}
