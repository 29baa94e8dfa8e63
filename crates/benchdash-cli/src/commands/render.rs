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

//! Render command - materialize the dashboard pages.

use crate::error::CliError;
use benchdash_config::load_config;
use benchdash_core::Orchestrator;
use benchdash_render::{FsRenderTarget, TemplateRenderer};
use colored::Colorize;
use std::path::Path;

/// Load a configuration, compose the catalog, and render every page.
///
/// # Arguments
///
/// * `config` - Path to the dashboard configuration file
/// * `output` - Output directory for the generated pages
/// * `templates` - Optional directory with template overrides
///
/// # Errors
///
/// Returns `Err` if the configuration cannot be loaded or validated, if
/// composition fails, or if any page fails to render. A failed pass leaves
/// no trustworthy output.
pub fn render(config: &Path, output: &Path, templates: Option<&Path>) -> Result<(), CliError> {
    let catalog = load_config(config)?;
    let orchestrator = Orchestrator::new(catalog)?;

    let renderer = match templates {
        Some(dir) => TemplateRenderer::with_template_dir(dir)?,
        None => TemplateRenderer::new()?,
    };
    let mut target = FsRenderTarget::new(renderer);
    orchestrator.render(output, &mut target)?;

    println!("{} {}", "✓".green().bold(), config.display());
    println!("  Title: {}", orchestrator.title());
    println!("  Output: {}", output.display());
    println!("  Pages: {}", target.pages_written());
    Ok(())
}
