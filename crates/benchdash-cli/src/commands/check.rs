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

//! Check command - configuration validation without rendering.

use crate::error::CliError;
use benchdash_config::load_config;
use benchdash_core::Orchestrator;
use colored::Colorize;
use std::path::Path;

/// Load and validate a configuration file, then compose the catalog once to
/// exercise every view permutation, without producing output.
///
/// Prints a summary of the composed catalog: level order, repositories with
/// entity counts, and declared views.
///
/// # Errors
///
/// Returns `Err` if loading, validation, or composition fails.
pub fn check(config: &Path) -> Result<(), CliError> {
    match load_config(config).map_err(CliError::from).and_then(|catalog| {
        Orchestrator::new(catalog).map_err(CliError::from)
    }) {
        Ok(orchestrator) => {
            println!("{} {}", "✓".green().bold(), config.display());
            println!("  Title: {}", orchestrator.title());
            println!("  Levels: {}", orchestrator.tree_order().join(" > "));
            for repository in orchestrator.repositories() {
                let views: usize = repository.iter().map(|e| e.views().count()).sum();
                println!(
                    "  {}: {} entities, {} view bindings",
                    repository.id(),
                    repository.len(),
                    views
                );
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), config.display());
            Err(e)
        }
    }
}
