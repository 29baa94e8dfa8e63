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

//! Tree command - print the composed catalog hierarchy.

use crate::error::CliError;
use benchdash_config::load_config;
use benchdash_core::{CatalogError, Orchestrator};
use std::io;
use std::path::Path;

/// Compose the catalog and print its hierarchy to stdout.
///
/// # Errors
///
/// Returns `Err` if loading or composition fails, or if stdout cannot be
/// written to.
pub fn tree(config: &Path) -> Result<(), CliError> {
    let catalog = load_config(config)?;
    let orchestrator = Orchestrator::new(catalog)?;
    orchestrator
        .print_hierarchy(&mut io::stdout())
        .map_err(|e| CliError::Catalog(CatalogError::io(e.to_string())))?;
    Ok(())
}
