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

//! Structured error types for the benchdash CLI.

use benchdash_config::ConfigError;
use benchdash_core::CatalogError;
use benchdash_render::RenderError;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Every variant wraps a collaborator error; all of them abort the command
/// and exit non-zero. Partial output is never reported as success.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Catalog composition or materialization failed.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Template registration or rendering failed.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err: CliError = CatalogError::not_found("no entity 'x'").into();
        assert_eq!(err.to_string(), "NotFound: no entity 'x'");
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::invalid("bad mapping").into();
        assert_eq!(err.to_string(), "Invalid configuration: bad mapping");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("unsupported shell: 'tcsh'");
        assert_eq!(err.to_string(), "Invalid input: unsupported shell: 'tcsh'");
    }
}
