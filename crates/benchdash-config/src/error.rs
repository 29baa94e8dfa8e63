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

//! Structured error types for configuration loading.

use benchdash_core::CatalogError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error that occurred while loading or validating configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// The configuration is not valid JSON (after comment stripping).
    #[error("JSON parse error: {0}")]
    Json(String),

    /// The configuration is well-formed but inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A catalog error surfaced during conversion.
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl ConfigError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::io_error(
            "dashboard.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("dashboard.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_catalog_error_conversion() {
        let err: ConfigError = CatalogError::not_found("missing").into();
        assert_eq!(err.to_string(), "NotFound: missing");
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::invalid("mapping names unknown entity 'x'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: mapping names unknown entity 'x'"
        );
    }
}
