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

//! Error types for catalog composition.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during catalog composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    /// Tree depth is not uniform, or a permutation does not match the level count.
    Shape,
    /// A permutation index falls outside the valid level range.
    Index,
    /// Lookup of an id that is not present.
    NotFound,
    /// Conflicting entries at an identical tree path.
    Duplicate,
    /// Invalid or inconsistent configuration.
    Config,
    /// Error reported by a rendering collaborator.
    Render,
    /// I/O error reported by a filesystem collaborator.
    IO,
}

impl fmt::Display for CatalogErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "ShapeMismatch"),
            Self::Index => write!(f, "IndexOutOfRange"),
            Self::NotFound => write!(f, "NotFound"),
            Self::Duplicate => write!(f, "DuplicateViolation"),
            Self::Config => write!(f, "ConfigError"),
            Self::Render => write!(f, "RenderError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error that occurred during catalog composition or materialization.
///
/// All variants are structural or configuration errors: none is transient,
/// none should be retried, and any of them aborts the whole pass.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct CatalogError {
    /// The kind of error.
    pub kind: CatalogErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The offending id or tree path, when one is known.
    pub path: Option<String>,
}

impl CatalogError {
    /// Create a new error.
    pub fn new(kind: CatalogErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attach the offending id or tree path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::Shape, message)
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::Index, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::NotFound, message)
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::Duplicate, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::Config, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::Render, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::IO, message)
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(CatalogErrorKind::Shape.to_string(), "ShapeMismatch");
        assert_eq!(CatalogErrorKind::Index.to_string(), "IndexOutOfRange");
        assert_eq!(CatalogErrorKind::NotFound.to_string(), "NotFound");
        assert_eq!(CatalogErrorKind::Duplicate.to_string(), "DuplicateViolation");
        assert_eq!(CatalogErrorKind::Config.to_string(), "ConfigError");
        assert_eq!(CatalogErrorKind::Render.to_string(), "RenderError");
        assert_eq!(CatalogErrorKind::IO.to_string(), "IOError");
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::shape("permutation has 1 entry but the tree has 2 levels");
        assert_eq!(
            err.to_string(),
            "ShapeMismatch: permutation has 1 entry but the tree has 2 levels"
        );
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(CatalogError::shape("x").kind, CatalogErrorKind::Shape);
        assert_eq!(CatalogError::index("x").kind, CatalogErrorKind::Index);
        assert_eq!(CatalogError::not_found("x").kind, CatalogErrorKind::NotFound);
        assert_eq!(CatalogError::duplicate("x").kind, CatalogErrorKind::Duplicate);
        assert_eq!(CatalogError::config("x").kind, CatalogErrorKind::Config);
        assert_eq!(CatalogError::render("x").kind, CatalogErrorKind::Render);
        assert_eq!(CatalogError::io("x").kind, CatalogErrorKind::IO);
    }

    #[test]
    fn test_with_path() {
        let err = CatalogError::not_found("no such entity").with_path("machines/m7");
        assert_eq!(err.path.as_deref(), Some("machines/m7"));
    }

    #[test]
    fn test_error_clone() {
        let err = CatalogError::duplicate("leaf conflict").with_path("A/B");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
        assert_eq!(err.path, cloned.path);
    }
}
