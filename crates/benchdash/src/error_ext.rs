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

//! Error context helpers.
//!
//! Extension trait for `Result<T, CatalogError>` that attaches the offending
//! id or tree path to errors as they propagate, without touching the error
//! message itself.
//!
//! # Examples
//!
//! ```rust
//! use benchdash::{CatalogError, CatalogResultExt};
//!
//! fn find_machine(id: &str) -> Result<(), CatalogError> {
//!     Err(CatalogError::not_found("no such machine")).at_path(format!("machines/{}", id))
//! }
//!
//! let err = find_machine("m9").unwrap_err();
//! assert_eq!(err.path.as_deref(), Some("machines/m9"));
//! ```

use benchdash_core::CatalogError;
use std::fmt;

/// Extension trait for attaching path context to `Result<T, CatalogError>`.
pub trait CatalogResultExt<T> {
    /// Attach a path to the error, if one occurs.
    ///
    /// An already-attached path is kept: the innermost frame knows the most
    /// precise location.
    fn at_path<P>(self, path: P) -> Result<T, CatalogError>
    where
        P: fmt::Display;

    /// Attach a lazily-computed path to the error, if one occurs.
    ///
    /// Prefer this over [`at_path`](CatalogResultExt::at_path) when building
    /// the path allocates.
    fn with_path_of<P, F>(self, f: F) -> Result<T, CatalogError>
    where
        P: fmt::Display,
        F: FnOnce() -> P;
}

impl<T> CatalogResultExt<T> for Result<T, CatalogError> {
    fn at_path<P>(self, path: P) -> Result<T, CatalogError>
    where
        P: fmt::Display,
    {
        self.map_err(|e| attach_path(e, path.to_string()))
    }

    fn with_path_of<P, F>(self, f: F) -> Result<T, CatalogError>
    where
        P: fmt::Display,
        F: FnOnce() -> P,
    {
        self.map_err(|e| attach_path(e, f().to_string()))
    }
}

fn attach_path(error: CatalogError, path: String) -> CatalogError {
    if error.path.is_some() || path.is_empty() {
        return error;
    }
    error.with_path(path)
}
