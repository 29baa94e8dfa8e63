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

//! Structured error types for page rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error that occurred while registering or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to compile or register.
    #[error("Template error: {0}")]
    Template(String),

    /// Rendering a registered template failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Writing output or reading a template file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },
}

impl RenderError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(source: handlebars::TemplateError) -> Self {
        Self::Template(source.to_string())
    }
}

impl From<handlebars::RenderError> for RenderError {
    fn from(source: handlebars::RenderError) -> Self {
        Self::Render(source.to_string())
    }
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
