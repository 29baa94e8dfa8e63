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

//! AsciiDoc page rendering for benchmark dashboards.
//!
//! Implements the core's [`RenderTarget`](benchdash_core::RenderTarget) seam
//! with Handlebars templates and plain filesystem output. Embedded default
//! templates cover the home and index pages; a template directory can
//! override them.

mod error;
mod renderer;

pub use error::{RenderError, RenderResult};
pub use renderer::{FsRenderTarget, TemplateRenderer};
