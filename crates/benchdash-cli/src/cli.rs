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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Benchdash - HPC benchmark dashboard generator.
#[derive(Parser)]
#[command(name = "benchdash")]
#[command(author, version, about = "Benchdash - HPC benchmark dashboard generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard pages from a configuration file
    Render {
        /// Path to the dashboard configuration file
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,

        /// Output directory for the generated pages
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Directory with template overrides
        #[arg(short, long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },

    /// Load and validate a configuration file without rendering
    Check {
        /// Path to the dashboard configuration file
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
    },

    /// Print the composed catalog hierarchy
    Tree {
        /// Path to the dashboard configuration file
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
    },

    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Render {
                config,
                output,
                templates,
            } => commands::render(&config, &output, templates.as_deref()),
            Commands::Check { config } => commands::check(&config),
            Commands::Tree { config } => commands::tree(&config),
            Commands::Completion { shell } => commands::completion(&shell),
        }
    }
}
