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

//! Completion command - shell completion generation.

use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::{generate, shells};
use std::io;

/// Generate a shell completion script to stdout.
///
/// # Errors
///
/// Returns `Err` for an unsupported shell name.
pub fn completion(shell: &str) -> Result<(), CliError> {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    match shell.to_lowercase().as_str() {
        "bash" => generate(shells::Bash, &mut cmd, name, &mut io::stdout()),
        "zsh" => generate(shells::Zsh, &mut cmd, name, &mut io::stdout()),
        "fish" => generate(shells::Fish, &mut cmd, name, &mut io::stdout()),
        "powershell" | "pwsh" => generate(shells::PowerShell, &mut cmd, name, &mut io::stdout()),
        "elvish" => generate(shells::Elvish, &mut cmd, name, &mut io::stdout()),
        other => {
            return Err(CliError::invalid_input(format!(
                "unsupported shell: '{}'. Supported shells: bash, zsh, fish, powershell, elvish",
                other
            )));
        }
    }
    Ok(())
}
