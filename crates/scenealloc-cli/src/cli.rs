// SceneAlloc - Scene Allocation Instance Loader
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
use clap::Subcommand;
use scenealloc::LoadOptions;
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Load an instance file and print its contents
    ///
    /// Prints the limits, the actor table and every scene's cast. Indices are
    /// 1-based in the text output.
    Show {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print as JSON (0-based indices)
        #[arg(long)]
        json: bool,

        /// Maximum line length in bytes
        #[arg(long, value_name = "BYTES")]
        max_line_length: Option<usize>,
    },

    /// Check that an instance file loads
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum line length in bytes
        #[arg(long, value_name = "BYTES")]
        max_line_length: Option<usize>,
    },
}

fn options(max_line_length: Option<usize>) -> LoadOptions {
    let mut options = LoadOptions::default();
    if let Some(limit) = max_line_length {
        options.max_line_length = limit;
    }
    options
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Show {
                file,
                json,
                max_line_length,
            } => commands::show(&file, json, &options(max_line_length)),
            Commands::Validate {
                file,
                max_line_length,
            } => commands::validate(&file, &options(max_line_length)),
        }
    }
}
