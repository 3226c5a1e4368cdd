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

//! Load an instance file and dump it.
//!
//! ```bash
//! cargo run -p scenealloc --example load_file -- path/to/instance.txt
//! ```

use scenealloc::load_instance;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: load_file <instance file>");
        return ExitCode::FAILURE;
    };

    match load_instance(&path) {
        Ok(instance) => {
            print!("{instance}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.line() {
                Some(line) => eprintln!("{path}:{line}: {e}"),
                None => eprintln!("{path}: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
