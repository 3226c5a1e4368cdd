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

//! Command implementations.

use crate::error::CliError;
use scenealloc::{load_instance_with_options, Instance, LoadOptions};
use std::path::Path;

fn load(file: &Path, options: &LoadOptions) -> Result<Instance, CliError> {
    let instance =
        load_instance_with_options(file, options).map_err(|e| CliError::load(file, e))?;
    tracing::info!(
        file = %file.display(),
        actors = instance.actor_count(),
        scenes = instance.scene_count(),
        "loaded instance"
    );
    Ok(instance)
}

/// Load an instance file and print it.
///
/// The text rendering lists actors and scenes with 1-based indices. With
/// `json`, the instance is serialized instead, indices stay 0-based.
pub fn show(file: &Path, json: bool, options: &LoadOptions) -> Result<(), CliError> {
    let instance = load(file, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&instance)?);
    } else {
        print!("{instance}");
    }
    Ok(())
}

/// Load an instance file and print a one-line summary.
pub fn validate(file: &Path, options: &LoadOptions) -> Result<(), CliError> {
    let instance = load(file, options)?;

    println!(
        "{}: ok ({} actors, {} scenes, {} days, {} scenes per day)",
        file.display(),
        instance.actor_count(),
        instance.scene_count(),
        instance.max_days(),
        instance.max_scenes_per_day()
    );
    Ok(())
}
