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

//! Instance loading.
//!
//! The loader walks a fixed grammar with no backtracking:
//!
//! 1. four header constants: scene count, maximum days, maximum scenes per
//!    day, actor count
//! 2. exactly `actor count` actor lines
//! 3. exactly `scene count` scene lines
//!
//! then resolves every actor name used by a scene to its index in the actor
//! table and files each scene under its declared ordinal. The first failure
//! aborts the load and no partial instance is returned.
//!
//! # Examples
//!
//! ```rust
//! use scenealloc::InstanceLoader;
//! use std::io::Cursor;
//!
//! let input = r#"
//! ## scenes, days, scenes per day, actors
//! 2
//! 3
//! 1
//! 2
//!
//! Alice,100
//! Bob,200
//!
//! 2,Bob
//! 1,Alice,Bob
//! "#;
//!
//! let instance = InstanceLoader::new(Cursor::new(input)).load().unwrap();
//! assert_eq!(instance.scene(1).unwrap().actors(), &[0, 1]);
//! assert_eq!(instance.scene(2).unwrap().actors(), &[1]);
//! ```

use crate::decode::{read_actor, read_constant, read_scene, SceneRecord};
use crate::error::{Expected, LoadError, LoadResult};
use crate::instance::{Actor, Instance, Scene};
use crate::options::LoadOptions;
use crate::reader::LineReader;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Upper bound on capacity reserved up front from a declared count.
const MAX_PREALLOCATION: usize = 1024;

/// Load an instance from a file with default options.
///
/// # Examples
///
/// ```rust,no_run
/// use scenealloc::load_instance;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let instance = load_instance("instances/small.txt")?;
/// println!("{instance}");
/// # Ok(())
/// # }
/// ```
pub fn load_instance(path: impl AsRef<Path>) -> LoadResult<Instance> {
    load_instance_with_options(path, &LoadOptions::default())
}

/// Load an instance from a file.
///
/// The file is closed when this returns, on success and on failure alike.
pub fn load_instance_with_options(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> LoadResult<Instance> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading instance");
    let file = File::open(path)?;
    InstanceLoader::with_options(file, options).load()
}

/// Loader phases, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ReadSceneCount,
    ReadMaxDays,
    ReadMaxScenesPerDay,
    ReadActorCount,
    ReadActors,
    ReadScenes,
    ResolveScenes,
    Build,
}

/// Builds an [`Instance`] from any reader.
pub struct InstanceLoader<R: Read> {
    reader: LineReader<R>,
    phase: Phase,
}

impl<R: Read> InstanceLoader<R> {
    /// Create a loader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, &LoadOptions::default())
    }

    /// Create a loader with custom options.
    pub fn with_options(reader: R, options: &LoadOptions) -> Self {
        Self {
            reader: LineReader::with_options(reader, options),
            phase: Phase::ReadSceneCount,
        }
    }

    /// Run every phase and return the instance.
    ///
    /// # Errors
    ///
    /// Any decoding or resolution failure; see [`LoadError`].
    pub fn load(mut self) -> LoadResult<Instance> {
        self.enter(Phase::ReadSceneCount);
        let scene_count = self.read_positive(Expected::SceneCount)?;
        self.enter(Phase::ReadMaxDays);
        let max_days = self.read_positive(Expected::MaxDays)?;
        self.enter(Phase::ReadMaxScenesPerDay);
        let max_scenes_per_day = self.read_positive(Expected::MaxScenesPerDay)?;
        self.enter(Phase::ReadActorCount);
        let actor_count = self.read_positive(Expected::ActorCount)?;

        self.enter(Phase::ReadActors);
        let mut actors = Vec::with_capacity(actor_count.min(MAX_PREALLOCATION));
        for _ in 0..actor_count {
            let record = read_actor(&mut self.reader)?;
            tracing::trace!(line = record.line, name = %record.name, salary = record.salary, "actor");
            actors.push(Actor::new(record.name, record.salary));
        }

        self.enter(Phase::ReadScenes);
        let mut records = Vec::with_capacity(scene_count.min(MAX_PREALLOCATION));
        for _ in 0..scene_count {
            let record = read_scene(&mut self.reader)?;
            tracing::trace!(line = record.line, ordinal = record.ordinal, actors = record.actors.len(), "scene");
            records.push(record);
        }

        self.enter(Phase::ResolveScenes);
        let scenes = resolve_scenes(&actors, records, scene_count)?;

        self.enter(Phase::Build);
        let instance = Instance::new(max_days, max_scenes_per_day, actors, scenes);
        tracing::debug!(
            actors = instance.actor_count(),
            scenes = instance.scene_count(),
            max_days,
            max_scenes_per_day,
            last_line = self.reader.line_number(),
            "instance loaded"
        );
        Ok(instance)
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, line = self.reader.line_number(), "loader phase");
        self.phase = phase;
    }

    /// Read a header constant that is used as a count or a limit.
    fn read_positive(&mut self, field: Expected) -> LoadResult<usize> {
        let constant = read_constant(&mut self.reader, field)?;
        usize::try_from(constant.value)
            .map_err(|_| LoadError::malformed_integer(constant.line, field, constant.value.to_string()))
    }
}

/// Index of the first actor called `name`.
fn position(actors: &[Actor], name: &str) -> Option<usize> {
    actors.iter().position(|actor| actor.name() == name)
}

/// Resolve names to actor indices and order scenes by ordinal.
///
/// Exactly `scene_count` records arrive here, so distinct in-range ordinals
/// fill every slot.
fn resolve_scenes(
    actors: &[Actor],
    records: Vec<SceneRecord>,
    scene_count: usize,
) -> LoadResult<Vec<Scene>> {
    let mut slots: BTreeMap<usize, Scene> = BTreeMap::new();

    for record in records {
        let indices = record
            .actors
            .iter()
            .map(|name| {
                position(actors, name).ok_or_else(|| LoadError::UnknownActor {
                    name: name.clone(),
                    scene: record.ordinal,
                    line: record.line,
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let ordinal = usize::try_from(record.ordinal)
            .ok()
            .filter(|ordinal| (1..=scene_count).contains(ordinal) && !slots.contains_key(ordinal))
            .ok_or(LoadError::DuplicateOrInvalidSceneOrdinal {
                line: record.line,
                ordinal: record.ordinal,
                scene_count,
            })?;

        slots.insert(ordinal, Scene::new(ordinal, indices));
    }

    Ok(slots.into_values().collect())
}

impl FromStr for Instance {
    type Err = LoadError;

    fn from_str(s: &str) -> LoadResult<Self> {
        InstanceLoader::new(s.as_bytes()).load()
    }
}
