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

//! In-memory model of a loaded scene allocation instance.
//!
//! Actors are identified by their position in the actor table and scenes by
//! their slot (declared ordinal minus one). Everything is 0-based in memory;
//! the [`Display`](std::fmt::Display) rendering of [`Instance`] is 1-based.

use crate::error::{Expected, InvalidInstance};
use std::fmt;

/// A named actor and their salary cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    name: String,
    salary: i64,
}

impl Actor {
    pub(crate) fn new(name: impl Into<String>, salary: i64) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    /// The actor's name, trimmed.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn salary(&self) -> i64 {
        self.salary
    }
}

/// A scene and the actors it needs, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    ordinal: usize,
    actors: Vec<usize>,
}

impl Scene {
    pub(crate) fn new(ordinal: usize, actors: Vec<usize>) -> Self {
        Self { ordinal, actors }
    }

    /// The 1-based ordinal declared in the input.
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Indices into [`Instance::actors`].
    #[inline]
    pub fn actors(&self) -> &[usize] {
        &self.actors
    }
}

/// A fully loaded, immutable scene allocation instance.
///
/// # Examples
///
/// ```rust
/// use scenealloc::Instance;
///
/// let instance: Instance = "1\n5\n2\n2\nAlice,100\nBob,200\n1,Alice,Bob\n".parse().unwrap();
///
/// assert_eq!(instance.max_days(), 5);
/// assert_eq!(instance.max_scenes_per_day(), 2);
/// assert_eq!(instance.actor(1).map(|a| a.name()), Some("Bob"));
/// assert_eq!(instance.scenes()[0].actors(), &[0, 1]);
/// ```
///
/// With the `serde` feature, deserialization goes through
/// [`Instance::validate`], so a document that breaks an invariant is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct Instance {
    max_days: usize,
    max_scenes_per_day: usize,
    actors: Vec<Actor>,
    scenes: Vec<Scene>,
}

impl Instance {
    pub(crate) fn new(
        max_days: usize,
        max_scenes_per_day: usize,
        actors: Vec<Actor>,
        scenes: Vec<Scene>,
    ) -> Self {
        Self {
            max_days,
            max_scenes_per_day,
            actors,
            scenes,
        }
    }

    /// Check the guarantees the loader gives: positive limits, non-empty
    /// actor names, each scene in the slot of its ordinal, and every scene
    /// actor index inside the actor table.
    pub fn validate(&self) -> Result<(), InvalidInstance> {
        if self.max_days == 0 {
            return Err(InvalidInstance::ZeroLimit {
                field: Expected::MaxDays,
            });
        }
        if self.max_scenes_per_day == 0 {
            return Err(InvalidInstance::ZeroLimit {
                field: Expected::MaxScenesPerDay,
            });
        }
        if let Some(index) = self.actors.iter().position(|a| a.name.trim().is_empty()) {
            return Err(InvalidInstance::EmptyActorName { index });
        }
        for (slot, scene) in self.scenes.iter().enumerate() {
            if scene.ordinal != slot + 1 {
                return Err(InvalidInstance::OrdinalMismatch {
                    slot,
                    ordinal: scene.ordinal,
                });
            }
            if let Some(&actor) = scene.actors.iter().find(|&&i| i >= self.actors.len()) {
                return Err(InvalidInstance::ActorIndexOutOfRange {
                    ordinal: scene.ordinal,
                    actor,
                    actors: self.actors.len(),
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn max_days(&self) -> usize {
        self.max_days
    }

    #[inline]
    pub fn max_scenes_per_day(&self) -> usize {
        self.max_scenes_per_day
    }

    /// The actor table, in declaration order.
    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Scenes ordered by slot, so `scenes()[i].ordinal() == i + 1`.
    #[inline]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Look up an actor by 0-based index.
    pub fn actor(&self, index: usize) -> Option<&Actor> {
        self.actors.get(index)
    }

    /// Look up a scene by its 1-based ordinal.
    pub fn scene(&self, ordinal: usize) -> Option<&Scene> {
        ordinal.checked_sub(1).and_then(|slot| self.scenes.get(slot))
    }

    #[inline]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

/// Unchecked wire form of [`Instance`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    max_days: usize,
    max_scenes_per_day: usize,
    actors: Vec<Actor>,
    scenes: Vec<Scene>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = InvalidInstance;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        let instance = Self::new(raw.max_days, raw.max_scenes_per_day, raw.actors, raw.scenes);
        instance.validate()?;
        Ok(instance)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max days: {}", self.max_days)?;
        writeln!(f, "Max scenes per day: {}", self.max_scenes_per_day)?;
        writeln!(f, "Actors: ")?;
        for (i, actor) in self.actors.iter().enumerate() {
            writeln!(f, "[{}] {}, salary={}", i + 1, actor.name, actor.salary)?;
        }
        writeln!(f, "Scenes: ")?;
        for (i, scene) in self.scenes.iter().enumerate() {
            write!(f, "[{}] actors: ", i + 1)?;
            for actor in &scene.actors {
                write!(f, "{} ", actor + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance {
        Instance::new(
            5,
            2,
            vec![Actor::new("Alice", 100), Actor::new("Bob", 200)],
            vec![Scene::new(1, vec![0, 1]), Scene::new(2, vec![1])],
        )
    }

    #[test]
    fn test_accessors() {
        let instance = sample();
        assert_eq!(instance.max_days(), 5);
        assert_eq!(instance.max_scenes_per_day(), 2);
        assert_eq!(instance.actor_count(), 2);
        assert_eq!(instance.scene_count(), 2);
        assert_eq!(instance.actors()[0].name(), "Alice");
        assert_eq!(instance.actors()[1].salary(), 200);
    }

    #[test]
    fn test_actor_lookup() {
        let instance = sample();
        assert_eq!(instance.actor(0), Some(&Actor::new("Alice", 100)));
        assert_eq!(instance.actor(2), None);
    }

    #[test]
    fn test_scene_lookup_is_one_based() {
        let instance = sample();
        assert_eq!(instance.scene(0), None);
        assert_eq!(instance.scene(1).map(Scene::actors), Some(&[0, 1][..]));
        assert_eq!(instance.scene(2).map(Scene::ordinal), Some(2));
        assert_eq!(instance.scene(3), None);
    }

    // ==================== Validation tests ====================

    #[test]
    fn test_validate_accepts_loaded_shape() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_zero_limits() {
        let instance = Instance::new(0, 2, vec![Actor::new("A", 1)], Vec::new());
        assert_eq!(
            instance.validate(),
            Err(InvalidInstance::ZeroLimit {
                field: Expected::MaxDays
            })
        );
        let instance = Instance::new(1, 0, vec![Actor::new("A", 1)], Vec::new());
        assert_eq!(
            instance.validate(),
            Err(InvalidInstance::ZeroLimit {
                field: Expected::MaxScenesPerDay
            })
        );
    }

    #[test]
    fn test_validate_empty_actor_name() {
        let instance = Instance::new(1, 1, vec![Actor::new("A", 1), Actor::new(" ", 2)], Vec::new());
        assert_eq!(
            instance.validate(),
            Err(InvalidInstance::EmptyActorName { index: 1 })
        );
    }

    #[test]
    fn test_validate_ordinal_mismatch() {
        let instance = Instance::new(1, 1, vec![Actor::new("A", 1)], vec![Scene::new(7, vec![0])]);
        assert_eq!(
            instance.validate(),
            Err(InvalidInstance::OrdinalMismatch {
                slot: 0,
                ordinal: 7
            })
        );
    }

    #[test]
    fn test_validate_actor_index_out_of_range() {
        let instance = Instance::new(1, 1, vec![Actor::new("A", 1)], vec![Scene::new(1, vec![0, 42])]);
        assert_eq!(
            instance.validate(),
            Err(InvalidInstance::ActorIndexOutOfRange {
                ordinal: 1,
                actor: 42,
                actors: 1
            })
        );
    }

    // ==================== Display tests ====================

    #[test]
    fn test_display() {
        let expected = "\
Max days: 5
Max scenes per day: 2
Actors: 
[1] Alice, salary=100
[2] Bob, salary=200
Scenes: 
[1] actors: 1 2 
[2] actors: 2 
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_display_empty_scene_list() {
        let instance = Instance::new(1, 1, vec![Actor::new("Solo", 1)], Vec::new());
        let display = instance.to_string();
        assert!(display.ends_with("Scenes: \n"));
    }
}
