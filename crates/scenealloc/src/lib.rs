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

//! Scene Allocation Instance Loader
//!
//! This crate loads scene allocation problem instances from a line-oriented
//! text format into a validated, immutable [`Instance`]: a table of actors
//! with salaries, a list of scenes that each need a set of those actors, and
//! two scheduling limits.
//!
//! # Format
//!
//! Blank lines and lines starting with `#` are ignored anywhere. Every other
//! line is one record, in this order:
//!
//! ```text
//! <scene count>
//! <max days>
//! <max scenes per day>
//! <actor count>
//! <name>,<salary>                  (actor count lines)
//! <scene ordinal>,<name>,<name>... (scene count lines)
//! ```
//!
//! The four header constants must be non-zero; a literal `0` is rejected like
//! any other malformed integer. Scene ordinals are 1-based and must cover
//! `1..=scene count` exactly once each. Actor names in scene lines refer to the
//! first actor with that name.
//!
//! # Usage
//!
//! ```rust
//! use scenealloc::Instance;
//!
//! let input = "\
//! ## one scene, five days, two scenes per day, two actors
//! 1
//! 5
//! 2
//! 2
//! Alice,100
//! Bob,200
//! 1,Alice,Bob
//! ";
//!
//! let instance: Instance = input.parse().unwrap();
//!
//! assert_eq!(instance.max_days(), 5);
//! assert_eq!(instance.actors()[1].name(), "Bob");
//! assert_eq!(instance.scenes()[0].actors(), &[0, 1]);
//! ```
//!
//! From a file, with [`load_instance`]:
//!
//! ```rust,no_run
//! use scenealloc::{load_instance, LoadError};
//!
//! match load_instance("instance.txt") {
//!     Ok(instance) => print!("{instance}"),
//!     Err(LoadError::UnknownActor { name, line, .. }) => {
//!         eprintln!("line {line}: no actor named {name:?}");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Instance`], [`Actor`]
//!   and [`Scene`].

mod decode;
mod error;
mod instance;
mod loader;
mod options;
mod reader;

pub use decode::{
    read_actor, read_constant, read_scene, ActorRecord, Constant, SceneRecord, FIELD_SEPARATOR,
};
pub use error::{ErrorKind, Expected, InvalidInstance, LoadError, LoadResult};
pub use instance::{Actor, Instance, Scene};
pub use loader::{load_instance, load_instance_with_options, InstanceLoader};
pub use options::LoadOptions;
pub use reader::{is_skippable, LineReader, COMMENT_MARKER};
