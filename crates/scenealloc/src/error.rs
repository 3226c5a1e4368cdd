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

//! Error types for instance loading.
//!
//! Every failure aborts the whole load. Variants carry the physical line
//! number and the offending (trimmed) line content so callers can point the
//! user at the exact record, and [`LoadError::kind`] gives a fieldless tag to
//! branch on without destructuring.
//!
//! # Error Categories
//!
//! - **Truncation**: the input ended while a record was still expected
//! - **Lexical Errors**: a field that must be an integer is not one (or is zero)
//! - **Shape Errors**: wrong number of comma-separated fields for a record
//! - **Reference Errors**: a scene names an actor that was never declared, or
//!   declares an ordinal that is out of range or already taken
//! - **I/O Errors**: the input could not be opened or read, or a line is not
//!   valid UTF-8
//!
//! # Examples
//!
//! ```rust
//! use scenealloc::{ErrorKind, Instance, LoadError};
//!
//! let err = "1\n5\n2\n2\nAlice,100\nBob,200\n1,Alice,Carol\n"
//!     .parse::<Instance>()
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::UnknownActor);
//! assert_eq!(err.line(), Some(7));
//! if let LoadError::UnknownActor { name, .. } = &err {
//!     assert_eq!(name, "Carol");
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The record a decoder was trying to read when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// First header constant: number of scene lines.
    SceneCount,
    /// Second header constant: scheduling horizon in days.
    MaxDays,
    /// Third header constant: scenes that fit in one day.
    MaxScenesPerDay,
    /// Fourth header constant: number of actor lines.
    ActorCount,
    /// A `name,salary` line.
    Actor,
    /// A `ordinal,name,...` line.
    Scene,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SceneCount => "scene count",
            Self::MaxDays => "maximum number of days",
            Self::MaxScenesPerDay => "maximum scenes per day",
            Self::ActorCount => "actor count",
            Self::Actor => "actor record",
            Self::Scene => "scene record",
        };
        f.write_str(s)
    }
}

/// Fieldless discriminant of [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedEndOfInput,
    MalformedInteger,
    MalformedSalary,
    MalformedSceneNumber,
    MalformedActorLine,
    MalformedSceneLine,
    UnknownActor,
    DuplicateOrInvalidSceneOrdinal,
    LineTooLong,
    Utf8,
    Io,
}

/// Errors that can occur while loading an instance.
///
/// # Examples
///
/// ```rust
/// use scenealloc::{Expected, LoadError};
///
/// let err = LoadError::malformed_integer(3, Expected::MaxScenesPerDay, "0");
/// assert_eq!(err.line(), Some(3));
///
/// let msg = err.to_string();
/// assert!(msg.contains("line 3"));
/// assert!(msg.contains("maximum scenes per day"));
/// ```
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input ran out before a required record was read.
    #[error("Unexpected end of input: expected {expected} after line {last_line}")]
    UnexpectedEndOfInput {
        /// What the decoder was looking for.
        expected: Expected,
        /// Last physical line read (0 for empty input).
        last_line: usize,
    },

    /// An integer constant was not an integer literal, was zero, or was
    /// negative where a count or limit is required.
    #[error("Malformed integer for {field} at line {line}: {content:?}")]
    MalformedInteger {
        line: usize,
        field: Expected,
        content: String,
    },

    /// The salary field of an actor line is not an integer.
    #[error("Malformed salary {value:?} at line {line}: {content:?}")]
    MalformedSalary {
        line: usize,
        /// The salary field as written.
        value: String,
        content: String,
    },

    /// The ordinal field of a scene line is not an integer.
    #[error("Malformed scene number {value:?} at line {line}: {content:?}")]
    MalformedSceneNumber {
        line: usize,
        /// The ordinal field as written.
        value: String,
        content: String,
    },

    /// An actor line does not have exactly two fields, or its name is empty.
    #[error("Malformed actor line {line}: expected `name,salary`, got {fields} field(s) in {content:?}")]
    MalformedActorLine {
        line: usize,
        fields: usize,
        content: String,
    },

    /// A scene line has fewer than two fields.
    #[error("Malformed scene line {line}: expected `ordinal,actor,...`, got {fields} field(s) in {content:?}")]
    MalformedSceneLine {
        line: usize,
        fields: usize,
        content: String,
    },

    /// A scene references a name absent from the actor table.
    #[error("No such actor {name:?} in scene {scene} at line {line}")]
    UnknownActor {
        name: String,
        /// Declared ordinal of the referencing scene.
        scene: i64,
        line: usize,
    },

    /// A scene ordinal lies outside `[1, scene_count]` or repeats an
    /// earlier scene's ordinal.
    #[error("Scene ordinal {ordinal} at line {line} is out of range 1..={scene_count} or already used")]
    DuplicateOrInvalidSceneOrdinal {
        line: usize,
        ordinal: i64,
        scene_count: usize,
    },

    /// A physical line exceeds the configured maximum length.
    #[error("Line {line} is too long: {length} bytes exceeds limit of {limit}")]
    LineTooLong {
        line: usize,
        /// Bytes buffered before giving up; reading stops at `limit + 2`.
        length: usize,
        limit: usize,
    },

    /// Invalid UTF-8 encoding.
    #[error("Invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Create a malformed integer error.
    #[inline]
    pub fn malformed_integer(line: usize, field: Expected, content: impl Into<String>) -> Self {
        Self::MalformedInteger {
            line,
            field,
            content: content.into(),
        }
    }

    /// Create an unexpected end of input error.
    #[inline]
    pub fn end_of_input(expected: Expected, last_line: usize) -> Self {
        Self::UnexpectedEndOfInput {
            expected,
            last_line,
        }
    }

    /// Get the line number of the offending record, if there is one.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInteger { line, .. }
            | Self::MalformedSalary { line, .. }
            | Self::MalformedSceneNumber { line, .. }
            | Self::MalformedActorLine { line, .. }
            | Self::MalformedSceneLine { line, .. }
            | Self::UnknownActor { line, .. }
            | Self::DuplicateOrInvalidSceneOrdinal { line, .. }
            | Self::LineTooLong { line, .. }
            | Self::Utf8 { line, .. } => Some(*line),
            Self::UnexpectedEndOfInput { .. } | Self::Io(_) => None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            Self::MalformedInteger { .. } => ErrorKind::MalformedInteger,
            Self::MalformedSalary { .. } => ErrorKind::MalformedSalary,
            Self::MalformedSceneNumber { .. } => ErrorKind::MalformedSceneNumber,
            Self::MalformedActorLine { .. } => ErrorKind::MalformedActorLine,
            Self::MalformedSceneLine { .. } => ErrorKind::MalformedSceneLine,
            Self::UnknownActor { .. } => ErrorKind::UnknownActor,
            Self::DuplicateOrInvalidSceneOrdinal { .. } => ErrorKind::DuplicateOrInvalidSceneOrdinal,
            Self::LineTooLong { .. } => ErrorKind::LineTooLong,
            Self::Utf8 { .. } => ErrorKind::Utf8,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// An [`Instance`](crate::Instance) assembled outside the loader breaks one
/// of the loader's guarantees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInstance {
    /// `max_days` or `max_scenes_per_day` is zero.
    #[error("{field} must be positive")]
    ZeroLimit { field: Expected },

    /// An actor's name is empty.
    #[error("Actor {index} has an empty name")]
    EmptyActorName { index: usize },

    /// A scene is stored in a slot that does not match its ordinal.
    #[error("Scene in slot {slot} has ordinal {ordinal}, expected {}", slot + 1)]
    OrdinalMismatch { slot: usize, ordinal: usize },

    /// A scene refers to an index past the end of the actor table.
    #[error("Scene {ordinal} refers to actor index {actor}, but only {actors} actors exist")]
    ActorIndexOutOfRange {
        ordinal: usize,
        actor: usize,
        actors: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ==================== Display tests ====================

    #[test]
    fn test_display_end_of_input() {
        let err = LoadError::end_of_input(Expected::Actor, 6);
        let display = err.to_string();
        assert!(display.contains("Unexpected end of input"));
        assert!(display.contains("actor record"));
        assert!(display.contains("line 6"));
    }

    #[test]
    fn test_display_malformed_integer() {
        let err = LoadError::malformed_integer(2, Expected::MaxDays, "abc");
        let display = err.to_string();
        assert!(display.contains("maximum number of days"));
        assert!(display.contains("line 2"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_display_unknown_actor() {
        let err = LoadError::UnknownActor {
            name: "Carol".to_string(),
            scene: 1,
            line: 7,
        };
        let display = err.to_string();
        assert!(display.contains("No such actor"));
        assert!(display.contains("\"Carol\""));
        assert!(display.contains("scene 1"));
    }

    #[test]
    fn test_display_scene_ordinal() {
        let err = LoadError::DuplicateOrInvalidSceneOrdinal {
            line: 9,
            ordinal: 4,
            scene_count: 3,
        };
        let display = err.to_string();
        assert!(display.contains("ordinal 4"));
        assert!(display.contains("1..=3"));
    }

    #[test]
    fn test_display_io() {
        let err = LoadError::from(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    // ==================== line() tests ====================

    #[test]
    fn test_line_for_record_errors() {
        let errors = [
            LoadError::malformed_integer(1, Expected::SceneCount, "x"),
            LoadError::MalformedSalary {
                line: 1,
                value: "x".to_string(),
                content: "a,x".to_string(),
            },
            LoadError::MalformedSceneNumber {
                line: 1,
                value: "x".to_string(),
                content: "x,a".to_string(),
            },
            LoadError::MalformedActorLine {
                line: 1,
                fields: 3,
                content: "a,1,2".to_string(),
            },
            LoadError::MalformedSceneLine {
                line: 1,
                fields: 1,
                content: "1".to_string(),
            },
            LoadError::LineTooLong {
                line: 1,
                length: 10,
                limit: 5,
            },
            LoadError::Utf8 {
                line: 1,
                message: "invalid utf-8 sequence".to_string(),
            },
        ];
        for err in &errors {
            assert_eq!(err.line(), Some(1), "{err:?}");
        }
    }

    #[test]
    fn test_line_none_for_eof_and_io() {
        assert_eq!(LoadError::end_of_input(Expected::Scene, 12).line(), None);
        let io_err = LoadError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(io_err.line(), None);
    }

    // ==================== kind() tests ====================

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            LoadError::end_of_input(Expected::SceneCount, 0).kind(),
            ErrorKind::UnexpectedEndOfInput
        );
        assert_eq!(
            LoadError::malformed_integer(1, Expected::ActorCount, "0").kind(),
            ErrorKind::MalformedInteger
        );
        assert_eq!(
            LoadError::UnknownActor {
                name: String::new(),
                scene: 1,
                line: 1,
            }
            .kind(),
            ErrorKind::UnknownActor
        );
    }

    #[test]
    fn test_display_invalid_instance() {
        let err = InvalidInstance::OrdinalMismatch {
            slot: 0,
            ordinal: 7,
        };
        assert_eq!(err.to_string(), "Scene in slot 0 has ordinal 7, expected 1");

        let err = InvalidInstance::ZeroLimit {
            field: Expected::MaxDays,
        };
        assert_eq!(err.to_string(), "maximum number of days must be positive");
    }

    #[test]
    fn test_expected_display() {
        assert_eq!(Expected::SceneCount.to_string(), "scene count");
        assert_eq!(Expected::MaxScenesPerDay.to_string(), "maximum scenes per day");
        assert_eq!(Expected::Scene.to_string(), "scene record");
    }
}
