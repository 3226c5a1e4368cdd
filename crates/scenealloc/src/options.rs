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

//! Loader configuration.

/// Configuration options for loading an instance.
///
/// # Examples
///
/// ```rust
/// use scenealloc::LoadOptions;
///
/// let options = LoadOptions::default();
/// assert_eq!(options.buffer_size, 64 * 1024);
/// assert_eq!(options.max_line_length, 1024 * 1024);
///
/// let options = LoadOptions {
///     max_line_length: 4096,
///     ..Default::default()
/// };
/// assert_eq!(options.max_line_length, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Buffer size for reading input (default: 64KB).
    pub buffer_size: usize,

    /// Maximum physical line length in bytes, excluding the line terminator
    /// (default: 1MB).
    ///
    /// Longer lines fail with [`LoadError::LineTooLong`](crate::LoadError::LineTooLong).
    pub max_line_length: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            max_line_length: 1024 * 1024,
        }
    }
}

impl LoadOptions {
    /// Options with no line length bound.
    pub fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            ..Self::default()
        }
    }
}
