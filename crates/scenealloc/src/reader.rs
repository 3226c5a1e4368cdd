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

//! Line reader for the instance loader.
//!
//! Reads input line-by-line, strips the line terminator (LF or CRLF) and
//! surrounding whitespace, and skips blank lines and `#` comment lines so the
//! decoders only ever see records.

use crate::error::{LoadError, LoadResult};
use crate::options::LoadOptions;
use std::io::{BufRead, BufReader, Read};

/// First character of a comment line.
pub const COMMENT_MARKER: char = '#';

/// Returns `true` if a trimmed line carries no record.
#[inline]
pub fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Buffered reader yielding trimmed record lines with their line numbers.
///
/// Line numbers are physical and 1-based, so skipped blank and comment lines
/// still count. Reaching the end of input yields `None`; whether that is an
/// error is up to the caller.
///
/// # Examples
///
/// ```rust
/// use scenealloc::LineReader;
/// use std::io::Cursor;
///
/// let input = "# header\n  4  \n\n# actors\nAlice, 100\n";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.next_line().unwrap(), Some((2, "4".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((5, "Alice, 100".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, &LoadOptions::default())
    }

    /// Create a line reader using the buffer size and line length limit
    /// from `options`.
    pub fn with_options(reader: R, options: &LoadOptions) -> Self {
        Self {
            reader: BufReader::with_capacity(options.buffer_size, reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length: options.max_line_length,
        }
    }

    /// Get the number of the last physical line read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next record line, trimmed.
    pub fn next_line(&mut self) -> LoadResult<Option<(usize, String)>> {
        loop {
            let Some((line, content)) = self.read_physical_line()? else {
                return Ok(None);
            };
            let trimmed = content.trim();
            if is_skippable(trimmed) {
                tracing::trace!(line, "skipping blank or comment line");
                continue;
            }
            return Ok(Some((line, trimmed.to_string())));
        }
    }

    /// Read the next physical line without its terminator; `None` at EOF.
    ///
    /// At most `max_line_length + 2` bytes (content plus CRLF) are buffered,
    /// so an unterminated run of input cannot grow the buffer past the limit.
    fn read_physical_line(&mut self) -> LoadResult<Option<(usize, &str)>> {
        self.buffer.clear();

        let cap = u64::try_from(self.max_line_length)
            .unwrap_or(u64::MAX)
            .saturating_add(2);
        let read = self
            .reader
            .by_ref()
            .take(cap)
            .read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        // An unterminated line that hit the cap is longer than the limit too.
        if self.buffer.len() > self.max_line_length {
            return Err(LoadError::LineTooLong {
                line: self.line_number,
                length: self.buffer.len(),
                limit: self.max_line_length,
            });
        }

        match std::str::from_utf8(&self.buffer) {
            Ok(content) => Ok(Some((self.line_number, content))),
            Err(e) => Err(LoadError::Utf8 {
                line: self.line_number,
                message: e.to_string(),
            }),
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = LoadResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
