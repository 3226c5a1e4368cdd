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

//! Record decoders.
//!
//! Each decoder pulls exactly one record line from a [`LineReader`] and turns
//! it into a typed value. Running out of input is reported as
//! [`LoadError::UnexpectedEndOfInput`] since every call site needs a record.

use crate::error::{Expected, LoadError, LoadResult};
use crate::reader::LineReader;
use std::io::Read;

/// Field separator for actor and scene records.
pub const FIELD_SEPARATOR: char = ',';

/// A decoded integer constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    pub line: usize,
    pub value: i64,
}

/// A decoded `name,salary` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRecord {
    pub line: usize,
    pub name: String,
    pub salary: i64,
}

/// A decoded `ordinal,name,...` line; names are not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRecord {
    pub line: usize,
    pub ordinal: i64,
    pub actors: Vec<String>,
}

/// Parse a trimmed integer literal.
#[inline]
fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

fn next_record<R: Read>(
    reader: &mut LineReader<R>,
    expected: Expected,
) -> LoadResult<(usize, String)> {
    reader
        .next_line()?
        .ok_or_else(|| LoadError::end_of_input(expected, reader.line_number()))
}

/// Read a non-zero integer constant.
///
/// Zero is rejected with [`LoadError::MalformedInteger`] exactly like a
/// non-numeric line, so a literal `0` can never be loaded here.
pub fn read_constant<R: Read>(reader: &mut LineReader<R>, field: Expected) -> LoadResult<Constant> {
    let (line, content) = next_record(reader, field)?;

    match parse_int(&content) {
        Some(value) if value != 0 => Ok(Constant { line, value }),
        _ => Err(LoadError::malformed_integer(line, field, content)),
    }
}

/// Read an actor line.
pub fn read_actor<R: Read>(reader: &mut LineReader<R>) -> LoadResult<ActorRecord> {
    let (line, content) = next_record(reader, Expected::Actor)?;

    let fields: Vec<&str> = content.split(FIELD_SEPARATOR).collect();
    let [name, salary] = fields.as_slice() else {
        return Err(LoadError::MalformedActorLine {
            line,
            fields: fields.len(),
            content,
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(LoadError::MalformedActorLine {
            line,
            fields: fields.len(),
            content,
        });
    }

    let Some(salary) = parse_int(salary) else {
        return Err(LoadError::MalformedSalary {
            line,
            value: salary.trim().to_string(),
            content,
        });
    };

    Ok(ActorRecord {
        line,
        name: name.to_string(),
        salary,
    })
}

/// Read a scene line.
pub fn read_scene<R: Read>(reader: &mut LineReader<R>) -> LoadResult<SceneRecord> {
    let (line, content) = next_record(reader, Expected::Scene)?;

    let fields: Vec<&str> = content.split(FIELD_SEPARATOR).collect();
    let Some((ordinal, names)) = fields.split_first().filter(|(_, names)| !names.is_empty()) else {
        return Err(LoadError::MalformedSceneLine {
            line,
            fields: fields.len(),
            content,
        });
    };

    let Some(ordinal) = parse_int(ordinal) else {
        return Err(LoadError::MalformedSceneNumber {
            line,
            value: ordinal.trim().to_string(),
            content,
        });
    };

    let actors = names.iter().map(|name| name.trim().to_string()).collect();

    Ok(SceneRecord {
        line,
        ordinal,
        actors,
    })
}
