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

//! Property-based tests for instance loading.

use proptest::prelude::*;
use scenealloc::{ErrorKind, Instance, LoadError};

/// Noise that must never change the result.
fn filler() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "#[ -~]{0,20}",
        "[ \t]{0,3}#[ -~]{0,20}",
    ]
}

/// A valid instance: (max_days, per_day, actors, scenes as (ordinal, names)).
fn valid_instance() -> impl Strategy<Value = (usize, usize, Vec<(String, i64)>, Vec<Vec<usize>>)> {
    (1usize..10, 1usize..5, 1usize..6, 1usize..6).prop_flat_map(|(days, per_day, n_actors, n_scenes)| {
        let actors = proptest::collection::vec(("[A-Za-z][A-Za-z ]{0,8}[a-z]", -1000i64..100_000), n_actors);
        let scenes = proptest::collection::vec(proptest::collection::vec(0..n_actors, 1..4), n_scenes);
        (Just(days), Just(per_day), actors, scenes)
    })
}

fn render(
    days: usize,
    per_day: usize,
    actors: &[(String, i64)],
    scenes: &[Vec<usize>],
) -> Vec<String> {
    let mut lines = vec![
        scenes.len().to_string(),
        days.to_string(),
        per_day.to_string(),
        actors.len().to_string(),
    ];
    for (name, salary) in actors {
        lines.push(format!("{},{}", name, salary));
    }
    // Declare scenes in reverse to exercise ordinal placement.
    for (slot, cast) in scenes.iter().enumerate().rev() {
        let names: Vec<&str> = cast.iter().map(|&i| actors[i].0.as_str()).collect();
        lines.push(format!("{},{}", slot + 1, names.join(",")));
    }
    lines
}

fn first_index(actors: &[(String, i64)], i: usize) -> usize {
    actors
        .iter()
        .position(|(name, _)| *name == actors[i].0)
        .unwrap_or(i)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: valid input loads with the declared counts and resolved indices.
    #[test]
    fn prop_valid_instance_loads((days, per_day, actors, scenes) in valid_instance()) {
        let input = render(days, per_day, &actors, &scenes).join("\n");
        let instance = input.parse::<Instance>().map_err(|e| TestCaseError::fail(format!("{e}")))?;

        prop_assert_eq!(instance.max_days(), days);
        prop_assert_eq!(instance.max_scenes_per_day(), per_day);
        prop_assert_eq!(instance.actor_count(), actors.len());
        prop_assert_eq!(instance.scene_count(), scenes.len());

        for (slot, cast) in scenes.iter().enumerate() {
            let expected: Vec<usize> = cast.iter().map(|&i| first_index(&actors, i)).collect();
            prop_assert_eq!(instance.scenes()[slot].actors(), expected.as_slice());
        }
    }

    /// Property: blank and comment lines anywhere do not change the result.
    #[test]
    fn prop_filler_lines_are_ignored(
        (days, per_day, actors, scenes) in valid_instance(),
        noise in proptest::collection::vec(proptest::collection::vec(filler(), 0..3), 32),
        indent in "[ \t]{0,2}",
    ) {
        let lines = render(days, per_day, &actors, &scenes);
        let plain = lines.join("\n").parse::<Instance>().map_err(|e| TestCaseError::fail(format!("{e}")))?;

        let mut noisy = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            noisy.extend(noise[i % noise.len()].iter().cloned());
            noisy.push(format!("{indent}{line}{indent}"));
        }
        noisy.extend(noise[lines.len() % noise.len()].iter().cloned());
        let padded = noisy.join("\n").parse::<Instance>().map_err(|e| TestCaseError::fail(format!("{e}")))?;

        prop_assert_eq!(plain, padded);
    }

    /// Property: a literal zero in any header line is a malformed integer.
    #[test]
    fn prop_zero_header_is_malformed(
        (days, per_day, actors, scenes) in valid_instance(),
        which in 0usize..4,
    ) {
        let mut lines = render(days, per_day, &actors, &scenes);
        lines[which] = "0".to_string();
        let err = lines.join("\n").parse::<Instance>().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedInteger);
        prop_assert_eq!(err.line(), Some(which + 1));
    }

    /// Property: cutting the input short always reports end of input.
    #[test]
    fn prop_truncation_is_end_of_input(
        (days, per_day, actors, scenes) in valid_instance(),
        keep in 0usize..64,
    ) {
        let lines = render(days, per_day, &actors, &scenes);
        let keep = keep % lines.len();
        let err = lines[..keep].join("\n").parse::<Instance>().unwrap_err();
        prop_assert!(
            matches!(err, LoadError::UnexpectedEndOfInput { .. }),
            "got {:?}", err
        );
    }

    /// Property: a scene naming an undeclared actor fails with UnknownActor.
    #[test]
    fn prop_unknown_actor((days, per_day, actors, scenes) in valid_instance()) {
        let mut lines = render(days, per_day, &actors, &scenes);
        let last = lines.len() - 1;
        lines[last].push_str(",Nobody_9");
        let err = lines.join("\n").parse::<Instance>().unwrap_err();
        prop_assert!(
            matches!(&err, LoadError::UnknownActor { name, .. } if name == "Nobody_9"),
            "got {:?}", err
        );
    }
}
