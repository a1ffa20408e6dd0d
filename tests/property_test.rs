//! Property tests for the validation pipeline
//!
//! Generates small pedigrees with colliding ids, random parent references and
//! occasional malformed or mis-gendered rows, and checks the invariants that
//! must hold for any input.

use std::collections::HashMap;

use pedigree_loader::{Pass, RecordError, ValidationPipeline};
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = String> {
    (0u8..12).prop_map(|n| n.to_string())
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (
            1u8..12,
            "[A-Za-z]{1,6}",
            id_strategy(),
            id_strategy(),
            prop_oneof![Just("M"), Just("F"), Just("X")],
        )
            .prop_map(|(id, name, father, mother, gender)| {
                format!("{id}\t{name}\t{father}\t{mother}\t{gender}")
            }),
        1 => "[a-z\t]{0,8}",
    ]
}

proptest! {
    #[test]
    fn prop_ids_from_repeated_rows_never_survive(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let outcome = ValidationPipeline::default().run(&lines);

        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for line in &lines {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() == 5 {
                *occurrences.entry(fields[0].to_string()).or_default() += 1;
            }
        }

        for id in outcome.registry.ids_sorted() {
            prop_assert_eq!(occurrences.get(id).copied(), Some(1));
        }
    }

    #[test]
    fn prop_registry_is_closed(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let outcome = ValidationPipeline::default().run(&lines);

        for person in outcome.registry.iter_sorted() {
            if let Some(mother) = &person.mother {
                prop_assert!(outcome.registry.contains(mother));
            }
            if let Some(father) = &person.father {
                prop_assert!(outcome.registry.contains(father));
            }
        }
    }

    #[test]
    fn prop_runs_are_idempotent(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let pipeline = ValidationPipeline::default();
        let first = pipeline.run(&lines);
        let second = pipeline.run(&lines);

        prop_assert_eq!(first.registry, second.registry);
        prop_assert_eq!(first.errors, second.errors);
    }

    #[test]
    fn prop_errors_ordered_within_passes(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let outcome = ValidationPipeline::default().run(&lines);

        let keys: Vec<(Pass, usize)> = outcome.errors.iter().map(|e| (e.pass, e.row)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn prop_each_malformed_line_reported_once(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let outcome = ValidationPipeline::default().run(&lines);

        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.split('\t').count() != 5)
            .map(|(i, _)| i + 1)
            .collect();
        let reported: Vec<usize> = outcome
            .errors
            .for_pass(Pass::Parse)
            .map(|e| {
                assert!(matches!(e.error, RecordError::MalformedRow { .. }));
                e.row
            })
            .collect();
        prop_assert_eq!(reported, expected);
    }
}
