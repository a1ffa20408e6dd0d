//! Tests for the two-pass validation pipeline
//!
//! Covers the end-to-end scenarios: parsing failures, identity conflicts,
//! forward references and dangling parent references.

use pedigree_loader::{
    ErrorReport, LoaderConfig, Pass, PersonRegistry, RecordError, ValidationPipeline, run,
};
use pedigree_loader::{Gender, ParentRole};

fn errors_of(errors: &ErrorReport) -> Vec<(usize, RecordError)> {
    errors.iter().map(|e| (e.row, e.error.clone())).collect()
}

#[test]
fn test_single_person_without_parents() {
    let (registry, errors) = run(["1\tAlice\t0\t0\tF"]);

    assert!(errors.is_empty());
    assert_eq!(registry.len(), 1);
    let alice = registry.get("1").unwrap();
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.gender, Gender::Female);
    assert!(alice.mother.is_none());
    assert!(alice.father.is_none());
}

#[test]
fn test_father_is_linked() {
    let (registry, errors) = run(["1\tAlice\t0\t0\tF", "2\tBob\t1\t0\tM"]);

    assert!(errors.is_empty());
    let bob = registry.get("2").unwrap();
    assert_eq!(bob.father.as_deref(), Some("1"));
    assert_eq!(registry.father_of(bob).map(|p| p.name.as_str()), Some("Alice"));
    assert!(registry.mother_of(bob).is_none());
}

#[test]
fn test_duplicate_id_excludes_both_rows() {
    let (registry, errors) = run(["1\tAlice\t0\t0\tF", "1\tAlice2\t0\t0\tF"]);

    assert!(registry.is_empty());
    assert_eq!(
        errors_of(&errors),
        vec![(2, RecordError::DuplicateId { id: "1".into() })]
    );
    assert_eq!(errors.as_slice()[0].pass, Pass::Individual);
}

#[test]
fn test_missing_father_is_rejected() {
    let (registry, errors) = run(["2\tBob\t9\t0\tM"]);

    assert!(registry.get("2").is_none());
    assert_eq!(
        errors_of(&errors),
        vec![(
            1,
            RecordError::MissingParent {
                child: "2".into(),
                role: ParentRole::Father,
                parent_id: "9".into(),
            }
        )]
    );
    assert_eq!(errors.as_slice()[0].to_string(), "row 1: for 2 missing father 9");
}

#[test]
fn test_malformed_row_does_not_stop_processing() {
    let (registry, errors) = run([
        "1\tAlice\t0\t0\tF",
        "2\tBob\t1\t0",
        "3\tCarol\t0\t1\tF",
    ]);

    assert_eq!(registry.ids_sorted(), vec!["1", "3"]);
    assert_eq!(
        errors_of(&errors),
        vec![(
            2,
            RecordError::MalformedRow {
                row: 2,
                fields: 4,
                expected: 5,
            }
        )]
    );
    assert_eq!(errors.as_slice()[0].pass, Pass::Parse);
}

#[test]
fn test_parent_after_child_in_file() {
    let (registry, errors) = run([
        "3\tKid\t1\t2\tM",
        "1\tDad\t0\t0\tM",
        "2\tMom\t0\t0\tF",
    ]);

    assert!(errors.is_empty());
    let kid = registry.get("3").unwrap();
    assert_eq!(kid.father.as_deref(), Some("1"));
    assert_eq!(kid.mother.as_deref(), Some("2"));
    assert_eq!(
        registry
            .children_of("2")
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>(),
        vec!["3"]
    );
}

#[test]
fn test_reference_to_duplicate_id_is_missing() {
    let (registry, errors) = run([
        "1\tAl\t0\t0\tM",
        "1\tAl\t0\t0\tM",
        "2\tBo\t1\t0\tM",
    ]);

    assert!(registry.is_empty());
    assert_eq!(
        errors.lines(),
        vec![
            "row 2: duplicate ID: 1".to_string(),
            "row 3: for 2 missing father 1".to_string(),
        ]
    );
}

#[test]
fn test_invalid_gender() {
    let (registry, errors) = run(["1\tAlice\t0\t0\tQ", "2\tBob\t0\t0\tM"]);

    assert_eq!(registry.ids_sorted(), vec!["2"]);
    assert_eq!(
        errors_of(&errors),
        vec![(1, RecordError::InvalidGender { code: "Q".into() })]
    );
}

#[test]
fn test_errors_ordered_by_pass_then_row() {
    let (_, errors) = run([
        "5\tE\t9\t0\tM",
        "1\tA\t0\t0\tF",
        "bad line",
        "1\tA\t0\t0\tF",
        "6\tF\t0\t8\tF",
        "7\tG\t0\t0\tZ",
    ]);

    let passes: Vec<Pass> = errors.iter().map(|e| e.pass).collect();
    assert_eq!(
        passes,
        vec![
            Pass::Parse,
            Pass::Individual,
            Pass::Individual,
            Pass::Relatedness,
            Pass::Relatedness,
        ]
    );
    let rows: Vec<usize> = errors.iter().map(|e| e.row).collect();
    assert_eq!(rows, vec![3, 4, 6, 1, 5]);
}

#[test]
fn test_no_dangling_links_after_cascade() {
    let (registry, errors) = run([
        "1\tRoot\t0\t0\tM",
        "2\tOrphan\t0\t99\tF",
        "3\tChild\t1\t2\tM",
        "4\tGrandchild\t3\t0\tF",
    ]);

    assert_eq!(registry.ids_sorted(), vec!["1"]);
    assert!(registry.is_closed());
    assert_eq!(
        errors.lines(),
        vec![
            "row 2: for 2 missing mother 99".to_string(),
            "row 3: for 3 rejected mother 2".to_string(),
            "row 4: for 4 rejected father 3".to_string(),
        ]
    );
}

#[test]
fn test_long_reverse_chain_with_missing_root() {
    let n = 20_000;
    let lines: Vec<String> = (1..=n)
        .map(|i| {
            if i == n {
                format!("{i}\tRoot\t0\tmissing\tF")
            } else {
                format!("{i}\tP{i}\t{}\t0\tM", i + 1)
            }
        })
        .collect();

    let (registry, errors) = run(&lines);

    assert!(registry.is_empty());
    assert_eq!(errors.len(), n);
    let rows: Vec<usize> = errors.iter().map(|e| e.row).collect();
    assert_eq!(rows, (1..=n).collect::<Vec<_>>());
    assert_eq!(errors.as_slice()[0].to_string(), "row 1: for 1 rejected father 2");
    assert_eq!(
        errors.as_slice()[n - 1].to_string(),
        format!("row {n}: for {n} missing mother missing")
    );
}

#[test]
fn test_self_reference_is_accepted() {
    let (registry, errors) = run(["1\tLoop\t1\t0\tM"]);

    assert!(errors.is_empty());
    assert_eq!(registry.get("1").unwrap().father.as_deref(), Some("1"));
}

#[test]
fn test_custom_null_id() {
    let pipeline = ValidationPipeline::new(LoaderConfig::default().with_null_id("-"));
    let outcome = pipeline.run(["1\tAlice\t-\t-\tF", "2\tBob\t0\t-\tM"]);

    assert_eq!(outcome.registry.ids_sorted(), vec!["1"]);
    assert_eq!(outcome.errors.lines(), vec!["row 2: for 2 missing father 0"]);
}

#[test]
fn test_statistics() {
    let outcome = ValidationPipeline::default().run([
        "1\tA\t0\t0\tF",
        "2\tB\t0\t0",
        "3\tC\t0\t0\tX",
        "4\tD\t0\t7\tM",
        "5\tE\t0\t1\tM",
    ]);

    let stats = outcome.statistics;
    assert_eq!(stats.lines_read, 5);
    assert_eq!(stats.parsed, 4);
    assert_eq!(stats.admitted, 3);
    assert_eq!(stats.verified, 2);
    assert_eq!(stats.parse_errors, 1);
    assert_eq!(stats.individual_errors, 1);
    assert_eq!(stats.relatedness_errors, 1);
    assert_eq!(stats.rejected(), 3);
}

#[test]
fn test_empty_input() {
    let (registry, errors) = run(Vec::<String>::new());
    assert_eq!(registry, PersonRegistry::new());
    assert!(errors.is_empty());
}
