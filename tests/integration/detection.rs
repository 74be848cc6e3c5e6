//! Detection: create a baseline, mutate the tree, verify.

use super::test_utils::Fixture;
use fixity::integrity::{ChangeKind, IntegrityService};

#[test]
fn test_create_then_verify_reports_nothing() {
    let fx = Fixture::with_files(&[("a.txt", "a"), ("sub/b.txt", "b"), ("sub/deep/c.bin", "c")]);
    let service = IntegrityService::default();

    let created = service.create_baseline(&fx.data, &fx.baseline).unwrap();
    assert_eq!(created.baseline.len(), 3);
    assert!(created.failures.is_empty());

    let outcome = service.verify_integrity(&fx.data, &fx.baseline).unwrap();
    assert!(!outcome.report.has_changes());
    assert_eq!(outcome.report.unchanged, 3);
}

#[test]
fn test_detects_exactly_deleted_modified_new() {
    let fx = Fixture::with_files(&[("a", "alpha"), ("b", "bravo"), ("c", "charlie")]);
    let service = IntegrityService::default();
    service.create_baseline(&fx.data, &fx.baseline).unwrap();

    fx.remove("b");
    fx.write("c", "charlie, edited");
    fx.write("d", "delta");

    let report = service.verify_integrity(&fx.data, &fx.baseline).unwrap().report;
    let verdicts: Vec<(String, ChangeKind)> = report
        .changes
        .iter()
        .map(|c| (c.path.clone(), c.kind))
        .collect();

    assert_eq!(
        verdicts,
        vec![
            (fx.key("b"), ChangeKind::Deleted),
            (fx.key("c"), ChangeKind::Modified),
            (fx.key("d"), ChangeKind::New),
        ]
    );
    assert!(!report.changes.iter().any(|c| c.path == fx.key("a")));
}

#[test]
fn test_identical_content_at_two_paths_gets_two_entries() {
    let fx = Fixture::with_files(&[("one.txt", "same"), ("two.txt", "same")]);
    let created = IntegrityService::default()
        .create_baseline(&fx.data, &fx.baseline)
        .unwrap();

    let one = created.baseline.get(&fx.key("one.txt")).unwrap();
    let two = created.baseline.get(&fx.key("two.txt")).unwrap();
    assert_eq!(one.old_hash, two.old_hash);
}

#[test]
fn test_rename_is_deleted_plus_new_file() {
    let fx = Fixture::with_files(&[("old.txt", "payload")]);
    let service = IntegrityService::default();
    service.create_baseline(&fx.data, &fx.baseline).unwrap();

    std::fs::rename(fx.data.join("old.txt"), fx.data.join("new.txt")).unwrap();
    let report = service.verify_integrity(&fx.data, &fx.baseline).unwrap().report;

    assert_eq!(report.paths(ChangeKind::Deleted), vec![fx.key("old.txt").as_str()]);
    assert_eq!(report.paths(ChangeKind::New), vec![fx.key("new.txt").as_str()]);
    assert_eq!(report.count(ChangeKind::Modified), 0);
}

#[test]
fn test_empty_directory_round_trip() {
    let fx = Fixture::with_files(&[]);
    let service = IntegrityService::default();

    let created = service.create_baseline(&fx.data, &fx.baseline).unwrap();
    assert!(created.baseline.is_empty());
    assert!(!service
        .verify_integrity(&fx.data, &fx.baseline)
        .unwrap()
        .report
        .has_changes());
}

#[test]
fn test_create_overwrites_previous_baseline() {
    let fx = Fixture::with_files(&[("a", "1")]);
    let service = IntegrityService::default();
    service.create_baseline(&fx.data, &fx.baseline).unwrap();

    fx.write("a", "2");
    service.create_baseline(&fx.data, &fx.baseline).unwrap();

    let stored = fixity::baseline::load_baseline(&fx.baseline).unwrap();
    let record = stored.get(&fx.key("a")).unwrap();
    assert_eq!(record.old_hash, record.new_hash);
    assert!(!service
        .verify_integrity(&fx.data, &fx.baseline)
        .unwrap()
        .report
        .has_changes());
}
