//! A path that cannot be hashed is reported on its own and never aborts the scan.

#![cfg(unix)]

use super::test_utils::Fixture;
use fixity::baseline::load_baseline;
use fixity::integrity::{ChangeKind, IntegrityService};
use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};

#[test]
fn test_broken_link_is_error_and_rest_still_classified() {
    let fx = Fixture::with_files(&[("a.txt", "alpha"), ("target.txt", "target")]);
    symlink(fx.data.join("target.txt"), fx.data.join("link.txt")).unwrap();

    let service = IntegrityService::default();
    let created = service.create_baseline(&fx.data, &fx.baseline).unwrap();
    assert_eq!(created.baseline.len(), 3);
    let link_record = created.baseline.get(&fx.key("link.txt")).unwrap().clone();

    fx.remove("target.txt");
    fx.write("new.txt", "fresh");

    let outcome = service.verify_integrity(&fx.data, &fx.baseline).unwrap();
    let report = &outcome.report;

    assert_eq!(report.paths(ChangeKind::Error), vec![fx.key("link.txt").as_str()]);
    assert_eq!(report.paths(ChangeKind::Deleted), vec![fx.key("target.txt").as_str()]);
    assert_eq!(report.paths(ChangeKind::New), vec![fx.key("new.txt").as_str()]);
    assert_eq!(report.unchanged, 1);

    let stored = load_baseline(&fx.baseline).unwrap();
    assert_eq!(stored.get(&fx.key("link.txt")), Some(&link_record));
    assert!(stored.contains(&fx.key("a.txt")));
}

#[test]
fn test_create_lists_unhashable_paths() {
    let fx = Fixture::with_files(&[("a.txt", "alpha")]);
    symlink(fx.data.join("missing"), fx.data.join("dangling")).unwrap();

    let created = IntegrityService::default()
        .create_baseline(&fx.data, &fx.baseline)
        .unwrap();

    assert_eq!(created.baseline.len(), 1);
    assert_eq!(created.failures.len(), 1);
    assert_eq!(
        created.failures[0].path.as_deref(),
        Some(fx.key("dangling").as_str())
    );
}

#[test]
fn test_unreadable_directory_keeps_records_beneath_it() {
    let fx = Fixture::with_files(&[("a.txt", "alpha"), ("sub/x.txt", "x"), ("sub/y.txt", "y")]);
    let service = IntegrityService::default();
    let created = service.create_baseline(&fx.data, &fx.baseline).unwrap();
    assert_eq!(created.baseline.len(), 3);

    let sub = fx.data.join("sub");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&sub).is_ok() {
        // Running as root: permissions are not enforced.
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let outcome = service.verify_integrity(&fx.data, &fx.baseline);
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
    let report = outcome.unwrap().report;

    assert_eq!(report.paths(ChangeKind::Error), vec![fx.key("sub").as_str()]);
    assert_eq!(report.count(ChangeKind::Deleted), 0);
    assert_eq!(report.unchanged, 1);

    let stored = load_baseline(&fx.baseline).unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(
        stored.get(&fx.key("sub/x.txt")),
        created.baseline.get(&fx.key("sub/x.txt"))
    );
}
