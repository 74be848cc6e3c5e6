//! Command routing through RunContext.

use super::test_utils::Fixture;
use fixity::cli::{Commands, RunContext, EXIT_CHANGES_DETECTED};
use fixity::config::FixityConfig;
use fixity::error::IntegrityError;

fn verify(fx: &Fixture, format: &str, dry_run: bool, fail_on_change: bool) -> Commands {
    Commands::Verify {
        directory: fx.data.clone(),
        baseline: Some(fx.baseline.clone()),
        algorithm: None,
        format: format.to_string(),
        dry_run,
        fail_on_change,
    }
}

#[test]
fn test_create_verify_text_report() {
    let fx = Fixture::with_files(&[("a", "alpha"), ("b", "bravo")]);
    let ctx = RunContext::from_config(FixityConfig::default());

    let created = ctx
        .execute(&Commands::Create {
            directory: fx.data.clone(),
            baseline: Some(fx.baseline.clone()),
            algorithm: None,
        })
        .unwrap();
    assert!(created.text.contains("(2 files)"));

    fx.remove("b");
    let output = ctx.execute(&verify(&fx, "text", false, true)).unwrap();
    assert_eq!(output.exit_code, EXIT_CHANGES_DETECTED);
    assert!(output
        .text
        .contains(&format!("[DELETED]   {}", fx.key("b"))));

    let output = ctx.execute(&verify(&fx, "text", false, true)).unwrap();
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.text, "No changes detected (1 files checked).");
}

#[test]
fn test_verify_json_report() {
    let fx = Fixture::with_files(&[("a", "alpha")]);
    let ctx = RunContext::from_config(FixityConfig::default());
    ctx.execute(&Commands::Create {
        directory: fx.data.clone(),
        baseline: Some(fx.baseline.clone()),
        algorithm: Some("blake3".to_string()),
    })
    .unwrap();
    fx.write("a", "changed");

    let output = ctx
        .execute(&Commands::Verify {
            directory: fx.data.clone(),
            baseline: Some(fx.baseline.clone()),
            algorithm: Some("blake3".to_string()),
            format: "json".to_string(),
            dry_run: true,
            fail_on_change: false,
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();

    assert_eq!(value["algorithm"], "blake3");
    assert_eq!(value["changes"][0]["status"], "modified");
    assert_eq!(value["changes"][0]["path"], fx.key("a"));
    assert_eq!(value["summary"]["modified"], 1);
}

#[test]
fn test_configured_baseline_path_is_used() {
    let fx = Fixture::with_files(&[("a", "alpha")]);
    let mut config = FixityConfig::default();
    config.baseline.path = fx.temp_dir.path().join("configured.json");
    let ctx = RunContext::from_config(config);

    ctx.execute(&Commands::Create {
        directory: fx.data.clone(),
        baseline: None,
        algorithm: None,
    })
    .unwrap();

    assert!(fx.temp_dir.path().join("configured.json").exists());
    assert!(!fx.baseline.exists());
}

#[test]
fn test_verify_error_categories() {
    let fx = Fixture::with_files(&[("a", "alpha")]);
    let ctx = RunContext::from_config(FixityConfig::default());

    let missing = ctx.execute(&verify(&fx, "text", false, false)).unwrap_err();
    assert!(matches!(missing, IntegrityError::BaselineMissing(_)));
    assert_eq!(missing.exit_code(), 3);

    ctx.execute(&Commands::Create {
        directory: fx.data.clone(),
        baseline: Some(fx.baseline.clone()),
        algorithm: None,
    })
    .unwrap();

    let bad_dir = ctx
        .execute(&Commands::Verify {
            directory: fx.temp_dir.path().join("nope"),
            baseline: Some(fx.baseline.clone()),
            algorithm: None,
            format: "text".to_string(),
            dry_run: false,
            fail_on_change: false,
        })
        .unwrap_err();
    assert!(matches!(bad_dir, IntegrityError::InvalidDirectory(_)));
    assert_eq!(bad_dir.exit_code(), 2);
}

#[test]
fn test_list_renders_records() {
    let fx = Fixture::with_files(&[("a", "alpha")]);
    let ctx = RunContext::from_config(FixityConfig::default());
    ctx.execute(&Commands::Create {
        directory: fx.data.clone(),
        baseline: Some(fx.baseline.clone()),
        algorithm: None,
    })
    .unwrap();

    let table = ctx
        .execute(&Commands::List {
            baseline: Some(fx.baseline.clone()),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(table.text.contains(&fx.key("a")));

    let json = ctx
        .execute(&Commands::List {
            baseline: Some(fx.baseline.clone()),
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json.text).unwrap();
    assert!(value[fx.key("a")]["new_hash"].is_string());
}

#[test]
fn test_list_rejects_hand_edited_non_hex_digest() {
    let fx = Fixture::with_files(&[]);
    std::fs::write(&fx.baseline, "{\"/r/a\": \"aaaaaaaaaaaaaaa\u{e9}zz\"}").unwrap();
    let ctx = RunContext::from_config(FixityConfig::default());

    let err = ctx
        .execute(&Commands::List {
            baseline: Some(fx.baseline.clone()),
            format: "text".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, IntegrityError::BaselineParse { .. }));
    assert_eq!(err.exit_code(), 4);
}
