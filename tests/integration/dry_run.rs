//! Integration tests for dry-run functionality.

use pdf_title_rename::BatchRenamer;
use pdf_title_rename::config::Destination;
use tempfile::tempdir;

use crate::common::{Fixture, config_for, create_pdf, file_names};

#[test]
fn test_dry_run_does_not_rename() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "scan.pdf",
        Fixture {
            title: Some("My Paper"),
            author: Some("A. Writer"),
            xmp: None,
        },
    );

    let mut config = config_for(vec![source.clone()]);
    config.dry_run = true;
    let summary = BatchRenamer::new(config).run().unwrap();

    assert!(source.exists(), "Source must stay in place in dry run");
    assert_eq!(file_names(dir.path()), vec!["scan.pdf"]);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.errors, 0);
}

#[test]
fn test_dry_run_reports_plan() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "scan.pdf",
        Fixture {
            title: Some("My Paper"),
            ..Fixture::default()
        },
    );

    let mut config = config_for(vec![]);
    config.dry_run = true;
    let outcome = BatchRenamer::new(config).process_file(&source).unwrap();

    let plan = outcome.plan().expect("dry run should compute a plan");
    assert_eq!(plan.source, source);
    assert_eq!(plan.target, dir.path().join("My Paper.pdf"));
    assert!(!plan.target.exists());
}

#[test]
fn test_dry_run_does_not_file() {
    let dir = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "scan.pdf",
        Fixture {
            title: Some("Paper"),
            ..Fixture::default()
        },
    );

    let mut config = config_for(vec![source.clone()]);
    config.dry_run = true;
    config.destination = Destination::Directory(dest.path().to_path_buf());
    let summary = BatchRenamer::new(config).run().unwrap();

    assert!(source.exists());
    assert!(file_names(dest.path()).is_empty());
    assert_eq!(summary.filed, 0);
}

#[test]
fn test_dry_run_still_counts_missing() {
    let dir = tempdir().unwrap();
    let blank = create_pdf(dir.path(), "blank.pdf", Fixture::default());

    let mut config = config_for(vec![blank]);
    config.dry_run = true;
    let summary = BatchRenamer::new(config).run().unwrap();

    assert_eq!(summary.missing, 1);
}
