//! Integration tests for error handling and edge cases.

use pdf_title_rename::cli::Cli;
use pdf_title_rename::config::Config;
use pdf_title_rename::error::RenameError;
use pdf_title_rename::rename::FileOutcome;
use pdf_title_rename::{BatchRenamer, RunSummary};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use crate::common::{Fixture, config_for, create_pdf, file_names};

#[test]
fn test_nonexistent_input_counts_as_error() {
    let dir = tempdir().unwrap();
    let good = create_pdf(
        dir.path(),
        "good.pdf",
        Fixture {
            title: Some("Good"),
            ..Fixture::default()
        },
    );

    let summary = BatchRenamer::new(config_for(vec![
        PathBuf::from("/nonexistent/file.pdf"),
        good,
    ]))
    .run()
    .unwrap();

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.renamed, 1, "Batch should continue after a read error");
}

#[test]
fn test_nonexistent_input_outcome() {
    let outcome = BatchRenamer::new(config_for(vec![]))
        .process_file(&PathBuf::from("/nonexistent/file.pdf"))
        .unwrap();

    assert!(matches!(
        outcome,
        FileOutcome::ReadFailed {
            error: RenameError::FileNotFound { .. }
        }
    ));
}

#[test]
fn test_no_metadata_is_missing() {
    let dir = tempdir().unwrap();
    let blank = create_pdf(dir.path(), "blank.pdf", Fixture::default());

    let summary = BatchRenamer::new(config_for(vec![blank.clone()]))
        .run()
        .unwrap();

    assert_eq!(
        summary,
        RunSummary {
            total: 1,
            missing: 1,
            ..RunSummary::default()
        }
    );
    assert!(blank.exists());
}

#[test]
fn test_not_a_pdf_is_missing() {
    let dir = tempdir().unwrap();
    let garbage = dir.path().join("garbage.pdf");
    fs::write(&garbage, b"this is not a pdf").unwrap();

    let summary = BatchRenamer::new(config_for(vec![garbage.clone()]))
        .run()
        .unwrap();

    assert_eq!(summary.missing, 1);
    assert_eq!(summary.errors, 0);
    assert!(garbage.exists());
}

#[test]
fn test_malformed_xmp_falls_back_to_info() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "paper.pdf",
        Fixture {
            title: Some("Info Title"),
            author: Some("Info Author"),
            xmp: Some("<x:xmpmeta><rdf:RDF><rdf:Description>".to_string()),
        },
    );

    BatchRenamer::new(config_for(vec![source])).run().unwrap();

    assert_eq!(file_names(dir.path()), vec!["Info Author - Info Title.pdf"]);
}

#[test]
fn test_title_without_usable_characters_is_missing() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "odd.pdf",
        Fixture {
            title: Some("???///"),
            ..Fixture::default()
        },
    );

    let summary = BatchRenamer::new(config_for(vec![source.clone()]))
        .run()
        .unwrap();

    assert_eq!(summary.missing, 1);
    assert!(source.exists());
}

#[test]
fn test_rename_failure_counts_as_error() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "paper.pdf",
        Fixture {
            title: Some("Paper"),
            ..Fixture::default()
        },
    );
    // A directory with the target name cannot be replaced by a file.
    fs::create_dir(dir.path().join("Paper.pdf")).unwrap();
    fs::write(dir.path().join("Paper.pdf").join("keep"), b"x").unwrap();

    let summary = BatchRenamer::new(config_for(vec![source.clone()]))
        .run()
        .unwrap();

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.renamed, 0);
    assert!(source.exists());
}

#[test]
fn test_glob_pattern_inputs() {
    let dir = tempdir().unwrap();
    create_pdf(
        dir.path(),
        "a.pdf",
        Fixture {
            title: Some("Alpha"),
            ..Fixture::default()
        },
    );
    create_pdf(
        dir.path(),
        "b.pdf",
        Fixture {
            title: Some("Beta"),
            ..Fixture::default()
        },
    );
    fs::write(dir.path().join("notes.txt"), b"not matched").unwrap();

    let cli = Cli {
        files: vec![dir.path().join("*.pdf")],
        dry_run: false,
        interactive: false,
        destination: None,
        verbose: false,
    };
    let config = Config::try_from(&cli).unwrap();
    assert_eq!(config.inputs.len(), 2);

    let summary = BatchRenamer::new(config).run().unwrap();
    assert_eq!(summary.renamed, 2);
    assert_eq!(
        file_names(dir.path()),
        vec!["Alpha.pdf", "Beta.pdf", "notes.txt"]
    );
}

#[test]
fn test_error_empty_input_list() {
    let result = config_for(vec![]).validate();
    assert!(result.is_err(), "Should fail with empty input list");
    assert!(matches!(result, Err(RenameError::InvalidConfig { .. })));
}

#[test]
fn test_invalid_pattern_does_not_stop_batch() {
    let dir = tempdir().unwrap();
    let good = create_pdf(
        dir.path(),
        "good.pdf",
        Fixture {
            title: Some("Good"),
            ..Fixture::default()
        },
    );

    let cli = Cli {
        files: vec![dir.path().join("gone[.pdf"), good.clone()],
        dry_run: false,
        interactive: false,
        destination: None,
        verbose: false,
    };
    let summary = pdf_title_rename::run(&cli).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.renamed, 1);
    assert!(!good.exists());
    assert_eq!(file_names(dir.path()), vec!["Good.pdf"]);
}
