//! Integration tests for interactive mode.

use pdf_title_rename::BatchRenamer;
use pdf_title_rename::error::RenameError;
use pdf_title_rename::interactive::{FileOpener, InteractiveResolver};
use std::io::{self, Cursor};
use std::path::Path;
use tempfile::tempdir;

use crate::common::{Fixture, config_for, create_pdf, file_names};

struct NoViewer;

impl FileOpener for NoViewer {
    fn open(&mut self, _path: &Path) -> io::Result<()> {
        Err(io::Error::other("no viewer in tests"))
    }
}

fn scripted(answers: &str) -> Box<InteractiveResolver<Cursor<Vec<u8>>, io::Sink, NoViewer>> {
    Box::new(InteractiveResolver::new(
        Cursor::new(answers.as_bytes().to_vec()),
        io::sink(),
        NoViewer,
    ))
}

#[test]
fn test_keep_uses_found_metadata() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "scan.pdf",
        Fixture {
            title: Some("Paper"),
            author: Some("Doe"),
            xmp: None,
        },
    );

    let mut config = config_for(vec![source]);
    config.interactive = true;
    BatchRenamer::new(config)
        .with_resolver(scripted("k\n"))
        .run()
        .unwrap();

    assert_eq!(file_names(dir.path()), vec!["Doe - Paper.pdf"]);
}

#[test]
fn test_edits_replace_metadata() {
    let dir = tempdir().unwrap();
    let source = create_pdf(dir.path(), "scan.pdf", Fixture::default());

    let mut config = config_for(vec![source]);
    config.interactive = true;
    let summary = BatchRenamer::new(config)
        .with_resolver(scripted("x\no\nt\nTyped Title\na\nTyped Author\nk\n"))
        .run()
        .unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(file_names(dir.path()), vec!["Typed Author - Typed Title.pdf"]);
}

#[test]
fn test_cleared_title_falls_back_to_stem() {
    let dir = tempdir().unwrap();
    let source = create_pdf(
        dir.path(),
        "report.pdf",
        Fixture {
            title: Some("Paper"),
            author: Some("Doe"),
            xmp: None,
        },
    );

    let mut config = config_for(vec![source]);
    config.interactive = true;
    BatchRenamer::new(config)
        .with_resolver(scripted("t\n\nk\n"))
        .run()
        .unwrap();

    assert_eq!(file_names(dir.path()), vec!["Doe - report.pdf"]);
}

#[test]
fn test_end_of_input_stops_batch() {
    let dir = tempdir().unwrap();
    let first = create_pdf(
        dir.path(),
        "first.pdf",
        Fixture {
            title: Some("One"),
            ..Fixture::default()
        },
    );
    let second = create_pdf(
        dir.path(),
        "second.pdf",
        Fixture {
            title: Some("Two"),
            ..Fixture::default()
        },
    );

    let mut config = config_for(vec![first, second]);
    config.interactive = true;
    let result = BatchRenamer::new(config)
        .with_resolver(scripted("k\n"))
        .run();

    let err = result.unwrap_err();
    assert!(matches!(err, RenameError::InputClosed));
    assert_eq!(err.exit_code(), 130);
    assert_eq!(file_names(dir.path()), vec!["One.pdf", "second.pdf"]);
}
