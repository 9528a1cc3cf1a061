//! Library-level pipeline tests with injected extractors.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use doc_chunker::chunk::ChunkSet;
use doc_chunker::config::Config;
use doc_chunker::error::PipelineError;
use doc_chunker::extract::{ExtractError, StaticText, TextExtractor};
use doc_chunker::persist::PersistError;
use doc_chunker::pipeline::{run, RunOptions};

/// Counts calls and always fails, to prove when extraction is skipped.
struct FailingExtractor {
    calls: Cell<usize>,
}

impl FailingExtractor {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl TextExtractor for FailingExtractor {
    fn extract_text(&self, source: &Path) -> Result<String, ExtractError> {
        self.calls.set(self.calls.get() + 1);
        Err(ExtractError::Read {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        })
    }
}

fn config_in(dir: &Path) -> Config {
    let mut cfg = Config::default();
    cfg.input.path = PathBuf::from("case-file.docx");
    cfg.output.path = dir.join("chunks.json");
    cfg
}

fn read_set(path: &Path) -> ChunkSet {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn run_chunks_and_persists() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());
    let text: String = (0..3000).map(|i| if i % 2 == 0 { 'a' } else { 'b' }).collect();

    let outcome = run(&cfg, &StaticText(text.clone()), RunOptions::default()).unwrap();
    assert_eq!(outcome.characters, 3000);
    assert_eq!(outcome.chunk_set.total(), 3);
    assert_eq!(outcome.destination.as_deref(), Some(cfg.output.path.as_path()));

    let on_disk = read_set(&cfg.output.path);
    assert_eq!(on_disk, outcome.chunk_set);
    assert_eq!(on_disk.chunks()[0], text[0..1500]);
    assert_eq!(on_disk.chunks()[1], text[1300..2800]);
    assert_eq!(on_disk.chunks()[2], text[2600..3000]);
}

#[test]
fn run_with_exact_chunk_size_text() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());
    let text = "z".repeat(1500);

    let outcome = run(&cfg, &StaticText(text.clone()), RunOptions::default()).unwrap();
    assert_eq!(outcome.chunk_set.total(), 1);
    assert_eq!(outcome.chunk_set.chunks()[0], text);
}

#[test]
fn empty_document_persists_zero_chunks() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());

    let outcome = run(&cfg, &StaticText(String::new()), RunOptions::default()).unwrap();
    assert_eq!(outcome.chunk_set.total(), 0);

    let raw = std::fs::read_to_string(&cfg.output.path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "chunks": [], "total": 0 }));
}

#[test]
fn invalid_chunking_is_rejected_before_extraction() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = config_in(tmp.path());
    cfg.chunking.chunk_size = 100;
    cfg.chunking.overlap = 150;
    let extractor = FailingExtractor::new();

    let err = run(&cfg, &extractor, RunOptions::default()).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidConfiguration(_)));
    assert_eq!(extractor.calls.get(), 0);
    assert!(!cfg.output.path.exists());
}

#[test]
fn extraction_failure_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());
    let extractor = FailingExtractor::new();

    let err = run(&cfg, &extractor, RunOptions::default()).unwrap_err();
    match err {
        PipelineError::Extraction { path, .. } => assert_eq!(path, cfg.input.path),
        other => panic!("expected extraction failure, got {:?}", other),
    }
    assert_eq!(extractor.calls.get(), 1);
    assert!(!cfg.output.path.exists());
}

#[test]
fn missing_output_directory_is_io_failure() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = config_in(tmp.path());
    cfg.output.path = tmp.path().join("missing").join("chunks.json");

    let err = run(&cfg, &StaticText("content".into()), RunOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Io(PersistError::MissingDirectory(_))
    ));
}

#[test]
fn dry_run_skips_persist() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());

    let outcome = run(
        &cfg,
        &StaticText("Thought for the day".into()),
        RunOptions { dry_run: true },
    )
    .unwrap();
    assert_eq!(outcome.destination, None);
    assert_eq!(outcome.chunk_set.total(), 1);
    assert!(!cfg.output.path.exists());
}

#[test]
fn runs_are_deterministic() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());
    let text = "Innocence proves nothing. ".repeat(300);

    let first = run(&cfg, &StaticText(text.clone()), RunOptions::default()).unwrap();
    let first_bytes = std::fs::read(&cfg.output.path).unwrap();
    let second = run(&cfg, &StaticText(text), RunOptions::default()).unwrap();
    let second_bytes = std::fs::read(&cfg.output.path).unwrap();

    assert_eq!(first.chunk_set, second.chunk_set);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn extractor_can_be_a_trait_object() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path());
    let extractor: Box<dyn TextExtractor> = Box::new(StaticText("boxed".into()));

    let outcome = run(&cfg, extractor.as_ref(), RunOptions::default()).unwrap();
    assert_eq!(outcome.chunk_set.chunks(), &["boxed"]);
}
