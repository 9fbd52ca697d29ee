use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use decostura::prelude::*;

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder =
        flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Test opener: serves preconfigured in-memory containers for `.exe`/`.dll`
/// paths, the way a real assembly-metadata reader would.
struct FixtureOpener {
    containers: Vec<(PathBuf, MemoryContainer)>,
}

impl ContainerOpener for FixtureOpener {
    fn supports(&self, path: &Path) -> bool {
        self.containers.iter().any(|(p, _)| p == path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn ResourceContainer>> {
        let (_, container) = self
            .containers
            .iter()
            .find(|(p, _)| p == path)
            .ok_or_else(|| Error::UnsupportedInput {
                path: path.to_path_buf(),
            })?;
        Ok(Box::new(container.clone()))
    }
}

/// Sink collecting log lines for assertions.
#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<String>>,
    fractions: Mutex<Vec<f32>>,
}

impl ProgressSink for RecordingSink {
    fn report(&self, _status: &str, fraction: f32) {
        self.fractions.lock().unwrap().push(fraction);
    }

    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[test]
fn test_single_item_mode() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mylib.dll.compressed");
    std::fs::write(&input, deflate(b"payload bytes")).unwrap();

    let dest = dir.path().join("out/mylib.dll");
    let pipeline = ExtractionPipeline::new();
    let written = pipeline.extract_single(&input, &dest, &NullSink).unwrap();

    assert_eq!(written, 13);
    assert_eq!(std::fs::read(&dest).unwrap(), b"payload bytes");
}

#[test]
fn test_batch_standalone_payloads() {
    let dir = tempdir().unwrap();
    for (name, content) in [("a.dll.compressed", "aaa"), ("b.dll.compressed", "bbb")] {
        std::fs::write(dir.path().join(name), deflate(content.as_bytes())).unwrap();
    }

    let out = dir.path().join("out");
    let job = ExtractionJob::new(vec![
        dir.path().join("a.dll.compressed"),
        dir.path().join("b.dll.compressed"),
    ])
    .with_output_dir(&out);

    let report = ExtractionPipeline::new().run(&job, &NullSink).unwrap();

    assert_eq!(report.status, JobStatus::Completed);
    assert_eq!(report.success_count, 2);
    assert_eq!(report.files_written, 2);
    assert_eq!(std::fs::read(out.join("a.dll")).unwrap(), b"aaa");
    assert_eq!(std::fs::read(out.join("b.dll")).unwrap(), b"bbb");
}

#[test]
fn test_container_extraction_example() {
    // End-to-end: "costura.mylib.dll.compressed" holding raw-deflate
    // "hello" yields file mylib.dll with 5 bytes.
    let dir = tempdir().unwrap();
    let host = dir.path().join("MyApp.exe");
    std::fs::write(&host, b"not actually parsed").unwrap();

    let container = MemoryContainer::new(vec![
        RawResource::embedded("costura.mylib.dll.compressed", deflate(b"hello")),
        RawResource::embedded("MyApp.g.resources", b"unrelated".to_vec()),
    ]);
    let opener = FixtureOpener {
        containers: vec![(host.clone(), container)],
    };

    let out = dir.path().join("out");
    let job = ExtractionJob::new(vec![host]).with_output_dir(&out);
    let report = ExtractionPipeline::with_opener(Box::new(opener))
        .run(&job, &NullSink)
        .unwrap();

    assert_eq!(report.success_count, 1);
    assert_eq!(report.files_written, 1);
    let extracted = std::fs::read(out.join("mylib.dll")).unwrap();
    assert_eq!(extracted, b"hello");
    assert_eq!(extracted.len(), 5);
}

#[test]
fn test_no_bundle_found_reported_once() {
    let dir = tempdir().unwrap();
    let host = dir.path().join("Plain.exe");
    std::fs::write(&host, b"").unwrap();

    let container = MemoryContainer::new(vec![RawResource::embedded(
        "Plain.Resources.strings",
        b"data".to_vec(),
    )]);
    let opener = FixtureOpener {
        containers: vec![(host.clone(), container)],
    };

    let out = dir.path().join("out");
    let sink = RecordingSink::default();
    let job = ExtractionJob::new(vec![host]).with_output_dir(&out);
    let report = ExtractionPipeline::with_opener(Box::new(opener))
        .run(&job, &sink)
        .unwrap();

    assert_eq!(report.fail_count, 1);
    assert!(matches!(
        report.outcomes[0].status,
        ItemStatus::Failed { ref error } if error.contains("no Costura resources")
    ));
    // No output files were created
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    // Exactly one log line for the item (plus the terminal summary)
    let lines = sink.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("no Costura resources"));
}

#[test]
fn test_per_item_failure_isolation() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("good1.compressed"), deflate(b"one")).unwrap();
    std::fs::write(dir.path().join("bad.compressed"), b"\xff\xff not deflate").unwrap();
    std::fs::write(dir.path().join("good2.compressed"), deflate(b"two")).unwrap();

    let out = dir.path().join("out");
    let sink = RecordingSink::default();
    let job = ExtractionJob::new(vec![
        dir.path().join("good1.compressed"),
        dir.path().join("bad.compressed"),
        dir.path().join("good2.compressed"),
    ])
    .with_output_dir(&out);

    let report = ExtractionPipeline::new().run(&job, &sink).unwrap();

    assert_eq!(report.status, JobStatus::Completed);
    assert_eq!(report.success_count, 2);
    assert_eq!(report.fail_count, 1);
    assert!(report.outcomes[1].source.ends_with("bad.compressed"));
    assert!(out.join("good1").exists());
    assert!(out.join("good2").exists());

    // Progress reached 100% despite the failure
    let fractions = sink.fractions.lock().unwrap();
    assert_eq!(fractions.last().copied(), Some(1.0));
}

#[test]
fn test_unsupported_inputs_skipped() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
    std::fs::write(dir.path().join("good.compressed"), deflate(b"ok")).unwrap();

    let out = dir.path().join("out");
    let job = ExtractionJob::new(vec![
        dir.path().join("notes.txt"),
        dir.path().join("good.compressed"),
    ])
    .with_output_dir(&out);

    let report = ExtractionPipeline::new().run(&job, &NullSink).unwrap();

    assert_eq!(report.skip_count, 1);
    assert_eq!(report.success_count, 1);
    assert!(matches!(report.outcomes[0].status, ItemStatus::Unsupported));
}

/// Sink that cancels the job after the first successful item.
struct CancelAfterFirst {
    token: CancelToken,
    extracted: AtomicUsize,
}

impl ProgressSink for CancelAfterFirst {
    fn report(&self, _status: &str, _fraction: f32) {}

    fn log(&self, line: &str) {
        if line.starts_with("Extracted:") && self.extracted.fetch_add(1, Ordering::SeqCst) == 0 {
            self.token.cancel();
        }
    }
}

#[test]
fn test_cancellation_between_items() {
    let dir = tempdir().unwrap();
    for name in ["a.compressed", "b.compressed", "c.compressed"] {
        std::fs::write(dir.path().join(name), deflate(b"x")).unwrap();
    }

    let token = CancelToken::new();
    let sink = CancelAfterFirst {
        token: token.clone(),
        extracted: AtomicUsize::new(0),
    };

    let out = dir.path().join("out");
    let job = ExtractionJob::new(vec![
        dir.path().join("a.compressed"),
        dir.path().join("b.compressed"),
        dir.path().join("c.compressed"),
    ])
    .with_output_dir(&out)
    .with_cancel_token(token);

    let report = ExtractionPipeline::new().run(&job, &sink).unwrap();

    assert_eq!(report.status, JobStatus::Cancelled);
    assert_eq!(report.success_count, 1);
    assert_eq!(report.outcomes.len(), 1);
    // Exactly one file written; later items absent, no rollback of the first
    assert!(out.join("a").exists());
    assert!(!out.join("b").exists());
    assert!(!out.join("c").exists());
}

#[test]
fn test_default_output_dir_derived_and_created() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("MyApp.dll.compressed");
    std::fs::write(&input, deflate(b"bytes")).unwrap();

    let job = ExtractionJob::new(vec![input]);
    let report = ExtractionPipeline::new().run(&job, &NullSink).unwrap();

    // Stem of "MyApp.dll.compressed" is "MyApp.dll"
    let expected = dir.path().join("MyApp.dll-decompressed");
    assert_eq!(report.output_dir, expected);
    assert!(expected.join("MyApp.dll").exists());
}

#[test]
fn test_rerun_overwrites_without_warning() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("lib.dll.compressed");
    let out = dir.path().join("out");

    std::fs::write(&input, deflate(b"first")).unwrap();
    let job = ExtractionJob::new(vec![input.clone()]).with_output_dir(&out);
    ExtractionPipeline::new().run(&job, &NullSink).unwrap();
    assert_eq!(std::fs::read(out.join("lib.dll")).unwrap(), b"first");

    std::fs::write(&input, deflate(b"second")).unwrap();
    let job = ExtractionJob::new(vec![input]).with_output_dir(&out);
    let report = ExtractionPipeline::new().run(&job, &NullSink).unwrap();
    assert_eq!(report.success_count, 1);
    assert_eq!(std::fs::read(out.join("lib.dll")).unwrap(), b"second");
}
