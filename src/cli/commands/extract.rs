//! CLI command for batch extraction

use std::path::{Path, PathBuf};

use anyhow::bail;
use indicatif::ProgressBar;

use crate::cli::progress::simple_bar;
use crate::extraction::{
    ExtractionJob, ExtractionPipeline, NullSink, ProgressSink, find_extractable_files,
};

/// Sink that drives an indicatif bar from pipeline updates.
struct BarSink {
    bar: ProgressBar,
    total: u64,
}

impl ProgressSink for BarSink {
    fn report(&self, status: &str, fraction: f32) {
        self.bar
            .set_position((fraction * self.total as f32).round() as u64);
        self.bar.set_message(status.to_string());
    }

    fn log(&self, line: &str) {
        self.bar.println(line);
    }
}

/// Sink that prints log lines only (quiet mode).
struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn report(&self, _status: &str, _fraction: f32) {}

    fn log(&self, line: &str) {
        println!("{line}");
    }
}

pub fn execute(
    inputs: &[PathBuf],
    output: Option<&Path>,
    quiet: bool,
    json: bool,
) -> anyhow::Result<()> {
    // Expand directory inputs into extractable files, keep file inputs as-is
    let mut expanded: Vec<PathBuf> = Vec::new();
    for input in inputs {
        if input.is_dir() {
            expanded.extend(find_extractable_files(input));
        } else {
            expanded.push(input.clone());
        }
    }

    if expanded.is_empty() {
        bail!("no extractable inputs found");
    }

    let mut job = ExtractionJob::new(expanded);
    if let Some(dir) = output {
        job = job.with_output_dir(dir);
    }

    let pipeline = ExtractionPipeline::new();

    let report = if json {
        // Keep stdout clean for the JSON report
        pipeline.run(&job, &NullSink)?
    } else if quiet {
        pipeline.run(&job, &ConsoleSink)?
    } else {
        let total = job.inputs.len() as u64;
        let sink = BarSink {
            bar: simple_bar(total, "Extracting"),
            total,
        };
        let report = pipeline.run(&job, &sink)?;
        sink.bar.finish_and_clear();
        report
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
