//! CLI command for single-payload decompression

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::bundle::{is_compressed_payload, output_name_for_payload};
use crate::cli::progress::print_item;
use crate::extraction::{ExtractionPipeline, NullSink};

pub fn execute(source: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .context("source has no usable filename")?;

    let dest: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => {
            if !is_compressed_payload(file_name) {
                bail!("{file_name} does not end in .compressed; pass --output explicitly");
            }
            source.with_file_name(output_name_for_payload(file_name))
        }
    };

    let pipeline = ExtractionPipeline::new();
    match pipeline.extract_single(source, &dest, &NullSink) {
        Ok(bytes) => {
            print_item(true, &format!("{} ({bytes} bytes)", dest.display()));
            Ok(())
        }
        Err(e) => {
            print_item(false, &format!("{file_name}: {e}"));
            Err(e.into())
        }
    }
}
