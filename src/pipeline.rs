//! Per-file orchestration and the parallel batch driver.
//!
//! [`generate_file`] runs one source file through the whole pipeline,
//! strictly sequentially: resolve orientation → decode → upright transform →
//! resize matrix → encode per-family codecs → render markup. Any failure
//! stops that file at that stage; markup is only rendered once every
//! artifact has been written, so a partially processed file never appears in
//! output.
//!
//! [`run`] fans the orchestrator out over all input files on the rayon pool
//! and serializes the "print this file's fragment" step through a single
//! `stdout().lock()` region — nothing else is shared between workers besides
//! the read-only config and backend.

use crate::artifact::{
    self, ArtifactGroup, ArtifactIndex, OutputArtifact, SourceFamily, UnsupportedFamily,
};
use crate::config::RunConfig;
use crate::imaging::calculations::scaled_height;
use crate::imaging::{BackendError, ImageBackend};
use crate::markup;
use crate::orientation::{self, OrientationError};
use crate::output;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("could not resolve orientation: {0}")]
    Orientation(#[from] OrientationError),
    #[error(transparent)]
    Family(#[from] UnsupportedFamily),
    #[error("image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("could not create output directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),
}

/// Result of one successfully processed file.
#[derive(Debug)]
pub struct FileReport {
    /// Rendered `<picture>` fragment.
    pub fragment: String,
    /// Number of artifact files written.
    pub artifacts: usize,
}

/// Run the full pipeline for one source file.
pub fn generate_file(
    backend: &impl ImageBackend,
    config: &RunConfig,
    source: &Path,
) -> Result<FileReport, PipelineError> {
    let family = SourceFamily::from_path(source)?;
    let orientation = orientation::resolve_orientation(source)?;
    let decoded = backend.decode(source)?;
    let upright = orientation.apply(decoded);
    let source_dims = (upright.width(), upright.height());

    let dir = artifact::output_dir(source);
    std::fs::create_dir_all(&dir).map_err(|e| PipelineError::CreateDir(dir.clone(), e))?;

    let mut index = ArtifactIndex::new();
    for &width in &config.widths {
        // Resize each density once; the buffers are shared by every codec.
        let mut resized = Vec::with_capacity(config.density as usize);
        for density in 1..=config.density {
            let spec = artifact::VariantSpec { width, density };
            let target_width = spec.pixel_width();
            let target_height = scaled_height(source_dims, target_width);
            resized.push((spec, backend.resize(&upright, target_width, target_height)));
        }

        for &codec in family.codecs() {
            let mut artifacts = Vec::with_capacity(resized.len());
            for (spec, img) in &resized {
                let out = artifact::artifact_path(source, *spec, codec);
                backend.encode(img, codec, config.quality, &out)?;
                artifacts.push(OutputArtifact {
                    codec,
                    spec: *spec,
                    url_path: artifact::url_path(&config.prefix, source, *spec, codec),
                });
            }
            index.push(ArtifactGroup {
                codec,
                width,
                artifacts,
            });
        }
    }

    Ok(FileReport {
        artifacts: index.artifact_count(),
        fragment: markup::render_picture(&index).into_string(),
    })
}

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Process every input file in parallel, printing each fragment to stdout
/// and each failure to stderr. Per-file failures never abort the batch.
pub fn run(backend: &impl ImageBackend, config: &RunConfig, files: &[PathBuf]) -> BatchSummary {
    let outcomes: Vec<bool> = files
        .par_iter()
        .map(|file| match generate_file(backend, config, file) {
            Ok(report) => {
                // One lock region per file keeps fragments un-interleaved.
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let _ = writeln!(out, "{}", output::format_fragment_header(file));
                let _ = writeln!(out, "{}", report.fragment);
                true
            }
            Err(err) => {
                eprintln!("{}", output::format_file_error(file, &err));
                false
            }
        })
        .collect();

    let succeeded = outcomes.iter().filter(|&&ok| ok).count();
    BatchSummary {
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}
