//! Many images at once: one independent render per input on a rayon pool.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    foundation::{
        error::{ToonError, ToonResult},
        math::derive_seed,
    },
    pipeline::Pipeline,
};

/// Outcome of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// `<out_dir>/<stem>_animated.gif`.
pub fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    out_dir.join(format!("{stem}_animated.gif"))
}

/// Render every input into `out_dir`. A failed item is logged and reported; the rest
/// still run.
#[tracing::instrument(skip(pipeline, inputs), fields(items = inputs.len()))]
pub fn process_batch(
    pipeline: &Pipeline,
    inputs: &[PathBuf],
    out_dir: &Path,
) -> ToonResult<BatchReport> {
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;
    }
    let pool = build_thread_pool(pipeline.config().threads)?;
    let base = pipeline.base_seed();

    let results: Vec<ToonResult<PathBuf>> = pool.install(|| {
        inputs
            .par_iter()
            .enumerate()
            .map(|(idx, input)| {
                let output = output_path_for(input, out_dir);
                pipeline.process_seeded(input, &output, derive_seed(base, idx as u64))
            })
            .collect()
    });

    let mut report = BatchReport::default();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(path) => report.written.push(path),
            Err(err) => {
                tracing::warn!(input = %input.display(), error = %err, "skipping failed item");
                report.failed.push((input.clone(), err.to_string()));
            }
        }
    }
    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

fn build_thread_pool(threads: Option<usize>) -> ToonResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(ToonError::validation("threads must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ToonError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
