//! Pipeline orchestration: per-file processing and batch runs.
//!
//! Each file moves through decode, date extraction, composition, and save
//! strictly in sequence. Any per-file failure is logged and the file is
//! skipped; only a missing top-level input path aborts a run.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::PipelineError;
use crate::watermark::{FontResolver, ResolvedFont, WatermarkComposer};

use super::decode::ImageDecoder;
use super::discovery::FileDiscovery;
use super::metadata::{CaptureDate, DateExtractor};
use super::output::{save_image, OutputLocator};

/// One input file together with its derived output location.
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// The resolved work for one run.
#[derive(Debug)]
pub struct RunPlan {
    /// Files to process, in stable filename order
    pub jobs: Vec<Job>,
    /// Output directory (directory mode only; already created)
    pub output_dir: Option<PathBuf>,
}

/// Outcome counts for a completed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub succeeded: u64,
    pub failed: u64,
}

impl RunSummary {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Orchestrates the watermarking pipeline.
pub struct Processor {
    discovery: FileDiscovery,
    locator: OutputLocator,
    composer: WatermarkComposer,
    font: ResolvedFont,
    text_prefix: String,
    unknown_text: String,
}

impl Processor {
    /// Build a processor from validated configuration.
    ///
    /// Resolves the font once up front; the chain ends in an embedded font,
    /// so this only fails if that font cannot be parsed.
    pub fn new(config: &Config) -> Result<Self, PipelineError> {
        let font = FontResolver::new(config.font_path()).resolve()?;
        Ok(Self {
            discovery: FileDiscovery::new(config.processing.clone()),
            locator: OutputLocator::new(config.output.clone()),
            composer: WatermarkComposer::new(&config.watermark),
            font,
            text_prefix: config.watermark.text_prefix.clone(),
            unknown_text: config.watermark.unknown_text.clone(),
        })
    }

    /// Resolve the input path into a run plan.
    ///
    /// Directory mode creates the sibling output directory here, once.
    /// A missing input path is the one error that aborts the whole run.
    pub fn plan(&self, input: &Path) -> Result<RunPlan, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::PathNotFound(input.to_path_buf()));
        }

        if input.is_file() {
            let jobs = self
                .discovery
                .discover(input)
                .into_iter()
                .map(|file| Job {
                    output: self.locator.sibling_file(&file),
                    input: file,
                })
                .collect();
            return Ok(RunPlan {
                jobs,
                output_dir: None,
            });
        }

        let output_dir = self.locator.output_dir(input);
        self.locator.ensure_dir(&output_dir)?;

        let jobs = self
            .discovery
            .discover(input)
            .into_iter()
            .map(|file| Job {
                output: self.locator.output_file(&output_dir, &file),
                input: file,
            })
            .collect();

        Ok(RunPlan {
            jobs,
            output_dir: Some(output_dir),
        })
    }

    /// Process one file: decode, extract the capture date, compose the
    /// watermark, and persist the result.
    pub fn process_file(&self, job: &Job) -> Result<(), PipelineError> {
        tracing::debug!("Processing: {}", job.input.display());

        let decoded = ImageDecoder::decode(&job.input)?;

        let date = DateExtractor::extract(&job.input);
        if date.is_none() {
            tracing::debug!("No capture date in {}", job.input.display());
        }
        let text = self.watermark_text(date);

        let mut canvas = decoded.image.to_rgba8();
        self.composer.apply(&mut canvas, &self.font, &text);

        save_image(
            &image::DynamicImage::ImageRgba8(canvas),
            decoded.format,
            &job.output,
        )?;

        tracing::debug!("Saved: {}", job.output.display());
        Ok(())
    }

    /// Run the full pipeline for an input path, sequentially, containing
    /// per-file failures at the file boundary.
    pub fn run(&self, input: &Path) -> Result<RunSummary, PipelineError> {
        let plan = self.plan(input)?;
        let mut summary = RunSummary::default();

        for job in &plan.jobs {
            match self.process_file(job) {
                Ok(()) => summary.succeeded += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Skipped {}: {}", job.input.display(), e);
                }
            }
        }

        Ok(summary)
    }

    /// The watermark text for an extraction result: prefixed date, or the
    /// configured sentinel when no date was found.
    pub fn watermark_text(&self, date: Option<CaptureDate>) -> String {
        match date {
            Some(date) => format!("{}{}", self.text_prefix, date),
            None => self.unknown_text.clone(),
        }
    }
}
