//! Datemark Core - EXIF-date watermarking library.
//!
//! Datemark reads the capture date from a photo's EXIF metadata and burns a
//! formatted date string into a copy of the image as a visible watermark.
//!
//! # Architecture
//!
//! The pipeline is synchronous and sequential, one file at a time:
//!
//! ```text
//! Image → Decode → Extract Date → Compose Text → Draw → Save
//! ```
//!
//! Per-file failures are contained at the file boundary; a batch run
//! continues past a file it cannot read or write.
//!
//! # Usage
//!
//! ```rust,ignore
//! use datemark_core::{Config, Processor};
//!
//! fn main() -> datemark_core::Result<()> {
//!     let config = Config::load()?;
//!     let processor = Processor::new(&config)?;
//!     let summary = processor.run("./photos".as_ref())?;
//!     println!("Processed {} files", summary.total());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod watermark;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, DatemarkError, PipelineError, PipelineResult, Result};
pub use pipeline::{CaptureDate, DateExtractor, Job, Processor, RunPlan, RunSummary};
pub use watermark::{FontResolver, Placement, WatermarkComposer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_processor_from_default_config() {
        let config = Config::default();
        assert!(Processor::new(&config).is_ok());
    }
}
