//! The watermarking pipeline, stage by stage:
//! - **discovery**: find image files at the input path
//! - **decode**: load pixel buffers with format sniffing
//! - **metadata**: extract the EXIF capture date
//! - **output**: derive output locations and persist results
//! - **processor**: orchestrate the per-file sequence

pub mod decode;
pub mod discovery;
pub mod metadata;
pub mod output;
pub mod processor;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use metadata::{CaptureDate, DateExtractor};
pub use output::{save_image, OutputLocator};
pub use processor::{Job, Processor, RunPlan, RunSummary};
