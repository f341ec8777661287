//! Output location derivation and image persistence.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::PipelineError;

/// JPEG output quality, matching common photo-export defaults.
const JPEG_QUALITY: u8 = 95;

/// Derives output locations from input paths.
pub struct OutputLocator {
    config: OutputConfig,
}

impl OutputLocator {
    /// Create a new locator from output settings.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Output directory for a directory-mode run: a sibling of the input
    /// directory named `<input-dir-name><dir_suffix>`.
    pub fn output_dir(&self, input_dir: &Path) -> PathBuf {
        let name = input_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("images");
        let sibling = format!("{}{}", name, self.config.dir_suffix);
        match input_dir.parent() {
            Some(parent) => parent.join(sibling),
            None => PathBuf::from(sibling),
        }
    }

    /// Output file inside `output_dir` for one input file:
    /// `<stem><file_suffix><ext>`.
    pub fn output_file(&self, output_dir: &Path, input_file: &Path) -> PathBuf {
        output_dir.join(self.suffixed_name(input_file))
    }

    /// Output path for single-file mode: written next to the source.
    pub fn sibling_file(&self, input_file: &Path) -> PathBuf {
        match input_file.parent() {
            Some(parent) => parent.join(self.suffixed_name(input_file)),
            None => PathBuf::from(self.suffixed_name(input_file)),
        }
    }

    fn suffixed_name(&self, input_file: &Path) -> String {
        let stem = input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        match input_file.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}{}.{}", stem, self.config.file_suffix, ext),
            None => format!("{}{}", stem, self.config.file_suffix),
        }
    }

    /// Create the output directory if absent. Safe to call on every run.
    pub fn ensure_dir(&self, dir: &Path) -> Result<(), PipelineError> {
        std::fs::create_dir_all(dir).map_err(|e| PipelineError::OutputDir {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Encode `image` fully into memory, then write the file in one call.
///
/// A failed encode therefore never leaves a truncated output artifact on
/// disk. JPEG output is converted to RGB (JPEG has no alpha channel) and
/// written at quality 95; other formats keep the RGBA buffer as-is.
pub fn save_image(
    image: &DynamicImage,
    format: ImageFormat,
    path: &Path,
) -> Result<(), PipelineError> {
    let mut buffer = Cursor::new(Vec::new());

    let encode_result = if format == ImageFormat::Jpeg {
        let rgb = image.to_rgb8();
        JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(&rgb)
    } else {
        image.write_to(&mut buffer, format)
    };
    encode_result.map_err(|e| PipelineError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    std::fs::write(path, buffer.into_inner()).map_err(|e| PipelineError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
