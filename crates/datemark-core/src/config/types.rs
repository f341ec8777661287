//! Sub-configuration structs with defaults matching the CLI surface.

use crate::watermark::Placement;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Watermark appearance and placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Font size in pixels
    pub font_size: u32,

    /// Text color: a named color ("white") or hex ("#RRGGBB" / "#RRGGBBAA")
    pub color: String,

    /// Which corner (or center) the text is anchored to
    pub placement: Placement,

    /// Margin between the text bounding box and the image edge, in pixels
    pub margin: u32,

    /// Draw a semi-transparent box behind the text for legibility
    pub background: bool,

    /// Prefix prepended to a successfully extracted date
    pub text_prefix: String,

    /// Sentinel text used when no capture date could be extracted
    pub unknown_text: String,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            font_size: 24,
            color: "white".to_string(),
            placement: Placement::BottomRight,
            margin: 10,
            background: true,
            text_prefix: "拍摄于 ".to_string(),
            unknown_text: "拍摄时间未知".to_string(),
        }
    }
}

/// Font resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred font file, tried before the platform defaults.
    /// Supports ~ expansion. The embedded fallback font is used when
    /// neither this nor any platform font can be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Input discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Recognized input extensions (matched case-insensitively)
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "tiff".to_string(),
                "tif".to_string(),
                "bmp".to_string(),
            ],
        }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix appended to the input directory name for the output directory
    pub dir_suffix: String,

    /// Suffix appended to each output file stem
    pub file_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir_suffix: "_watermark".to_string(),
            file_suffix: "_watermark".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
