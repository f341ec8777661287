//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::watermark::parse_color;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.watermark.font_size == 0 {
            return Err(ConfigError::ValidationError(
                "watermark.font_size must be > 0".into(),
            ));
        }
        if parse_color(&self.watermark.color).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "watermark.color is not a recognized color: {:?}",
                self.watermark.color
            )));
        }
        if self.watermark.unknown_text.is_empty() {
            return Err(ConfigError::ValidationError(
                "watermark.unknown_text must not be empty".into(),
            ));
        }
        if self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty".into(),
            ));
        }
        if self.output.dir_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir_suffix must not be empty".into(),
            ));
        }
        if self.output.file_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.file_suffix must not be empty".into(),
            ));
        }
        Ok(())
    }
}
