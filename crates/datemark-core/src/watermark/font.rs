//! Font resolution for watermark text.
//!
//! Resolution is an ordered list of candidates evaluated until one loads:
//! the configured preferred font first, then fixed platform font paths,
//! then a font embedded in the binary. The embedded DejaVu Sans keeps the
//! tool working on systems with no fonts installed, though it lacks CJK
//! glyphs; the platform candidates are ordered to prefer CJK-capable fonts
//! where the OS ships them.

use ab_glyph::FontVec;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Last-resort font compiled into the binary (DejaVu Sans, free license).
static BUILTIN_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// One step in the font resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// A font file on disk
    File(PathBuf),
    /// The embedded fallback font
    Builtin,
}

/// Where a resolved font came from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    File(PathBuf),
    Builtin,
}

/// A font that has been successfully loaded and parsed.
pub struct ResolvedFont {
    pub font: FontVec,
    pub origin: FontOrigin,
}

/// Resolves a usable font from an ordered candidate list.
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
}

impl FontResolver {
    /// Build the resolution chain: preferred path (if any), then platform
    /// defaults, then the embedded font.
    pub fn new(preferred: Option<PathBuf>) -> Self {
        let mut candidates = Vec::new();
        if let Some(path) = preferred {
            candidates.push(FontCandidate::File(path));
        }
        for path in Self::platform_font_paths() {
            candidates.push(FontCandidate::File(path));
        }
        candidates.push(FontCandidate::Builtin);
        Self { candidates }
    }

    /// The fixed per-platform font paths tried after the preferred font.
    fn platform_font_paths() -> Vec<PathBuf> {
        let paths: &[&str] = if cfg!(target_os = "windows") {
            &["C:/Windows/Fonts/msyh.ttc", "C:/Windows/Fonts/arial.ttf"]
        } else if cfg!(target_os = "macos") {
            &[
                "/System/Library/Fonts/PingFang.ttc",
                "/System/Library/Fonts/Helvetica.ttc",
            ]
        } else {
            &[
                "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            ]
        };
        paths.iter().map(PathBuf::from).collect()
    }

    /// The candidate chain, in evaluation order.
    pub fn candidates(&self) -> &[FontCandidate] {
        &self.candidates
    }

    /// Walk the chain and return the first font that loads and parses.
    ///
    /// The embedded candidate terminates the chain, so this only fails if
    /// the embedded font itself cannot be parsed.
    pub fn resolve(&self) -> Result<ResolvedFont, PipelineError> {
        for candidate in &self.candidates {
            match candidate {
                FontCandidate::File(path) => match Self::load_file(path) {
                    Some(font) => {
                        tracing::debug!("Using font: {}", path.display());
                        return Ok(ResolvedFont {
                            font,
                            origin: FontOrigin::File(path.clone()),
                        });
                    }
                    None => {
                        tracing::debug!("Font unavailable, trying next: {}", path.display());
                    }
                },
                FontCandidate::Builtin => {
                    tracing::debug!("Using embedded fallback font");
                    let font = FontVec::try_from_vec(BUILTIN_FONT.to_vec())
                        .map_err(|e| PipelineError::Font(format!("embedded font: {e}")))?;
                    return Ok(ResolvedFont {
                        font,
                        origin: FontOrigin::Builtin,
                    });
                }
            }
        }
        Err(PipelineError::Font("empty font candidate chain".into()))
    }

    fn load_file(path: &Path) -> Option<FontVec> {
        let data = std::fs::read(path).ok()?;
        FontVec::try_from_vec(data).ok()
    }
}
