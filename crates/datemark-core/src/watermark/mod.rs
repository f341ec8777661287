//! Watermark rendering: placement geometry, color parsing, font resolution,
//! and text compositing.

mod color;
mod compose;
mod font;
mod placement;

pub use color::parse_color;
pub use compose::WatermarkComposer;
pub use font::{FontCandidate, FontOrigin, FontResolver, ResolvedFont};
pub use placement::Placement;
