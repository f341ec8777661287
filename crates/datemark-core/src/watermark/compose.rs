//! Watermark composition: text metrics, anchor geometry, and drawing.

use ab_glyph::PxScale;
use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::config::WatermarkConfig;

use super::font::ResolvedFont;
use super::{parse_color, Placement};

/// Padding between the text and the edge of the legibility box, in pixels.
const BACKGROUND_PADDING: u32 = 6;

/// Fill for the legibility box: black at ~43% opacity.
const BACKGROUND_FILL: Rgba<u8> = Rgba([0, 0, 0, 110]);

/// Composes watermark text onto an image buffer.
pub struct WatermarkComposer {
    color: Rgba<u8>,
    placement: Placement,
    margin: u32,
    background: bool,
    scale: PxScale,
}

impl WatermarkComposer {
    /// Build a composer from validated watermark settings.
    pub fn new(config: &WatermarkConfig) -> Self {
        Self {
            // Config validation already rejected unknown colors; the
            // unwrap_or only matters for hand-built configs.
            color: parse_color(&config.color).unwrap_or(Rgba([255, 255, 255, 255])),
            placement: config.placement,
            margin: config.margin,
            background: config.background,
            scale: PxScale::from(config.font_size as f32),
        }
    }

    /// Measure the rendered size of `text` under the configured font size.
    pub fn measure(&self, font: &ResolvedFont, text: &str) -> (u32, u32) {
        text_size(self.scale, &font.font, text)
    }

    /// Compute the text anchor for a canvas of the given dimensions.
    ///
    /// May return negative coordinates when the text is larger than the
    /// canvas; drawing clips at the canvas edge in that case.
    pub fn place(&self, canvas_width: u32, canvas_height: u32, metrics: (u32, u32)) -> (i32, i32) {
        self.placement
            .anchor(canvas_width, canvas_height, metrics.0, metrics.1, self.margin)
    }

    /// Draw the watermark onto `image` in place.
    ///
    /// Draws the optional legibility box first, then the text on top of it.
    pub fn apply(&self, image: &mut RgbaImage, font: &ResolvedFont, text: &str) {
        let metrics = self.measure(font, text);
        let (x, y) = self.place(image.width(), image.height(), metrics);

        if self.background {
            self.blend_background(image, x, y, metrics);
        }

        draw_text_mut(image, self.color, x, y, self.scale, &font.font, text);
        tracing::trace!("Watermark {:?} at ({}, {})", text, x, y);
    }

    /// Alpha-blend the legibility box beneath the text, clipped to the canvas.
    fn blend_background(&self, image: &mut RgbaImage, x: i32, y: i32, metrics: (u32, u32)) {
        let pad = BACKGROUND_PADDING as i32;
        let (tw, th) = (metrics.0 as i32, metrics.1 as i32);

        let x0 = (x - pad).max(0) as u32;
        let y0 = (y - pad).max(0) as u32;
        let x1 = (x + tw + pad).clamp(0, image.width() as i32) as u32;
        let y1 = (y + th + pad).clamp(0, image.height() as i32) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                image.get_pixel_mut(px, py).blend(&BACKGROUND_FILL);
            }
        }
    }
}
