//! Watermark placement: named anchor positions and pixel geometry.

use serde::{Deserialize, Serialize};

/// Named anchor position for the watermark text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl Placement {
    /// Resolve a placement from its kebab-case name.
    ///
    /// Unrecognized names fall back to the default bottom-right placement,
    /// matching the lenient behavior of the CLI surface.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top-left" => Placement::TopLeft,
            "top-right" => Placement::TopRight,
            "bottom-left" => Placement::BottomLeft,
            "bottom-right" => Placement::BottomRight,
            "center" => Placement::Center,
            _ => Placement::BottomRight,
        }
    }

    /// The kebab-case name of this placement.
    pub fn name(&self) -> &'static str {
        match self {
            Placement::TopLeft => "top-left",
            Placement::TopRight => "top-right",
            Placement::BottomLeft => "bottom-left",
            Placement::BottomRight => "bottom-right",
            Placement::Center => "center",
        }
    }

    /// Compute the top-left pixel coordinate at which text rendering begins.
    ///
    /// `margin` is the gap kept between the text bounding box and the image
    /// edge for the corner placements. Center placement truncates toward
    /// zero. Coordinates may be negative when the text is wider or taller
    /// than the canvas; drawing then clips at the canvas edge.
    pub fn anchor(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        text_width: u32,
        text_height: u32,
        margin: u32,
    ) -> (i32, i32) {
        let cw = canvas_width as i32;
        let ch = canvas_height as i32;
        let tw = text_width as i32;
        let th = text_height as i32;
        let m = margin as i32;

        match self {
            Placement::TopLeft => (m, m),
            Placement::TopRight => (cw - tw - m, m),
            Placement::BottomLeft => (m, ch - th - m),
            Placement::BottomRight => (cw - tw - m, ch - th - m),
            Placement::Center => ((cw - tw) / 2, (ch - th) / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CW: u32 = 800;
    const CH: u32 = 600;
    const TW: u32 = 180;
    const TH: u32 = 28;
    const M: u32 = 10;

    #[test]
    fn test_corner_anchors_touch_margin() {
        // anchor + text + margin == canvas edge on the relevant axes
        let (x, y) = Placement::TopLeft.anchor(CW, CH, TW, TH, M);
        assert_eq!((x, y), (10, 10));

        let (x, y) = Placement::TopRight.anchor(CW, CH, TW, TH, M);
        assert_eq!(x as u32 + TW + M, CW);
        assert_eq!(y, 10);

        let (x, y) = Placement::BottomLeft.anchor(CW, CH, TW, TH, M);
        assert_eq!(x, 10);
        assert_eq!(y as u32 + TH + M, CH);

        let (x, y) = Placement::BottomRight.anchor(CW, CH, TW, TH, M);
        assert_eq!(x as u32 + TW + M, CW);
        assert_eq!(y as u32 + TH + M, CH);
    }

    #[test]
    fn test_center_anchor_within_truncation_tolerance() {
        let (x, y) = Placement::Center.anchor(CW, CH, 181, 27, M);
        // Integer division truncates, so the centering is exact within 1px
        assert!((x * 2 + 181 - CW as i32).abs() <= 1);
        assert!((y * 2 + 27 - CH as i32).abs() <= 1);
    }

    #[test]
    fn test_anchor_can_go_negative_when_text_exceeds_canvas() {
        let (x, y) = Placement::BottomRight.anchor(100, 50, 200, 80, M);
        assert!(x < 0);
        assert!(y < 0);
    }

    #[test]
    fn test_from_name_unrecognized_falls_back_to_bottom_right() {
        assert_eq!(Placement::from_name("middle"), Placement::BottomRight);
        assert_eq!(Placement::from_name(""), Placement::BottomRight);
        assert_eq!(Placement::from_name("TOP-LEFT"), Placement::BottomRight);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for p in [
            Placement::TopLeft,
            Placement::TopRight,
            Placement::BottomLeft,
            Placement::BottomRight,
            Placement::Center,
        ] {
            assert_eq!(Placement::from_name(p.name()), p);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let toml = "placement = \"bottom-left\"";
        #[derive(Deserialize)]
        struct Wrapper {
            placement: Placement,
        }
        let w: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(w.placement, Placement::BottomLeft);
    }
}
