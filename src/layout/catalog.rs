//! Static layout catalog.
//!
//! Every layout is a fixed pair of rectangles in canvas-relative inches,
//! origin top-left. Regions are only ever looked up here, never computed,
//! so a resolved region can not leave the canvas.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas width in inches (16:9).
pub const CANVAS_WIDTH: f64 = 10.0;

/// Canvas height in inches.
pub const CANVAS_HEIGHT: f64 = 5.625;

/// A rectangle in canvas coordinates: left, top, width, height (inches).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the left canvas edge
    pub left: f64,
    /// Distance from the top canvas edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Check that the rectangle lies fully within the canvas.
    pub fn in_canvas(&self) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.left + self.width <= CANVAS_WIDTH
            && self.top + self.height <= CANVAS_HEIGHT
    }
}

/// Identifier selecting a predefined pair of text/image rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutName {
    /// Bullets on the left, image on the right
    LeftTextRightImage,
    /// Bullets on the right, image on the left
    RightTextLeftImage,
    /// Bullets across the top, image below
    TopTextBottomImage,
    /// Wide image with a narrow text column; reserves the quote band
    LargeImageSmallText,
    /// Even split between text and image
    Balanced,
    /// Wide text column with a small image
    EmphasisText,
}

/// Rotation order of the catalog; index = counter % 6.
pub const LAYOUT_ROTATION: [LayoutName; 6] = [
    LayoutName::LeftTextRightImage,
    LayoutName::RightTextLeftImage,
    LayoutName::TopTextBottomImage,
    LayoutName::LargeImageSmallText,
    LayoutName::Balanced,
    LayoutName::EmphasisText,
];

/// A named layout's fixed regions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutDefinition {
    /// Bullet text region
    pub text_area: Rect,
    /// Image region
    pub image_area: Rect,
}

impl LayoutName {
    /// Pick the rotation layout for an auto-assigned content slide.
    pub fn from_rotation(counter: usize) -> Self {
        LAYOUT_ROTATION[counter % LAYOUT_ROTATION.len()]
    }

    /// Look up the layout's fixed regions.
    pub fn definition(&self) -> LayoutDefinition {
        match self {
            LayoutName::LeftTextRightImage => LayoutDefinition {
                text_area: Rect::new(0.3, 1.3, 4.5, 3.5),
                image_area: Rect::new(5.0, 1.3, 4.5, 3.5),
            },
            LayoutName::RightTextLeftImage => LayoutDefinition {
                text_area: Rect::new(5.0, 1.3, 4.5, 3.5),
                image_area: Rect::new(0.3, 1.3, 4.5, 3.5),
            },
            LayoutName::TopTextBottomImage => LayoutDefinition {
                text_area: Rect::new(0.3, 1.2, 9.4, 1.5),
                // image pulled in so it clears the quote band
                image_area: Rect::new(2.5, 2.8, 5.0, 2.2),
            },
            LayoutName::LargeImageSmallText => LayoutDefinition {
                text_area: Rect::new(6.0, 1.3, 3.5, 3.5),
                image_area: Rect::new(0.3, 1.2, 5.5, 3.5),
            },
            LayoutName::Balanced => LayoutDefinition {
                text_area: Rect::new(0.3, 1.3, 4.5, 3.5),
                image_area: Rect::new(5.0, 1.3, 4.5, 3.5),
            },
            LayoutName::EmphasisText => LayoutDefinition {
                text_area: Rect::new(0.3, 1.3, 6.2, 3.5),
                image_area: Rect::new(6.8, 1.5, 2.8, 3.0),
            },
        }
    }

    /// The snake_case name used in the JSON schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutName::LeftTextRightImage => "left_text_right_image",
            LayoutName::RightTextLeftImage => "right_text_left_image",
            LayoutName::TopTextBottomImage => "top_text_bottom_image",
            LayoutName::LargeImageSmallText => "large_image_small_text",
            LayoutName::Balanced => "balanced",
            LayoutName::EmphasisText => "emphasis_text",
        }
    }

    /// Whether the layout reserves the bottom band for the image, which
    /// suppresses the quote band.
    pub fn suppresses_quote(&self) -> bool {
        matches!(self, LayoutName::LargeImageSmallText)
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LAYOUT_ROTATION
            .iter()
            .find(|l| l.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_regions_within_canvas() {
        for layout in LAYOUT_ROTATION {
            let def = layout.definition();
            assert!(def.text_area.in_canvas(), "{layout} text area off-canvas");
            assert!(def.image_area.in_canvas(), "{layout} image area off-canvas");
        }
    }

    #[test]
    fn test_rotation_period() {
        for n in 0..12 {
            assert_eq!(
                LayoutName::from_rotation(n),
                LayoutName::from_rotation(n + 6)
            );
        }
        assert_eq!(LayoutName::from_rotation(0), LayoutName::LeftTextRightImage);
        assert_eq!(LayoutName::from_rotation(3), LayoutName::LargeImageSmallText);
    }

    #[test]
    fn test_name_roundtrip() {
        for layout in LAYOUT_ROTATION {
            let parsed: LayoutName = layout.as_str().parse().unwrap();
            assert_eq!(parsed, layout);
        }
        assert!("diagonal_split".parse::<LayoutName>().is_err());
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&LayoutName::TopTextBottomImage).unwrap();
        assert_eq!(json, "\"top_text_bottom_image\"");
    }

    #[test]
    fn test_rect_bounds_check() {
        assert!(Rect::new(0.0, 0.0, 10.0, 5.625).in_canvas());
        assert!(!Rect::new(0.0, 0.0, 10.1, 1.0).in_canvas());
        assert!(!Rect::new(-0.1, 0.0, 1.0, 1.0).in_canvas());
        assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).in_canvas());
    }
}
