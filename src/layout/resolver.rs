//! Region resolution for content slides.
//!
//! Regions come verbatim from the static catalog; the only computed piece is
//! whether the quote band is present, and the hard length ceiling on quote
//! text so the band can never overflow.

use super::catalog::{LayoutName, Rect};
use serde::{Deserialize, Serialize};

/// Quote text longer than this is truncated.
pub const QUOTE_MAX_CHARS: usize = 60;

/// Kept prefix length when truncating, so prefix + ellipsis is exactly 60.
const QUOTE_KEEP_CHARS: usize = 57;

/// Ellipsis marker appended to truncated quotes.
pub const QUOTE_ELLIPSIS: &str = "...";

/// Title band shared by all content slides.
pub const CONTENT_TITLE_AREA: Rect = Rect::new(0.3, 0.3, 9.4, 0.8);

/// Quote band pinned to the bottom of the canvas, full width minus margins.
pub const QUOTE_BAND: Rect = Rect::new(0.3, 5.15, 9.4, 0.4);

/// Resolved regions for one content slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideGeometry {
    /// Title band
    pub title_area: Rect,
    /// Bullet text region
    pub text_area: Rect,
    /// Image region; always present, the renderer draws a placeholder
    /// inside it when no image resolves
    pub image_area: Rect,
    /// Quote band, when the slide has a quote and the layout allows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_area: Option<Rect>,
}

/// Resolve the regions for a layout.
///
/// The quote band is suppressed for the large-image layout, whose image
/// region extends into the band's vertical space.
pub fn resolve_regions(layout: LayoutName, has_quote: bool) -> SlideGeometry {
    let def = layout.definition();
    let quote_area = if has_quote && !layout.suppresses_quote() {
        Some(QUOTE_BAND)
    } else {
        None
    };
    SlideGeometry {
        title_area: CONTENT_TITLE_AREA,
        text_area: def.text_area,
        image_area: def.image_area,
        quote_area,
    }
}

/// Clamp quote text to the band's character budget.
///
/// Anything past 60 chars becomes 57 chars plus "...", exactly 60.
pub fn truncate_quote(quote: &str) -> String {
    if quote.chars().count() <= QUOTE_MAX_CHARS {
        quote.to_string()
    } else {
        let kept: String = quote.chars().take(QUOTE_KEEP_CHARS).collect();
        format!("{kept}{QUOTE_ELLIPSIS}")
    }
}
