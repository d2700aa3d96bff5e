//! Slide-level types.

use crate::layout::LayoutName;
use serde::{Deserialize, Serialize};

/// One structured slide record in the document model.
///
/// The variant set is closed; structured input claiming a slide `type` outside
/// it deserializes to [`SlideSpec::Unknown`] so a single bad slide can be
/// dropped without rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideSpec {
    /// Opening slide with the document title.
    Cover {
        /// Main title
        title: String,
        /// Subtitle line below the title
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        /// Short slogan near the bottom
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slogan: Option<String>,
    },

    /// Chapter divider slide.
    Section {
        /// Section title
        title: String,
    },

    /// Text bullets paired with an image region.
    ContentImage {
        /// Slide title
        title: String,
        /// Bullet lines in presentation order; may be empty, never absent
        #[serde(default)]
        bullets: Vec<String>,
        /// Highlighted sentence for the quote band
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quote: Option<String>,
        /// Explicit layout choice; `None` means the auto-rotation default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<LayoutName>,
        /// Human-readable image description
        #[serde(default)]
        image_desc: String,
        /// Generation prompt for the image service
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_prompt: Option<String>,
        /// Local image file reference, if already resolved
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },

    /// Data chart slide.
    Chart {
        /// Slide title
        title: String,
        /// Chart categories and series
        #[serde(default)]
        chart_data: ChartData,
        /// Footnote under the chart
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },

    /// Closing slide.
    Ending {
        /// Slide title
        title: String,
        /// Summary bullets; may be empty, never absent
        #[serde(default)]
        bullets: Vec<String>,
        /// Closing quote
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quote: Option<String>,
    },

    /// A slide type the model does not recognize.
    #[serde(other)]
    Unknown,
}

impl SlideSpec {
    /// Get the slide kind tag.
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideSpec::Cover { .. } => SlideKind::Cover,
            SlideSpec::Section { .. } => SlideKind::Section,
            SlideSpec::ContentImage { .. } => SlideKind::ContentImage,
            SlideSpec::Chart { .. } => SlideKind::Chart,
            SlideSpec::Ending { .. } => SlideKind::Ending,
            SlideSpec::Unknown => SlideKind::Unknown,
        }
    }

    /// Get the slide title, if the kind carries one.
    pub fn title(&self) -> Option<&str> {
        match self {
            SlideSpec::Cover { title, .. }
            | SlideSpec::Section { title }
            | SlideSpec::ContentImage { title, .. }
            | SlideSpec::Chart { title, .. }
            | SlideSpec::Ending { title, .. } => Some(title),
            SlideSpec::Unknown => None,
        }
    }

    /// Append a bullet line, for kinds that carry bullets. No-op otherwise.
    pub fn push_bullet(&mut self, text: impl Into<String>) {
        match self {
            SlideSpec::ContentImage { bullets, .. } | SlideSpec::Ending { bullets, .. } => {
                bullets.push(text.into());
            }
            _ => {}
        }
    }

    /// Set (overwrite) the quote, for kinds that carry one. No-op otherwise.
    ///
    /// Whitespace-only quotes are ignored so a present quote is always
    /// non-empty after trimming.
    pub fn set_quote(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        match self {
            SlideSpec::ContentImage { quote, .. } | SlideSpec::Ending { quote, .. } => {
                *quote = Some(text);
            }
            _ => {}
        }
    }

    /// Get the quote, for kinds that carry one.
    pub fn quote(&self) -> Option<&str> {
        match self {
            SlideSpec::ContentImage { quote, .. } | SlideSpec::Ending { quote, .. } => {
                quote.as_deref()
            }
            _ => None,
        }
    }
}

/// Slide kind tag, detached from the variant payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    /// Opening slide
    Cover,
    /// Chapter divider
    Section,
    /// Bullets plus image
    ContentImage,
    /// Data chart
    Chart,
    /// Closing slide
    Ending,
    /// Unrecognized type from structured input
    Unknown,
}

impl SlideKind {
    /// The snake_case tag used in the JSON schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Cover => "cover",
            SlideKind::Section => "section",
            SlideKind::ContentImage => "content_image",
            SlideKind::Chart => "chart",
            SlideKind::Ending => "ending",
            SlideKind::Unknown => "unknown",
        }
    }
}

/// Chart categories and data series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category labels along the axis
    #[serde(default)]
    pub labels: Vec<String>,

    /// Data series plotted over the categories
    #[serde(default)]
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    /// Check whether the chart has anything to plot.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.is_empty()
    }
}

/// A single named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series name shown in the legend
    pub name: String,
    /// One value per category label
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let slide = SlideSpec::Section {
            title: "Intro".to_string(),
        };
        assert_eq!(slide.kind(), SlideKind::Section);
        assert_eq!(slide.kind().as_str(), "section");
        assert_eq!(slide.title(), Some("Intro"));
    }

    #[test]
    fn test_push_bullet_ignores_non_bullet_kinds() {
        let mut section = SlideSpec::Section {
            title: "A".to_string(),
        };
        section.push_bullet("dropped");
        assert_eq!(section.kind(), SlideKind::Section);

        let mut content = SlideSpec::ContentImage {
            title: "B".to_string(),
            bullets: Vec::new(),
            quote: None,
            layout: None,
            image_desc: String::new(),
            image_prompt: None,
            image: None,
        };
        content.push_bullet("kept");
        match content {
            SlideSpec::ContentImage { ref bullets, .. } => assert_eq!(bullets, &["kept"]),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_set_quote_rejects_blank() {
        let mut slide = SlideSpec::Ending {
            title: "End".to_string(),
            bullets: Vec::new(),
            quote: None,
        };
        slide.set_quote("   ");
        assert!(slide.quote().is_none());
        slide.set_quote("a closing word");
        assert_eq!(slide.quote(), Some("a closing word"));
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let json = r#"{"type": "hologram", "title": "???"}"#;
        let slide: SlideSpec = serde_json::from_str(json).unwrap();
        assert_eq!(slide.kind(), SlideKind::Unknown);
    }

    #[test]
    fn test_content_image_defaults() {
        let json = r#"{"type": "content_image", "title": "T"}"#;
        let slide: SlideSpec = serde_json::from_str(json).unwrap();
        match slide {
            SlideSpec::ContentImage {
                bullets,
                quote,
                layout,
                ..
            } => {
                assert!(bullets.is_empty());
                assert!(quote.is_none());
                assert!(layout.is_none());
            }
            _ => unreachable!(),
        }
    }
}
