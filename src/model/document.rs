//! Document-level types.

use super::{SlideKind, SlideSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed presentation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, theme, slide count)
    pub metadata: Metadata,

    /// Slides in presentation order
    pub slides: Vec<SlideSpec>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            slides: Vec::new(),
        }
    }

    /// Get the number of slides in the document.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Add a slide to the document.
    pub fn add_slide(&mut self, slide: SlideSpec) {
        self.slides.push(slide);
    }

    /// Check if the document has any slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Count slides of a given kind.
    pub fn count_kind(&self, kind: SlideKind) -> usize {
        self.slides.iter().filter(|s| s.kind() == kind).count()
    }

    /// Iterate over content-image slides.
    pub fn content_slides(&self) -> impl Iterator<Item = &SlideSpec> {
        self.slides
            .iter()
            .filter(|s| s.kind() == SlideKind::ContentImage)
    }

    /// Rewrite the `image` field of content slides in order.
    ///
    /// This is the path-sync pass run after an external downloader has
    /// produced local files: `paths[i]` patches the i-th content slide.
    /// Extra paths are ignored; slides beyond the list keep their reference.
    pub fn sync_image_paths(&mut self, paths: &[String]) {
        let mut i = 0;
        for slide in &mut self.slides {
            if let SlideSpec::ContentImage { image, .. } = slide {
                if let Some(path) = paths.get(i) {
                    *image = Some(path.clone());
                }
                i += 1;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default)]
    pub title: String,

    /// Theme preset name (e.g. "tech_blue")
    #[serde(default)]
    pub theme: String,

    /// Declared slide count
    #[serde(default)]
    pub total_slides: usize,

    /// When the document was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
