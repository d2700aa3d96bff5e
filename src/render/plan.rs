//! Render plan construction.
//!
//! A [`RenderPlan`] is the fully resolved, backend-independent description of
//! a deck: every slide reduced to positioned text boxes, flowed paragraphs,
//! and image slots, with all theme colors and font sizes applied. A drawing
//! backend only has to walk the plan and place shapes.

use crate::image::{build_image_prompt, ImageResolver, NullResolver};
use crate::layout::{
    flow_bullets, resolve_regions, truncate_quote, FlowParagraph, FlowStyle, LayoutName, Rect,
    CANVAS_HEIGHT, CANVAS_WIDTH, CONTENT_TITLE_AREA,
};
use crate::model::{ChartData, Document, SlideKind, SlideSpec};
use crate::theme::{Color, Theme};
use serde::{Deserialize, Serialize};

/// A positioned, styled block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub area: Rect,
    pub text: String,
    pub size_pt: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub centered: bool,
}

/// Where a content slide's image comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    /// A resolved local file, ready to embed.
    File { path: String },
    /// Nothing resolved; render a dashed placeholder box instead.
    Placeholder { desc: String, prompt: String },
}

/// The image region of a content slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSlot {
    pub area: Rect,
    pub source: ImageSource,
}

/// One fully resolved slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderSlide {
    Cover {
        background: Color,
        title: TextBox,
        subtitle: Option<TextBox>,
        slogan: Option<TextBox>,
    },
    Section {
        background: Color,
        decoration: Rect,
        title: TextBox,
    },
    Content {
        background: Color,
        layout: LayoutName,
        title: TextBox,
        underline: Rect,
        text_area: Rect,
        paragraphs: Vec<FlowParagraph>,
        image: ImageSlot,
        quote: Option<TextBox>,
    },
    Chart {
        background: Color,
        title: TextBox,
        plot_area: Rect,
        chart_data: ChartData,
        note: Option<TextBox>,
    },
    Ending {
        background: Color,
        title: TextBox,
        body_area: Rect,
        paragraphs: Vec<FlowParagraph>,
        quote: Option<TextBox>,
    },
}

/// A resolved deck, ready for a drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub theme: Theme,
    pub slides: Vec<RenderSlide>,
}

const WHITE: Color = Color::new(255, 255, 255);
const SUBTITLE_GRAY: Color = Color::new(230, 230, 230);

// Fixed per-kind geometry.
const COVER_TITLE_AREA: Rect = Rect::new(0.3, 1.5, 9.4, 1.5);
const COVER_SUBTITLE_AREA: Rect = Rect::new(0.5, 3.2, 9.0, 0.8);
const COVER_SLOGAN_AREA: Rect = Rect::new(2.0, 4.5, 6.0, 0.6);
const SECTION_DECORATION: Rect = Rect::new(0.0, 2.3, 10.0, 1.0);
const SECTION_TITLE_AREA: Rect = Rect::new(0.3, 2.3, 9.4, 1.0);
const CONTENT_UNDERLINE: Rect = Rect::new(0.3, 1.1, 2.0, 0.0);
const CHART_TITLE_AREA: Rect = Rect::new(0.5, 0.4, 9.0, 0.6);
const CHART_PLOT_AREA: Rect = Rect::new(1.5, 1.5, 7.0, 3.5);
const CHART_NOTE_AREA: Rect = Rect::new(1.0, 5.1, 8.0, 0.4);
const ENDING_TITLE_AREA: Rect = Rect::new(0.5, 0.6, 9.0, 0.8);
const ENDING_BODY_AREA: Rect = Rect::new(1.5, 1.6, 7.0, 2.8);
const ENDING_QUOTE_AREA: Rect = Rect::new(1.0, 4.6, 8.0, 0.8);

/// Cover titles shrink as they grow: over 20 chars, over 15, otherwise.
fn cover_title_size(title: &str) -> f64 {
    match title.chars().count() {
        n if n > 20 => 32.0,
        n if n > 15 => 36.0,
        _ => 40.0,
    }
}

fn section_title_size(title: &str) -> f64 {
    match title.chars().count() {
        n if n > 16 => 32.0,
        n if n > 12 => 38.0,
        _ => 44.0,
    }
}

fn content_title_size(title: &str) -> f64 {
    match title.chars().count() {
        n if n > 18 => 24.0,
        n if n > 12 => 28.0,
        _ => 32.0,
    }
}

/// Builds render plans for one theme.
pub struct Planner {
    theme: Theme,
    style: FlowStyle,
}

impl Planner {
    /// Create a planner with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            style: FlowStyle::default(),
        }
    }

    /// Create a planner using the theme named by the document's metadata.
    pub fn for_document(document: &Document) -> Self {
        Self::new(Theme::resolve(&document.metadata.theme))
    }

    /// Plan a document without image resolution; every image slot becomes a
    /// placeholder.
    pub fn plan(&self, document: &Document) -> RenderPlan {
        self.plan_with_resolver(document, &NullResolver)
    }

    /// Plan a document, resolving image slots through `resolver`.
    pub fn plan_with_resolver(
        &self,
        document: &Document,
        resolver: &dyn ImageResolver,
    ) -> RenderPlan {
        let mut rotation = 0usize;
        let slides = document
            .slides
            .iter()
            .filter_map(|slide| self.plan_slide(slide, &mut rotation, resolver))
            .collect();
        RenderPlan {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            theme: self.theme.clone(),
            slides,
        }
    }

    fn plan_slide(
        &self,
        slide: &SlideSpec,
        rotation: &mut usize,
        resolver: &dyn ImageResolver,
    ) -> Option<RenderSlide> {
        match slide {
            SlideSpec::Cover {
                title,
                subtitle,
                slogan,
            } => Some(self.plan_cover(title, subtitle.as_deref(), slogan.as_deref())),
            SlideSpec::Section { title } => Some(self.plan_section(title)),
            SlideSpec::ContentImage { .. } => Some(self.plan_content(slide, rotation, resolver)),
            SlideSpec::Chart {
                title,
                chart_data,
                note,
            } => Some(self.plan_chart(title, chart_data, note.as_deref())),
            SlideSpec::Ending {
                title,
                bullets,
                quote,
            } => Some(self.plan_ending(title, bullets, quote.as_deref())),
            SlideSpec::Unknown => {
                log::warn!("dropping slide with unrecognized type");
                None
            }
        }
    }

    fn plan_cover(
        &self,
        title: &str,
        subtitle: Option<&str>,
        slogan: Option<&str>,
    ) -> RenderSlide {
        RenderSlide::Cover {
            background: self.theme.primary,
            title: TextBox {
                area: COVER_TITLE_AREA,
                text: title.to_string(),
                size_pt: cover_title_size(title),
                bold: true,
                italic: false,
                color: WHITE,
                centered: true,
            },
            subtitle: subtitle.map(|text| TextBox {
                area: COVER_SUBTITLE_AREA,
                text: text.to_string(),
                size_pt: 18.0,
                bold: false,
                italic: false,
                color: SUBTITLE_GRAY,
                centered: true,
            }),
            slogan: slogan.map(|text| TextBox {
                area: COVER_SLOGAN_AREA,
                text: text.to_string(),
                size_pt: 14.0,
                bold: false,
                italic: true,
                color: self.theme.accent,
                centered: true,
            }),
        }
    }

    fn plan_section(&self, title: &str) -> RenderSlide {
        RenderSlide::Section {
            background: self.theme.background,
            decoration: SECTION_DECORATION,
            title: TextBox {
                area: SECTION_TITLE_AREA,
                text: title.to_string(),
                size_pt: section_title_size(title),
                bold: true,
                italic: false,
                color: WHITE,
                centered: true,
            },
        }
    }

    fn plan_content(
        &self,
        slide: &SlideSpec,
        rotation: &mut usize,
        resolver: &dyn ImageResolver,
    ) -> RenderSlide {
        let SlideSpec::ContentImage {
            title,
            bullets,
            quote,
            layout,
            image_desc,
            image_prompt,
            image,
        } = slide
        else {
            unreachable!("plan_content called for {:?}", slide.kind());
        };

        // The rotation counter advances for every content slide, explicit
        // layout or not.
        let auto = LayoutName::from_rotation(*rotation);
        *rotation += 1;
        let layout = layout.unwrap_or(auto);

        let quote = quote.as_deref().map(str::trim).filter(|q| !q.is_empty());
        let geometry = resolve_regions(layout, quote.is_some());

        let suggested = image.as_deref().unwrap_or("");
        let source = match resolver.resolve(image_desc, suggested) {
            Some(path) => ImageSource::File {
                path: path.display().to_string(),
            },
            None => ImageSource::Placeholder {
                desc: image_desc.clone(),
                prompt: image_prompt
                    .clone()
                    .unwrap_or_else(|| build_image_prompt(title, bullets)),
            },
        };

        let quote_box = geometry.quote_area.and_then(|area| {
            quote.map(|text| TextBox {
                area,
                text: truncate_quote(text),
                size_pt: 12.0,
                bold: false,
                italic: true,
                color: self.theme.quote,
                centered: false,
            })
        });

        RenderSlide::Content {
            background: self.theme.background,
            layout,
            title: TextBox {
                area: CONTENT_TITLE_AREA,
                text: title.to_string(),
                size_pt: content_title_size(title),
                bold: true,
                italic: false,
                color: self.theme.primary,
                centered: false,
            },
            underline: CONTENT_UNDERLINE,
            text_area: geometry.text_area,
            paragraphs: flow_bullets(bullets, &self.style),
            image: ImageSlot {
                area: geometry.image_area,
                source,
            },
            quote: quote_box,
        }
    }

    fn plan_chart(&self, title: &str, chart_data: &ChartData, note: Option<&str>) -> RenderSlide {
        RenderSlide::Chart {
            background: self.theme.background,
            title: TextBox {
                area: CHART_TITLE_AREA,
                text: title.to_string(),
                size_pt: 32.0,
                bold: true,
                italic: false,
                color: self.theme.primary,
                centered: false,
            },
            plot_area: CHART_PLOT_AREA,
            chart_data: chart_data.clone(),
            note: note.map(|text| TextBox {
                area: CHART_NOTE_AREA,
                text: text.to_string(),
                size_pt: 12.0,
                bold: false,
                italic: false,
                color: self.theme.text,
                centered: true,
            }),
        }
    }

    fn plan_ending(&self, title: &str, bullets: &[String], quote: Option<&str>) -> RenderSlide {
        RenderSlide::Ending {
            background: self.theme.background,
            title: TextBox {
                area: ENDING_TITLE_AREA,
                text: title.to_string(),
                size_pt: 36.0,
                bold: true,
                italic: false,
                color: self.theme.primary,
                centered: false,
            },
            body_area: ENDING_BODY_AREA,
            paragraphs: flow_bullets(bullets, &self.style),
            quote: quote.map(|text| TextBox {
                area: ENDING_QUOTE_AREA,
                text: truncate_quote(text),
                size_pt: 16.0,
                bold: true,
                italic: true,
                color: self.theme.accent,
                centered: false,
            }),
        }
    }
}

impl RenderSlide {
    /// The document-model kind this slide was planned from.
    pub fn kind(&self) -> SlideKind {
        match self {
            RenderSlide::Cover { .. } => SlideKind::Cover,
            RenderSlide::Section { .. } => SlideKind::Section,
            RenderSlide::Content { .. } => SlideKind::ContentImage,
            RenderSlide::Chart { .. } => SlideKind::Chart,
            RenderSlide::Ending { .. } => SlideKind::Ending,
        }
    }
}

impl RenderPlan {
    /// Number of planned slides. Unknown-kind slides were dropped.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
