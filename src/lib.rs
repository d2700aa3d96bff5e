//! # autodeck
//!
//! Outline-to-presentation document engine for Rust.
//!
//! This library turns loosely-structured outline text (or an already
//! structured JSON document) into a typed slide document and a fully
//! resolved render plan: positioned text boxes, flowed paragraphs, image
//! slots, and theme colors, ready for a drawing backend.
//!
//! ## Quick Start
//!
//! ```
//! use autodeck::{parse_input, render};
//!
//! fn main() -> autodeck::Result<()> {
//!     let doc = parse_input("# Demo\n### Topic\n- Label: short\n> A quote")?;
//!
//!     let plan = render::Planner::for_document(&doc).plan(&doc);
//!     let json = render::plan_to_json(&plan, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two input shapes**: free-form outlines and structured JSON documents
//! - **Deterministic text flow**: label/body splitting and CJK-aware
//!   segmentation of long bullets
//! - **Static layout catalog**: six rotating text/image arrangements, all
//!   pre-checked against the canvas
//! - **Theme presets**: four color schemes plus palette inference
//! - **Parallel batches**: Rayon across independent inputs

pub mod detect;
pub mod error;
pub mod image;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use detect::{detect_input, detect_input_from_path, ParsedInput};
pub use error::{Error, Result};
pub use image::{collect_image_tasks, ImageResolver, ImageTask, LocalImageResolver};
pub use layout::{FlowParagraph, LayoutName, Rect};
pub use model::{ChartData, ChartSeries, Document, Metadata, SlideKind, SlideSpec};
pub use parser::{OutlineParser, ParseOptions};
pub use render::{JsonFormat, Planner, RenderPlan, RenderSlide};
pub use theme::{Theme, ThemeName};

use rayon::prelude::*;
use std::path::Path;

/// Parse outline text into a structured document.
///
/// # Example
///
/// ```
/// use autodeck::parse_outline;
///
/// let doc = parse_outline("# Demo\n### Topic\n- point").unwrap();
/// assert_eq!(doc.metadata.title, "Demo");
/// ```
pub fn parse_outline(text: &str) -> Result<Document> {
    OutlineParser::new().parse(text)
}

/// Parse outline text with custom options.
///
/// # Example
///
/// ```
/// use autodeck::{parse_outline_with_options, ParseOptions, ThemeName};
///
/// let options = ParseOptions::new()
///     .with_theme(ThemeName::TechBlue)
///     .without_ending();
/// let doc = parse_outline_with_options("# Demo\n### Topic", options).unwrap();
/// ```
pub fn parse_outline_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    OutlineParser::with_options(options).parse(text)
}

/// Parse any supported input: outline text or a structured JSON document.
///
/// Structured input bypasses the outline parser entirely.
pub fn parse_input(text: &str) -> Result<Document> {
    parse_input_with_options(text, ParseOptions::default())
}

/// Parse any supported input with custom options.
///
/// Options only affect outline parsing; a structured document is taken
/// as-is.
pub fn parse_input_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    match detect_input(text)? {
        ParsedInput::Structured(doc) => Ok(doc),
        ParsedInput::Outline(outline) => parse_outline_with_options(&outline, options),
    }
}

/// Parse a file containing an outline or a structured document.
///
/// # Example
///
/// ```no_run
/// use autodeck::parse_file;
///
/// let doc = parse_file("deck.md").unwrap();
/// println!("Slides: {}", doc.slide_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    match detect_input_from_path(path)? {
        ParsedInput::Structured(doc) => Ok(doc),
        ParsedInput::Outline(outline) => parse_outline(&outline),
    }
}

/// Parse many independent inputs in parallel.
///
/// Each input owns its own parser state, so the batch needs no
/// coordination. Results preserve input order.
pub fn parse_batch(inputs: &[String], options: ParseOptions) -> Vec<Result<Document>> {
    inputs
        .par_iter()
        .map(|text| parse_input_with_options(text, options))
        .collect()
}

/// Builder for parsing inputs and planning decks.
///
/// # Example
///
/// ```
/// use autodeck::{Autodeck, ThemeName};
///
/// let plan = Autodeck::new()
///     .with_theme(ThemeName::NatureGreen)
///     .without_ending()
///     .parse("# Demo\n### Topic\n- Label: detail")?
///     .plan();
/// assert_eq!(plan.slide_count(), 2);
/// # Ok::<(), autodeck::Error>(())
/// ```
pub struct Autodeck {
    parse_options: ParseOptions,
    theme_override: Option<ThemeName>,
}

impl Autodeck {
    /// Create a new Autodeck builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            theme_override: None,
        }
    }

    /// Select the theme for parsing and planning.
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.parse_options = self.parse_options.with_theme(theme);
        self.theme_override = Some(theme);
        self
    }

    /// Do not synthesize a default ending slide.
    pub fn without_ending(mut self) -> Self {
        self.parse_options = self.parse_options.without_ending();
        self
    }

    /// Omit the generation timestamp from metadata.
    pub fn without_timestamp(mut self) -> Self {
        self.parse_options = self.parse_options.without_timestamp();
        self
    }

    /// Parse an input string and return a result wrapper.
    pub fn parse(self, text: &str) -> Result<AutodeckResult> {
        let document = parse_input_with_options(text, self.parse_options)?;
        Ok(self.wrap(document))
    }

    /// Parse an input file.
    pub fn parse_path<P: AsRef<Path>>(self, path: P) -> Result<AutodeckResult> {
        let document = match detect_input_from_path(path)? {
            ParsedInput::Structured(doc) => doc,
            ParsedInput::Outline(outline) => {
                parse_outline_with_options(&outline, self.parse_options)?
            }
        };
        Ok(self.wrap(document))
    }

    fn wrap(self, document: Document) -> AutodeckResult {
        // for structured input the builder's theme beats the metadata's
        let theme = match self.theme_override {
            Some(name) => Theme::preset(name),
            None => Theme::resolve(&document.metadata.theme),
        };
        AutodeckResult { document, theme }
    }
}

impl Default for Autodeck {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an input document.
pub struct AutodeckResult {
    /// The parsed document
    pub document: Document,
    theme: Theme,
}

impl AutodeckResult {
    /// Build a render plan with placeholder image slots.
    pub fn plan(&self) -> RenderPlan {
        Planner::new(self.theme.clone()).plan(&self.document)
    }

    /// Build a render plan, resolving images through `resolver`.
    pub fn plan_with_resolver(&self, resolver: &dyn ImageResolver) -> RenderPlan {
        Planner::new(self.theme.clone()).plan_with_resolver(&self.document, resolver)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// List the document's image jobs for an external downloader.
    pub fn image_tasks(&self) -> Vec<ImageTask> {
        collect_image_tasks(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
