//! Layout engine: the static region catalog, the text-flow engine, and the
//! per-slide region resolver.

pub mod catalog;
pub mod resolver;
pub mod textflow;

pub use catalog::{LayoutDefinition, LayoutName, Rect, CANVAS_HEIGHT, CANVAS_WIDTH, LAYOUT_ROTATION};
pub use resolver::{
    resolve_regions, truncate_quote, SlideGeometry, CONTENT_TITLE_AREA, QUOTE_BAND,
    QUOTE_MAX_CHARS,
};
pub use textflow::{
    flow_bullet, flow_bullets, ColorRole, FlowParagraph, FlowStyle, ParagraphSpacing, RunRole,
    TextRun,
};
