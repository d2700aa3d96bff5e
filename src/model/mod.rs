//! Document model types for presentation content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! outline parsing and slide layout. The model is source-agnostic: it can be
//! built from markdown-like outline text or deserialized from a structured
//! JSON document.

mod document;
mod slide;

pub use document::{Document, Metadata};
pub use slide::{ChartData, ChartSeries, SlideKind, SlideSpec};
