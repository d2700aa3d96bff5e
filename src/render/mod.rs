//! Rendering: plan construction and JSON output.

mod json;
mod plan;

pub use json::{plan_to_json, to_json, JsonFormat};
pub use plan::{ImageSlot, ImageSource, Planner, RenderPlan, RenderSlide, TextBox};
