//! Multi-format report rendering
//!
//! A closed format set (markdown, json, html) with one rendering function
//! per variant. Every format carries the same semantic content; only the
//! serialization differs. Rendering is pure; persistence belongs to the
//! caller.

mod document;
mod format;
mod render;


pub use document::ReportDocument;
pub use format::ReportFormat;
pub use render::{render, ReportInput};
