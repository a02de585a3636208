//! View layer module
//!
//! Separates what the router needs (render a named template against a small
//! context) from how rendering happens (minijinja over a directory tree).

mod context;
mod engine;

pub use context::ViewContext;
pub use engine::{Renderer, TemplateEngine};
