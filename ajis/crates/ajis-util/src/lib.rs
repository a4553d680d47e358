//! ajis-util - Foundation types for the AJIS tooling.
//!
//! This crate holds the types shared between the lexer and its consumers:
//! source spans, source locations, the closed error-code taxonomy, the
//! `Diagnostic` value the lexer reports, and a renderer that turns a
//! diagnostic into a caret-annotated terminal report.

pub mod error;
pub mod render;
pub mod span;

pub use error::{Diagnostic, ErrorCode, Location};
pub use render::{render, render_to_string, RenderOptions};
pub use span::Span;
