//! pointunion-export: Pure format serializers (sans-IO)
//!
//! Converts a component partition into output formats. Currently
//! supports the plain line-per-component text format and JSON.

pub mod json;
pub mod text;

pub use json::to_json;
pub use text::to_text;
