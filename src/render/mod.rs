//! Rendering module for converting structural results to output formats.

mod json;

pub use json::{from_json, to_json, JsonFormat};
