//! JSON rendering for structural results.

use crate::error::{Error, Result};
use crate::model::StructuralResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a structural result to JSON.
pub fn to_json(result: &StructuralResult, format: JsonFormat) -> Result<String> {
    let bytes = match format {
        JsonFormat::Pretty => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let written = {
                let mut ser = Serializer::with_formatter(&mut buf, formatter);
                result.serialize(&mut ser)
            };
            written.map(|_| buf)
        }
        JsonFormat::Compact => serde_json::to_vec(result),
    }
    .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| Error::Render(format!("JSON is not UTF-8: {}", e)))
}

/// Parse a structural result back from JSON.
pub fn from_json(json: &str) -> Result<StructuralResult> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}
