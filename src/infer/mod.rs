//! Structure inference: document title and heading outline from page text.
//!
//! Every function here is a pure scan over already rendered pages. State
//! that carries from line to line (seen headings, the indentation of the
//! last heading) lives in locals of a single call, never in shared state.

pub mod heading;
pub mod level;
pub mod noise;
pub mod normalize;
mod options;
pub mod outline;
mod processor;
pub mod prominence;
pub mod repetition;
pub mod title;

pub use heading::{HeadingMatcher, HeadingRule};
pub use normalize::{normalize, TextNormalizer};
pub use options::{InferOptions, NoisePolicy, DEFAULT_PLACEHOLDER_TITLE, PERMISSIVE_NOISE_FACTOR};
pub use outline::build_outline;
pub use processor::DocumentProcessor;
pub use title::{resolve_title, TitleSource};
