//! Document model types.
//!
//! Pages are the read-only input handed over by the page renderer; results
//! are built fresh for every document.

mod page;
mod result;

pub use page::{Document, Page, PAGE_BREAK};
pub use result::{HeadingEntry, HeadingLevel, StructuralResult};
