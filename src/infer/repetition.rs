//! Lines recurring on most pages (running headers).

use super::InferOptions;
use crate::model::Page;
use indexmap::IndexMap;

/// Find a trimmed line that occurs on more than half of the pages.
///
/// Only lines inside the option's length bounds are considered. Lines are
/// tallied in first-seen order and the first qualifying one wins, so ties
/// resolve the same way on every run. Returns `None` for fewer than two
/// pages.
pub fn find_repeated_line(pages: &[Page], options: &InferOptions) -> Option<String> {
    if pages.len() < 2 {
        return None;
    }

    // line -> (pages containing it, index of the last page counted)
    let mut tally: IndexMap<&str, (usize, usize)> = IndexMap::new();
    for (index, page) in pages.iter().enumerate() {
        for line in page.lines.iter().map(|l| l.trim()) {
            if line.is_empty() || !options.within_bounds(line) {
                continue;
            }
            let entry = tally.entry(line).or_insert((0, usize::MAX));
            if entry.1 != index {
                entry.0 += 1;
                entry.1 = index;
            }
        }
    }

    tally
        .into_iter()
        .find(|(_, (count, _))| count * 2 > pages.len())
        .map(|(line, _)| line.to_string())
}
