//! Title-likeness of a single line.
//!
//! Plain text carries no font metadata, so the uppercase ratio and raw
//! length stand in for typographic salience. Caseless scripts never pass
//! the ratio test and rely on the length test alone.

/// Decide whether a trimmed line looks like a title.
///
/// Lines without letters are rejected. Otherwise the line is prominent when
/// more than half of its letters are uppercase or it is longer than
/// `prominent_length` characters.
pub fn is_prominent(line: &str, prominent_length: usize) -> bool {
    let mut letters = 0usize;
    let mut upper = 0usize;
    for c in line.chars().filter(|c| c.is_alphabetic()) {
        letters += 1;
        if c.is_uppercase() {
            upper += 1;
        }
    }

    if letters == 0 {
        return false;
    }

    upper * 2 > letters || line.chars().count() > prominent_length
}
