/*!
# Program Module

This module holds program lines and renumbers them.

*/

mod line;
mod listing;
mod map;

pub use line::Line;
pub use listing::Listing;
pub use map::LineMap;

use crate::lang::{LineNumber, Result};

/// Numbers every line of `text` from `new_start` in steps of `step`.
/// The text must not carry any line numbers yet. `force` is accepted
/// for parity with [`renumber_lines`] but has nothing to relax here.
pub fn add_line_numbers(
    text: &str,
    new_start: LineNumber,
    step: LineNumber,
    _force: bool,
) -> Result<String> {
    let mut listing = Listing::new(text);
    listing.add_line_numbers(new_start, step)?;
    Ok(listing.to_string())
}

/// Renumbers `text` from `new_start` in steps of `step`, leaving lines
/// numbered below `old_start` alone, and rewrites every line number
/// reference to follow. With `force`, lines without a number and
/// references to lines that do not exist pass through unchanged
/// instead of failing.
pub fn renumber_lines(
    text: &str,
    new_start: LineNumber,
    old_start: LineNumber,
    step: LineNumber,
    force: bool,
) -> Result<String> {
    let mut listing = Listing::new(text);
    listing.renumber(new_start, old_start, step, force)?;
    Ok(listing.to_string())
}
