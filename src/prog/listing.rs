use super::{Line, LineMap};
use crate::lang::{Error, LineNumber, Result};

/// An ordered sequence of program lines, split out of one text blob
/// and joined back into one when shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<Line>,
}

impl Listing {
    /// Splits program text into lines. Trailing whitespace on the text
    /// and on each line is dropped, so CRLF input comes out clean.
    /// Empty text still holds one empty line.
    pub fn new(text: &str) -> Listing {
        let text = text.trim_end_matches(|c| c == ' ' || c == '\t' || c == '\r' || c == '\n');
        let lines = text.split('\n').map(Line::new).collect();
        Listing { lines }
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Sorts lines by their number, keeping the relative order of
    /// equal numbers. Unnumbered lines gather at the top.
    pub fn sort(&mut self) {
        self.lines.sort_by_key(|line| line.number().unwrap_or(0));
    }

    /// The number of the first line, if it has one. Decides whether a
    /// sorted program gets fresh numbers or a renumbering.
    pub fn first_number(&self) -> Option<LineNumber> {
        self.lines.first().and_then(|line| line.number())
    }

    /// Numbers every line from `new_start` in steps of `step`. Fails
    /// if any line already has a number. The listing is untouched on
    /// failure.
    pub fn add_line_numbers(&mut self, new_start: LineNumber, step: LineNumber) -> Result<()> {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        let mut number = new_start;
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in self.lines.iter() {
            if let Some(existing) = line.number() {
                return Err(Error::DuplicateLineNumber { number: existing });
            }
            let mut line = line.clone();
            line.set_number(number);
            lines.push(line);
            number = match number.checked_add(step) {
                Some(number) => number,
                None => return Err(Error::Overflow),
            };
        }
        self.lines = lines;
        Ok(())
    }

    /// Renumbers every line at or above `old_start` and rewrites the
    /// line number references in every statement to follow. The
    /// listing is untouched on failure.
    pub fn renumber(
        &mut self,
        new_start: LineNumber,
        old_start: LineNumber,
        step: LineNumber,
        force: bool,
    ) -> Result<()> {
        let map = LineMap::build(&self.lines, new_start, old_start, step, force)?;
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in self.lines.iter() {
            lines.push(line.renum(&map, force)?);
        }
        self.lines = lines;
        Ok(())
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
