use super::Line;
use crate::lang::{Error, LineNumber, Result};
use std::collections::HashMap;

/// Old to new line number mapping for one renumbering pass. Built
/// once, then consulted read-only while every line is rewritten.
#[derive(Debug, Default)]
pub struct LineMap {
    changes: HashMap<LineNumber, LineNumber>,
}

impl LineMap {
    /// Walks `lines` in order and assigns each numbered line its new
    /// number. Lines numbered below `old_start` map to themselves and
    /// do not consume a slot in the new sequence. A duplicate old
    /// number overwrites its earlier entry.
    pub fn build(
        lines: &[Line],
        new_start: LineNumber,
        old_start: LineNumber,
        step: LineNumber,
        force: bool,
    ) -> Result<LineMap> {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        let mut changes: HashMap<LineNumber, LineNumber> = HashMap::default();
        let mut old_end: Option<LineNumber> = None;
        let mut new_number = new_start;
        for (index, line) in lines.iter().enumerate() {
            let old = match line.number() {
                Some(old) => old,
                None if force => continue,
                None => return Err(Error::MissingLineNumber { line: index + 1 }),
            };
            if old >= old_start {
                if let Some(preserved) = old_end {
                    if preserved >= new_start {
                        return Err(Error::Overlap {
                            preserved,
                            new_start,
                        });
                    }
                }
                changes.insert(old, new_number);
                new_number = match new_number.checked_add(step) {
                    Some(number) => number,
                    None => return Err(Error::Overflow),
                };
            } else {
                changes.insert(old, old);
                old_end = Some(old);
            }
        }
        Ok(LineMap { changes })
    }

    pub fn get(&self, old: LineNumber) -> Option<LineNumber> {
        self.changes.get(&old).copied()
    }
}
