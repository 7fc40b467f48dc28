use super::LineNumber;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing line number in line {line}")]
    MissingLineNumber { line: usize },

    #[error("Line number already exists at {number}")]
    DuplicateLineNumber { number: LineNumber },

    #[error("Undefined line number {target} in line {line}")]
    UndefinedLine { target: String, line: LineNumber },

    #[error("Step must be a positive number")]
    InvalidStep,

    #[error("Line {preserved} would overlap the new numbering at {new_start}")]
    Overlap {
        preserved: LineNumber,
        new_start: LineNumber,
    },

    #[error("Line number overflow")]
    Overflow,

    #[error("Internal error in line {number}")]
    Internal { number: LineNumber },

    #[error("Unable to open file '{path}': {source}")]
    Load {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to write file '{path}': {source}")]
    Save {
        path: String,
        source: std::io::Error,
    },
}
