//! # RENUM
//!
//! A line number tool for the BASIC programming language.
//!
//! Feed it a program whose lines have no numbers and it numbers them.
//! Feed it a numbered program and it renumbers the lines, rewriting
//! every `GOTO`, `GOSUB`, `THEN`, and friend so the jumps still land
//! where they used to.
//!
//! ```text
//! $ renum -i guess.bas -o guess2.bas --start 100 --step 10
//! ```

#[path = "doc/usage.rs"]
#[allow(non_snake_case)]
pub mod _Usage;

#[path = "doc/keywords.rs"]
#[allow(non_snake_case)]
pub mod __Keywords;

pub mod cli;
pub mod lang;
pub mod prog;
