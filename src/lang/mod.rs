/*!
# Language Module

This module provides word scanning and keyword classification for
BASIC program text.

*/

mod error;
mod scan;
mod token;

pub use error::Error;
pub use error::Result;
pub use scan::Scanner;
pub use scan::Word;
pub use token::Token;

pub type LineNumber = u32;
