use super::LineNumber;

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// A single word scanned out of a line of BASIC text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    /// Letters, digits, and dots, starting with a letter. Uppercased.
    Ident(String),
    /// Digits and dots, starting with a digit.
    Number(String),
    /// A quoted string including both quote characters. An unterminated
    /// string runs to the end of the line.
    Str(String),
    /// Any other single character.
    Punct(char),
}

impl Word {
    /// True when the word could stand as a line number.
    pub fn is_line_number(&self) -> bool {
        match self {
            Word::Number(s) => !s.contains('.'),
            _ => false,
        }
    }

    pub fn as_line_number(&self) -> Option<LineNumber> {
        match self {
            Word::Number(s) if !s.contains('.') => s.parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Ident(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Str(s) => write!(f, "{}", s),
            Punct(c) => write!(f, "{}", c),
        }
    }
}

/// Scans words out of a mutable line buffer, one at a time, tracking
/// the span of the most recent word so it can be replaced in place.
///
/// Replacing a word splices new text over its span and resyncs the
/// cursor, so scanning resumes right after the replacement even when
/// the new text is longer or shorter than the old.
#[derive(Debug)]
pub struct Scanner<'a> {
    buf: &'a mut String,
    start: usize,
    len: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a mut String) -> Scanner<'a> {
        Scanner {
            buf,
            start: 0,
            len: 0,
        }
    }

    /// Advances past the previous word and any blanks, then scans one
    /// word. Returns `None` at the end of the line.
    pub fn next_word(&mut self) -> Option<Word> {
        self.start += self.len;
        self.len = 0;
        let rest = &self.buf[self.start..];
        let trimmed = rest.trim_start_matches(is_blank);
        self.start += rest.len() - trimmed.len();
        let (word, len) = scan_word(trimmed)?;
        self.len = len;
        Some(word)
    }

    /// Re-derives the most recent word from the buffer without
    /// advancing.
    pub fn current_word(&self) -> Option<Word> {
        if self.len == 0 {
            return None;
        }
        scan_word(&self.buf[self.start..self.start + self.len]).map(|(word, _)| word)
    }

    /// Splices `text` over the span of the most recent word.
    pub fn replace_current_word(&mut self, text: &str) {
        debug_assert!(self.len > 0);
        self.buf.replace_range(self.start..self.start + self.len, text);
        self.len = text.len();
    }
}

fn scan_word(s: &str) -> Option<(Word, usize)> {
    let first = s.chars().next()?;
    if first.is_ascii_alphabetic() {
        let len = s.find(|c| !is_ident_char(c)).unwrap_or(s.len());
        Some((Word::Ident(s[..len].to_ascii_uppercase()), len))
    } else if first.is_ascii_digit() {
        let len = s.find(|c| !is_number_char(c)).unwrap_or(s.len());
        Some((Word::Number(s[..len].to_string()), len))
    } else if first == '"' {
        let len = match s[1..].find('"') {
            Some(i) => i + 2,
            None => s.len(),
        };
        Some((Word::Str(s[..len].to_string()), len))
    } else {
        Some((Word::Punct(first), first.len_utf8()))
    }
}
