use super::LineMap;
use crate::lang::{Error, LineNumber, Result, Scanner, Token, Word};

fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

/// One line of program text: an optional leading line number and the
/// statement text after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: Option<LineNumber>,
    text: String,
}

impl Line {
    /// Parses a raw line. A leading run of digits is the line number;
    /// one space after it separates it from the statement text. A line
    /// numbered 0 counts as unnumbered and keeps its text whole.
    pub fn new(line: &str) -> Line {
        let line = line.trim_end_matches(is_space);
        let rest = line.trim_start_matches(is_space);
        let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let number = if len == 0 {
            0
        } else {
            rest[..len].parse::<LineNumber>().unwrap_or(LineNumber::MAX)
        };
        if number == 0 {
            return Line {
                number: None,
                text: line.to_string(),
            };
        }
        let mut text = &rest[len..];
        if let Some(stripped) = text.strip_prefix(' ') {
            text = stripped;
        }
        Line {
            number: Some(number),
            text: text.to_string(),
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gives an unnumbered line its number. A blank line becomes a
    /// comment line so the number has something to hold on to.
    pub fn set_number(&mut self, number: LineNumber) {
        if self.text.is_empty() {
            self.text.push('\'');
        }
        self.number = Some(number);
    }

    /// Returns this line renumbered under `map`, with every line
    /// number reference in the statement text rewritten to follow.
    pub fn renum(&self, map: &LineMap, force: bool) -> Result<Line> {
        let number = match self.number {
            Some(old) => match map.get(old) {
                Some(new) => Some(new),
                None => return Err(Error::Internal { number: old }),
            },
            None => None,
        };
        let mut text = self.text.clone();
        self.rewrite(&mut text, map, force)?;
        Ok(Line { number, text })
    }

    /// Walks the statement text word by word, deciding from keyword
    /// context which numeric words are line number references, and
    /// substitutes their mapped numbers in place.
    fn rewrite(&self, text: &mut String, map: &LineMap, force: bool) -> Result<()> {
        let mut scan = Scanner::new(text);
        let mut went = false;
        let mut range = false;
        let mut gosub_goto = false;
        let mut expect_lineno = false;
        let mut expect_label = false;
        while let Some(word) = scan.next_word() {
            if expect_lineno && word.is_line_number() {
                match word.as_line_number().and_then(|target| map.get(target)) {
                    Some(new) => scan.replace_current_word(&new.to_string()),
                    None if force => {}
                    None => {
                        return Err(Error::UndefinedLine {
                            target: word.to_string(),
                            line: self.number.unwrap_or(0),
                        })
                    }
                }
            }
            let was_label = expect_label;
            expect_lineno = false;
            expect_label = false;
            let token = Token::from_word(&word);
            match token {
                Token::Go => {}
                Token::To | Token::Sub => {
                    if went {
                        expect_lineno = true;
                        gosub_goto = true;
                    }
                }
                Token::Goto | Token::Gosub => {
                    expect_lineno = true;
                    gosub_goto = true;
                }
                Token::Resume
                | Token::Edit
                | Token::Run
                | Token::Restore
                | Token::Return
                | Token::Auto
                | Token::Then
                | Token::Else => {
                    expect_lineno = true;
                    gosub_goto = false;
                }
                Token::Delete | Token::List | Token::Llist => {
                    expect_lineno = true;
                    range = true;
                    gosub_goto = false;
                }
                Token::Minus => {
                    if range {
                        expect_lineno = true;
                    }
                }
                Token::Comment | Token::Rem => break,
                Token::Comma => {
                    if gosub_goto {
                        expect_lineno = true;
                    }
                }
                Token::Colon => {
                    gosub_goto = false;
                    range = false;
                }
                Token::Asterisk => {
                    expect_label = true;
                }
                Token::Other => {
                    if !word.is_line_number() && !was_label {
                        gosub_goto = false;
                    }
                }
            }
            went = token == Token::Go;
            let holds_range = matches!(
                token,
                Token::Delete | Token::List | Token::Llist | Token::Minus
            );
            if range && !holds_range && !word.is_line_number() {
                range = false;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered() {
        let l = Line::new("100 PRINT \"HI\"");
        assert_eq!(l.number(), Some(100));
        assert_eq!(l.text(), "PRINT \"HI\"");
        assert_eq!(&l.to_string(), "100 PRINT \"HI\"");
    }

    #[test]
    fn test_unnumbered() {
        let l = Line::new("PRINT \"HI\"");
        assert_eq!(l.number(), None);
        assert_eq!(&l.to_string(), "PRINT \"HI\"");
    }

    #[test]
    fn test_zero_is_unnumbered() {
        let l = Line::new("0 PRINT");
        assert_eq!(l.number(), None);
        assert_eq!(l.text(), "0 PRINT");
    }

    #[test]
    fn test_one_space_separator() {
        let l = Line::new("10  PRINT");
        assert_eq!(l.number(), Some(10));
        assert_eq!(l.text(), " PRINT");
    }

    #[test]
    fn test_leading_blanks() {
        let l = Line::new("  10 PRINT");
        assert_eq!(l.number(), Some(10));
        assert_eq!(l.text(), "PRINT");
        let l = Line::new("  PRINT");
        assert_eq!(l.text(), "  PRINT");
    }

    #[test]
    fn test_crlf() {
        let l = Line::new("10 LIST\r");
        assert_eq!(l.number(), Some(10));
        assert_eq!(l.text(), "LIST");
    }

    #[test]
    fn test_set_number_blank() {
        let mut l = Line::new("");
        l.set_number(10);
        assert_eq!(&l.to_string(), "10 '");
    }
}
