use super::Word;

/// Classification of a word against the keywords and punctuation that
/// take part in line number flow. Everything else is `Other`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Goto,
    Gosub,
    Go,
    To,
    Sub,
    Then,
    Else,
    Resume,
    Restore,
    Return,
    Run,
    Edit,
    Auto,
    List,
    Llist,
    Delete,
    Rem,
    Comment,
    Comma,
    Colon,
    Minus,
    Asterisk,
    Other,
}

impl Token {
    pub fn from_word(word: &Word) -> Token {
        match word {
            Word::Ident(s) => match s.as_str() {
                "GOTO" => Token::Goto,
                "GOSUB" => Token::Gosub,
                "GO" => Token::Go,
                "TO" => Token::To,
                "SUB" => Token::Sub,
                "THEN" => Token::Then,
                "ELSE" => Token::Else,
                "RESUME" => Token::Resume,
                "RESTORE" => Token::Restore,
                "RETURN" => Token::Return,
                "RUN" => Token::Run,
                "EDIT" => Token::Edit,
                "AUTO" => Token::Auto,
                "LIST" => Token::List,
                "LLIST" => Token::Llist,
                "DELETE" => Token::Delete,
                "REM" => Token::Rem,
                _ => Token::Other,
            },
            Word::Punct('\'') => Token::Comment,
            Word::Punct(',') => Token::Comma,
            Word::Punct(':') => Token::Colon,
            Word::Punct('-') => Token::Minus,
            Word::Punct('*') => Token::Asterisk,
            _ => Token::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word() {
        let t = Token::from_word(&Word::Ident("REM".to_string()));
        assert_eq!(t, Token::Rem);
        let t = Token::from_word(&Word::Ident("PICKLES".to_string()));
        assert_eq!(t, Token::Other);
    }

    #[test]
    fn test_from_punct() {
        let t = Token::from_word(&Word::Punct('\''));
        assert_eq!(t, Token::Comment);
        let t = Token::from_word(&Word::Punct(';'));
        assert_eq!(t, Token::Other);
    }

    #[test]
    fn test_number_is_other() {
        let t = Token::from_word(&Word::Number("100".to_string()));
        assert_eq!(t, Token::Other);
    }
}
