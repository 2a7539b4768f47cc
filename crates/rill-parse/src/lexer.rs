use crate::token::{Token, TokenKind};
use rill_ast::pos::Pos;

/// A lexical error carrying the invalid token that was formed, so a
/// caller that wants to press on past the bad input still can.
#[derive(Debug)]
pub struct LexError {
    pub token: Token,
    message: String,
}

impl LexError {
    fn new(token: Token, message: String) -> Self {
        Self { token, message }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\nline:{}, pos {}",
            self.message, self.token.pos.line, self.token.pos.col
        )
    }
}

impl std::error::Error for LexError {}

/// Produces tokens on demand from a character buffer, tracking line and
/// column. Supports rewinding to a previously emitted token.
pub struct Lexer {
    input: Vec<char>,
    /// Absolute index of the current character
    pos: usize,
    curr: char,
    next: char,
    line: u32,
    col: u32,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut l = Lexer {
            input: input.chars().collect(),
            pos: 0,
            curr: '\0',
            next: '\0',
            line: 1,
            col: 1,
        };
        l.fetch(1, 1);
        l
    }

    fn fetch(&mut self, line: u32, col: u32) {
        self.curr = self.input.get(self.pos).copied().unwrap_or('\0');
        self.next = self.input.get(self.pos + 1).copied().unwrap_or('\0');
        self.line = line;
        self.col = col;
    }

    fn read(&mut self) {
        if self.curr == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
        self.curr = self.next;
        self.next = self.input.get(self.pos + 1).copied().unwrap_or('\0');
    }

    /// Reposition so the next `next_token` re-emits from the given token,
    /// restoring line and column.
    pub fn rewind(&mut self, token: &Token) {
        self.pos = token.pos.offset as usize;
        self.fetch(token.pos.line, token.pos.col);
    }

    /// Current source coordinates.
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.col)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_spaces();
        let pos = Pos {
            line: self.line,
            col: self.col,
            offset: self.pos as u32,
        };

        let single = match self.curr {
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            '?' => Some(TokenKind::Question),
            '.' => Some(TokenKind::Dot),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '<' => Some(TokenKind::Lt),
            '>' => Some(TokenKind::Gt),
            _ => None,
        };
        if let Some(kind) = single {
            let token = Token {
                kind,
                literal: self.curr.to_string(),
                pos,
            };
            self.read();
            return Ok(token);
        }

        let token = match self.curr {
            '\n' => Token {
                kind: TokenKind::Eol,
                literal: String::new(),
                pos,
            },
            '\0' => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    literal: String::new(),
                    pos,
                })
            }
            '=' => {
                if self.next == '=' {
                    self.read();
                    Token {
                        kind: TokenKind::Eq,
                        literal: "==".to_string(),
                        pos,
                    }
                } else {
                    Token {
                        kind: TokenKind::Assign,
                        literal: "=".to_string(),
                        pos,
                    }
                }
            }
            '!' => {
                if self.next == '=' {
                    self.read();
                    Token {
                        kind: TokenKind::NotEq,
                        literal: "!=".to_string(),
                        pos,
                    }
                } else {
                    Token {
                        kind: TokenKind::Not,
                        literal: "!".to_string(),
                        pos,
                    }
                }
            }
            '&' => {
                if self.next == '&' {
                    self.read();
                    Token {
                        kind: TokenKind::And,
                        literal: "&&".to_string(),
                        pos,
                    }
                } else {
                    return Err(self.invalid(pos, "Unexpected one `&`. Did you mean '&&'?"));
                }
            }
            '|' => {
                if self.next == '|' {
                    self.read();
                    Token {
                        kind: TokenKind::Or,
                        literal: "||".to_string(),
                        pos,
                    }
                } else {
                    return Err(self.invalid(pos, "Unexpected one `|`. Did you mean '||'?"));
                }
            }
            '/' => {
                if self.next == '/' {
                    self.consume_comment();
                    return self.next_token();
                }
                Token {
                    kind: TokenKind::Slash,
                    literal: "/".to_string(),
                    pos,
                }
            }
            c if c.is_ascii_digit() => {
                let (literal, is_int) = self.read_number();
                let kind = if is_int {
                    TokenKind::NumInt
                } else {
                    TokenKind::NumFloat
                };
                Token { kind, literal, pos }
            }
            c if c.is_alphabetic() => {
                let literal = self.read_word();
                Token {
                    kind: TokenKind::lookup_word(&literal),
                    literal,
                    pos,
                }
            }
            c => {
                return Err(self.invalid(pos, &format!("Unexpected symbol: '{c}'")));
            }
        };
        self.read();
        Ok(token)
    }

    /// Form the invalid token, step past the offending character, and
    /// build the positioned error.
    fn invalid(&mut self, pos: Pos, message: &str) -> LexError {
        let token = Token {
            kind: TokenKind::Invalid,
            literal: self.curr.to_string(),
            pos,
        };
        self.read();
        LexError::new(token, message.to_string())
    }

    fn skip_spaces(&mut self) {
        while self.curr == ' ' {
            self.read();
        }
    }

    /// Consume a `//` comment up to (not including) the next newline.
    fn consume_comment(&mut self) {
        while self.curr != '\n' && self.curr != '\0' {
            self.read();
        }
    }

    /// Read a run of digits, optionally followed by `.` and more digits.
    /// Any `.` promotes the number to float; `1.` is a valid float.
    /// Leaves `curr` on the last consumed character.
    fn read_number(&mut self) -> (String, bool) {
        let mut is_int = true;
        let mut result = String::from(self.curr);
        while self.next.is_ascii_digit() {
            result.push(self.next);
            self.read();
        }
        if self.next == '.' {
            is_int = false;
            self.read();
            result.push('.');
            while self.next.is_ascii_digit() {
                result.push(self.next);
                self.read();
            }
        }
        (result, is_int)
    }

    /// Read a word: a Unicode letter followed by letters and digits.
    fn read_word(&mut self) -> String {
        let mut result = String::from(self.curr);
        while self.next.is_alphabetic() || self.next.is_ascii_digit() {
            result.push(self.next);
            self.read();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut l = Lexer::new(src);
        let mut out = Vec::new();
        loop {
            let t = l.next_token().unwrap();
            let k = t.kind;
            out.push(k);
            if k == TokenKind::Eof {
                break;
            }
        }
        out
    }

    #[test]
    fn punctuation_and_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds("= == ! != && || + - * / < > ( ) { } [ ] , : ? ."),
            vec![
                Assign, Eq, Not, NotEq, And, Or, Plus, Minus, Star, Slash, Lt, Gt, LParen, RParen,
                LBrace, RBrace, LBracket, RBracket, Comma, Colon, Question, Dot, Eof
            ]
        );
    }

    #[test]
    fn numbers_int_and_float() {
        let mut l = Lexer::new("42 3.14 1.");
        let a = l.next_token().unwrap();
        assert_eq!((a.kind, a.literal.as_str()), (TokenKind::NumInt, "42"));
        let b = l.next_token().unwrap();
        assert_eq!((b.kind, b.literal.as_str()), (TokenKind::NumFloat, "3.14"));
        let c = l.next_token().unwrap();
        assert_eq!((c.kind, c.literal.as_str()), (TokenKind::NumFloat, "1."));
    }

    #[test]
    fn keywords_and_idents() {
        use TokenKind::*;
        assert_eq!(
            kinds("fn return void int float true false if else struct enum switch case default abc"),
            vec![
                Function, Return, Type, Type, Type, True, False, If, Else, Struct, Enum, Switch,
                Case, Default, Ident, Eof
            ]
        );
    }

    #[test]
    fn newline_is_significant_and_comments_are_skipped() {
        use TokenKind::*;
        assert_eq!(
            kinds("a = 1 // trailing comment\nb = 2"),
            vec![Ident, Assign, NumInt, Eol, Ident, Assign, NumInt, Eof]
        );
    }

    #[test]
    fn comment_at_end_of_input() {
        assert_eq!(kinds("// only a comment"), vec![TokenKind::Eof]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let mut l = Lexer::new("a = 1\nbc = 2");
        let a = l.next_token().unwrap();
        assert_eq!((a.pos.line, a.pos.col), (1, 1));
        let eq = l.next_token().unwrap();
        assert_eq!((eq.pos.line, eq.pos.col), (1, 3));
        let one = l.next_token().unwrap();
        assert_eq!((one.pos.line, one.pos.col), (1, 5));
        let eol = l.next_token().unwrap();
        assert_eq!(eol.kind, TokenKind::Eol);
        let bc = l.next_token().unwrap();
        assert_eq!((bc.pos.line, bc.pos.col), (2, 1));
        assert_eq!(bc.literal, "bc");
    }

    #[test]
    fn position_reports_current_coordinates() {
        let mut l = Lexer::new("a = 1\nb = 2");
        assert_eq!(l.position(), (1, 1));
        l.next_token().unwrap();
        l.next_token().unwrap();
        l.next_token().unwrap();
        l.next_token().unwrap();
        assert_eq!(l.position().0, 2);
    }

    #[test]
    fn rewind_re_emits_from_the_given_token() {
        let mut l = Lexer::new("a = 1");
        let a = l.next_token().unwrap();
        let eq = l.next_token().unwrap();
        assert_eq!(eq.kind, TokenKind::Assign);
        l.rewind(&a);
        let again = l.next_token().unwrap();
        assert_eq!(again.kind, TokenKind::Ident);
        assert_eq!(again.literal, "a");
        assert_eq!((again.pos.line, again.pos.col), (1, 1));
    }

    #[test]
    fn lone_ampersand_is_an_error_with_hint() {
        let mut l = Lexer::new("a & b");
        l.next_token().unwrap();
        let err = l.next_token().unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Invalid);
        assert_eq!(err.token.literal, "&");
        let msg = err.to_string();
        assert!(msg.contains("Did you mean '&&'?"), "{msg}");
        assert!(msg.contains("line:1, pos 3"), "{msg}");
        // the caller may continue past the bad character
        let b = l.next_token().unwrap();
        assert_eq!(b.literal, "b");
    }

    #[test]
    fn unexpected_symbol_is_positioned() {
        let mut l = Lexer::new("a = #");
        l.next_token().unwrap();
        l.next_token().unwrap();
        let err = l.next_token().unwrap_err().to_string();
        assert!(err.contains("Unexpected symbol: '#'"), "{err}");
        assert!(err.contains("line:1, pos 5"), "{err}");
    }

    #[test]
    fn empty_input_yields_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn unicode_letters_form_words() {
        let mut l = Lexer::new("цвет = 1");
        let w = l.next_token().unwrap();
        assert_eq!(w.kind, TokenKind::Ident);
        assert_eq!(w.literal, "цвет");
    }
}
