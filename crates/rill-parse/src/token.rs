use rill_ast::pos::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // structural
    Eol,
    Eof,
    /// Unrecognized input; the literal holds the offending character.
    Invalid,
    // punctuation
    Assign,
    Comma,
    Dot,
    Colon,
    Question,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    // arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,
    // comparison / logical operators
    Lt,
    Gt,
    Eq,
    NotEq,
    Not,
    And,
    Or,
    // literal classes
    NumInt,
    NumFloat,
    // keywords
    Function,
    Return,
    True,
    False,
    If,
    Else,
    Struct,
    Enum,
    Switch,
    Case,
    Default,
    /// Collapsed type hint: `void`, `int`, `float`. User types arrive as
    /// `Ident`.
    Type,
    Ident,
}

impl TokenKind {
    /// Keyword table lookup for a finished word.
    pub fn lookup_word(word: &str) -> TokenKind {
        match word {
            "fn" => TokenKind::Function,
            "return" => TokenKind::Return,
            "void" | "int" | "float" => TokenKind::Type,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "struct" => TokenKind::Struct,
            "enum" => TokenKind::Enum,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            _ => TokenKind::Ident,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::Eol => "EOL",
            TokenKind::Eof => "EOF",
            TokenKind::Invalid => "invalid",
            TokenKind::Assign => "=",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::NumInt => "int_num",
            TokenKind::NumFloat => "float_num",
            TokenKind::Function => "fn",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Struct => "struct",
            TokenKind::Enum => "enum",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Type => "type",
            TokenKind::Ident => "ident",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub pos: Pos,
}

/// Render a kind list for "expected one of (…)" diagnostics.
pub fn tokens_string(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
