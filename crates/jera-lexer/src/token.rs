use std::fmt;

use serde::Serialize;

/// A location in source text, attached to every token and diagnostic.
///
/// `offset` is a 0-based byte offset into the source; `line` and `column`
/// are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Token classification for Jera source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // End of input
    EndOfInput,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Literals
    Identifier,
    Number,

    // Keywords
    Print,
    If,
    IntType,

    // Punctuation
    Semicolon,
    Equals,
    Colon,
}

impl TokenKind {
    /// Name used by the token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Print => "Print",
            TokenKind::If => "If",
            TokenKind::IntType => "IntType",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Equals => "Equals",
            TokenKind::Colon => "Colon",
        }
    }

    /// Look up a keyword, returning `None` for plain identifiers.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "print" => Some(TokenKind::Print),
            "if" => Some(TokenKind::If),
            "int" => Some(TokenKind::IntType),
            _ => None,
        }
    }

    /// Single-character operators and punctuation. `'\0'` is end of input.
    pub fn punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '=' => Some(TokenKind::Equals),
            ':' => Some(TokenKind::Colon),
            ';' => Some(TokenKind::Semicolon),
            '\0' => Some(TokenKind::EndOfInput),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the Jera lexer.
///
/// `text` borrows the lexeme straight out of the source, except for the
/// end-of-input token whose text is always `"\0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub position: Position,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' ({}) ({}.{})",
            self.kind, self.text, self.position.offset, self.position.line, self.position.column
        )
    }
}
