use tracing::{debug, trace};

use crate::diagnostics::Diagnostics;
use crate::token::{Position, Token, TokenKind};

/// Text carried by the end-of-input token.
pub const END_OF_INPUT_TEXT: &str = "\0";

/// Outcome of a single extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<'src> {
    /// A token was recognized; keep scanning.
    Emit(Token<'src>),
    /// Input was consumed without producing a token (an error was recorded).
    Skip,
    /// The end-of-input token; scanning is finished.
    End(Token<'src>),
}

/// Jera source lexer.
///
/// Single pass over the source with one character of lookahead. Tracks
/// the byte offset, line and column of the cursor, and collects
/// diagnostics instead of stopping at the first malformed character.
///
/// A lexer is consumed by [`Lexer::tokenize`]; create one per source.
pub struct Lexer<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    column: usize,
    current: char,
    diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned on the first character of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            current: source.chars().next().unwrap_or('\0'),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// On success the last token is always [`TokenKind::EndOfInput`]. If any
    /// diagnostic was recorded the tokens are dropped and every report is
    /// returned instead, in source order.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, Diagnostics> {
        let mut tokens = Vec::new();

        loop {
            match self.next_step() {
                Step::Skip => continue,
                Step::Emit(token) => tokens.push(token),
                Step::End(token) => {
                    tokens.push(token);
                    break;
                }
            }
        }

        debug!(
            tokens = tokens.len(),
            diagnostics = self.diagnostics.len(),
            "finished lexing"
        );

        if !self.diagnostics.ok() {
            return Err(self.diagnostics);
        }
        Ok(tokens)
    }

    /// Skip insignificant input, then try to recognize one token.
    fn next_step(&mut self) -> Step<'src> {
        self.skip_whitespace();

        let position = self.position();

        if let Some(kind) = TokenKind::punctuation(self.current) {
            let token = if kind == TokenKind::EndOfInput {
                Token::new(kind, END_OF_INPUT_TEXT, position)
            } else {
                let end = self.offset + self.current.len_utf8();
                Token::new(kind, &self.source[self.offset..end], position)
            };
            self.advance();
            trace!(kind = %token.kind, offset = position.offset, "token");
            return if token.is_end() {
                Step::End(token)
            } else {
                Step::Emit(token)
            };
        }

        if self.current.is_ascii_digit() {
            return self.lex_number();
        }

        if self.current.is_alphabetic() || self.current == '_' {
            return self.lex_identifier();
        }

        let (ch, code) = (self.current, u32::from(self.current));
        self.error(format!("Unexpected character '{ch}' (U+{code:04X})"));
        trace!(offset = position.offset, "skipping unexpected character");
        self.advance();
        Step::Skip
    }

    // --- Lexemes ---

    /// Lex `digits` or `digits.digits`. A dot must be followed by a digit.
    fn lex_number(&mut self) -> Step<'src> {
        let start = self.position();

        self.skip_digits();

        if self.current == '.' {
            self.advance();
            if !self.current.is_ascii_digit() {
                let (ch, code) = (self.current, u32::from(self.current));
                self.error(format!("Unexpected character '{ch}' (U+{code:04X}) in number"));
                return Step::Skip;
            }
            self.skip_digits();
        }

        let text = &self.source[start.offset..self.offset];
        trace!(text, offset = start.offset, "number");
        Step::Emit(Token::new(TokenKind::Number, text, start))
    }

    /// Lex an identifier, promoting it to a keyword kind when it is one.
    fn lex_identifier(&mut self) -> Step<'src> {
        let start = self.position();

        while self.current.is_alphanumeric() || self.current == '_' {
            self.advance();
        }

        let text = &self.source[start.offset..self.offset];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        trace!(%kind, text, offset = start.offset, "identifier");
        Step::Emit(Token::new(kind, text, start))
    }

    fn skip_digits(&mut self) {
        while self.current.is_ascii_digit() {
            self.advance();
        }
    }

    // --- Whitespace and comments ---

    /// Consume newlines, blanks and comments until a full pass consumes nothing.
    fn skip_whitespace(&mut self) {
        loop {
            let before = self.offset;

            while let Some(length) = self.newline_length() {
                self.advance_newline(length);
            }

            while self.current == ' ' || self.current == '\t' {
                self.advance();
            }

            while self.current == '/' && self.peek() == '/' {
                self.skip_line_comment();
            }

            while self.current == '/' && self.peek() == '*' {
                self.skip_block_comment();
            }

            if self.offset == before {
                break;
            }
        }
    }

    /// Skip a `//` comment together with the newline that ends it.
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() {
            if let Some(length) = self.newline_length() {
                self.advance_newline(length);
                return;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment. The search for `*/` starts on the opener,
    /// so `/*/` closes itself. An unterminated comment runs to the end of the source.
    fn skip_block_comment(&mut self) {
        while !self.is_at_end() {
            if self.current == '*' && self.peek() == '/' {
                self.advance_by(2);
                return;
            }
            match self.newline_length() {
                Some(length) => self.advance_newline(length),
                None => self.advance(),
            }
        }
    }

    /// Length of the newline at the cursor: 2 for `\r\n`, 1 for `\n`.
    fn newline_length(&self) -> Option<usize> {
        match (self.current, self.peek()) {
            ('\r', '\n') => Some(2),
            ('\n', _) => Some(1),
            _ => None,
        }
    }

    // --- Helpers ---

    fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    fn char_at(&self, offset: usize) -> char {
        self.source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    fn peek(&self) -> char {
        self.char_at(self.offset + self.current.len_utf8())
    }

    fn advance(&mut self) {
        self.offset += self.current.len_utf8();
        self.column += 1;
        self.current = self.char_at(self.offset);
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn advance_newline(&mut self, length: usize) {
        self.advance_by(length);
        self.line += 1;
        self.column = 1;
    }

    fn error(&mut self, message: String) {
        let position = self.position();
        self.diagnostics.error(message, position);
    }
}
