//! Jera Lexer
//!
//! Turns Jera source text into a stream of tokens.
//! Handles operators and punctuation, decimal numbers, identifiers and
//! keywords, `//` and `/* */` comments, and both `\n` and `\r\n` line endings.
//! Malformed input does not stop the scan: every unexpected character is
//! reported, and the run fails with the full list of diagnostics.
//!
//! # Example
//!
//! ```
//! use jera_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("").unwrap();
//! assert_eq!(tokens.len(), 1); // Just end of input
//! assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
//!
//! let diagnostics = tokenize("1 $ 2").unwrap_err();
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod diagnostics;
pub mod scanner;
pub mod token;

pub use diagnostics::{Diagnostics, Report, ReportLevel};
pub use scanner::Lexer;
pub use token::{Position, Token, TokenKind};

/// Tokenize `source` with a fresh [`Lexer`].
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, Diagnostics> {
    Lexer::new(source).tokenize()
}
