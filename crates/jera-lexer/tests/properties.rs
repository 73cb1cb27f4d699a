//! Property tests for the lexer's whole-run guarantees.

use jera_lexer::{tokenize, Position, TokenKind};
use proptest::prelude::*;

/// Sources built from fragments that stress comments, newlines and numbers.
fn tricky_source() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("/"),
            Just("*"),
            Just("//"),
            Just("/*"),
            Just("*/"),
            Just("\n"),
            Just("\r"),
            Just("\r\n"),
            Just(" "),
            Just("\t"),
            Just("1"),
            Just("."),
            Just("x"),
            Just("int"),
            Just(";"),
            Just("$"),
            Just("é"),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn arbitrary_input_terminates_with_end_of_input(source in any::<String>()) {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_end()).count(), 1);
        }
    }

    #[test]
    fn tricky_input_terminates_with_end_of_input(source in tricky_source()) {
        match tokenize(&source) {
            Ok(tokens) => {
                prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
            }
            Err(diagnostics) => {
                prop_assert!(!diagnostics.ok());
            }
        }
    }

    #[test]
    fn retokenizing_gives_identical_result(source in tricky_source()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn token_text_is_a_slice_of_the_source(source in tricky_source()) {
        if let Ok(tokens) = tokenize(&source) {
            for token in tokens.iter().filter(|t| !t.is_end()) {
                let start = token.position.offset;
                prop_assert_eq!(&source[start..start + token.text.len()], token.text);
            }
        }
    }

    #[test]
    fn numbers_are_single_tokens(source in "[0-9]{1,8}(\\.[0-9]{1,8})?") {
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text, source.as_str());
        prop_assert_eq!(tokens[0].position, Position::new(0, 1, 1));
    }

    #[test]
    fn dot_without_fraction_reports_once(digits in "[0-9]{1,8}") {
        let source = format!("{digits}.");
        let diagnostics = tokenize(&source).unwrap_err();
        prop_assert_eq!(diagnostics.len(), 1);
        let report = &diagnostics.reports()[0];
        prop_assert!(report.message.ends_with("in number"));
        prop_assert_eq!(report.position, Position::new(source.len(), 1, source.len() + 1));
    }

    #[test]
    fn words_are_keywords_or_identifiers(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let tokens = tokenize(&word).unwrap();
        let expected = match word.as_str() {
            "print" => TokenKind::Print,
            "if" => TokenKind::If,
            "int" => TokenKind::IntType,
            _ => TokenKind::Identifier,
        };
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(tokens[0].text, word.as_str());
    }

    #[test]
    fn newlines_advance_exactly_one_line(
        first in "[a-z]{1,5}",
        newline in prop_oneof![Just("\n"), Just("\r\n")],
        second in "[a-z]{1,5}",
    ) {
        let source = format!("{first}{newline}{second}");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[1].position.line, 2);
        prop_assert_eq!(tokens[1].position.column, 1);
        prop_assert_eq!(tokens[1].position.offset, first.len() + newline.len());
    }

    #[test]
    fn line_comment_moves_to_next_line(
        indent in " {0,4}",
        comment in "[a-z ]{0,20}",
    ) {
        let source = format!("{indent}//{comment}\nx");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].position.line, 2);
    }
}
