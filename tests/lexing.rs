//! Black-box tests of the lexing surface, including property-based tests
//! for the stream invariants that hold over all inputs.

use proptest::prelude::*;

use rust_pika::pika::token::lexer::{tokenize, Lexer};
use rust_pika::pika::token::tokens::TokenKind;

#[test]
fn declaration_through_the_public_surface() {
    let kinds: Vec<TokenKind> = tokenize("let five = 5;")
        .into_iter()
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LetKeyword,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Illegal,
            TokenKind::Semicolon,
        ]
    );
}

proptest! {
    /// Whitespace carries no token, so an input of nothing but whitespace
    /// produces an empty stream.
    #[test]
    fn whitespace_only_produces_no_tokens(source in "[ \t\r\n]{0,64}") {
        prop_assert!(tokenize(&source).is_empty());
    }

    /// Scanning is total: whatever the input, the lexer reaches EndOfInput
    /// and then keeps returning it with empty text forever.
    #[test]
    fn every_input_terminates_and_stays_terminated(source in ".{0,64}") {
        let byte_len = source.len();
        let mut lexer = Lexer::new(source);

        // Each produced token consumes at least one byte, so the stream
        // cannot be longer than the input.
        let mut produced = 0_usize;
        while lexer.next_token().kind != TokenKind::EndOfInput {
            produced += 1;
            prop_assert!(produced <= byte_len);
        }

        for _ in 0..3 {
            let terminal = lexer.next_token();
            prop_assert_eq!(terminal.kind, TokenKind::EndOfInput);
            prop_assert_eq!(terminal.text, "");
        }
    }

    /// Every token whose kind has a canonical spelling carries exactly that
    /// spelling as its text.
    #[test]
    fn fixed_kinds_carry_their_canonical_text(source in ".{0,64}") {
        for token in tokenize(&source) {
            if let Some(spelling) = token.kind.canonical() {
                prop_assert_eq!(token.text, spelling);
            }
        }
    }

    /// Over symbol-and-whitespace inputs the token count is exactly the
    /// number of non-whitespace characters, since every symbol is a
    /// one-character token and whitespace contributes nothing.
    #[test]
    fn one_token_per_symbol(source in r"[=+,;(){} \t\r\n]{0,64}") {
        let symbols = source
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .count();
        prop_assert_eq!(tokenize(&source).len(), symbols);
    }
}
