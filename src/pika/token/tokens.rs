//! Data types representing tokens available in the Pika language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::pika::util::map;

/// An enum covering all possible kinds a token can take on.
///
/// The set is closed on purpose: consumers are expected to match on it
/// exhaustively, and growing it (say, once integer literals are actually
/// produced) is a breaking change that every consumer must see.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenKind {
    /// A single character the lexer cannot classify under current rules.
    Illegal,
    /// End of Input. Returned forever once the input is exhausted.
    EndOfInput,

    // Identifiers and literals
    /// A custom identifier, e.g. `five`.
    Identifier,
    /// An integer literal. Reserved: the lexer does not produce this yet,
    /// digits currently fall through to [`Illegal`](TokenKind::Illegal).
    IntegerLiteral,

    // Operators
    /// `"="`
    Assign,
    /// `"+"`
    Plus,

    // Delimiters
    /// `","`
    Comma,
    /// `";"`
    Semicolon,

    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    // Keywords
    /// `"fn"`
    FunctionKeyword,
    /// `"let"`
    LetKeyword,
}

impl TokenKind {
    /// The canonical spelling of this kind, for the kinds that only have a
    /// singular possible representation in source code.
    ///
    /// Data-carrying kinds ([`Illegal`](TokenKind::Illegal),
    /// [`Identifier`](TokenKind::Identifier),
    /// [`IntegerLiteral`](TokenKind::IntegerLiteral)) have no canonical
    /// spelling and yield [None]; their text lives on the [Token] itself.
    #[must_use]
    pub const fn canonical(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::FunctionKeyword => Some("fn"),
            TokenKind::LetKeyword => Some("let"),
            TokenKind::EndOfInput => Some(""),
            TokenKind::Illegal | TokenKind::Identifier | TokenKind::IntegerLiteral => None,
        }
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    map! {
        "fn"  => TokenKind::FunctionKeyword,
        "let" => TokenKind::LetKeyword,
    }
});

/// Classifies a scanned identifier: the matching keyword kind if `text` is
/// a reserved word, [`Identifier`](TokenKind::Identifier) otherwise.
///
/// Exact, case-sensitive matches only - `"letx"` and `"Let"` are ordinary
/// identifiers, as is the empty string.
#[must_use]
pub fn lookup_identifier(text: &str) -> TokenKind {
    KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier)
}

/// A token pairs its kind with the exact slice of source text that produced
/// it, copied out so it does not borrow from the input buffer.
///
/// Invariants upheld by the lexer: fixed-symbol kinds carry their canonical
/// one-character spelling, identifier-shaped kinds carry the maximal run of
/// matched letters, and [`EndOfInput`](TokenKind::EndOfInput) carries `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a token is its kind plus its text - anything more is a new type."
)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// Text of this token, as it appeared in the source code.
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{:?} {:?}>", self.kind, self.text)
    }
}

#[cfg(test)]
mod test {
    use super::{lookup_identifier, Token, TokenKind};

    #[test]
    fn keywords_take_precedence() {
        assert_eq!(lookup_identifier("fn"), TokenKind::FunctionKeyword);
        assert_eq!(lookup_identifier("let"), TokenKind::LetKeyword);
    }

    #[test]
    fn near_keywords_are_identifiers() {
        assert_eq!(lookup_identifier("letx"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("le"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("FN"), TokenKind::Identifier);
    }

    #[test]
    fn empty_text_is_an_identifier() {
        assert_eq!(lookup_identifier(""), TokenKind::Identifier);
    }

    #[test]
    fn canonical_spellings() {
        assert_eq!(TokenKind::Assign.canonical(), Some("="));
        assert_eq!(TokenKind::LeftBrace.canonical(), Some("{"));
        assert_eq!(TokenKind::FunctionKeyword.canonical(), Some("fn"));
        assert_eq!(TokenKind::EndOfInput.canonical(), Some(""));
        assert_eq!(TokenKind::Illegal.canonical(), None);
        assert_eq!(TokenKind::IntegerLiteral.canonical(), None);
    }

    #[test]
    fn display_shows_kind_and_text() {
        let token = Token {
            kind: TokenKind::Identifier,
            text: "five".to_owned(),
        };
        assert_eq!(token.to_string(), "<Identifier \"five\">");
    }
}
