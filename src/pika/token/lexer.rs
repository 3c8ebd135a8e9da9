//! Encapsulates all behaviour necessary to properly lex Pika code.
//!
//! The lexer is a plain state machine over an owned input buffer: a byte
//! offset for the character currently looked at, a byte offset for the next
//! one to read, and the current character itself, pre-read at construction
//! time so that [`Lexer::next_token`] never observes an unprimed cursor.
//!
//! "No more input" is modelled as [None] rather than a sentinel byte, so a
//! stray NUL in the source lexes as an [`Illegal`](TokenKind::Illegal) token
//! instead of silently ending the stream.
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use crate::pika::token::tokens::{lookup_identifier, Token, TokenKind};

/// Tokenizes the given source code of Pika into a [Vec] of [`Tokens`](Token).
///
/// Lexing cannot fail: characters outside the recognized surface come back
/// as [`Illegal`](TokenKind::Illegal) tokens, and it is the caller's choice
/// whether those are fatal. The terminating
/// [`EndOfInput`](TokenKind::EndOfInput) token is not included in the result;
/// drive a [Lexer] by hand if you want to observe it.
pub fn tokenize<S: AsRef<str>>(source: S) -> Vec<Token> {
    let mut lexer = Lexer::new(source.as_ref().to_owned());

    let mut tokens: Vec<Token> = vec![];
    loop {
        match lexer.next_token() {
            Token {
                kind: TokenKind::EndOfInput,
                ..
            } => break,

            token => tokens.push(token),
        }
    }

    tokens
}

/// The lexer for the Pika language, producing one token per
/// [`next_token`](Lexer::next_token) call.
///
/// A lexer exclusively owns its input and is driven by exactly one sequential
/// caller; restarting the stream means constructing a new lexer.
#[derive(Debug)]
pub struct Lexer {
    /// The complete source code under analysis. Never mutated.
    input: String,
    /// Byte offset of the character held in `current`.
    position: usize,
    /// Byte offset of the next character to read.
    read_position: usize,
    /// The character at `position`, or [None] once the input is exhausted.
    current: Option<char>,
}

impl Lexer {
    /// Creates a new lexer over the given source code.
    ///
    /// The first character is read immediately, so an empty input starts out
    /// (and stays) at end of input.
    #[must_use]
    pub fn new(input: String) -> Lexer {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            current: None,
        };
        lexer.read_char();
        lexer
    }

    /// Lexes the next token, advancing the cursor past it.
    ///
    /// Whitespace (space, tab, newline, carriage return) is skipped and never
    /// emitted. Once the input is exhausted, this returns
    /// [`EndOfInput`](TokenKind::EndOfInput) with empty text, and keeps doing
    /// so on every further call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(current) = self.current else {
            return Token {
                kind: TokenKind::EndOfInput,
                text: String::new(),
            };
        };

        match current {
            '=' => self.single_char(TokenKind::Assign, current),
            '+' => self.single_char(TokenKind::Plus, current),
            ',' => self.single_char(TokenKind::Comma, current),
            ';' => self.single_char(TokenKind::Semicolon, current),
            '(' => self.single_char(TokenKind::LeftParen, current),
            ')' => self.single_char(TokenKind::RightParen, current),
            '{' => self.single_char(TokenKind::LeftBrace, current),
            '}' => self.single_char(TokenKind::RightBrace, current),

            // Identifiers and Keywords.
            //
            // read_identifier leaves the cursor on the first non-letter, so
            // no trailing advance happens here - advancing again would eat
            // the token that follows the identifier.
            letter if is_letter(letter) => {
                let text = self.read_identifier();
                Token {
                    kind: lookup_identifier(&text),
                    text,
                }
            }

            other => self.single_char(TokenKind::Illegal, other),
        }
    }

    /// Emits a token spanning exactly the current character, then advances
    /// the cursor past it.
    fn single_char(&mut self, kind: TokenKind, current: char) -> Token {
        self.read_char();
        Token {
            kind,
            text: current.to_string(),
        }
    }

    /// Reads the next character, making it current and advancing the read
    /// position past it. At the end of the input, `current` becomes [None]
    /// and the offsets stop moving, which is what makes
    /// [`next_token`](Lexer::next_token) idempotent once exhausted.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "read_position + len_utf8 of a char from the input cannot overflow a usize."
    )]
    fn read_char(&mut self) {
        self.position = self.read_position;
        match self.next_char() {
            Some(next) => {
                self.read_position += next.len_utf8();
                self.current = Some(next);
            }
            None => self.current = None,
        }
    }

    /// The character starting at `read_position`, if any.
    fn next_char(&self) -> Option<char> {
        self.input
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
    }

    /// Advances past the current run of whitespace, if any.
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r' | '\n')) {
            self.read_char();
        }
    }

    /// Reads a maximal run of letters starting at the current character,
    /// leaving the cursor on the first character that is not part of it
    /// (or at end of input).
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.current.is_some_and(is_letter) {
            self.read_char();
        }
        self.input
            .get(start..self.position)
            .expect("identifier runs start and stop on character boundaries")
            .to_owned()
    }
}

/// Is the character a letter for identifier purposes?
///
/// Only ASCII letters and the underscore qualify. Digits deliberately do
/// not: there is no numeric-literal scanning yet, so a digit outside an
/// identifier is an illegal character.
#[inline]
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (c == '_')
}
