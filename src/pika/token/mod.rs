//! This is the Lexing or Tokenization module, split into two submodules.
//!
//! - [tokens] specifies the data types making up the tokens of the Pika
//!   language, including the keyword lookup that separates reserved words
//!   from plain identifiers.
//! - [lexer] contains the code for tokenizing source code. Unlike most
//!   lexers, it has no error type at all: unrecognized characters become
//!   [`Illegal`](tokens::TokenKind::Illegal) tokens and scanning continues,
//!   leaving the abort-or-report decision to whoever consumes the stream.
pub mod lexer;
pub mod tokens;
