//! Parser module for raw shell words
//!
//! This module contains the lexer and the brace/range parsers.

pub mod types;
pub mod lexer;
pub mod parser_substitution;
pub mod range_parser;
pub mod word_parser;

// Re-exports
pub use lexer::{tokenize, Lexer, Token};
pub use range_parser::{parse_range_text, try_parse_range};
pub use word_parser::{parse_word, BraceParser};
