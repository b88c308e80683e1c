//! Abstract Syntax Tree (AST) Types for Word Expansion
//!
//! This module defines the tree a raw shell word is parsed into before
//! brace expansion, and the flat words that come out of it.
//!
//! Architecture:
//!   Raw word → Lexer → BraceParser → AST → BraceEvaluator → TildeResolver → Words

pub mod types;
