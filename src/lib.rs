//! just-expand - Brace and tilde expansion for shell words
//!
//! This library parses raw shell words into a brace-pattern tree, expands
//! it into the ordered list of words it denotes, and applies tilde
//! expansion to each result before handing it to a substitution stage.

pub mod ast;
pub mod config;
pub mod expander;
pub mod expansion;
pub mod parser;

pub use ast::types::*;
pub use expander::{Expander, ExpanderOptions};
pub use expansion::{
    evaluate, expand, resolve_tilde, ExpansionError, ExpansionLimits, ExpansionPipeline,
    HomeDirectories, HomeLookup, SubstitutionStage, SystemHomeLookup,
};
pub use parser::{parse_word, BraceParser};
