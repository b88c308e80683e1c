//! Expansion Errors
//!
//! Parsing and evaluation are total. The only refusal is the pipeline's
//! guard against brace patterns that would generate too many words.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("brace expansion would generate {requested} words (limit {limit})")]
    TooManyWords { limit: usize, requested: u128 },
}
