//! Expansion limits configuration.

use serde::{Deserialize, Serialize};

use crate::parser::types::MAX_PARSER_DEPTH;

/// Default cap on words produced from a single raw word.
pub const DEFAULT_MAX_WORDS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionLimits {
    /// Maximum number of words one raw word may expand to
    pub max_words: usize,
    /// Maximum nesting of brace alternations; deeper braces stay literal
    pub max_nesting_depth: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_nesting_depth: MAX_PARSER_DEPTH,
        }
    }
}
