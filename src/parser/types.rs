//! Parser Types and Constants
//!
//! Shared limits used across parser modules.

/// Max nesting of brace alternations before deeper `{` are kept literal.
pub const MAX_PARSER_DEPTH: usize = 200;
