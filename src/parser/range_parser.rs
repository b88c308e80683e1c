//! Brace Range Parsing
//!
//! Recognizes the inner text of `{start..end}` and `{start..end..step}`.
//! Anything else (extra characters, commas, mixed bound types, mixed-case
//! letters) is not a range and the caller falls back to literal text.

use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::ast::types::{BraceRangeValue, RangeNode};
use crate::parser::lexer::Token;

lazy_static! {
    static ref NUMERIC_RANGE_RE: Regex =
        Regex::new(r"^([+-]?[0-9]+)\.\.([+-]?[0-9]+)(?:\.\.([+-]?[0-9]+))?$").unwrap();
    static ref CHAR_RANGE_RE: Regex =
        Regex::new(r"^([a-zA-Z])\.\.([a-zA-Z])(?:\.\.([+-]?[0-9]+))?$").unwrap();
}

/// Try to parse a range from the tokens between `{` and `}`.
/// Only plain characters can form a range.
pub fn try_parse_range(tokens: &[Token]) -> Option<RangeNode> {
    let mut inner = String::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Char(c) => inner.push(*c),
            _ => return None,
        }
    }
    parse_range_text(&inner)
}

/// Try to parse range text such as `1..10`, `-3..3..2` or `a..e`.
pub fn parse_range_text(inner: &str) -> Option<RangeNode> {
    try_parse_numeric_range(inner).or_else(|| try_parse_char_range(inner))
}

fn try_parse_numeric_range(inner: &str) -> Option<RangeNode> {
    let caps = NUMERIC_RANGE_RE.captures(inner)?;
    let start_str = caps.get(1)?.as_str();
    let end_str = caps.get(2)?.as_str();
    let start: i64 = start_str.parse().ok()?;
    let end: i64 = end_str.parse().ok()?;
    let step = match caps.get(3) {
        Some(m) => Some(m.as_str().parse::<i64>().ok()?),
        None => None,
    };

    Some(RangeNode {
        start: BraceRangeValue::Number(start),
        end: BraceRangeValue::Number(end),
        step,
        start_str: Some(start_str.to_string()),
        end_str: Some(end_str.to_string()),
    })
}

fn try_parse_char_range(inner: &str) -> Option<RangeNode> {
    let caps = CHAR_RANGE_RE.captures(inner)?;
    let start = caps.get(1)?.as_str().chars().next()?;
    let end = caps.get(2)?.as_str().chars().next()?;

    // Both bounds must sit on the same alphabetic axis.
    if start.is_ascii_uppercase() != end.is_ascii_uppercase() {
        return None;
    }

    let step = match caps.get(3) {
        Some(m) => Some(m.as_str().parse::<i64>().ok()?),
        None => None,
    };

    Some(RangeNode {
        start: BraceRangeValue::Char(start),
        end: BraceRangeValue::Char(end),
        step,
        start_str: None,
        end_str: None,
    })
}
