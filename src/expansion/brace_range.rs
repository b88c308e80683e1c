//! Brace Range Expansion
//!
//! Handles numeric {1..10} and character {a..z} range expansion.
//! These are pure functions with no external dependencies.

use crate::ast::types::{BraceRangeValue, RangeNode};

/// Step of 0 is treated as 1 and the sign is ignored: direction always
/// comes from the bounds.
fn step_magnitude(raw_step: Option<i64>) -> i128 {
    match raw_step.unwrap_or(1) {
        0 => 1,
        step => i128::from(step).abs(),
    }
}

/// Zero-padding width: the widest bound written with a leading zero.
fn pad_width(start_str: Option<&str>, end_str: Option<&str>) -> usize {
    [start_str, end_str]
        .into_iter()
        .flatten()
        .map(|s| s.trim_start_matches(['-', '+']))
        .filter(|digits| digits.len() > 1 && digits.starts_with('0'))
        .map(str::len)
        .max()
        .unwrap_or(0)
}

/// Inclusive walk from `start` toward `end`.
fn walk(start: i128, end: i128, step: i128) -> impl Iterator<Item = i128> {
    let ascending = start <= end;
    let mut next = Some(start);
    std::iter::from_fn(move || {
        let current = next?;
        let following = if ascending { current + step } else { current - step };
        next = if (ascending && following <= end) || (!ascending && following >= end) {
            Some(following)
        } else {
            None
        };
        Some(current)
    })
}

fn expand_numeric_range(
    start: i64,
    end: i64,
    raw_step: Option<i64>,
    start_str: Option<&str>,
    end_str: Option<&str>,
) -> Vec<String> {
    let width = pad_width(start_str, end_str);
    let format_num = |n: i128| -> String {
        if width > 0 {
            let abs_str = format!("{:0>width$}", n.abs(), width = width);
            if n < 0 {
                format!("-{}", abs_str)
            } else {
                abs_str
            }
        } else {
            n.to_string()
        }
    };

    walk(i128::from(start), i128::from(end), step_magnitude(raw_step))
        .map(format_num)
        .collect()
}

fn expand_char_range(start: char, end: char, raw_step: Option<i64>) -> Vec<String> {
    walk(
        i128::from(u32::from(start)),
        i128::from(u32::from(end)),
        step_magnitude(raw_step),
    )
    .filter_map(|code| u32::try_from(code).ok().and_then(char::from_u32))
    .map(|c| c.to_string())
    .collect()
}

fn span_len(start: i128, end: i128, raw_step: Option<i64>) -> u128 {
    ((start - end).unsigned_abs() / step_magnitude(raw_step).unsigned_abs()) + 1
}

/// Expand a range node into its values, in order.
pub fn expand_brace_range(range: &RangeNode) -> Vec<String> {
    match (range.start, range.end) {
        (BraceRangeValue::Number(s), BraceRangeValue::Number(e)) => expand_numeric_range(
            s,
            e,
            range.step,
            range.start_str.as_deref(),
            range.end_str.as_deref(),
        ),
        (BraceRangeValue::Char(s), BraceRangeValue::Char(e)) => expand_char_range(s, e, range.step),
        // Mismatched bounds are not a range; keep the source text.
        _ => vec![range_literal(range)],
    }
}

/// Number of values `expand_brace_range` yields, without generating them.
pub fn brace_range_len(range: &RangeNode) -> u128 {
    match (range.start, range.end) {
        (BraceRangeValue::Number(s), BraceRangeValue::Number(e)) => {
            span_len(i128::from(s), i128::from(e), range.step)
        }
        (BraceRangeValue::Char(s), BraceRangeValue::Char(e)) => span_len(
            i128::from(u32::from(s)),
            i128::from(u32::from(e)),
            range.step,
        ),
        _ => 1,
    }
}

fn range_literal(range: &RangeNode) -> String {
    let step_part = range.step.map(|s| format!("..{}", s)).unwrap_or_default();
    format!("{{{}..{}{}}}", range.start, range.end, step_part)
}
