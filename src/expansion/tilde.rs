//! Tilde Expansion
//!
//! Functions for handling tilde (~) expansion in word expansion.
//!
//! Runs on each word after brace expansion and before substitution. Only
//! literal text can start or continue a tilde prefix: an escaped `~`, a
//! quoted span or a substitution atom inside the prefix disables it.

use tracing::trace;

use crate::ast::types::{WordNode, WordPart};
use crate::expansion::home::HomeLookup;

/// A `~` that may start a tilde prefix: literal part index and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TildeSite {
    part: usize,
    offset: usize,
}

fn literal_value(part: &WordPart) -> Option<&str> {
    match part {
        WordPart::Literal(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Byte offset where the tilde prefix at `site` ends, or None if the
/// prefix would run into non-literal text.
fn prefix_end(parts: &[WordPart], site: TildeSite, assignment: bool) -> Option<usize> {
    let value = literal_value(&parts[site.part])?;
    let name_start = site.offset + 1;
    let terminator = value[name_start..].find(|c: char| c == '/' || (assignment && c == ':'));
    match terminator {
        Some(idx) => Some(name_start + idx),
        None if site.part + 1 == parts.len() => Some(value.len()),
        None => None,
    }
}

/// The site right after the first unescaped `:` or `=` in the word.
fn assignment_site(parts: &[WordPart]) -> Option<TildeSite> {
    for (index, part) in parts.iter().enumerate() {
        let Some(value) = literal_value(part) else {
            continue;
        };
        if let Some(sep) = value.find([':', '=']) {
            let offset = sep + 1;
            return value[offset..]
                .starts_with('~')
                .then_some(TildeSite { part: index, offset });
        }
    }
    None
}

fn leading_site(parts: &[WordPart], assignment: bool) -> Option<(TildeSite, usize)> {
    let site = parts
        .first()
        .and_then(literal_value)
        .filter(|value| value.starts_with('~'))
        .map(|_| TildeSite { part: 0, offset: 0 })?;
    prefix_end(parts, site, assignment).map(|end| (site, end))
}

fn second_site(parts: &[WordPart]) -> Option<(TildeSite, usize)> {
    let site = assignment_site(parts)?;
    prefix_end(parts, site, true).map(|end| (site, end))
}

/// Replace one tilde prefix in place. Returns false when the lookup fails.
fn replace_prefix(
    parts: &mut [WordPart],
    (site, end): (TildeSite, usize),
    home: &dyn HomeLookup,
) -> bool {
    let WordPart::Literal(lit) = &mut parts[site.part] else {
        return false;
    };
    let name = &lit.value[site.offset + 1..end];
    let user = if name.is_empty() { None } else { Some(name) };

    match home.lookup_home(user) {
        Some(dir) => {
            trace!(user = ?user, home = %dir, "tilde prefix expanded");
            lit.value.replace_range(site.offset..end, &dir);
            true
        }
        None => {
            trace!(user = ?user, "no home directory, tilde prefix kept");
            false
        }
    }
}

/// Apply tilde expansion to one brace-expanded word.
///
/// `~` and `~/...` use the current user's home; `~name` asks the lookup for
/// that user and is left untouched when the lookup fails. In assignment
/// context the position after the first `:` or `=` is a second site.
pub fn resolve_tilde(word: &WordNode, assignment: bool, home: &dyn HomeLookup) -> WordNode {
    let mut result = WordNode::default();
    result.extend_parts(word.parts.iter().cloned());

    let leading = leading_site(&result.parts, assignment);
    let second = if assignment {
        second_site(&result.parts)
    } else {
        None
    };

    let overlaps = matches!(
        (leading, second),
        (Some((first, end)), Some((site, _))) if first.part == site.part && site.offset < end
    );

    if overlaps {
        // The second site sits inside the leading prefix and only counts
        // when that prefix stays literal.
        let replaced = leading.is_some_and(|prefix| replace_prefix(&mut result.parts, prefix, home));
        if let Some(prefix) = second.filter(|_| !replaced) {
            replace_prefix(&mut result.parts, prefix, home);
        }
    } else {
        // Right to left so earlier offsets stay valid.
        for prefix in second.into_iter().chain(leading) {
            replace_prefix(&mut result.parts, prefix, home);
        }
    }

    result
}
