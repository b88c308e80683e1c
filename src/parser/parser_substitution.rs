//! Substitution Scanning Helpers
//!
//! Pure functions that find where a `$...` or backquoted substitution ends.
//! The contents are never interpreted; the scanner only needs to know the
//! extent so brace and tilde processing can treat the atom as opaque.

use crate::ast::types::SubstitutionKind;

/// Find the index of the closer matching the opener at `start`.
///
/// Escaped characters and single/double quoted spans are skipped, so a `)`
/// inside `"..."` does not close a `$(`.
pub fn find_matching_close(chars: &[char], start: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    while i < chars.len() {
        let c = chars[i];

        if in_single_quote {
            if c == '\'' {
                in_single_quote = false;
            }
            i += 1;
            continue;
        }

        if c == '\\' {
            i += 2;
            continue;
        }

        if in_double_quote {
            if c == '"' {
                in_double_quote = false;
            }
            i += 1;
            continue;
        }

        if c == '\'' {
            in_single_quote = true;
        } else if c == '"' {
            in_double_quote = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }

    None
}

/// Find the closing backquote of a legacy command substitution.
pub fn find_backtick_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '`' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn is_special_parameter(c: char) -> bool {
    matches!(c, '@' | '*' | '#' | '?' | '$' | '!' | '-')
}

/// Scan a substitution starting at `chars[start]`, which must be `$` or a
/// backquote. Returns the kind and the index one past its last character,
/// or None when no substitution starts here (the `$` is then plain text).
pub fn scan_substitution(chars: &[char], start: usize) -> Option<(SubstitutionKind, usize)> {
    let c = *chars.get(start)?;

    if c == '`' {
        let end = find_backtick_end(chars, start)?;
        return Some((SubstitutionKind::Command, end + 1));
    }

    if c != '$' {
        return None;
    }

    let next = *chars.get(start + 1)?;
    match next {
        '(' => {
            let close = find_matching_close(chars, start + 1, '(', ')')?;
            // $(( ... )) is arithmetic only when the inner paren closes
            // immediately before the outer one; `$( (cmd) )` is a subshell.
            if chars.get(start + 2) == Some(&'(') {
                let inner = find_matching_close(chars, start + 2, '(', ')');
                if inner.map(|idx| idx + 1) == Some(close) {
                    return Some((SubstitutionKind::Arithmetic, close + 1));
                }
            }
            Some((SubstitutionKind::Command, close + 1))
        }
        '{' => {
            let close = find_matching_close(chars, start + 1, '{', '}')?;
            Some((SubstitutionKind::Variable, close + 1))
        }
        c if c.is_ascii_alphabetic() || c == '_' => {
            let mut i = start + 2;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            Some((SubstitutionKind::Variable, i))
        }
        c if c.is_ascii_digit() || is_special_parameter(c) => {
            Some((SubstitutionKind::Variable, start + 2))
        }
        _ => None,
    }
}
