//! Brace Evaluation
//!
//! Walks a parsed `WordNode` and produces the ordered list of words it
//! expands to. Sibling brace nodes combine as a cross product with the
//! leftmost node varying slowest; the branches of one alternation are
//! concatenated in order.

use crate::ast::types::{BraceNode, LiteralPart, WordNode, WordPart};
use crate::expansion::brace_range::{brace_range_len, expand_brace_range};

/// Every way a single part can be spelled.
fn expand_part(part: &WordPart) -> Vec<Vec<WordPart>> {
    match part {
        WordPart::Brace(BraceNode::Literal(word)) => vec![word.parts.clone()],
        WordPart::Brace(BraceNode::Alternation(alt)) => alt
            .branches
            .iter()
            .flat_map(evaluate)
            .map(|word| word.parts)
            .collect(),
        WordPart::Brace(BraceNode::Range(range)) => expand_brace_range(range)
            .into_iter()
            .map(|value| vec![WordPart::Literal(LiteralPart { value })])
            .collect(),
        other => vec![vec![other.clone()]],
    }
}

/// Expand every brace node in `word`. Never returns an empty list; a word
/// without brace nodes yields itself with adjacent literals merged.
pub fn evaluate(word: &WordNode) -> Vec<WordNode> {
    let mut results = vec![WordNode::default()];

    for part in &word.parts {
        let alternatives = expand_part(part);
        if alternatives.len() == 1 {
            for result in &mut results {
                result.extend_parts(alternatives[0].iter().cloned());
            }
            continue;
        }

        let mut next = Vec::with_capacity(results.len() * alternatives.len());
        for prefix in &results {
            for alternative in &alternatives {
                let mut combined = prefix.clone();
                combined.extend_parts(alternative.iter().cloned());
                next.push(combined);
            }
        }
        results = next;
    }

    results
}

/// Number of words `evaluate` would produce, saturating at `u128::MAX`.
pub fn count_expansions(word: &WordNode) -> u128 {
    word.parts
        .iter()
        .map(|part| match part {
            WordPart::Brace(BraceNode::Alternation(alt)) => alt
                .branches
                .iter()
                .map(count_expansions)
                .fold(0u128, u128::saturating_add),
            WordPart::Brace(BraceNode::Range(range)) => brace_range_len(range),
            _ => 1,
        })
        .fold(1u128, u128::saturating_mul)
}
