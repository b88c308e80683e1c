//! Brace Parsing
//!
//! Turns the token stream of a raw word into a `WordNode` tree. Parsing is
//! total: every `{...}` span is tentatively matched, then validated, and only
//! then committed as an alternation, a range, or literal text.
//!
//! Rules:
//! - `{` with no depth-0 matching `}` makes the rest of the word literal
//! - a matched span with a top-level comma and balanced branches is an alternation
//! - a matched span whose inner text is `x..y[..s]` is a range
//! - any other matched span is literal, braces included, and is never re-scanned

use tracing::trace;

use crate::ast::types::{WordNode, WordPart, AST};
use crate::parser::lexer::{tokenize, Token};
use crate::parser::range_parser::try_parse_range;
use crate::parser::types::MAX_PARSER_DEPTH;

/// Find the index of the `}` matching the `{` at `start`.
pub fn find_matching_brace(tokens: &[Token], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(start) {
        if token.is_char('{') {
            depth += 1;
        } else if token.is_char('}') && depth > 0 {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Split the inner tokens of a brace span at top-level commas.
/// Handles nested braces like {a,{b,c},d} correctly.
pub fn split_brace_items(inner: &[Token]) -> Vec<&[Token]> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut item_start = 0;

    for (i, token) in inner.iter().enumerate() {
        if token.is_char('{') {
            depth += 1;
        } else if token.is_char('}') {
            depth = depth.saturating_sub(1);
        } else if token.is_char(',') && depth == 0 {
            items.push(&inner[item_start..i]);
            item_start = i + 1;
        }
    }
    items.push(&inner[item_start..]);
    items
}

/// True if every unescaped `}` closes an earlier `{` and none stay open.
pub fn is_brace_balanced(tokens: &[Token]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        if token.is_char('{') {
            depth += 1;
        } else if token.is_char('}') {
            if depth == 0 {
                return false;
            }
            depth -= 1;
        }
    }
    depth == 0
}

/// Lower tokens to word parts with brace syntax disabled.
fn literal_parts(tokens: &[Token]) -> Vec<WordPart> {
    let mut word = WordNode::default();
    for token in tokens {
        word.push_part(token_to_part(token));
    }
    word.parts
}

fn token_to_part(token: &Token) -> WordPart {
    match token {
        Token::Char(c) => AST::literal(c.to_string()),
        Token::Escaped(c) => AST::escaped(*c),
        Token::Quoted(q) => WordPart::Quoted(q.clone()),
        Token::Substitution(s) => WordPart::Substitution(s.clone()),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BraceParser {
    max_depth: usize,
}

impl Default for BraceParser {
    fn default() -> Self {
        Self {
            max_depth: MAX_PARSER_DEPTH,
        }
    }
}

impl BraceParser {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse a raw word. Never fails.
    pub fn parse(&self, value: &str) -> WordNode {
        let tokens = tokenize(value);
        self.parse_tokens(&tokens, 0)
    }

    fn parse_tokens(&self, tokens: &[Token], depth: usize) -> WordNode {
        let mut word = WordNode::default();
        let mut i = 0;

        while i < tokens.len() {
            if !tokens[i].is_char('{') {
                word.push_part(token_to_part(&tokens[i]));
                i += 1;
                continue;
            }

            match find_matching_brace(tokens, i) {
                Some(close) => {
                    word.push_part(self.parse_brace(&tokens[i..=close], depth));
                    i = close + 1;
                }
                None => {
                    // An unmatched opener swallows the rest of the word.
                    trace!(offset = i, "unmatched brace, rest of word is literal");
                    word.push_part(AST::brace_literal(literal_parts(&tokens[i..])));
                    break;
                }
            }
        }

        word
    }

    /// Commit a matched `{...}` span (braces included) to a node.
    fn parse_brace(&self, span: &[Token], depth: usize) -> WordPart {
        let inner = &span[1..span.len() - 1];

        if depth < self.max_depth {
            let items = split_brace_items(inner);
            if items.len() >= 2 && items.iter().all(|item| is_brace_balanced(item)) {
                let branches = items
                    .into_iter()
                    .map(|item| self.parse_tokens(item, depth + 1))
                    .collect();
                return AST::alternation(branches);
            }

            if let Some(range) = try_parse_range(inner) {
                return AST::range(range);
            }
        } else {
            trace!(depth, "brace nesting limit reached");
        }

        AST::brace_literal(literal_parts(span))
    }
}

/// Parse a raw word with the default nesting limit.
pub fn parse_word(value: &str) -> WordNode {
    BraceParser::default().parse(value)
}
