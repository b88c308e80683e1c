//! Abstract Syntax Tree (AST) Types for Word Expansion
//!
//! A `WordNode` is an ordered sequence of parts. Literal text, escaped
//! characters, quoted spans and substitution atoms pass through brace and
//! tilde processing unchanged; `Brace` parts are the only ones that fan out.

use std::fmt;

// =============================================================================
// WORDS
// =============================================================================

/// A Word is a sequence of parts that form a single shell word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordNode {
    pub parts: Vec<WordPart>,
}

/// Parts that can make up a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPart {
    Literal(LiteralPart),
    Escaped(EscapedPart),
    Quoted(QuotedPart),
    Substitution(SubstitutionPart),
    Brace(BraceNode),
}

/// Literal text (no special meaning)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPart {
    pub value: String,
}

/// Escaped character: \x
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedPart {
    pub value: char,
}

/// Quoted span: 'text' or "text", quotes included.
/// Quote removal happens downstream, so the span is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedPart {
    pub text: String,
    pub double: bool,
}

// =============================================================================
// SUBSTITUTION ATOMS
// =============================================================================

/// An opaque variable, command or arithmetic substitution.
///
/// Only the source text is kept. The substitution engine owns evaluation;
/// brace and tilde processing never look inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionPart {
    pub kind: SubstitutionKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionKind {
    /// $name, $1, $@, ${...}
    Variable,
    /// $(...) or `...`
    Command,
    /// $((...))
    Arithmetic,
}

impl fmt::Display for SubstitutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => write!(f, "variable"),
            Self::Command => write!(f, "command"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

// =============================================================================
// BRACE EXPANSION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BraceNode {
    /// A `{...}` span that is neither an alternation nor a range, or an
    /// unmatched `{` and everything after it. Contains no brace nodes.
    Literal(WordNode),
    /// {a,b,c}
    Alternation(AlternationNode),
    /// {1..10} or {a..z..2}
    Range(RangeNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternationNode {
    pub branches: Vec<WordNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeNode {
    pub start: BraceRangeValue,
    pub end: BraceRangeValue,
    pub step: Option<i64>,
    /// Source spelling of numeric bounds, kept for zero-padding.
    pub start_str: Option<String>,
    pub end_str: Option<String>,
}

impl RangeNode {
    pub fn is_numeric(&self) -> bool {
        matches!(self.start, BraceRangeValue::Number(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceRangeValue {
    Number(i64),
    Char(char),
}

impl fmt::Display for BraceRangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Char(c) => write!(f, "{}", c),
        }
    }
}

// =============================================================================
// WORD HELPERS
// =============================================================================

impl WordNode {
    /// Append a part, merging adjacent literal runs and dropping empty ones.
    pub fn push_part(&mut self, part: WordPart) {
        if let WordPart::Literal(LiteralPart { value }) = &part {
            if value.is_empty() {
                return;
            }
            if let Some(WordPart::Literal(last)) = self.parts.last_mut() {
                last.value.push_str(value);
                return;
            }
        }
        self.parts.push(part);
    }

    pub fn extend_parts<I: IntoIterator<Item = WordPart>>(&mut self, parts: I) {
        for part in parts {
            self.push_part(part);
        }
    }

    /// True if no part fans out under brace expansion.
    pub fn is_brace_free(&self) -> bool {
        self.parts.iter().all(|part| match part {
            WordPart::Brace(BraceNode::Literal(inner)) => inner.is_brace_free(),
            WordPart::Brace(_) => false,
            _ => true,
        })
    }

    /// Reconstruct source text that parses back to this word.
    pub fn to_source(&self) -> String {
        let mut result = String::new();
        for part in &self.parts {
            part.write_source(&mut result);
        }
        result
    }
}

impl WordPart {
    fn write_source(&self, out: &mut String) {
        match self {
            WordPart::Literal(LiteralPart { value }) => out.push_str(value),
            WordPart::Escaped(EscapedPart { value }) => {
                out.push('\\');
                out.push(*value);
            }
            WordPart::Quoted(QuotedPart { text, .. }) => out.push_str(text),
            WordPart::Substitution(SubstitutionPart { text, .. }) => out.push_str(text),
            WordPart::Brace(node) => node.write_source(out),
        }
    }
}

impl BraceNode {
    fn write_source(&self, out: &mut String) {
        match self {
            BraceNode::Literal(word) => out.push_str(&word.to_source()),
            BraceNode::Alternation(AlternationNode { branches }) => {
                out.push('{');
                let items: Vec<String> = branches.iter().map(WordNode::to_source).collect();
                out.push_str(&items.join(","));
                out.push('}');
            }
            BraceNode::Range(range) => {
                let start = range
                    .start_str
                    .clone()
                    .unwrap_or_else(|| range.start.to_string());
                let end = range
                    .end_str
                    .clone()
                    .unwrap_or_else(|| range.end.to_string());
                out.push('{');
                out.push_str(&start);
                out.push_str("..");
                out.push_str(&end);
                if let Some(step) = range.step {
                    out.push_str("..");
                    out.push_str(&step.to_string());
                }
                out.push('}');
            }
        }
    }
}

/// Renders the word with escape markers stripped. Quoted spans and
/// substitution atoms appear verbatim, ready for the substitution stage.
impl fmt::Display for WordNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                WordPart::Literal(LiteralPart { value }) => f.write_str(value)?,
                WordPart::Escaped(EscapedPart { value }) => write!(f, "{}", value)?,
                WordPart::Quoted(QuotedPart { text, .. }) => f.write_str(text)?,
                WordPart::Substitution(SubstitutionPart { text, .. }) => f.write_str(text)?,
                WordPart::Brace(BraceNode::Literal(word)) => write!(f, "{}", word)?,
                WordPart::Brace(node) => {
                    let mut source = String::new();
                    node.write_source(&mut source);
                    f.write_str(&source)?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// AST FACTORY
// =============================================================================

pub struct AST;

impl AST {
    pub fn word(parts: Vec<WordPart>) -> WordNode {
        WordNode { parts }
    }

    pub fn literal(value: impl Into<String>) -> WordPart {
        WordPart::Literal(LiteralPart { value: value.into() })
    }

    pub fn escaped(value: char) -> WordPart {
        WordPart::Escaped(EscapedPart { value })
    }

    pub fn quoted(text: impl Into<String>, double: bool) -> WordPart {
        WordPart::Quoted(QuotedPart {
            text: text.into(),
            double,
        })
    }

    pub fn substitution(kind: SubstitutionKind, text: impl Into<String>) -> WordPart {
        WordPart::Substitution(SubstitutionPart {
            kind,
            text: text.into(),
        })
    }

    pub fn alternation(branches: Vec<WordNode>) -> WordPart {
        WordPart::Brace(BraceNode::Alternation(AlternationNode { branches }))
    }

    pub fn brace_literal(parts: Vec<WordPart>) -> WordPart {
        WordPart::Brace(BraceNode::Literal(WordNode { parts }))
    }

    pub fn range(range: RangeNode) -> WordPart {
        WordPart::Brace(BraceNode::Range(range))
    }
}
