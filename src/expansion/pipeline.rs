//! Expansion Pipeline
//!
//! Orders the expansion stages for one raw word:
//!
//! 1. brace parsing and evaluation, exactly once, fanning out to N words
//! 2. tilde resolution, exactly once per resulting word
//! 3. hand-off of each word to the external substitution stage
//!
//! Text produced by the substitution stage never re-enters brace or tilde
//! processing, even when it starts with `~` or contains braces.

use tracing::debug;

use crate::ast::types::WordNode;
use crate::expansion::brace::{count_expansions, evaluate};
use crate::expansion::errors::ExpansionError;
use crate::expansion::home::HomeLookup;
use crate::expansion::tilde::resolve_tilde;
use crate::expansion::types::ExpansionLimits;
use crate::parser::word_parser::{parse_word, BraceParser};

/// The external stage that performs variable/command/arithmetic
/// substitution, field splitting and quote removal on one word.
pub trait SubstitutionStage {
    fn substitute(&self, word: &WordNode) -> Vec<String>;
}

impl<F> SubstitutionStage for F
where
    F: Fn(&WordNode) -> Vec<String>,
{
    fn substitute(&self, word: &WordNode) -> Vec<String> {
        self(word)
    }
}

fn resolve_all(words: Vec<WordNode>, assignment: bool, home: &dyn HomeLookup) -> Vec<WordNode> {
    words
        .iter()
        .map(|word| resolve_tilde(word, assignment, home))
        .collect()
}

/// Brace- and tilde-expand a raw word without any output limit.
///
/// Total: malformed brace syntax degrades to literal text and failed home
/// lookups leave the tilde prefix alone.
pub fn expand(raw: &str, assignment: bool, home: &dyn HomeLookup) -> Vec<WordNode> {
    let word = parse_word(raw);
    resolve_all(evaluate(&word), assignment, home)
}

#[derive(Debug, Clone, Default)]
pub struct ExpansionPipeline {
    parser: BraceParser,
    limits: ExpansionLimits,
}

impl ExpansionPipeline {
    pub fn new(limits: ExpansionLimits) -> Self {
        Self {
            parser: BraceParser::new(limits.max_nesting_depth),
            limits,
        }
    }

    pub fn limits(&self) -> &ExpansionLimits {
        &self.limits
    }

    /// Brace- and tilde-expand a raw word, refusing inputs that would
    /// generate more than `max_words` words.
    #[tracing::instrument(level = "debug", skip(self, home), fields(raw_len = raw.len()))]
    pub fn expand(
        &self,
        raw: &str,
        assignment: bool,
        home: &dyn HomeLookup,
    ) -> Result<Vec<WordNode>, ExpansionError> {
        let word = self.parser.parse(raw);

        let requested = count_expansions(&word);
        if requested > self.limits.max_words as u128 {
            debug!(requested = %requested, limit = self.limits.max_words, "brace expansion refused");
            return Err(ExpansionError::TooManyWords {
                limit: self.limits.max_words,
                requested,
            });
        }

        let words = resolve_all(evaluate(&word), assignment, home);
        debug!(count = words.len(), "brace expansion fan-out");
        Ok(words)
    }

    /// Expand a raw word and pass each result through the substitution
    /// stage, concatenating the fields it returns.
    pub fn run(
        &self,
        raw: &str,
        assignment: bool,
        home: &dyn HomeLookup,
        stage: &dyn SubstitutionStage,
    ) -> Result<Vec<String>, ExpansionError> {
        let words = self.expand(raw, assignment, home)?;
        Ok(words.iter().flat_map(|word| stage.substitute(word)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::WordPart;
    use crate::expansion::home::HomeDirectories;

    fn homes() -> HomeDirectories {
        HomeDirectories::new("/home/bob").with_user("root", "/root")
    }

    fn expand_strings(raw: &str) -> Vec<String> {
        expand(raw, false, &homes())
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    /// Resolves `$name` atoms from a fixed table and renders everything else.
    fn fake_substitution(word: &WordNode) -> Vec<String> {
        let mut out = String::new();
        for part in &word.parts {
            match part {
                WordPart::Substitution(sub) if sub.text == "$T" => out.push_str("~/{x,y}"),
                WordPart::Substitution(_) => {}
                other => out.push_str(&WordNode { parts: vec![other.clone()] }.to_string()),
            }
        }
        vec![out]
    }

    #[test]
    fn test_brace_runs_before_tilde() {
        assert_eq!(expand_strings("~{/src,root}"), vec!["/home/bob/src", "/root"]);
        assert_eq!(expand_strings("{~,x}/a"), vec!["/home/bob/a", "x/a"]);
        assert_eq!(expand_strings("a{~,b}"), vec!["a~", "ab"]);
    }

    #[test]
    fn test_substituted_text_is_not_reexpanded() {
        let pipeline = ExpansionPipeline::default();
        let fields = pipeline
            .run("$T", false, &homes(), &fake_substitution)
            .unwrap();
        assert_eq!(fields, vec!["~/{x,y}"]);
    }

    #[test]
    fn test_run_applies_stage_per_word() {
        let pipeline = ExpansionPipeline::default();
        let fields = pipeline
            .run("{a,b}$T", false, &homes(), &fake_substitution)
            .unwrap();
        assert_eq!(fields, vec!["a~/{x,y}", "b~/{x,y}"]);
    }

    #[test]
    fn test_word_limit() {
        let pipeline = ExpansionPipeline::new(ExpansionLimits {
            max_words: 8,
            ..Default::default()
        });
        assert_eq!(pipeline.expand("{0,1}{0,1}{0,1}", false, &homes()).unwrap().len(), 8);
        assert_eq!(
            pipeline.expand("{1..9}", false, &homes()),
            Err(ExpansionError::TooManyWords {
                limit: 8,
                requested: 9
            })
        );
    }

    #[test]
    fn test_nesting_limit_from_limits() {
        let pipeline = ExpansionPipeline::new(ExpansionLimits {
            max_nesting_depth: 1,
            ..Default::default()
        });
        let words: Vec<String> = pipeline
            .expand("{a,{b,c}}", false, &homes())
            .unwrap()
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(words, vec!["a", "{b,c}"]);
    }
}
