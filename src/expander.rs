//! Word Expander
//!
//! Main entry point for brace and tilde expansion.
//! Ties together the parser, the evaluator and the home-directory lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::types::WordNode;
use crate::expansion::{
    ExpansionError, ExpansionLimits, ExpansionPipeline, HomeDirectories, HomeLookup,
    SubstitutionStage, SystemHomeLookup,
};

/// Options for creating an Expander.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpanderOptions {
    /// Expansion limits
    pub limits: ExpansionLimits,
    /// Fixed home directory table (defaults to the system lookup)
    pub home: Option<HomeDirectories>,
}

/// Word expander holding the configured limits and home lookup.
pub struct Expander {
    pipeline: ExpansionPipeline,
    home: Arc<dyn HomeLookup>,
}

impl Expander {
    /// Create a new expander. Without a home table, `~` resolves through
    /// `$HOME` and the system password database.
    pub fn new(options: ExpanderOptions) -> Self {
        let home: Arc<dyn HomeLookup> = match options.home {
            Some(table) => Arc::new(table),
            None => Arc::new(SystemHomeLookup),
        };
        Self::with_home(options.limits, home)
    }

    /// Create an expander with a caller-supplied home lookup.
    pub fn with_home(limits: ExpansionLimits, home: Arc<dyn HomeLookup>) -> Self {
        Self {
            pipeline: ExpansionPipeline::new(limits),
            home,
        }
    }

    pub fn limits(&self) -> &ExpansionLimits {
        self.pipeline.limits()
    }

    /// Expand a word in argument context.
    pub fn expand(&self, raw: &str) -> Result<Vec<WordNode>, ExpansionError> {
        self.pipeline.expand(raw, false, self.home.as_ref())
    }

    /// Expand the value side of an assignment (`name=value`), where a tilde
    /// after the first `:` or `=` also expands.
    pub fn expand_assignment(&self, raw: &str) -> Result<Vec<WordNode>, ExpansionError> {
        self.pipeline.expand(raw, true, self.home.as_ref())
    }

    /// Expand and render each word with escape markers stripped.
    pub fn expand_to_strings(
        &self,
        raw: &str,
        assignment: bool,
    ) -> Result<Vec<String>, ExpansionError> {
        let words = self.pipeline.expand(raw, assignment, self.home.as_ref())?;
        Ok(words.iter().map(WordNode::to_string).collect())
    }

    /// Expand and hand each word to the substitution stage.
    pub fn run(
        &self,
        raw: &str,
        assignment: bool,
        stage: &dyn SubstitutionStage,
    ) -> Result<Vec<String>, ExpansionError> {
        self.pipeline.run(raw, assignment, self.home.as_ref(), stage)
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(ExpanderOptions::default())
    }
}
