//! Expansion module
//!
//! Brace evaluation, tilde resolution and the pipeline that orders them
//! ahead of the external substitution stage.

pub mod brace;
pub mod brace_range;
pub mod errors;
pub mod home;
pub mod pipeline;
pub mod tilde;
pub mod types;

pub use brace::{count_expansions, evaluate};
pub use brace_range::{brace_range_len, expand_brace_range};
pub use errors::ExpansionError;
pub use home::{HomeDirectories, HomeLookup, SystemHomeLookup};
pub use pipeline::{expand, ExpansionPipeline, SubstitutionStage};
pub use tilde::resolve_tilde;
pub use types::ExpansionLimits;
