//! Configuration file loading
//!
//! Expander options can be read from a TOML file:
//!
//! ```toml
//! [limits]
//! max_words = 5000
//! max_nesting_depth = 64
//!
//! [home]
//! current = "/home/bob"
//!
//! [home.users]
//! alice = "/home/alice"
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::expander::ExpanderOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Decode expander options from TOML text. Missing keys take defaults.
pub fn from_toml_str(text: &str) -> Result<ExpanderOptions, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read and decode a config file.
pub fn load(path: &Path) -> Result<ExpanderOptions, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&text)
}
