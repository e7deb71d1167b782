//! Errors reported by identifier tables, configuration and definition loading.

use std::path::PathBuf;

/// A recoverable problem with one definition in a load batch.
///
/// The definition it names was not registered; the rest of the batch was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("definition '{def_name}': {kind}")]
pub struct LoaderError {
    /// Internal name of the offending definition.
    pub def_name: String,
    pub kind: LoaderErrorKind,
}

impl LoaderError {
    /// Create an error for the named definition.
    pub fn new(def_name: impl Into<String>, kind: LoaderErrorKind) -> Self {
        Self {
            def_name: def_name.into(),
            kind,
        }
    }

    /// Create a free-form error for the named definition.
    pub fn other(def_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(def_name, LoaderErrorKind::Other(message.into()))
    }
}

/// What went wrong with a definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderErrorKind {
    /// The definition does not declare a texture it requires.
    #[error("no texture declared")]
    MissingTexture,

    /// The declared texture is not among the available assets.
    #[error("texture '{path}' not found")]
    TextureNotFound { path: String },

    /// The texture exists but could not be loaded.
    #[error("texture '{path}' failed to load: {reason}")]
    TextureLoad { path: String, reason: String },

    /// Another built-in or extension definition already uses this name.
    #[error("name is already registered")]
    DuplicateName,

    /// Extension definitions must be named.
    #[error("name is empty")]
    EmptyName,

    /// Every identifier after the built-in range has been handed out.
    #[error("identifier space exhausted")]
    TypeSpaceExhausted,

    #[error("{0}")]
    Other(String),
}

/// Errors building an identifier table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The container declares no usable integer identifiers.
    #[error("identifier table has no integer identifiers")]
    Empty,

    #[error("failed to parse identifier table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reading loader configuration or batch files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
