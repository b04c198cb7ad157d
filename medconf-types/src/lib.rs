//! Core type definitions for the MedConf site.
//!
//! This crate defines the leaf types every other crate depends on:
//! - [`Language`]: the two supported display languages (Arabic primary)
//! - [`BilingualValue`]: a pair of equivalent strings, one per language
//! - [`Preferences`]: the persisted language and font selection
//!
//! Resolution of a bilingual value is total; nothing here fails for
//! unexpected input. Errors only surface from strict parsing and from
//! preference persistence.

mod bilingual;
mod language;
mod preferences;

pub use bilingual::BilingualValue;
pub use language::{Direction, Language};
pub use preferences::{FontFamily, Preferences};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),

    #[error("unknown font family: {0}")]
    UnknownFont(String),
}
