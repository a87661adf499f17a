//! Error type for behavior name parsing.
//!
//! Delegation itself never fails; errors only appear where text (roster
//! JSON, `VariantConfig::from_names`) is turned into registry entries, or
//! where a preset fails validation.

use thiserror::Error;

use crate::BehaviorFamily;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DuckError {
    #[error("unknown {family} behavior {name:?}")]
    UnknownBehavior {
        family: BehaviorFamily,
        name:   String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `duck-*` crates.
pub type DuckResult<T> = Result<T, DuckError>;
