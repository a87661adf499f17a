//! Per-variant configuration record.

use duck_core::{DuckError, FlyKind, QuackKind};
use serde::{Deserialize, Serialize};

use crate::VariantResult;

/// A named preset: a display line plus default bindings for both slots.
///
/// Built fresh for every duck, so no two ducks ever share a slot.
///
/// # JSON form
///
/// ```json
/// { "name": "rubber", "display": "I'm a rubber duckie", "fly": "flightless", "quack": "squeak" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Roster key.  Matched case-insensitively.
    pub name: String,

    /// What `display()` returns for ducks built from this preset.
    pub display: String,

    /// Default fly binding.
    pub fly: FlyKind,

    /// Default quack binding.
    pub quack: QuackKind,
}

impl VariantConfig {
    pub fn new(
        name:    impl Into<String>,
        display: impl Into<String>,
        fly:     FlyKind,
        quack:   QuackKind,
    ) -> Self {
        Self { name: name.into(), display: display.into(), fly, quack }
    }

    /// Like [`new`](Self::new) but takes behavior names, e.g. `"rocket_powered"`.
    pub fn from_names(
        name:    impl Into<String>,
        display: impl Into<String>,
        fly:     &str,
        quack:   &str,
    ) -> VariantResult<Self> {
        Ok(Self::new(name, display, fly.parse::<FlyKind>()?, quack.parse::<QuackKind>()?))
    }

    /// Reject presets that could not be looked up or described.
    pub fn validate(&self) -> VariantResult<()> {
        if self.name.trim().is_empty() {
            return Err(DuckError::Config("variant name is blank".to_string()).into());
        }
        if self.display.trim().is_empty() {
            return Err(DuckError::Config(format!(
                "variant {:?} has an empty display line",
                self.name
            ))
            .into());
        }
        Ok(())
    }
}
