//! The built-in variants and the factory functions for them.

use std::str::FromStr;

use duck_core::{FlyKind, QuackKind};
use duck_entity::StrategyDuck;

use crate::{FromConfig, VariantConfig, VariantError};

/// The variants every roster starts with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    /// A real duck: flies on its wings, quacks.
    Mallard,
    /// A decoy: grounded, quacks.
    Model,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Mallard, Variant::Model];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Mallard => "mallard",
            Variant::Model   => "model",
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Variant::Mallard => "I'm a real Mallard duck",
            Variant::Model   => "I'm a Model duck",
        }
    }

    pub fn default_fly(self) -> FlyKind {
        match self {
            Variant::Mallard => FlyKind::WindPowered,
            Variant::Model   => FlyKind::Flightless,
        }
    }

    pub fn default_quack(self) -> QuackKind {
        match self {
            Variant::Mallard | Variant::Model => QuackKind::Normal,
        }
    }

    /// A fresh configuration record for this variant.
    pub fn config(self) -> VariantConfig {
        VariantConfig::new(self.name(), self.display(), self.default_fly(), self.default_quack())
    }

    /// Build a duck of this variant in either encoding.
    pub fn build<D: FromConfig>(self) -> D {
        D::from_config(&self.config())
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VariantError::UnknownVariant(s.to_string()))
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// `"I'm a real Mallard duck"`, flies with its wings, quacks.
pub fn create_mallard() -> StrategyDuck {
    Variant::Mallard.build()
}

/// `"I'm a Model duck"`, can't fly, quacks.
pub fn create_model() -> StrategyDuck {
    Variant::Model.build()
}
