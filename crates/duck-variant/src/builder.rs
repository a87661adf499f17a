//! Fluent builder for ducks in either encoding.

use std::borrow::Cow;

use duck_core::{FlyKind, QuackKind};
use duck_entity::{Duck, FnDuck, StrategyDuck, fly_fn, quack_fn};

use crate::VariantConfig;

/// Build ducks from a display line and optional behavior selections.
///
/// # Defaults
///
/// | Slot    | `build_strategy()`      | `build_fn()`  |
/// |---------|-------------------------|---------------|
/// | `fly`   | `FlyKind::Flightless`   | unbound       |
/// | `quack` | `QuackKind::Mute`       | unbound       |
///
/// The trait-object encoding has no empty slot, so it falls back to the
/// quietest behavior of each family instead.
///
/// # Example
///
/// ```rust
/// use duck_core::{FlyKind, QuackKind};
/// use duck_variant::DuckBuilder;
///
/// let rubber = DuckBuilder::new("I'm a rubber duckie")
///     .quack(QuackKind::Squeak)
///     .build_strategy();
/// assert_eq!(rubber.perform_fly(), "I can't fly");
/// assert_eq!(rubber.perform_quack(), "Squeak");
///
/// let blank = DuckBuilder::new("I'm a blank duck").build_fn();
/// assert_eq!(blank.perform_fly(), "<< >>");
/// ```
#[derive(Clone, Debug)]
pub struct DuckBuilder {
    display: Cow<'static, str>,
    fly:     Option<FlyKind>,
    quack:   Option<QuackKind>,
}

impl DuckBuilder {
    pub fn new(display: impl Into<Cow<'static, str>>) -> Self {
        Self { display: display.into(), fly: None, quack: None }
    }

    /// Start from a preset; both slots are selected.
    pub fn from_config(config: &VariantConfig) -> Self {
        Self::new(config.display.clone())
            .fly(config.fly)
            .quack(config.quack)
    }

    pub fn fly(mut self, kind: FlyKind) -> Self {
        self.fly = Some(kind);
        self
    }

    pub fn quack(mut self, kind: QuackKind) -> Self {
        self.quack = Some(kind);
        self
    }

    pub fn build_strategy(self) -> StrategyDuck {
        StrategyDuck::new(
            self.display,
            self.fly.unwrap_or(FlyKind::Flightless),
            self.quack.unwrap_or(QuackKind::Mute),
        )
    }

    pub fn build_fn(self) -> FnDuck {
        let mut duck = FnDuck::with_display(self.display);
        if let Some(kind) = self.fly {
            duck.set_fly_behavior(fly_fn(kind));
        }
        if let Some(kind) = self.quack {
            duck.set_quack_behavior(quack_fn(kind));
        }
        duck
    }
}

// ── FromConfig ────────────────────────────────────────────────────────────────

/// A duck encoding that can be built from a [`VariantConfig`].
pub trait FromConfig: Duck + Sized {
    fn from_config(config: &VariantConfig) -> Self;
}

impl FromConfig for StrategyDuck {
    fn from_config(config: &VariantConfig) -> Self {
        DuckBuilder::from_config(config).build_strategy()
    }
}

impl FromConfig for FnDuck {
    fn from_config(config: &VariantConfig) -> Self {
        DuckBuilder::from_config(config).build_fn()
    }
}
