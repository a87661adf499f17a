//! Function-binding encoding: each slot holds an optional callable that is
//! handed the duck it belongs to.

use std::borrow::Cow;
use std::fmt;

use duck_core::{FlyKind, QuackKind, UNBOUND_PLACEHOLDER};
use tracing::{debug, trace, warn};

use crate::Duck;

/// A slot value: takes the owning duck as context and returns one line.
pub type BehaviorFn = Box<dyn Fn(&FnDuck) -> String + Send + Sync>;

// ── Stock behavior functions ──────────────────────────────────────────────────

pub fn fly_with_winds(_duck: &FnDuck) -> String {
    FlyKind::WindPowered.output().to_string()
}

pub fn fly_no_way(_duck: &FnDuck) -> String {
    FlyKind::Flightless.output().to_string()
}

pub fn fly_rocket_powered(_duck: &FnDuck) -> String {
    FlyKind::RocketPowered.output().to_string()
}

pub fn quack(_duck: &FnDuck) -> String {
    QuackKind::Normal.output().to_string()
}

pub fn mute_quack(_duck: &FnDuck) -> String {
    QuackKind::Mute.output().to_string()
}

pub fn squeak(_duck: &FnDuck) -> String {
    QuackKind::Squeak.output().to_string()
}

/// Stock function for a fly registry entry.
pub fn fly_fn(kind: FlyKind) -> fn(&FnDuck) -> String {
    match kind {
        FlyKind::WindPowered   => fly_with_winds,
        FlyKind::Flightless    => fly_no_way,
        FlyKind::RocketPowered => fly_rocket_powered,
    }
}

/// Stock function for a quack registry entry.
pub fn quack_fn(kind: QuackKind) -> fn(&FnDuck) -> String {
    match kind {
        QuackKind::Normal => quack,
        QuackKind::Mute   => mute_quack,
        QuackKind::Squeak => squeak,
    }
}

// ── FnDuck ────────────────────────────────────────────────────────────────────

/// A duck whose slots are optional callables.
///
/// A plain `FnDuck::new()` describes itself as `"I'm a duck"` and has
/// nothing bound; performing either action then yields `"<< >>"`.
///
/// ```rust
/// use duck_entity::{FnDuck, fly_rocket_powered};
///
/// let mut duck = FnDuck::new();
/// assert_eq!(duck.perform_fly(), "<< >>");
/// duck.set_fly_behavior(fly_rocket_powered);
/// assert_eq!(duck.perform_fly(), "I'm flying with a rocket!");
/// ```
pub struct FnDuck {
    display: Cow<'static, str>,
    fly:     Option<BehaviorFn>,
    quack:   Option<BehaviorFn>,
}

impl FnDuck {
    pub const DEFAULT_DISPLAY: &'static str = "I'm a duck";

    /// An unconfigured duck: default description, both slots empty.
    pub fn new() -> Self {
        Self::with_display(Self::DEFAULT_DISPLAY)
    }

    /// A duck with the given description and both slots empty.
    pub fn with_display(display: impl Into<Cow<'static, str>>) -> Self {
        Self { display: display.into(), fly: None, quack: None }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn perform_fly(&self) -> String {
        self.perform(self.fly.as_ref(), "fly")
    }

    pub fn perform_quack(&self) -> String {
        self.perform(self.quack.as_ref(), "quack")
    }

    fn perform(&self, slot: Option<&BehaviorFn>, family: &'static str) -> String {
        match slot {
            Some(behavior) => {
                trace!(duck = %self.display, family, "perform");
                behavior(self)
            }
            None => {
                warn!(duck = %self.display, family, "no behavior bound");
                UNBOUND_PLACEHOLDER.to_string()
            }
        }
    }

    pub fn set_fly_behavior<F>(&mut self, fly: F)
    where
        F: Fn(&FnDuck) -> String + Send + Sync + 'static,
    {
        debug!(duck = %self.display, "fly behavior rebound");
        self.fly = Some(Box::new(fly));
    }

    pub fn set_quack_behavior<F>(&mut self, quack: F)
    where
        F: Fn(&FnDuck) -> String + Send + Sync + 'static,
    {
        debug!(duck = %self.display, "quack behavior rebound");
        self.quack = Some(Box::new(quack));
    }

    /// Empty the fly slot; `perform_fly` falls back to the placeholder.
    pub fn clear_fly_behavior(&mut self) {
        debug!(duck = %self.display, "fly behavior cleared");
        self.fly = None;
    }

    /// Empty the quack slot; `perform_quack` falls back to the placeholder.
    pub fn clear_quack_behavior(&mut self) {
        debug!(duck = %self.display, "quack behavior cleared");
        self.quack = None;
    }

    pub fn has_fly_behavior(&self) -> bool {
        self.fly.is_some()
    }

    pub fn has_quack_behavior(&self) -> bool {
        self.quack.is_some()
    }
}

impl Default for FnDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl Duck for FnDuck {
    fn display(&self) -> &str {
        FnDuck::display(self)
    }

    fn perform_fly(&self) -> Cow<'_, str> {
        Cow::Owned(FnDuck::perform_fly(self))
    }

    fn perform_quack(&self) -> Cow<'_, str> {
        Cow::Owned(FnDuck::perform_quack(self))
    }

    fn rebind_fly(&mut self, kind: FlyKind) {
        self.set_fly_behavior(fly_fn(kind));
    }

    fn rebind_quack(&mut self, kind: QuackKind) {
        self.set_quack_behavior(quack_fn(kind));
    }
}

impl fmt::Debug for FnDuck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDuck")
            .field("display", &self.display)
            .field("fly", &self.fly.is_some())
            .field("quack", &self.quack.is_some())
            .finish()
    }
}
