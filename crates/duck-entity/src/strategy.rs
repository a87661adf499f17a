//! Trait-object encoding: each slot holds a behavior implementer.

use std::borrow::Cow;
use std::fmt;

use duck_behavior::{FlyBehavior, QuackBehavior};
use duck_core::{FlyKind, QuackKind};
use tracing::{debug, trace};

use crate::Duck;

/// A duck whose slots are boxed [`FlyBehavior`] / [`QuackBehavior`] values.
///
/// Both slots are always bound, so `perform_*` never falls back to the
/// placeholder.
///
/// ```rust
/// use duck_behavior::{FlyNoWay, FlyRocketPowered, Quack};
/// use duck_entity::StrategyDuck;
///
/// let mut model = StrategyDuck::new("I'm a Model duck", FlyNoWay, Quack);
/// assert_eq!(model.perform_fly(), "I can't fly");
/// model.set_fly_behavior(FlyRocketPowered);
/// assert_eq!(model.perform_fly(), "I'm flying with a rocket!");
/// ```
pub struct StrategyDuck {
    display: Cow<'static, str>,
    fly:     Box<dyn FlyBehavior>,
    quack:   Box<dyn QuackBehavior>,
}

impl StrategyDuck {
    pub fn new(
        display: impl Into<Cow<'static, str>>,
        fly:     impl FlyBehavior,
        quack:   impl QuackBehavior,
    ) -> Self {
        Self {
            display: display.into(),
            fly:     Box::new(fly),
            quack:   Box::new(quack),
        }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn perform_fly(&self) -> &str {
        trace!(duck = %self.display, behavior = self.fly.name(), "perform fly");
        self.fly.fly()
    }

    pub fn perform_quack(&self) -> &str {
        trace!(duck = %self.display, behavior = self.quack.name(), "perform quack");
        self.quack.quack()
    }

    /// Swap the fly slot.  Takes effect on the next `perform_fly`.
    pub fn set_fly_behavior(&mut self, fly: impl FlyBehavior) {
        debug!(
            duck = %self.display,
            from = self.fly.name(),
            to   = fly.name(),
            "fly behavior rebound"
        );
        self.fly = Box::new(fly);
    }

    /// Swap the quack slot.  Takes effect on the next `perform_quack`.
    pub fn set_quack_behavior(&mut self, quack: impl QuackBehavior) {
        debug!(
            duck = %self.display,
            from = self.quack.name(),
            to   = quack.name(),
            "quack behavior rebound"
        );
        self.quack = Box::new(quack);
    }

    pub fn fly_behavior(&self) -> &dyn FlyBehavior {
        self.fly.as_ref()
    }

    pub fn quack_behavior(&self) -> &dyn QuackBehavior {
        self.quack.as_ref()
    }
}

impl Duck for StrategyDuck {
    fn display(&self) -> &str {
        StrategyDuck::display(self)
    }

    fn perform_fly(&self) -> Cow<'_, str> {
        Cow::Borrowed(StrategyDuck::perform_fly(self))
    }

    fn perform_quack(&self) -> Cow<'_, str> {
        Cow::Borrowed(StrategyDuck::perform_quack(self))
    }

    fn rebind_fly(&mut self, kind: FlyKind) {
        self.set_fly_behavior(kind);
    }

    fn rebind_quack(&mut self, kind: QuackKind) {
        self.set_quack_behavior(kind);
    }
}

impl fmt::Debug for StrategyDuck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyDuck")
            .field("display", &self.display)
            .field("fly", &self.fly.name())
            .field("quack", &self.quack.name())
            .finish()
    }
}
