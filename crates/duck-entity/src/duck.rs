//! The `Duck` trait — what every encoding exposes to callers.

use std::borrow::Cow;

use duck_core::{FlyKind, QuackKind, SWIM_LINE};

/// What every duck does, decoys included.
///
/// Callable without any duck instance.
#[inline]
pub fn swim() -> &'static str {
    SWIM_LINE
}

/// Behavior-delegating duck.
///
/// `rebind_*` take registry entries so that generic code can drive either
/// encoding; each concrete type also has a `set_*_behavior` method accepting
/// arbitrary implementers.
pub trait Duck {
    /// Fixed description chosen at construction.  Never changes.
    fn display(&self) -> &str;

    /// Delegate to the fly slot.
    fn perform_fly(&self) -> Cow<'_, str>;

    /// Delegate to the quack slot.
    fn perform_quack(&self) -> Cow<'_, str>;

    /// Replace the fly slot with a registry behavior.  Leaves the quack slot alone.
    fn rebind_fly(&mut self, kind: FlyKind);

    /// Replace the quack slot with a registry behavior.  Leaves the fly slot alone.
    fn rebind_quack(&mut self, kind: QuackKind);

    /// Same as the free [`swim`] function.
    fn swim() -> &'static str
    where
        Self: Sized,
    {
        swim()
    }
}
