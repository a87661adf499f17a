//! The `QuackBehavior` trait — the quack slot's extension point.

use duck_core::QuackKind;

use crate::short_type_name;

/// Anything that can occupy a duck's quack slot.
///
/// Same contract as [`FlyBehavior`][crate::FlyBehavior]: no inputs, fixed
/// output, no failure modes.
pub trait QuackBehavior: Send + Sync + 'static {
    fn quack(&self) -> &str;

    fn name(&self) -> &str {
        short_type_name::<Self>()
    }
}

impl QuackBehavior for QuackKind {
    fn quack(&self) -> &str {
        self.output()
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

// ── Stock implementers ────────────────────────────────────────────────────────

/// An ordinary quack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quack;

/// Silence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MuteQuack;

/// A rubber-duck squeak.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Squeak;

macro_rules! quack_implementer {
    ($ty:ident => $kind:expr) => {
        impl $ty {
            pub const KIND: QuackKind = $kind;
        }

        impl QuackBehavior for $ty {
            fn quack(&self) -> &str {
                Self::KIND.output()
            }
        }

        impl From<$ty> for QuackKind {
            fn from(_: $ty) -> QuackKind {
                $ty::KIND
            }
        }
    };
}

quack_implementer!(Quack => QuackKind::Normal);
quack_implementer!(MuteQuack => QuackKind::Mute);
quack_implementer!(Squeak => QuackKind::Squeak);
