//! The `FlyBehavior` trait — the fly slot's extension point.

use duck_core::FlyKind;

use crate::short_type_name;

/// Anything that can occupy a duck's fly slot.
///
/// # Example
///
/// ```rust
/// use duck_behavior::FlyBehavior;
///
/// struct Glide;
///
/// impl FlyBehavior for Glide {
///     fn fly(&self) -> &str {
///         "I'm gliding"
///     }
/// }
///
/// let slot: Box<dyn FlyBehavior> = Box::new(Glide);
/// assert_eq!(slot.fly(), "I'm gliding");
/// assert_eq!(slot.name(), "Glide");
/// ```
pub trait FlyBehavior: Send + Sync + 'static {
    /// Produce this behavior's line.  Must return the same text every call.
    fn fly(&self) -> &str;

    /// Short label used in log output.
    ///
    /// Default: the implementing type's name.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }
}

impl FlyBehavior for FlyKind {
    fn fly(&self) -> &str {
        self.output()
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

// ── Stock implementers ────────────────────────────────────────────────────────

/// Wind-powered flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlyWithWings;

/// A duck that can't fly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlyNoWay;

/// Rocket-powered flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlyRocketPowered;

macro_rules! fly_implementer {
    ($ty:ident => $kind:expr) => {
        impl $ty {
            /// Registry entry this type stands for.
            pub const KIND: FlyKind = $kind;
        }

        impl FlyBehavior for $ty {
            fn fly(&self) -> &str {
                Self::KIND.output()
            }
        }

        impl From<$ty> for FlyKind {
            fn from(_: $ty) -> FlyKind {
                $ty::KIND
            }
        }
    };
}

fly_implementer!(FlyWithWings => FlyKind::WindPowered);
fly_implementer!(FlyNoWay => FlyKind::Flightless);
fly_implementer!(FlyRocketPowered => FlyKind::RocketPowered);
