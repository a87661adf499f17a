//! The closed fly behavior registry.

use std::str::FromStr;

use crate::family::normalize_name;
use crate::{BehaviorFamily, DuckError};

/// Every fly behavior a duck can be bound to.
///
/// `duck-behavior` implements `FlyBehavior` for this enum, so a `FlyKind`
/// can sit directly in a fly slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", try_from = "String"))]
pub enum FlyKind {
    /// Flaps its wings.
    WindPowered,
    /// Stays on the ground.
    Flightless,
    /// Strapped to a rocket.
    RocketPowered,
}

impl FlyKind {
    pub const ALL: [FlyKind; 3] = [
        FlyKind::WindPowered,
        FlyKind::Flightless,
        FlyKind::RocketPowered,
    ];

    /// The line this behavior produces when performed.
    #[inline]
    pub fn output(self) -> &'static str {
        match self {
            FlyKind::WindPowered   => "I'm flying!!",
            FlyKind::Flightless    => "I can't fly",
            FlyKind::RocketPowered => "I'm flying with a rocket!",
        }
    }

    /// Registry name, as used in roster JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FlyKind::WindPowered   => "wind_powered",
            FlyKind::Flightless    => "flightless",
            FlyKind::RocketPowered => "rocket_powered",
        }
    }
}

impl std::fmt::Display for FlyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlyKind {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        FlyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| DuckError::UnknownBehavior {
                family: BehaviorFamily::Fly,
                name:   s.to_string(),
            })
    }
}

impl TryFrom<String> for FlyKind {
    type Error = DuckError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
