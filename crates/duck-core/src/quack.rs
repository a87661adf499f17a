//! The closed quack behavior registry.

use std::str::FromStr;

use crate::family::normalize_name;
use crate::{BehaviorFamily, DuckError};

/// Every quack behavior a duck can be bound to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", try_from = "String"))]
pub enum QuackKind {
    Normal,
    Mute,
    Squeak,
}

impl QuackKind {
    pub const ALL: [QuackKind; 3] = [QuackKind::Normal, QuackKind::Mute, QuackKind::Squeak];

    #[inline]
    pub fn output(self) -> &'static str {
        match self {
            QuackKind::Normal => "Quack",
            QuackKind::Mute   => "<< Silence >>",
            QuackKind::Squeak => "Squeak",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuackKind::Normal => "normal",
            QuackKind::Mute   => "mute",
            QuackKind::Squeak => "squeak",
        }
    }
}

impl std::fmt::Display for QuackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuackKind {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        QuackKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| DuckError::UnknownBehavior {
                family: BehaviorFamily::Quack,
                name:   s.to_string(),
            })
    }
}

impl TryFrom<String> for QuackKind {
    type Error = DuckError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
