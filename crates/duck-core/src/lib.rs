//! `duck-core` — foundational types for the `duck_strategy` workspace.
//!
//! Every other `duck-*` crate depends on this one.  It has no `duck-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`family`]   | `BehaviorFamily` — which slot a behavior belongs to    |
//! | [`fly`]      | `FlyKind` — the closed fly behavior registry           |
//! | [`quack`]    | `QuackKind` — the closed quack behavior registry       |
//! | [`text`]     | Fixed output lines shared by all ducks                 |
//! | [`error`]    | `DuckError`, `DuckResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `FlyKind`/`QuackKind`.   |
//!           | Required by `duck-variant` for roster JSON.                |

pub mod error;
pub mod family;
pub mod fly;
pub mod quack;
pub mod text;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DuckError, DuckResult};
pub use family::BehaviorFamily;
pub use fly::FlyKind;
pub use quack::QuackKind;
pub use text::{SWIM_LINE, UNBOUND_PLACEHOLDER};
