//! `duck-behavior` — the two strategy traits and their stock implementers.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`fly`]    | `FlyBehavior` trait, `FlyWithWings`, `FlyNoWay`, `FlyRocketPowered` |
//! | [`quack`]  | `QuackBehavior` trait, `Quack`, `MuteQuack`, `Squeak`          |
//!
//! # Design notes
//!
//! Each family gets its own trait, so a quack behavior can never be placed
//! in a fly slot.  The closed registries from `duck-core` (`FlyKind`,
//! `QuackKind`) implement the traits too; a slot may hold either a unit
//! struct from this crate, a registry entry, or any user type.
//!
//! Behaviors are stateless and the traits require `Send + Sync`, so a boxed
//! behavior can move freely with the duck that owns it.

pub mod fly;
pub mod quack;


pub use fly::{FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings};
pub use quack::{MuteQuack, Quack, QuackBehavior, Squeak};

/// Last path segment of a type name, e.g. `FlyNoWay` for
/// `duck_behavior::fly::FlyNoWay`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
