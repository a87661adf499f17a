//! `duck-entity` — ducks that delegate flying and quacking to swappable slots.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`duck`]      | `Duck` trait shared by both encodings, `swim()`             |
//! | [`strategy`]  | `StrategyDuck` — slots hold `Box<dyn FlyBehavior>` etc.     |
//! | [`bound`]     | `FnDuck` — slots hold optional callables taking the duck    |
//!
//! # Two encodings, one contract
//!
//! `StrategyDuck` always has both slots filled; its slots are trait objects
//! from `duck-behavior`.  `FnDuck` slots are `Option`s holding closures that
//! receive the duck itself; an empty slot performs as
//! [`UNBOUND_PLACEHOLDER`][duck_core::UNBOUND_PLACEHOLDER].
//!
//! Both implement [`Duck`], so code written against the trait (the
//! conformance script in `duck-variant`, the tests) runs unchanged on either.
//!
//! Ducks are single-owner values: rebinding takes `&mut self`.

pub mod bound;
pub mod duck;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use bound::{
    BehaviorFn, FnDuck, fly_fn, fly_no_way, fly_rocket_powered, fly_with_winds, mute_quack,
    quack, quack_fn, squeak,
};
pub use duck::{Duck, swim};
pub use strategy::StrategyDuck;
