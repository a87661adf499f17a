//! `duck-variant` — preconfigured ducks and the script that exercises them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`config`]    | `VariantConfig` — display text + default behavior selections   |
//! | [`variant`]   | `Variant` enum (`Mallard`, `Model`), `create_mallard`, `create_model` |
//! | [`builder`]   | `DuckBuilder`, `FromConfig` (build either encoding from config) |
//! | [`roster`]    | `Roster` — name-keyed variant registry, JSON loading           |
//! | [`observer`]  | `PondObserver` trait + `NoopObserver`, `TranscriptObserver`, `StdoutObserver` |
//! | [`scenario`]  | `run_conformance`, `introduce`                                 |
//! | [`error`]     | `VariantError`, `VariantResult<T>`                             |
//!
//! # Quick-start
//!
//! ```rust
//! use duck_core::FlyKind;
//! use duck_entity::Duck;
//! use duck_variant::{Variant, create_model};
//!
//! let mut model = create_model();
//! assert_eq!(model.perform_fly(), "I can't fly");
//! model.rebind_fly(FlyKind::RocketPowered);
//! assert_eq!(model.perform_fly(), "I'm flying with a rocket!");
//!
//! let mallard: duck_entity::FnDuck = Variant::Mallard.build();
//! assert_eq!(mallard.perform_quack(), "Quack");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod roster;
pub mod scenario;
pub mod variant;


pub use builder::{DuckBuilder, FromConfig};
pub use config::VariantConfig;
pub use error::{VariantError, VariantResult};
pub use observer::{NoopObserver, PondObserver, StdoutObserver, TranscriptObserver};
pub use roster::Roster;
pub use scenario::{CONFORMANCE_LINES, conformance_transcript, introduce, run_conformance};
pub use variant::{Variant, create_mallard, create_model};
