//! The scripted conformance run and the roster introduction.

use duck_core::{BehaviorFamily, FlyKind};
use duck_entity::Duck;
use tracing::debug;

use crate::{FromConfig, PondObserver, TranscriptObserver, Variant};

/// Lines the conformance run must produce, in order.
pub const CONFORMANCE_LINES: [&str; 5] = [
    "Quack",
    "I'm flying!!",
    "Quack",
    "I can't fly",
    "I'm flying with a rocket!",
];

/// Exercise both built-in variants in encoding `D`:
///
/// 1. Mallard quacks, then flies.
/// 2. Model quacks, then tries to fly.
/// 3. Model's fly slot is rebound to `RocketPowered` and it flies again.
pub fn run_conformance<D: FromConfig>(observer: &mut dyn PondObserver) {
    debug!(encoding = std::any::type_name::<D>(), "conformance run");

    let mallard: D = Variant::Mallard.build();
    emit(observer, &mallard, mallard.perform_quack().as_ref());
    emit(observer, &mallard, mallard.perform_fly().as_ref());

    let mut model: D = Variant::Model.build();
    emit(observer, &model, model.perform_quack().as_ref());
    emit(observer, &model, model.perform_fly().as_ref());

    let rocket = FlyKind::RocketPowered;
    model.rebind_fly(rocket);
    observer.on_rebind(model.display(), BehaviorFamily::Fly, rocket.as_str());
    emit(observer, &model, model.perform_fly().as_ref());
}

/// Run [`run_conformance`] and return just the lines.
pub fn conformance_transcript<D: FromConfig>() -> Vec<String> {
    let mut transcript = TranscriptObserver::new();
    run_conformance::<D>(&mut transcript);
    transcript.lines
}

/// Have `duck` introduce itself: display, fly, quack, swim.
pub fn introduce<D: Duck>(duck: &D, observer: &mut dyn PondObserver) {
    emit(observer, duck, duck.display());
    emit(observer, duck, duck.perform_fly().as_ref());
    emit(observer, duck, duck.perform_quack().as_ref());
    emit(observer, duck, duck_entity::swim());
}

fn emit<D: Duck + ?Sized>(observer: &mut dyn PondObserver, duck: &D, line: &str) {
    observer.on_line(duck.display(), line);
}
