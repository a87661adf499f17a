//! Observer trait for the lines a scripted pond run produces.

use duck_core::BehaviorFamily;

/// Callbacks invoked by [`run_conformance`][crate::run_conformance] and
/// [`introduce`][crate::introduce].
///
/// Both methods default to no-ops so implementors only override what they
/// care about.
pub trait PondObserver {
    /// A duck produced a line of output.
    fn on_line(&mut self, _duck: &str, _line: &str) {}

    /// A slot on `duck` was rebound to `behavior`.
    fn on_rebind(&mut self, _duck: &str, _family: BehaviorFamily, _behavior: &str) {}
}

/// A [`PondObserver`] that does nothing.
pub struct NoopObserver;

impl PondObserver for NoopObserver {}

/// One recorded rebind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rebind {
    pub duck:     String,
    pub family:   BehaviorFamily,
    pub behavior: String,
}

/// Records every line and rebind, in order.
#[derive(Clone, Debug, Default)]
pub struct TranscriptObserver {
    pub lines:   Vec<String>,
    pub rebinds: Vec<Rebind>,
}

impl TranscriptObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PondObserver for TranscriptObserver {
    fn on_line(&mut self, _duck: &str, line: &str) {
        self.lines.push(line.to_string());
    }

    fn on_rebind(&mut self, duck: &str, family: BehaviorFamily, behavior: &str) {
        self.rebinds.push(Rebind {
            duck:     duck.to_string(),
            family,
            behavior: behavior.to_string(),
        });
    }
}

/// Prints each line to stdout, exactly as the duck said it.
pub struct StdoutObserver;

impl PondObserver for StdoutObserver {
    fn on_line(&mut self, _duck: &str, line: &str) {
        println!("{line}");
    }
}
