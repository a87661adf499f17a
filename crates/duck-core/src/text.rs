//! Output lines that do not depend on any bound behavior.

/// What every duck says when asked to swim, decoys included.
pub const SWIM_LINE: &str = "All ducks float, even decoys!";

/// Emitted by `perform_*` when the slot has no behavior bound.
pub const UNBOUND_PLACEHOLDER: &str = "<< >>";
