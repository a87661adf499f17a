//! Unit tests for duck-entity.

use duck_behavior::{FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, Squeak};
use duck_core::{FlyKind, QuackKind};

use crate::{Duck, FnDuck, StrategyDuck, fly_no_way, fly_with_winds, quack, swim};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn strategy_model() -> StrategyDuck {
    StrategyDuck::new("I'm a Model duck", FlyNoWay, Quack)
}

fn fn_model() -> FnDuck {
    let mut duck = FnDuck::with_display("I'm a Model duck");
    duck.set_fly_behavior(fly_no_way);
    duck.set_quack_behavior(quack);
    duck
}

/// Contract checks that must hold for any encoding.
fn check_rebinding_contract<D: Duck>(mut duck: D) {
    let display = duck.display().to_string();

    for kind in FlyKind::ALL {
        duck.rebind_fly(kind);
        assert_eq!(duck.perform_fly(), kind.output());
        duck.rebind_fly(kind);
        assert_eq!(duck.perform_fly(), kind.output());
    }

    for kind in QuackKind::ALL {
        duck.rebind_quack(kind);
        assert_eq!(duck.perform_quack(), kind.output());
        duck.rebind_quack(kind);
        assert_eq!(duck.perform_quack(), kind.output());
    }

    assert_eq!(duck.display(), display);
}

fn check_slots_are_independent<D: Duck>(mut duck: D) {
    duck.rebind_quack(QuackKind::Squeak);
    for kind in FlyKind::ALL {
        duck.rebind_fly(kind);
        assert_eq!(duck.perform_quack(), "Squeak");
    }

    duck.rebind_fly(FlyKind::RocketPowered);
    for kind in QuackKind::ALL {
        duck.rebind_quack(kind);
        assert_eq!(duck.perform_fly(), "I'm flying with a rocket!");
    }
}

// ── swim ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod swim_tests {
    use super::*;

    #[test]
    fn free_function() {
        assert_eq!(swim(), "All ducks float, even decoys!");
    }

    #[test]
    fn associated_function_needs_no_instance() {
        assert_eq!(StrategyDuck::swim(), swim());
        assert_eq!(<FnDuck as Duck>::swim(), swim());
    }
}

// ── StrategyDuck ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy_tests {
    use super::*;

    #[test]
    fn delegates_to_bound_behaviors() {
        let duck = StrategyDuck::new("I'm a real Mallard duck", FlyWithWings, Quack);
        assert_eq!(duck.perform_fly(), "I'm flying!!");
        assert_eq!(duck.perform_quack(), "Quack");
        assert_eq!(duck.display(), "I'm a real Mallard duck");
    }

    #[test]
    fn set_fly_takes_effect_immediately() {
        let mut duck = strategy_model();
        assert_eq!(duck.perform_fly(), "I can't fly");
        duck.set_fly_behavior(FlyRocketPowered);
        assert_eq!(duck.perform_fly(), "I'm flying with a rocket!");
        assert_eq!(duck.fly_behavior().name(), "FlyRocketPowered");
    }

    #[test]
    fn set_quack_leaves_fly_alone() {
        let mut duck = strategy_model();
        duck.set_quack_behavior(MuteQuack);
        assert_eq!(duck.perform_quack(), "<< Silence >>");
        assert_eq!(duck.perform_fly(), "I can't fly");
        duck.set_quack_behavior(Squeak);
        assert_eq!(duck.quack_behavior().quack(), "Squeak");
    }

    #[test]
    fn rebinding_does_not_touch_other_ducks() {
        let mut a = strategy_model();
        let b = strategy_model();
        a.set_fly_behavior(FlyRocketPowered);
        assert_eq!(b.perform_fly(), "I can't fly");
    }

    #[test]
    fn rebinding_contract() {
        check_rebinding_contract(strategy_model());
    }

    #[test]
    fn slots_are_independent() {
        check_slots_are_independent(strategy_model());
    }

    #[test]
    fn debug_shows_behavior_names() {
        let dbg = format!("{:?}", strategy_model());
        assert!(dbg.contains("FlyNoWay"), "got {dbg}");
        assert!(dbg.contains("Quack"), "got {dbg}");
    }
}

// ── FnDuck ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fn_duck_tests {
    use super::*;

    #[test]
    fn plain_duck_is_unbound() {
        let duck = FnDuck::new();
        assert_eq!(duck.display(), "I'm a duck");
        assert!(!duck.has_fly_behavior());
        assert!(!duck.has_quack_behavior());
        assert_eq!(duck.perform_fly(), "<< >>");
        assert_eq!(duck.perform_quack(), "<< >>");
    }

    #[test]
    fn binding_one_slot_leaves_other_unbound() {
        let mut duck = FnDuck::new();
        duck.set_fly_behavior(fly_with_winds);
        assert_eq!(duck.perform_fly(), "I'm flying!!");
        assert_eq!(duck.perform_quack(), "<< >>");
    }

    #[test]
    fn clearing_restores_placeholder() {
        let mut duck = fn_model();
        duck.clear_fly_behavior();
        assert_eq!(duck.perform_fly(), "<< >>");
        assert_eq!(duck.perform_quack(), "Quack");
        duck.clear_quack_behavior();
        assert_eq!(duck.perform_quack(), "<< >>");
    }

    #[test]
    fn behavior_receives_owning_duck() {
        let mut duck = FnDuck::with_display("Decoy");
        duck.set_quack_behavior(|d: &FnDuck| format!("{} says nothing", d.display()));
        assert_eq!(duck.perform_quack(), "Decoy says nothing");
    }

    #[test]
    fn rebinding_contract() {
        check_rebinding_contract(fn_model());
    }

    #[test]
    fn rebinding_contract_from_unbound() {
        check_rebinding_contract(FnDuck::new());
    }

    #[test]
    fn slots_are_independent() {
        check_slots_are_independent(fn_model());
    }

    #[test]
    fn trait_perform_matches_inherent() {
        let duck = fn_model();
        assert_eq!(Duck::perform_fly(&duck), duck.perform_fly());
        assert_eq!(Duck::perform_quack(&FnDuck::new()), "<< >>");
    }

    #[test]
    fn debug_shows_bound_slots() {
        assert_eq!(
            format!("{:?}", FnDuck::new()),
            "FnDuck { display: \"I'm a duck\", fly: false, quack: false }"
        );
    }
}
