//! Repeated solves with a fixed configuration make the same decisions.

mod common;

use std::{cell::RefCell, rc::Rc};

use cdcl_sat::{
    config::{Config, Heuristic, Propagation},
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
};

/// The decisions made on a solve, the report, and the count of conflicts.
fn decisions_and_report(
    config: Config,
    atoms: u32,
    formula: &common::Formula,
) -> (Vec<CLiteral>, Report, usize) {
    let decisions = Rc::new(RefCell::new(Vec::default()));
    let decisions_clone = decisions.clone();

    let mut the_context = Context::from_clauses(config, atoms, formula).unwrap();
    the_context.set_callback_decision(Box::new(move |literal: CLiteral| {
        decisions_clone.borrow_mut().push(literal)
    }));

    let report = the_context.solve().unwrap();
    let decisions = decisions.borrow().clone();
    (decisions, report, the_context.counters.total_conflicts)
}

#[test]
fn repeat_solves() {
    let mut conflicts = 0;
    for heuristic in Heuristic::ALL {
        for seed in [0, 1, 42] {
            let formula = common::random_formula(seed + 500, 10, 42, 3..=3);

            let mut config = common::config_with(heuristic, Propagation::Watched);
            config.seed.value = seed;

            let first = decisions_and_report(config.clone(), 10, &formula);
            let second = decisions_and_report(config, 10, &formula);
            assert_eq!(first, second, "{heuristic} with seed {seed}");
            conflicts += first.2;
        }
    }
    assert!(conflicts > 0);
}

#[test]
fn ordered_decisions() {
    let mut config = common::config_with(Heuristic::Ordered, Propagation::Watched);
    config.pure_literals.value = false;

    let (decisions, report, _) =
        decisions_and_report(config, 3, &vec![vec![1, 2, 3], vec![-1, 2]]);
    assert_eq!(report, Report::Satisfiable);
    assert_eq!(decisions, vec![1, 3]);
}

#[test]
fn variants_agree() {
    let mut conflicts = 0;
    for seed in 0..10 {
        let formula = common::random_formula(seed + 900, 8, 30, 3..=3);

        let watched = common::config_with(Heuristic::Ordered, Propagation::Watched);
        let occurrence = common::config_with(Heuristic::Ordered, Propagation::Occurrence);

        let (watched_decisions, watched_report, watched_conflicts) =
            decisions_and_report(watched, 8, &formula);
        let (occurrence_decisions, occurrence_report, occurrence_conflicts) =
            decisions_and_report(occurrence, 8, &formula);
        assert_eq!(watched_report, occurrence_report);
        assert_eq!(watched_decisions, occurrence_decisions);
        assert_eq!(watched_conflicts, occurrence_conflicts);
        conflicts += watched_conflicts;
    }
    assert!(conflicts > 0);
}
