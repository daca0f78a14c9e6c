//! Solves of small random formulas, checked against an enumeration of every valuation.

mod common;

use cdcl_sat::{config::Heuristic, reports::Report, structures::literal::Literal};

/// Checks a solve of `formula` with each config against the models of the formula.
///
/// Returns the count of conflicts over every solve.
fn check_formula(atoms: u32, formula: &common::Formula) -> usize {
    let mut conflicts = 0;
    let models = common::models(atoms, formula);

    for config in common::all_configs() {
        let heuristic = config.heuristic.value;
        let (the_context, report, learnt) = common::solve_collecting(config, atoms, formula);
        conflicts += the_context.counters.total_conflicts;
        assert_eq!(learnt.len(), the_context.clause_db.learnt_clause_count());

        match models.is_empty() {
            true => assert_eq!(report, Report::Unsatisfiable, "{heuristic} on {formula:?}"),
            false => assert_eq!(report, Report::Satisfiable, "{heuristic} on {formula:?}"),
        }

        if report == Report::Satisfiable {
            assert_eq!(the_context.validate_model(), Ok(true));

            let model = the_context.model().unwrap();
            let bits = model
                .iter()
                .filter(|literal| literal.polarity())
                .fold(0_u32, |bits, literal| bits | 1 << (literal.atom() - 1));
            assert!(models.contains(&bits), "{heuristic} on {formula:?}");
        }

        for clause in &learnt {
            assert!(
                models
                    .iter()
                    .all(|bits| common::satisfied_by_bits(clause, *bits)),
                "{heuristic} learnt {clause:?} from {formula:?}"
            );
        }
    }

    conflicts
}

#[test]
fn three_sat_at_threshold() {
    let mut conflicts = 0;
    for seed in 0..40 {
        let formula = common::random_formula(seed, 8, 34, 3..=3);
        conflicts += check_formula(8, &formula);
    }
    assert!(conflicts > 0);
}

#[test]
fn mixed_lengths() {
    let mut conflicts = 0;
    for seed in 100..140 {
        let formula = common::random_formula(seed, 7, 26, 2..=4);
        conflicts += check_formula(7, &formula);
    }
    assert!(conflicts > 0);
}

#[test]
fn overconstrained() {
    let mut unsatisfiable = 0;
    for seed in 200..220 {
        let formula = common::random_formula(seed, 10, 60, 3..=3);
        let conflicts = check_formula(10, &formula);
        if !common::brute_force_satisfiable(10, &formula) {
            unsatisfiable += 1;
            // Without units, each refutation requires some conflict above level zero.
            assert!(conflicts >= common::all_configs().len());
        }
    }
    assert!(unsatisfiable > 0);
}

#[test]
fn pigeonholes() {
    for (pigeons, holes) in [(2, 1), (3, 2), (3, 3), (4, 3)] {
        let (atoms, formula) = common::pigeonhole(pigeons, holes);
        check_formula(atoms, &formula);
    }
}

#[test]
fn seeds_agree() {
    let formula = common::random_formula(7, 8, 34, 3..=3);
    let satisfiable = common::brute_force_satisfiable(8, &formula);

    for seed in 0..10 {
        let mut config = common::config_with(Heuristic::Random, cdcl_sat::config::Propagation::Watched);
        config.seed.value = seed;
        let (_, report, _) = common::solve_collecting(config, 8, &formula);
        assert_eq!(report == Report::Satisfiable, satisfiable);
    }
}
