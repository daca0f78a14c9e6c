#![allow(dead_code)]

use std::{cell::RefCell, ops::RangeInclusive, rc::Rc};

use cdcl_sat::{
    config::{Config, Heuristic, Propagation},
    context::Context,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::atom::Atom,
};
use rand::{Rng, SeedableRng};

pub type Formula = Vec<Vec<i32>>;

/// A config with the given heuristic and propagation variant, and otherwise default.
pub fn config_with(heuristic: Heuristic, propagation: Propagation) -> Config {
    let mut config = Config::default();
    config.heuristic.value = heuristic;
    config.propagation.value = propagation;
    config
}

/// Every combination of heuristic and propagation variant.
pub fn all_configs() -> Vec<Config> {
    let mut configs = Vec::default();
    for heuristic in Heuristic::ALL {
        for propagation in [Propagation::Watched, Propagation::Occurrence] {
            configs.push(config_with(heuristic, propagation));
        }
    }
    configs
}

/// The pigeonhole formula for `pigeons` pigeons and `holes` holes.
///
/// Atom `(p * holes) + h + 1` is true when pigeon `p` is in hole `h`.
pub fn pigeonhole(pigeons: i32, holes: i32) -> (Atom, Formula) {
    let atom = |p: i32, h: i32| p * holes + h + 1;
    let mut formula = Formula::default();

    for p in 0..pigeons {
        formula.push((0..holes).map(|h| atom(p, h)).collect());
    }

    for h in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                formula.push(vec![-atom(p, h), -atom(q, h)]);
            }
        }
    }

    ((pigeons * holes) as Atom, formula)
}

/// Whether `clause` is satisfied by the valuation encoded by the bits of `bits`, where atom `a` is true if bit `a - 1` is set.
pub fn satisfied_by_bits(clause: &[i32], bits: u32) -> bool {
    clause.iter().any(|literal| {
        let value = bits & (1 << (literal.unsigned_abs() - 1)) != 0;
        value == (*literal > 0)
    })
}

/// Every valuation (as bits) of `atoms` atoms which satisfies `formula`.
pub fn models(atoms: Atom, formula: &Formula) -> Vec<u32> {
    (0..(1_u32 << atoms))
        .filter(|bits| formula.iter().all(|clause| satisfied_by_bits(clause, *bits)))
        .collect()
}

pub fn brute_force_satisfiable(atoms: Atom, formula: &Formula) -> bool {
    !models(atoms, formula).is_empty()
}

/// A random formula with clauses over distinct atoms, with each length drawn from `lengths`, drawn from a generator seeded with `seed`.
///
/// No clause is a unit, so (pure literals aside) a solve must decide.
pub fn random_formula(
    seed: u64,
    atoms: Atom,
    clauses: usize,
    lengths: RangeInclusive<usize>,
) -> Formula {
    assert!(*lengths.start() > 1 && *lengths.end() <= atoms as usize);
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    let mut formula = Formula::default();

    for _ in 0..clauses {
        let length = rng.gen_range(lengths.clone());
        let mut clause: Vec<i32> = Vec::with_capacity(length);
        while clause.len() < length {
            let atom = rng.gen_range(1..=atoms) as i32;
            if clause.iter().any(|literal| literal.abs() == atom) {
                continue;
            }
            match rng.gen_bool(0.5) {
                true => clause.push(atom),
                false => clause.push(-atom),
            }
        }
        formula.push(clause);
    }

    formula
}

/// Solves `formula` on a context with the given config, collecting each learnt clause.
pub fn solve_collecting(
    config: Config,
    atoms: Atom,
    formula: &Formula,
) -> (Context, Report, Vec<Vec<i32>>) {
    let learnt = Rc::new(RefCell::new(Vec::default()));

    let mut the_context = Context::from_clauses(config, atoms, formula).unwrap();
    let learnt_clone = learnt.clone();
    the_context.set_callback_addition(Box::new(move |clause: &[i32]| {
        learnt_clone.borrow_mut().push(clause.to_vec())
    }));

    let report = the_context.solve().unwrap();
    let learnt = learnt.borrow().clone();
    (the_context, report, learnt)
}
