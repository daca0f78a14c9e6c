/*!
Settling level zero, before any decision is made.

- Each unit clause has its literal assigned, and the consequences are propagated.
  As there is no decision at level zero, a conflict here shows the formula is unsatisfiable.
- If [configured](crate::config::Config::pure_literals), each unassigned atom is then checked for purity:
  + If the positive literal of the atom occurs in no unsatisfied clause, the atom is assigned false.
  + Otherwise, if the negative literal of the atom occurs in no unsatisfied clause, the atom is assigned true.

  The consequences of each pass are propagated, and passes continue until no atom is assigned.

A pure literal is not a consequence of the formula, though if the formula is satisfiable it is satisfiable with the pure literal true.
So, a conflict after assigning pure literals still shows the formula is unsatisfiable.
Unit clauses and pure literals have no entry in the implication graph.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::bcp::BCPOk,
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

/// Ok results of settling level zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelZeroOk {
    /// Level zero was settled without conflict.
    Consistent,

    /// Level zero has a conflict, and the formula is unsatisfiable.
    Conflict,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Settles unit clauses and (if configured) pure literals at level zero.
    pub fn settle_level_zero(&mut self) -> Result<LevelZeroOk, ErrorKind> {
        let units: Vec<CLiteral> = self
            .clause_db
            .all_clauses()
            .filter(|clause| clause.literals().len() == 1)
            .map(|clause| clause.literals()[0])
            .collect();

        for unit in units {
            if !self.assign_literal(unit) {
                log::info!(target: targets::LEVEL_ZERO, "Conflicting unit clauses on {}", unit.atom());
                return Ok(LevelZeroOk::Conflict);
            }
        }

        if let BCPOk::Conflict(_) = self.propagate()? {
            return Ok(LevelZeroOk::Conflict);
        }

        if self.config.pure_literals.value {
            loop {
                let assigned = self.assign_pure_literals();
                if assigned == 0 {
                    break;
                }
                log::debug!(target: targets::LEVEL_ZERO, "Assigned {assigned} pure literals");

                if let BCPOk::Conflict(_) = self.propagate()? {
                    return Ok(LevelZeroOk::Conflict);
                }
            }
        }

        Ok(LevelZeroOk::Consistent)
    }

    /// Whether some clause containing `literal` is not satisfied.
    fn required(&self, literal: CLiteral) -> bool {
        self.clause_db.occurrences(literal).iter().any(|key| {
            self.clause_db
                .get(*key)
                .is_ok_and(|clause| !clause.is_satisfied(&self.trail))
        })
    }

    /// A single pass over unassigned atoms, assigning any which are pure.
    ///
    /// Returns a count of the atoms assigned.
    fn assign_pure_literals(&mut self) -> usize {
        let mut assigned = 0;

        for atom in 1..=self.atom_count() {
            if self.trail.value_of_atom(atom).is_some() {
                continue;
            }

            let positive = CLiteral::new(atom, true);
            let pure = match (self.required(positive), self.required(positive.negate())) {
                (false, _) => positive.negate(),
                (true, false) => positive,
                (true, true) => continue,
            };

            log::trace!(target: targets::LEVEL_ZERO, "Pure literal {pure}");
            if self.assign_literal(pure) {
                assigned += 1;
            }
        }

        assigned
    }
}
