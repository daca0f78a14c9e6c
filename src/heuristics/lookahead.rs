/*!
Unit propagation lookahead.

For each candidate atom, each polarity of the atom is *probed*: the literal is assigned at a fresh level, the consequences propagated, and the level then cleared.
A probe ends in one of three ways:
- A conflict, in which case the other polarity is forced, and is returned as the selection at once.
- Every clause satisfied, in which case the probed polarity is returned as the selection at once.
- Some count of propagated literals.

If no probe is decisive, the candidate with the best score from the counts of its two probes is returned, ties to the earlier candidate.
The score is either the [sum](LookaheadScore::Sum) of the counts (UP) or the [product](LookaheadScore::Product) of the counts each increased by one (GUP).
The product favours atoms where both polarities lead to propagation.

Probes leave the trail and implication graph as found, though watch refs may move.
*/

use crate::{
    context::GenericContext,
    heuristics::Selection,
    misc::log::targets::{self},
    procedures::bcp::BCPOk,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// How the counts of the probes of an atom are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookaheadScore {
    /// `true_count + false_count`
    Sum,

    /// `(true_count + 1) * (false_count + 1)`
    Product,
}

/// The outcome of a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// Propagation found a conflict.
    Conflict,

    /// Every clause is satisfied.
    Satisfied,

    /// A count of the literals propagated.
    Propagated(usize),
}

impl<R: rand::Rng> GenericContext<R> {
    /// Probes `literal` at a fresh level.
    ///
    /// The atom of `literal` must be unassigned.
    pub fn probe(&mut self, literal: CLiteral) -> Result<Probe, ErrorKind> {
        let base_level = self.level;
        self.level += 1;

        if !self.assign_literal(literal) {
            self.backjump(base_level);
            return Err(ErrorKind::from(err::TrailError::ValueConflict(literal)));
        }

        let outcome = match self.propagate() {
            Ok(BCPOk::Conflict(_)) => Ok(Probe::Conflict),

            Ok(BCPOk::Exhausted) => {
                let satisfied = self
                    .clause_db
                    .all_clauses()
                    .all(|clause| clause.is_satisfied(&self.trail));

                match satisfied {
                    true => Ok(Probe::Satisfied),
                    false => Ok(Probe::Propagated(
                        self.trail.level_assignments(self.level).len() - 1,
                    )),
                }
            }

            Err(e) => Err(e),
        };

        self.backjump(base_level);
        outcome
    }

    /// A selection from `candidates` by lookahead.
    pub(super) fn lookahead_selection(
        &mut self,
        candidates: &[Atom],
        scoring: LookaheadScore,
    ) -> Result<Option<Selection>, ErrorKind> {
        let mut best: Option<(Atom, usize)> = None;

        for atom in candidates {
            let positive = CLiteral::new(*atom, true);

            let true_count = match self.probe(positive)? {
                Probe::Conflict => return Ok(Some(Selection::with_polarity(*atom, false))),
                Probe::Satisfied => return Ok(Some(Selection::with_polarity(*atom, true))),
                Probe::Propagated(count) => count,
            };

            let false_count = match self.probe(positive.negate())? {
                Probe::Conflict => return Ok(Some(Selection::with_polarity(*atom, true))),
                Probe::Satisfied => return Ok(Some(Selection::with_polarity(*atom, false))),
                Probe::Propagated(count) => count,
            };

            let score = match scoring {
                LookaheadScore::Sum => true_count + false_count,
                LookaheadScore::Product => (true_count + 1) * (false_count + 1),
            };
            log::trace!(target: targets::LOOKAHEAD, "{atom}: {true_count} / {false_count}, scored {score}");

            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((*atom, score)),
            }
        }

        Ok(best.map(|(atom, _)| Selection::free(atom)))
    }
}
