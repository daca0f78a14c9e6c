/*!
Boolean constraint propagation.

# Overview

Each assignment falsifies a literal, and the falsified literal is queued on the context.
Propagation takes literals from the front of the queue until the queue is empty, or a conflict is found.

For a falsified literal, each clause containing the literal is examined, in order of registration:
- If the clause is unit, the remaining literal is assigned at the current level, recorded in the implication graph with the negation of every other literal of the clause as antecedents, and its negation is queued.
- If the clause is conflicting, the clause is recorded as the conflict of the implication graph, the queue is cleared, and propagation stops.
- Otherwise, the clause is passed over.

Clauses not containing a falsified literal cannot become unit or conflicting, and so are never examined.

How a clause is examined depends on the configured [propagation variant](crate::config::Propagation).
With watched propagation the status of a clause is found from its watch refs, and otherwise from a scan of the clause.
See [dbClause](crate::db::clause::dbClause) for details.
*/

use std::time::Instant;

use crate::{
    config::Propagation,
    context::GenericContext,
    db::{clause::ClauseStatus, ClauseKey},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self, ErrorKind},
};

/// Ok results of propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPOk {
    /// The queue was exhausted without conflict.
    Exhausted,

    /// The clause of the key is false on the trail.
    Conflict(ClauseKey),
}

impl<R: rand::Rng> GenericContext<R> {
    /// Assigns `literal` at the current level, and queues its negation.
    ///
    /// Returns false if the atom of `literal` already has a different value.
    pub(crate) fn assign_literal(&mut self, literal: CLiteral) -> bool {
        let fresh = self.trail.value_of_atom(literal.atom()).is_none();
        if !self
            .trail
            .assign(literal.atom(), self.level, literal.polarity())
        {
            return false;
        }
        if fresh {
            self.consequence_q.push_back(literal.negate());
        }
        true
    }

    /// Propagates every queued literal, to a fixpoint or conflict.
    pub fn propagate(&mut self) -> Result<BCPOk, ErrorKind> {
        while let Some(falsified) = self.consequence_q.pop_front() {
            log::trace!(target: targets::PROPAGATION, "Examining occurrences of {falsified}");

            let check_start = Instant::now();
            let result = self.propagate_falsified(falsified);
            self.counters.clause_check_time += check_start.elapsed();

            match result? {
                BCPOk::Exhausted => {}
                conflict => {
                    self.consequence_q.clear();
                    return Ok(conflict);
                }
            }
        }

        Ok(BCPOk::Exhausted)
    }

    fn propagate_falsified(&mut self, falsified: CLiteral) -> Result<BCPOk, ErrorKind> {
        let occurrence_count = self.clause_db.occurrences(falsified).len();

        for index in 0..occurrence_count {
            let key = self.clause_db.occurrences(falsified)[index];
            self.counters.clause_checks += 1;

            let status = match self.config.propagation.value {
                Propagation::Watched => self.clause_db.get_mut(key)?.watch_status(&self.trail),
                Propagation::Occurrence => self.clause_db.get(key)?.status(&self.trail),
            };

            match status {
                ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}

                ClauseStatus::Unit(literal) => {
                    let clause = self.clause_db.get(key)?;
                    log::trace!(target: targets::PROPAGATION, "{literal} from {key}: {clause}");

                    let antecedents = clause
                        .literals()
                        .iter()
                        .filter(|other| **other != literal)
                        .map(|other| other.negate())
                        .collect();

                    if !self.assign_literal(literal) {
                        return Err(ErrorKind::from(err::TrailError::ValueConflict(literal)));
                    }
                    self.implication_graph.record(literal, antecedents)?;
                    self.counters.total_propagations += 1;
                }

                ClauseStatus::Conflict => {
                    let clause = self.clause_db.get(key)?;
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key}: {clause}");

                    self.implication_graph.set_conflict(clause.literals());
                    return Ok(BCPOk::Conflict(key));
                }
            }
        }

        Ok(BCPOk::Exhausted)
    }
}
