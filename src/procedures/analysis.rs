/*!
Analysis of an unsatisfiable clause.

# Overview

Analysis takes the conflict recorded in the implication graph and derives a clause which is a consequence of the formula, together with a level to backjump to and a literal the clause asserts at that level.

The procedure works with a [resolution buffer](crate::resolution_buffer).
1. The buffer is seeded with the negation of each literal of the conflict, bucketed by the level of its atom.
2. While more than one literal is in the bucket of the conflict level, some literal of the bucket is replaced with its antecedents.
   The literal taken is the first of the bucket, unless the first is the decision of the level, in which case the second is taken.
3. The clause derived is the negation of the literals of the buffer, bucket by bucket.

The clause is asserting: on backjumping to the second highest level among its literals (or zero, if the clause has a single literal) every literal but the negation of the one remaining literal of the conflict level is false.

Each replacement is an instance of resolution between the clause represented by the buffer and the clause which forced the replaced literal.
So, the derived clause is a consequence of the clauses used, and in turn of the formula.
As replacement only introduces literals of the same or lower levels, and there are no cycles in the implication graph, the procedure terminates.

# Errors

Each of the following is an error, rather than some result of analysis:
- No conflict is recorded.
- Some literal of the buffer has no value.
- The bucket of the conflict level is missing, or emptied.
- A literal to be replaced has no antecedents.
- Some bucket would contain a literal and its negation.
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The result of analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The clause derived.
    pub clause: CClause,

    /// The level to backjump to.
    pub backjump_level: LevelIndex,

    /// The literal asserted by the clause on backjumping.
    pub asserted: CLiteral,

    /// The atoms of the literals replaced, in order of replacement.
    pub resolved: Vec<Atom>,
}

impl<R: rand::Rng> GenericContext<R> {
    fn level_of_literal(&self, literal: CLiteral) -> Result<LevelIndex, err::AnalysisError> {
        self.trail
            .level_of(literal.atom())
            .ok_or(err::AnalysisError::UnassignedLiteral(literal))
    }

    /// Derives an asserting clause from the conflict of the implication graph, at the current level.
    pub fn conflict_analysis(&mut self) -> Result<AnalysisResult, ErrorKind> {
        let level = self.level;

        let conflict = match self.implication_graph.conflict() {
            Some(clause) => clause.to_vec(),
            None => return Err(ErrorKind::from(err::AnalysisError::NoConflict)),
        };

        self.resolution_buffer.clear();
        for literal in conflict {
            let negation = literal.negate();
            let literal_level = self.level_of_literal(negation)?;
            self.resolution_buffer.insert(negation, literal_level)?;
        }

        let decision = self.trail.decision_at(level);
        let mut resolved = Vec::default();

        loop {
            let bucket = match self.resolution_buffer.bucket(level) {
                Some(bucket) if !bucket.is_empty() => bucket,
                _ => return Err(ErrorKind::from(err::AnalysisError::NoConflictLevelLiteral)),
            };

            if bucket.len() == 1 {
                break;
            }

            let next = match Some(bucket[0].atom()) == decision {
                true => bucket[1],
                false => bucket[0],
            };

            let antecedents = match self.implication_graph.antecedents(next) {
                Some(antecedents) => antecedents.to_vec(),
                None => return Err(ErrorKind::from(err::AnalysisError::MissingAntecedent(next))),
            };

            log::trace!(target: targets::ANALYSIS, "Resolving {next} with {antecedents:?}");

            for antecedent in antecedents {
                let antecedent_level = self.level_of_literal(antecedent)?;
                self.resolution_buffer.insert(antecedent, antecedent_level)?;
            }
            self.resolution_buffer.remove(next, level);
            resolved.push(next.atom());
        }

        let clause = self.resolution_buffer.to_clause();
        if clause.is_empty() {
            return Err(ErrorKind::from(err::AnalysisError::EmptyResolution));
        }

        let asserted = match self.resolution_buffer.bucket(level) {
            Some([remaining]) => remaining.negate(),
            _ => return Err(ErrorKind::from(err::AnalysisError::NoConflictLevelLiteral)),
        };

        let mut levels = Vec::with_capacity(clause.len());
        for literal in &clause {
            levels.push(self.level_of_literal(*literal)?);
        }
        levels.sort_unstable();

        let backjump_level = match levels.len() {
            0 | 1 => 0,
            length => levels[length - 2],
        };

        log::debug!(target: targets::ANALYSIS, "Learnt {} at {level}, backjump to {backjump_level}", clause.as_dimacs(false));

        Ok(AnalysisResult {
            clause,
            backjump_level,
            asserted,
            resolved,
        })
    }
}
