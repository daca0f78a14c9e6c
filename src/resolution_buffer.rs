/*!
A buffer for resolution based conflict analysis.

The buffer holds a set of literals, each true on the trail, bucketed by the level at which the atom of the literal was assigned.
The buffer is seeded with the negation of a conflicting clause, and so the disjunction of the negation of the literals in the buffer is a consequence of the formula.

Resolution takes place by replacing some literal with its antecedents, as each antecedent is added to the bucket of its level unless already present.
As the antecedents of a literal are the negations of the other literals of the clause which forced the literal, this is an application of resolution to the clause represented by the buffer and the forcing clause.

Buckets are kept in the order of their creation, and literals within a bucket in the order of insertion.
Removal of a literal preserves the order of the remaining literals.
These orders determine which literal is resolved on next, and the order of the literals in a learnt clause.

It is an error for a bucket to contain both a literal and its negation.
*/

use crate::{
    db::LevelIndex,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

#[derive(Default)]
pub struct ResolutionBuffer {
    /// Literals bucketed by level, in the order the buckets were created.
    buckets: Vec<(LevelIndex, Vec<CLiteral>)>,
}

impl ResolutionBuffer {
    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    fn bucket_mut(&mut self, level: LevelIndex) -> &mut Vec<CLiteral> {
        let position = match self.buckets.iter().position(|(l, _)| *l == level) {
            Some(position) => position,
            None => {
                self.buckets.push((level, Vec::default()));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[position].1
    }

    /// Adds `literal` to the bucket of `level`, unless already present.
    pub fn insert(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
    ) -> Result<(), err::AnalysisError> {
        let bucket = self.bucket_mut(level);
        if bucket.contains(&literal.negate()) {
            return Err(err::AnalysisError::ComplementaryLiterals(literal));
        }
        if !bucket.contains(&literal) {
            bucket.push(literal);
        }
        Ok(())
    }

    /// The literals of the bucket of `level`, if the bucket exists.
    pub fn bucket(&self, level: LevelIndex) -> Option<&[CLiteral]> {
        self.buckets
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, literals)| literals.as_slice())
    }

    /// Removes `literal` from the bucket of `level`, preserving the order of other literals.
    pub fn remove(&mut self, literal: CLiteral, level: LevelIndex) {
        if let Some((_, bucket)) = self.buckets.iter_mut().find(|(l, _)| *l == level) {
            if let Some(position) = bucket.iter().position(|l| *l == literal) {
                bucket.remove(position);
            }
        }
    }

    /// The levels of the buffer, in the order buckets were created.
    pub fn levels(&self) -> impl Iterator<Item = LevelIndex> + '_ {
        self.buckets.iter().map(|(level, _)| *level)
    }

    /// The clause represented by the buffer.
    ///
    /// That is, the negation of each literal of the buffer, in order of bucket and then insertion.
    pub fn to_clause(&self) -> CClause {
        self.buckets
            .iter()
            .flat_map(|(_, literals)| literals.iter().map(|literal| literal.negate()))
            .collect()
    }
}

#[cfg(test)]
mod resolution_buffer_tests {
    use super::*;

    #[test]
    fn buckets_keep_order() {
        let mut buffer = ResolutionBuffer::default();

        assert!(buffer.insert(5, 3).is_ok());
        assert!(buffer.insert(-1, 1).is_ok());
        assert!(buffer.insert(2, 3).is_ok());
        assert!(buffer.insert(5, 3).is_ok());
        assert!(buffer.insert(7, 0).is_ok());

        assert_eq!(buffer.bucket(3), Some([5, 2].as_slice()));
        assert_eq!(buffer.levels().collect::<Vec<_>>(), vec![3, 1, 0]);
        assert_eq!(buffer.to_clause(), vec![-5, -2, 1, -7]);

        buffer.insert(4, 3).unwrap();
        buffer.remove(5, 3);
        assert_eq!(buffer.bucket(3), Some([2, 4].as_slice()));
        assert_eq!(buffer.bucket(2), None);
    }

    #[test]
    fn complementary_literals() {
        let mut buffer = ResolutionBuffer::default();

        assert!(buffer.insert(5, 3).is_ok());
        assert_eq!(
            buffer.insert(-5, 3),
            Err(err::AnalysisError::ComplementaryLiterals(-5))
        );
    }
}
