/*!
The implication graph.

For each atom whose value was forced by some clause, the graph records the literal made true together with its *antecedents*: the negations of the other literals of the forcing clause.
So, each antecedent is true on the trail, and was assigned at a level no higher than the forced literal.

Decisions have no entry.
Nor do unit clauses of the formula or pure literals, as these are assigned at level zero without reference to any other literal.

In addition, the graph holds a sentinel for the current conflict: the literals of the clause found to be false on the trail.

Entries are removed in bulk when the levels holding their atoms are cleared from the trail.
*/

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

#[derive(Default)]
pub struct ImplicationGraph {
    /// Entries, indexed by atom.
    entries: Vec<Option<(CLiteral, Vec<CLiteral>)>>,

    /// The literals of the conflicting clause, if there is a conflict.
    conflict: Option<Vec<CLiteral>>,
}

impl ImplicationGraph {
    /// Extends the graph to cover every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        if self.entries.len() <= atom as usize {
            self.entries.resize(atom as usize + 1, None);
        }
    }

    /// Records `literal` as forced, with the given antecedents.
    ///
    /// An atom may have at most one entry, and so a second entry for an atom is an error.
    pub fn record(
        &mut self,
        literal: CLiteral,
        antecedents: Vec<CLiteral>,
    ) -> Result<(), err::ImplicationError> {
        self.ensure_atom(literal.atom());
        let entry = &mut self.entries[literal.atom() as usize];
        match entry {
            Some(_) => Err(err::ImplicationError::DuplicateEntry(literal)),
            None => {
                *entry = Some((literal, antecedents));
                Ok(())
            }
        }
    }

    /// The antecedents of `literal`, if `literal` was forced.
    pub fn antecedents(&self, literal: CLiteral) -> Option<&[CLiteral]> {
        match self.entries.get(literal.atom() as usize) {
            Some(Some((forced, antecedents))) if *forced == literal => Some(antecedents),
            _ => None,
        }
    }

    /// Removes the entry of `atom`, if any.
    pub fn remove(&mut self, atom: Atom) {
        if let Some(entry) = self.entries.get_mut(atom as usize) {
            *entry = None;
        }
    }

    /// An iterator over every entry, as pairs of a forced literal and its antecedents.
    pub fn entries(&self) -> impl Iterator<Item = (CLiteral, &[CLiteral])> {
        self.entries
            .iter()
            .flatten()
            .map(|(literal, antecedents)| (*literal, antecedents.as_slice()))
    }

    /// Records the literals of a conflicting clause.
    pub fn set_conflict(&mut self, clause: &[CLiteral]) {
        self.conflict = Some(clause.to_vec());
    }

    /// The literals of the conflicting clause, if any.
    pub fn conflict(&self) -> Option<&[CLiteral]> {
        self.conflict.as_deref()
    }

    /// Removes the conflict sentinel.
    pub fn clear_conflict(&mut self) {
        self.conflict = None;
    }
}

#[cfg(test)]
mod implication_tests {
    use super::*;

    #[test]
    fn entries_by_literal() {
        let mut graph = ImplicationGraph::default();

        assert!(graph.record(-3, vec![1, 2]).is_ok());
        assert_eq!(graph.antecedents(-3), Some([1, 2].as_slice()));
        assert_eq!(graph.antecedents(3), None);
        assert_eq!(
            graph.record(3, vec![4]),
            Err(err::ImplicationError::DuplicateEntry(3))
        );

        graph.remove(3);
        assert_eq!(graph.antecedents(-3), None);
        assert!(graph.record(3, vec![4]).is_ok());
        assert_eq!(graph.entries().count(), 1);
    }

    #[test]
    fn conflict_sentinel() {
        let mut graph = ImplicationGraph::default();
        assert!(graph.conflict().is_none());

        graph.set_conflict(&[1, -2]);
        assert_eq!(graph.conflict(), Some([1, -2].as_slice()));

        graph.clear_conflict();
        assert!(graph.conflict().is_none());
    }
}
