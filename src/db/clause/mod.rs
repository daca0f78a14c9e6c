/*!
A database of clause related things.

Clauses are stored in a single arena, indexed by [ClauseKey]s issued in order of registration.
Both original clauses (from the formula) and learnt clauses (from conflict analysis) live in the arena, distinguished by their [source](ClauseSource).
No clause is ever removed, and so a key remains valid for the lifetime of the database.

Alongside the arena, an occurrence list is kept for each literal: the keys of every clause containing the literal, in order of registration.
Occurrence lists are used both to find the clauses to examine when a literal is falsified, and for the counting heuristics and pure literal checks.

On registration the watch refs of a clause are set to the first and last literal of the clause.
So, a unit clause has both refs on its only literal.

Refs are moved during propagation, and when an atom is unassigned by a backjump the refs of each clause containing the atom are [refreshed](ClauseDB::refresh_watches).
Together, after propagation is exhausted the refs of a clause which is neither unit nor conflicting rest on a true literal, or on two distinct unassigned literals.
*/

mod db_clause;
pub use db_clause::{dbClause, ClauseSource, ClauseStatus};

use crate::{
    db::{trail::Trail, ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Every clause, indexed by key.
    clauses: Vec<dbClause>,

    /// Occurrence lists, indexed by [literal_index].
    occurrences: Vec<Vec<ClauseKey>>,

    /// A count of original clauses.
    original_count: usize,

    /// A count of learnt clauses.
    learnt_count: usize,
}

/// The index of the occurrence list of a literal.
fn literal_index(literal: CLiteral) -> usize {
    (2 * literal.atom() as usize) + literal.polarity() as usize
}

impl ClauseDB {
    /// Extends the occurrence lists to cover every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.occurrences.len() < required {
            self.occurrences.resize_with(required, Vec::default);
        }
    }

    /// Stores a clause, returning the key to the clause.
    ///
    /// The clause is stored as given, and so should already be free of duplicate literals.
    pub fn register(
        &mut self,
        clause: CClause,
        source: ClauseSource,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }
        if clause.is_tautology() {
            return Err(err::ClauseDBError::Tautology);
        }

        let key = ClauseKey(self.clauses.len() as FormulaIndex);

        for literal in &clause {
            self.ensure_atom(literal.atom());
            self.occurrences[literal_index(*literal)].push(key);
        }

        match source {
            ClauseSource::Original => self.original_count += 1,
            ClauseSource::Learnt => self.learnt_count += 1,
        }

        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
        self.clauses.push(dbClause::new(key, clause, source));

        Ok(key)
    }

    /// The clause stored at `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        self.clauses.get(key.index()).ok_or(err::ClauseDBError::Missing)
    }

    /// The clause stored at `key`, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut dbClause, err::ClauseDBError> {
        self.clauses
            .get_mut(key.index())
            .ok_or(err::ClauseDBError::Missing)
    }

    /// The keys of every clause containing `literal`, in order of registration.
    pub fn occurrences(&self, literal: CLiteral) -> &[ClauseKey] {
        match self.occurrences.get(literal_index(literal)) {
            Some(keys) => keys,
            None => &[],
        }
    }

    /// Moves the watch refs of each clause containing `atom`, of either polarity, as required by the values on `trail`.
    ///
    /// As no assignment is made, any clause found to be unit is left as it is.
    pub fn refresh_watches(&mut self, atom: Atom, trail: &Trail) {
        for literal in [atom as CLiteral, -(atom as CLiteral)] {
            let Some(keys) = self.occurrences.get(literal_index(literal)) else {
                continue;
            };
            for key in keys {
                if let Some(clause) = self.clauses.get_mut(key.index()) {
                    clause.watch_status(trail);
                }
            }
        }
    }

    /// An iterator over every clause in the database, in order of registration.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses.iter()
    }

    /// An iterator over every original clause in the database.
    pub fn original_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.source() == ClauseSource::Original)
    }

    /// An iterator over every learnt clause in the database.
    pub fn learnt_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.source() == ClauseSource::Learnt)
    }

    /// A count of all clauses.
    pub fn total_clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of original clauses.
    pub fn original_clause_count(&self) -> usize {
        self.original_count
    }

    /// A count of learnt clauses.
    pub fn learnt_clause_count(&self) -> usize {
        self.learnt_count
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;

    #[test]
    fn keys_and_occurrences() {
        let mut db = ClauseDB::default();

        let a = db.register(vec![1, -2], ClauseSource::Original).unwrap();
        let b = db.register(vec![-2, 3], ClauseSource::Original).unwrap();
        let c = db.register(vec![2], ClauseSource::Learnt).unwrap();

        assert_eq!((a, b, c), (ClauseKey(0), ClauseKey(1), ClauseKey(2)));
        assert_eq!(db.occurrences(-2), &[a, b]);
        assert_eq!(db.occurrences(2), &[c]);
        assert_eq!(db.occurrences(1), &[a]);
        assert!(db.occurrences(-1).is_empty());
        assert!(db.occurrences(17).is_empty());

        assert_eq!(db.original_clause_count(), 2);
        assert_eq!(db.learnt_clause_count(), 1);
        assert_eq!(db.learnt_clauses().count(), 1);
    }

    #[test]
    fn initial_refs() {
        let mut db = ClauseDB::default();

        let long = db.register(vec![1, 2, 3, 4], ClauseSource::Original).unwrap();
        let unit = db.register(vec![5], ClauseSource::Original).unwrap();

        assert_eq!(db.get(long).unwrap().refs(), [0, 3]);
        assert_eq!(db.get(unit).unwrap().refs(), [0, 0]);
    }

    #[test]
    fn refresh_after_unassignment() {
        let mut db = ClauseDB::default();
        let key = db.register(vec![2, 3, -1], ClauseSource::Original).unwrap();

        let mut trail = Trail::default();
        trail.ensure_atom(3);
        assert!(trail.assign(1, 1, true));
        assert!(trail.assign(2, 2, false));
        assert!(trail.assign(3, 2, false));
        assert_eq!(
            db.get_mut(key).unwrap().watch_status(&trail),
            ClauseStatus::Conflict
        );

        // Both refs on -1, with two literals unassigned.
        trail.clear_levels(2, 2);
        assert_eq!(db.get(key).unwrap().refs(), [2, 2]);
        let [a, b] = db.get(key).unwrap().refs();
        let literals = db.get(key).unwrap().literals();
        assert_eq!(trail.value_of(literals[a]), Some(false));
        assert_eq!(trail.value_of(literals[b]), Some(false));

        db.refresh_watches(2, &trail);
        let [a, b] = db.get(key).unwrap().refs();
        let literals = db.get(key).unwrap().literals();
        assert_ne!(a, b);
        assert_eq!(trail.value_of(literals[a]), None);
        assert_eq!(trail.value_of(literals[b]), None);
    }

    #[test]
    fn rejections() {
        let mut db = ClauseDB::default();

        assert_eq!(
            db.register(vec![], ClauseSource::Original),
            Err(err::ClauseDBError::EmptyClause)
        );
        assert_eq!(
            db.register(vec![1, 2, -1], ClauseSource::Original),
            Err(err::ClauseDBError::Tautology)
        );
        assert_eq!(db.total_clause_count(), 0);
        assert!(db.get(ClauseKey(0)).is_err());
    }
}
