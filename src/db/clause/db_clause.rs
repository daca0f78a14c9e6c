//! A clause together with metadata used by the [clause database](crate::db::clause).
//!
//! # Watches
//!
//! Each clause carries a pair of *refs*, positions in the clause acting as watch sentinels.
//! On registration the refs are the first and last position, and refs are only moved by [dbClause::watch_status].
//!
//! The status of a clause is found by inspecting the literals at the refs.
//! If either is true, the clause is satisfied.
//! If both are unassigned and at different positions, the clause is unresolved (though some other literal may be true).
//! Otherwise some ref is stepped (circularly) through the clause, until either a satisfying literal or a pair of distinct unassigned literals is found, or the ref returns to where it started.
//! A ref returning to where it started (without success) means the clause is either unit on the other ref, or conflicting.
//!
//! As the refs persist across calls, most checks of a clause stop at the first comparison.
//! Still, a clause found to be unit or conflicting is unit or conflicting on the trail, as a ref passes over every literal before either is declared.
//!
//! The order in which the cases are considered determines where refs rest, though not the status found.
//! As a conflict may leave refs on false literals, refs are [refreshed](crate::db::clause::ClauseDB::refresh_watches) when levels are cleared.

use crate::{
    db::{trail::Trail, ClauseKey},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula.
    Original,

    /// A clause derived by conflict analysis.
    Learnt,
}

/// The status of a clause on some trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// At least two literals of the clause are unassigned (and none are true).
    Unresolved,

    /// Every literal but the given literal is false, and the given literal is unassigned.
    Unit(CLiteral),

    /// Every literal of the clause is false.
    Conflict,
}

/// A clause together with its key, watch refs, and source.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbClause {
    key: ClauseKey,
    clause: CClause,
    refs: [usize; 2],
    source: ClauseSource,
}

impl dbClause {
    pub(super) fn new(key: ClauseKey, clause: CClause, source: ClauseSource) -> Self {
        let last = clause.len().saturating_sub(1);
        dbClause {
            key,
            clause,
            refs: [0, last],
            source,
        }
    }

    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The current positions of the watch refs.
    pub fn refs(&self) -> [usize; 2] {
        self.refs
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Whether some literal of the clause is true on the trail.
    pub fn is_satisfied(&self, trail: &Trail) -> bool {
        self.clause
            .iter()
            .any(|literal| trail.value_of(*literal) == Some(true))
    }

    /// The status of the clause, found by moving the watch refs.
    pub fn watch_status(&mut self, trail: &Trail) -> ClauseStatus {
        let size = self.clause.len();
        let [start_0, start_1] = self.refs;

        loop {
            let value_0 = trail.value_of(self.clause[self.refs[0]]);
            let value_1 = trail.value_of(self.clause[self.refs[1]]);

            match (value_0, value_1) {
                (Some(true), _) | (_, Some(true)) => return ClauseStatus::Satisfied,

                (None, None) => {
                    if self.refs[0] != self.refs[1] {
                        return ClauseStatus::Unresolved;
                    }
                    let next = (self.refs[0] + 1) % size;
                    if next == start_0 {
                        return ClauseStatus::Unit(self.clause[self.refs[0]]);
                    }
                    self.refs[0] = next;
                }

                (Some(false), None) => {
                    let next = (self.refs[0] + 1) % size;
                    if next == start_0 {
                        return ClauseStatus::Unit(self.clause[self.refs[1]]);
                    }
                    self.refs[0] = next;
                }

                (None, Some(false)) => {
                    let next = (self.refs[1] + 1) % size;
                    if next == start_1 {
                        return ClauseStatus::Unit(self.clause[self.refs[0]]);
                    }
                    self.refs[1] = next;
                }

                (Some(false), Some(false)) => {
                    let next = (self.refs[0] + 1) % size;
                    if next == start_0 {
                        return ClauseStatus::Conflict;
                    }
                    self.refs[0] = next;
                }
            }
        }
    }

    /// The status of the clause, found by examining every literal.
    ///
    /// The watch refs are not used, and so this may be called on a shared reference.
    pub fn status(&self, trail: &Trail) -> ClauseStatus {
        let mut unassigned = None;
        let mut unassigned_count = 0;

        for literal in &self.clause {
            match trail.value_of(*literal) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => {}
                None => {
                    unassigned_count += 1;
                    unassigned = Some(*literal);
                }
            }
        }

        match (unassigned_count, unassigned) {
            (0, _) => ClauseStatus::Conflict,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Unresolved,
        }
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs(false))
    }
}

#[cfg(test)]
mod watch_tests {
    use super::*;
    use crate::structures::literal::Literal;

    fn clause(literals: &[CLiteral]) -> dbClause {
        dbClause::new(ClauseKey(0), literals.to_vec(), ClauseSource::Original)
    }

    fn trail_with(atoms: u32, falsified: &[CLiteral]) -> Trail {
        let mut trail = Trail::default();
        trail.ensure_atom(atoms);
        for literal in falsified {
            assert!(trail.assign(literal.atom(), 0, !literal.polarity()));
        }
        trail
    }

    /// The refs of a clause which is neither unit nor conflicting rest on a true literal, or two unassigned literals.
    fn watch_invariant(the_clause: &dbClause, trail: &Trail) -> bool {
        let [a, b] = the_clause.refs();
        let value_a = trail.value_of(the_clause.literals()[a]);
        let value_b = trail.value_of(the_clause.literals()[b]);
        value_a == Some(true)
            || value_b == Some(true)
            || (a != b && value_a.is_none() && value_b.is_none())
    }

    #[test]
    fn unresolved_without_movement() {
        let the_trail = trail_with(3, &[]);
        let mut the_clause = clause(&[1, 2, 3]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unresolved);
        assert_eq!(the_clause.refs(), [0, 2]);
    }

    #[test]
    fn slide_to_unassigned() {
        let the_trail = trail_with(4, &[1]);
        let mut the_clause = clause(&[1, 2, 3, 4]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unresolved);
        assert_eq!(the_clause.refs(), [1, 3]);
        assert!(watch_invariant(&the_clause, &the_trail));
    }

    #[test]
    fn unit_on_last() {
        let the_trail = trail_with(3, &[1, 2]);
        let mut the_clause = clause(&[1, 2, 3]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unit(3));
    }

    #[test]
    fn unit_on_middle() {
        let the_trail = trail_with(3, &[1, 3]);
        let mut the_clause = clause(&[1, 2, 3]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unit(2));
    }

    #[test]
    fn unit_clause() {
        let the_trail = trail_with(1, &[]);
        let mut the_clause = clause(&[-1]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unit(-1));
        assert_eq!(the_clause.refs(), [0, 0]);
    }

    #[test]
    fn conflict() {
        let the_trail = trail_with(3, &[1, -2, 3]);
        let mut the_clause = clause(&[1, -2, 3]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Conflict);
        assert_eq!(the_clause.status(&the_trail), ClauseStatus::Conflict);
    }

    #[test]
    fn satisfied_anywhere() {
        let mut the_trail = trail_with(4, &[1, 4]);
        assert!(the_trail.assign(3, 0, false));
        let mut the_clause = clause(&[1, 2, -3, 4]);

        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Satisfied);
        assert!(watch_invariant(&the_clause, &the_trail));
        assert_eq!(the_clause.status(&the_trail), ClauseStatus::Satisfied);
    }

    #[test]
    fn refs_persist() {
        let mut the_trail = trail_with(4, &[1]);
        let mut the_clause = clause(&[1, 2, 3, 4]);
        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unresolved);

        assert!(the_trail.assign(4, 0, false));
        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unresolved);
        assert_eq!(the_clause.refs(), [2, 1]);

        assert!(the_trail.assign(2, 0, false));
        assert_eq!(the_clause.watch_status(&the_trail), ClauseStatus::Unit(3));
        assert_eq!(the_clause.status(&the_trail), ClauseStatus::Unit(3));
    }

    #[test]
    fn agrees_with_full_status() {
        // Every valuation of three atoms, on a few clauses.
        let clauses: [&[CLiteral]; 4] = [&[1, 2, 3], &[-1, 2], &[3, -2, -1], &[2]];
        for bits in 0..27_u32 {
            let mut the_trail = Trail::default();
            the_trail.ensure_atom(3);
            let mut code = bits;
            for atom in 1..=3 {
                match code % 3 {
                    0 => {}
                    1 => assert!(the_trail.assign(atom, 0, true)),
                    _ => assert!(the_trail.assign(atom, 0, false)),
                }
                code /= 3;
            }

            for literals in clauses {
                let mut the_clause = clause(literals);
                let full = the_clause.status(&the_trail);
                let watched = the_clause.watch_status(&the_trail);
                match watched {
                    // A true literal away from the refs may go unnoticed.
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {
                        assert!(matches!(
                            full,
                            ClauseStatus::Satisfied | ClauseStatus::Unresolved
                        ));
                        assert!(watch_invariant(&the_clause, &the_trail));
                    }
                    _ => assert_eq!(full, watched, "{literals:?} on {bits}"),
                }
            }
        }
    }
}
