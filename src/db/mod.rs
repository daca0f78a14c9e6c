/*!
Databases for holding information relevant to a solve.

- [The clause database](crate::db::clause)
  + A collection of clauses, each indexed by a clause key, together with an occurrence list for each literal.
- [The trail](crate::db::trail)
  + The (partial) valuation, arranged by decision level.
- [The implication graph](crate::db::implication)
  + The reasons for each consequence of a decision, and the clause of a conflict.
- [The activity database](crate::db::activity)
  + Activity scores used by VSIDS branching.

The databases are kept separate and are owned by a [context](crate::context).
In particular, a procedure on a context may borrow one database mutably while reading another.
*/

pub mod activity;
pub mod clause;
pub mod implication;
pub mod trail;

/// The index of a decision level.
pub type LevelIndex = u32;

/// The index to a clause in the clause database.
pub type FormulaIndex = u32;

/// The key to a clause in the clause database.
///
/// Keys are issued in order of registration, and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseKey(pub FormulaIndex);

impl ClauseKey {
    /// The index of the clause keyed.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}", self.0)
    }
}
