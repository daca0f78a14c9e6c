//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, and the [Clause] trait is implemented for any slice of literals.
//!
//! ```rust
//! # use cdcl_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut valuation = vec![None; 42];
//! valuation[23] = Some(false);
//! valuation[3] = Some(true);
//! assert!(!clause.satisfied_on(&valuation));
//!
//! valuation[41] = Some(false);
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order of the literals of the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation, indexed by atom.
    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.iter().any(|literal| {
            let value = valuation.get(literal.atom() as usize).copied().flatten();
            literal.value_on(value) == Some(true)
        })
    }

    fn is_tautology(&self) -> bool {
        self.iter().any(|literal| self.contains(&literal.negate()))
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().atoms()
    }

    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.as_slice().satisfied_on(valuation)
    }

    fn is_tautology(&self) -> bool {
        self.as_slice().is_tautology()
    }
}
