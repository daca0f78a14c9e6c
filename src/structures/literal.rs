//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation is a (non-zero) signed integer, with the sign indicating polarity, as in DIMACS.
//! Methods on literals are given by the [Literal] trait.
//!
//! ```rust
//! # use cdcl_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(literal.negate().polarity());
//! assert_eq!(literal.negate(), 79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The value of the literal, given a value of its atom.
    fn value_on(&self, atom_value: Option<bool>) -> Option<bool> {
        atom_value.map(|value| value == self.polarity())
    }
}

/// The canonical implementation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
