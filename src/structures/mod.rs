//! Basic structures: atoms, literals, and clauses.

pub mod atom;
pub mod clause;
pub mod literal;
