//! Generic structures, not specific to satisfiability.

pub mod index_heap;
pub mod random;
