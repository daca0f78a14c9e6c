/*!
Procedures on a context.

Each procedure is implemented as a method on a [GenericContext](crate::context::GenericContext), and so has exclusive access to every database.

- [level_zero] settles unit clauses and pure literals before any decision is made.
- [decision] chooses a literal to assume, using the configured [heuristic](crate::heuristics).
- [bcp] propagates the consequences of assignments.
- [analysis] derives a clause from a conflict.
- [backjump] clears levels from the trail.
- [solve] puts the above together.
*/

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod level_zero;
pub mod solve;
