/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, used by the random heuristics.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context, as the context seeds its source of randomness from the config.

A context owns every database used during a solve, the configuration, counters, and any callbacks.
Procedures are implemented as methods on a (generic) context, and so take exclusive access to all of these.

# Example
```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::reports::Report;
# use cdcl_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = vec![CLiteral::new(p, false)];
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve has started, and the satisfiability of the formula is unknown.
    Solving,

    /// The formula is satisfiable, on the valuation of the trail.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
