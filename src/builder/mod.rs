/*!
Tools for building a context.

A formula may be added to a context clause by clause with [add_clause](crate::context::GenericContext::add_clause), or all at once from a DIMACS representation with [read_dimacs](crate::context::GenericContext::read_dimacs).

# Examples

A clause built using basic methods.

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::reports::Report;
# use cdcl_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.value_of(p), the_context.value_of(q));
```

The same formula, read from DIMACS.

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let dimacs = b"
p cnf 2 2
 1 -2 0
-1  2 0
";

let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
assert_eq!(info.expected_clauses, Some(2));
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

pub mod dimacs;
