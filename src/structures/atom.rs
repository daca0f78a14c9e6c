/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

That is, the atoms of a context are [1..=*m*] for some *m*, matching the variables of a DIMACS formula.
The atom `0` is never used, as `0` terminates a clause in DIMACS and has no sign.

This representation allows atoms to be used as the indicies of a structure, e.g. `activity[a]`, with a single wasted slot at index 0.

```rust
# use cdcl_sat::structures::atom::Atom;
let m: Atom = 5;
let atoms = (1..=m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 5);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The largest atom which may be used, so that negation of a literal never overflows.
pub const ATOM_MAX: Atom = i32::MAX as Atom;
