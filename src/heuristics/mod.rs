/*!
Branching heuristics, for choosing an atom to decide on.

The heuristic is fixed by the [config](crate::config::Config::heuristic), and [select_atom](crate::context::GenericContext::select_atom) dispatches on the heuristic.

Most heuristics score atoms on the *residual* formula: each clause not satisfied by the current valuation, restricted to its unassigned literals.
If the residual formula is empty every clause is satisfied, and no atom is selected.

| Heuristic | Selection |
|-----------|-----------|
| Ordered   | The lowest unassigned atom. |
| Random    | An unassigned atom, uniformly at random. |
| 2clause   | The atom with most occurrences in residual clauses of length two, ties at random. Random, if there are no such clauses. |
| MAXO      | The atom with most occurrences in the residual formula. |
| MOMS      | As MAXO, restricted to residual clauses of minimum length. |
| MAMS      | The atom with the greatest sum of MAXO and MOMS counts. |
| JW        | The atom with greatest Jeroslow-Wang score on the residual formula, ties at random. |
| UP, GUP   | The best atom of the residual formula by [lookahead](lookahead). |
| VSIDS     | The unassigned atom with highest [activity](crate::db::activity), ties to the lowest atom. |
| sup       | See [hybrid]. |

Unless otherwise noted, ties are to the atom first seen in the residual formula.
Random choices draw from the rng of the context, and so are reproducible for a fixed seed.

A heuristic may also fix the polarity of a decision, as with lookahead.
Otherwise, the polarity is settled when the [decision](crate::procedures::decision) is made.
*/

pub mod counting;
mod hybrid;
pub mod lookahead;

use crate::{
    config::Heuristic,
    context::GenericContext,
    structures::{atom::Atom, literal::CLiteral},
    types::err::ErrorKind,
};

use lookahead::LookaheadScore;

/// An atom to decide on, and perhaps a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub atom: Atom,
    pub polarity: Option<bool>,
}

impl Selection {
    /// A selection without a polarity.
    pub fn free(atom: Atom) -> Self {
        Selection {
            atom,
            polarity: None,
        }
    }

    /// A selection with a polarity.
    pub fn with_polarity(atom: Atom, polarity: bool) -> Self {
        Selection {
            atom,
            polarity: Some(polarity),
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Selects an atom to decide on, or none if no decision is required.
    pub fn select_atom(&mut self) -> Result<Option<Selection>, ErrorKind> {
        let atom_count = self.atom_count();

        let atom = match self.config.heuristic.value {
            Heuristic::Ordered => {
                (1..=atom_count).find(|atom| self.trail.value_of_atom(*atom).is_none())
            }

            Heuristic::Random => self.random_unassigned(),

            Heuristic::TwoClause => {
                let residual = self.residual_formula();
                if residual.is_empty() {
                    return Ok(None);
                }
                let maxima = counting::two_clause(&residual, atom_count).maxima();
                match maxima.is_empty() {
                    true => self.random_unassigned(),
                    false => self.random_from(&maxima),
                }
            }

            Heuristic::MAXO => counting::occurrences(&self.residual_formula(), atom_count).best(),

            Heuristic::MOMS => counting::moms(&self.residual_formula(), atom_count).best(),

            Heuristic::MAMS => {
                let residual = self.residual_formula();
                if residual.is_empty() {
                    return Ok(None);
                }
                match counting::mams(&residual, atom_count).best() {
                    Some(atom) => Some(atom),
                    None => self.random_unassigned(),
                }
            }

            Heuristic::JW => {
                let maxima = counting::jw(&self.residual_formula(), atom_count).maxima();
                self.random_from(&maxima)
            }

            Heuristic::UP | Heuristic::GUP => {
                let scoring = match self.config.heuristic.value {
                    Heuristic::UP => LookaheadScore::Sum,
                    _ => LookaheadScore::Product,
                };
                let residual = self.residual_formula();
                let candidates = counting::occurrences(&residual, atom_count)
                    .atoms()
                    .to_vec();
                return self.lookahead_selection(&candidates, scoring);
            }

            Heuristic::CVSIDS | Heuristic::MVSIDS => {
                self.activity_db.highest_unassigned(&self.trail)
            }

            Heuristic::Hybrid => return self.hybrid_selection(),
        };

        Ok(atom.map(Selection::free))
    }

    /// Each unsatisfied clause, restricted to its unassigned literals.
    pub fn residual_formula(&self) -> Vec<Vec<CLiteral>> {
        self.clause_db
            .all_clauses()
            .filter(|clause| !clause.is_satisfied(&self.trail))
            .map(|clause| {
                clause
                    .literals()
                    .iter()
                    .copied()
                    .filter(|literal| self.trail.value_of(*literal).is_none())
                    .collect::<Vec<_>>()
            })
            .filter(|clause| !clause.is_empty())
            .collect()
    }

    /// Some atom of `atoms`, uniformly at random.
    fn random_from(&mut self, atoms: &[Atom]) -> Option<Atom> {
        match atoms.is_empty() {
            true => None,
            false => Some(atoms[self.rng.gen_range(0..atoms.len())]),
        }
    }

    /// Some unassigned atom, uniformly at random.
    fn random_unassigned(&mut self) -> Option<Atom> {
        let unassigned: Vec<Atom> = (1..=self.atom_count())
            .filter(|atom| self.trail.value_of_atom(*atom).is_none())
            .collect();
        self.random_from(&unassigned)
    }
}
