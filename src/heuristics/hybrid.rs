//! The hybrid ('sup') heuristic.
//!
//! Each of MAXO, MOMS, MAMS, and JW nominates its top candidates on the residual formula.
//! Candidates are ordered by the count of nominations, ties to the order of nomination, and the selection is then made from the candidates by (sum) [lookahead](crate::heuristics::lookahead).

use crate::{
    context::GenericContext,
    heuristics::{counting, lookahead::LookaheadScore, Selection},
    structures::atom::Atom,
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    pub(super) fn hybrid_selection(&mut self) -> Result<Option<Selection>, ErrorKind> {
        let residual = self.residual_formula();
        if residual.is_empty() {
            return Ok(None);
        }

        let atom_count = self.atom_count();
        let k = self.config.hybrid_candidates.value;

        let tallies = [
            counting::occurrences(&residual, atom_count),
            counting::moms(&residual, atom_count),
            counting::mams(&residual, atom_count),
            counting::jw(&residual, atom_count),
        ];

        let mut candidates: Vec<Atom> = Vec::default();
        let mut votes = vec![0_usize; atom_count as usize + 1];
        for tally in &tallies {
            for atom in tally.top(k) {
                if votes[atom as usize] == 0 {
                    candidates.push(atom);
                }
                votes[atom as usize] += 1;
            }
        }
        candidates.sort_by(|a, b| votes[*b as usize].cmp(&votes[*a as usize]));

        self.lookahead_selection(&candidates, LookaheadScore::Sum)
    }
}
