/*!
Decisions, aka. assumptions on the value of some atom which are open to revision.

A decision is made by:
- Asking the configured [heuristic](crate::heuristics) for an atom, and perhaps a polarity.
- Settling the polarity, if the heuristic did not:
  + For VSIDS heuristics, the polarity first chosen for an atom is reused.
  + Otherwise, if a phase callback is set the polarity predicted by the callback is used, and if not the polarity is positive.
- Opening a fresh level, with the atom as the decision of the level, and assigning the atom.

If the heuristic finds no atom the formula is satisfied by the current valuation (any unassigned atoms may take either value).
*/

use crate::{
    context::GenericContext,
    heuristics::Selection,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some literal was chosen and assigned.
    Literal(CLiteral),

    /// No decision is required, as the formula is satisfied.
    Exhausted,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Makes a decision, if one is required.
    pub fn make_decision(&mut self) -> Result<DecisionOk, ErrorKind> {
        let selection = match self.select_atom()? {
            Some(selection) => selection,
            None => return Ok(DecisionOk::Exhausted),
        };

        let polarity = self.decision_polarity(selection);
        let decision = CLiteral::new(selection.atom, polarity);

        self.level += 1;
        self.trail.set_decision(self.level, selection.atom);
        if !self.assign_literal(decision) {
            return Err(ErrorKind::from(err::TrailError::ValueConflict(decision)));
        }

        self.counters.total_decisions += 1;
        log::trace!(target: targets::DECISION, "Decision {decision} at {}", self.level);
        self.make_callback_decision(decision);

        Ok(DecisionOk::Literal(decision))
    }

    /// The polarity to decide on for a selection.
    fn decision_polarity(&mut self, selection: Selection) -> bool {
        if let Some(polarity) = selection.polarity {
            return polarity;
        }

        let vsids = self.config.heuristic.value.is_vsids();
        if vsids {
            if let Some(polarity) = self.activity_db.cached_polarity(selection.atom) {
                return polarity;
            }
        }

        let polarity = self.make_callback_phase(selection.atom).unwrap_or(true);

        if vsids {
            self.activity_db.cache_polarity(selection.atom, polarity);
        }
        polarity
    }
}
