/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

- [CallbackTerminate] is checked once each iteration of a solve, and ends the solve with an unknown report if true is returned.
- [CallbackPhase] predicts the polarity of a decision, given every clause containing the atom decided on (with either polarity).
  If no phase callback is set, decisions are made with a positive polarity (unless otherwise determined by the heuristic).
- [CallbackDecision] is called with each decision made.
- [CallbackAddition] is called with each clause learnt.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

use super::GenericContext;

pub type CallbackTerminate = dyn FnMut() -> bool;

pub type CallbackPhase = dyn FnMut(&[&[CLiteral]], Atom) -> bool;

pub type CallbackDecision = dyn FnMut(CLiteral);

pub type CallbackAddition = dyn FnMut(&[CLiteral]);

impl<R: rand::Rng> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_phase(&mut self, callback: Box<CallbackPhase>) {
        self.callback_phase = Some(callback);
    }

    pub fn set_callback_decision(&mut self, callback: Box<CallbackDecision>) {
        self.callback_decision = Some(callback);
    }

    pub fn set_callback_addition(&mut self, callback: Box<CallbackAddition>) {
        self.callback_addition = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub(crate) fn make_callback_decision(&mut self, literal: CLiteral) {
        if let Some(callback) = &mut self.callback_decision {
            callback(literal);
        }
    }

    pub(crate) fn make_callback_addition(&mut self, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_addition {
            callback(clause);
        }
    }

    /// The polarity predicted by the phase callback for `atom`, if a phase callback is set.
    pub(crate) fn make_callback_phase(&mut self, atom: Atom) -> Option<bool> {
        let callback = self.callback_phase.as_mut()?;

        let mut involved: Vec<&[CLiteral]> = Vec::default();
        for literal in [atom as CLiteral, -(atom as CLiteral)] {
            for key in self.clause_db.occurrences(literal) {
                if let Ok(clause) = self.clause_db.get(*key) {
                    involved.push(clause.literals());
                }
            }
        }

        Some(callback(&involved, atom))
    }
}
