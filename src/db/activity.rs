/*!
Activity scores for VSIDS branching.

Each atom has an activity, a non-negative float.
On a conflict the activity of some atoms is *bumped* by the current bonus, and then the bonus grows.
Every so many conflicts all activities *decay*, by multiplication with some factor less than one.
Together, this favours atoms involved in recent conflicts.

The bonus grows without bound, and so when some value exceeds [ACTIVITY_LIMIT] every activity and the bonus are scaled down together.
This preserves the order of activities, which is all that matters for branching.

In addition, the polarity first chosen for an atom is cached, and reused on each later decision on the atom.
*/

use crate::{
    db::trail::Trail,
    generic::index_heap::IndexHeap,
    structures::atom::Atom,
};

/// The bound on activities, and the bonus.
pub const ACTIVITY_LIMIT: f64 = 1e100;

/// Activity scores, the bump bonus, and cached polarities.
///
/// Activities are kept on an [IndexHeap], and every unassigned atom is on the heap.
/// An atom is taken off the heap lazily, when found to be assigned during [selection](ActivityDB::highest_unassigned), and put back when [released](ActivityDB::release) by a backjump.
pub struct ActivityDB {
    /// Activities, indexed by atom.
    heap: IndexHeap<f64>,

    /// The amount to add to an activity on a bump.
    bonus: f64,

    /// Polarities fixed on the first decision of an atom, indexed by atom.
    decided: Vec<Option<bool>>,

    /// Conflicts since initialisation.
    conflicts: u32,
}

impl Default for ActivityDB {
    fn default() -> Self {
        let mut heap = IndexHeap::default();
        heap.add(0, 0.0);
        ActivityDB {
            heap,
            bonus: 1.0,
            decided: vec![None],
            conflicts: 0,
        }
    }
}

impl ActivityDB {
    /// Extends the database to cover every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let fresh_from = self.decided.len();
        if fresh_from <= atom as usize {
            self.decided.resize(atom as usize + 1, None);
            for fresh in fresh_from..=atom as usize {
                self.heap.add(fresh, 0.0);
                self.heap.activate(fresh);
            }
        }
    }

    /// Sets the activity of each atom to its score, and the bonus to half of the highest score.
    ///
    /// If no score is positive the bonus is one.
    pub fn initialise(&mut self, scores: &[f64]) {
        for (atom, score) in scores.iter().enumerate().skip(1) {
            self.ensure_atom(atom as Atom);
            self.heap.revalue(atom, *score);
        }
        self.heap.heapify();

        let max = (1..self.heap.count())
            .filter_map(|atom| self.heap.value_at(atom).copied())
            .fold(0.0, f64::max);
        self.bonus = match max > 0.0 {
            true => max / 2.0,
            false => 1.0,
        };
        self.conflicts = 0;
    }

    pub fn activity(&self, atom: Atom) -> f64 {
        self.heap.value_at(atom as usize).copied().unwrap_or(0.0)
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Adds the current bonus to the activity of `atom`.
    pub fn bump(&mut self, atom: Atom) {
        self.ensure_atom(atom);
        let bumped = self.activity(atom) + self.bonus;
        self.heap.revalue(atom as usize, bumped);
        self.heap.heapify_if_active(atom as usize);
        if bumped > ACTIVITY_LIMIT {
            self.rescale();
        }
    }

    /// Notes a conflict: the bonus grows by `growth`, and every `period` conflicts each activity decays by `decay`.
    pub fn note_conflict(&mut self, growth: f64, decay: f64, period: u32) {
        self.conflicts += 1;

        self.bonus *= growth;
        if period > 0 && self.conflicts % period == 0 {
            self.heap.apply_to_all(|activity| activity * decay);
            self.heap.heapify();
        }

        if self.bonus > ACTIVITY_LIMIT {
            self.rescale();
        }
    }

    fn rescale(&mut self) {
        let factor = ACTIVITY_LIMIT.recip();
        self.heap.apply_to_all(|activity| activity * factor);
        self.heap.heapify();
        self.bonus *= factor;
    }

    /// Returns `atom` to the heap, as the atom is no longer assigned.
    pub fn release(&mut self, atom: Atom) {
        self.heap.activate(atom as usize);
    }

    /// The unassigned atom with the highest activity, with ties to the lowest atom.
    ///
    /// Assigned atoms found at the top of the heap are taken off the heap.
    pub fn highest_unassigned(&mut self, trail: &Trail) -> Option<Atom> {
        while let Some(top) = self.heap.peek_max() {
            let atom = top as Atom;
            if atom != 0 && atom <= trail.atom_count() && trail.value_of_atom(atom).is_none() {
                return Some(atom);
            }
            self.heap.remove(top);
        }
        None
    }

    /// The polarity cached for `atom`, if any.
    pub fn cached_polarity(&self, atom: Atom) -> Option<bool> {
        self.decided.get(atom as usize).copied().flatten()
    }

    pub fn cache_polarity(&mut self, atom: Atom, polarity: bool) {
        self.ensure_atom(atom);
        self.decided[atom as usize] = Some(polarity);
    }
}
