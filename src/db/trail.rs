/*!
The trail, aka. the (partial) valuation arranged by decision level.

For each atom the trail records at most one [Assignment], pairing a value with the level at which the value was set.
For each level the trail records the atoms assigned at that level, in order of assignment, and the atom decided on to open the level, if any.

Level zero is always present and never holds a decision.
Levels above zero are created on demand by [assign](Trail::assign) and removed by [clear_levels](Trail::clear_levels).

```rust
# use cdcl_sat::db::trail::Trail;
let mut trail = Trail::default();
trail.ensure_atom(3);

assert!(trail.assign(1, 0, true));
assert!(trail.assign(2, 1, false));
trail.set_decision(1, 2);

assert!(trail.assign(2, 1, false));
assert!(!trail.assign(2, 1, true));

assert_eq!(trail.value_of(-2), Some(true));
assert_eq!(trail.value_of(3), None);
assert_eq!(trail.level_assignments(1), &[2]);

trail.clear_levels(1, 1);
assert_eq!(trail.value_of(2), None);
assert_eq!(trail.decision_at(1), None);
assert_eq!(trail.value_of(1), Some(true));
```
*/

use crate::{
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The value of an atom, and the level at which the value was set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub value: bool,
    pub level: LevelIndex,
}

pub struct Trail {
    /// Assignments, indexed by atom.
    assignments: Vec<Option<Assignment>>,

    /// The atoms assigned at each level, in order of assignment.
    levels: Vec<Vec<Atom>>,

    /// The decision of each level, if any.
    decisions: Vec<Option<Atom>>,

    /// A count of assigned atoms.
    assigned: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            assignments: vec![None],
            levels: vec![Vec::default()],
            decisions: vec![None],
            assigned: 0,
        }
    }
}

impl Trail {
    /// Extends the trail to cover every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        if self.assignments.len() <= atom as usize {
            self.assignments.resize(atom as usize + 1, None);
        }
    }

    /// A count of atoms covered by the trail.
    pub fn atom_count(&self) -> Atom {
        (self.assignments.len() - 1) as Atom
    }

    /// A count of atoms with some value.
    pub fn assigned_count(&self) -> usize {
        self.assigned
    }

    /// Whether every atom has some value.
    pub fn is_complete(&self) -> bool {
        self.assigned == self.atom_count() as usize
    }

    /// Assigns `value` to `atom` at `level`.
    ///
    /// Returns false, without any change to the trail, if `atom` already has a different value.
    /// If `atom` already has the same value, nothing is changed and true is returned.
    ///
    /// # Panics
    /// If `atom` is not covered by the trail.
    pub fn assign(&mut self, atom: Atom, level: LevelIndex, value: bool) -> bool {
        match self.assignments[atom as usize] {
            Some(assignment) => assignment.value == value,

            None => {
                while self.levels.len() <= level as usize {
                    self.levels.push(Vec::default());
                    self.decisions.push(None);
                }

                log::trace!(target: targets::TRAIL, "{} at {level}", CLiteral::new(atom, value));
                self.assignments[atom as usize] = Some(Assignment { value, level });
                self.levels[level as usize].push(atom);
                self.assigned += 1;
                true
            }
        }
    }

    /// Notes `atom` as the decision of `level`.
    pub fn set_decision(&mut self, level: LevelIndex, atom: Atom) {
        while self.decisions.len() <= level as usize {
            self.levels.push(Vec::default());
            self.decisions.push(None);
        }
        self.decisions[level as usize] = Some(atom);
    }

    /// The decision of `level`, if any.
    pub fn decision_at(&self, level: LevelIndex) -> Option<Atom> {
        self.decisions.get(level as usize).copied().flatten()
    }

    /// The assignment of `atom`, if any.
    pub fn assignment(&self, atom: Atom) -> Option<Assignment> {
        self.assignments.get(atom as usize).copied().flatten()
    }

    /// The value of `atom`, if any.
    pub fn value_of_atom(&self, atom: Atom) -> Option<bool> {
        self.assignment(atom).map(|assignment| assignment.value)
    }

    /// The level at which `atom` was assigned, if assigned.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment(atom).map(|assignment| assignment.level)
    }

    /// The value of `literal`, if its atom has a value.
    pub fn value_of(&self, literal: CLiteral) -> Option<bool> {
        literal.value_on(self.value_of_atom(literal.atom()))
    }

    /// The atoms assigned at `level`, in order of assignment.
    pub fn level_assignments(&self, level: LevelIndex) -> &[Atom] {
        match self.levels.get(level as usize) {
            Some(atoms) => atoms,
            None => &[],
        }
    }

    /// The highest level holding some assignment or decision.
    pub fn top_level(&self) -> LevelIndex {
        (self.levels.len() - 1) as LevelIndex
    }

    /// Removes every assignment and decision at levels `from` to `to`, inclusive.
    ///
    /// Returns the atoms whose assignments were removed.
    pub fn clear_levels(&mut self, from: LevelIndex, to: LevelIndex) -> Vec<Atom> {
        let mut cleared = Vec::default();
        let top = self.top_level();
        if from > to || from > top {
            return cleared;
        }

        for level in from..=std::cmp::min(to, top) {
            log::trace!(target: targets::TRAIL, "Clearing level {level}");
            for atom in std::mem::take(&mut self.levels[level as usize]) {
                self.assignments[atom as usize] = None;
                self.assigned -= 1;
                cleared.push(atom);
            }
            self.decisions[level as usize] = None;
        }

        if to >= top {
            let keep = std::cmp::max(from as usize, 1);
            self.levels.truncate(keep);
            self.decisions.truncate(keep);
        }

        cleared
    }

    /// The valuation of the trail, indexed by atom.
    pub fn valuation(&self) -> Vec<Option<bool>> {
        self.assignments
            .iter()
            .map(|assignment| assignment.map(|a| a.value))
            .collect()
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    fn trail_over(atoms: Atom) -> Trail {
        let mut trail = Trail::default();
        trail.ensure_atom(atoms);
        trail
    }

    #[test]
    fn assignment_is_fixed_until_cleared() {
        let mut trail = trail_over(2);

        assert!(trail.assign(1, 0, false));
        assert!(trail.assign(1, 3, false));
        assert!(!trail.assign(1, 0, true));

        assert_eq!(trail.level_of(1), Some(0));
        assert_eq!(trail.level_assignments(0), &[1]);
        assert!(trail.level_assignments(3).is_empty());
        assert_eq!(trail.assigned_count(), 1);
        assert!(!trail.is_complete());

        assert!(trail.assign(2, 0, true));
        assert!(trail.is_complete());
    }

    #[test]
    fn level_order() {
        let mut trail = trail_over(4);

        assert!(trail.assign(3, 1, true));
        trail.set_decision(1, 3);
        assert!(trail.assign(1, 1, true));
        assert!(trail.assign(4, 1, false));

        assert_eq!(trail.level_assignments(1), &[3, 1, 4]);
        assert_eq!(trail.decision_at(1), Some(3));
        assert_eq!(trail.decision_at(0), None);
        assert_eq!(trail.top_level(), 1);
    }

    #[test]
    fn clear_is_inclusive_and_bounded() {
        let mut trail = trail_over(6);

        for level in 0..=5 {
            assert!(trail.assign(level + 1, level, true));
            if level > 0 {
                trail.set_decision(level, level + 1);
            }
        }

        let mut cleared = trail.clear_levels(2, 3);
        cleared.sort();
        assert_eq!(cleared, vec![3, 4]);

        for level in 2..=3 {
            assert!(trail.level_assignments(level).is_empty());
            assert_eq!(trail.decision_at(level), None);
            assert_eq!(trail.value_of_atom(level + 1), None);
        }

        for level in [0, 1, 4, 5] {
            assert_eq!(trail.level_assignments(level), &[level + 1]);
            assert_eq!(trail.value_of_atom(level + 1), Some(true));
        }
        assert_eq!(trail.top_level(), 5);

        trail.clear_levels(1, 5);
        assert_eq!(trail.top_level(), 0);
        assert_eq!(trail.assigned_count(), 1);
        assert_eq!(trail.valuation()[1], Some(true));
        assert_eq!(trail.valuation()[2], None);
    }

    #[test]
    fn clear_level_zero() {
        let mut trail = trail_over(2);
        assert!(trail.assign(1, 0, true));
        assert!(trail.assign(2, 1, true));

        trail.clear_levels(0, 1);
        assert_eq!(trail.assigned_count(), 0);
        assert_eq!(trail.top_level(), 0);
        assert!(trail.assign(1, 0, false));
    }
}
