//! Backjumping, aka. clearing levels from the trail.
//!
//! Clearing a level removes every assignment and the decision of the level from the [trail](crate::db::trail), together with the entry of each cleared atom from the [implication graph](crate::db::implication).
//! Each cleared atom is returned to the activity heap, and with watched propagation the watch refs of each clause containing a cleared atom are refreshed.
//! Backjumping to a level clears every level above the level, any pending consequences, and the conflict, if any.
//!
//! Levels below those cleared are untouched.

use crate::{
    config::Propagation,
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Clears levels `from` to `to`, inclusive, from the trail and implication graph.
    pub fn clear_levels(&mut self, from: LevelIndex, to: LevelIndex) {
        let cleared = self.trail.clear_levels(from, to);
        for atom in &cleared {
            self.implication_graph.remove(*atom);
            self.activity_db.release(*atom);
        }

        if self.config.propagation.value == Propagation::Watched {
            for atom in cleared {
                self.clause_db.refresh_watches(atom, &self.trail);
            }
        }
    }

    /// Backjumps to `level`.
    pub fn backjump(&mut self, level: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {level}", self.level);

        if level < self.level {
            self.clear_levels(level + 1, self.level);
        }
        self.level = level;
        self.consequence_q.clear();
        self.implication_graph.clear_conflict();
    }
}
