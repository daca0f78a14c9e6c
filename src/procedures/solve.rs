//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a small state machine over the [state](crate::context::ContextState) of a context.
//!
//! - From input, level zero is [settled](crate::procedures::level_zero).
//!   A conflict on level zero ends the solve as unsatisfiable, and otherwise the search begins.
//! - On each iteration of the search a [decision](crate::procedures::decision) is made, and its consequences [propagated](crate::procedures::bcp).
//!   + If no decision is required, the formula is satisfiable, on the valuation of the trail.
//!   + If propagation finds a conflict at level zero, the formula is unsatisfiable.
//!   + If propagation finds a conflict at some other level, a clause is learnt by [analysis](crate::procedures::analysis), the context [backjumps](crate::procedures::backjump) to the level at which the clause asserts some literal, and the literal is assigned and propagated.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> satisfiable, if no decision is required
//!   |       +---------------+
//!   |               ⌃
//!   |               | if propagation is exhausted
//!   |               |
//!   ⌄       +-----------+
//! --+------>| propagate |---------> unsatisfiable, on a conflict at level zero
//!   ⌃       +-----------+
//!   |               |
//!   |               | on a conflict
//!   |               ⌄
//!   |       +------------------+
//!   +-------| analyse+backjump |
//!           +------------------+
//! ```
//!
//! Before each decision the terminate callback and time limit are checked, and either ends the solve with an unknown report.
//! The valuation is left intact, and a further call to solve continues the search.
//!
//! # Example
//!
//! ```rust
//! # use cdcl_sat::config::Config;
//! # use cdcl_sat::context::Context;
//! # use cdcl_sat::reports::Report;
//! let clauses = vec![vec![1, 2], vec![-1, -2]];
//! let mut the_context = Context::from_clauses(Config::default(), 2, &clauses).unwrap();
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.validate_model(), Ok(true));
//!
//! let model = the_context.model().unwrap();
//! assert!(model == vec![1, -2] || model == vec![-1, 2]);
//! ```

use std::time::Instant;

use crate::{
    config::Heuristic,
    context::{ContextState, GenericContext},
    db::clause::ClauseSource,
    heuristics::counting,
    misc::log::targets::{self},
    procedures::{
        analysis::AnalysisResult, bcp::BCPOk, decision::DecisionOk, level_zero::LevelZeroOk,
    },
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let total_time = Instant::now();
        let previous_time = self.counters.time;

        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),

            ContextState::Solving => {}

            ContextState::Input => {
                self.state = ContextState::Solving;

                if self.empty_clause {
                    self.state = ContextState::Unsatisfiable;
                    return Ok(self.report());
                }

                if self.config.heuristic.value.is_vsids() {
                    let scores = counting::jw_scores(
                        self.clause_db.all_clauses().map(|clause| clause.literals()),
                        self.atom_count(),
                    );
                    self.activity_db.initialise(&scores);
                }

                if self.settle_level_zero()? == LevelZeroOk::Conflict {
                    log::info!(target: targets::SOLVE, "Conflict at level zero");
                    self.state = ContextState::Unsatisfiable;
                    self.counters.time = previous_time + total_time.elapsed();
                    return Ok(self.report());
                }
            }
        }

        'solve_loop: loop {
            self.counters.time = previous_time + total_time.elapsed();
            let time_limit = self.config.time_limit;
            if time_limit.is_some_and(|limit| self.counters.time >= limit) {
                log::info!(target: targets::SOLVE, "Time limit reached");
                return Ok(Report::Unknown);
            }
            if self.check_callback_terminate() {
                log::info!(target: targets::SOLVE, "Terminated by callback");
                return Ok(Report::Unknown);
            }

            self.counters.total_iterations += 1;

            match self.make_decision()? {
                DecisionOk::Exhausted => {
                    self.state = ContextState::Satisfiable;
                    break 'solve_loop;
                }
                DecisionOk::Literal(_) => {}
            }

            'propagation_loop: loop {
                match self.propagate()? {
                    BCPOk::Exhausted => break 'propagation_loop,

                    BCPOk::Conflict(_) => {
                        self.counters.total_conflicts += 1;

                        if self.level == 0 {
                            log::info!(target: targets::SOLVE, "Conflict at level zero");
                            self.state = ContextState::Unsatisfiable;
                            break 'solve_loop;
                        }

                        let analysis = self.conflict_analysis()?;
                        self.apply_analysis(&analysis)?;
                    }
                }
            }
        }

        self.counters.time = previous_time + total_time.elapsed();
        log::info!(target: targets::SOLVE, "{} after {} conflicts", self.report(), self.counters.total_conflicts);
        Ok(self.report())
    }

    /// Stores a learnt clause, backjumps, and assigns the asserted literal.
    pub fn apply_analysis(&mut self, analysis: &AnalysisResult) -> Result<(), ErrorKind> {
        let key = self
            .clause_db
            .register(analysis.clause.clone(), ClauseSource::Learnt)?;
        log::debug!(target: targets::SOLVE, "Learnt {key}");
        self.make_callback_addition(&analysis.clause);

        self.backjump(analysis.backjump_level);

        let antecedents: Vec<CLiteral> = analysis
            .clause
            .iter()
            .filter(|literal| **literal != analysis.asserted)
            .map(|literal| literal.negate())
            .collect();

        if !self.assign_literal(analysis.asserted) {
            return Err(ErrorKind::from(err::TrailError::ValueConflict(
                analysis.asserted,
            )));
        }
        self.implication_graph
            .record(analysis.asserted, antecedents)?;

        self.update_activity(analysis);
        Ok(())
    }

    /// Bumps and decays activity after a conflict, if using a VSIDS heuristic.
    fn update_activity(&mut self, analysis: &AnalysisResult) {
        match self.config.heuristic.value {
            Heuristic::CVSIDS => {
                for literal in &analysis.clause {
                    self.activity_db.bump(literal.atom());
                }
            }

            Heuristic::MVSIDS => {
                for atom in &analysis.resolved {
                    self.activity_db.bump(*atom);
                }
            }

            _ => return,
        }

        self.activity_db.note_conflict(
            self.config.bonus_growth.value,
            self.config.activity_decay.value,
            self.config.decay_period.value,
        );
    }
}
