use std::collections::VecDeque;

use crate::{
    config::Config,
    db::{
        activity::ActivityDB,
        clause::{ClauseDB, ClauseSource},
        implication::ImplicationGraph,
        trail::Trail,
        ClauseKey, LevelIndex,
    },
    misc::log::targets::{self},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use super::{
    callbacks::{CallbackAddition, CallbackDecision, CallbackPhase, CallbackTerminate},
    ContextState, Counters,
};

/// A generic context, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use cdcl_sat::context::GenericContext;
/// # use cdcl_sat::generic::random::MinimalPCG32;
/// # use cdcl_sat::config::Config;
/// # use rand::SeedableRng;
/// let rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());
/// let context = GenericContext::from_config_and_rng(Config::default(), rng);
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The implication graph.
    /// See [db::implication](crate::db::implication) for details.
    pub implication_graph: ImplicationGraph,

    /// Activity scores, used by VSIDS heuristics.
    pub activity_db: ActivityDB,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The current decision level.
    pub level: LevelIndex,

    /// Literals falsified by an assignment, whose occurrences are yet to be examined.
    pub(crate) consequence_q: VecDeque<CLiteral>,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// Whether an empty clause was added.
    pub(crate) empty_clause: bool,

    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    pub(super) callback_phase: Option<Box<CallbackPhase>>,

    pub(super) callback_decision: Option<Box<CallbackDecision>>,

    pub(super) callback_addition: Option<Box<CallbackAddition>>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),

            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            implication_graph: ImplicationGraph::default(),
            activity_db: ActivityDB::default(),

            state: ContextState::Input,
            rng,
            level: 0,

            consequence_q: VecDeque::default(),
            resolution_buffer: ResolutionBuffer::default(),
            empty_clause: false,

            callback_terminate: None,
            callback_phase: None,
            callback_decision: None,
            callback_addition: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of the atoms in the context.
    pub fn atom_count(&self) -> Atom {
        self.trail.atom_count()
    }

    /// Ensures every atom up to and including `atom` is part of the context.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        self.trail.ensure_atom(atom);
        self.clause_db.ensure_atom(atom);
        self.implication_graph.ensure_atom(atom);
        self.activity_db.ensure_atom(atom);
    }

    /// A fresh atom, one greater than the greatest atom of the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let atom = self.atom_count() + 1;
        if atom > ATOM_MAX {
            return Err(ErrorKind::from(err::ClauseDBError::AtomOverflow));
        }
        self.ensure_atoms(atom);
        Ok(atom)
    }

    /// Adds a clause to the context.
    ///
    /// - Duplicate literals are removed, keeping the first occurrence of each.
    /// - A tautology is skipped, and no key is returned.
    /// - An empty clause is noted, and the formula is then unsatisfiable. No key is returned.
    ///
    /// Atoms of the clause not already part of the context are added.
    pub fn add_clause(&mut self, clause: CClause) -> Result<Option<ClauseKey>, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(ErrorKind::InvalidState);
        }

        let mut the_clause: CClause = Vec::with_capacity(clause.len());
        for literal in clause {
            if literal == 0 {
                return Err(ErrorKind::from(err::ClauseDBError::ZeroLiteral));
            }
            if literal.atom() > ATOM_MAX {
                return Err(ErrorKind::from(err::ClauseDBError::AtomOverflow));
            }
            if !the_clause.contains(&literal) {
                the_clause.push(literal);
            }
        }

        if the_clause.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "Empty clause added");
            self.empty_clause = true;
            return Ok(None);
        }

        if the_clause.is_tautology() {
            log::info!(target: targets::CLAUSE_DB, "Skipped tautology: {}", the_clause.as_dimacs(false));
            return Ok(None);
        }

        if let Some(max) = the_clause.atoms().max() {
            if max > self.atom_count() {
                self.ensure_atoms(max);
            }
        }

        let key = self.clause_db.register(the_clause, ClauseSource::Original)?;
        Ok(Some(key))
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.trail.value_of_atom(atom)
    }

    /// The model found by a solve, as a literal for each atom in order.
    ///
    /// Atoms without a value are given a positive polarity, as every clause is satisfied regardless of their value.
    pub fn model(&self) -> Result<Vec<CLiteral>, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok((1..=self.atom_count())
                .map(|atom| CLiteral::new(atom, self.value_of(atom).unwrap_or(true)))
                .collect()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The model, as a string of DIMACS literals.
    pub fn valuation_string(&self) -> Result<String, ErrorKind> {
        Ok(self.model()?.as_dimacs(false))
    }

    /// Whether the model satisfies every original clause.
    pub fn validate_model(&self) -> Result<bool, ErrorKind> {
        let mut valuation = vec![None];
        valuation.extend(self.model()?.iter().map(|literal| Some(literal.polarity())));

        Ok(self
            .clause_db
            .original_clauses()
            .all(|clause| clause.literals().satisfied_on(&valuation)))
    }
}
