//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! cdcl_sat is a conflict-driven clause-learning solver, with a two-watched-literal propagation engine and a family of branching heuristics, from simple orderings through counting heuristics to lookahead and VSIDS.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config), and clauses are added either [programatically](crate::context::GenericContext::add_clause) or through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula.
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - The formula is stored in a [clause database](crate::db::clause).
//! - The valuation, arranged by decision level, is stored on a [trail](crate::db::trail).
//! - The reasons for each propagated literal are stored in an [implication graph](crate::db::implication).
//! - VSIDS scores are stored in an [activity database](crate::db::activity).
//!
//! Useful starting points may be:
//! - The high-level [solve procedure](crate::procedures::solve), to inspect the dynamics of a solve.
//! - The [heuristics], to see how decisions are made.
//! - The [configuration](crate::config), to see what features are supported.
//!
//! # Example
//!
//! ```rust
//! # use cdcl_sat::context::Context;
//! # use cdcl_sat::config::Config;
//! # use cdcl_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log] to help narrow output to relevant parts of the library.
//! Logs are compiled out of release builds.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs related to conflict analysis can be found with `RUST_LOG=analysis=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod heuristics;

pub mod misc;
pub mod reports;
pub mod resolution_buffer;
