//! A reader for formulas in DIMACS CNF.
//!
//! - Lines beginning with `c` are comments.
//! - An optional problem line `p cnf <atoms> <clauses>` may appear before the first clause. The atoms declared are added to the context, and so may be at most [ATOM_MAX].
//! - A clause is a sequence of non-zero integers terminated by `0`, and may span lines. Several clauses may share a line.
//! - A line beginning with `%` ends the formula.
//! - A final clause without a terminating `0` is read as a clause.
//!
//! Errors note the (1-indexed) line at which the issue was found.

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

/// Details of a DIMACS formula read into a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared by the problem line, if any.
    pub expected_atoms: Option<Atom>,

    /// The count of clauses declared by the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms in the context after reading.
    pub added_atoms: Atom,

    /// The count of clauses read, including any skipped tautologies.
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;
        let mut formula_started = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break 'line_loop,

                Some('p') => {
                    if formula_started || info.expected_atoms.is_some() {
                        return Err(ErrorKind::from(err::ParseError::ProblemSpecification(
                            line_counter,
                        )));
                    }

                    let (atoms, clauses) = problem_details(&buffer)
                        .ok_or(err::ParseError::ProblemSpecification(line_counter))?;
                    log::info!(target: targets::CLAUSE_DB, "Expecting {atoms} atoms and {clauses} clauses");

                    self.ensure_atoms(atoms);
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                _ => {
                    formula_started = true;

                    for item in buffer.split_whitespace() {
                        let literal = item
                            .parse::<CLiteral>()
                            .map_err(|_| err::ParseError::Literal(line_counter))?;

                        match literal {
                            0 => {
                                self.add_clause(std::mem::take(&mut clause_buffer))?;
                                info.added_clauses += 1;
                            }
                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_count();

        if info.expected_clauses.is_some_and(|count| count != info.added_clauses) {
            log::warn!(target: targets::CLAUSE_DB,
                "Read {} clauses, expected {:?}", info.added_clauses, info.expected_clauses
            );
        }

        Ok(info)
    }
}

/// The atom and clause counts of a problem line.
fn problem_details(line: &str) -> Option<(Atom, usize)> {
    let mut details = line.split_whitespace();

    match (details.next(), details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return None,
    }

    let atoms: Atom = details.next()?.parse().ok()?;
    if atoms > ATOM_MAX {
        return None;
    }
    let clauses = details.next()?.parse().ok()?;

    match details.next() {
        None => Some((atoms, clauses)),
        Some(_) => None,
    }
}
