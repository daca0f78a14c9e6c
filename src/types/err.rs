//! Error types used in the library.
//!
//! - Errors in [parsing](ParseError) are external, and highlight some issue with the input.
//! - Most other errors indicate a failure of the solver's own bookkeeping, and are very unlikely to occur during use.
//!   On such an error a solve is abandoned and the error returned, rather than a (possibly incorrect) report.
//!
//! An unsatisfiable formula is *not* an error, and is instead noted by a [report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::CLiteral;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    ClauseDB(ClauseDBError),
    Implication(ImplicationError),
    Parse(ParseError),
    Trail(TrailError),

    /// A request which is not possible in the current state of a context, e.g. adding a clause after a solve.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// No conflict was recorded in the implication graph.
    NoConflict,

    /// A literal resolved on has no antecedents.
    MissingAntecedent(CLiteral),

    /// A literal in the resolution has no value.
    UnassignedLiteral(CLiteral),

    /// No literal of the conflict is at the level of the conflict.
    NoConflictLevelLiteral,

    /// A literal and its negation appeared at the same level during resolution.
    ComplementaryLiterals(CLiteral),

    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// Some attempt was made to store a clause containing a literal and its negation.
    Tautology,

    /// The literal `0` was found in a clause.
    ZeroLiteral,

    /// A literal whose atom is beyond those which may be represented.
    AtomOverflow,

    /// A key without a clause.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors in the implication graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImplicationError {
    /// An atom was implied while already holding an entry.
    DuplicateEntry(CLiteral),
}

impl From<ImplicationError> for ErrorKind {
    fn from(e: ImplicationError) -> Self {
        ErrorKind::Implication(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification(usize),

    /// An item which is not a literal at a specific line.
    Literal(usize),

    /// A failure to read a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors on the trail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrailError {
    /// An assignment which must succeed conflicts with the current value of the atom.
    ValueConflict(CLiteral),
}

impl From<TrailError> for ErrorKind {
    fn from(e: TrailError) -> Self {
        ErrorKind::Trail(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Implication(e) => write!(f, "Implication graph error: {e:?}"),
            Self::Parse(ParseError::ProblemSpecification(line)) => {
                write!(f, "Malformed problem specification on line {line}")
            }
            Self::Parse(ParseError::Literal(line)) => write!(f, "Malformed literal on line {line}"),
            Self::Parse(ParseError::Line(line)) => write!(f, "Unable to read line {line}"),
            Self::Trail(e) => write!(f, "Trail error: {e:?}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
