/*!
Reports for the context, and writers for reports.

A [Report] is the verdict of a solve.
The writers here print a verdict, a model, and counters in the conventional DIMACS output format:
- `s` lines for the verdict.
- `v` lines for the model, terminated by `0`.
- `c` lines for anything else.
*/

use std::io::Write;

use crate::{
    context::{ContextState, Counters},
    structures::{clause::Clause, literal::CLiteral},
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Writes the verdict of `report`, and `model` if the report is satisfiable and a model is given.
///
/// ```rust
/// # use cdcl_sat::reports::{write_dimacs_result, Report};
/// let mut out = Vec::new();
/// write_dimacs_result(&mut out, Report::Satisfiable, Some([1, -2, 3].as_slice())).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "s SATISFIABLE\nv 1 -2 3 0\n");
/// ```
pub fn write_dimacs_result(
    mut writer: impl Write,
    report: Report,
    model: Option<&[CLiteral]>,
) -> std::io::Result<()> {
    writeln!(writer, "s {report}")?;

    if let (Report::Satisfiable, Some(model)) = (report, model) {
        writeln!(writer, "v {}", model.as_dimacs(true))?;
    }

    Ok(())
}

/// Writes `counters` as comment lines, together with a count of learnt clauses.
pub fn write_stats(
    mut writer: impl Write,
    counters: &Counters,
    learnt_clauses: usize,
) -> std::io::Result<()> {
    writeln!(writer, "c decisions:          {}", counters.total_decisions)?;
    writeln!(writer, "c conflicts:          {}", counters.total_conflicts)?;
    writeln!(writer, "c propagations:       {}", counters.total_propagations)?;
    writeln!(writer, "c iterations:         {}", counters.total_iterations)?;
    writeln!(writer, "c learnt clauses:     {learnt_clauses}")?;
    writeln!(writer, "c clause checks:      {}", counters.clause_checks)?;
    writeln!(
        writer,
        "c clause check time:  {:.6}s",
        counters.clause_check_time.as_secs_f64()
    )?;
    writeln!(writer, "c solve time:         {:.6}s", counters.time.as_secs_f64())?;
    Ok(())
}
