use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of every literal assigned by propagation, including during lookahead.
    pub total_propagations: usize,

    /// A count of every check of the status of a clause.
    pub clause_checks: usize,

    /// The time spent checking the status of clauses.
    pub clause_check_time: Duration,

    /// The time taken during a solve.
    pub time: Duration,
}
