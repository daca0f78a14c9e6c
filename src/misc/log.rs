/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The [CLI](crate) binary installs `env_logger`, and so logs may be filtered by target, e.g. `RUST_LOG=analysis=trace`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [trail](crate::db::trail)
    pub const TRAIL: &str = "trail";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [lookahead](crate::heuristics::lookahead)
    pub const LOOKAHEAD: &str = "lookahead";

    /// Logs related to [level zero](crate::procedures::level_zero)
    pub const LEVEL_ZERO: &str = "level_zero";

    /// Logs related to a [solve](crate::procedures::solve)
    pub const SOLVE: &str = "solve";
}
