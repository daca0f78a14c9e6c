//! Names for branching heuristics and propagation variants.

/// The branching heuristic used to choose an atom to decide on.
///
/// For details on each, see [heuristics](crate::heuristics).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Heuristic {
    /// The lowest unassigned atom.
    Ordered,

    /// Some unassigned atom, uniformly at random.
    Random,

    /// The atom occurring most often in unsatisfied clauses of length two, ties at random.
    TwoClause,

    /// The atom with most occurrences in unsatisfied clauses.
    MAXO,

    /// The atom with most occurrences in unsatisfied clauses of minimum length.
    MOMS,

    /// The atom with the greatest sum of MAXO and MOMS counts.
    MAMS,

    /// The atom with the greatest Jeroslow-Wang score, ties at random.
    JW,

    /// The atom whose polarities together force the most propagation.
    UP,

    /// As [UP](Heuristic::UP), though favouring atoms where both polarities force propagation.
    GUP,

    /// VSIDS, bumping the atoms of each learnt clause.
    CVSIDS,

    /// VSIDS, bumping the atoms resolved on during analysis.
    MVSIDS,

    /// A vote between MAXO, MOMS, MAMS, and JW, decided by UP.
    Hybrid,
}

impl Heuristic {
    pub const MIN: Heuristic = Heuristic::Ordered;
    pub const MAX: Heuristic = Heuristic::Hybrid;

    /// Every heuristic.
    pub const ALL: [Heuristic; 12] = [
        Heuristic::Ordered,
        Heuristic::Random,
        Heuristic::TwoClause,
        Heuristic::MAXO,
        Heuristic::MOMS,
        Heuristic::MAMS,
        Heuristic::JW,
        Heuristic::UP,
        Heuristic::GUP,
        Heuristic::CVSIDS,
        Heuristic::MVSIDS,
        Heuristic::Hybrid,
    ];

    /// Whether the heuristic uses activity scores.
    pub fn is_vsids(&self) -> bool {
        matches!(self, Heuristic::CVSIDS | Heuristic::MVSIDS)
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordered => write!(f, "ordered"),
            Self::Random => write!(f, "random"),
            Self::TwoClause => write!(f, "2clause"),
            Self::MAXO => write!(f, "maxo"),
            Self::MOMS => write!(f, "moms"),
            Self::MAMS => write!(f, "mams"),
            Self::JW => write!(f, "jw"),
            Self::UP => write!(f, "up"),
            Self::GUP => write!(f, "gup"),
            Self::CVSIDS => write!(f, "cvsids"),
            Self::MVSIDS => write!(f, "mvsids"),
            Self::Hybrid => write!(f, "sup"),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordered" => Ok(Self::Ordered),
            "random" => Ok(Self::Random),
            "2clause" => Ok(Self::TwoClause),
            "maxo" => Ok(Self::MAXO),
            "moms" => Ok(Self::MOMS),
            "mams" => Ok(Self::MAMS),
            "jw" => Ok(Self::JW),
            "up" => Ok(Self::UP),
            "gup" => Ok(Self::GUP),
            "cvsids" => Ok(Self::CVSIDS),
            "mvsids" => Ok(Self::MVSIDS),
            "sup" => Ok(Self::Hybrid),
            _ => Err(format!("Unknown heuristic: {s}")),
        }
    }
}

/// How clauses are examined during propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Propagation {
    /// Each clause is examined from its watch refs.
    Watched,

    /// Each clause is examined in full.
    Occurrence,
}

impl Propagation {
    pub const MIN: Propagation = Propagation::Watched;
    pub const MAX: Propagation = Propagation::Occurrence;
}

impl std::fmt::Display for Propagation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Watched => write!(f, "watched"),
            Self::Occurrence => write!(f, "occurrence"),
        }
    }
}

impl std::str::FromStr for Propagation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "watched" | "cdcl_wl" => Ok(Self::Watched),
            "occurrence" | "cdcl" => Ok(Self::Occurrence),
            _ => Err(format!("Unknown propagation variant: {s}")),
        }
    }
}

#[cfg(test)]
mod heuristic_tests {
    use super::*;

    #[test]
    fn names() {
        for heuristic in Heuristic::ALL {
            let name = heuristic.to_string();
            assert_eq!(name.parse::<Heuristic>(), Ok(heuristic));
        }
        assert!("vsids".parse::<Heuristic>().is_err());
        assert_eq!("CDCL".parse::<Propagation>(), Ok(Propagation::Occurrence));
    }
}
