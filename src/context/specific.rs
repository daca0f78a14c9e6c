use crate::{
    config::Config, generic::random::MinimalPCG32, structures::atom::Atom,
    types::err::ErrorKind,
};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration, with rng seeded by the config.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::from_config_and_rng(config, rng)
    }

    /// Creates a context containing the given clauses, over atoms `1..=atom_count` (at least).
    ///
    /// ```rust
    /// # use cdcl_sat::context::Context;
    /// # use cdcl_sat::config::Config;
    /// # use cdcl_sat::reports::Report;
    /// let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2]];
    /// let mut the_context = Context::from_clauses(Config::default(), 2, &clauses).unwrap();
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn from_clauses(
        config: Config,
        atom_count: Atom,
        clauses: &[Vec<i32>],
    ) -> Result<Self, ErrorKind> {
        let mut the_context = Self::from_config(config);
        the_context.ensure_atoms(atom_count);
        for clause in clauses {
            the_context.add_clause(clause.clone())?;
        }
        Ok(the_context)
    }
}
