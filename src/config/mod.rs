/*!
Configuration of a context.

All configuration for a context is contained in a [Config], fixed when the context is created.
Each option is a [ConfigOption], carrying its name and bounds alongside its value, so that an external layer (such as the CLI) may check a request before setting a value.

```rust
# use cdcl_sat::config::{Config, Heuristic};
let mut config = Config::default();
assert_eq!(config.heuristic.value, Heuristic::TwoClause);

assert!(config.activity_decay.set(0.95).is_ok());
assert!(config.activity_decay.set(1.5).is_err());
assert_eq!(config.activity_decay.value, 0.95);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod heuristic;
pub use heuristic::{Heuristic, Propagation};

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The heuristic used to choose an atom to decide on.
    pub heuristic: ConfigOption<Heuristic>,

    /// How clauses are examined during propagation.
    pub propagation: ConfigOption<Propagation>,

    /// The seed for the source of rng.
    pub seed: ConfigOption<u64>,

    /// Assign pure literals before a search.
    pub pure_literals: ConfigOption<bool>,

    /// The factor by which activities decay.
    pub activity_decay: ConfigOption<f64>,

    /// The count of conflicts between decays of activity.
    pub decay_period: ConfigOption<u32>,

    /// The factor by which the activity bonus grows after each conflict.
    pub bonus_growth: ConfigOption<f64>,

    /// The count of candidates taken from each heuristic voting in the hybrid heuristic.
    pub hybrid_candidates: ConfigOption<usize>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: ConfigOption {
                name: "heuristic",
                min: Heuristic::MIN,
                max: Heuristic::MAX,
                value: Heuristic::TwoClause,
            },

            propagation: ConfigOption {
                name: "propagation",
                min: Propagation::MIN,
                max: Propagation::MAX,
                value: Propagation::Watched,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            pure_literals: ConfigOption {
                name: "pure_literals",
                min: false,
                max: true,
                value: true,
            },

            activity_decay: ConfigOption {
                name: "activity_decay",
                min: f64::EPSILON,
                max: 1.0,
                value: 0.8,
            },

            decay_period: ConfigOption {
                name: "decay_period",
                min: 1,
                max: u32::MAX,
                value: 1,
            },

            bonus_growth: ConfigOption {
                name: "bonus_growth",
                min: 1.0,
                max: 2.0,
                value: 1.2,
            },

            hybrid_candidates: ConfigOption {
                name: "hybrid_candidates",
                min: 1,
                max: usize::MAX,
                value: 3,
            },

            time_limit: None,
        }
    }
}
