use clap::ArgMatches;

use cdcl_sat::config::{Config, Heuristic, Propagation};

/// A config from the arguments, or a message on the first value out of bounds.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, String> {
    let mut the_config = Config::default();

    if let Some(heuristic) = args.get_one::<Heuristic>("heuristic") {
        the_config.heuristic.set(*heuristic)?;
    };

    if let Some(propagation) = args.get_one::<Propagation>("propagation") {
        the_config.propagation.set(*propagation)?;
    };

    if let Some(seed) = args.get_one::<u64>("seed") {
        the_config.seed.set(*seed)?;
    };

    if args.get_flag("no_pure") {
        the_config.pure_literals.set(false)?;
    };

    if let Some(decay) = args.get_one::<f64>("activity_decay") {
        the_config.activity_decay.set(*decay)?;
    };

    if let Some(period) = args.get_one::<u32>("decay_period") {
        the_config.decay_period.set(*period)?;
    };

    if let Some(growth) = args.get_one::<f64>("bonus_growth") {
        the_config.bonus_growth.set(*growth)?;
    };

    if let Some(count) = args.get_one::<usize>("hybrid_candidates") {
        the_config.hybrid_candidates.set(*count)?;
    };

    if let Some(secs) = args.get_one::<u64>("time_limit") {
        the_config.time_limit = Some(std::time::Duration::from_secs(*secs))
    };

    Ok(the_config)
}
