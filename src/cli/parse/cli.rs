use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use cdcl_sat::config::{Config, Heuristic, Propagation};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("cdcl_cli")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to parse (as a single formula).
If no file is given, the formula is read from stdin."))

        .arg(Arg::new("heuristic")
            .long("heuristic")
            .value_name("HEURISTIC")
            .value_parser(clap::builder::ValueParser::new(heuristic_parser))
            .required(false)
            .num_args(1)
            .help(format!("The branching heuristic.
Default: {}", defaults.heuristic.value))
            .long_help(format!("The branching heuristic.
Default: {}

  - ordered: The lowest unassigned atom.
  - random : An unassigned atom, uniformly at random.
  - 2clause: Most occurrences in binary clauses.
  - maxo   : Most occurrences.
  - moms   : Most occurrences in clauses of minimum size.
  - mams   : Greatest sum of maxo and moms counts.
  - jw     : Greatest Jeroslow-Wang score.
  - up     : Unit propagation lookahead, sum of counts.
  - gup    : Unit propagation lookahead, product of counts.
  - cvsids : VSIDS, bumping atoms of learnt clauses.
  - mvsids : VSIDS, bumping atoms used in resolution.
  - sup    : Votes from maxo, moms, mams, and jw, settled by lookahead.", defaults.heuristic.value)))

        .arg(Arg::new("propagation")
            .long("propagation")
            .value_name("VARIANT")
            .value_parser(clap::builder::ValueParser::new(propagation_parser))
            .required(false)
            .num_args(1)
            .help(format!("How the status of a clause is found during propagation.
Default: {}", defaults.propagation.value))
            .long_help(format!("How the status of a clause is found during propagation.
Default: {}

  - watched   : From two watched literals of the clause.
  - occurrence: From a scan of every literal of the clause.", defaults.propagation.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for random choices.
Default: {}", defaults.seed.value)))

        .arg(Arg::new("no_pure")
            .long("no-pure")
            .action(ArgAction::SetTrue)
            .help("Do not assign pure literals before the search."))

        .arg(Arg::new("activity_decay")
            .long("activity-decay")
            .value_name("DECAY")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The factor by which VSIDS activity decays.
Default: {}", defaults.activity_decay.value)))

        .arg(Arg::new("decay_period")
            .long("decay-period")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help(format!("The count of conflicts between each decay of VSIDS activity.
Default: {}", defaults.decay_period.value)))

        .arg(Arg::new("bonus_growth")
            .long("bonus-growth")
            .value_name("GROWTH")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The factor by which the VSIDS bonus grows after each conflict.
Default: {}", defaults.bonus_growth.value)))

        .arg(Arg::new("hybrid_candidates")
            .long("hybrid-candidates")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The count of candidates nominated by each heuristic in the sup heuristic.
Default: {}", defaults.hybrid_candidates.value)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the solve in seconds.
Default: No limit"))

        // CLI specific arguments

        .arg(Arg::new("detail")
            .long("detail")
            .short('d')
            .value_name("LEVEL")
            .value_parser(value_parser!(u8).range(0..=5))
            .required(false)
            .num_args(1)
            .help(format!("The level of logs, from 0 (off) to 5 (trace).
Default: {}
RUST_LOG, if set, takes precedence.", crate::config_io::DETAILS)))

        .arg(Arg::new("log_file")
            .long("log-file")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Write logs to the given file, rather than stderr."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Display stats on completion."))

        .arg(Arg::new("no_valuation")
            .long("no-valuation")
            .action(ArgAction::SetTrue)
            .help("Do not display the valuation of a satisfiable formula."))
}

fn heuristic_parser(arg: &str) -> Result<Heuristic, std::io::Error> {
    arg.parse::<Heuristic>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))
}

fn propagation_parser(arg: &str) -> Result<Propagation, std::io::Error> {
    arg.parse::<Propagation>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))
}
