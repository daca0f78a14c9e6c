#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use cdcl_sat::{context::Context, reports::Report};

mod config_io;
mod misc;
mod parse;

use config_io::ConfigIO;

use crate::misc::{install_logger, load_formula, write_outcome};

fn main() {
    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    if let Err(e) = install_logger(&config_io) {
        eprintln!("c Could not open log file: {e}");
        std::process::exit(1);
    }

    let mut the_context = Context::from_config(config);

    if let Err(e) = load_formula(&mut the_context, &config_io.files) {
        eprintln!("c {e}");
        std::process::exit(1);
    }

    let the_report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = write_outcome(std::io::stdout().lock(), &the_context, the_report, &config_io) {
        eprintln!("c Could not write result: {e}");
        std::process::exit(1);
    }

    match the_report {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(0),
    }
}
