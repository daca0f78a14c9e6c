use std::path::PathBuf;

use clap::ArgMatches;

pub const DETAILS: u8 = 0;

/// Configuration of the CLI, beyond the configuration of a context.
#[derive(Clone)]
pub struct ConfigIO {
    pub files: Vec<PathBuf>,
    pub detail: u8,
    pub log_file: Option<PathBuf>,
    pub show_stats: bool,
    pub show_valuation: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            files: Vec::default(),
            detail: DETAILS,
            log_file: None,
            show_stats: false,
            show_valuation: true,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut config_io = ConfigIO::default();

        if let Some(paths) = args.get_many::<PathBuf>("paths") {
            config_io.files = paths.cloned().collect();
        }

        if let Some(detail) = args.get_one::<u8>("detail") {
            config_io.detail = *detail;
        }

        config_io.log_file = args.get_one::<PathBuf>("log_file").cloned();
        config_io.show_stats = args.get_flag("stats");
        config_io.show_valuation = !args.get_flag("no_valuation");

        config_io
    }

    /// The log level corresponding to the detail requested.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.detail {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
