use std::{
    fs::File,
    io::{BufReader, Write},
    path::PathBuf,
};

use cdcl_sat::{
    builder::dimacs::ParserInfo,
    context::Context,
    reports::{self, Report},
    types::err::ErrorKind,
};

use crate::config_io::ConfigIO;

/// Errors when loading a formula.
pub enum LoadError {
    /// A file could not be opened.
    File(PathBuf, std::io::Error),

    /// A formula could not be read.
    Read(Option<PathBuf>, ErrorKind),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path, e) => write!(f, "Could not open {}: {e}", path.display()),
            Self::Read(Some(path), e) => write!(f, "Could not read {}: {e}", path.display()),
            Self::Read(None, e) => write!(f, "Could not read stdin: {e}"),
        }
    }
}

/// Loads the formula of each file into the context, or the formula on stdin if there are no files.
pub fn load_formula(context: &mut Context, files: &[PathBuf]) -> Result<(), LoadError> {
    if files.is_empty() {
        let stdin = std::io::stdin();
        let info = context
            .read_dimacs(stdin.lock())
            .map_err(|e| LoadError::Read(None, e))?;
        note_info(&info, "stdin");
        return Ok(());
    }

    for path in files {
        let file = File::open(path).map_err(|e| LoadError::File(path.clone(), e))?;
        let info = context
            .read_dimacs(BufReader::new(&file))
            .map_err(|e| LoadError::Read(Some(path.clone()), e))?;
        note_info(&info, &path.display().to_string());
    }
    Ok(())
}

fn note_info(info: &ParserInfo, source: &str) {
    log::info!("Read {} clauses over {} atoms from {source}", info.added_clauses, info.added_atoms);
}

/// Writes statistics, if requested, and then the result of a solve, including the model when satisfiable and requested.
pub fn write_outcome(
    mut writer: impl Write,
    the_context: &Context,
    the_report: Report,
    config_io: &ConfigIO,
) -> std::io::Result<()> {
    let model = match (the_report, config_io.show_valuation) {
        (Report::Satisfiable, true) => the_context.model().ok(),
        _ => None,
    };

    if config_io.show_stats {
        reports::write_stats(
            &mut writer,
            &the_context.counters,
            the_context.clause_db.learnt_clause_count(),
        )?;
    }

    reports::write_dimacs_result(&mut writer, the_report, model.as_deref())?;
    writer.flush()
}

/// Installs a logger, writing to the log file if one is requested.
pub fn install_logger(config_io: &ConfigIO) -> Result<(), std::io::Error> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config_io.log_level());
    builder.parse_default_env();

    if let Some(path) = &config_io.log_file {
        let file: Box<dyn Write + Send> = Box::new(File::create(path)?);
        builder.target(env_logger::Target::Pipe(file));
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod outcome_tests {
    use cdcl_sat::config::Config;

    use super::*;

    /// A writer which accepts `capacity` bytes, and then fails.
    struct Cramped {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for Cramped {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn solved(clauses: &[Vec<i32>]) -> (Context, Report) {
        let mut the_context = Context::from_clauses(Config::default(), 2, clauses).unwrap();
        let report = the_context.solve().unwrap();
        (the_context, report)
    }

    #[test]
    fn outcome_written() {
        let (the_context, report) = solved(&[vec![1, 2], vec![-1]]);
        assert_eq!(report, Report::Satisfiable);

        let mut buffer = Vec::default();
        write_outcome(&mut buffer, &the_context, report, &ConfigIO::default()).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.starts_with("s SATISFIABLE\nv "));
    }

    #[test]
    fn write_failures_surface() {
        let (the_context, report) = solved(&[vec![1], vec![-1, 2], vec![-2]]);
        assert_eq!(report, Report::Unsatisfiable);

        let mut cramped = Cramped {
            written: Vec::default(),
            capacity: 0,
        };
        assert!(write_outcome(&mut cramped, &the_context, report, &ConfigIO::default()).is_err());

        let config_io = ConfigIO {
            show_stats: true,
            ..ConfigIO::default()
        };
        let mut cramped = Cramped {
            written: Vec::default(),
            capacity: 16,
        };
        assert!(write_outcome(&mut cramped, &the_context, report, &config_io).is_err());
        assert!(cramped.written.len() <= 16);
    }
}
