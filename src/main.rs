use chemscore::config::{config, RECORDS_VAR};
use chemscore::errors::{CoreError, Result};
use chemscore::logging::setup_logging;
use chemscore::records::load_all;
use chemscore::report::summarize;
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

fn run() -> Result<()> {
    let cfg = config()?;
    setup_logging(cfg.log_level)?;

    // Los argumentos posicionales tienen prioridad sobre CHEMSCORE_RECORDS
    let args: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let paths = if args.is_empty() { cfg.records.clone() } else { args };
    if paths.is_empty() {
        return Err(CoreError::Config(format!("sin archivos de registros (argumentos o {RECORDS_VAR})")));
    }

    let records = load_all(&paths)?;
    if records.is_empty() {
        warn!("ningún registro en {} archivo(s)", paths.len());
    }
    for r in &records {
        info!("{}", r);
    }
    for summary in summarize(&records) {
        info!("{}", summary);
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[chemscore] {e}");
            ExitCode::FAILURE
        }
    }
}
