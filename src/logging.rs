//! Inicialización del logging del binario. Las librerías emiten mediante la
//! fachada `log`; aquí se instala un suscriptor `tracing-subscriber` que
//! también recoge esos registros.
use crate::errors::{CoreError, Result};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

pub fn to_tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

pub fn setup_logging(level: log::LevelFilter) -> Result<()> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr)
                                   .with_target(false)
                                   .compact();
    tracing_subscriber::registry().with(to_tracing_level(level))
                                  .with(stderr_layer)
                                  .try_init()
                                  .map_err(|e| CoreError::Config(format!("logger ya inicializado: {e}")))
}
