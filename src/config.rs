//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable,
//! evaluada una sola vez, accesible mediante [`config`].
use crate::errors::{CoreError, Result};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

/// Lista de archivos de registros separada por comas.
pub const RECORDS_VAR: &str = "CHEMSCORE_RECORDS";
/// Nivel de log: off|error|warn|info|debug|trace.
pub const LOG_LEVEL_VAR: &str = "CHEMSCORE_LOG_LEVEL";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Archivos JSON con registros `Smiles` a procesar.
    pub records: Vec<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { records: Vec::new(),
                    log_level: LevelFilter::Info }
    }
}

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda de
    /// variables, lo que permite probarla sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
        where F: Fn(&str) -> Option<String>
    {
        let records = lookup(RECORDS_VAR).map(|v| parse_paths(&v)).unwrap_or_default();
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(v) => v.trim()
                        .parse()
                        .map_err(|_| CoreError::Config(format!("{LOG_LEVEL_VAR} inválido: {v}")))?,
            None => LevelFilter::Info,
        };
        Ok(AppConfig { records, log_level })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| env::var(k).ok())
    }
}

fn parse_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
       .map(str::trim)
       .filter(|p| !p.is_empty())
       .map(PathBuf::from)
       .collect()
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Instancia global perezosa de configuración. Carga `.env` si existe antes de
/// leer el entorno.
pub fn config() -> Result<&'static AppConfig> {
    CONFIG.get_or_try_init(|| {
              let _ = dotenvy::dotenv();
              AppConfig::from_env()
          })
}
