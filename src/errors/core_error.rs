use chem_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Archivo de registros inválido '{path}': {message}", path = path.display())]
    Records { path: PathBuf, message: String },
}
