//! chemscore
//!
//! Capa de objetos de valor para el pipeline de puntuación de moléculas:
//! - Reexporta el modelo de dominio (`Score`, `Smiles`) de `chem-domain`.
//! - `utils` con utilidades genéricas (`flatten`, `identity_cast`).
//! - `records` y `report` para cargar registros JSON y resumir sus métricas.
//! - `config`, `logging` y `errors` como soporte del binario.

pub mod config;
pub mod errors;
pub mod logging;
pub mod records;
pub mod report;
pub mod utils;

pub use chem_domain::{DomainError, MappingValue, Score, ScoreKind, ScoreMapping, Smiles, SmilesMapping};
