//! Carga de registros `Smiles` desde archivos JSON. Cada archivo contiene un
//! array de mappings `{ smiles, score, transforms }`.
use crate::errors::{CoreError, Result};
use crate::utils::flatten;
use chem_domain::Smiles;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Interpreta un documento JSON como lista de registros.
pub fn parse_records(path: &Path, doc: &Value) -> Result<Vec<Smiles>> {
    let items = doc.as_array().ok_or_else(|| CoreError::Records { path: path.to_path_buf(),
                                                                  message: "se esperaba un array".into() })?;
    items.iter()
         .enumerate()
         .map(|(i, item)| -> Result<Smiles> {
             let obj = item.as_object().ok_or_else(|| CoreError::Records { path: path.to_path_buf(),
                                                                           message: format!("el elemento {i} no es un objeto") })?;
             Ok(Smiles::from_json_map(obj)?)
         })
         .collect()
}

pub fn load_records(path: &Path) -> Result<Vec<Smiles>> {
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text).map_err(|e| CoreError::Records { path: path.to_path_buf(),
                                                                                 message: e.to_string() })?;
    let records = parse_records(path, &doc)?;
    debug!("{} registros cargados de {}", records.len(), path.display());
    Ok(records)
}

/// Carga varios archivos y concatena sus registros en el orden dado.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Smiles>> {
    let per_file = paths.iter().map(|p| load_records(p)).collect::<Result<Vec<_>>>()?;
    Ok(flatten(per_file).collect())
}
