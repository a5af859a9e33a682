// smiles.rs
use crate::score::ScoreMapping;
use crate::{DomainError, Score, ScoreKind};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Valor de una entrada de [`SmilesMapping`]. El score anidado se conserva
/// tipado para que cualquier `f64` (incluidos infinitos y NaN) sobreviva al
/// paso por el mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MappingValue {
    Null,
    Int(i64),
    Text(String),
    Score(ScoreMapping),
}

/// Forma mapping de un [`Smiles`]: claves `smiles`, `score`, `transforms` en
/// ese orden.
pub type SmilesMapping = IndexMap<String, MappingValue>;

/// Molécula puntuada: cadena SMILES opaca (no se valida su química), su
/// `Score` (propiedad exclusiva) y el número opcional de transformaciones
/// generativas aplicadas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smiles {
    smiles: String,
    score: Score,
    #[serde(default)]
    transforms: Option<i64>,
}

impl Smiles {
    pub fn new(smiles: impl Into<String>, score: Score, transforms: Option<i64>) -> Self {
        Smiles { smiles: smiles.into(),
                 score,
                 transforms }
    }

    pub fn smiles(&self) -> &str { &self.smiles }
    pub fn score(&self) -> &Score { &self.score }
    pub fn transforms(&self) -> Option<i64> { self.transforms }

    pub fn to_mapping(&self) -> SmilesMapping {
        let mut m = SmilesMapping::new();
        m.insert("smiles".into(), MappingValue::Text(self.smiles.clone()));
        m.insert("score".into(), MappingValue::Score(self.score.to_mapping()));
        m.insert("transforms".into(), self.transforms.map_or(MappingValue::Null, MappingValue::Int));
        m
    }

    /// Reconstruye desde su mapping.
    ///
    /// # Errores
    /// * `DomainError::MissingField` si falta `smiles`, `score` o alguna
    ///   métrica dentro de `score`.
    /// * `DomainError::InvalidField` si un valor presente tiene un tipo
    ///   incompatible.
    pub fn from_mapping(m: &SmilesMapping) -> Result<Self, DomainError> {
        let smiles = match m.get("smiles") {
            None => return Err(DomainError::MissingField("smiles".into())),
            Some(MappingValue::Text(s)) => s.clone(),
            Some(_) => return Err(invalid("smiles", "string")),
        };
        let score = match m.get("score") {
            None => return Err(DomainError::MissingField("score".into())),
            Some(MappingValue::Score(sm)) => Score::from_mapping(sm)?,
            Some(_) => return Err(invalid("score", "object")),
        };
        // `transforms` ausente o null equivale a None
        let transforms = match m.get("transforms") {
            None | Some(MappingValue::Null) => None,
            Some(MappingValue::Int(t)) => Some(*t),
            Some(_) => return Err(invalid("transforms", "integer or null")),
        };
        debug!("smiles parsed from mapping: {}", smiles);
        Ok(Smiles { smiles, score, transforms })
    }

    /// Reconstruye desde un objeto JSON con el mismo esquema. Solo se leen
    /// `smiles`, `score` y `transforms`; dentro de `score` solo las cuatro
    /// métricas, el resto de claves se ignora.
    pub fn from_json_map(obj: &Map<String, Value>) -> Result<Self, DomainError> {
        Self::from_mapping(&mapping_from_json(obj)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(s)?)
    }

    /// JSON no admite floats no finitos: `serde_json` los escribe como `null`.
    pub fn to_json_string(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn invalid(field: &str, expected: &'static str) -> DomainError {
    DomainError::InvalidField { field: field.to_string(),
                                expected }
}

fn mapping_from_json(obj: &Map<String, Value>) -> Result<SmilesMapping, DomainError> {
    let mut m = SmilesMapping::new();
    if let Some(v) = obj.get("smiles") {
        let value = match v {
            Value::String(s) => MappingValue::Text(s.clone()),
            _ => return Err(invalid("smiles", "string")),
        };
        m.insert("smiles".into(), value);
    }
    if let Some(v) = obj.get("score") {
        let value = match v {
            Value::Object(score) => MappingValue::Score(score_from_json(score)?),
            _ => return Err(invalid("score", "object")),
        };
        m.insert("score".into(), value);
    }
    if let Some(v) = obj.get("transforms") {
        let value = match v {
            Value::Null => MappingValue::Null,
            _ => MappingValue::Int(v.as_i64().ok_or_else(|| invalid("transforms", "integer or null"))?),
        };
        m.insert("transforms".into(), value);
    }
    Ok(m)
}

// Las métricas ausentes se reportan antes que las de tipo incorrecto.
fn score_from_json(obj: &Map<String, Value>) -> Result<ScoreMapping, DomainError> {
    if let Some(kind) = ScoreKind::ALL.into_iter().find(|k| !obj.contains_key(k.as_str())) {
        return Err(DomainError::MissingField(kind.as_str().to_string()));
    }
    ScoreKind::ALL.into_iter()
                  .map(|kind| {
                      let key = kind.as_str();
                      obj[key].as_f64()
                              .map(|f| (key.to_string(), f))
                              .ok_or_else(|| invalid(&format!("score.{key}"), "number"))
                  })
                  .collect()
}

impl fmt::Display for Smiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transforms = self.transforms.map_or_else(|| "null".to_string(), |t| t.to_string());
        write!(f,
               "smiles={}, score={}, transforms={}",
               self.smiles,
               self.score.mapping_literal(),
               transforms)
    }
}
