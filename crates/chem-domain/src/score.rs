// score.rs
use crate::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forma mapping de un [`Score`]: nombre de métrica -> valor, en orden de
/// declaración (`sa`, `sc`, `ra`, `syba`).
pub type ScoreMapping = IndexMap<String, f64>;

/// Accesor puro asociado a un nombre de métrica.
pub type ScoreAccessor = (&'static str, fn(&Score) -> f64);

/// Nombre tipado de cada una de las cuatro métricas de un `Score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Sa,
    Sc,
    Ra,
    Syba,
}

impl ScoreKind {
    /// Todas las métricas en orden de declaración.
    pub const ALL: [ScoreKind; 4] = [ScoreKind::Sa, ScoreKind::Sc, ScoreKind::Ra, ScoreKind::Syba];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Sa => "sa",
            ScoreKind::Sc => "sc",
            ScoreKind::Ra => "ra",
            ScoreKind::Syba => "syba",
        }
    }
}

impl FromStr for ScoreKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreKind::ALL.into_iter()
                      .find(|k| k.as_str() == s)
                      .ok_or_else(|| DomainError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro inmutable con las cuatro métricas que un puntuador externo asigna
/// a una molécula candidata. Los valores son opacos: no se valida su rango.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    sa: f64,
    sc: f64,
    ra: f64,
    syba: f64,
}

static FIELD_ACCESSORS: [ScoreAccessor; 4] = [("sa", |s| s.sa),
                                              ("sc", |s| s.sc),
                                              ("ra", |s| s.ra),
                                              ("syba", |s| s.syba)];

impl Score {
    pub fn new(sa: f64, sc: f64, ra: f64, syba: f64) -> Self {
        Score { sa, sc, ra, syba }
    }

    pub fn sa(&self) -> f64 { self.sa }
    pub fn sc(&self) -> f64 { self.sc }
    pub fn ra(&self) -> f64 { self.ra }
    pub fn syba(&self) -> f64 { self.syba }

    /// Valor de la métrica indicada.
    pub fn get(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Sa => self.sa,
            ScoreKind::Sc => self.sc,
            ScoreKind::Ra => self.ra,
            ScoreKind::Syba => self.syba,
        }
    }

    /// Pares (nombre, accesor) en orden fijo `sa, sc, ra, syba`, pensados para
    /// iterar las métricas de forma genérica (p. ej. al construir informes).
    pub fn field_accessors() -> &'static [ScoreAccessor] {
        &FIELD_ACCESSORS
    }

    pub fn to_mapping(&self) -> ScoreMapping {
        FIELD_ACCESSORS.iter()
                       .map(|(name, get)| (name.to_string(), get(self)))
                       .collect()
    }

    /// Reconstruye un `Score` desde su mapping. Las claves extra se ignoran.
    ///
    /// # Errores
    /// `DomainError::MissingField` con la primera clave ausente.
    pub fn from_mapping(m: &ScoreMapping) -> Result<Self, DomainError> {
        let field = |kind: ScoreKind| {
            m.get(kind.as_str())
             .copied()
             .ok_or_else(|| DomainError::MissingField(kind.as_str().to_string()))
        };
        Ok(Score { sa: field(ScoreKind::Sa)?,
                   sc: field(ScoreKind::Sc)?,
                   ra: field(ScoreKind::Ra)?,
                   syba: field(ScoreKind::Syba)? })
    }

    /// Renderiza el score como literal de mapping:
    /// `{'sa': 1.0, 'sc': 2.0, 'ra': 3.0, 'syba': 4.0}`.
    pub(crate) fn mapping_literal(&self) -> String {
        let items: Vec<String> = FIELD_ACCESSORS.iter()
                                                .map(|(name, get)| format!("'{}': {}", name, float_repr(get(self))))
                                                .collect();
        format!("{{{}}}", items.join(", "))
    }
}

/// Los floats siempre llevan parte decimal (`1.0`, no `1`) y el exponente
/// lleva signo y al menos dos dígitos (`1e-09`, `1e+16`).
pub(crate) fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", v);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = FIELD_ACCESSORS.iter()
                                                .map(|(name, get)| format!("{}={}", name, float_repr(get(self))))
                                                .collect();
        f.write_str(&items.join(","))
    }
}
