//! Resumen por métrica de un conjunto de moléculas puntuadas, construido de
//! forma genérica sobre `Score::field_accessors`.
use chem_domain::{Score, Smiles};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub name: &'static str,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Una entrada por métrica, en el orden de `Score::field_accessors`.
pub fn summarize(records: &[Smiles]) -> Vec<MetricSummary> {
    Score::field_accessors().iter()
                            .map(|&(name, get)| {
                                let values: Vec<f64> = records.iter().map(|r| get(r.score())).collect();
                                let count = values.len();
                                let min = values.iter().copied().reduce(f64::min);
                                let max = values.iter().copied().reduce(f64::max);
                                let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
                                MetricSummary { name, count, min, max, mean }
                            })
                            .collect()
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max, self.mean) {
            (Some(min), Some(max), Some(mean)) => {
                write!(f, "{}: n={} min={:.3} max={:.3} mean={:.3}", self.name, self.count, min, max, mean)
            }
            _ => write!(f, "{}: n=0", self.name),
        }
    }
}
