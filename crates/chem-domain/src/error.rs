use thiserror::Error;

/// Errores del modelo de dominio (puntuaciones y moléculas SMILES).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Falta una clave obligatoria al reconstruir desde un mapping.
    #[error("Campo requerido ausente: {0}")]
    MissingField(String),

    #[error("Campo inválido '{field}': se esperaba {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("Métrica desconocida: {0}")]
    UnknownMetric(String),

    #[error("Error de serialización: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_format() {
        let err = DomainError::MissingField("syba".into());
        assert_eq!(err.to_string(), "Campo requerido ausente: syba");
    }

    #[test]
    fn test_invalid_field_format() {
        let err = DomainError::InvalidField { field: "sa".into(),
                                              expected: "número" };
        assert_eq!(err.to_string(), "Campo inválido 'sa': se esperaba número");
    }

    #[test]
    fn test_serde_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DomainError = json_err.into();
        assert!(matches!(err, DomainError::Serialization(_)));
    }
}
