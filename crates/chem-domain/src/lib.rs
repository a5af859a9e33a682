// chem-domain library entry point
pub mod error;
pub mod score;
pub mod smiles;
pub use error::DomainError;
pub use score::{Score, ScoreKind, ScoreMapping};
pub use smiles::{MappingValue, Smiles, SmilesMapping};
