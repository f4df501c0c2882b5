use thiserror::Error;

/// The caller-visible outcomes of an ingestion. Everything else degrades silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The text held no header plus data row that survived the integrity gate.
    #[error("no valid rows could be parsed; check the export format")]
    NoValidRows,

    #[error("invalid engine configuration: {0}")]
    Config(String),
}
