use thiserror::Error;
use uuid::Uuid;

/// Failures raised while admitting transactions into a store or reading it back.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Transaction is missing an account name")]
    MissingAccount,
    #[error("Unparseable timestamp `{0}` (expected YYYY-MM-DD with optional HH:MM[:SS])")]
    InvalidTimestamp(String),
    #[error("Negative {field} amount: {value}")]
    NegativeAmount { field: &'static str, value: i64 },
    #[error("Transaction amounts add up past the {} limit", i64::MAX)]
    AmountOverflow,
    #[error("Transaction index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Failures at the workbook serializer boundary. Always fatal to an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid export destination: {0}")]
    Destination(String),
}
