pub mod ledger_service;
pub mod period_service;
pub mod report_service;
pub mod summary_service;
pub mod transaction_service;

pub use ledger_service::{GeneralLedger, LedgerService};
pub use period_service::PeriodService;
pub use report_service::ReportService;
pub use summary_service::{AccountOrder, SummaryService};
pub use transaction_service::TransactionService;

use crate::config::ConfigError;
use crate::errors::{ExportError, LedgerError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Invalid(String),
}
