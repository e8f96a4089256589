//! Transaction records and the derived ledger, trial balance, and period types.

pub mod entry;
pub mod transaction;

pub use entry::{AccountLedger, AccountSummary, IncomeStatementResult, LedgerEntry, PeriodBucket};
pub use transaction::{checked_volume, Amount, Timestamp, Transaction, TransactionRecord};
