//! Validated entry and removal of transactions through a store.

use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::ledger::{Transaction, TransactionRecord};
use crate::storage::TransactionStore;

pub struct TransactionService;

impl TransactionService {
    /// Validates a raw record and appends it, returning the new identifier.
    pub fn add(store: &dyn TransactionStore, record: TransactionRecord) -> ServiceResult<Uuid> {
        let transaction = Transaction::from_record(record).map_err(|err| {
            tracing::warn!(error = %err, "rejected transaction record");
            err
        })?;
        Ok(store.append(transaction)?)
    }

    pub fn remove_at(store: &dyn TransactionStore, index: usize) -> ServiceResult<Transaction> {
        Ok(store.remove_at(index)?)
    }

    pub fn remove(store: &dyn TransactionStore, id: Uuid) -> ServiceResult<Transaction> {
        Ok(store.remove(id)?)
    }

    /// Current transactions in store order.
    pub fn list(store: &dyn TransactionStore) -> ServiceResult<Vec<Transaction>> {
        Ok(store.snapshot()?.into_transactions())
    }
}
