use std::sync::RwLock;

use uuid::Uuid;

use crate::{errors::LedgerError, ledger::Transaction};

use crate::ledger::checked_volume;

use super::{push_checked, remove_id, remove_index, Result, Snapshot, TransactionStore};

/// Process-local store; the list lives behind a lock and never leaves it by reference.
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store, validating every transaction first.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        for txn in &transactions {
            txn.validate()?;
        }
        checked_volume(&transactions)?;
        Ok(Self {
            transactions: RwLock::new(transactions),
        })
    }
}

impl TransactionStore for MemoryStore {
    fn append(&self, transaction: Transaction) -> Result<Uuid> {
        transaction.validate()?;
        let id = transaction.id;
        let mut guard = self.transactions.write().map_err(|_| LedgerError::Poisoned)?;
        push_checked(&mut guard, transaction)?;
        Ok(id)
    }

    fn remove_at(&self, index: usize) -> Result<Transaction> {
        let mut guard = self.transactions.write().map_err(|_| LedgerError::Poisoned)?;
        remove_index(&mut guard, index)
    }

    fn remove(&self, id: Uuid) -> Result<Transaction> {
        let mut guard = self.transactions.write().map_err(|_| LedgerError::Poisoned)?;
        remove_id(&mut guard, id)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let guard = self.transactions.read().map_err(|_| LedgerError::Poisoned)?;
        Ok(Snapshot::new(guard.clone()))
    }

    fn len(&self) -> Result<usize> {
        Ok(self
            .transactions
            .read()
            .map_err(|_| LedgerError::Poisoned)?
            .len())
    }
}
