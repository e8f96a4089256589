use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::LedgerError,
    ledger::{checked_volume, Transaction},
    utils::fs::write_atomic,
};

use super::{push_checked, remove_id, remove_index, Result, Snapshot, TransactionStore};

const CURRENT_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "StoreFile::schema_version_default")]
    schema_version: u8,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl StoreFile {
    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// Store persisted as a single JSON document.
///
/// Every mutation is staged on a copy, written atomically, and only then
/// published in memory, so a failed write leaves both file and store unchanged.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    transactions: RwLock<Vec<Transaction>>,
}

impl JsonStore {
    /// Opens `path`, loading and validating its contents; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let transactions = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&data)?;
            for txn in &file.transactions {
                txn.validate()?;
            }
            checked_volume(&file.transactions)?;
            file.transactions
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = transactions.len(), "opened transaction store");
        Ok(Self {
            path,
            transactions: RwLock::new(transactions),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<()> {
        let file = StoreFile {
            schema_version: CURRENT_SCHEMA_VERSION,
            transactions: transactions.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }

    fn mutate<T>(&self, op: impl FnOnce(&mut Vec<Transaction>) -> Result<T>) -> Result<T> {
        let mut guard = self.transactions.write().map_err(|_| LedgerError::Poisoned)?;
        let mut staged = guard.clone();
        let outcome = op(&mut staged)?;
        self.persist(&staged)?;
        *guard = staged;
        Ok(outcome)
    }
}

impl TransactionStore for JsonStore {
    fn append(&self, transaction: Transaction) -> Result<Uuid> {
        transaction.validate()?;
        let id = transaction.id;
        self.mutate(|list| push_checked(list, transaction))?;
        tracing::info!(%id, "appended transaction");
        Ok(id)
    }

    fn remove_at(&self, index: usize) -> Result<Transaction> {
        let removed = self.mutate(|list| remove_index(list, index))?;
        tracing::info!(id = %removed.id, index, "removed transaction");
        Ok(removed)
    }

    fn remove(&self, id: Uuid) -> Result<Transaction> {
        let removed = self.mutate(|list| remove_id(list, id))?;
        tracing::info!(%id, "removed transaction");
        Ok(removed)
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
