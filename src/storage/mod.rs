//! Transaction store boundary: append, delete, and immutable snapshots.

pub mod json_backend;
pub mod memory;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::LedgerError,
    ledger::{checked_volume, Transaction},
};

pub use json_backend::JsonStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Ordered, single-writer list of validated transactions.
///
/// Reports never read a store directly; they work from a [`Snapshot`] so that
/// a concurrent append or delete cannot tear a build.
pub trait TransactionStore: Send + Sync {
    /// Validates and appends a transaction, returning its identifier.
    fn append(&self, transaction: Transaction) -> Result<Uuid>;
    /// Removes the transaction at `index`; later positions shift down by one.
    fn remove_at(&self, index: usize) -> Result<Transaction>;
    fn remove(&self, id: Uuid) -> Result<Transaction>;
    /// Copies the current list out of the store.
    fn snapshot(&self) -> Result<Snapshot>;
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Owned copy of a store's transactions at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    transactions: Vec<Transaction>,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            taken_at: Utc::now(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Stable sort by timestamp; equal timestamps keep store order.
    pub fn sort_chronologically(&mut self) {
        self.transactions.sort_by_key(|txn| txn.timestamp);
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

/// Appends `transaction` unless the list's total volume would overflow.
pub(crate) fn push_checked(list: &mut Vec<Transaction>, transaction: Transaction) -> Result<()> {
    checked_volume(list)?
        .checked_add(transaction.debit)
        .and_then(|volume| volume.checked_add(transaction.credit))
        .ok_or(LedgerError::AmountOverflow)?;
    list.push(transaction);
    Ok(())
}

pub(crate) fn remove_index(list: &mut Vec<Transaction>, index: usize) -> Result<Transaction> {
    if index >= list.len() {
        return Err(LedgerError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    Ok(list.remove(index))
}

pub(crate) fn remove_id(list: &mut Vec<Transaction>, id: Uuid) -> Result<Transaction> {
    let index = list
        .iter()
        .position(|txn| txn.id == id)
        .ok_or(LedgerError::TransactionNotFound(id))?;
    Ok(list.remove(index))
}
