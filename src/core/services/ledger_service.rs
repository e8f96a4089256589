//! General ledger (buku besar) construction.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::LedgerError;
use crate::ledger::{checked_volume, AccountLedger, Amount, LedgerEntry, Transaction};

/// Per-account entry lists, kept in order of each account's first appearance.
///
/// Lists live in one `Vec`; the name index points into it, so lookups by
/// account name never hold references into the input transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralLedger {
    accounts: Vec<AccountLedger>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GeneralLedger {
    pub fn get(&self, account: &str) -> Option<&AccountLedger> {
        self.index.get(account).map(|&slot| &self.accounts[slot])
    }

    pub fn accounts(&self) -> &[AccountLedger] {
        &self.accounts
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccountLedger> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn push(&mut self, txn: &Transaction) {
        let slot = match self.index.get(&txn.account) {
            Some(&slot) => slot,
            None => {
                self.accounts.push(AccountLedger {
                    account: txn.account.clone(),
                    entries: Vec::new(),
                });
                let slot = self.accounts.len() - 1;
                self.index.insert(txn.account.clone(), slot);
                slot
            }
        };
        let entries = &mut self.accounts[slot].entries;
        let previous: Amount = entries
            .last()
            .map(|entry| entry.running_balance)
            .unwrap_or_default();
        entries.push(LedgerEntry::from_transaction(txn, previous + txn.net()));
    }
}

pub struct LedgerService;

impl LedgerService {
    /// Partitions `transactions` by account and annotates each with a running balance.
    ///
    /// The partition is stable: entries keep the relative order they had in the
    /// input. Nothing is sorted by timestamp here; callers that want strict
    /// chronology sort the snapshot first.
    ///
    /// Fails with [`LedgerError::AmountOverflow`] when the amounts cannot be
    /// summed without leaving the `Amount` range.
    pub fn build_ledger(transactions: &[Transaction]) -> Result<GeneralLedger, LedgerError> {
        checked_volume(transactions)?;
        let mut ledger = GeneralLedger::default();
        for txn in transactions {
            ledger.push(txn);
        }
        tracing::debug!(
            accounts = ledger.len(),
            transactions = transactions.len(),
            "built general ledger"
        );
        Ok(ledger)
    }
}
