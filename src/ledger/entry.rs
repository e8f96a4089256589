use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::{Amount, Timestamp, Transaction};

/// A transaction annotated with its account's running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub transaction_id: Uuid,
    pub timestamp: Timestamp,
    pub memo: String,
    pub debit: Amount,
    pub credit: Amount,
    pub running_balance: Amount,
}

impl LedgerEntry {
    pub fn from_transaction(txn: &Transaction, running_balance: Amount) -> Self {
        Self {
            transaction_id: txn.id,
            timestamp: txn.timestamp,
            memo: txn.memo.clone(),
            debit: txn.debit,
            credit: txn.credit,
            running_balance,
        }
    }
}

/// Chronological entries for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLedger {
    pub account: String,
    pub entries: Vec<LedgerEntry>,
}

impl AccountLedger {
    pub fn closing_balance(&self) -> Amount {
        self.entries
            .last()
            .map(|entry| entry.running_balance)
            .unwrap_or_default()
    }

    pub fn total_debit(&self) -> Amount {
        self.entries.iter().map(|entry| entry.debit).sum()
    }

    pub fn total_credit(&self) -> Amount {
        self.entries.iter().map(|entry| entry.credit).sum()
    }
}

/// One trial balance row. The balance keeps its sign; no normal side is forced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account: String,
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub balance: Amount,
}

impl AccountSummary {
    pub fn new(account: impl Into<String>, total_debit: Amount, total_credit: Amount) -> Self {
        Self {
            account: account.into(),
            total_debit,
            total_credit,
            balance: total_debit - total_credit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementResult {
    pub total_revenue: Amount,
    pub total_expense: Amount,
    pub net: Amount,
}

impl IncomeStatementResult {
    pub fn new(total_revenue: Amount, total_expense: Amount) -> Self {
        Self {
            total_revenue,
            total_expense,
            net: total_revenue - total_expense,
        }
    }

    pub fn is_loss(&self) -> bool {
        self.net < 0
    }
}

/// Transactions that share one (year, month). Order inside the bucket is input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBucket {
    pub year: i32,
    pub month: u32,
    pub transactions: Vec<Transaction>,
}

impl PeriodBucket {
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn total_debit(&self) -> Amount {
        self.transactions.iter().map(|txn| txn.debit).sum()
    }

    pub fn total_credit(&self) -> Amount {
        self.transactions.iter().map(|txn| txn.credit).sum()
    }
}
