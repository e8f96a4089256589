use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// Integer currency amount (whole rupiah, no minor units).
pub type Amount = i64;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Calendar date with an optional time of day.
///
/// Ordering compares the date first; an entry without a time sorts before any
/// entry with a time on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl Timestamp {
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            date: datetime.date(),
            time: Some(datetime.time()),
        }
    }

    /// Parses `YYYY-MM-DD`, optionally followed by ` HH:MM[:SS]` or `THH:MM[:SS]`.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Self::from_date(date));
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self::from_datetime)
            .ok_or_else(|| LedgerError::InvalidTimestamp(raw.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{} {}", self.date.format(DATE_FORMAT), time.format("%H:%M")),
            None => write!(f, "{}", self.date.format(DATE_FORMAT)),
        }
    }
}

/// A single validated journal line: one account, one memo, a debit and a credit.
///
/// Both sides are kept independently; nothing assumes only one of them is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub account: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub debit: Amount,
    #[serde(default)]
    pub credit: Amount,
}

impl Transaction {
    /// Builds a validated transaction with a fresh identifier.
    pub fn new(
        timestamp: Timestamp,
        account: impl Into<String>,
        memo: impl Into<String>,
        debit: Amount,
        credit: Amount,
    ) -> Result<Self, LedgerError> {
        let txn = Self {
            id: Uuid::new_v4(),
            timestamp,
            account: account.into().trim().to_string(),
            memo: memo.into(),
            debit,
            credit,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn from_record(record: TransactionRecord) -> Result<Self, LedgerError> {
        let timestamp = Timestamp::parse(&record.date)?;
        Self::new(
            timestamp,
            record.account,
            record.memo,
            record.debit,
            record.credit,
        )
    }

    /// Re-checks the ingestion rules. Stores call this on every append and load.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.account.trim().is_empty() {
            return Err(LedgerError::MissingAccount);
        }
        if self.debit < 0 {
            return Err(LedgerError::NegativeAmount {
                field: "debit",
                value: self.debit,
            });
        }
        if self.credit < 0 {
            return Err(LedgerError::NegativeAmount {
                field: "credit",
                value: self.credit,
            });
        }
        Ok(())
    }

    /// Signed effect on the account's running balance.
    pub fn net(&self) -> Amount {
        self.debit - self.credit
    }

    pub fn period(&self) -> (i32, u32) {
        (self.timestamp.year(), self.timestamp.month())
    }
}

/// Sum of every debit and credit in `transactions`.
///
/// Every balance and total derived from the slice is bounded by this value,
/// so a slice that passes here cannot overflow in the aggregators.
pub fn checked_volume(transactions: &[Transaction]) -> Result<Amount, LedgerError> {
    transactions.iter().try_fold(0, |volume: Amount, txn| {
        volume
            .checked_add(txn.debit)
            .and_then(|volume| volume.checked_add(txn.credit))
            .ok_or(LedgerError::AmountOverflow)
    })
}

/// Raw transaction as produced by an entry form or import, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub account: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub debit: i64,
    #[serde(default)]
    pub credit: i64,
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        account: impl Into<String>,
        memo: impl Into<String>,
        debit: i64,
        credit: i64,
    ) -> Self {
        Self {
            date: date.into(),
            account: account.into(),
            memo: memo.into(),
            debit,
            credit,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_datetimes() {
        let date = Timestamp::parse("2025-01-05").expect("date");
        assert_eq!(date.time, None);
        assert_eq!((date.year(), date.month()), (2025, 1));

        let with_time = Timestamp::parse("2025-01-05 14:30").expect("datetime");
        assert_eq!(with_time.time, NaiveTime::from_hms_opt(14, 30, 0));
        assert!(date < with_time);

        let iso = Timestamp::parse("2025-02-10T08:15:00").expect("iso");
        assert_eq!(iso.to_string(), "2025-02-10 08:15");
    }

    #[test]
    fn rejects_malformed_records() {
        let missing = TransactionRecord::new("2025-01-05", "   ", "memo", 10, 0);
        assert!(matches!(
            Transaction::from_record(missing),
            Err(LedgerError::MissingAccount)
        ));

        let bad_date = TransactionRecord::new("05/01/2025", "Kas", "memo", 10, 0);
        assert!(matches!(
            Transaction::from_record(bad_date),
            Err(LedgerError::InvalidTimestamp(raw)) if raw == "05/01/2025"
        ));

        let negative = TransactionRecord::new("2025-01-05", "Kas", "memo", 0, -5);
        assert!(matches!(
            Transaction::from_record(negative),
            Err(LedgerError::NegativeAmount { field: "credit", value: -5 })
        ));
    }

    #[test]
    fn account_names_are_trimmed() {
        let txn = Transaction::try_from(TransactionRecord::new(
            "2025-01-05",
            "  Kas ",
            "Penjualan tunai",
            2_000_000,
            0,
        ))
        .expect("valid");
        assert_eq!(txn.account, "Kas");
        assert_eq!(txn.net(), 2_000_000);
        assert_eq!(txn.period(), (2025, 1));
    }
}
