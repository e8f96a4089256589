use std::collections::BTreeMap;

use crate::ledger::{PeriodBucket, Transaction};

pub struct PeriodService;

impl PeriodService {
    /// Buckets transactions by (year, month), ascending by key.
    ///
    /// Within a bucket transactions keep their input order.
    pub fn group_by_period(transactions: &[Transaction]) -> Vec<PeriodBucket> {
        let mut buckets: BTreeMap<(i32, u32), Vec<Transaction>> = BTreeMap::new();
        for txn in transactions {
            buckets.entry(txn.period()).or_default().push(txn.clone());
        }
        let grouped: Vec<PeriodBucket> = buckets
            .into_iter()
            .map(|((year, month), transactions)| PeriodBucket {
                year,
                month,
                transactions,
            })
            .collect();
        tracing::debug!(buckets = grouped.len(), "grouped transactions by period");
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionRecord;

    fn txn(date: &str, account: &str) -> Transaction {
        Transaction::from_record(TransactionRecord::new(date, account, "", 1, 0)).unwrap()
    }

    #[test]
    fn buckets_are_chronological_and_stable() {
        let input = vec![
            txn("2025-02-10", "Beban Listrik"),
            txn("2025-01-05", "Kas"),
            txn("2024-12-31", "Kas"),
            txn("2025-02-01", "Kas"),
            txn("2025-01-02", "Pendapatan Jasa"),
        ];
        let buckets = PeriodService::group_by_period(&input);
        let keys: Vec<(i32, u32)> = buckets.iter().map(PeriodBucket::key).collect();
        assert_eq!(keys, [(2024, 12), (2025, 1), (2025, 2)]);

        // Input order inside a bucket, not date order.
        let january: Vec<_> = buckets[1].transactions.iter().map(|t| t.id).collect();
        assert_eq!(january, [input[1].id, input[4].id]);
        let february: Vec<_> = buckets[2].transactions.iter().map(|t| t.id).collect();
        assert_eq!(february, [input[0].id, input[3].id]);
    }

    #[test]
    fn grouping_is_a_partition() {
        let input = vec![
            txn("2025-03-01", "A"),
            txn("2025-01-01", "B"),
            txn("2025-03-15", "C"),
        ];
        let buckets = PeriodService::group_by_period(&input);
        let mut flattened: Vec<_> = buckets
            .iter()
            .flat_map(|bucket| bucket.transactions.iter().map(|t| t.id))
            .collect();
        let mut original: Vec<_> = input.iter().map(|t| t.id).collect();
        flattened.sort();
        original.sort();
        assert_eq!(flattened, original);
    }

    #[test]
    fn single_period_gives_single_bucket() {
        let input = vec![txn("2025-01-05", "Kas"), txn("2025-01-20", "Kas")];
        let buckets = PeriodService::group_by_period(&input);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].transactions.len(), 2);
        assert!(PeriodService::group_by_period(&[]).is_empty());
    }
}
