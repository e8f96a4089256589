#![allow(dead_code)]

use std::collections::BTreeSet;

use buku_core::ledger::{Transaction, TransactionRecord};

/// The four-line cash sale / electricity bill scenario.
pub fn scenario() -> Vec<Transaction> {
    records(&[
        ("2025-01-05", "Kas", "Penjualan tunai", 2_000_000, 0),
        ("2025-01-05", "Pendapatan Jasa", "Penjualan tunai", 0, 2_000_000),
        ("2025-02-10", "Beban Listrik", "Bayar listrik", 500_000, 0),
        ("2025-02-10", "Kas", "Bayar listrik", 0, 500_000),
    ])
}

pub fn records(rows: &[(&str, &str, &str, i64, i64)]) -> Vec<Transaction> {
    rows.iter()
        .map(|(date, account, memo, debit, credit)| {
            Transaction::from_record(TransactionRecord::new(*date, *account, *memo, *debit, *credit))
                .expect("valid transaction")
        })
        .collect()
}

pub fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Deterministic, irregular log spanning several accounts and years.
pub fn varied_log(count: usize) -> Vec<Transaction> {
    const ACCOUNTS: [&str; 5] = ["Kas", "Bank", "Pendapatan Jasa", "Beban Gaji", "Beban Listrik"];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|idx| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let year = 2023 + (seed % 3) as i32;
            let month = 1 + (seed >> 8) % 12;
            let day = 1 + (seed >> 16) % 28;
            let account = ACCOUNTS[(seed >> 24) as usize % ACCOUNTS.len()];
            let amount = ((seed >> 32) % 5_000_000) as i64;
            let (debit, credit) = match idx % 3 {
                0 => (amount, 0),
                1 => (0, amount),
                _ => (amount / 2, amount / 3),
            };
            Transaction::from_record(TransactionRecord::new(
                format!("{year}-{month:02}-{day:02}"),
                account,
                format!("entry {idx}"),
                debit,
                credit,
            ))
            .expect("valid generated transaction")
        })
        .collect()
}
