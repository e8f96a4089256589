use serde::{Deserialize, Serialize};

/// Language used for sheet names, headers, and month banners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

/// Fixed report vocabulary for one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub financial_statement: &'static str,
    pub general_journal: &'static str,
    pub general_ledger: &'static str,
    pub trial_balance: &'static str,
    pub income_statement: &'static str,
    pub date: &'static str,
    pub month: &'static str,
    pub account: &'static str,
    pub memo: &'static str,
    pub debit: &'static str,
    pub credit: &'static str,
    pub balance: &'static str,
    pub amount: &'static str,
    pub total: &'static str,
    pub year: &'static str,
    pub revenue: &'static str,
    pub expense: &'static str,
    pub net_profit: &'static str,
    pub net_loss: &'static str,
    pub no_data: &'static str,
    months: [&'static str; 12],
}

const INDONESIAN: Labels = Labels {
    financial_statement: "Laporan Keuangan",
    general_journal: "Jurnal Umum",
    general_ledger: "Buku Besar",
    trial_balance: "Neraca Saldo",
    income_statement: "Laba Rugi",
    date: "Tanggal",
    month: "Bulan",
    account: "Akun",
    memo: "Keterangan",
    debit: "Debit",
    credit: "Kredit",
    balance: "Saldo",
    amount: "Jumlah",
    total: "Total",
    year: "Tahun",
    revenue: "Pendapatan",
    expense: "Beban",
    net_profit: "Laba Bersih",
    net_loss: "Rugi Bersih",
    no_data: "Tidak ada data",
    months: [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ],
};

const ENGLISH: Labels = Labels {
    financial_statement: "Financial Statement",
    general_journal: "General Journal",
    general_ledger: "General Ledger",
    trial_balance: "Trial Balance",
    income_statement: "Income Statement",
    date: "Date",
    month: "Month",
    account: "Account",
    memo: "Description",
    debit: "Debit",
    credit: "Credit",
    balance: "Balance",
    amount: "Amount",
    total: "Total",
    year: "Year",
    revenue: "Revenue",
    expense: "Expense",
    net_profit: "Net Profit",
    net_loss: "Net Loss",
    no_data: "No data",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Indonesian => &INDONESIAN,
            Language::English => &ENGLISH,
        }
    }
}

impl Labels {
    /// Month name for `month` in 1..=12; anything else yields an empty string.
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|idx| self.months.get(idx as usize))
            .copied()
            .unwrap_or("")
    }

    pub fn month_banner(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    pub fn year_banner(&self, year: i32) -> String {
        format!("{} {}", self.year, year)
    }

    pub fn sheet_names(&self) -> [&'static str; 5] {
        [
            self.financial_statement,
            self.general_journal,
            self.general_ledger,
            self.trial_balance,
            self.income_statement,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_calendar() {
        let labels = Language::Indonesian.labels();
        assert_eq!(labels.month_name(1), "Januari");
        assert_eq!(labels.month_name(12), "Desember");
        assert_eq!(labels.month_name(0), "");
        assert_eq!(labels.month_name(13), "");
        assert_eq!(Language::English.labels().month_banner(2025, 2), "February 2025");
    }
}
