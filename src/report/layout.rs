//! Places the calculators' outputs into titled, positioned sheet blocks.
//!
//! Layout is a single pass with no state carried between calls. Every amount
//! leaves this module as display text; serializers must not re-format it.

use serde::{Deserialize, Serialize};

use crate::core::services::GeneralLedger;
use crate::currency::{format_amount, LocaleConfig};
use crate::ledger::{AccountSummary, Amount, IncomeStatementResult, PeriodBucket, Transaction};

use super::labels::{Labels, Language};
use super::sheet::{Cell, CellRef, Sheet, SheetBlock, Workbook};

/// Blank rows between vertically stacked blocks.
pub const BLOCK_GAP_ROWS: usize = 1;
/// Blank columns between side-by-side month blocks in paged mode.
pub const PAGE_GAP_COLS: usize = 2;
pub const DEFAULT_COLUMN_WIDTH: u16 = 18;

const PERIOD_COLUMNS: usize = 5;

/// How the periodized financial statement arranges its month blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Year banner, then each month top to bottom.
    #[default]
    Stacked,
    /// Year banner, then each month in its own column range, left to right.
    Paged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub mode: LayoutMode,
    pub language: Language,
    pub locale: LocaleConfig,
    pub column_width: u16,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            language: Language::default(),
            locale: LocaleConfig::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

/// Everything the layout consumes, computed from one snapshot.
pub struct ReportInput<'a> {
    pub buckets: &'a [PeriodBucket],
    pub ledger: &'a GeneralLedger,
    pub trial_balance: &'a [AccountSummary],
    pub income_statement: &'a IncomeStatementResult,
}

pub struct LayoutEngine<'o> {
    options: &'o LayoutOptions,
    labels: &'static Labels,
}

impl<'o> LayoutEngine<'o> {
    pub fn new(options: &'o LayoutOptions) -> Self {
        Self {
            options,
            labels: options.language.labels(),
        }
    }

    /// Builds the five report sheets in export order.
    pub fn build_report(&self, input: &ReportInput<'_>) -> Workbook {
        let sheets = vec![
            self.financial_statement_sheet(input.buckets),
            self.journal_sheet(input.buckets),
            self.ledger_sheet(input.ledger),
            self.trial_balance_sheet(input.trial_balance),
            self.income_statement_sheet(input.income_statement),
        ];
        tracing::debug!(
            sheets = sheets.len(),
            blocks = sheets.iter().map(|s| s.blocks.len()).sum::<usize>(),
            mode = ?self.options.mode,
            "laid out report"
        );
        Workbook { sheets }
    }

    pub fn financial_statement_sheet(&self, buckets: &[PeriodBucket]) -> Sheet {
        let mut sheet = Sheet::new(self.labels.financial_statement);
        if buckets.is_empty() {
            sheet.blocks.push(self.placeholder(self.labels.financial_statement));
            return sheet;
        }
        let mut row = 0;
        for year_buckets in buckets.chunk_by(|a, b| a.year == b.year) {
            let year = year_buckets[0].year;
            row = match self.options.mode {
                LayoutMode::Stacked => self.stack_year(&mut sheet, row, year, year_buckets),
                LayoutMode::Paged => self.page_year(&mut sheet, row, year, year_buckets),
            };
        }
        sheet
    }

    fn stack_year(&self, sheet: &mut Sheet, start: usize, year: i32, buckets: &[PeriodBucket]) -> usize {
        let banner = self.banner(CellRef::new(start, 0), year);
        let mut row = banner.end_row();
        sheet.blocks.push(banner);
        for bucket in buckets {
            let block = self.period_block(CellRef::new(row, 0), bucket);
            row = block.end_row() + BLOCK_GAP_ROWS;
            sheet.blocks.push(block);
        }
        row
    }

    fn page_year(&self, sheet: &mut Sheet, start: usize, year: i32, buckets: &[PeriodBucket]) -> usize {
        let stride = PERIOD_COLUMNS + PAGE_GAP_COLS;
        let mut banner = self.banner(CellRef::new(start, 0), year);
        banner.width = buckets.len() * stride - PAGE_GAP_COLS;
        let top = banner.end_row();
        sheet.blocks.push(banner);

        let mut band_end = top;
        for (idx, bucket) in buckets.iter().enumerate() {
            let block = self.period_block(CellRef::new(top, idx * stride), bucket);
            band_end = band_end.max(block.end_row());
            sheet.blocks.push(block);
        }
        band_end + BLOCK_GAP_ROWS
    }

    fn banner(&self, anchor: CellRef, year: i32) -> SheetBlock {
        SheetBlock::banner(
            anchor,
            self.labels.year_banner(year),
            PERIOD_COLUMNS,
            self.options.column_width,
        )
    }

    fn period_block(&self, anchor: CellRef, bucket: &PeriodBucket) -> SheetBlock {
        let labels = self.labels;
        let mut block = SheetBlock::table(
            anchor,
            labels.month_banner(bucket.year, bucket.month),
            headers(&[labels.date, labels.account, labels.memo, labels.debit, labels.credit]),
            self.options.column_width,
        );
        for txn in &bucket.transactions {
            block.rows.push(vec![
                Cell::text(txn.timestamp.to_string()),
                Cell::text(txn.account.clone()),
                Cell::text(txn.memo.clone()),
                self.amount(txn.debit),
                self.amount(txn.credit),
            ]);
        }
        block.subtotal = Some(vec![
            Cell::text(labels.total),
            Cell::blank(),
            Cell::blank(),
            self.amount(bucket.total_debit()),
            self.amount(bucket.total_credit()),
        ]);
        block
    }

    /// Flat journal in bucket order: chronological by month, input order within.
    pub fn journal_sheet(&self, buckets: &[PeriodBucket]) -> Sheet {
        let labels = self.labels;
        let mut block = SheetBlock::table(
            CellRef::default(),
            labels.general_journal,
            headers(&[
                labels.date,
                labels.month,
                labels.account,
                labels.memo,
                labels.debit,
                labels.credit,
            ]),
            self.options.column_width,
        );
        let mut totals = Totals::default();
        for txn in buckets.iter().flat_map(|bucket| bucket.transactions.iter()) {
            totals.add(txn.debit, txn.credit);
            block.rows.push(self.journal_row(txn));
        }
        block.subtotal = Some(vec![
            Cell::text(labels.total),
            Cell::blank(),
            Cell::blank(),
            Cell::blank(),
            self.amount(totals.debit),
            self.amount(totals.credit),
        ]);
        let mut sheet = Sheet::new(labels.general_journal);
        sheet.blocks.push(block);
        sheet
    }

    fn journal_row(&self, txn: &Transaction) -> Vec<Cell> {
        vec![
            Cell::text(txn.timestamp.to_string()),
            Cell::text(self.labels.month_name(txn.timestamp.month())),
            Cell::text(txn.account.clone()),
            Cell::text(txn.memo.clone()),
            self.amount(txn.debit),
            self.amount(txn.credit),
        ]
    }

    /// One block per account, stacked, each ending with its closing balance.
    pub fn ledger_sheet(&self, ledger: &GeneralLedger) -> Sheet {
        let labels = self.labels;
        let mut sheet = Sheet::new(labels.general_ledger);
        if ledger.is_empty() {
            sheet.blocks.push(self.placeholder(labels.general_ledger));
            return sheet;
        }
        let mut row = 0;
        for account in ledger.iter() {
            let mut block = SheetBlock::table(
                CellRef::new(row, 0),
                format!("{}: {}", labels.account, account.account),
                headers(&[labels.date, labels.memo, labels.debit, labels.credit, labels.balance]),
                self.options.column_width,
            );
            let mut totals = Totals::default();
            for entry in &account.entries {
                totals.add(entry.debit, entry.credit);
                block.rows.push(vec![
                    Cell::text(entry.timestamp.to_string()),
                    Cell::text(entry.memo.clone()),
                    self.amount(entry.debit),
                    self.amount(entry.credit),
                    self.amount(entry.running_balance),
                ]);
            }
            block.subtotal = Some(vec![
                Cell::text(labels.total),
                Cell::blank(),
                self.amount(totals.debit),
                self.amount(totals.credit),
                self.amount(account.closing_balance()),
            ]);
            row = block.end_row() + BLOCK_GAP_ROWS;
            sheet.blocks.push(block);
        }
        sheet
    }

    pub fn trial_balance_sheet(&self, rows: &[AccountSummary]) -> Sheet {
        let labels = self.labels;
        let mut block = SheetBlock::table(
            CellRef::default(),
            labels.trial_balance,
            headers(&[labels.account, labels.debit, labels.credit, labels.balance]),
            self.options.column_width,
        );
        let mut totals = Totals::default();
        let mut balance: Amount = 0;
        for summary in rows {
            totals.add(summary.total_debit, summary.total_credit);
            balance += summary.balance;
            block.rows.push(vec![
                Cell::text(summary.account.clone()),
                self.amount(summary.total_debit),
                self.amount(summary.total_credit),
                self.amount(summary.balance),
            ]);
        }
        block.subtotal = Some(vec![
            Cell::text(labels.total),
            self.amount(totals.debit),
            self.amount(totals.credit),
            self.amount(balance),
        ]);
        let mut sheet = Sheet::new(labels.trial_balance);
        sheet.blocks.push(block);
        sheet
    }

    /// Three rows: revenue, expense, and net. A negative net is labelled as a loss.
    pub fn income_statement_sheet(&self, result: &IncomeStatementResult) -> Sheet {
        let labels = self.labels;
        let mut block = SheetBlock::table(
            CellRef::default(),
            labels.income_statement,
            headers(&[labels.memo, labels.amount]),
            self.options.column_width,
        );
        let net_label = if result.is_loss() {
            labels.net_loss
        } else {
            labels.net_profit
        };
        block.rows = vec![
            vec![Cell::text(labels.revenue), self.amount(result.total_revenue)],
            vec![Cell::text(labels.expense), self.amount(result.total_expense)],
            vec![Cell::text(net_label), self.amount(result.net)],
        ];
        let mut sheet = Sheet::new(labels.income_statement);
        sheet.blocks.push(block);
        sheet
    }

    fn placeholder(&self, title: &str) -> SheetBlock {
        SheetBlock::placeholder(
            CellRef::default(),
            title,
            self.labels.no_data,
            self.options.column_width,
        )
    }

    fn amount(&self, value: Amount) -> Cell {
        Cell::amount(format_amount(&self.options.locale, value))
    }
}

#[derive(Default)]
struct Totals {
    debit: Amount,
    credit: Amount,
}

impl Totals {
    fn add(&mut self, debit: Amount, credit: Amount) {
        self.debit += debit;
        self.credit += credit;
    }
}

fn headers(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
