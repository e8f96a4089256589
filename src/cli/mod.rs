//! Command-line surface over the store, the report builder, and the exporters.

pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::{
    config::{ConfigManager, ReportConfig},
    core::services::{ReportService, ServiceError, ServiceResult, TransactionService},
    currency::format_amount,
    export::ExportFormat,
    ledger::TransactionRecord,
    report::{
        text::{render_sheet, PreviewStyle},
        Cell, CellRef, LayoutMode, Sheet, SheetBlock,
    },
    storage::JsonStore,
    utils::{build_info, paths},
};

#[derive(Parser, Debug)]
#[command(
    name = "buku_cli",
    version,
    about = "General ledger, trial balance and income statement reports"
)]
pub struct Cli {
    /// Transaction store file (defaults to $BUKU_HOME/transactions.json)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Report configuration file (defaults to $BUKU_HOME/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a transaction
    Add {
        /// YYYY-MM-DD, optionally followed by HH:MM[:SS]
        #[arg(long)]
        date: String,
        #[arg(long)]
        account: String,
        #[arg(long, default_value = "")]
        memo: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        debit: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        credit: i64,
    },
    /// Delete a transaction by position or identifier
    Remove {
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        index: Option<usize>,
        #[arg(long)]
        id: Option<String>,
    },
    /// Show stored transactions in store order
    List,
    /// Build the report and preview or export it
    Report {
        /// Export destination (file for json, directory for csv)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Override the configured layout mode
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,
        /// Revenue account (repeatable); replaces the configured set
        #[arg(long)]
        revenue: Vec<String>,
        /// Expense account (repeatable); replaces the configured set
        #[arg(long)]
        expense: Vec<String>,
        /// Print every sheet to stdout
        #[arg(long)]
        preview: bool,
    },
    /// Inspect or create the report configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print build metadata
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    Show,
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Stacked,
    Paged,
}

impl From<LayoutArg> for LayoutMode {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Stacked => LayoutMode::Stacked,
            LayoutArg::Paged => LayoutMode::Paged,
        }
    }
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> ServiceResult<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> ServiceResult<()> {
    output::set_plain(cli.plain);
    let store_path = cli.store.unwrap_or_else(paths::store_file);
    let config_manager = cli
        .config
        .map(ConfigManager::new)
        .unwrap_or_else(ConfigManager::default_location);

    match cli.command {
        Command::Add {
            date,
            account,
            memo,
            debit,
            credit,
        } => {
            let store = JsonStore::open(store_path)?;
            let id = TransactionService::add(
                &store,
                TransactionRecord::new(date, account, memo, debit, credit),
            )?;
            output::success(format!("Transaction added ({id})"));
        }
        Command::Remove { index, id } => {
            let store = JsonStore::open(store_path)?;
            let removed = match (index, id) {
                (Some(index), _) => TransactionService::remove_at(&store, index)?,
                (None, Some(raw)) => {
                    let id = Uuid::parse_str(raw.trim())
                        .map_err(|err| ServiceError::Invalid(format!("invalid id `{raw}`: {err}")))?;
                    TransactionService::remove(&store, id)?
                }
                (None, None) => {
                    return Err(ServiceError::Invalid("pass --index or --id".into()));
                }
            };
            output::success(format!(
                "Removed {} {} ({})",
                removed.timestamp, removed.account, removed.id
            ));
        }
        Command::List => {
            let store = JsonStore::open(store_path)?;
            let config = config_manager.load()?;
            list_transactions(&store, &config)?;
        }
        Command::Report {
            out,
            format,
            layout,
            revenue,
            expense,
            preview,
        } => {
            let store = JsonStore::open(store_path)?;
            let mut config = config_manager.load()?;
            if let Some(layout) = layout {
                config.layout_mode = layout.into();
            }
            if !revenue.is_empty() {
                config.revenue_accounts = revenue.into_iter().collect();
            }
            if !expense.is_empty() {
                config.expense_accounts = expense.into_iter().collect();
            }
            if config.revenue_accounts.is_empty() && config.expense_accounts.is_empty() {
                output::warning("No revenue or expense accounts configured; income statement will be zero");
            }

            let workbook = match &out {
                Some(path) => {
                    let format = ExportFormat::from(format);
                    let serializer = format.serializer();
                    let workbook =
                        ReportService::export(&store, &config, serializer.as_ref(), path)?;
                    output::success(format!("Report written to {}", path.display()));
                    workbook
                }
                None => ReportService::build(&store, &config)?,
            };
            if preview || out.is_none() {
                for sheet in &workbook.sheets {
                    output::section(&sheet.name);
                    println!("{}", render_sheet(sheet, PreviewStyle::default()));
                }
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config_manager.load()?;
                let json = serde_json::to_string_pretty(&config)
                    .map_err(|err| ServiceError::Invalid(err.to_string()))?;
                println!("{json}");
            }
            ConfigAction::Init { force } => {
                if config_manager.path().exists() && !force {
                    return Err(ServiceError::Invalid(format!(
                        "config already exists at {} (use --force to overwrite)",
                        config_manager.path().display()
                    )));
                }
                config_manager.save(&ReportConfig::default())?;
                output::success(format!(
                    "Config written to {}",
                    config_manager.path().display()
                ));
            }
        },
        Command::Version => {
            println!("{}", build_info::current().summary());
        }
    }
    Ok(())
}

fn list_transactions(store: &JsonStore, config: &ReportConfig) -> ServiceResult<()> {
    let transactions = TransactionService::list(store)?;
    if transactions.is_empty() {
        output::info("No transactions recorded");
        return Ok(());
    }
    let mut block = SheetBlock::table(
        CellRef::default(),
        store.path().display().to_string(),
        ["#", "Date", "Account", "Memo", "Debit", "Credit", "Id"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        config.column_width,
    );
    for (idx, txn) in transactions.iter().enumerate() {
        block.rows.push(vec![
            Cell::amount(idx.to_string()),
            Cell::text(txn.timestamp.to_string()),
            Cell::text(txn.account.clone()),
            Cell::text(txn.memo.clone()),
            Cell::amount(format_amount(&config.locale, txn.debit)),
            Cell::amount(format_amount(&config.locale, txn.credit)),
            Cell::text(txn.id.to_string()),
        ]);
    }
    let mut sheet = Sheet::new(format!("{} transaction(s)", transactions.len()));
    sheet.blocks.push(block);
    println!(
        "{}",
        render_sheet(
            &sheet,
            PreviewStyle {
                max_width: 36,
                ..PreviewStyle::default()
            }
        )
    );
    Ok(())
}
