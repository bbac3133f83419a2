//! TrendSight CLI — fetch daily bars and print the trend analytics report.
//!
//! `analyze` fetches each symbol through the selected provider (Yahoo
//! Finance by default, CSV import or a synthetic walk offline), runs the
//! analytics passes, and prints one report per symbol. Symbols are
//! analyzed in parallel; output stays in the order given.

mod config;
mod export;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;

use config::AnalysisConfig;
use trendsight_core::analytics::{
    analyze_profit, compute_returns, compute_sma, count_price_runs, select_for_display,
    DataQuality, DisplayOptions, ProfitResult, ReturnKind, RunSummary,
};
use trendsight_core::data::{
    ingest, CsvProvider, DataProvider, DataSource, SyntheticProvider, YahooProvider,
};
use trendsight_core::domain::{PriceSeries, Transaction};

#[derive(Parser)]
#[command(name = "trendsight", about = "TrendSight CLI — stock trend analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReturnKindArg {
    Simple,
    Log,
}

impl From<ReturnKindArg> for ReturnKind {
    fn from(arg: ReturnKindArg) -> Self {
        match arg {
            ReturnKindArg::Simple => ReturnKind::Simple,
            ReturnKindArg::Log => ReturnKind::Log,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily bars and print the analytics report per symbol.
    Analyze {
        /// Symbols to analyze (e.g., SPY QQQ AAPL).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Start date (YYYY-MM-DD). Defaults to one year ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// SMA window in trading days.
        #[arg(long)]
        sma_window: Option<usize>,

        /// Return definition: simple or log. Required here or in the
        /// config file; there is no silent default.
        #[arg(long, value_enum)]
        returns: Option<ReturnKindArg>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read bars from <dir>/<SYMBOL>.csv instead of the network.
        #[arg(long)]
        csv_dir: Option<PathBuf>,

        /// Use a seeded synthetic random walk instead of the network.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Seed for the synthetic walk.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write <SYMBOL>_transactions.csv for each report here.
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbols,
            start,
            end,
            sma_window,
            returns,
            config,
            csv_dir,
            synthetic,
            seed,
            export_dir,
        } => run_analyze(
            symbols, start, end, sma_window, returns, config, csv_dir, synthetic, seed, export_dir,
        ),
    }
}

/// Everything the report prints for one symbol.
struct SymbolReport {
    symbol: String,
    source: DataSource,
    bar_count: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
    sma_window: usize,
    sma_last: Option<f64>,
    return_kind: ReturnKind,
    last_return: Option<f64>,
    profit: ProfitResult,
    optimum_buy_date: Option<NaiveDate>,
    optimum_sell_date: Option<NaiveDate>,
    runs: RunSummary,
    selected: Vec<Transaction>,
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    symbols: Vec<String>,
    start: Option<String>,
    end: Option<String>,
    sma_window: Option<usize>,
    returns: Option<ReturnKindArg>,
    config_path: Option<PathBuf>,
    csv_dir: Option<PathBuf>,
    synthetic: bool,
    seed: u64,
    export_dir: Option<PathBuf>,
) -> Result<()> {
    if csv_dir.is_some() && synthetic {
        bail!("--csv-dir and --synthetic are mutually exclusive");
    }

    let config = match &config_path {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    // Flags override file values; the return kind must come from one of them.
    let window = sma_window.unwrap_or(config.analysis.sma_window);
    let return_kind: ReturnKind = match returns {
        Some(arg) => arg.into(),
        None => match config.analysis.return_kind {
            Some(kind) => kind,
            None => bail!("return kind is ambiguous: pass --returns simple|log or set analysis.return_kind in the config"),
        },
    };
    let display_options = config.display_options();

    let end_date = parse_date(end.as_deref())?
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let start_date = parse_date(start.as_deref())?
        .unwrap_or_else(|| end_date - chrono::Duration::days(365));
    if end_date < start_date {
        bail!("end date {end_date} is before start date {start_date}");
    }

    let provider: Box<dyn DataProvider> = if let Some(dir) = csv_dir {
        Box::new(CsvProvider::new(dir))
    } else if synthetic {
        Box::new(SyntheticProvider::new(seed))
    } else {
        Box::new(YahooProvider::new()?)
    };

    let reports: Vec<(String, Result<SymbolReport>)> = symbols
        .par_iter()
        .map(|symbol| {
            let report = analyze_symbol(
                provider.as_ref(),
                symbol,
                start_date,
                end_date,
                window,
                return_kind,
                &display_options,
            );
            (symbol.clone(), report)
        })
        .collect();

    let mut failures = 0;
    for (symbol, report) in &reports {
        match report {
            Ok(report) => {
                print_report(report);
                if report.profit.is_error() {
                    failures += 1;
                }
                if let Some(dir) = &export_dir {
                    export_report(dir, report)?;
                }
            }
            Err(e) => {
                eprintln!("Error for {symbol}: {e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
        })
        .transpose()
}

fn analyze_symbol(
    provider: &dyn DataProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    window: usize,
    return_kind: ReturnKind,
    display_options: &DisplayOptions,
) -> Result<SymbolReport> {
    let fetched = provider
        .fetch(symbol, start, end)
        .with_context(|| format!("fetch failed ({})", provider.name()))?;
    let source = fetched.source;
    let series: PriceSeries = ingest(fetched.bars)?;

    let sma = compute_sma(&series, window)?;
    let returns = compute_returns(&series, return_kind);
    let runs = count_price_runs(&series);
    let profit = analyze_profit(&series);
    let selected = select_for_display(&profit, display_options);

    let optimum_buy_date = series.get(profit.buy_index_single).map(|b| b.date);
    let optimum_sell_date = series.get(profit.sell_index_single).map(|b| b.date);

    Ok(SymbolReport {
        symbol: symbol.to_string(),
        source,
        bar_count: series.len(),
        first_date: series.first_date().unwrap_or(start),
        last_date: series.last_date().unwrap_or(end),
        sma_window: window,
        sma_last: sma.last_defined(),
        return_kind,
        last_return: returns.last_defined(),
        profit,
        optimum_buy_date,
        optimum_sell_date,
        runs,
        selected,
    })
}

fn print_report(report: &SymbolReport) {
    println!();
    println!("=== {} ===", report.symbol);
    println!(
        "Period:          {} to {} ({} bars, source: {:?})",
        report.first_date, report.last_date, report.bar_count, report.source
    );

    if report.profit.is_error() {
        let reason = report
            .profit
            .error_message
            .as_deref()
            .unwrap_or("unknown validation failure");
        println!();
        println!("DATA ERROR: {reason}");
        return;
    }

    match report.sma_last {
        Some(v) => println!("SMA({}):         {:.2} (latest)", report.sma_window, v),
        None => println!(
            "SMA({}):         undefined (need {} bars, have {})",
            report.sma_window, report.sma_window, report.bar_count
        ),
    }
    match (report.return_kind, report.last_return) {
        (ReturnKind::Simple, Some(v)) => println!("Daily return:    {v:+.2}% (latest)"),
        (ReturnKind::Log, Some(v)) => println!("Log return:      {v:+.5} (latest)"),
        (_, None) => println!("Daily return:    undefined"),
    }

    println!();
    println!("--- Optimal single transaction ---");
    let profit = &report.profit;
    if profit.max_profit_single > 0.0 {
        match (&report.optimum_buy_date, &report.optimum_sell_date) {
            (Some(buy), Some(sell)) => println!(
                "Buy {buy} / sell {sell}: profit {:.2}",
                profit.max_profit_single
            ),
            _ => println!(
                "Buy bar {} / sell bar {}: profit {:.2}",
                profit.buy_index_single, profit.sell_index_single, profit.max_profit_single
            ),
        }
    } else {
        println!("No profitable transaction in range");
    }

    println!();
    println!("--- Multi-transaction decomposition ---");
    println!("Transactions:    {}", profit.num_transactions);
    println!("Total profit:    {:.2}", profit.total_profit_multiple);
    println!("Avg per trade:   {:.2}", profit.average_profit_per_trade);
    if let Some(best) = &profit.best_transaction {
        println!(
            "Best trade:      {} -> {} ({:+.2}, {:+.2}%)",
            best.buy_date, best.sell_date, best.profit, best.return_percent
        );
    }

    println!();
    println!("--- Price runs (min length 2) ---");
    println!(
        "Upward:          {} runs, {} days total, longest {}",
        report.runs.upward.count, report.runs.upward.total_days, report.runs.upward.highest
    );
    println!(
        "Downward:        {} runs, {} days total, longest {}",
        report.runs.downward.count, report.runs.downward.total_days, report.runs.downward.highest
    );

    if profit.data_quality == DataQuality::Degraded {
        println!();
        println!("WARNING: series contains non-positive closes; results may be unreliable");
    }

    if !report.selected.is_empty() {
        println!();
        println!("--- Display transactions ---");
        for txn in &report.selected {
            println!(
                "{} -> {}  buy {:.2} sell {:.2}  profit {:+.2} ({:+.2}%)",
                txn.buy_date, txn.sell_date, txn.buy_price, txn.sell_price, txn.profit,
                txn.return_percent
            );
        }
    }
}

fn export_report(dir: &std::path::Path, report: &SymbolReport) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export dir {}", dir.display()))?;
    let path = dir.join(format!("{}_transactions.csv", report.symbol));
    export::write_transactions_csv(&path, &report.symbol, &report.selected)?;
    println!("Exported: {}", path.display());
    Ok(())
}
