use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use balance_trend::{
    ChartSettings, CurrencyFormat, DEFAULT_CURRENCY_SYMBOL, DEFAULT_ECHARTS_SRC, Error, FlatPolicy,
    TransactionKind, balance_chart, build_balance_series_with, chart_page, load_transactions,
};

/// Render a running balance chart from income and expense records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the incomes, a .json or .csv file with the fields date, amount and category.
    #[arg(long)]
    incomes: PathBuf,

    /// File path to the expenses, a .json or .csv file with the fields date, amount and category.
    #[arg(long)]
    expenses: PathBuf,

    /// File path to write the chart to. The chart is written to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Whether to write a standalone HTML page or only the ECharts option object.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// The currency symbol used in tooltips and axis labels.
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency: String,

    /// A title to show above the chart.
    #[arg(long)]
    title: Option<String>,

    /// The height of the chart in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// The URL or path of the ECharts script to load in the HTML page.
    #[arg(long, default_value = DEFAULT_ECHARTS_SRC)]
    echarts_src: String,

    /// Mark points where the balance did not change as flat instead of down.
    #[arg(long)]
    distinguish_flat: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A standalone HTML page.
    Html,
    /// The ECharts option object as a JavaScript literal, as passed to
    /// `chart.setOption`. Not strict JSON, the formatters are functions.
    Options,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Could not render the balance chart: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let incomes = load_transactions(&args.incomes, TransactionKind::Income)?;
    let expenses = load_transactions(&args.expenses, TransactionKind::Expense)?;

    let flat_policy = if args.distinguish_flat {
        FlatPolicy::Distinguish
    } else {
        FlatPolicy::CollapseToDown
    };
    let points = build_balance_series_with(&incomes, &expenses, flat_policy);
    tracing::info!(
        "Built balance series with {} points from {} incomes and {} expenses",
        points.len(),
        incomes.len(),
        expenses.len()
    );

    let settings = ChartSettings {
        title: args.title.clone(),
        currency: CurrencyFormat::new(&args.currency),
        height_px: args.height,
        echarts_src: args.echarts_src.clone(),
    };

    let rendered = match args.format {
        OutputFormat::Html => chart_page(&points, &settings).into_string(),
        OutputFormat::Options => balance_chart(&points, &settings).to_string(),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!("Wrote chart to {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Logs to stderr so that the chart can be piped from stdout.
///
/// Defaults to the `info` level, override with the `RUST_LOG` environment
/// variable.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(io::stderr),
        )
        .init();
}
