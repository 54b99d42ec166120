use campaign_pacing::config::AppConfig;
use campaign_pacing::domain::options::DisplayOptions;
use campaign_pacing::interfaces::csv::campaign_reader::CampaignReader;
use campaign_pacing::interfaces::csv::report_writer::ReportWriter;
use campaign_pacing::interfaces::display::view::PacingView;
use campaign_pacing::interfaces::text::entry_parser::parse_entries;
use campaign_pacing::interfaces::text::report::{render_errors, render_view};
use campaign_pacing::logger::init_logger;
use campaign_pacing::{Field, PacingController, PacingEngine, PacingError, PacingResult};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(author, version, about = "Campaign budget pacing calculator", long_about = None)]
struct Cli {
    /// Total campaign budget
    #[arg(long, allow_hyphen_values = true)]
    budget: Option<String>,

    /// Campaign duration in days
    #[arg(long, allow_hyphen_values = true)]
    days: Option<String>,

    /// Days since the campaign started
    #[arg(long, allow_hyphen_values = true)]
    elapsed: Option<String>,

    /// Amount spent so far
    #[arg(long, allow_hyphen_values = true)]
    spent: Option<String>,

    /// Batch CSV with columns name,total_budget,total_days,days_elapsed,amount_spent
    #[arg(long, conflicts_with_all = ["budget", "days", "elapsed", "spent"])]
    input: Option<PathBuf>,

    /// ISO 4217 currency code for display
    #[arg(long)]
    currency: Option<String>,

    /// Decimal places shown for amounts
    #[arg(long, allow_negative_numbers = true)]
    decimals: Option<i64>,

    /// Display options as JSON, e.g. '{"currency":"EUR","decimals":2}'
    #[arg(long)]
    options: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    view: PacingView,
    metrics: &'a PacingResult,
}

fn resolve_options(cli: &Cli, config: &AppConfig) -> DisplayOptions {
    let mut options = config.display_options();
    if let Some(json) = &cli.options {
        options = options.merge_json(json);
    }
    if let Some(currency) = &cli.currency {
        options = options.with_currency(currency);
    }
    if let Some(decimals) = cli.decimals {
        options = options.with_decimals(decimals);
    }
    options
}

fn run_single(cli: &Cli, engine: PacingEngine, options: DisplayOptions) -> Result<()> {
    let mut controller = PacingController::new(engine, options);
    let values = [&cli.budget, &cli.days, &cli.elapsed, &cli.spent];
    for (field, value) in Field::ALL.into_iter().zip(values) {
        controller.set_field(field, value.as_deref().unwrap_or_default());
    }

    let result = match controller.calculate() {
        Ok(result) => *result,
        Err(errors) => {
            eprint!("{}", render_errors(errors));
            return Err(PacingError::from(errors.clone())).into_diagnostic();
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            if let Some(view) = controller.view() {
                write!(out, "{}", render_view(&view)).into_diagnostic()?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                name: "campaign",
                view: PacingView::new(&result, controller.options()),
                metrics: &result,
            };
            serde_json::to_writer_pretty(&mut out, &report)
                .map_err(PacingError::from)
                .into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        OutputFormat::Csv => {
            let mut writer = ReportWriter::new(out, controller.options());
            writer.write_result("campaign", &result).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
    }
    Ok(())
}

fn run_batch(
    input: &Path,
    format: OutputFormat,
    engine: PacingEngine,
    options: DisplayOptions,
) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = CampaignReader::new(file);
    let mut csv_writer =
        (format != OutputFormat::Json).then(|| ReportWriter::new(io::stdout(), &options));

    let (mut accepted, mut rejected) = (0usize, 0usize);
    for record in reader.campaigns() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error reading campaign: {}", e);
                rejected += 1;
                continue;
            }
        };
        let entries = parse_entries(&record.entries(), options.whole_units());
        match engine.evaluate(&entries) {
            Ok(result) => {
                accepted += 1;
                if let Some(writer) = csv_writer.as_mut() {
                    writer.write_result(&record.name, &result).into_diagnostic()?;
                } else {
                    let report = JsonReport {
                        name: &record.name,
                        view: PacingView::new(&result, &options),
                        metrics: &result,
                    };
                    let line = serde_json::to_string(&report)
                        .map_err(PacingError::from)
                        .into_diagnostic()?;
                    println!("{}", line);
                }
            }
            Err(errors) => {
                rejected += 1;
                eprintln!("Rejected campaign {}: {}", record.name, errors);
            }
        }
    }
    if let Some(writer) = csv_writer.as_mut() {
        writer.flush().into_diagnostic()?;
    }
    info!(accepted, rejected, "batch complete");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path).into_diagnostic()?,
        None => AppConfig::default(),
    };
    init_logger(
        cli.verbose,
        config.logging.level.as_deref(),
        config.logging.format,
    );

    let options = resolve_options(&cli, &config);
    let engine = PacingEngine::with_policy(config.band_policy());
    info!(currency = options.currency(), decimals = options.decimals(), "display options resolved");

    match &cli.input {
        Some(input) => run_batch(input, cli.format, engine, options),
        None => run_single(&cli, engine, options),
    }
}
