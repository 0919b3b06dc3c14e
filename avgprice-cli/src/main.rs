//! avgprice CLI — compute the trade that moves a holding's average price.
//!
//! Commands:
//! - `guarded`: position-typed calculation, whole units, rejects unfavorable prices
//! - `unguarded`: four-number calculation, exact result, no directional check
//! - `batch`: evaluate every scenario in a TOML file
//!
//! Calculator errors are printed verbatim on stderr and exit with status 1;
//! a batch exits with status 1 when any scenario failed.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use avgprice_core::{AdjustmentRequest, OutcomeRecord, Scenario, ScenarioFile, ScenarioOutcome};
use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(
    name = "avgprice",
    about = "avgprice — units to trade to move a position's average price"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Settings file. Defaults to ./avgprice.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log calculator decisions to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Position-typed calculation: floors to whole units, rejects unfavorable prices.
    Guarded {
        /// Position type: long or short.
        #[arg(long)]
        position_type: String,

        #[command(flatten)]
        numbers: Numbers,
    },
    /// Four-number calculation: exact result, no directional check.
    Unguarded {
        #[command(flatten)]
        numbers: Numbers,
    },
    /// Evaluate every [[scenario]] in a TOML file.
    Batch {
        /// Path to the scenario file.
        #[arg(long)]
        file: PathBuf,

        /// Evaluate one scenario at a time instead of in parallel.
        #[arg(long, default_value_t = false)]
        serial: bool,
    },
}

#[derive(clap::Args)]
struct Numbers {
    /// Average price of the current holding.
    #[arg(long, allow_negative_numbers = true)]
    initial_price: f64,

    /// Units currently held.
    #[arg(long, allow_negative_numbers = true)]
    initial_quantity: f64,

    /// Price the adjusting trade executes at.
    #[arg(long, allow_negative_numbers = true)]
    new_price: f64,

    /// Average price the holding should end up with.
    #[arg(long, allow_negative_numbers = true)]
    desired_average: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let working_dir = std::env::current_dir()?;
    let settings = CliConfig::load(cli.config.as_deref(), &working_dir)?;
    let format = cli.format.unwrap_or(settings.format);
    debug!(?format, parallel = settings.parallel, "resolved settings");

    // Unlocked handles: rayon workers may log to stderr during a batch.
    let (mut out, mut err) = (std::io::stdout(), std::io::stderr());

    let code = match cli.command {
        Commands::Guarded {
            position_type,
            numbers,
        } => run_single(
            AdjustmentRequest::Guarded {
                position_type,
                initial_price: numbers.initial_price,
                initial_quantity: numbers.initial_quantity,
                new_price: numbers.new_price,
                desired_average_price: numbers.desired_average,
            },
            format,
            &mut out,
            &mut err,
        )?,
        Commands::Unguarded { numbers } => run_single(
            AdjustmentRequest::Unguarded {
                initial_price: numbers.initial_price,
                initial_quantity: numbers.initial_quantity,
                new_price: numbers.new_price,
                desired_average_price: numbers.desired_average,
            },
            format,
            &mut out,
            &mut err,
        )?,
        Commands::Batch { file, serial } => {
            let scenarios = ScenarioFile::from_file(&file)?;
            run_batch(&scenarios, settings.parallel && !serial, format, &mut out, &mut err)?
        }
    };

    out.flush()?;
    err.flush()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Evaluate one request. Returns the process exit code.
fn run_single(
    request: AdjustmentRequest,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let scenario = Scenario {
        name: request.mode().to_string(),
        request,
    };
    let outcome = scenario.evaluate();

    if let Err(e) = &outcome.result {
        writeln!(err, "{e}")?;
        return Ok(1);
    }

    let record = outcome.to_record();
    match format {
        OutputFormat::Text => print_single(&record, out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        OutputFormat::Csv => write_csv(std::slice::from_ref(&record), out)?,
    }
    Ok(0)
}

/// Evaluate a scenario file. Returns 1 if any scenario failed.
fn run_batch(
    file: &ScenarioFile,
    parallel: bool,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let outcomes = file.evaluate(parallel);
    let records: Vec<OutcomeRecord> = outcomes.iter().map(ScenarioOutcome::to_record).collect();

    match format {
        OutputFormat::Text => print_table(&records, out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?,
        OutputFormat::Csv => write_csv(&records, out)?,
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        writeln!(err, "{failed} of {} scenario(s) failed", outcomes.len())?;
        return Ok(1);
    }
    Ok(0)
}

fn write_csv(records: &[OutcomeRecord], out: &mut dyn Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn display_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn print_single(record: &OutcomeRecord, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Mode:              {}", record.mode)?;
    writeln!(out, "Adjustment:        {}", display_opt(record.quantity))?;
    writeln!(out, "Action:            {}", display_opt(record.action))?;
    writeln!(out, "Resulting average: {}", display_opt(record.resulting_average))?;
    Ok(())
}

fn print_table(records: &[OutcomeRecord], out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{:<28} {:<10} {:>16} {:<6} {:>16}  Error",
        "Scenario", "Mode", "Adjustment", "Action", "Avg After"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;
    for r in records {
        writeln!(
            out,
            "{:<28} {:<10} {:>16} {:<6} {:>16}  {}",
            r.name,
            r.mode,
            display_opt(r.quantity),
            display_opt(r.action),
            display_opt(r.resulting_average),
            r.error.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}
