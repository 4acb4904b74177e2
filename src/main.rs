use std::io::{self, Write};

use clap::{Parser, Subcommand};
use foundations::{
    calculator::{Layout, Outcome, run_session},
    format::{Value, demo_lines, demo_values},
    limits::write_report,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// foundations prints primitive type limits, runs two console calculators and
/// demonstrates per-type value formatting.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Default log filter, used when `RUST_LOG` is not set. Logs go to stderr.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the limits of the primitive numeric types.
    Limits,
    /// Calculator reading first number, second number, then the operator.
    Calc,
    /// Calculator reading first number, operator, then second number.
    Switch,
    /// Format values by type. Without options the built-in demo values are
    /// used.
    Format {
        /// Integer to prefix with `$`.
        #[arg(long, allow_hyphen_values = true)]
        int: Option<i64>,

        /// Double to truncate to two fractional digits.
        #[arg(long, allow_hyphen_values = true)]
        double: Option<f64>,

        /// Text to pad with spaces.
        #[arg(long)]
        text: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(args.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();

    match command {
        Command::Limits => write_report(stdout.lock())?,
        Command::Calc => calculate(Layout::OperandsFirst)?,
        Command::Switch => calculate(Layout::Infix)?,
        Command::Format { int, double, text } => {
            let given: Vec<Value> = int.map(Value::Integer)
                                       .into_iter()
                                       .chain(double.map(Value::Double))
                                       .chain(text.map(Value::Text))
                                       .collect();
            let values = if given.is_empty() { demo_values().to_vec() } else { given };

            let mut out = stdout.lock();
            for line in demo_lines(&values) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        },
    }

    Ok(())
}

fn calculate(layout: Layout) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = run_session(io::stdin().lock(), io::stdout().lock(), layout)?;

    // Rejected runs still exit with status 0.
    if let Outcome::Rejected(e) = outcome {
        info!(error = %e, "calculation reported to the user");
    }
    Ok(())
}
