use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use orderfsm::application::engine::OrderDesk;
use orderfsm::domain::ports::OrderStoreBox;
use orderfsm::infrastructure::in_memory::InMemoryOrderStore;
use orderfsm::interfaces::csv::command_reader::CommandReader;
use orderfsm::interfaces::csv::order_writer::OrderWriter;
use orderfsm::interfaces::json;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action log CSV file with columns `order, tenant, action`
    input: PathBuf,

    /// Stop at the first rejected command instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Output format for the final view of every order
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let store: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let desk = OrderDesk::new(store);

    // Replay the action log
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    let mut applied = 0usize;
    let mut rejected = 0usize;
    for command in reader.commands() {
        match command {
            Ok(command) => match desk.apply(command).await {
                Ok(_) => applied += 1,
                Err(e) if cli.strict => return Err(e).into_diagnostic(),
                Err(e) => {
                    rejected += 1;
                    error!("Error processing command: {e}");
                }
            },
            Err(e) if cli.strict => return Err(e).into_diagnostic(),
            Err(e) => error!("Error reading command: {e}"),
        }
    }
    info!(applied, rejected, "replayed action log");

    let views = desk.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => OrderWriter::new(stdout.lock())
            .write_orders(views)
            .into_diagnostic()?,
        OutputFormat::Json => json::write_orders(stdout.lock(), &views).into_diagnostic()?,
    }

    Ok(())
}
