//! Interactive market-cap scenario profit calculator

mod prompt;
mod report;
mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use common::error::{Error, IntoError, Result};
use common::model::scenario::BasisSelection;
use dotenv::dotenv;
use scenario_engine::{export_csv_file, ScenarioConfig, ScenarioService};
use tracing::{debug, error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::prompt::Prompter;
use crate::session::Overrides;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Investment amount, e.g. 100 or 22.3k
    #[arg(long)]
    invest: Option<String>,

    /// Market cap when buying: a preset number or a value like 1.3m
    #[arg(long)]
    buy_mc: Option<String>,

    /// Comma-separated sell market caps, e.g. "100m,1b,#6"
    #[arg(long)]
    targets: Option<String>,

    /// Total token supply
    #[arg(long)]
    supply: Option<String>,

    /// Circulating supply, absolute (200m) or percent of total (20%)
    #[arg(long)]
    circulating: Option<String>,

    /// Which supply to derive prices from
    #[arg(long, value_enum)]
    basis: Option<BasisArg>,

    /// CSV file to write results to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set the log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BasisArg {
    Circulating,
    Fdv,
    Both,
}

impl From<BasisArg> for BasisSelection {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::Circulating => BasisSelection::Circulating,
            BasisArg::Fdv => BasisSelection::Fdv,
            BasisArg::Both => BasisSelection::Both,
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the prompts on stdout.
/// `DEBUG=1` forces debug output regardless of `--log-level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let env_debug = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let level = if env_debug == "1" { "debug" } else { log_level };

    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .parse(format!(
            "magnitude={level},scenario_engine={level},profit_tool={level}"
        ))
        .map_err(|e| Error::ConfigurationError(format!("invalid log level '{}': {}", level, e)))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| e.into_error("Failed to install log subscriber"))?;

    debug!("Tracing initialized at {}", level);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ScenarioConfig::from_env()?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let overrides = Overrides {
        invest: cli.invest,
        buy_market_cap: cli.buy_mc,
        targets: cli.targets,
        total_supply: cli.supply,
        circulating: cli.circulating,
        basis: cli.basis.map(BasisSelection::from),
    };

    let service = ScenarioService::with_config(&config);
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    prompter.say("\n=== MemeCoin Smart Profit Tool ===\n")?;

    let request = match session::collect_request(&mut prompter, &service, &config, &overrides)? {
        Some(request) => request,
        None => {
            prompter.say("No targets given. Exiting.")?;
            return Ok(());
        }
    };

    let results = service.run(&request)?;

    prompter.say("\n--- Results ---\n")?;
    report::write_report(prompter.output(), &results)?;

    export_csv_file(&config.output_path, &results)?;
    prompter.say(&format!("Results saved to {}", config.output_path.display()))?;
    info!("Done");

    Ok(())
}
