use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use great_circle::{ConfigurationManager, GreatCircleCalculator, Operation};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Great-circle distance, azimuth and body calculations on a sphere
#[derive(Parser)]
#[command(name = "great-circle", version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pretty: bool,
    /// Log computed results to stderr
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance by the Haversine formula
    Haversine(RequestArgs),
    /// Great-circle distance by the spherical Vincenty formula
    Vincenty(RequestArgs),
    /// Initial azimuth in radians
    Azimuth(RequestArgs),
    /// Half circumference of a body from its radius
    #[command(alias = "distance-to-poles")]
    HalfCircumference(RequestArgs),
    /// Write the default configuration to a file
    WriteConfig {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// Request body as a JSON object; read from stdin when omitted
    #[arg(long, short)]
    request: Option<String>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut manager = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigurationManager::new(),
    };
    if cli.debug {
        manager.set_debug_logging(true);
    }
    for warning in ConfigurationManager::validate_config(manager.config()).warnings {
        eprintln!("[WARN config] {}", warning);
    }

    let (operation, args) = match cli.command {
        Commands::Haversine(args) => (Operation::Haversine, args),
        Commands::Vincenty(args) => (Operation::Vincenty, args),
        Commands::Azimuth(args) => (Operation::Azimuth, args),
        Commands::HalfCircumference(args) => (Operation::HalfCircumference, args),
        Commands::WriteConfig { path } => {
            manager
                .save_to_file(&path)
                .with_context(|| format!("writing configuration to {}", path.display()))?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let body = match args.request {
        Some(body) => body,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            body
        }
    };

    let calculator = GreatCircleCalculator::new(manager.config().clone());
    let response = calculator
        .handle_json(operation, &body)
        .with_context(|| format!("{} request", operation))?;

    println!("{}", response.to_json(cli.pretty).context("serializing response")?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
