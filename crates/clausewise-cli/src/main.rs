//! Clausewise CLI - Analyze legal contracts from the command line.

use clap::Parser;
use clausewise_cli::commands;
use clausewise_cli::repl;
use clausewise_cli::{build_pipeline, Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> clausewise_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so output stays pipeable)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Override analyzer settings if a preset is given
    if let Some(preset) = cli.preset {
        config.analyzer = preset.into();
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    if let Some(Command::Config(args)) = &cli.command {
        println!("{}", commands::execute_config(args, &config, &config_path, &formatter)?);
        return Ok(());
    }

    // Service handles are built once and shared by every command
    let pipeline = build_pipeline(&config)?;

    let output = match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&pipeline, &config, &formatter).await?;
            return Ok(());
        }
        Some(Command::Extract(args)) => commands::execute_extract(&args, &pipeline, &formatter)?,
        Some(Command::Summarize(args)) => {
            commands::execute_summarize(&args, &pipeline, &formatter).await?
        }
        Some(Command::Clauses(args)) => commands::execute_clauses(&args, &pipeline, &formatter)?,
        Some(Command::Risks(args)) => commands::execute_risks(&args, &pipeline, &formatter)?,
        Some(Command::Compare(args)) => commands::execute_compare(&args, &pipeline, &formatter)?,
        Some(Command::Rewrite(args)) => {
            commands::execute_rewrite(&args, &pipeline, &formatter).await?
        }
        Some(Command::Analyze(args)) => commands::execute_analyze(&args, &pipeline, &formatter)?,
        Some(Command::Config(_)) => unreachable!(),
    };

    println!("{}", output);
    Ok(())
}
