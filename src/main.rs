use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bijbelquiz_refs::cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bijbelquiz_refs=debug,info")
    } else {
        EnvFilter::new("bijbelquiz_refs=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let catalog = cli.catalog.as_deref();

    match cli.command {
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, catalog, cli.verbose)?;
        }
        cli::Commands::Update(args) => {
            cli::update::run(args, cli.format, catalog, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, catalog, cli.verbose)?;
        }
        cli::Commands::Books(args) => {
            cli::books::run(args, cli.format, catalog, cli.verbose)?;
        }
    }

    Ok(())
}
