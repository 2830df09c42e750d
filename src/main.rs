//! Gradebook binary entrypoint.
//!
//! Parses the CLI, initializes logging, and dispatches subcommands.

use clap::Parser;
use gradebook::cli::{Cli, Commands};
use gradebook::{config, output};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let roster_path = match config::resolve_roster_path(cli.file.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Add(cmd) => cmd.execute(&roster_path, cli.quiet),
        Commands::Remove(cmd) => cmd.execute(&roster_path, cli.quiet),
        Commands::Set(cmd) => cmd.execute(&roster_path, cli.quiet),
        Commands::List(cmd) => cmd.execute(&roster_path),
        Commands::Show(cmd) => cmd.execute(&roster_path),
        Commands::Search(cmd) => cmd.execute(&roster_path),
        Commands::Filter(cmd) => cmd.execute(&roster_path),
        Commands::Stats(cmd) => cmd.execute(&roster_path),
        Commands::Config(cmd) => cmd.execute(cli.quiet),
    };

    if let Err(e) = result {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber, honoring RUST_LOG when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "gradebook=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
