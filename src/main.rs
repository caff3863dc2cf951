use armory_cli::{cli::Cli, config};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    if let Err(e) = armory_cli::run_command(cli.command, &config, cli.quiet) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
