use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tomatick::cli::args::{Cli, Commands};
use tomatick::cli::commands;
use tomatick::config::{Config, LoggingConfig, Paths};
use tomatick::features::notify::DesktopNotifier;
use tomatick::logging::{self, LogTarget};
use tomatick::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let command = cli.command.unwrap_or(Commands::Dashboard);

    // Neither needs a readable config; `config init --force` replaces a broken one.
    match command {
        Commands::Config(args) => {
            logging::init(&LoggingConfig::default(), &paths, LogTarget::Stderr)
                .context("setting up logging")?;
            let format = cli
                .output
                .or_else(|| {
                    Config::load_from_path(&config_path)
                        .ok()
                        .map(|c| c.general.default_output)
                })
                .unwrap_or_default();
            println!("{}", commands::config(&args.command, &config_path, format)?);
            return Ok(());
        }
        Commands::Completions { shell, install } => {
            print!("{}", commands::completions(shell, install)?);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let target = match command {
        Commands::Dashboard => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&config.logging, &paths, target).context("setting up logging")?;

    let notifier = DesktopNotifier::from_config(&config.notifications);

    match command {
        Commands::Dashboard => tui::run(&notifier)?,
        Commands::Focus(args) => {
            commands::focus(&args, &notifier, &mut std::io::stdout(), format)?;
        }
        Commands::Stopwatch(args) => {
            commands::stopwatch(&args, &mut std::io::stdout(), format)?;
        }
        Commands::Config(_) | Commands::Completions { .. } => {}
    }

    Ok(())
}
