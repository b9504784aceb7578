use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomatick")]
#[command(about = "A terminal stopwatch and Pomodoro focus timer")]
#[command(long_about = "tomatick - stopwatch and Pomodoro timer for the terminal

Run without a subcommand to open the dashboard: a stopwatch for tracking
total study time next to a 25 minute focus / 5 minute break countdown.
A desktop notification fires whenever a focus or break phase ends.

QUICK START:
  tomatick                     Open the dashboard
  tomatick focus --cycles 4    Run four Pomodoros in the console
  tomatick stopwatch -l 10m    Count up to ten minutes in the console

DASHBOARD KEYS:
  Tab / arrows   Select the stopwatch or focus panel
  s / Space      Start or pause the selected timer
  r / R          Reset the selected timer / both timers
  q / Esc        Quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for headless commands
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to an alternative config file
    #[arg(long, global = true, env = "TOMATICK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(alias = "ui")]
    Dashboard,

    /// Run the Pomodoro countdown in the console
    ///
    /// Each phase starts automatically. Prints the countdown once a minute
    /// and a banner plus desktop notification when a phase ends.
    ///
    /// # Examples
    ///
    ///   tomatick focus               Run until interrupted
    ///   tomatick focus --cycles 2    Stop after two focus phases
    ///   tomatick focus -o json       Stream events as JSON lines
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Run the stopwatch in the console
    ///
    /// # Examples
    ///
    ///   tomatick stopwatch             Count until interrupted
    ///   tomatick stopwatch --limit 90s Stop after 90 seconds
    #[command(alias = "sw")]
    Stopwatch(StopwatchArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: tomatick completions zsh > ~/.zsh/completions/_tomatick
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args)]
pub struct FocusArgs {
    /// Stop after this many completed focus phases
    #[arg(long, short = 'c', value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: Option<u32>,
}

#[derive(Args)]
pub struct StopwatchArgs {
    /// Stop once this much time has elapsed (e.g. 90s, 25m, 1h30m)
    #[arg(long, short = 'l')]
    pub limit: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
