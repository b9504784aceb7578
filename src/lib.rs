//! tomatick - a terminal stopwatch and Pomodoro focus timer
//!
//! A stopwatch for total study time next to a 25 minute focus / 5 minute
//! break countdown, with a desktop notification at every phase change.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TomatickError;
