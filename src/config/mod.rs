//! Configuration management for tomatick.
//!
//! This module handles loading and saving configuration from `~/.tomatick/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, NotificationConfig};
