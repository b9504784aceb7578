//! Timer features for tomatick.
//!
//! - `timer`: stopwatch, pomodoro countdown and the one-second tick source
//! - `notify`: desktop notifications on phase transitions
//! - `completions`: shell completion scripts

pub mod completions;
pub mod notify;
pub mod timer;
