//! JSON output formatting for tomatick.

use serde::Serialize;

use crate::error::TomatickError;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `TomatickError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomatickError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize any value as a single JSON line, for streamed events.
///
/// # Errors
///
/// Returns `TomatickError::Parse` if JSON serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, TomatickError> {
    Ok(serde_json::to_string(value)?)
}
