//! Validate command - run entity rules against a stored user record.

use std::path::Path;

use common::AppResult;

use super::load_user;

/// Load and check the user at `path`; returns whether it is valid.
///
/// Unreadable or malformed files are errors; rule violations are reported
/// on stdout and yield `Ok(false)`.
pub fn execute(path: &Path) -> AppResult<bool> {
    let mut user = load_user(path)?;
    user.prepare_for_save();

    match user.check() {
        Ok(()) => {
            println!("valid");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!("User {} failed validation: {}", user.email(), e);
            println!("invalid: {}", e);
            Ok(false)
        }
    }
}
