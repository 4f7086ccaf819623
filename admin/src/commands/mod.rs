//! Command implementations, one module per subcommand family.

pub mod compare;
pub mod password;
pub mod validate;

use std::fs;
use std::path::Path;

use common::AppResult;
use domain::User;

/// Read a user record from a JSON file.
pub fn load_user(path: &Path) -> AppResult<User> {
    tracing::debug!("Reading user from {}", path.display());
    let raw = fs::read_to_string(path)?;
    let user = serde_json::from_str(&raw)?;
    Ok(user)
}
