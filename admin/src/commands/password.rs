//! Password commands - hash and verify credentials for seeding accounts.

use common::{AdminConfig, AppResult};
use domain::Password;

/// Hash `plain` and print the PHC string.
pub fn hash(plain: &str, config: &AdminConfig) -> AppResult<()> {
    let password = Password::with_min_length(plain, config.min_password_length)?;
    tracing::info!("Generated password hash");
    println!("{}", password.as_str());
    Ok(())
}

/// Print whether `plain` matches `hash`; returns the outcome.
pub fn verify(plain: &str, hash: &str) -> bool {
    let matched = Password::from_hash(hash).verify(plain);
    println!("{}", if matched { "match" } else { "no match" });
    matched
}
