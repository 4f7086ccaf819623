//! Compare command - apply user equality to two stored records.

use std::path::Path;

use common::AppResult;
use domain::User;

use super::load_user;

/// Result of comparing two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub equal: bool,
    pub left_hash: u64,
    pub right_hash: u64,
}

impl Comparison {
    pub fn of(left: &User, right: &User) -> Self {
        Self {
            equal: left == right,
            left_hash: left.hash_code(),
            right_hash: right.hash_code(),
        }
    }
}

/// Load both records and print the verdict with each side's hash code.
pub fn execute(left: &Path, right: &Path) -> AppResult<Comparison> {
    let left_user = load_user(left)?;
    let right_user = load_user(right)?;
    let comparison = Comparison::of(&left_user, &right_user);
    tracing::debug!(
        equal = comparison.equal,
        hashes_match = comparison.left_hash == comparison.right_hash,
        "Compared users"
    );

    println!("left:  {} {:016x}", describe(&left_user), comparison.left_hash);
    println!("right: {} {:016x}", describe(&right_user), comparison.right_hash);
    println!("{}", if comparison.equal { "equal" } else { "not equal" });

    Ok(comparison)
}

fn describe(user: &User) -> String {
    format!("<{}> {} [{}]", user.email(), user.full_name(), user.role())
}
