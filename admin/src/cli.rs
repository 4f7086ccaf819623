//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bakery back-office user tooling
#[derive(Parser, Debug)]
#[command(name = "bakery-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash a plain-text password with Argon2
    HashPassword {
        /// Plain-text password
        #[arg(env = "BAKERY_PASSWORD", hide_env_values = true)]
        plain: String,
    },

    /// Check a plain-text password against a stored hash
    VerifyPassword {
        /// Plain-text password
        plain: String,
        /// Stored Argon2 hash
        hash: String,
    },

    /// Validate a user record stored as JSON
    Validate {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Compare two user records stored as JSON
    Compare {
        /// Path to the first user
        left: PathBuf,
        /// Path to the second user
        right: PathBuf,
    },
}
