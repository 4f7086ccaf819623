//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Front-of-house staff taking and handing out orders
pub const ROLE_BARISTA: &str = "barista";

/// Kitchen staff preparing orders
pub const ROLE_BAKER: &str = "baker";

/// Administrator role with access to user and product management
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_BARISTA, ROLE_BAKER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

/// All known roles, in display order
pub fn all_roles() -> &'static [&'static str] {
    VALID_ROLES
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
