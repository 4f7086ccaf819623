//! User domain entity.
//!
//! Two users are the same value when their email, first name, last name and
//! role match. The password hash, identifier, version, lock flag and audit
//! timestamps are carried along but never compared.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::constants::{all_roles, is_valid_role, ROLE_ADMIN};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Fields reported by [`User::check`], in the order they are examined.
const CHECKED_FIELDS: &[&str] = &["email", "first_name", "last_name", "password_hash", "role"];

/// Back-office account of a bakery employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    version: u32,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    email: String,
    #[serde(default, skip_serializing)]
    #[validate(length(min = 1, max = 255, message = "Password hash is required"))]
    password_hash: String,
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    last_name: String,
    #[validate(length(min = 1, max = 255, message = "Role is required"))]
    role: String,
    #[serde(default)]
    locked: bool,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create an empty, unlocked user with no identifier.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            version: 0,
            email: String::new(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: String::new(),
            locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The fields that define user identity, in comparison order.
    pub fn equality_key(&self) -> (&str, &str, &str, &str) {
        (&self.email, &self.first_name, &self.last_name, &self.role)
    }

    /// Digest of [`User::equality_key`]; equal users yield equal codes.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_id(&mut self, id: Uuid) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = email.into();
        self
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) -> &mut Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Store the hash of an already-hashed password.
    pub fn set_password(&mut self, password: &Password) -> &mut Self {
        self.password_hash = password.as_str().to_string();
        self
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> &mut Self {
        self.first_name = first_name.into();
        self
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> &mut Self {
        self.last_name = last_name.into();
        self
    }

    pub fn set_role(&mut self, role: impl Into<String>) -> &mut Self {
        self.role = role.into();
        self
    }

    pub fn set_locked(&mut self, locked: bool) -> &mut Self {
        self.locked = locked;
        self
    }

    /// Display name, e.g. "Malin Castro"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Normalize the record before it is stored.
    ///
    /// Emails are kept trimmed and lowercase so lookups are case-insensitive.
    pub fn prepare_for_save(&mut self) {
        self.email = self.email.trim().to_lowercase();
        self.version = self.version.saturating_add(1);
        self.updated_at = Utc::now();
    }

    /// Run field validation plus the business rules the derive cannot express.
    ///
    /// # Errors
    /// Returns the first failing field's message as a validation error.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|e| DomainError::validation(first_message(&e)))?;

        if self.first_name.trim().is_empty() {
            return Err(DomainError::validation("First name is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DomainError::validation("Last name is required"));
        }
        if !is_valid_role(&self.role) {
            return Err(DomainError::validation(format!(
                "Unknown role: {} (expected one of {})",
                self.role,
                all_roles().join(", ")
            )));
        }

        Ok(())
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.equality_key() == other.equality_key()
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality_key().hash(state);
    }
}

/// First validation message, looking at fields in a fixed order.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    CHECKED_FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .find_map(|errors| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ROLE_BAKER, ROLE_BARISTA};

    fn baker() -> User {
        let mut user = User::new();
        user.set_email("baker@vaadin.com")
            .set_password_hash("$argon2id$v=19$placeholder")
            .set_first_name("Heidi")
            .set_last_name("Carter")
            .set_role(ROLE_BAKER);
        user
    }

    #[test]
    fn test_new_user_is_empty_and_unlocked() {
        let user = User::default();

        assert!(user.id().is_none());
        assert_eq!(user.version(), 0);
        assert_eq!(user.email(), "");
        assert!(!user.is_locked());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_password_hash_ignored_by_equality() {
        let a = baker();
        let mut b = baker();
        b.set_password_hash("something else");

        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_bookkeeping_fields_ignored_by_equality() {
        let a = baker();
        let mut b = baker();
        b.set_id(Uuid::new_v4()).set_locked(true);
        b.prepare_for_save();

        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_each_key_field_breaks_equality() {
        let a = baker();

        let mut b = baker();
        b.set_email("other@vaadin.com");
        assert_ne!(a, b);

        let mut b = baker();
        b.set_first_name("Malin");
        assert_ne!(a, b);

        let mut b = baker();
        b.set_last_name("Castro");
        assert_ne!(a, b);

        let mut b = baker();
        b.set_role(ROLE_BARISTA);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_is_case_sensitive_until_prepared() {
        let a = baker();
        let mut b = baker();
        b.set_email("  Baker@Vaadin.com ");
        assert_ne!(a, b);

        b.prepare_for_save();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prepare_for_save_bumps_version() {
        let mut user = baker();
        let before = user.updated_at();

        user.prepare_for_save();
        user.prepare_for_save();

        assert_eq!(user.version(), 2);
        assert!(user.updated_at() >= before);
    }

    #[test]
    fn test_prepare_for_save_saturates_version() {
        let json = r#"{
            "version": 4294967295,
            "email": "baker@vaadin.com",
            "password_hash": "hash",
            "first_name": "Heidi",
            "last_name": "Carter",
            "role": "baker"
        }"#;
        let mut user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.version(), u32::MAX);

        user.prepare_for_save();

        assert_eq!(user.version(), u32::MAX);
    }

    #[test]
    fn test_full_name_and_admin() {
        let mut user = baker();
        assert_eq!(user.full_name(), "Heidi Carter");
        assert!(!user.is_admin());

        user.set_role(ROLE_ADMIN);
        assert!(user.is_admin());
    }

    #[test]
    fn test_set_password_stores_hash() {
        let password = Password::new("baker1234").unwrap();
        let mut user = baker();
        user.set_password(&password);

        assert_eq!(user.password_hash(), password.as_str());
        assert!(Password::from_hash(user.password_hash()).verify("baker1234"));
    }

    #[test]
    fn test_check_accepts_valid_user() {
        assert!(baker().check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_email() {
        let mut user = baker();
        user.set_email("not-an-email");

        assert_eq!(
            user.check(),
            Err(DomainError::validation("Invalid email format"))
        );
    }

    #[test]
    fn test_check_rejects_blank_names() {
        let mut user = baker();
        user.set_first_name("");
        assert_eq!(
            user.check(),
            Err(DomainError::validation("First name is required"))
        );

        let mut user = baker();
        user.set_last_name("   ");
        assert_eq!(
            user.check(),
            Err(DomainError::validation("Last name is required"))
        );
    }

    #[test]
    fn test_check_rejects_missing_password_hash() {
        let mut user = baker();
        user.set_password_hash("");

        assert_eq!(
            user.check(),
            Err(DomainError::validation("Password hash is required"))
        );
    }

    #[test]
    fn test_check_rejects_unknown_role() {
        let mut user = baker();
        user.set_role("role");

        assert_eq!(
            user.check(),
            Err(DomainError::validation(
                "Unknown role: role (expected one of barista, baker, admin)"
            ))
        );
    }

    #[test]
    fn test_check_rejects_overlong_field() {
        let mut user = baker();
        user.set_last_name("x".repeat(256));

        assert!(user.check().is_err());
    }
}
