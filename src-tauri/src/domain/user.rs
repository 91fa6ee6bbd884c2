//! User Accounts and Auth Snapshots

use serde::{Deserialize, Serialize};

pub const LOADED: &str = "loaded";

/// Account allowed to sign in, as stored in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub name: String,
    pub role: String,
    /// BLAKE3 digest of the password, hex encoded
    pub password_blake3: String,
}

impl UserAccount {
    pub fn new(email: &str, name: &str, role: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            password_blake3: blake3::hash(password.as_bytes()).to_hex().to_string(),
        }
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    /// Compares digests in constant time
    pub fn verify_password(&self, password: &str) -> bool {
        match blake3::Hash::from_hex(&self.password_blake3) {
            Ok(stored) => stored == blake3::hash(password.as_bytes()),
            Err(_) => false,
        }
    }
}

/// What the frontend sees of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub loading_state: String,
    pub name: Option<String>,
}

impl AuthSnapshot {
    pub fn signed_in(name: &str) -> Self {
        Self {
            is_authenticated: true,
            loading_state: LOADED.to_string(),
            name: Some(name.to_string()),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            loading_state: LOADED.to_string(),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_verification() {
        let user = UserAccount::new("vivek@example.com", "Vivek", "admin", "test123");
        assert!(user.verify_password("test123"));
        assert!(!user.verify_password("test124"));
    }

    #[test]
    fn test_corrupt_digest_never_matches() {
        let mut user = UserAccount::new("a@b.c", "A", "user", "pw");
        user.password_blake3 = "not-hex".into();
        assert!(!user.verify_password("pw"));
    }

    #[test]
    fn test_email_match_ignores_case() {
        let user = UserAccount::new("vivek@example.com", "Vivek", "admin", "x");
        assert!(user.matches_email(" Vivek@Example.com "));
    }

    #[test]
    fn test_snapshot_wire_format() {
        let json = serde_json::to_value(AuthSnapshot::signed_in("Vivek")).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["loadingState"], "loaded");
        assert_eq!(json["name"], "Vivek");
    }
}
