//! Auth Service
//!
//! Holds the signed-in session for this app instance. One desktop user at
//! a time; logging in replaces any existing session.

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::domain::{AuthSnapshot, DomainError, DomainResult, UserAccount};
use super::token::{Claims, TokenSigner};

pub struct AuthService {
    users: Vec<UserAccount>,
    signer: TokenSigner,
    ttl_seconds: i64,
    session: Mutex<Option<String>>,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            users: config.users.clone(),
            signer: TokenSigner::new(&config.session_secret),
            ttl_seconds: config.session_ttl_minutes.saturating_mul(60),
            session: Mutex::new(None),
        }
    }

    /// Check credentials and start a session valid from `now`
    pub async fn login(&self, email: &str, password: &str, now: i64) -> DomainResult<AuthSnapshot> {
        let user = self
            .users
            .iter()
            .find(|u| u.matches_email(email))
            .filter(|u| u.verify_password(password))
            .ok_or_else(|| DomainError::Unauthorized("Invalid credentials".into()))?;

        let claims = Claims {
            sub: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            nbf: now,
            exp: now.saturating_add(self.ttl_seconds),
        };
        let token = self.signer.sign(&claims)?;
        *self.session.lock().await = Some(token);

        log::info!("Signed in {}", user.email);
        Ok(AuthSnapshot::signed_in(&user.name))
    }

    pub async fn logout(&self) -> AuthSnapshot {
        if self.session.lock().await.take().is_some() {
            log::info!("Signed out");
        }
        AuthSnapshot::signed_out()
    }

    /// Current session; an invalid or expired token signs the user out
    pub async fn status(&self, now: i64) -> AuthSnapshot {
        let mut guard = self.session.lock().await;
        let Some(token) = guard.as_deref() else {
            return AuthSnapshot::signed_out();
        };
        match self.signer.verify(token, now) {
            Ok(claims) => AuthSnapshot::signed_in(&claims.name),
            Err(e) => {
                log::info!("Dropping session: {}", e);
                *guard = None;
                AuthSnapshot::signed_out()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&AppConfig {
            session_secret: "test-secret".into(),
            ..AppConfig::default()
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let auth = service();
        let snapshot = auth.login("vivek@example.com", "test123", 1_000).await.unwrap();
        assert_eq!(snapshot, AuthSnapshot::signed_in("Vivek"));
        assert_eq!(auth.status(1_001).await, AuthSnapshot::signed_in("Vivek"));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let auth = service();
        let result = auth.login("vivek@example.com", "nope", 1_000).await;
        assert!(matches!(result, Err(DomainError::Unauthorized(_))));
        assert_eq!(auth.status(1_000).await, AuthSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let auth = service();
        assert!(auth.login("someone@example.com", "test123", 0).await.is_err());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let auth = service();
        auth.login("vivek@example.com", "test123", 1_000).await.unwrap();
        assert_eq!(auth.logout().await, AuthSnapshot::signed_out());
        assert_eq!(auth.status(1_001).await, AuthSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_expired_session_signs_out() {
        let auth = service();
        auth.login("vivek@example.com", "test123", 1_000).await.unwrap();

        let after_ttl = 1_000 + 60 * 60;
        assert_eq!(auth.status(after_ttl).await, AuthSnapshot::signed_out());
        // Dropped for good, not just hidden
        assert_eq!(auth.status(1_001).await, AuthSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_huge_ttl_does_not_overflow() {
        let auth = AuthService::new(&AppConfig {
            session_secret: "test-secret".into(),
            session_ttl_minutes: i64::MAX,
            ..AppConfig::default()
        });
        auth.login("vivek@example.com", "test123", 1_000).await.unwrap();
        assert_eq!(auth.status(i64::MAX - 1).await, AuthSnapshot::signed_in("Vivek"));
    }
}
