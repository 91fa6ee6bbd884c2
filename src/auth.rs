//! Authentication State
//!
//! Typed view of the backend auth collaborator. The frontend never handles
//! credentials or tokens beyond forwarding the login form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::AuthSnapshot;

pub const LOADING: &str = "isLoading";
pub const LOADED: &str = "loaded";
pub const HAS_ERRORED: &str = "hasErrored";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated { name: String },
    Unauthenticated,
    /// Anything the collaborator reports that fits none of the above
    Invalid { detail: String },
}

impl AuthStatus {
    pub fn from_snapshot(snapshot: &AuthSnapshot) -> Self {
        match snapshot.loading_state.as_str() {
            LOADING => AuthStatus::Loading,
            LOADED if snapshot.is_authenticated => match snapshot.name.as_deref() {
                Some(name) if !name.is_empty() => AuthStatus::Authenticated { name: name.to_string() },
                _ => AuthStatus::Invalid {
                    detail: "authenticated without a name claim".to_string(),
                },
            },
            LOADED => AuthStatus::Unauthenticated,
            HAS_ERRORED => AuthStatus::Invalid {
                detail: "the auth service reported an error".to_string(),
            },
            other => AuthStatus::Invalid {
                detail: format!("unknown loading state '{}'", other),
            },
        }
    }

    pub fn name_claim(&self) -> Option<&str> {
        match self {
            AuthStatus::Authenticated { name } => Some(name),
            _ => None,
        }
    }
}

/// What the authentication gate renders for a status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthView {
    Loading,
    Greeting { name: String },
    LoginPrompt,
    Error { detail: String },
}

impl AuthView {
    pub fn from_status(status: &AuthStatus) -> Self {
        match status {
            AuthStatus::Loading => AuthView::Loading,
            AuthStatus::Authenticated { name } => AuthView::Greeting { name: name.clone() },
            AuthStatus::Unauthenticated => AuthView::LoginPrompt,
            AuthStatus::Invalid { detail } => AuthView::Error { detail: detail.clone() },
        }
    }

    pub fn shows_login(&self) -> bool {
        matches!(self, AuthView::LoginPrompt)
    }

    pub fn shows_logout(&self) -> bool {
        matches!(self, AuthView::Greeting { .. })
    }

    pub fn name_claim(&self) -> Option<&str> {
        match self {
            AuthView::Greeting { name } => Some(name),
            _ => None,
        }
    }
}

/// Reactive handle over the auth commands, provided via context
#[derive(Clone, Copy)]
pub struct AuthClient {
    pub status: ReadSignal<AuthStatus>,
    set_status: WriteSignal<AuthStatus>,
}

impl AuthClient {
    pub fn new() -> Self {
        let (status, set_status) = signal(AuthStatus::Loading);
        Self { status, set_status }
    }

    fn apply(&self, result: Result<AuthSnapshot, String>) {
        let status = match result {
            Ok(snapshot) => AuthStatus::from_snapshot(&snapshot),
            Err(e) => {
                web_sys::console::log_1(&format!("[AUTH] Request failed: {}", e).into());
                AuthStatus::Invalid { detail: e }
            }
        };
        self.set_status.set(status);
    }

    /// Asks the backend for the current session
    pub fn refresh(&self) {
        let client = *self;
        client.set_status.set(AuthStatus::Loading);
        spawn_local(async move {
            client.apply(commands::auth_status().await);
        });
    }

    pub fn login(&self, email: String, password: String) {
        let client = *self;
        client.set_status.set(AuthStatus::Loading);
        spawn_local(async move {
            match commands::login(&email, &password).await {
                Ok(snapshot) => client.apply(Ok(snapshot)),
                Err(e) => {
                    // Bad credentials leave the user signed out
                    web_sys::console::log_1(&format!("[AUTH] Login rejected: {}", e).into());
                    client.set_status.set(AuthStatus::Unauthenticated);
                }
            }
        });
    }

    pub fn logout(&self) {
        let client = *self;
        spawn_local(async move {
            client.apply(commands::logout().await);
        });
    }
}
