//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// House listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: u32,
    pub address: String,
    pub country: String,
    /// Asking price in whole US dollars
    pub price: u64,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl House {
    pub fn new(id: u32, address: &str, country: &str, price: u64) -> Self {
        Self {
            id,
            address: address.to_string(),
            country: country.to_string(),
            price,
            photo: None,
            description: None,
        }
    }
}

/// Auth state as reported by the backend auth commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub loading_state: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_deserializes_without_photo() {
        let json = r#"{"id":1,"address":"12 Valley of Kings, Geneva","country":"Switzerland","price":900000}"#;
        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.id, 1);
        assert_eq!(house.photo, None);
        assert_eq!(house.description, None);
    }

    #[test]
    fn test_auth_snapshot_uses_camel_case() {
        let json = r#"{"isAuthenticated":true,"loadingState":"loaded","name":"Vivek"}"#;
        let snapshot: AuthSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.loading_state, "loaded");
        assert_eq!(snapshot.name.as_deref(), Some("Vivek"));
    }
}
