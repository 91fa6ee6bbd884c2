//! House Entity
//!
//! A listing on the market. Records are replaced whole, never patched.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Unique identifier
    pub id: u32,
    pub address: String,
    pub country: String,
    /// Asking price in whole US dollars
    pub price: u64,
    /// Photo id, resolved by the frontend to `<id>.jpeg`
    pub photo: Option<String>,
    pub description: Option<String>,
}

impl House {
    pub fn new(id: u32, address: String, country: String, price: u64) -> Self {
        Self {
            id,
            address,
            country,
            price,
            photo: None,
            description: None,
        }
    }

    pub fn with_photo(mut self, photo: &str) -> Self {
        self.photo = Some(photo.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Rejects records the listing cannot display
    pub fn validate(&self) -> DomainResult<()> {
        if self.address.trim().is_empty() {
            return Err(DomainError::InvalidInput("address is empty".into()));
        }
        if self.country.trim().is_empty() {
            return Err(DomainError::InvalidInput("country is empty".into()));
        }
        Ok(())
    }
}

impl Entity for House {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_creation() {
        let house = House::new(1, "12 Valley of Kings, Geneva".into(), "Switzerland".into(), 900_000)
            .with_photo("277667");
        assert_eq!(house.id(), 1);
        assert_eq!(house.photo.as_deref(), Some("277667"));
        assert!(house.description.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_address() {
        let house = House::new(0, "  ".into(), "USA".into(), 1);
        assert!(matches!(house.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_house_serializes_optional_fields() {
        let house = House::new(2, "A".into(), "B".into(), 3);
        let json = serde_json::to_value(&house).unwrap();
        assert_eq!(json["photo"], serde_json::Value::Null);
        assert_eq!(json["price"], 3);
    }
}
