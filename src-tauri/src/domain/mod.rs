//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization
//! and blake3 for password digests).

mod entity;
mod house;
mod user;

pub use entity::{Entity, DomainError, DomainResult};
pub use house::House;
pub use user::{AuthSnapshot, UserAccount};
