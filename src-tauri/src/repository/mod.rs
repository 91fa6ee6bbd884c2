//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod house_repo;


pub use traits::Repository;
pub use db::{init_db, DbState};
pub use house_repo::HouseRepository;
