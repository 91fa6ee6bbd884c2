//! House Repository
//!
//! SQLite-backed implementation of the house catalogue.

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Row};

use crate::domain::{House, DomainError, DomainResult};
use super::db::{seed_houses, SharedConnection};
use super::traits::Repository;

const HOUSE_COLUMNS: &str = "id, address, country, price, photo, description";

pub struct HouseRepository {
    conn: SharedConnection,
}

impl HouseRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert the demo catalogue if the table is empty. Returns rows added.
    pub async fn seed_if_empty(&self) -> DomainResult<u32> {
        if self.count().await? > 0 {
            return Ok(0);
        }
        let mut added = 0;
        for house in seed_houses() {
            self.create(&house).await?;
            added += 1;
        }
        Ok(added)
    }
}

fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

fn row_to_house(row: &Row<'_>) -> rusqlite::Result<House> {
    let price: i64 = row.get(3)?;
    Ok(House {
        id: row.get(0)?,
        address: row.get(1)?,
        country: row.get(2)?,
        price: u64::try_from(price).map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?,
        photo: row.get(4)?,
        description: row.get(5)?,
    })
}

#[async_trait]
impl Repository<House> for HouseRepository {
    async fn create(&self, entity: &House) -> DomainResult<House> {
        entity.validate()?;
        let price = i64::try_from(entity.price)
            .map_err(|_| DomainError::InvalidInput(format!("price {} out of range", entity.price)))?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO houses (address, country, price, photo, description, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![entity.address, entity.country, price, entity.photo, entity.description, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        let rowid = conn.last_insert_rowid();
        created.id = u32::try_from(rowid)
            .map_err(|_| DomainError::Internal(format!("house id {} out of range", rowid)))?;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<House>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM houses WHERE id = ?", HOUSE_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], row_to_house)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(house) => house.map(Some).map_err(|e| DomainError::Internal(e.to_string())),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<House>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM houses ORDER BY id", HOUSE_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let houses = stmt
            .query_map([], row_to_house)
            .map_err(|e| DomainError::Internal(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(houses)
    }

    async fn count(&self) -> DomainResult<u32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row("SELECT COUNT(*) FROM houses", [], |row| row.get(0))
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}
