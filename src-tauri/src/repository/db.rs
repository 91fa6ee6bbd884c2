//! Database Connection and Setup
//!
//! Manages SQLite database connection, migrations and first-run seeding.

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::House;

/// Shared connection slot, empty until `init_db` has run
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
    pub db_path: PathBuf,
}

impl DbState {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            db_path,
        }
    }
}

/// Open the database (`:memory:` for an in-memory one) and run migrations
pub async fn init_db(db_path: &PathBuf) -> Result<DbState, String> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    let state = DbState::new(db_path.clone());
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS houses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            address TEXT NOT NULL,
            country TEXT NOT NULL,
            price INTEGER NOT NULL,
            photo TEXT,
            description TEXT,
            updated_at INTEGER
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

/// Houses listed on first run
pub fn seed_houses() -> Vec<House> {
    vec![
        House::new(0, "12 Valley of Kings, Geneva".into(), "Switzerland".into(), 900_000)
            .with_photo("277667")
            .with_description("Lakeside villa with a view of the Alps."),
        House::new(0, "89 Road of Forks, Bern".into(), "Switzerland".into(), 500_000)
            .with_photo("462358")
            .with_description("Family home close to the old town."),
        House::new(0, "Grote Hof 12, Amsterdam".into(), "The Netherlands".into(), 200_500)
            .with_photo("259600")
            .with_description("Canal house with a small garden."),
        House::new(0, "Meel Kade 321, The Hague".into(), "The Netherlands".into(), 259_500)
            .with_photo("534182"),
        House::new(0, "Oude Gracht 32, Utrecht".into(), "The Netherlands".into(), 400_500)
            .with_photo("164558")
            .with_description("Restored warehouse apartment on the canal."),
    ]
}
