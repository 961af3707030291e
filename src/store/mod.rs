//! Spending Store - SQLite-backed persistence
//!
//! Owns the two tables behind the API: registered users and spending
//! entries. The connection is opened without SQLite's internal mutex and
//! serialized behind a tokio mutex instead; handlers hold the lock for a
//! single statement batch at a time.

pub mod error;

pub use error::{StoreError, StoreResult};

use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// A spending entry as stored and served
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpendingRow {
    pub category: String,
    pub amount: f64,
}

/// Store counters for health reporting
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct StoreStats {
    pub users: u64,
    pub spending_rows: u64,
}

/// Mock rows inserted into an empty spending table
const SEED_ROWS: [(&str, f64); 4] = [
    ("Food", 150.50),
    ("Transport", 75.00),
    ("Entertainment", 200.00),
    ("Utilities", 120.00),
];

/// SQLite-backed store for users and spending entries
pub struct SpendStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SpendStore {
    /// Open or create the store at the given path
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    /// Open an in-memory store (tests and ephemeral runs)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;

        init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: PathBuf::from(":memory:"),
        })
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a new user with an already-hashed password
    ///
    /// Returns the new row id, or `StoreError::UsernameTaken` if the
    /// username is already registered.
    pub async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<i64> {
        let conn = self.conn.lock().await;

        let created_at = chrono::Utc::now().to_rfc3339();
        let result = conn.execute(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
            params![username, password_hash, created_at],
        );

        match result {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up the stored password hash for a username
    ///
    /// Returns `None` when the user does not exist; the caller decides how
    /// much of that to reveal.
    pub async fn password_hash(&self, username: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().await;

        let mut stmt =
            conn.prepare_cached("SELECT password_hash FROM users WHERE username = ?")?;

        let mut rows = stmt.query_map(params![username], |row| row.get::<_, String>(0))?;

        match rows.next() {
            Some(hash) => Ok(Some(hash?)),
            None => Ok(None),
        }
    }

    /// List all spending entries in insertion order
    pub async fn list_spending(&self) -> StoreResult<Vec<SpendingRow>> {
        let conn = self.conn.lock().await;

        let mut stmt =
            conn.prepare_cached("SELECT category, amount FROM spending ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(SpendingRow {
                category: row.get(0)?,
                amount: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Insert a spending entry
    pub async fn add_spending(&self, category: &str, amount: f64) -> StoreResult<i64> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO spending (category, amount) VALUES (?, ?)",
            params![category, amount],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert the mock spending rows if the table is empty
    ///
    /// Returns the number of rows inserted (0 when data already exists).
    pub async fn seed_spending(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().await;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM spending", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let mut stmt =
            conn.prepare_cached("INSERT INTO spending (category, amount) VALUES (?, ?)")?;
        for (category, amount) in SEED_ROWS {
            stmt.execute(params![category, amount])?;
        }

        Ok(SEED_ROWS.len())
    }

    /// Row counts for health reporting
    pub async fn stats(&self) -> StoreResult<StoreStats> {
        let conn = self.conn.lock().await;

        let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        let spending_rows: i64 =
            conn.query_row("SELECT COUNT(*) FROM spending", [], |row| row.get(0))?;

        Ok(StoreStats {
            users: users as u64,
            spending_rows: spending_rows as u64,
        })
    }
}

/// Create both tables when missing
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS spending (
            id INTEGER PRIMARY KEY,
            category TEXT NOT NULL,
            amount REAL NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> SpendStore {
        SpendStore::open_in_memory().unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = test_store();

        let id = store.create_user("alice", "salt$hash").await.unwrap();
        assert!(id > 0);

        let hash = store.password_hash("alice").await.unwrap();
        assert_eq!(hash.as_deref(), Some("salt$hash"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_none() {
        let store = test_store();

        let hash = store.password_hash("nobody").await.unwrap();
        assert!(hash.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = test_store();

        store.create_user("alice", "h1").await.unwrap();
        let err = store.create_user("alice", "h2").await.unwrap_err();

        assert!(matches!(err, StoreError::UsernameTaken(name) if name == "alice"));
    }

    #[tokio::test]
    async fn test_seed_spending_once() {
        let store = test_store();

        assert_eq!(store.seed_spending().await.unwrap(), 4);
        // Second call is a no-op
        assert_eq!(store.seed_spending().await.unwrap(), 0);

        let rows = store.list_spending().await.unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].amount, 150.50);
        assert_eq!(rows[2].category, "Entertainment");
    }

    #[tokio::test]
    async fn test_list_spending_in_insertion_order() {
        let store = test_store();

        store.add_spending("Rent", 900.0).await.unwrap();
        store.add_spending("Coffee", 4.50).await.unwrap();

        let rows = store.list_spending().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Rent");
        assert_eq!(rows[1].category, "Coffee");
        assert_eq!(rows[1].amount, 4.50);
    }

    #[tokio::test]
    async fn test_stats() {
        let store = test_store();

        store.create_user("alice", "h").await.unwrap();
        store.seed_spending().await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.users, 1);
        assert_eq!(stats.spending_rows, 4);
    }

    #[tokio::test]
    async fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendwise.db");

        {
            let store = SpendStore::open(&path).unwrap();
            store.create_user("alice", "h").await.unwrap();
        }

        // Reopen and confirm the row survived
        let store = SpendStore::open(&path).unwrap();
        let hash = store.password_hash("alice").await.unwrap();
        assert_eq!(hash.as_deref(), Some("h"));
    }
}
