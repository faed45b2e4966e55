//! SQLite record store for accounts
//!
//! Wraps a small connection pool around a single `activities` table.
//! The schema is ensured on open (idempotent CREATE TABLE IF NOT
//! EXISTS). All operations are single statements; there is no
//! application-level locking - concurrent writers are serialized by
//! SQLite itself.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::models::Account;

/// Maximum connections for the pool.
/// Kept low for single-user tooling.
const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS activities (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT,
    email TEXT
)";

/// Record store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be opened or the schema could not be
    /// ensured. Fatal at startup.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// An insert or delete faulted.
    #[error("write failed: {0}")]
    Write(#[source] sqlx::Error),

    /// A read query faulted. An empty result is not an error.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// No row matched the requested name.
    #[error("no account named '{name}'")]
    NotFound { name: String },
}

/// Durable CRUD over the `activities` table.
///
/// Cheap to clone; clones share the pool. Handlers receive a `Store`
/// through application state, never a module-level singleton.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open or create the database file at the given path and ensure
    /// the schema exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    ///
    /// Pinned to a single connection: every pool connection would
    /// otherwise get its own private `:memory:` database.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Unavailable)?;
        Ok(())
    }

    /// Append a new row, returning its rowid.
    pub async fn insert(&self, account: &Account) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO activities (name, email) VALUES (?, ?)")
            .bind(&account.name)
            .bind(&account.email)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        Ok(result.last_insert_rowid())
    }

    /// Return the account with the given name.
    ///
    /// When duplicate names exist the most recent insertion wins
    /// (ORDER BY id DESC). Zero matches is `NotFound`.
    pub async fn retrieve(&self, name: &str) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            "SELECT name, email FROM activities WHERE name = ? ORDER BY id DESC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?
        .ok_or_else(|| StoreError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Return at most `limit` accounts after skipping `offset`, newest
    /// first. An empty result is not an error.
    pub async fn retrieve_list(&self, limit: i64, offset: i64) -> Result<Vec<Account>, StoreError> {
        sqlx::query_as::<_, Account>(
            "SELECT name, email FROM activities ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)
    }

    /// Delete every row matching `name`, returning the number of rows
    /// removed. Deleting an absent name is a no-op, not an error.
    pub async fn delete(&self, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM activities WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, email: &str) -> Account {
        Account {
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }

    #[tokio::test]
    async fn insert_then_retrieve() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("Alice", "a@x.com")).await.unwrap();

        let got = store.retrieve("Alice").await.unwrap();
        assert_eq!(got, account("Alice", "a@x.com"));
    }

    #[tokio::test]
    async fn retrieve_missing_is_not_found() {
        let store = Store::open_in_memory().await.unwrap();

        let err = store.retrieve("Nobody").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref name } if name == "Nobody"));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_bounded() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("Alice", "a@x.com")).await.unwrap();
        store.insert(&account("Bob", "b@x.com")).await.unwrap();
        store.insert(&account("Carol", "c@x.com")).await.unwrap();

        let all = store.retrieve_list(100, 0).await.unwrap();
        let names: Vec<_> = all.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Bob", "Alice"]);

        let page = store.retrieve_list(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Carol");

        let rest = store.retrieve_list(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Alice");
    }

    #[tokio::test]
    async fn empty_list_is_ok() {
        let store = Store::open_in_memory().await.unwrap();
        assert!(store.retrieve_list(100, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_retrieve_is_not_found() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("Alice", "a@x.com")).await.unwrap();

        let removed = store.delete("Alice").await.unwrap();
        assert_eq!(removed, 1);
        assert!(matches!(
            store.retrieve("Alice").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_a_noop() {
        let store = Store::open_in_memory().await.unwrap();
        assert_eq!(store.delete("Nobody").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_removes_all_duplicates() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("Alice", "a@x.com")).await.unwrap();
        store.insert(&account("Alice", "alice@y.com")).await.unwrap();
        store.insert(&account("Bob", "b@x.com")).await.unwrap();

        assert_eq!(store.delete("Alice").await.unwrap(), 2);
        assert_eq!(store.retrieve_list(100, 0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_names_retrieve_most_recent() {
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("Alice", "old@x.com")).await.unwrap();
        store.insert(&account("Alice", "new@x.com")).await.unwrap();

        let got = store.retrieve("Alice").await.unwrap();
        assert_eq!(got.email, "new@x.com");
    }

    #[tokio::test]
    async fn empty_fields_are_stored_verbatim() {
        // The store performs no validation; the HTTP layer does.
        let store = Store::open_in_memory().await.unwrap();
        store.insert(&account("", "")).await.unwrap();

        let got = store.retrieve("").await.unwrap();
        assert_eq!(got, account("", ""));
    }

    #[tokio::test]
    async fn concurrent_inserts_lose_nothing() {
        let store = Store::open_in_memory().await.unwrap();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert(&Account {
                            name: format!("user{i}"),
                            email: format!("user{i}@x.com"),
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked").expect("insert failed");
        }

        let all = store.retrieve_list(10, 0).await.unwrap();
        assert_eq!(all.len(), 10);
        for i in 0..10 {
            assert!(all.iter().any(|a| a.name == format!("user{i}")));
        }
    }

    #[tokio::test]
    async fn open_creates_file_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rolodex.db");

        {
            let store = Store::open(&path).await.unwrap();
            store.insert(&account("Alice", "a@x.com")).await.unwrap();
        }
        assert!(path.exists());

        // Reopen: schema creation is idempotent, data persists.
        let store = Store::open(&path).await.unwrap();
        let got = store.retrieve("Alice").await.unwrap();
        assert_eq!(got.email, "a@x.com");
    }
}
