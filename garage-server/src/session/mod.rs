//! Session and favorites store
//!
//! Locally persisted key-value state, the explicit replacement for what
//! the product kept in browser storage:
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `session` | `"user"` | `UserAccount` | The signed-in user, absent when logged out |
//! | `favorite_shops` | shop id | `()` | Bookmarked shop set |
//!
//! Favorites persist independently of authentication; logout clears the
//! user record only.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::error::AppError;
use shared::models::UserAccount;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Session: key = "user", value = JSON-serialized UserAccount
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// Favorites: key = shop id, value = empty (existence check)
const FAVORITES_TABLE: TableDefinition<&str, ()> = TableDefinition::new("favorite_shops");

const USER_KEY: &str = "user";

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        tracing::error!(error = %err, "Session store error");
        AppError::database(err.to_string())
    }
}

/// Session + favorites store backed by redb
#[derive(Clone)]
pub struct SessionStore {
    db: Arc<Database>,
}

impl SessionStore {
    /// Open or create the store at the given path
    pub fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
            let _ = write_txn.open_table(FAVORITES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> SessionResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
            let _ = write_txn.open_table(FAVORITES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Session ==========

    /// Store the signed-in user, replacing any previous session
    pub fn login(&self, user: &UserAccount) -> SessionResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            let value = serde_json::to_vec(user)?;
            table.insert(USER_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Clear the session; returns whether a user was signed in
    pub fn logout(&self) -> SessionResult<bool> {
        let txn = self.db.begin_write()?;
        let was_signed_in = {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.remove(USER_KEY)?.is_some()
        };
        txn.commit()?;
        Ok(was_signed_in)
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> SessionResult<Option<UserAccount>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(USER_KEY)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    // ========== Favorites ==========

    /// Toggle a shop in the favorite set; returns the new membership
    pub fn toggle_favorite(&self, shop_id: &str) -> SessionResult<bool> {
        let txn = self.db.begin_write()?;
        let now_favorite = {
            let mut table = txn.open_table(FAVORITES_TABLE)?;
            if table.remove(shop_id)?.is_some() {
                false
            } else {
                table.insert(shop_id, ())?;
                true
            }
        };
        txn.commit()?;
        Ok(now_favorite)
    }

    /// Whether a shop is in the favorite set
    pub fn is_favorite(&self, shop_id: &str) -> SessionResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FAVORITES_TABLE)?;
        Ok(table.get(shop_id)?.is_some())
    }

    /// All favorite shop ids
    pub fn favorite_ids(&self) -> SessionResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FAVORITES_TABLE)?;

        let mut ids = Vec::new();
        for result in table.iter()? {
            let (key, _value) = result?;
            ids.push(key.value().to_string());
        }
        Ok(ids)
    }
}
