//! redb-based storage layer for the appointment store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `appointments` | `(date, hour)` | `Appointment` | One record per occupied slot |
//!
//! A (date, hour) key with no record is an AVAILABLE slot; the table only
//! ever holds REQUESTED and CONFIRMED appointments. redb admits a single
//! write transaction at a time, so a check-then-insert inside one
//! transaction is a compare-and-swap on the slot: concurrent requests for
//! the same slot serialize, and the loser observes the winner's record.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`; a commit that returned is
//! persistent across power loss, and the file is always in a consistent
//! state (copy-on-write with atomic pointer swap).

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
    WriteTransaction,
};
use shared::booking::{Appointment, SlotTime};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Appointments: key = (ISO date, hour), value = JSON-serialized Appointment
const APPOINTMENTS_TABLE: TableDefinition<(&str, u8), &[u8]> =
    TableDefinition::new("appointments");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
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

pub type StorageResult<T> = Result<T, StorageError>;

/// ISO key for a calendar date
fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Appointment storage backed by redb
#[derive(Clone)]
pub struct BookingStorage {
    db: Arc<Database>,
}

impl BookingStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APPOINTMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APPOINTMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    ///
    /// Blocks while another write transaction is open; this is the
    /// serialization point for all slot transitions.
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Slot Operations (within transaction) ==========

    /// Get the appointment occupying a slot, if any (within transaction)
    pub fn get_slot_txn(
        &self,
        txn: &WriteTransaction,
        date: NaiveDate,
        time: SlotTime,
    ) -> StorageResult<Option<Appointment>> {
        let table = txn.open_table(APPOINTMENTS_TABLE)?;
        let key = (date_key(date), time.hour());

        match table.get((key.0.as_str(), key.1))? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Store an appointment on its slot (within transaction)
    ///
    /// Overwrites whatever holds the key; callers enforce the
    /// one-appointment-per-slot rule before writing.
    pub fn put_slot_txn(
        &self,
        txn: &WriteTransaction,
        appointment: &Appointment,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(APPOINTMENTS_TABLE)?;
        let key = (date_key(appointment.date), appointment.time.hour());
        let value = serde_json::to_vec(appointment)?;
        table.insert((key.0.as_str(), key.1), value.as_slice())?;
        Ok(())
    }

    /// Remove the appointment from a slot, returning it (within transaction)
    pub fn remove_slot_txn(
        &self,
        txn: &WriteTransaction,
        date: NaiveDate,
        time: SlotTime,
    ) -> StorageResult<Option<Appointment>> {
        let mut table = txn.open_table(APPOINTMENTS_TABLE)?;
        let key = (date_key(date), time.hour());

        match table.remove((key.0.as_str(), key.1))? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    // ========== Slot Operations (read-only) ==========

    /// Get the appointment occupying a slot, if any
    pub fn get_slot(&self, date: NaiveDate, time: SlotTime) -> StorageResult<Option<Appointment>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APPOINTMENTS_TABLE)?;
        let key = (date_key(date), time.hour());

        match table.get((key.0.as_str(), key.1))? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All appointments stored for a date, hour ascending
    ///
    /// Sorted explicitly so the result does not depend on storage
    /// iteration order.
    pub fn appointments_for(&self, date: NaiveDate) -> StorageResult<Vec<Appointment>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APPOINTMENTS_TABLE)?;

        let key = date_key(date);
        let range_start = (key.as_str(), 0u8);
        let range_end = (key.as_str(), u8::MAX);

        let mut appointments = Vec::new();
        for result in table.range(range_start..=range_end)? {
            let (_key, value) = result?;
            let appointment: Appointment = serde_json::from_slice(value.value())?;
            appointments.push(appointment);
        }

        appointments.sort_by_key(|a| a.time);
        Ok(appointments)
    }

    /// Total number of stored appointments (for health reporting)
    pub fn appointment_count(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APPOINTMENTS_TABLE)?;
        Ok(table.len()?)
    }
}
