//! Shop Model (제휴 정비소)

use serde::{Deserialize, Serialize};

/// A partner repair shop
///
/// Immutable reference data from the partner catalog; never mutated by
/// the booking engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub region: String,
    pub address: String,
    pub phone: String,
    /// Customer rating, 0.0 - 5.0
    pub rating: f64,
    pub description: String,
}
