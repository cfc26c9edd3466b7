//! Maintenance History Model (정비 이력)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed service on a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub vehicle_number: String,
    /// Odometer reading at service time, km
    pub mileage: u32,
    pub service_type: String,
    pub memo: String,
}
