//! Reservation domain model.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque numeric reservation identifier, assigned by the store.
pub type ReservationId = u64;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    Canceled,
}

/// A guest's booking of a hotel for a date range.
///
/// Identity is the `id`: two reservations with the same id compare equal
/// and hash the same regardless of their other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_name: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Create an active reservation.
    pub fn new(
        id: ReservationId,
        guest_name: impl Into<String>,
        hotel_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id,
            guest_name: guest_name.into(),
            hotel_name: hotel_name.into(),
            check_in,
            check_out,
            status: ReservationStatus::Active,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reservation {}

impl Hash for Reservation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
