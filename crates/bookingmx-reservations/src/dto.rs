//! Request and response shapes exchanged with callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Reservation, ReservationId, ReservationStatus};

/// Incoming data for create and update.
///
/// Dates are optional so that missing values reach validation and are
/// reported as a bad request instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
}

impl ReservationRequest {
    pub fn new(
        guest_name: impl Into<String>,
        hotel_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            hotel_name: hotel_name.into(),
            check_in: Some(check_in),
            check_out: Some(check_out),
        }
    }
}

/// Outgoing view of a stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub guest_name: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl From<&Reservation> for ReservationResponse {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            guest_name: r.guest_name.clone(),
            hotel_name: r.hotel_name.clone(),
            check_in: r.check_in,
            check_out: r.check_out,
            status: r.status,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            guest_name: r.guest_name,
            hotel_name: r.hotel_name,
            check_in: r.check_in,
            check_out: r.check_out,
            status: r.status,
        }
    }
}
