//! Reservation business rules.
//!
//! # Validation
//!
//! Create and update reject a request (as `BadRequest`) when:
//! - guest or hotel name is blank
//! - check-in or check-out is missing
//! - check-in or check-out is before today
//! - check-in is not strictly before check-out
//!
//! Canceled reservations cannot be updated.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::dto::ReservationRequest;
use crate::error::{ReservationError, ReservationResult};
use crate::model::{Reservation, ReservationId, ReservationStatus};
use crate::repository::{InMemoryReservationStore, ReservationStore};

/// Create / update / list / cancel over a [`ReservationStore`].
#[derive(Debug)]
pub struct ReservationService<S = InMemoryReservationStore, C = SystemClock> {
    store: S,
    clock: C,
}

impl ReservationService {
    /// Service over a fresh in-memory store using the system date.
    pub fn new() -> Self {
        Self::with_parts(InMemoryReservationStore::new(), SystemClock)
    }
}

impl Default for ReservationService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ReservationStore, C: Clock> ReservationService<S, C> {
    pub fn with_parts(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All reservations ordered by id.
    pub fn list(&self) -> Vec<Reservation> {
        self.store.find_all()
    }

    /// Validate and store a new active reservation.
    ///
    /// # Errors
    /// * `ReservationError::BadRequest` - request failed validation
    pub fn create(&self, request: &ReservationRequest) -> ReservationResult<Reservation> {
        let (check_in, check_out) = self.validate(request)?;

        let reservation = Reservation::new(
            self.store.next_id(),
            request.guest_name.as_str(),
            request.hotel_name.as_str(),
            check_in,
            check_out,
        );
        let saved = self.store.save(reservation);

        tracing::info!(id = saved.id, hotel = %saved.hotel_name, "reservation created");
        Ok(saved)
    }

    /// Replace guest, hotel and dates of an active reservation.
    ///
    /// # Errors
    /// * `ReservationError::NotFound` - unknown id
    /// * `ReservationError::BadRequest` - reservation is canceled, or request
    ///   failed validation
    pub fn update(
        &self,
        id: ReservationId,
        request: &ReservationRequest,
    ) -> ReservationResult<Reservation> {
        let saved = self.store.modify(id, |existing| {
            if !existing.is_active() {
                return Err(ReservationError::BadRequest(format!(
                    "reservation {} is canceled and cannot be modified",
                    id
                )));
            }

            let (check_in, check_out) = self.validate(request)?;
            existing.guest_name = request.guest_name.clone();
            existing.hotel_name = request.hotel_name.clone();
            existing.check_in = check_in;
            existing.check_out = check_out;
            Ok(())
        })?;

        tracing::debug!(id, "reservation updated");
        Ok(saved)
    }

    /// Mark a reservation canceled. Canceling twice is harmless.
    ///
    /// # Errors
    /// * `ReservationError::NotFound` - unknown id
    pub fn cancel(&self, id: ReservationId) -> ReservationResult<Reservation> {
        let mut was_active = false;
        let saved = self.store.modify(id, |existing| {
            was_active = existing.is_active();
            existing.status = ReservationStatus::Canceled;
            Ok(())
        })?;

        if was_active {
            tracing::info!(id, "reservation canceled");
        }
        Ok(saved)
    }

    fn validate(&self, request: &ReservationRequest) -> ReservationResult<(NaiveDate, NaiveDate)> {
        check_request(request, self.clock.today()).map_err(|message| {
            tracing::warn!(%message, "reservation request rejected");
            ReservationError::BadRequest(message)
        })
    }
}

fn check_request(
    request: &ReservationRequest,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), String> {
    if request.guest_name.trim().is_empty() {
        return Err("guest_name is required".to_string());
    }
    if request.hotel_name.trim().is_empty() {
        return Err("hotel_name is required".to_string());
    }

    let (Some(check_in), Some(check_out)) = (request.check_in, request.check_out) else {
        return Err("check_in and check_out are required".to_string());
    };

    if check_in < today {
        return Err(format!("check_in {} is in the past", check_in));
    }
    if check_out < today {
        return Err(format!("check_out {} is in the past", check_out));
    }
    if check_in >= check_out {
        return Err(format!(
            "check_in {} must be before check_out {}",
            check_in, check_out
        ));
    }

    Ok((check_in, check_out))
}
