//! Reservation storage.
//!
//! [`ReservationStore`] is the seam between the service and its backing
//! storage; [`InMemoryReservationStore`] keeps everything in a map guarded
//! by a `parking_lot::RwLock`, so one store can be shared across threads.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::{ReservationError, ReservationResult};
use crate::model::{Reservation, ReservationId};

/// Storage operations used by the reservation service.
pub trait ReservationStore: Send + Sync {
    /// Allocate a fresh, never-used id.
    fn next_id(&self) -> ReservationId;

    /// Insert or replace by id. Returns the stored value.
    fn save(&self, reservation: Reservation) -> Reservation;

    fn find_by_id(&self, id: ReservationId) -> Option<Reservation>;

    /// Read, change and write back one reservation as a single step.
    ///
    /// `f` runs on a copy; the stored value is replaced only when `f`
    /// returns `Ok`. No other write to the store interleaves with the call.
    ///
    /// # Errors
    /// * `ReservationError::NotFound` - unknown id
    /// * whatever `f` returns
    fn modify<F>(&self, id: ReservationId, f: F) -> ReservationResult<Reservation>
    where
        F: FnOnce(&mut Reservation) -> ReservationResult<()>;

    /// All reservations ordered by id.
    fn find_all(&self) -> Vec<Reservation>;

    /// Remove a reservation. Unknown ids are ignored.
    fn delete(&self, id: ReservationId);
}

/// In-memory store. Ids start at 1.
#[derive(Debug)]
pub struct InMemoryReservationStore {
    reservations: RwLock<BTreeMap<ReservationId, Reservation>>,
    sequence: AtomicU64,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(BTreeMap::new()),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.read().is_empty()
    }
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn next_id(&self) -> ReservationId {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn save(&self, reservation: Reservation) -> Reservation {
        // Keep the sequence ahead of ids that were assigned elsewhere
        self.sequence
            .fetch_max(reservation.id.saturating_add(1), Ordering::Relaxed);

        let mut reservations = self.reservations.write();
        reservations.insert(reservation.id, reservation.clone());
        reservation
    }

    fn find_by_id(&self, id: ReservationId) -> Option<Reservation> {
        self.reservations.read().get(&id).cloned()
    }

    fn modify<F>(&self, id: ReservationId, f: F) -> ReservationResult<Reservation>
    where
        F: FnOnce(&mut Reservation) -> ReservationResult<()>,
    {
        let mut reservations = self.reservations.write();
        let stored = reservations
            .get_mut(&id)
            .ok_or(ReservationError::NotFound(id))?;

        let mut changed = stored.clone();
        f(&mut changed)?;
        changed.id = id;
        *stored = changed.clone();
        Ok(changed)
    }

    fn find_all(&self) -> Vec<Reservation> {
        self.reservations.read().values().cloned().collect()
    }

    fn delete(&self, id: ReservationId) {
        if self.reservations.write().remove(&id).is_none() {
            tracing::debug!(id, "delete of unknown reservation ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_reservation(store: &InMemoryReservationStore, name: &str) -> Reservation {
        let check_in = NaiveDate::from_ymd_opt(2030, 1, 10).expect("valid date");
        let check_out = NaiveDate::from_ymd_opt(2030, 1, 11).expect("valid date");
        Reservation::new(store.next_id(), name, "Test Hotel", check_in, check_out)
    }

    #[test]
    fn test_ids_are_assigned_in_sequence() {
        let store = InMemoryReservationStore::new();
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
    }

    #[test]
    fn test_save_and_find() {
        let store = InMemoryReservationStore::new();
        let saved = store.save(new_reservation(&store, "Alice"));

        let found = store.find_by_id(saved.id).expect("should exist");
        assert_eq!(found.guest_name, "Alice");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_existing_id_updates() {
        let store = InMemoryReservationStore::new();
        let mut saved = store.save(new_reservation(&store, "Bob"));

        saved.hotel_name = "Updated Hotel".to_string();
        let updated = store.save(saved.clone());

        assert_eq!(updated.id, saved.id);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find_by_id(saved.id).expect("should exist").hotel_name,
            "Updated Hotel"
        );
    }

    #[test]
    fn test_find_missing_is_none() {
        let store = InMemoryReservationStore::new();
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn test_find_all_ordered_by_id() {
        let store = InMemoryReservationStore::new();
        let first = new_reservation(&store, "David");
        let second = new_reservation(&store, "Eve");
        store.save(second);
        store.save(first);

        let names: Vec<String> = store.find_all().into_iter().map(|r| r.guest_name).collect();
        assert_eq!(names, vec!["David", "Eve"]);
    }

    #[test]
    fn test_modify_writes_back() {
        let store = InMemoryReservationStore::new();
        let saved = store.save(new_reservation(&store, "Hana"));

        let changed = store
            .modify(saved.id, |r| {
                r.hotel_name = "Moved".to_string();
                Ok(())
            })
            .expect("modify failed");

        assert_eq!(changed.hotel_name, "Moved");
        assert_eq!(
            store.find_by_id(saved.id).expect("should exist").hotel_name,
            "Moved"
        );
    }

    #[test]
    fn test_modify_error_leaves_value_untouched() {
        let store = InMemoryReservationStore::new();
        let saved = store.save(new_reservation(&store, "Ivan"));

        let result = store.modify(saved.id, |r| {
            r.guest_name = "Changed".to_string();
            Err(ReservationError::BadRequest("rejected".to_string()))
        });

        assert!(matches!(result, Err(ReservationError::BadRequest(_))));
        assert_eq!(
            store.find_by_id(saved.id).expect("should exist").guest_name,
            "Ivan"
        );
    }

    #[test]
    fn test_modify_unknown_id() {
        let store = InMemoryReservationStore::new();
        let result = store.modify(5, |_| Ok(()));
        assert_eq!(result, Err(ReservationError::NotFound(5)));
    }

    #[test]
    fn test_delete() {
        let store = InMemoryReservationStore::new();
        let saved = store.save(new_reservation(&store, "Frank"));

        store.delete(saved.id);
        assert!(store.find_by_id(saved.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = InMemoryReservationStore::new();
        store.delete(123);
        assert!(store.is_empty());
    }

    #[test]
    fn test_external_id_advances_sequence() {
        let store = InMemoryReservationStore::new();
        let check_in = NaiveDate::from_ymd_opt(2030, 1, 10).expect("valid date");
        store.save(Reservation::new(10, "Gus", "H", check_in, check_in));

        assert_eq!(store.next_id(), 11);
    }
}
