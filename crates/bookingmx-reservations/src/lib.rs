//! Hotel reservation service.
//!
//! In-memory create / update / list / cancel of reservations with date
//! validation, plus the mapping from [`ReservationError`] to HTTP status
//! codes that a transport layer answers with.
//!
//! # Example
//!
//! ```
//! use bookingmx_reservations::{
//!     FixedClock, InMemoryReservationStore, ReservationRequest, ReservationService,
//!     ReservationStatus,
//! };
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let service = ReservationService::with_parts(InMemoryReservationStore::new(), FixedClock(today));
//!
//! let request = ReservationRequest::new(
//!     "Jane",
//!     "Palace",
//!     NaiveDate::from_ymd_opt(2030, 1, 3).unwrap(),
//!     NaiveDate::from_ymd_opt(2030, 1, 5).unwrap(),
//! );
//! let created = service.create(&request)?;
//! let canceled = service.cancel(created.id)?;
//! assert_eq!(canceled.status, ReservationStatus::Canceled);
//! # Ok::<(), bookingmx_reservations::ReservationError>(())
//! ```

pub mod clock;
pub mod dto;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dto::{ReservationRequest, ReservationResponse};
pub use error::{ApiErrorBody, ReservationError, ReservationResult};
pub use model::{Reservation, ReservationId, ReservationStatus};
pub use repository::{InMemoryReservationStore, ReservationStore};
pub use service::ReservationService;
