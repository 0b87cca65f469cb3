//! Error types for reservation operations and their HTTP status mapping.
//!
//! | Variant | Status |
//! |---------|--------|
//! | `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `Internal` | 500 |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ReservationId;

/// Result type alias for reservation operations.
pub type ReservationResult<T> = Result<T, ReservationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Request failed validation or targets a reservation in the wrong state.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No reservation with this id.
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),

    /// Unanticipated failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReservationError {
    /// HTTP status code a transport layer should answer with.
    #[inline]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}

/// Serializable error payload for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl From<&ReservationError> for ApiErrorBody {
    fn from(err: &ReservationError) -> Self {
        let error = match err {
            ReservationError::BadRequest(_) => "Bad Request",
            ReservationError::NotFound(_) => "Not Found",
            ReservationError::Internal(_) => "Internal Server Error",
        };
        let message = match err {
            ReservationError::BadRequest(msg) | ReservationError::Internal(msg) => msg.clone(),
            ReservationError::NotFound(_) => err.to_string(),
        };

        Self {
            status: err.status_code(),
            error: error.to_string(),
            message,
        }
    }
}

static_assertions::assert_impl_all!(ReservationError: Send, Sync, std::error::Error);
