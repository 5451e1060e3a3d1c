use thiserror::Error;

use super::RoomNo;

/// Soft failures of hotel operations.
///
/// None of these leave the hotel in a changed state: the operation that
/// returned the error did nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotelError {
    /// Room numbers must be greater than zero.
    #[error("invalid room number {0}: must be greater than zero")]
    InvalidRoomNumber(RoomNo),

    /// Prices must be finite and greater than zero.
    #[error("invalid price {0}: must be a positive number")]
    InvalidPrice(f64),

    #[error("room {0} not found")]
    RoomNotFound(RoomNo),

    /// Unbooking a room that is currently available.
    #[error("room {0} is not booked")]
    NotBooked(RoomNo),
}

pub type HotelResult<T> = Result<T, HotelError>;
