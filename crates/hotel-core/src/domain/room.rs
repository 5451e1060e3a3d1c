//! Base room entity.

use super::{HotelError, HotelResult};

pub type RoomNo = i32;

/// Shown in place of an empty guest name.
pub const GUEST_PLACEHOLDER: &str = "N/A";

/// An undecorated hotel room.
///
/// `room_no` and `price` only ever hold values greater than zero once set.
/// A rejected assignment leaves the previous value in place (zero if the
/// field was never set).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    room_no: RoomNo,
    price: f64,
    is_available: bool,
    guest: String,
}

impl Room {
    /// Build an available room.
    ///
    /// Both values go through the validated setters; a rejected value is
    /// logged and the field keeps its zero default.
    pub fn new(room_no: RoomNo, price: f64) -> Self {
        let mut room = Self::default();
        if let Err(e) = room.set_room_no(room_no) {
            log::warn!("creating room: {e}");
        }
        if let Err(e) = room.set_price(price) {
            log::warn!("creating room {}: {e}", room.room_no);
        }
        room.is_available = true;
        room
    }

    pub fn room_no(&self) -> RoomNo {
        self.room_no
    }

    pub fn set_room_no(&mut self, room_no: RoomNo) -> HotelResult<()> {
        if room_no <= 0 {
            return Err(HotelError::InvalidRoomNumber(room_no));
        }
        self.room_no = room_no;
        Ok(())
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) -> HotelResult<()> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn set_available(&mut self, is_available: bool) {
        self.is_available = is_available;
    }

    /// Guest name, or [`GUEST_PLACEHOLDER`] when nobody is staying.
    pub fn guest(&self) -> &str {
        if self.guest.is_empty() {
            GUEST_PLACEHOLDER
        } else {
            &self.guest
        }
    }

    pub fn set_guest(&mut self, guest: impl Into<String>) {
        self.guest = guest.into();
    }

    pub fn clear_guest(&mut self) {
        self.guest.clear();
    }

    /// Multi-line description without a trailing newline.
    pub fn description(&self) -> String {
        format!(
            "Room number: {}\nStatus: {}\nGuest: {}\nDescription: This is a hotel room",
            self.room_no,
            if self.is_available {
                "Available"
            } else {
                "Unavailable"
            },
            self.guest(),
        )
    }

    pub fn price_display(&self) -> String {
        format!("Price: {}", self.price)
    }
}

/// Accept only finite prices strictly greater than zero.
pub(crate) fn validate_price(price: f64) -> HotelResult<f64> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(HotelError::InvalidPrice(price))
    }
}
