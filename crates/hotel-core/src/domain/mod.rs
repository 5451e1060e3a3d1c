//! Domain model (room entity, modifiers, errors).

pub mod errors;
pub mod modifier;
pub mod room;
pub mod unit;

pub use errors::{HotelError, HotelResult};
pub use modifier::Modifier;
pub use room::{Room, RoomNo};
pub use unit::RoomUnit;
