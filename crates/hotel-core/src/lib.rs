//! hotel-core
//!
//! Core building blocks for the hotel inventory manager.
//!
//! # Modules
//! - **domain**: room entity, pricing modifiers, the modifier chain and errors
//! - **hotel**: the room repository (numbering, booking, queries)
//! - **observability**: occupancy counts for status output

pub mod domain;
pub mod hotel;
pub mod observability;

pub use domain::{HotelError, HotelResult, Modifier, Room, RoomNo, RoomUnit};
pub use hotel::Hotel;
pub use observability::OccupancyCounts;
