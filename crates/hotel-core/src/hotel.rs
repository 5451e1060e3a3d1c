//! Hotel: the room repository.
//!
//! Owns an ordered collection of room units (insertion order), assigns room
//! numbers and answers filtered listing queries. Lookups by room number
//! always pick the *last* matching entry.

use crate::domain::room::validate_price;
use crate::domain::{HotelError, HotelResult, Modifier, Room, RoomNo, RoomUnit};
use crate::observability::OccupancyCounts;

/// Shown in place of a missing hotel name.
pub const NAME_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Default)]
pub struct Hotel {
    name: Option<String>,
    rooms: Vec<RoomUnit>,
}

impl Hotel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut hotel = Self::new();
        hotel.set_name(name);
        hotel
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(NAME_PLACEHOLDER)
    }

    /// An empty name clears it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Create a room with the next free number.
    ///
    /// The beach-side layer is applied first and the VIP layer wraps it, so a
    /// room with both is priced `round(round(price * 1.2) * 1.3)`.
    pub fn add_room(&mut self, price: f64, beach_side: bool, vip: bool) -> HotelResult<RoomNo> {
        let price = validate_price(price)?;
        let room_no = self.next_room_no();

        let mut unit = RoomUnit::from(Room::new(room_no, price));
        if beach_side {
            unit = Modifier::BeachSide.wrap(unit);
        }
        if vip {
            unit = Modifier::Vip.wrap(unit);
        }

        log::debug!(
            "added room {room_no} (base price {price}, modifiers {:?})",
            unit.modifiers()
        );
        self.rooms.push(unit);
        Ok(room_no)
    }

    /// `max + 1`, so numbers freed by removal are never reused.
    fn next_room_no(&self) -> RoomNo {
        self.rooms
            .iter()
            .map(RoomUnit::room_no)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn position(&self, room_no: RoomNo) -> HotelResult<usize> {
        self.rooms
            .iter()
            .rposition(|unit| unit.room_no() == room_no)
            .ok_or(HotelError::RoomNotFound(room_no))
    }

    fn find_mut(&mut self, room_no: RoomNo) -> HotelResult<&mut RoomUnit> {
        let index = self.position(room_no)?;
        Ok(&mut self.rooms[index])
    }

    /// Remove a room together with all of its modifiers.
    pub fn remove_room(&mut self, room_no: RoomNo) -> HotelResult<RoomUnit> {
        let index = self.position(room_no)?;
        let removed = self.rooms.remove(index);
        log::debug!("removed room {room_no}");
        Ok(removed)
    }

    /// Book a room for `guest`. An already booked room is re-booked and its
    /// guest replaced.
    pub fn book_room(&mut self, room_no: RoomNo, guest: impl Into<String>) -> HotelResult<()> {
        let unit = self.find_mut(room_no)?;
        let guest = guest.into();
        if !unit.is_available() {
            log::debug!("room {room_no} already booked for {}, overwriting", unit.guest());
        }
        unit.set_available(false);
        unit.set_guest(guest);
        log::debug!("booked room {room_no} for {}", unit.guest());
        Ok(())
    }

    pub fn unbook_room(&mut self, room_no: RoomNo) -> HotelResult<()> {
        let unit = self.find_mut(room_no)?;
        if unit.is_available() {
            return Err(HotelError::NotBooked(room_no));
        }
        unit.set_available(true);
        unit.clear_guest();
        log::debug!("unbooked room {room_no}");
        Ok(())
    }

    /// Change the base price of a room; modifiers stay in place.
    pub fn reprice_room(&mut self, room_no: RoomNo, price: f64) -> HotelResult<()> {
        let unit = self.find_mut(room_no)?;
        unit.set_price(price)?;
        log::debug!("repriced room {room_no}: base {price}, derived {}", unit.price());
        Ok(())
    }

    pub fn all_rooms_details(&self) -> String {
        self.details_where(|_| true)
    }

    pub fn empty_room_details(&self) -> String {
        self.details_where(RoomUnit::is_available)
    }

    pub fn booked_room_details(&self) -> String {
        self.details_where(|unit| !unit.is_available())
    }

    fn details_where(&self, keep: impl Fn(&RoomUnit) -> bool) -> String {
        self.rooms
            .iter()
            .filter(|&unit| keep(unit))
            .map(RoomUnit::details)
            .collect()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomUnit> {
        self.rooms.iter()
    }

    pub fn room(&self, room_no: RoomNo) -> Option<&RoomUnit> {
        self.rooms.iter().rfind(|unit| unit.room_no() == room_no)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn occupancy(&self) -> OccupancyCounts {
        let mut counts = OccupancyCounts::default();
        for unit in &self.rooms {
            counts.total += 1;
            if unit.is_available() {
                counts.available += 1;
            } else {
                counts.booked += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hotel_with_rooms(n: usize) -> Hotel {
        let mut hotel = Hotel::with_name("Test");
        for _ in 0..n {
            hotel.add_room(100.0, false, false).unwrap();
        }
        hotel
    }

    fn numbers(hotel: &Hotel) -> Vec<RoomNo> {
        hotel.rooms().map(RoomUnit::room_no).collect()
    }

    #[test]
    fn rooms_are_numbered_in_add_order() {
        let mut hotel = Hotel::new();
        assert_eq!(hotel.add_room(10.0, false, false), Ok(1));
        assert_eq!(hotel.add_room(20.0, true, false), Ok(2));
        assert_eq!(hotel.add_room(30.0, false, true), Ok(3));
        assert_eq!(numbers(&hotel), vec![1, 2, 3]);
    }

    #[test]
    fn removed_numbers_are_not_recycled() {
        let mut hotel = hotel_with_rooms(3);
        hotel.remove_room(2).unwrap();

        assert_eq!(hotel.add_room(100.0, false, false), Ok(4));
        assert_eq!(numbers(&hotel), vec![1, 3, 4]);
    }

    #[test]
    fn removing_the_highest_number_frees_it() {
        let mut hotel = hotel_with_rooms(3);
        hotel.remove_room(3).unwrap();
        assert_eq!(hotel.add_room(100.0, false, false), Ok(3));
    }

    #[rstest]
    #[case::both(true, true, vec![Modifier::Vip, Modifier::BeachSide], 156.0)]
    #[case::beach_side(true, false, vec![Modifier::BeachSide], 120.0)]
    #[case::vip(false, true, vec![Modifier::Vip], 130.0)]
    #[case::plain(false, false, vec![], 100.0)]
    fn add_room_applies_requested_modifiers(
        #[case] beach_side: bool,
        #[case] vip: bool,
        #[case] expected_modifiers: Vec<Modifier>,
        #[case] expected_price: f64,
    ) {
        let mut hotel = Hotel::new();
        let room_no = hotel.add_room(100.0, beach_side, vip).unwrap();
        let unit = hotel.room(room_no).unwrap();

        assert_eq!(unit.modifiers(), expected_modifiers);
        assert_eq!(unit.price(), expected_price);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-50.0)]
    #[case::infinite(f64::INFINITY)]
    fn add_room_rejects_non_positive_price(#[case] price: f64) {
        let mut hotel = Hotel::new();
        assert_eq!(
            hotel.add_room(price, true, true),
            Err(HotelError::InvalidPrice(price))
        );
        assert!(hotel.is_empty());
    }

    #[rstest]
    #[case::remove("remove")]
    #[case::book("book")]
    #[case::unbook("unbook")]
    fn unknown_room_leaves_hotel_unchanged(#[case] op: &str) {
        let mut hotel = hotel_with_rooms(2);
        let before = hotel.all_rooms_details();

        let result = match op {
            "remove" => hotel.remove_room(9).map(|_| ()),
            "book" => hotel.book_room(9, "Dave"),
            _ => hotel.unbook_room(9),
        };

        assert_eq!(result, Err(HotelError::RoomNotFound(9)));
        assert_eq!(hotel.all_rooms_details(), before);
        assert_eq!(hotel.len(), 2);
    }

    #[test]
    fn booking_marks_room_unavailable_with_guest() {
        let mut hotel = hotel_with_rooms(2);
        hotel.book_room(2, "Erin").unwrap();

        let unit = hotel.room(2).unwrap();
        assert!(!unit.is_available());
        assert_eq!(unit.guest(), "Erin");
        assert!(hotel.room(1).unwrap().is_available());
    }

    #[test]
    fn booking_a_booked_room_overwrites_guest() {
        let mut hotel = hotel_with_rooms(1);
        hotel.book_room(1, "Frank").unwrap();
        hotel.book_room(1, "Grace").unwrap();

        assert_eq!(hotel.room(1).unwrap().guest(), "Grace");
    }

    #[test]
    fn unbooking_restores_availability_and_clears_guest() {
        let mut hotel = hotel_with_rooms(1);
        hotel.book_room(1, "Heidi").unwrap();
        hotel.unbook_room(1).unwrap();

        let unit = hotel.room(1).unwrap();
        assert!(unit.is_available());
        assert_eq!(unit.guest(), "N/A");
    }

    #[test]
    fn unbooking_an_available_room_is_rejected() {
        let mut hotel = hotel_with_rooms(1);
        let before = hotel.all_rooms_details();

        assert_eq!(hotel.unbook_room(1), Err(HotelError::NotBooked(1)));
        assert_eq!(hotel.all_rooms_details(), before);
    }

    #[test]
    fn lookups_pick_the_last_matching_room() {
        let mut hotel = hotel_with_rooms(2);
        hotel.rooms[1].set_room_no(1).unwrap();

        hotel.book_room(1, "Ivan").unwrap();
        assert!(hotel.rooms[0].is_available());
        assert_eq!(hotel.rooms[1].guest(), "Ivan");

        let removed = hotel.remove_room(1).unwrap();
        assert_eq!(removed.guest(), "Ivan");
        assert_eq!(hotel.len(), 1);
    }

    #[test]
    fn queries_are_empty_for_an_empty_hotel() {
        let hotel = Hotel::new();
        assert_eq!(hotel.all_rooms_details(), "");
        assert_eq!(hotel.empty_room_details(), "");
        assert_eq!(hotel.booked_room_details(), "");
    }

    #[test]
    fn empty_room_details_is_empty_when_everything_is_booked() {
        let mut hotel = hotel_with_rooms(2);
        hotel.book_room(1, "Judy").unwrap();
        hotel.book_room(2, "Mallory").unwrap();

        assert_eq!(hotel.empty_room_details(), "");
        assert!(!hotel.booked_room_details().is_empty());
    }

    #[test]
    fn queries_filter_by_availability_in_collection_order() {
        let mut hotel = hotel_with_rooms(3);
        hotel.book_room(2, "Niaj").unwrap();

        let rooms: Vec<&RoomUnit> = hotel.rooms().collect();
        assert_eq!(
            hotel.all_rooms_details(),
            format!("{}{}{}", rooms[0].details(), rooms[1].details(), rooms[2].details())
        );
        assert_eq!(
            hotel.empty_room_details(),
            format!("{}{}", rooms[0].details(), rooms[2].details())
        );
        assert_eq!(hotel.booked_room_details(), rooms[1].details());
    }

    #[test]
    fn reprice_updates_base_price_under_modifiers() {
        let mut hotel = Hotel::new();
        hotel.add_room(100.0, true, true).unwrap();
        hotel.reprice_room(1, 200.0).unwrap();

        let unit = hotel.room(1).unwrap();
        assert_eq!(unit.base().price(), 200.0);
        assert_eq!(unit.price(), 312.0);
    }

    #[test]
    fn reprice_rejects_non_positive_price() {
        let mut hotel = hotel_with_rooms(1);
        assert_eq!(
            hotel.reprice_room(1, 0.0),
            Err(HotelError::InvalidPrice(0.0))
        );
        assert_eq!(hotel.room(1).unwrap().price(), 100.0);
        assert_eq!(
            hotel.reprice_room(5, 10.0),
            Err(HotelError::RoomNotFound(5))
        );
    }

    #[test]
    fn occupancy_counts_available_and_booked() {
        let mut hotel = hotel_with_rooms(3);
        hotel.book_room(3, "Olivia").unwrap();

        assert_eq!(
            hotel.occupancy(),
            OccupancyCounts {
                total: 3,
                available: 2,
                booked: 1,
            }
        );
    }

    #[test]
    fn name_falls_back_to_placeholder() {
        let mut hotel = Hotel::new();
        assert_eq!(hotel.name(), NAME_PLACEHOLDER);
        assert!(!hotel.has_name());

        hotel.set_name("Grand");
        assert_eq!(hotel.name(), "Grand");

        hotel.set_name("");
        assert!(!hotel.has_name());
    }
}
