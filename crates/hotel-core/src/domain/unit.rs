//! RoomUnit: a base room with zero or more modifier layers.
//!
//! Each wrapping variant owns exactly one inner unit. Room number,
//! availability and guest always live on the base room; price and
//! description reads are recomputed through every layer on each call.

use super::{HotelResult, Modifier, Room, RoomNo};

#[derive(Debug, Clone, PartialEq)]
pub enum RoomUnit {
    Base(Room),
    BeachSide(Box<RoomUnit>),
    Vip(Box<RoomUnit>),
}

impl RoomUnit {
    /// The outermost layer, if any, and the unit it wraps.
    fn layer(&self) -> Option<(Modifier, &RoomUnit)> {
        match self {
            RoomUnit::Base(_) => None,
            RoomUnit::BeachSide(inner) => Some((Modifier::BeachSide, inner)),
            RoomUnit::Vip(inner) => Some((Modifier::Vip, inner)),
        }
    }

    /// The undecorated room at the bottom of the chain.
    pub fn base(&self) -> &Room {
        match self {
            RoomUnit::Base(room) => room,
            RoomUnit::BeachSide(inner) | RoomUnit::Vip(inner) => inner.base(),
        }
    }

    fn base_mut(&mut self) -> &mut Room {
        match self {
            RoomUnit::Base(room) => room,
            RoomUnit::BeachSide(inner) | RoomUnit::Vip(inner) => inner.base_mut(),
        }
    }

    /// Applied modifiers, outermost first.
    pub fn modifiers(&self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        let mut unit = self;
        while let Some((modifier, inner)) = unit.layer() {
            modifiers.push(modifier);
            unit = inner;
        }
        modifiers
    }

    pub fn room_no(&self) -> RoomNo {
        self.base().room_no()
    }

    pub fn set_room_no(&mut self, room_no: RoomNo) -> HotelResult<()> {
        self.base_mut().set_room_no(room_no)
    }

    pub fn is_available(&self) -> bool {
        self.base().is_available()
    }

    pub fn set_available(&mut self, is_available: bool) {
        self.base_mut().set_available(is_available);
    }

    pub fn guest(&self) -> &str {
        self.base().guest()
    }

    pub fn set_guest(&mut self, guest: impl Into<String>) {
        self.base_mut().set_guest(guest);
    }

    pub fn clear_guest(&mut self) {
        self.base_mut().clear_guest();
    }

    /// Derived price: each layer applies its factor to the price of the
    /// unit it wraps.
    pub fn price(&self) -> f64 {
        match self.layer() {
            None => self.base().price(),
            Some((modifier, inner)) => modifier.apply_price(inner.price()),
        }
    }

    /// Sets the base price, never a derived one.
    pub fn set_price(&mut self, price: f64) -> HotelResult<()> {
        self.base_mut().set_price(price)
    }

    pub fn description(&self) -> String {
        match self.layer() {
            None => self.base().description(),
            Some((modifier, inner)) => {
                let mut description = inner.description();
                description.push_str(modifier.suffix());
                description
            }
        }
    }

    pub fn price_display(&self) -> String {
        format!("Price: {}", self.price())
    }

    /// Description and price display as one listing entry, followed by a
    /// blank line.
    pub fn details(&self) -> String {
        format!("{}\n{}\n\n", self.description(), self.price_display())
    }
}

impl From<Room> for RoomUnit {
    fn from(room: Room) -> Self {
        RoomUnit::Base(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HotelError;
    use rstest::rstest;

    fn unit(price: f64, modifiers: &[Modifier]) -> RoomUnit {
        modifiers
            .iter()
            .fold(RoomUnit::from(Room::new(1, price)), |unit, m| m.wrap(unit))
    }

    #[test]
    fn base_unit_reports_room_values() {
        let u = unit(75.0, &[]);
        assert_eq!(u.price(), 75.0);
        assert_eq!(u.description(), Room::new(1, 75.0).description());
        assert!(u.modifiers().is_empty());
    }

    #[test]
    fn beach_side_then_vip_stacks_price_and_description() {
        let u = unit(100.0, &[Modifier::BeachSide, Modifier::Vip]);

        assert_eq!(u.price(), 156.0);
        assert_eq!(u.price_display(), "Price: 156");
        assert!(
            u.description()
                .ends_with("This is a hotel room with beautiful beach view and with VIP features")
        );
        assert_eq!(u.modifiers(), vec![Modifier::Vip, Modifier::BeachSide]);
    }

    #[rstest]
    #[case::beach_side(&[Modifier::BeachSide], 96.0)]
    #[case::vip(&[Modifier::Vip], 104.0)]
    #[case::both(&[Modifier::BeachSide, Modifier::Vip], 124.8)]
    fn each_layer_rounds_its_own_price(#[case] modifiers: &[Modifier], #[case] expected: f64) {
        assert_eq!(unit(80.0, modifiers).price(), expected);
    }

    #[test]
    fn setting_price_on_decorated_unit_changes_base_price() {
        let mut u = unit(100.0, &[Modifier::Vip]);
        u.set_price(200.0).unwrap();

        assert_eq!(u.base().price(), 200.0);
        assert_eq!(u.price(), 260.0);
    }

    #[test]
    fn invalid_price_on_decorated_unit_is_rejected() {
        let mut u = unit(100.0, &[Modifier::BeachSide, Modifier::Vip]);
        assert_eq!(u.set_price(-1.0), Err(HotelError::InvalidPrice(-1.0)));
        assert_eq!(u.base().price(), 100.0);
    }

    #[test]
    fn availability_and_guest_forward_to_base() {
        let mut u = unit(100.0, &[Modifier::BeachSide]);
        u.set_available(false);
        u.set_guest("Carol");

        assert!(!u.base().is_available());
        assert_eq!(u.base().guest(), "Carol");
        assert!(u.description().contains("Status: Unavailable\nGuest: Carol"));

        u.clear_guest();
        assert_eq!(u.guest(), "N/A");
    }

    #[test]
    fn details_end_with_blank_line() {
        let u = unit(50.0, &[]);
        assert_eq!(
            u.details(),
            format!("{}\nPrice: 50\n\n", Room::new(1, 50.0).description())
        );
    }
}
