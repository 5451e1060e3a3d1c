//! Pricing modifiers applied on top of a base room.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RoomUnit;

/// A price multiplier plus a description suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    BeachSide,
    Vip,
}

impl Modifier {
    pub fn factor(self) -> f64 {
        match self {
            Modifier::BeachSide => 1.2,
            Modifier::Vip => 1.3,
        }
    }

    /// Text appended to the wrapped unit's description.
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::BeachSide => " with beautiful beach view",
            Modifier::Vip => " and with VIP features",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Modifier::BeachSide => "beach-side",
            Modifier::Vip => "VIP",
        }
    }

    /// Price of this layer given the wrapped unit's price.
    /// Rounded here, so every layer rounds on its own.
    pub fn apply_price(self, inner: f64) -> f64 {
        round_to_one_decimal(inner * self.factor())
    }

    pub fn wrap(self, unit: RoomUnit) -> RoomUnit {
        match self {
            Modifier::BeachSide => RoomUnit::BeachSide(Box::new(unit)),
            Modifier::Vip => RoomUnit::Vip(Box::new(unit)),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Half away from zero.
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
