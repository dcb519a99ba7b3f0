use strum::{Display, EnumCount, EnumIter};

use crate::game::deed::DeedKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
/// The token a player moves around the board. Players are handed
/// tokens in declaration order, so the first player is always `Car`.
pub enum Token {
    Car,
    Dog,
    Hat,
    Iron,
    Boat,
    Boot,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A square as it's laid out before the game starts.
pub enum SquareSpec {
    /// A square where nothing happens ('Go', 'Jail', 'Free Parking').
    Rest(&'static str),
    /// A square backed by a deed that can be bought.
    Buyable {
        name: &'static str,
        kind: DeedKind,
        cost: i32,
        rent: i32,
    },
    /// A square that charges a flat tax.
    Tax { name: &'static str, amount: i32 },
    /// The 'Go To Jail' corner.
    GoToJail(&'static str),
    /// A square that draws from the Chance deck.
    Chance(&'static str),
    /// A square that draws from the Community Chest deck.
    CommunityChest(&'static str),
}

impl SquareSpec {
    /// The name printed on the square.
    pub fn name(&self) -> &'static str {
        match *self {
            SquareSpec::Rest(name)
            | SquareSpec::GoToJail(name)
            | SquareSpec::Chance(name)
            | SquareSpec::CommunityChest(name) => name,
            SquareSpec::Buyable { name, .. } | SquareSpec::Tax { name, .. } => name,
        }
    }
}

/// Lay out a plain property.
pub fn street(name: &'static str, cost: i32, rent: i32) -> SquareSpec {
    SquareSpec::Buyable {
        name,
        kind: DeedKind::Plain,
        cost,
        rent,
    }
}

/// Lay out a station.
pub fn station(name: &'static str) -> SquareSpec {
    SquareSpec::Buyable {
        name,
        kind: DeedKind::Station,
        cost: 200,
        rent: 25,
    }
}

/// Lay out a utility. Utilities have no base rent of their own.
pub fn utility(name: &'static str) -> SquareSpec {
    SquareSpec::Buyable {
        name,
        kind: DeedKind::Utility,
        cost: 150,
        rent: 0,
    }
}
