use super::dice::Dice;
use super::globals::Token;
use super::player::Ownership;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Which rent formula a deed uses. Chosen when the board is laid out
/// and fixed for the rest of the game.
pub enum DeedKind {
    /// Rent is the base rent.
    Plain,
    /// Rent is the base rent times the number of stations the owner holds.
    Station,
    /// Rent is a fresh dice roll times the owner's utility multiplier.
    Utility,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The title deed for a buyable square.
pub struct Deed {
    /// Name of the square this deed belongs to.
    pub name: String,
    /// Price to buy the deed from the bank.
    pub cost: i32,
    /// Base rent. Utilities ignore this.
    pub rent: i32,
    /// The rent formula.
    pub kind: DeedKind,
    /// The player holding the deed, if anyone has bought it yet.
    owner: Option<Token>,
}

impl Deed {
    /// Creates a new, unowned deed.
    pub fn new(name: impl Into<String>, kind: DeedKind, cost: i32, rent: i32) -> Deed {
        Deed {
            name: name.into(),
            cost,
            rent,
            kind,
            owner: None,
        }
    }

    /// The player holding the deed.
    pub fn owner(&self) -> Option<Token> {
        self.owner
    }

    /// Record who holds the deed.
    pub fn set_owner(&mut self, owner: Token) {
        self.owner = Some(owner);
    }

    /// Rent owed for landing on this deed's square, given the owner's
    /// holdings. Recomputed on every call, so station rent grows as more
    /// stations are bought and utility rent rolls the dice each time.
    pub fn rent<D: Dice + ?Sized>(&self, holdings: &Ownership, dice: &mut D) -> i32 {
        match self.kind {
            DeedKind::Plain => self.rent,
            DeedKind::Station => self.rent * holdings.station_multiplier(),
            DeedKind::Utility => dice.roll() * holdings.utility_multiplier(),
        }
    }
}
