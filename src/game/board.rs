use super::error::{GameError, Result};
use super::globals::JAIL;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// What happens when a player comes to rest on a square.
/// Each square holds exactly one of these at a time.
pub enum LandBehavior {
    /// Nothing happens.
    Rest,
    /// The square's deed is offered to the player.
    Buyable,
    /// The player pays the square's tax.
    Tax,
    /// The player is sent straight to jail.
    GoToJail,
    /// The player draws a Chance card.
    Chance,
    /// The player draws a Community Chest card.
    CommunityChest,
    /// The square has been bought. Rent is owed to the
    /// player at index `owner` by anyone else.
    Owned { owner: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The fixed shape of a square.
pub enum SquareKind {
    Regular,
    /// A square carrying a flat tax amount.
    Tax { amount: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One cell of the board.
pub struct Square {
    name: String,
    kind: SquareKind,
    behavior: LandBehavior,
}

impl Square {
    /// A regular square bound to `behavior`.
    pub fn new(name: impl Into<String>, behavior: LandBehavior) -> Square {
        Square {
            name: name.into(),
            kind: SquareKind::Regular,
            behavior,
        }
    }

    /// A tax square charging `amount`.
    pub fn tax(name: impl Into<String>, amount: i32) -> Square {
        Square {
            name: name.into(),
            kind: SquareKind::Tax { amount },
            behavior: LandBehavior::Tax,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// The tax charged here, if this is a tax square.
    pub fn tax_value(&self) -> Option<i32> {
        match self.kind {
            SquareKind::Tax { amount } => Some(amount),
            SquareKind::Regular => None,
        }
    }

    /// The behavior currently bound to the square.
    pub fn behavior(&self) -> LandBehavior {
        self.behavior
    }

    /// Replace the bound behavior. The previous one is dropped.
    pub fn rebind(&mut self, behavior: LandBehavior) {
        log::trace!("{}: {:?} -> {:?}", self.name, self.behavior, behavior);
        self.behavior = behavior;
    }
}

#[derive(Clone, Debug, Default)]
/// The squares of the board, in order.
pub struct Board {
    squares: Vec<Square>,
    jail_position: usize,
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Append a square, remembering where 'Jail' is.
    pub fn add_square(&mut self, square: Square) {
        if square.name == JAIL {
            self.jail_position = self.squares.len();
        }

        self.squares.push(square);
    }

    /// Number of squares on the board.
    pub fn size(&self) -> usize {
        self.squares.len()
    }

    /// Position of the last square named 'Jail' added to the board.
    pub fn jail_position(&self) -> usize {
        self.jail_position
    }

    /// Position of the first square with the given name.
    pub fn square_position(&self, name: &str) -> Result<usize> {
        self.squares
            .iter()
            .position(|square| square.name == name)
            .ok_or_else(|| GameError::SquareNotFound(name.to_owned()))
    }

    /// The square at `index`.
    pub fn square(&self, index: usize) -> Result<&Square> {
        let size = self.size();
        self.squares
            .get(index)
            .ok_or(GameError::PositionOutOfRange { index, size })
    }

    /// A mutable reference to the square at `index`.
    pub fn square_mut(&mut self, index: usize) -> Result<&mut Square> {
        let size = self.size();
        self.squares
            .get_mut(index)
            .ok_or(GameError::PositionOutOfRange { index, size })
    }

    /// Iterate over the squares in board order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }
}
