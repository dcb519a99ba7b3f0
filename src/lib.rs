//! A simplified Monopoly simulation.
//!
//! A fixed number of players take turns rolling the dice and moving around
//! the classic 40-square London board for a fixed number of rounds. Landing
//! on a square fires its behavior: buying deeds, paying rent or tax, drawing
//! Chance and Community Chest cards, or going to jail. Whoever has the most
//! money at the end wins.
//!
//! ```no_run
//! use monopoly_sim::{Game, GameConfig, RandomDice};
//!
//! let mut game = Game::new(GameConfig::new(20, 4), RandomDice::seeded(42), std::io::stdout())?;
//! let winner = game.play()?;
//! println!("{} wins", winner);
//! # Ok::<(), monopoly_sim::GameError>(())
//! ```

pub mod game;

pub use game::board::{Board, LandBehavior, Square, SquareKind};
pub use game::card::{Card, CardAction};
pub use game::deed::{Deed, DeedKind};
pub use game::dice::{Dice, LoadedDice, RandomDice};
pub use game::error::{ErrorKind, GameError, Result};
pub use game::globals::Token;
pub use game::player::{Ownership, Player, Wallet};
pub use game::{resolve_owned_landing, Deck, Game, GameConfig, RentOutcome};
