mod details;
pub use details::*;

use lazy_static::lazy_static;
use strum::EnumCount;

use crate::game::card::{Card, CardAction};

/// The amount of money every player starts the game with.
pub const STARTING_BALANCE: i32 = 2000;

/// The amount a player collects for passing 'Go'.
pub const PASS_GO_REWARD: i32 = 200;

/// The number of turns a player sits out after being sent to jail.
pub const JAIL_TERM: u32 = 2;

/// Lowest dice roll (inclusive).
pub const DICE_MIN: i32 = 2;

/// Highest dice roll (exclusive). A roll of 12 never happens.
pub const DICE_MAX: i32 = 12;

/// The maximum number of players, one per token.
pub const MAX_PLAYERS: usize = Token::COUNT;

/// Name of the square every player starts on.
pub const GO: &str = "Go";

/// Name of the square players are locked up on.
pub const JAIL: &str = "Jail";

lazy_static! {
    /// Every square on the board, in order, starting from 'Go'.
    pub static ref BOARD_LAYOUT: Vec<SquareSpec> = vec![
        SquareSpec::Rest(GO),
        street("Old Kent Road", 60, 6),
        SquareSpec::CommunityChest("Community Chest"),
        street("Whitechapel Road", 60, 6),
        SquareSpec::Tax { name: "Income Tax", amount: 200 },
        station("Kings Cross Station"),
        street("The Angel Islington", 100, 10),
        SquareSpec::Chance("Chance"),
        street("Euston Road", 100, 10),
        street("Pentonville Road", 120, 12),
        SquareSpec::Rest(JAIL),
        street("Pall Mall", 140, 14),
        utility("Electric Company"),
        street("Whitehall", 140, 14),
        street("Northumberland Avenue", 160, 16),
        station("Marylebone Station"),
        street("Bow Street", 180, 18),
        SquareSpec::CommunityChest("Community Chest"),
        street("Marlborough Street", 180, 18),
        street("Vine Street", 200, 20),
        SquareSpec::Rest("Free Parking"),
        street("Strand", 220, 22),
        SquareSpec::Chance("Chance"),
        street("Fleet Street", 220, 22),
        street("Trafalgar Square", 240, 24),
        station("Fenchurch Street Station"),
        street("Leicester Square", 260, 26),
        street("Coventry Street", 260, 26),
        utility("Water Works"),
        street("Picadilly", 280, 28),
        SquareSpec::GoToJail("Go To Jail"),
        street("Regent Street", 300, 30),
        street("Oxford Street", 300, 30),
        SquareSpec::CommunityChest("Community Chest"),
        street("Bond Street", 320, 32),
        station("Liverpool Street Station"),
        SquareSpec::Chance("Chance"),
        street("Park Lane", 350, 35),
        SquareSpec::Tax { name: "Income Tax", amount: 100 },
        street("Mayfair", 400, 40),
    ];

    /// The card that sends its drawer straight to jail. It's in both decks.
    static ref JAIL_CARD: Card = Card::new(
        "Go to Jail. Go Directly To Jail. Do not pass Go. Do not collect 200",
        CardAction::Jail,
    );

    /// The Chance deck.
    pub static ref CHANCE_CARDS: Vec<Card> = vec![
        *JAIL_CARD,
        Card::new("Bank error in your favour. Collect 50", CardAction::GiveMoney(50)),
        Card::new("Advance to Go", CardAction::MoveTo(GO)),
        Card::new("Advance to Mayfair", CardAction::MoveTo("Mayfair")),
        Card::new("Pay School Fees. 150", CardAction::TakeMoney(150)),
        Card::new("You have won a crossword competition. 100", CardAction::GiveMoney(100)),
        Card::new("Drunk in charge fine. 20", CardAction::TakeMoney(20)),
    ];

    /// The Community Chest deck.
    pub static ref COMMUNITY_CHEST_CARDS: Vec<Card> = vec![
        *JAIL_CARD,
        Card::new("You've won second prize in a beauty contest. Collect 10", CardAction::GiveMoney(10)),
        Card::new("Pay your insurance premium. 50", CardAction::TakeMoney(50)),
        Card::new("Go back to Old Kent Road", CardAction::MoveTo("Old Kent Road")),
        Card::new("Hospital Bill. 100", CardAction::TakeMoney(100)),
        Card::new("Income tax refund. 20", CardAction::GiveMoney(20)),
        Card::new("Annuity matures. 100", CardAction::GiveMoney(100)),
    ];
}
