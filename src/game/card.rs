#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The one-shot effect a card has on the player who drew it.
pub enum CardAction {
    /// Move straight to the named square and resolve it as if landed on.
    MoveTo(&'static str),
    /// The bank pays the player.
    GiveMoney(i32),
    /// The player pays the bank. There's no affordability check.
    TakeMoney(i32),
    /// Go directly to jail, same as landing on 'Go To Jail'.
    Jail,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A Chance or Community Chest card.
pub struct Card {
    /// The text read out when the card is drawn.
    pub description: &'static str,
    /// What the card does to its drawer.
    pub action: CardAction,
}

impl Card {
    /// Creates a new card.
    pub fn new(description: &'static str, action: CardAction) -> Card {
        Card {
            description,
            action,
        }
    }
}
