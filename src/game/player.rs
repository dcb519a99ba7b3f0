use std::collections::HashMap;
use std::fmt;

use super::deed::{Deed, DeedKind};
use super::dice::Dice;
use super::error::{GameError, Result};
use super::globals::{Token, STARTING_BALANCE};

/*********        WALLET        *********/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A player's money. The balance is allowed to go negative.
pub struct Wallet {
    balance: i32,
}

impl Default for Wallet {
    fn default() -> Self {
        Wallet {
            balance: STARTING_BALANCE,
        }
    }
}

impl Wallet {
    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i32) {
        self.balance += amount;
    }

    pub fn withdraw(&mut self, amount: i32) {
        self.balance -= amount;
    }
}

/*********        OWNERSHIP        *********/

#[derive(Clone, Debug, PartialEq, Eq)]
/// The deeds a player holds, plus the multipliers station
/// and utility rent are worked out from.
pub struct Ownership {
    /// Owned deeds keyed by square name.
    deeds: HashMap<String, Deed>,
    /// Number of stations held. Never goes down.
    station_multiplier: i32,
    /// Starts at 1 and triples with every utility bought.
    utility_multiplier: i32,
}

impl Default for Ownership {
    fn default() -> Self {
        Ownership {
            deeds: HashMap::new(),
            station_multiplier: 0,
            utility_multiplier: 1,
        }
    }
}

impl Ownership {
    /// Take hold of a deed, bumping the matching rent multiplier.
    pub fn add_deed(&mut self, deed: Deed) {
        match deed.kind {
            DeedKind::Station => self.station_multiplier += 1,
            DeedKind::Utility => self.utility_multiplier *= 3,
            DeedKind::Plain => (),
        }

        self.deeds.insert(deed.name.clone(), deed);
    }

    /// The held deed with the given name.
    pub fn deed(&self, name: &str) -> Option<&Deed> {
        self.deeds.get(name)
    }

    /// Whether a deed with the given name is held.
    pub fn owns(&self, name: &str) -> bool {
        self.deeds.contains_key(name)
    }

    /// Number of deeds held.
    pub fn len(&self) -> usize {
        self.deeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deeds.is_empty()
    }

    pub fn station_multiplier(&self) -> i32 {
        self.station_multiplier
    }

    pub fn utility_multiplier(&self) -> i32 {
        self.utility_multiplier
    }
}

/*********        PLAYER        *********/

#[derive(Clone, Debug)]
/// A player playing the game.
pub struct Player {
    /// The token identifying the player.
    pub token: Token,
    /// The player's position around the board. 'Go' is at 0.
    position: usize,
    /// Turns left to sit out in jail. 0 means the player is free.
    jail_turns: u32,
    /// The player's money.
    wallet: Wallet,
    /// The deeds the player has bought.
    ownership: Ownership,
    /// Set when a move wraps past the last square, cleared once
    /// the pass-go bonus has been handed out.
    looped: bool,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:02}] ${} ({} deeds{})",
            self.token,
            self.position,
            self.wallet.balance(),
            self.ownership.len(),
            if self.is_free() { "" } else { ", jailed" }
        )
    }
}

impl Player {
    /*********        INITIALISATION INTERFACES        *********/

    /// Create a player standing on 'Go' with the starting balance.
    pub fn new(token: Token) -> Player {
        Player {
            token,
            position: 0,
            jail_turns: 0,
            wallet: Wallet::default(),
            ownership: Ownership::default(),
            looped: false,
        }
    }

    /*********        MONEY        *********/

    /// Hand money to the player.
    pub fn pay(&mut self, amount: i32) {
        self.wallet.deposit(amount);
    }

    /// Take money from the player. The balance may end up negative.
    pub fn charge(&mut self, amount: i32) {
        self.wallet.withdraw(amount);
    }

    /// The player's balance.
    pub fn money(&self) -> i32 {
        self.wallet.balance()
    }

    /*********        MOVEMENT        *********/

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Remember that the player has wrapped around the board.
    pub fn mark_looped(&mut self) {
        self.looped = true;
    }

    pub fn has_looped(&self) -> bool {
        self.looped
    }

    /// Return whether the player has passed 'Go' since the last check.
    /// True at most once per loop, and only once the player is past 'Go'.
    pub fn passed_go(&mut self) -> bool {
        if self.looped && self.position > 0 {
            self.looped = false;
            return true;
        }

        false
    }

    /*********        JAIL        *********/

    pub fn set_jail_turns(&mut self, turns: u32) {
        self.jail_turns = turns;
    }

    /// Serve one turn of the jail term.
    pub fn reduce_jail_turns(&mut self) {
        self.jail_turns = self.jail_turns.saturating_sub(1);
    }

    pub fn jail_turns(&self) -> u32 {
        self.jail_turns
    }

    /// Whether the player can move this turn.
    pub fn is_free(&self) -> bool {
        self.jail_turns == 0
    }

    /*********        PROPERTY        *********/

    /// Take ownership of a deed.
    pub fn acquire(&mut self, mut deed: Deed) {
        deed.set_owner(self.token);
        self.ownership.add_deed(deed);
    }

    pub fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    /// Rent owed to this player for landing on the named square.
    pub fn rent_owed<D: Dice + ?Sized>(&self, name: &str, dice: &mut D) -> Result<i32> {
        let deed = self
            .ownership
            .deed(name)
            .ok_or_else(|| GameError::DeedNotFound {
                player: self.token,
                deed: name.to_owned(),
            })?;

        Ok(deed.rent(&self.ownership, dice))
    }
}
