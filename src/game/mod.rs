use std::collections::HashMap;
use std::io::Write;
use std::thread;
use std::time::Duration;

use strum::{Display, IntoEnumIterator};

pub mod board;
pub mod card;
pub mod deed;
pub mod dice;
pub mod error;
pub mod globals;
pub mod player;

use board::{Board, LandBehavior, Square};
use card::{Card, CardAction};
use deed::Deed;
use dice::Dice;
use error::{GameError, Result};
use globals::*;
use player::Player;

/*********        CONFIGURATION        *********/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How a game is set up.
pub struct GameConfig {
    /// Number of rounds. Every player takes one turn per round.
    pub num_turns: u32,
    /// Number of players, at most one per token.
    pub num_players: usize,
    /// Pause after every turn.
    pub turn_delay: Duration,
}

impl GameConfig {
    /// A config with no pause between turns.
    pub fn new(num_turns: u32, num_players: usize) -> Self {
        GameConfig {
            num_turns,
            num_players,
            turn_delay: Duration::ZERO,
        }
    }

    pub fn with_turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    /// Reject player counts the game can't be played with.
    pub fn validate(&self) -> Result<()> {
        if self.num_players == 0 {
            return Err(GameError::InvalidConfiguration(
                "at least one player is needed".to_owned(),
            ));
        }

        if self.num_players > MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "{} players requested but there are only {} tokens",
                self.num_players, MAX_PLAYERS
            )));
        }

        Ok(())
    }
}

/*********        RENT RESOLUTION        *********/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// What happens when a player lands on a square someone owns.
pub enum RentOutcome {
    /// The owner landed on their own square. No money moves.
    OwnSquare,
    /// The lander pays this much to the owner.
    Paid(i32),
    /// The lander can't cover this much rent, so nothing is paid.
    CannotAfford(i32),
}

/// Work out what `lander` owes `owner` for landing on the named square.
/// Neither player is touched. Only utility rent consumes a dice roll.
pub fn resolve_owned_landing<D: Dice + ?Sized>(
    owner: &Player,
    lander: &Player,
    square: &str,
    dice: &mut D,
) -> Result<RentOutcome> {
    if owner.token == lander.token {
        return Ok(RentOutcome::OwnSquare);
    }

    let rent = owner.rent_owed(square, dice)?;

    if lander.money() >= rent {
        Ok(RentOutcome::Paid(rent))
    } else {
        Ok(RentOutcome::CannotAfford(rent))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
/// The two card decks.
pub enum Deck {
    Chance,
    #[strum(serialize = "Community Chest")]
    CommunityChest,
}

/*********        GAME        *********/

/// A simulation of Monopoly.
pub struct Game<D: Dice, W: Write> {
    config: GameConfig,
    /// Players in turn order. A player's index is also
    /// how an owned square refers to its owner.
    players: Vec<Player>,
    board: Board,
    /// Deeds still held by the bank, keyed by square name.
    deeds: HashMap<String, Deed>,
    chance_cards: Vec<Card>,
    community_chest_cards: Vec<Card>,
    /// The single source of randomness.
    dice: D,
    /// Where narration goes.
    out: W,
}

impl<D: Dice, W: Write> Game<D, W> {
    /*********        INITIALISATION INTERFACES        *********/

    /// Set up the board, the decks and the players.
    pub fn new(config: GameConfig, dice: D, out: W) -> Result<Self> {
        config.validate()?;

        let mut game = Game {
            config,
            players: Token::iter()
                .take(config.num_players)
                .map(Player::new)
                .collect(),
            board: Board::new(),
            deeds: HashMap::new(),
            chance_cards: CHANCE_CARDS.clone(),
            community_chest_cards: COMMUNITY_CHEST_CARDS.clone(),
            dice,
            out,
        };

        game.add_board_squares();
        log::debug!(
            "Board has {} squares and {} deeds for sale",
            game.board.size(),
            game.deeds.len()
        );

        Ok(game)
    }

    /// Lay the squares out in board order, putting every deed in the bank.
    fn add_board_squares(&mut self) {
        for spec in BOARD_LAYOUT.iter() {
            let square = match *spec {
                SquareSpec::Rest(name) => Square::new(name, LandBehavior::Rest),
                SquareSpec::Buyable {
                    name,
                    kind,
                    cost,
                    rent,
                } => {
                    self.deeds
                        .insert(name.to_owned(), Deed::new(name, kind, cost, rent));
                    Square::new(name, LandBehavior::Buyable)
                }
                SquareSpec::Tax { name, amount } => Square::tax(name, amount),
                SquareSpec::GoToJail(name) => Square::new(name, LandBehavior::GoToJail),
                SquareSpec::Chance(name) => Square::new(name, LandBehavior::Chance),
                SquareSpec::CommunityChest(name) => {
                    Square::new(name, LandBehavior::CommunityChest)
                }
            };

            self.board.add_square(square);
        }
    }

    /*********        PUBLIC INTERFACES        *********/

    /// Play every round, then announce the winner.
    pub fn play(&mut self) -> Result<Token> {
        log::info!(
            "Playing {} rounds with {} players",
            self.config.num_turns,
            self.players.len()
        );

        for round in 0..self.config.num_turns {
            log::debug!("Round {}", round + 1);

            for index in 0..self.players.len() {
                self.take_turn(index)?;
            }
        }

        self.end_game()
    }

    /// Play one turn for the player at `index`.
    pub fn take_turn(&mut self, index: usize) -> Result<()> {
        let size = self.board.size();

        if self.player_at(index)?.is_free() {
            let roll = self.dice.roll();
            let player = &mut self.players[index];
            let current = player.position();
            let total = current + roll as usize;

            // Wrapping past the last square earns the pass-go bonus
            if total >= size {
                player.mark_looped();
            }

            player.set_position(total % size);
            log::debug!("{} rolled {}: {} -> {}", player.token, roll, current, total % size);
            writeln!(self.out, "Player {} rolled {}", player.token, roll)?;

            if self.players[index].passed_go() {
                self.pass_go(index)?;
            }

            self.land_player_on_square(index)?;
        } else {
            let player = &mut self.players[index];
            player.reduce_jail_turns();
            writeln!(
                self.out,
                "Player {} is in jail for {} more turn(s)",
                player.token,
                player.jail_turns()
            )?;
        }

        if self.config.turn_delay > Duration::ZERO {
            thread::sleep(self.config.turn_delay);
        }

        Ok(())
    }

    /// Resolve whatever square the player at `index` is standing on.
    pub fn land_player_on_square(&mut self, index: usize) -> Result<()> {
        let position = self.player_at(index)?.position();
        let square = self.board.square(position)?;
        let name = square.name().to_owned();
        let behavior = square.behavior();
        let token = self.players[index].token;

        writeln!(self.out, "Player {} landed on {}", token, name)?;

        match behavior {
            LandBehavior::Rest => {
                writeln!(self.out, "Player {} relaxes on {}", token, name)?;
            }
            LandBehavior::Buyable => self.offer_deed(index, position)?,
            LandBehavior::Tax => self.charge_tax(index, position)?,
            LandBehavior::GoToJail => {
                writeln!(
                    self.out,
                    "Player {0} has gone to jail. Player {0} has gone directly to jail. \
                     Has not passed go or collected {1}",
                    token, PASS_GO_REWARD
                )?;
                self.send_to_jail(index);
            }
            LandBehavior::Chance => self.draw_card(index, Deck::Chance)?,
            LandBehavior::CommunityChest => self.draw_card(index, Deck::CommunityChest)?,
            LandBehavior::Owned { owner } => self.collect_rent(owner, index, &name)?,
        }

        Ok(())
    }

    /// Decide the winner and print the final standings.
    pub fn end_game(&mut self) -> Result<Token> {
        for player in &self.players {
            log::debug!("{}", player);
            writeln!(
                self.out,
                "Player {} finished with {} Monopoly Money",
                player.token,
                player.money()
            )?;
        }

        let winner = self
            .winner()
            .map(|player| player.token)
            .ok_or_else(|| GameError::InvalidConfiguration("no players".to_owned()))?;

        writeln!(self.out, "The winner was Player {}", winner)?;
        log::info!("{} won", winner);

        Ok(winner)
    }

    /// The richest player. Ties go to whoever comes first in turn order.
    pub fn winner(&self) -> Option<&Player> {
        let mut players = self.players.iter();
        let mut winner = players.next()?;

        for player in players {
            if player.money() > winner.money() {
                winner = player;
            }
        }

        Some(winner)
    }

    /*********        GETTERS        *********/

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the first square with the given name.
    pub fn square_position(&self, name: &str) -> Result<usize> {
        self.board.square_position(name)
    }

    /// The bank's deed for the named square, if nobody has bought it yet.
    pub fn unowned_deed(&self, name: &str) -> Option<&Deed> {
        self.deeds.get(name)
    }

    /// The narration sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /*********        HELPER FUNCTIONS        *********/

    fn player_at(&self, index: usize) -> Result<&Player> {
        self.players
            .get(index)
            .ok_or(GameError::PlayerNotFound(index))
    }

    /// Give the player at `index` the pass-go reward.
    fn pass_go(&mut self, index: usize) -> Result<()> {
        let player = &mut self.players[index];
        writeln!(
            self.out,
            "Player {} has passed go! Player has collected {}",
            player.token, PASS_GO_REWARD
        )?;
        player.pay(PASS_GO_REWARD);

        Ok(())
    }

    /// Send the player at `index` straight to jail, skipping 'Go'.
    fn send_to_jail(&mut self, index: usize) {
        let jail = self.board.jail_position();
        let player = &mut self.players[index];

        player.set_position(jail);
        player.set_jail_turns(JAIL_TERM);
    }

    /// Sell the square's deed to the player at `index` if they can afford it.
    fn offer_deed(&mut self, index: usize, position: usize) -> Result<()> {
        let name = self.board.square(position)?.name().to_owned();
        let cost = self
            .deeds
            .get(&name)
            .map(|deed| deed.cost)
            .ok_or_else(|| GameError::UnownedDeedNotFound(name.clone()))?;
        let token = self.players[index].token;

        if self.players[index].money() < cost {
            writeln!(self.out, "Player {} cannot afford {}", token, name)?;
            return Ok(());
        }

        writeln!(self.out, "Player {} is buying {}", token, name)?;

        if let Some(deed) = self.deeds.remove(&name) {
            let player = &mut self.players[index];
            player.charge(cost);
            player.acquire(deed);
        }

        // From now on, landing here means paying rent to the buyer
        self.board
            .square_mut(position)?
            .rebind(LandBehavior::Owned { owner: index });

        Ok(())
    }

    /// Charge the player at `index` the square's tax, affordable or not.
    fn charge_tax(&mut self, index: usize, position: usize) -> Result<()> {
        let square = self.board.square(position)?;
        let tax = square
            .tax_value()
            .ok_or_else(|| GameError::NotATaxSquare(square.name().to_owned()))?;
        let player = &mut self.players[index];

        writeln!(self.out, "Player {} has payed {} in tax", player.token, tax)?;
        player.charge(tax);

        Ok(())
    }

    /// Settle rent between the owner and the player who landed on their square.
    fn collect_rent(&mut self, owner: usize, lander: usize, square: &str) -> Result<()> {
        let owner_player = self
            .players
            .get(owner)
            .ok_or(GameError::PlayerNotFound(owner))?;
        let lander_player = self
            .players
            .get(lander)
            .ok_or(GameError::PlayerNotFound(lander))?;
        let outcome = resolve_owned_landing(owner_player, lander_player, square, &mut self.dice)?;
        let owner_token = self.players[owner].token;
        let lander_token = self.players[lander].token;

        match outcome {
            RentOutcome::OwnSquare => {
                writeln!(
                    self.out,
                    "Player {} enjoyed their time on {}",
                    lander_token, square
                )?;
            }
            RentOutcome::Paid(rent) => {
                writeln!(
                    self.out,
                    "Player {} is paying {} rent to Owner {}",
                    lander_token, rent, owner_token
                )?;
                self.players[lander].charge(rent);
                self.players[owner].pay(rent);
            }
            RentOutcome::CannotAfford(rent) => {
                log::debug!("{} is short of {} rent", lander_token, rent);
                writeln!(
                    self.out,
                    "Player {} cannot afford to pay rent to Owner {}",
                    lander_token, owner_token
                )?;
            }
        }

        Ok(())
    }

    /// Draw a random card from `deck` and apply it to the player at `index`.
    fn draw_card(&mut self, index: usize, deck: Deck) -> Result<()> {
        let cards = match deck {
            Deck::Chance => &self.chance_cards,
            Deck::CommunityChest => &self.community_chest_cards,
        };
        let pick = self.dice.pick(cards.len());
        let card = *cards
            .get(pick)
            .ok_or_else(|| GameError::InvalidConfiguration(format!("the {} deck is empty", deck)))?;
        let token = self.players[index].token;

        log::trace!("{} drew {} card #{}", token, deck, pick);
        writeln!(self.out, "Player {} has drawn a {} card", token, deck)?;
        writeln!(self.out, "{}", card.description)?;

        self.apply_card(index, card.action)
    }

    /// Carry out a card's effect on the player at `index`.
    fn apply_card(&mut self, index: usize, action: CardAction) -> Result<()> {
        match action {
            CardAction::MoveTo(name) => {
                let position = self.board.square_position(name)?;
                self.players[index].set_position(position);
                self.land_player_on_square(index)?;

                // The bonus for advancing to 'Go' is paid on the next move away from it
                if name == GO {
                    self.players[index].mark_looped();
                }
            }
            CardAction::GiveMoney(amount) => self.players[index].pay(amount),
            CardAction::TakeMoney(amount) => self.players[index].charge(amount),
            CardAction::Jail => self.send_to_jail(index),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::deed::DeedKind;
    use crate::game::dice::LoadedDice;
    use crate::game::error::ErrorKind;
    use proptest::prelude::*;

    type TestGame = Game<LoadedDice, Vec<u8>>;

    fn game(players: usize, dice: LoadedDice) -> TestGame {
        Game::new(GameConfig::new(1, players), dice, Vec::new()).unwrap()
    }

    fn narration(game: &TestGame) -> String {
        String::from_utf8_lossy(game.output()).into_owned()
    }

    fn position_of(game: &TestGame, name: &str) -> usize {
        game.square_position(name).unwrap()
    }

    #[test]
    fn config_rejects_too_many_or_no_players() {
        for players in [0, 7] {
            let err = GameConfig::new(5, players).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        }

        assert!(GameConfig::new(0, 6).validate().is_ok());
    }

    #[test]
    fn players_get_tokens_in_order() {
        let game = game(3, LoadedDice::default());
        let tokens: Vec<Token> = game.players().iter().map(|p| p.token).collect();

        assert_eq!(tokens, vec![Token::Car, Token::Dog, Token::Hat]);
    }

    #[test]
    fn board_is_laid_out_with_every_deed_in_the_bank() {
        let game = game(1, LoadedDice::default());

        assert_eq!(game.board().size(), 40);
        assert_eq!(game.board().jail_position(), 10);
        assert_eq!(game.unowned_deed("Mayfair").map(|d| d.cost), Some(400));
        assert_eq!(
            game.unowned_deed("Water Works").map(|d| d.kind),
            Some(DeedKind::Utility)
        );
        assert_eq!(game.board().square(4).unwrap().tax_value(), Some(200));
        assert_eq!(game.board().square(38).unwrap().tax_value(), Some(100));
    }

    #[test]
    fn resting_squares_do_nothing() {
        let mut game = game(1, LoadedDice::default());
        let parking = position_of(&game, "Free Parking");
        game.player_mut(0).unwrap().set_position(parking);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), STARTING_BALANCE);
        assert!(narration(&game).contains("Player Car relaxes on Free Parking"));
    }

    #[test]
    fn buying_rebinds_the_square_to_its_owner() {
        let mut game = game(2, LoadedDice::default());
        let strand = position_of(&game, "Strand");
        game.player_mut(1).unwrap().set_position(strand);

        game.land_player_on_square(1).unwrap();

        assert_eq!(game.players()[1].money(), 2000 - 220);
        assert!(game.unowned_deed("Strand").is_none());
        assert_eq!(
            game.board().square(strand).unwrap().behavior(),
            LandBehavior::Owned { owner: 1 }
        );
        assert_eq!(
            game.players()[1]
                .ownership()
                .deed("Strand")
                .and_then(Deed::owner),
            Some(Token::Dog)
        );
    }

    #[test]
    fn buying_needs_enough_money() {
        let mut game = game(1, LoadedDice::default());
        let mayfair = position_of(&game, "Mayfair");
        let player = game.player_mut(0).unwrap();
        player.charge(1601);
        player.set_position(mayfair);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), 399);
        assert!(game.unowned_deed("Mayfair").is_some());
        assert_eq!(
            game.board().square(mayfair).unwrap().behavior(),
            LandBehavior::Buyable
        );
        assert!(narration(&game).contains("Player Car cannot afford Mayfair"));
    }

    #[test]
    fn buying_at_exactly_the_cost_succeeds() {
        let mut game = game(1, LoadedDice::default());
        let mayfair = position_of(&game, "Mayfair");
        let player = game.player_mut(0).unwrap();
        player.charge(1600);
        player.set_position(mayfair);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), 0);
        assert!(game.players()[0].ownership().owns("Mayfair"));
    }

    #[test]
    fn rent_moves_from_lander_to_owner() {
        let mut game = game(2, LoadedDice::default());
        let kent = position_of(&game, "Old Kent Road");
        game.player_mut(0).unwrap().set_position(kent);
        game.land_player_on_square(0).unwrap();

        game.player_mut(1).unwrap().set_position(kent);
        game.land_player_on_square(1).unwrap();

        assert_eq!(game.players()[0].money(), 2000 - 60 + 6);
        assert_eq!(game.players()[1].money(), 2000 - 6);
        assert!(narration(&game).contains("Player Dog is paying 6 rent to Owner Car"));
    }

    #[test]
    fn owner_pays_nothing_on_their_own_square() {
        let mut game = game(1, LoadedDice::default());
        let kent = position_of(&game, "Old Kent Road");
        game.player_mut(0).unwrap().set_position(kent);
        game.land_player_on_square(0).unwrap();
        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), 1940);
        assert!(narration(&game).contains("Player Car enjoyed their time on Old Kent Road"));
    }

    #[test]
    fn insolvent_lander_pays_no_rent() {
        let mut game = game(2, LoadedDice::default());
        let mayfair = position_of(&game, "Mayfair");
        game.player_mut(0).unwrap().set_position(mayfair);
        game.land_player_on_square(0).unwrap();

        let lander = game.player_mut(1).unwrap();
        lander.charge(1970);
        lander.set_position(mayfair);
        game.land_player_on_square(1).unwrap();

        assert_eq!(game.players()[0].money(), 1600);
        assert_eq!(game.players()[1].money(), 30);
        assert!(narration(&game).contains("Player Dog cannot afford to pay rent to Owner Car"));
    }

    #[test]
    fn utility_rent_uses_the_shared_dice() {
        let mut game = game(2, LoadedDice::new(vec![8]));
        let works = position_of(&game, "Water Works");
        game.player_mut(0).unwrap().set_position(works);
        game.land_player_on_square(0).unwrap();

        game.player_mut(1).unwrap().set_position(works);
        game.land_player_on_square(1).unwrap();

        // One utility owned, so the roll is tripled
        assert_eq!(game.players()[1].money(), 2000 - 24);
        assert_eq!(game.players()[0].money(), 2000 - 150 + 24);
    }

    #[test]
    fn tax_is_charged_without_an_affordability_check() {
        let mut game = game(1, LoadedDice::default());
        let player = game.player_mut(0).unwrap();
        player.charge(1950);
        player.set_position(4);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), -150);
    }

    #[test]
    fn go_to_jail_square_locks_the_player_up() {
        let mut game = game(1, LoadedDice::default());
        let go_to_jail = position_of(&game, "Go To Jail");
        game.player_mut(0).unwrap().set_position(go_to_jail);

        game.land_player_on_square(0).unwrap();

        let player = &game.players()[0];
        assert_eq!(player.position(), 10);
        assert_eq!(player.jail_turns(), JAIL_TERM);
        assert_eq!(player.money(), STARTING_BALANCE);
    }

    #[test]
    fn chance_cards_are_drawn_from_the_chance_deck() {
        // Card #1 of the Chance deck is the bank error
        let mut game = game(1, LoadedDice::default().with_picks(vec![1]));
        game.player_mut(0).unwrap().set_position(7);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), 2050);
        let text = narration(&game);
        assert!(text.contains("Player Car has drawn a Chance card"));
        assert!(text.contains("Bank error in your favour. Collect 50"));
    }

    #[test]
    fn community_chest_cards_are_drawn_from_their_own_deck() {
        // Card #2 of the Community Chest deck is the insurance premium
        let mut game = game(1, LoadedDice::default().with_picks(vec![2]));
        game.player_mut(0).unwrap().set_position(2);

        game.land_player_on_square(0).unwrap();

        assert_eq!(game.players()[0].money(), 1950);
        assert!(narration(&game).contains("Player Car has drawn a Community Chest card"));
    }

    #[test]
    fn move_card_resolves_the_destination() {
        // Card #3 of the Community Chest deck sends the player back to Old Kent Road
        let mut game = game(1, LoadedDice::default().with_picks(vec![3]));
        game.player_mut(0).unwrap().set_position(17);

        game.land_player_on_square(0).unwrap();

        let player = &game.players()[0];
        assert_eq!(player.position(), 1);
        assert!(player.ownership().owns("Old Kent Road"));
        assert!(!player.has_looped());
    }

    #[test]
    fn advance_to_go_pays_out_on_the_next_move() {
        // Card #2 of the Chance deck is "Advance to Go"
        let mut game = game(1, LoadedDice::new(vec![3]).with_picks(vec![2]));
        game.player_mut(0).unwrap().set_position(22);

        game.land_player_on_square(0).unwrap();
        assert_eq!(game.players()[0].position(), 0);
        assert!(game.players()[0].has_looped());
        assert_eq!(game.players()[0].money(), STARTING_BALANCE);

        // Rolls 3 onto Whitechapel Road, collecting the bonus before buying it
        game.take_turn(0).unwrap();
        assert_eq!(game.players()[0].money(), 2000 + 200 - 60);
        assert!(!game.players()[0].has_looped());
    }

    #[test]
    fn jail_card_matches_the_jail_square() {
        let mut game = game(1, LoadedDice::default().with_picks(vec![0]));
        game.player_mut(0).unwrap().set_position(36);

        game.land_player_on_square(0).unwrap();

        let player = &game.players()[0];
        assert_eq!(player.position(), game.board().jail_position());
        assert_eq!(player.jail_turns(), JAIL_TERM);
    }

    #[test]
    fn unknown_player_is_not_found() {
        let mut game = game(2, LoadedDice::default());
        let err = game.take_turn(2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn ties_go_to_the_first_player() {
        let mut game = game(3, LoadedDice::default());
        game.player_mut(1).unwrap().pay(100);
        game.player_mut(2).unwrap().pay(100);

        assert_eq!(game.winner().map(|p| p.token), Some(Token::Dog));
        assert_eq!(game.end_game().unwrap(), Token::Dog);
        assert!(narration(&game).contains("The winner was Player Dog"));
    }

    #[test]
    fn resolving_rent_touches_no_one() {
        let mut owner = Player::new(Token::Car);
        owner.acquire(Deed::new("Strand", DeedKind::Plain, 220, 22));
        let mut lander = Player::new(Token::Dog);
        let mut dice = LoadedDice::default();

        assert_eq!(
            resolve_owned_landing(&owner, &lander, "Strand", &mut dice).unwrap(),
            RentOutcome::Paid(22)
        );
        assert_eq!(
            resolve_owned_landing(&owner, &owner, "Strand", &mut dice).unwrap(),
            RentOutcome::OwnSquare
        );

        lander.charge(1990);
        assert_eq!(
            resolve_owned_landing(&owner, &lander, "Strand", &mut dice).unwrap(),
            RentOutcome::CannotAfford(22)
        );
        assert_eq!(lander.money(), 10);
        assert_eq!(owner.money(), 2000);
    }

    proptest! {
        #[test]
        fn prop_moves_wrap_and_flag_loops(start in 0usize..40, roll in 2i32..12) {
            let mut game = game(1, LoadedDice::new(vec![roll]));
            game.player_mut(0).unwrap().set_position(start);

            let total = start + roll as usize;
            let expected = total % 40;
            let square = game.board().square(expected).unwrap().behavior();

            game.take_turn(0).unwrap();

            let player = &game.players()[0];
            match square {
                // These squares can move the player on again
                LandBehavior::GoToJail | LandBehavior::Chance | LandBehavior::CommunityChest => (),
                _ => prop_assert_eq!(player.position(), expected),
            }

            if total >= 40 && expected > 0 {
                // The loop was paid out straight away
                prop_assert!(!player.has_looped());
                prop_assert!(narration(&game).contains("has passed go"));
            } else if total >= 40 {
                // Landed exactly on 'Go'; the bonus waits for the next move
                prop_assert!(player.has_looped());
                prop_assert_eq!(player.money(), STARTING_BALANCE);
            } else {
                prop_assert!(!narration(&game).contains("has passed go"));
            }
        }

        #[test]
        fn prop_station_rent_scales(stations in 1usize..=4) {
            let names = [
                "Kings Cross Station",
                "Marylebone Station",
                "Fenchurch Street Station",
                "Liverpool Street Station",
            ];
            let mut owner = Player::new(Token::Car);
            for name in names.iter().take(stations) {
                owner.acquire(Deed::new(*name, DeedKind::Station, 200, 25));
            }

            let rent = owner.rent_owed(names[0], &mut LoadedDice::default()).unwrap();
            prop_assert_eq!(rent, 25 * stations as i32);
        }
    }
}
