use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::globals::{DICE_MAX, DICE_MIN};

/// The single source of randomness for a game.
///
/// Everything random in the simulation goes through one `Dice`: movement,
/// utility rent and deck draws. Swapping the implementation makes a game
/// reproducible.
pub trait Dice {
    /// Roll for a movement amount, uniform over `DICE_MIN..DICE_MAX`.
    fn roll(&mut self) -> i32;

    /// Pick an index uniformly from `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> i32 {
        (**self).roll()
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Dice backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomDice<R: Rng = StdRng> {
    rng: R,
}

impl RandomDice<StdRng> {
    /// Dice that produce the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomDice<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> i32 {
        self.rng.gen_range(DICE_MIN..DICE_MAX)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        self.rng.gen_range(0..len)
    }
}

/// Dice that replay a fixed script. Both scripts wrap around once exhausted.
///
/// An empty roll script always rolls `DICE_MIN`, and an empty pick
/// script always picks the first card.
#[derive(Clone, Debug, Default)]
pub struct LoadedDice {
    rolls: Vec<i32>,
    picks: Vec<usize>,
    next_roll: usize,
    next_pick: usize,
}

impl LoadedDice {
    /// Dice that roll `rolls` in order and always draw the first card.
    pub fn new(rolls: Vec<i32>) -> Self {
        Self {
            rolls,
            ..Self::default()
        }
    }

    /// Set the deck indexes handed out by `pick`.
    pub fn with_picks(mut self, picks: Vec<usize>) -> Self {
        self.picks = picks;
        self
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> i32 {
        if self.rolls.is_empty() {
            return DICE_MIN;
        }

        let roll = self.rolls[self.next_roll % self.rolls.len()];
        self.next_roll += 1;
        roll
    }

    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }

        let pick = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        pick % len
    }
}
