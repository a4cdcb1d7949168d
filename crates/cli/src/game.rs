// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw game state.
use log::{debug, info};
use rand::prelude::*;

use ninedraw_cards::{CardSet, Hand, Result};
use ninedraw_eval::HandValue;

/// The game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player hand is better.
    PlayerWins,
    /// The AI hand is better.
    AiWins,
    /// Both hands have the same value.
    Tie,
}

/// A single game between the player and the AI.
///
/// The AI never exchanges cards.
#[derive(Debug)]
pub struct Game<R> {
    rng: R,
    rounds: usize,
    player: Hand,
    ai: Hand,
}

impl<R: Rng> Game<R> {
    /// Creates a game dealing random hands.
    pub fn new(mut rng: R, rounds: usize) -> Self {
        let player = Hand::random(&mut rng);
        let ai = Hand::random(&mut rng);
        debug!("Dealt player: {player} AI: {ai}");

        Self {
            rng,
            rounds,
            player,
            ai,
        }
    }

    /// Replaces the player hand.
    pub fn with_player(mut self, hand: Hand) -> Self {
        self.player = hand;
        self
    }

    /// Replaces the AI hand.
    pub fn with_ai(mut self, hand: Hand) -> Self {
        self.ai = hand;
        self
    }

    /// The number of draw rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The player hand.
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// The AI hand.
    pub fn ai(&self) -> &Hand {
        &self.ai
    }

    /// Keeps the `hold` cards and replaces the other player cards with new
    /// random cards, returns the new cards.
    ///
    /// Fails if any held card is not in the player hand, in which case the hand
    /// is unchanged.
    pub fn hold(&mut self, hold: &CardSet) -> Result<CardSet> {
        let discard = self.player.cards().subtract(hold)?;
        let draw = CardSet::random(&mut self.rng, discard.len());
        self.player.swap(&discard.to_vec(), &draw.to_vec())?;

        debug!("Player discarded [{discard}] drew [{draw}]");
        Ok(draw)
    }

    /// Compares the player and the AI hands.
    pub fn outcome(&self) -> Outcome {
        let player = HandValue::of(&self.player);
        let ai = HandValue::of(&self.ai);
        info!("Player {player} AI {ai}");

        match player.cmp(&ai) {
            std::cmp::Ordering::Greater => Outcome::PlayerWins,
            std::cmp::Ordering::Less => Outcome::AiWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninedraw_cards::{Error, Rank};
    use rand::{SeedableRng, rngs::StdRng};

    fn hand(s: &str) -> Hand {
        Hand::new(CardSet::parse_chars(s)).unwrap()
    }

    fn game() -> Game<StdRng> {
        Game::new(StdRng::seed_from_u64(1), 2)
            .with_player(hand("AAKKN"))
            .with_ai(hand("AKQJT"))
    }

    #[test]
    fn deal_hands() {
        let game = Game::new(StdRng::seed_from_u64(3), 2);
        assert_eq!(game.rounds(), 2);
        assert_eq!(game.player().cards().len(), Hand::SIZE);
        assert_eq!(game.ai().cards().len(), Hand::SIZE);
    }

    #[test]
    fn hold_all_cards() {
        let mut game = game();
        let draw = game.hold(&CardSet::parse_chars("AAKKN")).unwrap();
        assert!(draw.is_empty());
        assert_eq!(game.player(), &hand("AAKKN"));
    }

    #[test]
    fn hold_some_cards() {
        let mut game = game();
        let draw = game.hold(&CardSet::parse_chars("AA")).unwrap();
        assert_eq!(draw.len(), 3);

        let cards = game.player().cards();
        assert_eq!(cards.len(), Hand::SIZE);
        assert!(cards.count(Rank::Ace) >= 2);
        assert_eq!(*cards, CardSet::parse_chars("AA").union(&draw));

        // The AI keeps its cards.
        assert_eq!(game.ai(), &hand("AKQJT"));
    }

    #[test]
    fn hold_no_cards() {
        let mut game = game();
        let draw = game.hold(&CardSet::new()).unwrap();
        assert_eq!(draw.len(), Hand::SIZE);
        assert_eq!(game.player().cards(), &draw);
    }

    #[test]
    fn hold_cards_not_in_hand() {
        let mut game = game();
        let err = game.hold(&CardSet::parse_chars("AAA")).unwrap_err();
        assert_eq!(err, Error::NegativeCount { rank: Rank::Ace });
        assert_eq!(game.player(), &hand("AAKKN"));

        let err = game.hold(&CardSet::parse_chars("Q")).unwrap_err();
        assert_eq!(err, Error::NegativeCount { rank: Rank::Queen });
        assert_eq!(game.player(), &hand("AAKKN"));
    }

    #[test]
    fn outcomes() {
        assert_eq!(game().outcome(), Outcome::AiWins);

        let game = game().with_player(hand("NNNNK"));
        assert_eq!(game.outcome(), Outcome::PlayerWins);

        let game = game.with_ai(hand("NKNNN"));
        assert_eq!(game.outcome(), Outcome::Tie);
    }
}
