// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CardSet, Error, HandInput, Rank, Result};

/// A Poker hand with exactly five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardSet", into = "CardSet")]
pub struct Hand {
    cards: CardSet,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a set of five cards.
    pub fn new(cards: CardSet) -> Result<Self> {
        if cards.len() != Self::SIZE {
            return Err(Error::InvalidHandSize(cards.len()));
        }

        Ok(Self { cards })
    }

    /// Deals a random hand.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cards: CardSet::random(rng, Self::SIZE),
        }
    }

    /// The hand cards.
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Replaces the `old` cards with the `new` cards.
    ///
    /// Each old card is exchanged with the new card at the same position. The
    /// hand is left unchanged if the number of cards differ or if any of the
    /// old cards is not in the hand.
    pub fn swap(&mut self, old: &[Rank], new: &[Rank]) -> Result<()> {
        if old.len() != new.len() {
            return Err(Error::LengthMismatch {
                old: old.len(),
                new: new.len(),
            });
        }

        let old = old.iter().copied().collect::<CardSet>();
        let rest = self.cards.subtract(&old).map_err(|err| match err {
            Error::NegativeCount { rank } => Error::CardNotInHand(rank),
            err => err,
        })?;

        self.cards = rest.union(&new.iter().copied().collect());
        Ok(())
    }
}

impl TryFrom<CardSet> for Hand {
    type Error = Error;

    fn try_from(cards: CardSet) -> Result<Self> {
        Hand::new(cards)
    }
}

impl TryFrom<HandInput> for Hand {
    type Error = Error;

    fn try_from(input: HandInput) -> Result<Self> {
        Hand::new(input.into_cards())
    }
}

impl From<Hand> for CardSet {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn hand(s: &str) -> Hand {
        Hand::new(CardSet::parse_chars(s)).unwrap()
    }

    #[test]
    fn hand_size() {
        assert_eq!(
            Hand::new(CardSet::parse_chars("AKQJ")),
            Err(Error::InvalidHandSize(4))
        );
        assert_eq!(
            Hand::new(CardSet::parse_chars("AKQJTN")),
            Err(Error::InvalidHandSize(6))
        );

        let h = Hand::try_from(HandInput::from("AAKKN")).unwrap();
        assert_eq!(h.cards().len(), Hand::SIZE);
        assert_eq!(h.to_string(), "A A K K N");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(Hand::random(&mut rng).cards().len(), Hand::SIZE);
        }
    }

    #[test]
    fn hand_serde() {
        let h = hand("AAKKN");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, serde_json::to_string(h.cards()).unwrap());
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), h);

        // Sets with the wrong number of cards are rejected.
        for s in ["AKQJ", "AKQJTN", ""] {
            let json = serde_json::to_string(&CardSet::parse_chars(s)).unwrap();
            let err = serde_json::from_str::<Hand>(&json).unwrap_err();
            let size = CardSet::parse_chars(s).len();
            assert!(err.to_string().contains(&Error::InvalidHandSize(size).to_string()));
        }
    }

    #[test]
    fn swap_cards() {
        let mut h = hand("AKQJT");
        h.swap(&[Rank::Ten], &[Rank::Nine]).unwrap();
        assert_eq!(h, hand("AKQJN"));

        // A card can be swapped with another card of the same rank.
        h.swap(&[Rank::Ace, Rank::Nine], &[Rank::Ace, Rank::Ace]).unwrap();
        assert_eq!(h, hand("AAKQJ"));

        // Swap nothing.
        h.swap(&[], &[]).unwrap();
        assert_eq!(h, hand("AAKQJ"));
    }

    #[test]
    fn swap_length_mismatch() {
        let mut h = hand("AKQJT");
        let err = h.swap(&[Rank::Ten], &[Rank::Nine, Rank::Nine]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { old: 1, new: 2 });
        assert_eq!(h, hand("AKQJT"));
    }

    #[test]
    fn swap_card_not_in_hand() {
        let mut h = hand("AKQJT");
        let err = h.swap(&[Rank::Ace, Rank::Nine], &[Rank::Ten, Rank::Ten]).unwrap_err();
        assert_eq!(err, Error::CardNotInHand(Rank::Nine));
        assert_eq!(h, hand("AKQJT"));

        // Two aces with only one in the hand.
        let err = h.swap(&[Rank::Ace, Rank::Ace], &[Rank::Ten, Rank::Ten]).unwrap_err();
        assert_eq!(err, Error::CardNotInHand(Rank::Ace));
        assert_eq!(h, hand("AKQJT"));

        // Old cards must all be in the hand before any new card is added.
        let err = h.swap(&[Rank::Ace, Rank::Nine], &[Rank::Nine, Rank::King]).unwrap_err();
        assert_eq!(err, Error::CardNotInHand(Rank::Nine));
        assert_eq!(h, hand("AKQJT"));
    }
}
