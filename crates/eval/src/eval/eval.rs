// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value and category types.
use serde::Serialize;
use std::fmt;

use ninedraw_cards::{CardSet, Error, Hand, Rank, Result};

use super::rules;

/// The weight of each card in the sorted hand, the lowest card first.
const WEIGHTS: [u32; Hand::SIZE] = [1, 10, 100, 1_000, 10_000];

/// All the categories from the lowest to the highest.
const HAND_RANKS: [HandRank; 8] = [
    HandRank::HighCard,
    HandRank::OnePair,
    HandRank::TwoPair,
    HandRank::ThreeOfAKind,
    HandRank::FullHouse,
    HandRank::Straight,
    HandRank::FourOfAKind,
    HandRank::FiveOfAKind,
];

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Full house.
    FullHouse,
    /// Straight.
    Straight,
    /// Four of a kind.
    FourOfAKind,
    /// Five of a kind.
    FiveOfAKind,
}

impl HandRank {
    /// The value range of each category.
    pub const BAND: u32 = 100_000;

    /// Returns all categories.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        HAND_RANKS.into_iter()
    }

    /// The lowest value of a hand with this category.
    pub fn base(&self) -> u32 {
        *self as u32 * Self::BAND
    }

    /// The category name.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Straight => "Straight",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The value of a five cards hand, higher values are better hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a five cards set.
    pub fn eval(cards: &CardSet) -> Result<Self> {
        if cards.len() != Hand::SIZE {
            return Err(Error::InvalidHandSize(cards.len()));
        }

        Ok(Self::compute(cards))
    }

    /// Evaluates a hand.
    pub fn of(hand: &Hand) -> Self {
        Self::compute(hand.cards())
    }

    fn compute(cards: &CardSet) -> Self {
        let rank = rules::categorize(cards);
        let tie_break = cards
            .iter()
            .zip(WEIGHTS)
            .map(|(r, w)| w * r.ordinal() as u32)
            .sum::<u32>();

        Self(rank.base() + tie_break)
    }

    /// The integer value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        let idx = (self.0 / HandRank::BAND) as usize;
        match idx {
            1..=8 => HAND_RANKS[idx - 1],
            _ => panic!("Invalid hand value {}", self.0),
        }
    }

    /// The cards digits without the category.
    pub fn tie_break(&self) -> u32 {
        self.0 % HandRank::BAND
    }

    /// The highest card, read from the ten thousands digit.
    pub fn high_card(&self) -> Rank {
        let digit = (self.tie_break() / 10_000) as u8;
        match Rank::from_ordinal(digit) {
            Some(rank) => rank,
            None => panic!("Invalid hand value {}", self.0),
        }
    }

    /// The human readable category and high card.
    pub fn label(&self) -> HandLabel {
        HandLabel {
            rank: self.rank(),
            high_card: self.high_card(),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hand description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandLabel {
    /// The hand category.
    pub rank: HandRank,
    /// The hand highest card.
    pub high_card: Rank,
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - High Card: {}", self.rank, self.high_card)
    }
}
