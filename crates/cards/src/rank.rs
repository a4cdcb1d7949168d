// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card ranks.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

/// All the ranks in ascending order.
pub(crate) const RANKS: [Rank; Rank::COUNT] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Maps an uppercase card character to its rank.
static CHAR_TO_RANK: LazyLock<AHashMap<char, Rank>> =
    LazyLock::new(|| RANKS.iter().map(|r| (r.to_char(), *r)).collect());

/// Card rank.
///
/// The deck only has six ranks, from nine to ace, the enum discriminant is the
/// rank ordinal used by the hand evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Nine
    Nine = 1,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 6;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The rank ordinal, nine is 1 and ace is 6.
    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for an ordinal in 1..=6.
    pub fn from_ordinal(ordinal: u8) -> Option<Rank> {
        match ordinal {
            1..=6 => Some(RANKS[ordinal as usize - 1]),
            _ => None,
        }
    }

    /// Zero based index used for per rank tables.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.ordinal() as usize - 1
    }

    /// Returns the rank for a card character, ignoring case.
    pub fn from_char(c: char) -> Option<Rank> {
        CHAR_TO_RANK.get(&c.to_ascii_uppercase()).copied()
    }

    /// The uppercase card character.
    pub fn to_char(&self) -> char {
        match self {
            Rank::Nine => 'N',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Returns the rank for a lowercase or capitalized rank name.
    pub fn from_name(name: &str) -> Option<Rank> {
        let name = name.trim();
        Rank::ranks().find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// The rank name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
