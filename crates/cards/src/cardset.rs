// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multiset of cards.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, iter};

use crate::{Error, Rank, Result, rank::RANKS};

/// An unordered collection of cards with repeats.
///
/// A set stores the number of cards for each rank, so two sets with the same
/// cards compare equal no matter how they were built:
///
/// ```
/// # use ninedraw_cards::{CardSet, Rank};
/// let s1 = CardSet::parse_chars("AKAKN");
/// let s2 = [Rank::Nine, Rank::King, Rank::King, Rank::Ace, Rank::Ace]
///     .into_iter()
///     .collect::<CardSet>();
/// assert_eq!(s1, s2);
/// assert_eq!(s1.to_string(), "A A K K N");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet {
    counts: [usize; Rank::COUNT],
}

impl CardSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a string of card characters.
    ///
    /// The string is not validated, any character that is not a card
    /// character is dropped.
    pub fn parse_chars(s: &str) -> Self {
        s.chars().filter_map(Rank::from_char).collect()
    }

    /// Creates a set with `size` cards drawn with replacement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        (0..size)
            .map(|_| RANKS[rng.random_range(0..Rank::COUNT)])
            .collect()
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Number of cards with the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> usize {
        self.counts[rank.index()]
    }

    /// The highest number of cards with the same rank.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or_default()
    }

    /// The non zero rank counts from the highest to the lowest.
    pub fn multiplicities(&self) -> Vec<usize> {
        let mut counts = self
            .counts
            .iter()
            .copied()
            .filter(|&c| c > 0)
            .collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    /// Checks if every card in `other` is in this set.
    pub fn contains_all(&self, other: &CardSet) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, want)| have >= want)
    }

    /// Adds a card to the set.
    pub fn insert(&mut self, rank: Rank) {
        self.counts[rank.index()] += 1;
    }

    /// Removes one card from the set, returns false if the card is missing.
    pub fn remove(&mut self, rank: Rank) -> bool {
        let count = &mut self.counts[rank.index()];
        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    /// Iterates the cards from the lowest to the highest rank.
    pub fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().flat_map(move |r| iter::repeat_n(r, self.count(r)))
    }

    /// The cards from the lowest to the highest rank.
    pub fn to_vec(&self) -> Vec<Rank> {
        self.iter().collect()
    }

    /// Returns a new set with the cards in `other` removed.
    ///
    /// Fails if `other` has more cards of a rank than this set.
    pub fn subtract(&self, other: &CardSet) -> Result<CardSet> {
        let mut counts = self.counts;
        for rank in Rank::ranks() {
            let idx = rank.index();
            counts[idx] = counts[idx]
                .checked_sub(other.counts[idx])
                .ok_or(Error::NegativeCount { rank })?;
        }

        Ok(CardSet { counts })
    }

    /// Returns a new set with the cards of both sets.
    pub fn union(&self, other: &CardSet) -> CardSet {
        let mut counts = self.counts;
        for (c, o) in counts.iter_mut().zip(other.counts.iter()) {
            *c += o;
        }

        CardSet { counts }
    }

    /// Calls the `f` closure for each distinct k-cards set.
    ///
    /// Sets are visited in ascending order of their sorted cards, starting from
    /// the set with k nines.
    pub fn for_each<F>(k: usize, mut f: F)
    where
        F: FnMut(&CardSet),
    {
        fn visit<F: FnMut(&CardSet)>(set: &mut CardSet, from: usize, left: usize, f: &mut F) {
            if left == 0 {
                f(set);
                return;
            }

            for idx in from..Rank::COUNT {
                set.counts[idx] += 1;
                visit(set, idx, left - 1, f);
                set.counts[idx] -= 1;
            }
        }

        visit(&mut CardSet::default(), 0, k, &mut f);
    }
}

impl FromIterator<Rank> for CardSet {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut set = CardSet::default();
        set.extend(iter);
        set
    }
}

impl Extend<Rank> for CardSet {
    fn extend<I: IntoIterator<Item = Rank>>(&mut self, iter: I) {
        for rank in iter {
            self.insert(rank);
        }
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Highest cards first.
        let cards = Rank::ranks()
            .rev()
            .flat_map(|r| iter::repeat_n(r, self.count(r)))
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
