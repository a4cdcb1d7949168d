// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category detection.
use std::sync::LazyLock;

use ninedraw_cards::CardSet;

use super::HandRank;

/// A rule that assigns a category to the hands it matches.
struct Rule {
    rank: HandRank,
    matches: fn(&CardSet) -> bool,
}

/// The rules checked in order before falling back to the multiplicity rank.
const RULES: [Rule; 3] = [
    Rule {
        rank: HandRank::Straight,
        matches: is_straight,
    },
    Rule {
        rank: HandRank::FullHouse,
        matches: is_full_house,
    },
    Rule {
        rank: HandRank::TwoPair,
        matches: is_two_pair,
    },
];

/// Category for the highest number of cards with the same rank.
const MULTIPLICITY_RANKS: [HandRank; 5] = [
    HandRank::HighCard,
    HandRank::OnePair,
    HandRank::ThreeOfAKind,
    HandRank::FourOfAKind,
    HandRank::FiveOfAKind,
];

/// The only two straights in a nine to ace deck.
static STRAIGHTS: LazyLock<[CardSet; 2]> =
    LazyLock::new(|| [CardSet::parse_chars("AKQJT"), CardSet::parse_chars("KQJTN")]);

fn is_straight(cards: &CardSet) -> bool {
    STRAIGHTS.contains(cards)
}

fn is_full_house(cards: &CardSet) -> bool {
    cards.multiplicities() == [3, 2]
}

fn is_two_pair(cards: &CardSet) -> bool {
    cards.multiplicities() == [2, 2, 1]
}

/// Returns the category of a five cards set.
pub(super) fn categorize(cards: &CardSet) -> HandRank {
    debug_assert_eq!(cards.len(), 5);

    RULES
        .iter()
        .find(|rule| (rule.matches)(cards))
        .map(|rule| rule.rank)
        .unwrap_or_else(|| MULTIPLICITY_RANKS[cards.max_count().clamp(1, 5) - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(s: &str) -> HandRank {
        categorize(&CardSet::parse_chars(s))
    }

    #[test]
    fn straight_before_high_card() {
        assert_eq!(rank("AKQJT"), HandRank::Straight);
        assert_eq!(rank("NTJQK"), HandRank::Straight);

        // All distinct but not one of the two straights.
        assert_eq!(rank("AKQJN"), HandRank::HighCard);
        assert_eq!(rank("ATJQN"), HandRank::HighCard);
    }

    #[test]
    fn full_house_before_three_of_a_kind() {
        assert_eq!(rank("KKKNN"), HandRank::FullHouse);
        assert_eq!(rank("NNNAA"), HandRank::FullHouse);
        assert_eq!(rank("KKKNA"), HandRank::ThreeOfAKind);
    }

    #[test]
    fn two_pair_before_one_pair() {
        assert_eq!(rank("AAKKN"), HandRank::TwoPair);
        assert_eq!(rank("AAKQN"), HandRank::OnePair);
    }

    #[test]
    fn multiplicity_fallback() {
        assert_eq!(rank("NNNNK"), HandRank::FourOfAKind);
        assert_eq!(rank("QQQQQ"), HandRank::FiveOfAKind);
        assert_eq!(rank("QQQJT"), HandRank::ThreeOfAKind);
    }
}
