// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Rank;

/// Errors returned by cards operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be converted to cards.
    #[error("Invalid hand input kind: {0}")]
    InvalidInputKind(String),
    /// A five cards operation was given a different number of cards.
    #[error("Invalid hand size {0}, a hand must have 5 cards")]
    InvalidHandSize(usize),
    /// A swap with a different number of old and new cards.
    #[error("Cannot swap {old} cards with {new} cards")]
    LengthMismatch {
        /// The number of cards to remove.
        old: usize,
        /// The number of cards to add.
        new: usize,
    },
    /// A swap removing a card that is not in the hand.
    #[error("Cannot swap out card {0} not in hand")]
    CardNotInHand(Rank),
    /// A subtraction removing more cards of a rank than available.
    #[error("Cannot subtract cards, rank {rank} count would be negative")]
    NegativeCount {
        /// The first rank with a negative count.
        rank: Rank,
    },
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
