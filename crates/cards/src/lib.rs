// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninedraw Poker cards types.
//!
//! The game uses a reduced deck with six ranks, from nine to ace, and cards are
//! drawn with replacement so a hand can hold any number of cards of the same
//! rank. Ranks are written with one character each, `N`, `T`, `J`, `Q`, `K`,
//! and `A`:
//!
//! ```
//! # use ninedraw_cards::{CardSet, Hand, Rank};
//! let cards = CardSet::parse_chars("A A K K N");
//! assert_eq!(cards.count(Rank::Ace), 2);
//!
//! let hand = Hand::new(cards).unwrap();
//! assert_eq!(hand.to_string(), "A A K K N");
//! ```
//!
//! A [Hand] always has five cards, cards are exchanged with [Hand::swap] that
//! leaves the hand unchanged on errors:
//!
//! ```
//! # use ninedraw_cards::{CardSet, Error, Hand, Rank};
//! let mut hand = Hand::new(CardSet::parse_chars("AKQJT")).unwrap();
//! let res = hand.swap(&[Rank::Ten], &[Rank::Nine, Rank::Nine]);
//! assert_eq!(res, Err(Error::LengthMismatch { old: 1, new: 2 }));
//! assert_eq!(hand.to_string(), "A K Q J T");
//! ```
//!
//! To iterate all the distinct 5-cards hands:
//!
//! ```
//! # use ninedraw_cards::CardSet;
//! let mut counter = 0;
//! CardSet::for_each(5, |cards| {
//!     assert_eq!(cards.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 252);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cardset;
mod error;
mod hand;
mod input;
mod rank;

pub use cardset::CardSet;
pub use error::{Error, Result};
pub use hand::Hand;
pub use input::HandInput;
pub use rank::Rank;
