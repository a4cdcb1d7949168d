// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninedraw Poker hand evaluator.
//!
//! Poker hand evaluator for five cards hands of a six ranks deck with cards
//! drawn with replacement. Hands are ranked into eight categories, from high
//! card to five of a kind, and ties within a category are broken by comparing
//! the cards from the highest down.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use ninedraw_eval::*;
//! let h1 = Hand::new(CardSet::parse_chars("AAKKN")).unwrap();
//! let h2 = Hand::new(CardSet::parse_chars("AKQJT")).unwrap();
//!
//! let v1 = HandValue::of(&h1);
//! let v2 = HandValue::of(&h2);
//! assert_eq!(v1.value(), 366_551);
//! assert_eq!(v1.rank(), HandRank::TwoPair);
//! assert_eq!(v2.label().to_string(), "Straight - High Card: A");
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandLabel, HandRank, HandValue};

// Reexport cards types.
pub use ninedraw_cards::{CardSet, Error, Hand, HandInput, Rank};
