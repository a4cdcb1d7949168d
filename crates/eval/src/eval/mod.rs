// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand value is a six digits integer, the most significant digit is the hand
//! category and the other five digits are the hand ranks ordinals from the
//! highest to the lowest card, so that comparing two values compares the hands
//! category first and then their cards.
//!
//! It provides a [HandValue::eval] method that evaluates any set of cards and
//! fails if the set doesn't have five cards, and an infallible [HandValue::of]
//! for [Hand](crate::Hand) values.

pub mod eval;
pub use eval::{HandLabel, HandRank, HandValue};

mod rules;
