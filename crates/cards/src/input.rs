// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Conversion of user input to cards.
use std::str::FromStr;

use crate::{CardSet, Error, Rank};

/// The inputs that can be converted to a set of cards.
///
/// A textual input can be parsed from a string with an optional `kind:` prefix:
///
/// ```
/// # use ninedraw_cards::{CardSet, HandInput};
/// let chars = "aakkn".parse::<HandInput>().unwrap();
/// let ranks = "ranks:ace,ace,king,king,nine".parse::<HandInput>().unwrap();
/// assert_eq!(chars.into_cards(), ranks.into_cards());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandInput {
    /// A string of card characters, other characters are dropped.
    Chars(String),
    /// A sequence of ranks.
    Ranks(Vec<Rank>),
    /// An already built set.
    Set(CardSet),
}

impl HandInput {
    /// Converts this input to a set of cards.
    pub fn into_cards(self) -> CardSet {
        match self {
            HandInput::Chars(s) => CardSet::parse_chars(&s),
            HandInput::Ranks(ranks) => ranks.into_iter().collect(),
            HandInput::Set(set) => set,
        }
    }
}

impl FromStr for HandInput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, value)) = s.split_once(':') else {
            return Ok(HandInput::Chars(s.to_string()));
        };

        match kind.trim().to_ascii_lowercase().as_str() {
            "chars" => Ok(HandInput::Chars(value.to_string())),
            "ranks" => value
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(|name| {
                    Rank::from_name(name).ok_or_else(|| {
                        Error::InvalidInputKind(format!("rank name `{}`", name.trim()))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(HandInput::Ranks),
            other => Err(Error::InvalidInputKind(format!("`{other}`"))),
        }
    }
}

impl From<&str> for HandInput {
    fn from(s: &str) -> Self {
        HandInput::Chars(s.to_string())
    }
}

impl From<Vec<Rank>> for HandInput {
    fn from(ranks: Vec<Rank>) -> Self {
        HandInput::Ranks(ranks)
    }
}

impl From<CardSet> for HandInput {
    fn from(set: CardSet) -> Self {
        HandInput::Set(set)
    }
}
