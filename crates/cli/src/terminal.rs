// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::style::Stylize;
use log::debug;
use rand::Rng;
use std::io;

use ninedraw_cards::{CardSet, Hand};
use ninedraw_eval::HandValue;

use crate::game::{Game, Outcome};

/// Runs the game reading the held cards from `input`.
pub fn run<R, I, W>(game: &mut Game<R>, input: &mut I, out: &mut W) -> Result<Outcome>
where
    R: Rng,
    I: io::BufRead,
    W: io::Write,
{
    for round in 1..=game.rounds() {
        writeln!(out, "Round {round}:")?;
        print_hands(out, game)?;

        loop {
            write!(out, "Hold onto which cards? ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("Input closed before the end of the game");
            }

            match game.hold(&CardSet::parse_chars(&line)) {
                Ok(_) => break,
                Err(e) => {
                    debug!("Invalid hold {}: {e}", line.trim());
                    writeln!(out, "You can only hold onto cards currently in your hand.")?;
                }
            }
        }
    }

    writeln!(out, "Final:")?;
    print_hands(out, game)?;

    let outcome = game.outcome();
    match outcome {
        Outcome::PlayerWins => writeln!(out, "{}", "YOU WIN! HOW DID THAT HAPPEN?".green())?,
        Outcome::AiWins => writeln!(out, "{}", "YOU LOSE! HOW COULD YOU?".red())?,
        Outcome::Tie => writeln!(out, "{}", "IT'S A TIE!".yellow())?,
    }

    out.flush()?;
    Ok(outcome)
}

fn print_hands<R: Rng>(w: &mut impl io::Write, game: &Game<R>) -> Result<()> {
    print_hand(w, "Your hand:", game.player())?;
    print_hand(w, "AI hand:", game.ai())
}

fn print_hand(w: &mut impl io::Write, name: &str, hand: &Hand) -> Result<()> {
    let value = HandValue::of(hand);
    let counts = hand.cards().multiplicities();
    writeln!(w, "{name:<11}{hand} : {} {value} {counts:?}", value.label())?;
    Ok(())
}
