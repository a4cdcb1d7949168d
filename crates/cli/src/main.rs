// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninedraw CLI game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use ninedraw_cards::{Hand, HandInput};

pub mod game;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of draw rounds.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
    rounds: u8,
    /// Seed for a reproducible game.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The player starting hand, as cards (AAKKN) or ranks (ranks:ace,king,...).
    #[clap(long)]
    player: Option<HandInput>,
    /// The AI starting hand, same format as the player hand.
    #[clap(long)]
    ai: Option<HandInput>,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut game = game::Game::new(rng, cli.rounds as usize);
    if let Some(input) = cli.player {
        game = game.with_player(Hand::try_from(input)?);
    }

    if let Some(input) = cli.ai {
        game = game.with_ai(Hand::try_from(input)?);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = terminal::run(&mut game, &mut stdin.lock(), &mut stdout.lock())?;
    info!("Game over {outcome:?}");

    Ok(())
}
