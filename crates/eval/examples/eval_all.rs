// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all
// ...
// Category          Hands   Draws  Probability
// High Card:            4     480      6.17%
// One Pair:            60    3600     46.30%
// Two Pair:            60    1800     23.15%
// Three of a Kind:     60    1200     15.43%
// Full House:          30     300      3.86%
// Straight:             2     240      3.09%
// Four of a Kind:      30     150      1.93%
// Five of a Kind:       6       6      0.08%
// ```

use ninedraw_eval::*;

/// Number of ordered draws that produce the given cards.
fn draws(cards: &CardSet) -> usize {
    let fact = |n: usize| (1..=n).product::<usize>();
    Rank::ranks().fold(fact(cards.len()), |acc, r| acc / fact(cards.count(r)))
}

#[rustfmt::skip]
fn main() {
    // Evaluate all the distinct hands.
    let mut hands = [0usize; 9];
    let mut weights = [0usize; 9];

    CardSet::for_each(Hand::SIZE, |cards| {
        let rank = HandValue::eval(cards).map(|v| v.rank());
        if let Ok(rank) = rank {
            hands[rank as usize] += 1;
            weights[rank as usize] += draws(cards);
        }
    });

    let total = weights.iter().sum::<usize>() as f64;
    println!("{:<16}  {:>5}   {:>5}  Probability", "Category", "Hands", "Draws");
    for rank in HandRank::ranks() {
        let idx = rank as usize;
        println!(
            "{:<16}  {:>5}   {:>5}     {:>5.2}%",
            format!("{}:", rank.label()),
            hands[idx],
            weights[idx],
            weights[idx] as f64 * 100.0 / total
        );
    }
}
