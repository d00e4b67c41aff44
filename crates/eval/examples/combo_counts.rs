// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example combo_counts
// Total hands      6188
//
// High Cards:      1300
// One Pair:        2860
// Two Pairs:       858
// Triple:          858
// Full House:      156
// Four of a Kind:  156
// ```

use larvis_eval::*;

#[rustfmt::skip]
fn main() {
    let mut counts = [0usize; 6];

    Hand::for_each(|hand| {
        let combo = HandValue::eval(hand).combo();
        counts[combo.strength() as usize] += 1;
    });

    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}\n");

    println!("High Cards:      {}", counts[ComboType::HighCards as usize]);
    println!("One Pair:        {}", counts[ComboType::OnePair as usize]);
    println!("Two Pairs:       {}", counts[ComboType::TwoPairs as usize]);
    println!("Triple:          {}", counts[ComboType::Triple as usize]);
    println!("Full House:      {}", counts[ComboType::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[ComboType::FourOfAKind as usize]);
}
