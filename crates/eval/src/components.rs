// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand components.
use std::fmt;

use larvis_cards::{Hand, Rank};

/// A run of cards with the same rank in a hand, like `AA`, `777` or `6`.
///
/// Components order by the number of cards and then by rank, so that a pair
/// of deuces is stronger than a single ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Component {
    count: usize,
    rank: Rank,
}

impl Component {
    /// The number of cards in this component.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The rank of the component cards.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.count).try_for_each(|_| write!(f, "{}", self.rank))
    }
}

/// Returns the hand components sorted from the stronger to the weaker.
///
/// For example `7A777` gives `["7777", "A"]` and `24AA7` gives
/// `["AA", "7", "4", "2"]`.
pub fn sorted_components(hand: &Hand) -> Vec<Component> {
    let mut components = Vec::<Component>::with_capacity(Hand::SIZE);

    // Hand ranks are sorted so equal ranks are adjacent.
    for &rank in hand.ranks() {
        match components.last_mut() {
            Some(last) if last.rank == rank => last.count += 1,
            _ => components.push(Component { count: 1, rank }),
        }
    }

    components.sort_unstable_by(|a, b| b.cmp(a));
    components
}
