// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands classification and comparison.
use std::{cmp::Ordering, fmt};

use larvis_cards::{Hand, HandError};

use crate::components::{Component, sorted_components};

/// A hand combination, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComboType {
    /// No two cards with the same rank.
    HighCards = 0,
    /// Two cards with the same rank.
    OnePair,
    /// Two pairs with different ranks.
    TwoPairs,
    /// Three cards with the same rank.
    Triple,
    /// A triple and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
}

impl ComboType {
    /// Classifies a hand from its components.
    pub fn of(components: &[Component]) -> Self {
        let mut buckets = [0usize; 5];
        for c in components {
            if let Some(bucket) = buckets.get_mut(c.count()) {
                *bucket += 1;
            }
        }

        // First match wins, five of a kind has no bucket and falls through.
        match (buckets[4], buckets[3], buckets[2]) {
            (1, _, _) => ComboType::FourOfAKind,
            (_, 1, 1) => ComboType::FullHouse,
            (_, 1, 0) => ComboType::Triple,
            (_, _, 2) => ComboType::TwoPairs,
            (_, _, 1) => ComboType::OnePair,
            _ => ComboType::HighCards,
        }
    }

    /// The combination strength, from 0 for high cards to 5 for four of a kind.
    pub fn strength(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComboType::HighCards => "High Cards",
            ComboType::OnePair => "One Pair",
            ComboType::TwoPairs => "Two Pairs",
            ComboType::Triple => "Triple",
            ComboType::FullHouse => "Full House",
            ComboType::FourOfAKind => "Four of a Kind",
        };

        write!(f, "{name}")
    }
}

/// The value of a hand used to compare it with other hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandValue {
    combo: ComboType,
    components: Vec<Component>,
}

impl HandValue {
    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        let components = sorted_components(hand);
        let combo = ComboType::of(&components);
        Self { combo, components }
    }

    /// The hand combination.
    pub fn combo(&self) -> ComboType {
        self.combo
    }

    /// The hand components sorted from the stronger to the weaker.
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Components only break ties within the same combination, the first
        // component that differs decides.
        self.combo
            .cmp(&other.combo)
            .then_with(|| self.components.cmp(&other.components))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The first hand wins.
    Hand1Wins,
    /// The second hand wins.
    Hand2Wins,
    /// The hands have the same value.
    Tie,
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::Hand1Wins,
            Ordering::Less => Verdict::Hand2Wins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self {
            Verdict::Hand1Wins => "Hand 1",
            Verdict::Hand2Wins => "Hand 2",
            Verdict::Tie => "Tie",
        };

        write!(f, "{verdict}")
    }
}

/// Compares two hands.
pub fn compare(hand1: &Hand, hand2: &Hand) -> Verdict {
    HandValue::eval(hand1).cmp(&HandValue::eval(hand2)).into()
}

/// Parses and compares two raw hands.
pub fn compare_str(hand1: &str, hand2: &str) -> Result<Verdict, HandError> {
    Ok(compare(&Hand::parse(hand1)?, &Hand::parse(hand2)?))
}
