// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card ranks definitions.
use std::fmt;

/// Rank symbols ordered from the weakest to the strongest.
pub const RANKS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Returns the index of `symbol` in [RANKS], a higher index is a stronger rank.
///
/// The lookup is case sensitive, symbols must be uppercase.
#[inline]
pub fn rank_index(symbol: char) -> Option<usize> {
    RANKS.iter().position(|&s| s == symbol)
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    pub(crate) const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a symbol, lowercase symbols are accepted.
    pub fn from_char(symbol: char) -> Option<Rank> {
        rank_index(symbol.to_ascii_uppercase()).map(|idx| Self::ALL[idx])
    }

    /// The rank strength index, from 0 for a deuce to 12 for an ace.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The rank symbol.
    pub fn symbol(&self) -> char {
        RANKS[self.index()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
