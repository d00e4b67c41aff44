// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand parsing and normalization.
use std::{cmp::Reverse, fmt, str::FromStr};
use thiserror::Error;

use crate::rank::{Rank, rank_index};

/// A hand validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand doesn't have exactly five cards.
    #[error("poker hand must have 5 cards")]
    WrongCardCount,
    /// The hand contains a single invalid card symbol.
    #[error("\"{0}\" is not a valid card")]
    InvalidCard(char),
    /// The hand contains more than one invalid card symbol, sorted and
    /// deduplicated.
    #[error("\"{}\" are not valid cards", join_cards(.0))]
    InvalidCards(Vec<char>),
}

fn join_cards(cards: &[char]) -> String {
    cards
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the hand uppercased, without whitespace and sorted from the
/// stronger to the weaker card.
///
/// Symbols that are not valid ranks are kept and sorted after all the valid
/// ones, use [validate] to check the hand.
pub fn sanitize(raw: &str) -> String {
    let mut cards = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<_>>();
    cards.sort_by_key(|&c| Reverse(rank_index(c)));
    cards.into_iter().collect()
}

/// Checks a raw hand string.
///
/// A wrong number of cards is reported before any invalid symbol.
pub fn validate(raw: &str) -> Result<(), HandError> {
    let hand = sanitize(raw);

    if hand.chars().count() != Hand::SIZE {
        return Err(HandError::WrongCardCount);
    }

    let invalid = hand
        .chars()
        .filter(|&c| rank_index(c).is_none())
        .collect::<Vec<_>>();

    let Some(&first) = invalid.first() else {
        return Ok(());
    };

    let mut unique = invalid;
    unique.sort_unstable();
    unique.dedup();

    if unique.len() == 1 {
        Err(HandError::InvalidCard(first))
    } else {
        Err(HandError::InvalidCards(unique))
    }
}

/// A five cards hand sorted from the stronger to the weaker rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Rank; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five ranks in any order.
    pub fn new(mut ranks: [Rank; 5]) -> Self {
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }

    /// Parses and validates a raw hand string.
    pub fn parse(raw: &str) -> Result<Self, HandError> {
        validate(raw)?;

        let mut ranks = [Rank::Deuce; Self::SIZE];
        for (slot, symbol) in ranks.iter_mut().zip(sanitize(raw).chars()) {
            *slot = Rank::from_char(symbol).ok_or(HandError::InvalidCard(symbol))?;
        }

        Ok(Self(ranks))
    }

    /// The hand ranks, from the stronger to the weaker.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.0
    }

    /// Calls the `f` closure for each distinct hand.
    ///
    /// Suits are ignored so a hand is a multiset of ranks, this iterates
    /// all 6188 of them including five of a kind.
    pub fn for_each<F>(mut f: F)
    where
        F: FnMut(&Hand),
    {
        let ranks = Rank::ALL;

        for c1 in 0..ranks.len() {
            for c2 in 0..=c1 {
                for c3 in 0..=c2 {
                    for c4 in 0..=c3 {
                        for c5 in 0..=c4 {
                            f(&Hand([
                                ranks[c1], ranks[c2], ranks[c3], ranks[c4], ranks[c5],
                            ]));
                        }
                    }
                }
            }
        }
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|r| write!(f, "{r}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;

    #[test]
    fn sanitize_hands() {
        assert_eq!(sanitize("Ata78"), "AAT87");
        assert_eq!(sanitize("99189"), "99981");
        assert_eq!(sanitize("99 189 "), "99981");
        assert_eq!(sanitize("QjAkj"), "AKQJJ");
        assert_eq!(sanitize("\t2a\n3 "), "A32");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["Ata78", "99 189 ", "tvb1T", "2345Qk", "QjAkj"] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn sanitize_ignores_order() {
        let mut rng = rand::rng();

        Hand::for_each(|hand| {
            let canonical = hand.to_string();
            let mut cards = canonical.to_lowercase().chars().collect::<Vec<_>>();
            cards.shuffle(&mut rng);

            let shuffled = cards.into_iter().collect::<String>();
            assert_eq!(sanitize(&shuffled), canonical, "{shuffled}");
        });
    }

    #[test]
    fn validate_card_count() {
        assert_eq!(validate("2345Qk"), Err(HandError::WrongCardCount));
        assert_eq!(validate("2345"), Err(HandError::WrongCardCount));
        assert_eq!(validate(""), Err(HandError::WrongCardCount));

        // Invalid symbols are not checked when the count is wrong.
        assert_eq!(validate("xyz"), Err(HandError::WrongCardCount));

        assert_eq!(validate(" 2 3 4 5 6 "), Ok(()));
    }

    #[test]
    fn validate_invalid_cards() {
        assert_eq!(validate("tytjt"), Err(HandError::InvalidCard('Y')));
        assert_eq!(validate("1111A"), Err(HandError::InvalidCard('1')));
        assert_eq!(
            validate("tvb1T"),
            Err(HandError::InvalidCards(vec!['1', 'B', 'V']))
        );
        assert_eq!(validate("7TaQK"), Ok(()));
    }

    #[test]
    fn validate_messages() {
        let msg = |raw: &str| validate(raw).unwrap_err().to_string();
        assert_eq!(msg("2345Qk"), "poker hand must have 5 cards");
        assert_eq!(msg("tytjt"), "\"Y\" is not a valid card");
        assert_eq!(msg("tvb1T"), "\"1, B, V\" are not valid cards");
        assert_eq!(msg("zzyy2"), "\"Y, Z\" are not valid cards");
    }

    #[test]
    fn parse_hand() {
        let hand = Hand::parse("7TaQK").unwrap();
        assert_eq!(
            hand.ranks(),
            &[Rank::Ace, Rank::King, Rank::Queen, Rank::Ten, Rank::Seven]
        );
        assert_eq!(hand.to_string(), "AKQT7");

        let hand = "99 189".parse::<Hand>();
        assert_eq!(hand, Err(HandError::InvalidCard('1')));

        let hand = Hand::new([Rank::Deuce, Rank::Ace, Rank::Deuce, Rank::Nine, Rank::Ace]);
        assert_eq!(hand.to_string(), "AA922");
        assert_eq!(Hand::parse("a2a92"), Ok(hand));
    }

    #[test]
    fn hand_for_each() {
        let mut hands = HashSet::default();
        Hand::for_each(|hand| {
            assert!(hand.ranks().windows(2).all(|w| w[0] >= w[1]));
            hands.insert(*hand);
        });

        // Multisets of 5 out of 13 ranks.
        assert_eq!(hands.len(), 6188);
    }
}
