// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Larvis poker hand types.
//!
//! Hands have no suits, each card is a rank symbol among `23456789TJQKA`
//! and lowercase symbols are accepted. A raw hand string is normalized with
//! [sanitize] and checked with [validate]:
//!
//! ```
//! # use larvis_cards::*;
//! assert_eq!(sanitize("Qj Akj"), "AKQJJ");
//! assert_eq!(validate("7TaQK"), Ok(()));
//! assert_eq!(validate("tytjt"), Err(HandError::InvalidCard('Y')));
//! ```
//!
//! or parsed into a [Hand] in one step:
//!
//! ```
//! # use larvis_cards::*;
//! let hand = "99 7a9".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "A9997");
//! assert_eq!(hand.ranks()[0], Rank::Ace);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
mod rank;

pub use hand::{Hand, HandError, sanitize, validate};
pub use rank::{RANKS, Rank, rank_index};
