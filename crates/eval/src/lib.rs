// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Larvis poker hand evaluator.
//!
//! Evaluates five cards hands without suits. A hand is split in components,
//! runs of cards with the same rank, that define its [ComboType] and break
//! ties between hands with the same combination.
//!
//! To compare two hands use [compare], or [HandValue] to get a hand value
//! that can be compared with other values:
//!
//! ```
//! # use larvis_eval::*;
//! let h1 = "AAAQQ".parse::<Hand>().unwrap();
//! let h2 = "QQQAA".parse::<Hand>().unwrap();
//! assert_eq!(compare(&h1, &h2), Verdict::Hand1Wins);
//!
//! let v1 = HandValue::eval(&h1);
//! let v2 = HandValue::eval(&"33337".parse::<Hand>().unwrap());
//! assert_eq!(v1.combo(), ComboType::FullHouse);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod components;
pub mod eval;

pub use components::{Component, sorted_components};
pub use eval::{ComboType, HandValue, Verdict, compare, compare_str};

// Reexport cards types.
pub use larvis_cards::{Hand, HandError, Rank};
