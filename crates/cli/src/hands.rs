// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line hands validation.
use anyhow::{Error, Result, anyhow, bail};

use larvis_cards::Hand;

/// Parses the two command line hands.
///
/// Both hands are validated and all their errors reported together.
pub fn parse_hands(hands: &[String]) -> Result<[Hand; 2]> {
    let [first, second] = hands else {
        return Err(count_error(hands.len()));
    };

    let results =
        [first, second].map(|raw| Hand::parse(raw).map_err(|e| format!("- {raw}: {e}")));

    match results {
        [Ok(h1), Ok(h2)] => Ok([h1, h2]),
        results => {
            let errors = results
                .into_iter()
                .filter_map(Result::err)
                .collect::<Vec<_>>();
            bail!(
                "oops, looks like there are issues with your poker hands:\n{}",
                errors.join("\n")
            );
        }
    }
}

fn count_error(count: usize) -> Error {
    if count < 2 {
        anyhow!("urg, {count} poker hand was given. Please input 2 poker hands")
    } else {
        anyhow!("woaa, you input {count} hands! I can only work with 2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(hands: &[&str]) -> Vec<String> {
        hands.iter().map(|h| h.to_string()).collect()
    }

    fn error(hands: &[&str]) -> String {
        parse_hands(&args(hands)).unwrap_err().to_string()
    }

    #[test]
    fn hands_count() {
        assert_eq!(
            error(&[]),
            "urg, 0 poker hand was given. Please input 2 poker hands"
        );
        assert_eq!(
            error(&["AAKKQ"]),
            "urg, 1 poker hand was given. Please input 2 poker hands"
        );
        assert_eq!(
            error(&["AAKKQ", "22345", "77788"]),
            "woaa, you input 3 hands! I can only work with 2"
        );
    }

    #[test]
    fn invalid_hands() {
        assert_eq!(
            error(&["2345", "AKQJT"]),
            "oops, looks like there are issues with your poker hands:\n\
             - 2345: poker hand must have 5 cards"
        );
        assert_eq!(
            error(&["tytjt", "tvb1T"]),
            "oops, looks like there are issues with your poker hands:\n\
             - tytjt: \"Y\" is not a valid card\n\
             - tvb1T: \"1, B, V\" are not valid cards"
        );
    }

    #[test]
    fn valid_hands() {
        let [h1, h2] = parse_hands(&args(&["aaq qa", "7TaQK"])).unwrap();
        assert_eq!(h1.to_string(), "AAAQQ");
        assert_eq!(h2.to_string(), "AKQT7");
    }
}
