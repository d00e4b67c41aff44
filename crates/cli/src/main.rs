// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Larvis CLI, compares two poker hands and prints the winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug, info};

use larvis_eval::{HandValue, Verdict, compare};

mod hands;

#[derive(Debug, Parser)]
#[clap(name = "larvis", override_usage = "larvis FIRST_HAND SECOND_HAND")]
struct Cli {
    /// Logging verbosity, repeat for more details.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
    /// The two poker hands to compare, like AAKQ2 or "aa k q2".
    hands: Vec<String>,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match run(&cli.hands) {
        Ok(verdict) => println!("{verdict}"),
        Err(e) => {
            debug!("{e:?}");
            println!("\n{e}\n");
            println!("{}\n", Cli::command().render_usage());
            std::process::exit(1);
        }
    }
}

fn run(hands: &[String]) -> Result<Verdict> {
    let [h1, h2] = hands::parse_hands(hands)?;

    for (idx, hand) in [&h1, &h2].into_iter().enumerate() {
        let value = HandValue::eval(hand);
        let components = value
            .components()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        debug!(
            "Hand {} {hand} {} {components:?}",
            idx + 1,
            value.combo()
        );
    }

    let verdict = compare(&h1, &h2);
    info!("{h1} vs {h2}: {verdict}");

    Ok(verdict)
}
