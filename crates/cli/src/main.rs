// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use courtside::RosterManager;
use courtside_api::{
    RosterImportResponse, ScoreCheckRequest, ScoreCheckResponse, SessionDocument,
    ValidationReport, check_match_score, import_roster, validate_document,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Check tournament session setups, match scores and roster files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON session document. Exits with status 1 if it has errors.
    Validate {
        /// Path to the session document
        file: PathBuf,

        /// Instant to check the start time against (RFC 3339). Defaults to now.
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// Check whether a recorded match score is legal.
    CheckScore {
        score1: i64,
        score2: i64,

        /// Scoring mode, e.g. `first_to_15` or `first_to_21`
        #[arg(short, long, default_value = "first_to_21")]
        mode: String,
    },
    /// Preview a roster CSV (`name`, optional `gender`) and load its valid rows.
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// What a subcommand printed and whether it succeeded.
#[derive(Debug)]
struct Outcome {
    output: String,
    success: bool,
}

impl Outcome {
    fn json<T: Serialize>(value: &T, success: bool) -> Result<Self, serde_json::Error> {
        Ok(Self {
            output: serde_json::to_string_pretty(value)?,
            success,
        })
    }
}

fn run(command: Commands) -> Result<Outcome, Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { file, at } => {
            let text: String = std::fs::read_to_string(&file)?;
            let document: SessionDocument = SessionDocument::from_json(&text)?;
            let now: DateTime<Utc> = at.unwrap_or_else(Utc::now);
            info!(file = %file.display(), "Validating session document");

            let report: ValidationReport = validate_document(&document, now);
            Ok(Outcome::json(&report, report.valid)?)
        }
        Commands::CheckScore {
            score1,
            score2,
            mode,
        } => {
            let response: ScoreCheckResponse = check_match_score(ScoreCheckRequest {
                score1,
                score2,
                mode,
            });
            Ok(Outcome::json(&response, response.valid)?)
        }
        Commands::Import { file } => {
            let text: String = std::fs::read_to_string(&file)?;
            let mut manager: RosterManager = RosterManager::new();
            info!(file = %file.display(), "Importing roster");

            let response: RosterImportResponse = import_roster(&mut manager, &text)?;
            let success: bool = response.preview.invalid_count == 0;
            Ok(Outcome::json(&response, success)?)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome: Outcome = run(args.command)?;
    println!("{}", outcome.output);

    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
