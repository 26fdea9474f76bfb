//! riposte-soak: headless soak runner for the combat engine.
//!
//! Plays seeded runs with a scripted reactive bot and prints one summary
//! per run.
//!
//! Usage:
//!   riposte-soak --seed 7 --runs 20 --skill 0.8
//!   riposte-soak --practice --seconds 120 --tuning balance.json --json

mod bot;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use thiserror::Error;

use riposte_core::constants::{DEFAULT_BOSS_MAX_HP, DEFAULT_SEED};
use riposte_core::enums::GameMode;
use riposte_core::error::{CombatError, TuningError};
use riposte_core::tuning::CombatTuning;
use riposte_sim::{CombatEngine, EngineConfig, FixedStepDriver};

use crate::bot::ReactiveBot;
use crate::summary::{Outcome, RunSummary};

/// Display refresh rate the bot "renders" at.
const DISPLAY_HZ: f64 = 60.0;

/// Headless soak runner for the RIPOSTE combat engine
#[derive(Parser, Debug)]
#[command(name = "riposte-soak")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first run (increments for each run)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of runs
    #[arg(short, long, default_value = "1")]
    runs: u64,

    /// Boss max HP
    #[arg(long, default_value_t = DEFAULT_BOSS_MAX_HP)]
    max_hp: i32,

    /// Play in practice mode (no death, score always 0)
    #[arg(long)]
    practice: bool,

    /// Simulated seconds per run before giving up
    #[arg(long, default_value = "300")]
    seconds: u64,

    /// Probability (0..1) that the bot reacts correctly to an attack
    #[arg(long, default_value = "0.9")]
    skill: f64,

    /// JSON file overriding tuning values
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Emit one JSON object per run instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum SoakError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error("failed to encode summary: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<(), SoakError> {
    let tuning = match &args.tuning {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SoakError::Io {
                path: path.clone(),
                source,
            })?;
            CombatTuning::from_json(&json)?
        }
        None => CombatTuning::default(),
    };
    let mode = if args.practice {
        GameMode::Practice
    } else {
        GameMode::Standard
    };

    let mut cleared = 0;
    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let summary = play_run(
            EngineConfig {
                seed,
                boss_max_hp: args.max_hp,
                mode,
                tuning: tuning.clone(),
            },
            args.skill,
            args.seconds,
        )?;
        if summary.outcome == Outcome::BossDefeated {
            cleared += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{summary}");
        }
    }

    info!("{cleared}/{} runs cleared", args.runs);
    Ok(())
}

/// Play one run to completion or timeout.
fn play_run(config: EngineConfig, skill: f64, seconds: u64) -> Result<RunSummary, SoakError> {
    let seed = config.seed;
    let mut engine = CombatEngine::new(config)?;
    let mut driver = FixedStepDriver::for_engine(&engine);
    let mut bot = ReactiveBot::new(seed, skill);

    let max_frames = seconds * u64::from(engine.tuning().ticks_per_second);
    while !engine.is_run_over() && engine.state_ref().current_frame < max_frames {
        bot.act(&mut engine);
        driver.advance(&mut engine, 1.0 / DISPLAY_HZ);
        bot.observe(engine.drain_events());
    }

    Ok(RunSummary::from_engine(&engine, &bot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64, mode: GameMode) -> EngineConfig {
        EngineConfig {
            seed,
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_runs_replay_identically() {
        let a = play_run(config(9, GameMode::Standard), 0.8, 120).unwrap();
        let b = play_run(config(9, GameMode::Standard), 0.8, 120).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_unskilled_bot_dies_in_standard() {
        let summary = play_run(config(3, GameMode::Standard), 0.0, 300).unwrap();
        assert_eq!(summary.outcome, Outcome::PlayerDied);
        assert_eq!(summary.deaths, 1);
        assert_eq!(summary.blocks, 0);
    }

    #[test]
    fn test_unskilled_bot_survives_practice() {
        let summary = play_run(config(3, GameMode::Practice), 0.0, 60).unwrap();
        assert_eq!(summary.outcome, Outcome::TimedOut);
        assert_eq!(summary.frames, 60 * 60);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn test_invalid_max_hp_surfaces_error() {
        let err = play_run(
            EngineConfig {
                boss_max_hp: 0,
                ..Default::default()
            },
            1.0,
            10,
        )
        .unwrap_err();
        assert!(matches!(err, SoakError::Combat(CombatError::InvalidMaxHp(0))));
    }
}
