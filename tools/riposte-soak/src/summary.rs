//! Per-run result reporting.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use riposte_core::constants::DEFAULT_BASE_XP;
use riposte_core::enums::GameMode;
use riposte_sim::CombatEngine;

use crate::bot::ReactiveBot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    BossDefeated,
    PlayerDied,
    TimedOut,
}

/// Summary of a single soak run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub mode: GameMode,
    pub outcome: Outcome,
    pub frames: u64,
    pub boss_hp: i32,
    pub boss_max_hp: i32,
    pub blocks: u32,
    pub perfect_parries: u32,
    pub parries_attempted: u32,
    pub deaths: u32,
    pub damage_dealt: i32,
    pub vulnerability_windows: u32,
    pub inputs: usize,
    /// Score with simulated (not wall-clock) elapsed time.
    pub score: i64,
}

impl RunSummary {
    pub fn from_engine(engine: &CombatEngine, bot: &ReactiveBot) -> Self {
        let state = engine.state_ref();
        let outcome = if state.is_boss_defeated() {
            Outcome::BossDefeated
        } else if !state.player_alive {
            Outcome::PlayerDied
        } else {
            Outcome::TimedOut
        };
        let elapsed = Duration::from_secs_f64(state.current_frame as f64 * engine.tuning().dt());

        Self {
            seed: engine.run_seed(),
            mode: state.mode,
            outcome,
            frames: state.current_frame,
            boss_hp: state.boss_hp,
            boss_max_hp: state.boss_max_hp,
            blocks: state.blocks_performed,
            perfect_parries: state.perfect_parries,
            parries_attempted: bot.parries_attempted,
            deaths: state.death_count,
            damage_dealt: state.damage_dealt,
            vulnerability_windows: bot.vulnerability_windows,
            inputs: engine.input_log().len(),
            score: engine.score_for_elapsed(DEFAULT_BASE_XP, elapsed),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {:>6} {:?} {:?} after {} frames | boss {}/{} HP | blocks {} parries {}/{} deaths {} | windows {} | score {}",
            self.seed,
            self.mode,
            self.outcome,
            self.frames,
            self.boss_hp,
            self.boss_max_hp,
            self.blocks,
            self.perfect_parries,
            self.parries_attempted,
            self.deaths,
            self.vulnerability_windows,
            self.score,
        )
    }
}
