//! Tuning surface for combat balance.
//!
//! A `CombatTuning` is fixed for the lifetime of an engine. Missing JSON
//! fields fall back to the defaults in `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::TuningError;

/// Every balance knob the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub ticks_per_second: u32,
    pub impact_delay_frames: u64,
    pub parry_early_window_frames: u64,
    pub attack_chance_per_frame: f64,
    pub stagger_max: f64,
    pub block_stagger: f64,
    pub parry_stagger: f64,
    pub perfect_parry_accuracy: f64,
    pub perfect_parry_multiplier: f64,
    pub stagger_decay_per_second: f64,
    pub vulnerability_duration_frames: u64,
    pub desperation_hp_fraction: f64,
    pub safe_attack_damage: i32,
    pub critical_damage: i32,
    pub player_attack_duration_frames: u64,
    pub player_attack_hit_frame: u64,
    pub score_parry_bonus: i64,
    pub score_seconds_bonus: i64,
    pub score_time_limit_secs: u64,
    pub score_death_penalty: i64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            impact_delay_frames: IMPACT_DELAY_FRAMES,
            parry_early_window_frames: PARRY_EARLY_WINDOW_FRAMES,
            attack_chance_per_frame: ATTACK_CHANCE_PER_FRAME,
            stagger_max: STAGGER_MAX,
            block_stagger: BLOCK_STAGGER,
            parry_stagger: PARRY_STAGGER,
            perfect_parry_accuracy: PERFECT_PARRY_ACCURACY,
            perfect_parry_multiplier: PERFECT_PARRY_MULTIPLIER,
            stagger_decay_per_second: STAGGER_DECAY_PER_SECOND,
            vulnerability_duration_frames: VULNERABILITY_DURATION_FRAMES,
            desperation_hp_fraction: DESPERATION_HP_FRACTION,
            safe_attack_damage: SAFE_ATTACK_DAMAGE,
            critical_damage: CRITICAL_DAMAGE,
            player_attack_duration_frames: PLAYER_ATTACK_DURATION_FRAMES,
            player_attack_hit_frame: PLAYER_ATTACK_HIT_FRAME,
            score_parry_bonus: SCORE_PARRY_BONUS,
            score_seconds_bonus: SCORE_SECONDS_BONUS,
            score_time_limit_secs: SCORE_TIME_LIMIT_SECS,
            score_death_penalty: SCORE_DEATH_PENALTY,
        }
    }
}

impl CombatTuning {
    /// Parse a (possibly partial) tuning document and validate it.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: CombatTuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.ticks_per_second as f64
    }

    /// Passive stagger decay applied each tick.
    pub fn stagger_decay_per_tick(&self) -> f64 {
        self.stagger_decay_per_second / self.ticks_per_second as f64
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.ticks_per_second == 0 {
            return Err(TuningError::invalid("ticks_per_second", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.attack_chance_per_frame) {
            return Err(TuningError::invalid(
                "attack_chance_per_frame",
                "must be within [0, 1]",
            ));
        }
        if !(self.stagger_max > 0.0) {
            return Err(TuningError::invalid("stagger_max", "must be positive"));
        }
        for (field, value) in [
            ("block_stagger", self.block_stagger),
            ("parry_stagger", self.parry_stagger),
            ("perfect_parry_multiplier", self.perfect_parry_multiplier),
            ("stagger_decay_per_second", self.stagger_decay_per_second),
        ] {
            if !(value >= 0.0) {
                return Err(TuningError::invalid(field, "must be non-negative"));
            }
        }
        if !(0.0..=1.0).contains(&self.desperation_hp_fraction) {
            return Err(TuningError::invalid(
                "desperation_hp_fraction",
                "must be within [0, 1]",
            ));
        }
        if self.safe_attack_damage < 0 || self.critical_damage < 0 {
            return Err(TuningError::invalid("damage", "must be non-negative"));
        }
        if self.player_attack_hit_frame >= self.player_attack_duration_frames {
            return Err(TuningError::invalid(
                "player_attack_hit_frame",
                "must fall inside the strike duration",
            ));
        }
        if self.vulnerability_duration_frames == 0 {
            return Err(TuningError::invalid(
                "vulnerability_duration_frames",
                "must be positive",
            ));
        }
        Ok(())
    }
}
