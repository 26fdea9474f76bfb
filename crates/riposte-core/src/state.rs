//! Combat state: the single mutable aggregate owned by the engine.
//!
//! Hosts receive clones of it as snapshots. It deliberately carries no
//! wall-clock data so that two runs with the same seed and inputs serialize
//! to identical bytes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::attacks::AttackId;
use crate::enums::{GameMode, Zone};

/// Complete combat state. Also the snapshot type returned to hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Tick counter. Starts at 0, +1 per tick while the player lives.
    pub current_frame: u64,

    // --- Player ---
    pub player_alive: bool,
    pub player_shield_zone: Zone,
    pub player_attacking: bool,
    /// Frame the current strike started (meaningful while `player_attacking`).
    pub player_attack_frame: u64,

    // --- Boss ---
    pub boss_hp: i32,
    pub boss_max_hp: i32,
    /// Always within `[0, stagger_max]`.
    pub boss_stagger: f64,
    pub boss_vulnerable: bool,
    pub boss_vulnerable_frame: u64,
    pub boss_desperation: bool,
    /// In-flight attack. Always `None` while `boss_vulnerable`.
    pub boss_current_attack: Option<AttackId>,
    pub boss_attack_start_frame: u64,
    /// Set once the in-flight attack's impact (or a parry) has been resolved.
    pub boss_attack_hit_processed: bool,

    // --- Counters ---
    pub perfect_parries: u32,
    pub blocks_performed: u32,
    pub damage_dealt: i32,
    pub death_count: u32,

    // --- Run configuration ---
    pub mode: GameMode,
    /// Attacks the boss may pick in practice mode. Ignored in standard mode.
    pub enabled_attacks: BTreeSet<AttackId>,
}

impl CombatState {
    /// Fresh state for a new run: boss at full HP, shield centered, every
    /// attack enabled.
    pub fn new(boss_max_hp: i32, mode: GameMode) -> Self {
        Self {
            current_frame: 0,
            player_alive: true,
            player_shield_zone: Zone::Center,
            player_attacking: false,
            player_attack_frame: 0,
            boss_hp: boss_max_hp,
            boss_max_hp,
            boss_stagger: 0.0,
            boss_vulnerable: false,
            boss_vulnerable_frame: 0,
            boss_desperation: false,
            boss_current_attack: None,
            boss_attack_start_frame: 0,
            boss_attack_hit_processed: false,
            perfect_parries: 0,
            blocks_performed: 0,
            damage_dealt: 0,
            death_count: 0,
            mode,
            enabled_attacks: AttackId::ALL.into_iter().collect(),
        }
    }

    /// Ticks since the in-flight attack started.
    pub fn attack_elapsed(&self) -> u64 {
        self.current_frame.saturating_sub(self.boss_attack_start_frame)
    }

    pub fn is_boss_defeated(&self) -> bool {
        self.boss_hp <= 0
    }

    /// Practice runs end only on a boss kill; standard runs also end on death.
    pub fn is_run_over(&self) -> bool {
        match self.mode {
            GameMode::Practice => self.is_boss_defeated(),
            GameMode::Standard => !self.player_alive || self.is_boss_defeated(),
        }
    }
}
