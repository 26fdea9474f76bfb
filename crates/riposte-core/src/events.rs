//! Events emitted by the simulation for audio and visual feedback.
//!
//! The engine accumulates these during commands and ticks; the host drains
//! them after each step.

use serde::{Deserialize, Serialize};

use crate::attacks::AttackId;
use crate::enums::Zone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// Boss began an attack's windup.
    AttackStarted {
        attack: AttackId,
        frame: u64,
        /// Queued through practice `force_attack` rather than rolled.
        forced: bool,
    },
    /// Attack ran its full windup, active and recovery frames.
    AttackEnded { attack: AttackId },
    /// Shield in the matching zone stopped a blockable attack.
    BlockOccurred { attack: AttackId, zone: Zone },
    ParrySucceeded {
        attack: AttackId,
        zone: Zone,
        stagger_gain: f64,
    },
    /// Attack connected with the player.
    PlayerHit { attack: AttackId },
    /// Standard-mode death. The simulation freezes after this.
    PlayerDied,
    VulnerabilityTriggered { frame: u64 },
    VulnerabilityEnded,
    DesperationEntered,
    StrikeStarted { frame: u64 },
    BossDamaged { amount: i32, critical: bool },
    BossDefeated,
}
