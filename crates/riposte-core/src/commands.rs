//! Player commands sent from a host to the engine.
//!
//! Hosts that pass messages (IPC, channels) can forward these to
//! `CombatEngine::apply` instead of calling the command methods directly.

use serde::{Deserialize, Serialize};

use crate::attacks::AttackId;
use crate::enums::Zone;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the passive-block shield.
    MoveShield { zone: Zone },
    /// Attempt to parry the in-flight attack. `accuracy` is in [0, 1].
    AttemptParry { zone: Zone, accuracy: f64 },
    /// Strike the boss (only lands while it is vulnerable).
    PlayerAttack,

    // --- Practice only ---
    /// Enable or disable an attack in the practice pool.
    SetPracticeAttack { attack: AttackId, enabled: bool },
    /// Queue an attack to start as soon as the boss is idle.
    ForceAttack { attack: AttackId },
}
