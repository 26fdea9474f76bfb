//! Static boss attack catalog.
//!
//! The catalog is a process-wide constant table. The engine only filters and
//! selects from it; which attacks are currently allowed lives in
//! `CombatState::enabled_attacks`.

use serde::{Deserialize, Serialize};

use crate::enums::Zone;

/// Identifier of a catalog attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttackId {
    OverheadSlam,
    LeftSweep,
    RightSweep,
    PiercingThrust,
    ShadowCleave,
}

impl AttackId {
    pub const ALL: [AttackId; 5] = [
        AttackId::OverheadSlam,
        AttackId::LeftSweep,
        AttackId::RightSweep,
        AttackId::PiercingThrust,
        AttackId::ShadowCleave,
    ];

    /// Catalog entry for this identifier.
    pub fn attack(self) -> &'static Attack {
        // Catalog order matches `AttackId::ALL`.
        &ATTACK_CATALOG[self as usize]
    }
}

/// Immutable definition of a boss attack. All timings are in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attack {
    pub id: AttackId,
    pub name: &'static str,
    pub zone: Zone,
    /// Telegraph before the attack becomes active.
    pub windup_frames: u64,
    pub active_frames: u64,
    pub recovery_frames: u64,
    pub damage: u32,
    /// `true` if a shield in the matching zone stops it. Otherwise it must be parried.
    pub blockable: bool,
}

impl Attack {
    /// Total lifetime from start to expiry.
    pub fn total_frames(&self) -> u64 {
        self.windup_frames + self.active_frames + self.recovery_frames
    }
}

/// Uniform activation window for every attack.
const ACTIVE: u64 = 40;
/// Uniform recovery window for every attack.
const RECOVERY: u64 = 30;

/// The boss's full move set, in `AttackId` order.
pub static ATTACK_CATALOG: [Attack; 5] = [
    Attack {
        id: AttackId::OverheadSlam,
        name: "Overhead Slam",
        zone: Zone::Center,
        windup_frames: 100,
        active_frames: ACTIVE,
        recovery_frames: RECOVERY,
        damage: 1,
        blockable: true,
    },
    Attack {
        id: AttackId::LeftSweep,
        name: "Left Sweep",
        zone: Zone::Left,
        windup_frames: 110,
        active_frames: ACTIVE,
        recovery_frames: RECOVERY,
        damage: 1,
        blockable: true,
    },
    Attack {
        id: AttackId::RightSweep,
        name: "Right Sweep",
        zone: Zone::Right,
        windup_frames: 105,
        active_frames: ACTIVE,
        recovery_frames: RECOVERY,
        damage: 1,
        blockable: true,
    },
    Attack {
        id: AttackId::PiercingThrust,
        name: "Piercing Thrust",
        zone: Zone::Center,
        windup_frames: 120,
        active_frames: ACTIVE,
        recovery_frames: RECOVERY,
        damage: 2,
        blockable: false,
    },
    Attack {
        id: AttackId::ShadowCleave,
        name: "Shadow Cleave",
        zone: Zone::Right,
        windup_frames: 115,
        active_frames: ACTIVE,
        recovery_frames: RECOVERY,
        damage: 2,
        blockable: false,
    },
];
