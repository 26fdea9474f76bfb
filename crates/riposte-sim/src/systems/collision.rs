//! Collision system: resolves the in-flight attack against the player's
//! shield at the impact instant and expires finished attacks.

use log::{debug, info};

use riposte_core::attacks::AttackId;
use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::systems::stagger;

/// Tick offset (from attack start) at which the attack's impact resolves.
pub fn impact_frame(attack: AttackId, tuning: &CombatTuning) -> u64 {
    attack.attack().windup_frames + tuning.impact_delay_frames
}

pub fn run(state: &mut CombatState, tuning: &CombatTuning, events: &mut Vec<CombatEvent>) {
    let Some(id) = state.boss_current_attack else {
        return;
    };
    let attack = id.attack();
    let elapsed = state.attack_elapsed();

    if elapsed == impact_frame(id, tuning) && !state.boss_attack_hit_processed {
        if state.player_shield_zone == attack.zone && attack.blockable {
            resolve_block(state, tuning, id, events);
        } else {
            resolve_hit(state, id, events);
        }
        state.boss_attack_hit_processed = true;
    }

    // A block may have broken the boss and interrupted the attack already.
    if state.boss_current_attack.is_some() && elapsed >= attack.total_frames() {
        state.boss_current_attack = None;
        events.push(CombatEvent::AttackEnded { attack: id });
    }
}

fn resolve_block(
    state: &mut CombatState,
    tuning: &CombatTuning,
    id: AttackId,
    events: &mut Vec<CombatEvent>,
) {
    state.blocks_performed += 1;
    debug!("Blocked {} in {:?}", id.attack().name, state.player_shield_zone);
    events.push(CombatEvent::BlockOccurred {
        attack: id,
        zone: state.player_shield_zone,
    });
    stagger::add(state, tuning, tuning.block_stagger, events);
}

fn resolve_hit(state: &mut CombatState, id: AttackId, events: &mut Vec<CombatEvent>) {
    state.death_count += 1;
    events.push(CombatEvent::PlayerHit { attack: id });

    if !state.mode.is_practice() {
        state.player_alive = false;
        info!(
            "Player killed by {} at frame {}",
            id.attack().name,
            state.current_frame
        );
        events.push(CombatEvent::PlayerDied);
    }
}
