//! Boss AI system: decides when the boss starts a new attack.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use riposte_core::attacks::AttackId;
use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::rng::CombatRng;

/// Start an attack if the boss is idle: a queued practice attack first,
/// otherwise a per-tick roll against `attack_chance_per_frame`.
pub fn run(
    state: &mut CombatState,
    tuning: &CombatTuning,
    rng: &mut CombatRng,
    forced: &mut VecDeque<AttackId>,
    events: &mut Vec<CombatEvent>,
) {
    if state.boss_current_attack.is_some() || state.boss_vulnerable || state.is_boss_defeated() {
        return;
    }

    // Only practice mode ever fills the forced queue.
    if let Some(attack) = forced.pop_front() {
        start_attack(state, attack, true, events);
        return;
    }

    if !rng.gen_bool(tuning.attack_chance_per_frame) {
        return;
    }

    let pool = selection_pool(state);
    if pool.is_empty() {
        return;
    }
    let attack = pool[rng.gen_range(0..pool.len())];
    start_attack(state, attack, false, events);
}

/// Attacks eligible for random selection, in catalog order. Standard mode
/// ignores the enabled set.
pub fn selection_pool(state: &CombatState) -> Vec<AttackId> {
    if state.mode.is_practice() {
        state.enabled_attacks.iter().copied().collect()
    } else {
        AttackId::ALL.to_vec()
    }
}

fn start_attack(
    state: &mut CombatState,
    attack: AttackId,
    forced: bool,
    events: &mut Vec<CombatEvent>,
) {
    state.boss_current_attack = Some(attack);
    state.boss_attack_start_frame = state.current_frame;
    state.boss_attack_hit_processed = false;

    debug!(
        "Boss starts {} at frame {} (forced: {forced})",
        attack.attack().name,
        state.current_frame
    );
    events.push(CombatEvent::AttackStarted {
        attack,
        frame: state.current_frame,
        forced,
    });
}
