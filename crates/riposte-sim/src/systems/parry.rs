//! Parry resolution.

use std::ops::Range;

use log::debug;

use riposte_core::attacks::Attack;
use riposte_core::enums::Zone;
use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::systems::damage::damage_boss;
use crate::systems::stagger;

/// Tick offsets (from attack start) at which a parry is accepted: from
/// `parry_early_window_frames` before the windup ends through the last
/// active frame.
pub fn parry_window(attack: &Attack, tuning: &CombatTuning) -> Range<u64> {
    let start = attack
        .windup_frames
        .saturating_sub(tuning.parry_early_window_frames);
    start..attack.windup_frames + attack.active_frames
}

/// Try to parry the in-flight attack. Rejections have no side effects.
///
/// A successful parry marks the attack's hit as processed, so its impact
/// never resolves as a block or a hit, but the attack keeps its timeline.
pub fn attempt(
    state: &mut CombatState,
    tuning: &CombatTuning,
    zone: Zone,
    accuracy: f64,
    events: &mut Vec<CombatEvent>,
) -> bool {
    let Some(id) = state.boss_current_attack else {
        return false;
    };
    if state.boss_attack_hit_processed {
        return false;
    }
    let attack = id.attack();
    if zone != attack.zone || !parry_window(attack, tuning).contains(&state.attack_elapsed()) {
        return false;
    }

    state.perfect_parries += 1;
    let multiplier = if accuracy > tuning.perfect_parry_accuracy {
        tuning.perfect_parry_multiplier
    } else {
        1.0
    };
    let stagger_gain = tuning.parry_stagger * multiplier;

    debug!(
        "Parried {} at offset {} (accuracy {accuracy:.2})",
        attack.name,
        state.attack_elapsed()
    );
    events.push(CombatEvent::ParrySucceeded {
        attack: id,
        zone,
        stagger_gain,
    });

    stagger::add(state, tuning, stagger_gain, events);
    if state.boss_desperation {
        damage_boss(state, tuning.critical_damage, true, events);
    }
    state.boss_attack_hit_processed = true;
    true
}
