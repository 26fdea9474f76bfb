//! Vulnerability windows and the desperation sub-phase.

use log::info;

use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

/// Open a vulnerability window. Interrupts any in-flight attack without
/// letting it finish its recovery.
pub fn trigger(state: &mut CombatState, events: &mut Vec<CombatEvent>) {
    state.boss_stagger = 0.0;
    state.boss_vulnerable = true;
    state.boss_vulnerable_frame = state.current_frame;
    state.boss_current_attack = None;

    info!("Boss vulnerable at frame {}", state.current_frame);
    events.push(CombatEvent::VulnerabilityTriggered {
        frame: state.current_frame,
    });
}

/// Close the window once it has lasted `vulnerability_duration_frames`.
pub fn run(state: &mut CombatState, tuning: &CombatTuning, events: &mut Vec<CombatEvent>) {
    if !state.boss_vulnerable {
        return;
    }
    let elapsed = state.current_frame.saturating_sub(state.boss_vulnerable_frame);
    if elapsed < tuning.vulnerability_duration_frames {
        return;
    }

    state.boss_vulnerable = false;
    state.boss_desperation = false;
    events.push(CombatEvent::VulnerabilityEnded);

    if should_despair(state, tuning) {
        state.boss_desperation = true;
        info!(
            "Boss desperate at {}/{} HP",
            state.boss_hp, state.boss_max_hp
        );
        events.push(CombatEvent::DesperationEntered);
    }
}

/// A living boss at or below `desperation_hp_fraction` of its max HP.
/// Checked on every window close, so a low-HP boss is re-armed each cycle.
fn should_despair(state: &CombatState, tuning: &CombatTuning) -> bool {
    tuning.desperation_hp_fraction > 0.0
        && state.boss_hp > 0
        && f64::from(state.boss_hp) <= f64::from(state.boss_max_hp) * tuning.desperation_hp_fraction
}
