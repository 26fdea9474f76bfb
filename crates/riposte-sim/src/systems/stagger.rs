//! Stagger accumulation and passive decay.

use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::systems::vulnerability;

/// Add stagger, clamped to `stagger_max`. Reaching the cap breaks the boss
/// open, which resets stagger to zero.
pub fn add(
    state: &mut CombatState,
    tuning: &CombatTuning,
    amount: f64,
    events: &mut Vec<CombatEvent>,
) {
    state.boss_stagger = (state.boss_stagger + amount).clamp(0.0, tuning.stagger_max);
    if state.boss_stagger >= tuning.stagger_max {
        vulnerability::trigger(state, events);
    }
}

/// Passive decay. Stagger holds while the boss is vulnerable.
pub fn decay(state: &mut CombatState, tuning: &CombatTuning) {
    if state.boss_vulnerable {
        return;
    }
    state.boss_stagger = (state.boss_stagger - tuning.stagger_decay_per_tick()).max(0.0);
}
