//! Player strike resolution.

use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::systems::damage::damage_boss;

/// Land the strike at its hit frame if the boss is still open, and end it
/// once its duration has passed.
pub fn run(state: &mut CombatState, tuning: &CombatTuning, events: &mut Vec<CombatEvent>) {
    if !state.player_attacking {
        return;
    }
    let elapsed = state.current_frame.saturating_sub(state.player_attack_frame);

    if elapsed == tuning.player_attack_hit_frame && state.boss_vulnerable {
        damage_boss(state, tuning.safe_attack_damage, false, events);
    }
    if elapsed >= tuning.player_attack_duration_frames {
        state.player_attacking = false;
    }
}
