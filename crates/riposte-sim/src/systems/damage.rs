//! Damage applied to the boss.

use log::{debug, info};

use riposte_core::events::CombatEvent;
use riposte_core::state::CombatState;

/// Subtract `amount` from boss HP, saturating at zero.
pub fn damage_boss(
    state: &mut CombatState,
    amount: i32,
    critical: bool,
    events: &mut Vec<CombatEvent>,
) {
    if amount <= 0 || state.is_boss_defeated() {
        return;
    }
    let dealt = amount.min(state.boss_hp);
    state.boss_hp -= dealt;
    state.damage_dealt += dealt;

    debug!(
        "Boss takes {dealt} (critical: {critical}), {} HP left",
        state.boss_hp
    );
    events.push(CombatEvent::BossDamaged {
        amount: dealt,
        critical,
    });

    if state.is_boss_defeated() {
        info!("Boss defeated at frame {}", state.current_frame);
        events.push(CombatEvent::BossDefeated);
    }
}
