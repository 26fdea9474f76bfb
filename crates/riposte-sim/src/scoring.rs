//! Run scoring.

use std::time::Duration;

use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

/// Score for a run that took `elapsed` of wall-clock time.
///
/// `base_xp + parries * bonus + seconds_remaining * bonus - died * penalty`,
/// where seconds remaining count down from the time limit and floor at zero.
/// Practice runs always score 0.
pub fn score_for_elapsed(
    state: &CombatState,
    tuning: &CombatTuning,
    base_xp: i64,
    elapsed: Duration,
) -> i64 {
    if state.mode.is_practice() {
        return 0;
    }

    let seconds_remaining = tuning
        .score_time_limit_secs
        .saturating_sub(elapsed.as_secs()) as i64;
    let damage_taken_penalty = if state.player_alive { 0 } else { 1 };

    base_xp
        + i64::from(state.perfect_parries) * tuning.score_parry_bonus
        + seconds_remaining * tuning.score_seconds_bonus
        - damage_taken_penalty * tuning.score_death_penalty
}
