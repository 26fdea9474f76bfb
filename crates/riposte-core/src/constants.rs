//! Default tuning values.
//!
//! These seed `CombatTuning::default()`. Hosts that iterate on balance load a
//! `CombatTuning` from JSON instead of editing these.

/// Simulation tick rate (Hz).
pub const TICKS_PER_SECOND: u32 = 60;

// --- Boss attacks ---

/// Ticks after windup ends at which an attack's impact resolves.
pub const IMPACT_DELAY_FRAMES: u64 = 25;

/// Per-tick probability that an idle boss starts a random attack.
pub const ATTACK_CHANCE_PER_FRAME: f64 = 0.015;

// --- Parry ---

/// How many ticks before the end of windup a parry is already accepted.
pub const PARRY_EARLY_WINDOW_FRAMES: u64 = 45;

/// Accuracy above which a parry counts as perfect.
pub const PERFECT_PARRY_ACCURACY: f64 = 0.9;

/// Stagger multiplier applied to a perfect parry.
pub const PERFECT_PARRY_MULTIPLIER: f64 = 1.5;

// --- Stagger ---

/// Stagger at which the boss breaks into a vulnerability window.
pub const STAGGER_MAX: f64 = 100.0;

/// Stagger gained per successful block.
pub const BLOCK_STAGGER: f64 = 5.0;

/// Stagger gained per successful parry (before the accuracy multiplier).
pub const PARRY_STAGGER: f64 = 20.0;

/// Passive stagger decay while the boss is not vulnerable.
pub const STAGGER_DECAY_PER_SECOND: f64 = 2.0;

// --- Vulnerability ---

/// Length of the vulnerability window (3 s at 60 Hz).
pub const VULNERABILITY_DURATION_FRAMES: u64 = 180;

/// Boss HP fraction at or below which a closing vulnerability window
/// leaves the boss desperate. Zero disables desperation.
pub const DESPERATION_HP_FRACTION: f64 = 0.3;

// --- Damage ---

/// Damage dealt by a player strike landing in a vulnerability window.
pub const SAFE_ATTACK_DAMAGE: i32 = 1;

/// Damage dealt by a parry while the boss is desperate.
pub const CRITICAL_DAMAGE: i32 = 3;

// --- Player strike ---

/// Duration of a player strike.
pub const PLAYER_ATTACK_DURATION_FRAMES: u64 = 20;

/// Offset into the strike at which damage resolves.
pub const PLAYER_ATTACK_HIT_FRAME: u64 = 10;

// --- Scoring ---

/// Base XP awarded for a cleared run.
pub const DEFAULT_BASE_XP: i64 = 1000;

/// Bonus per perfect parry.
pub const SCORE_PARRY_BONUS: i64 = 50;

/// Bonus per whole second remaining under the time limit.
pub const SCORE_SECONDS_BONUS: i64 = 10;

/// Time limit after which no time bonus is awarded.
pub const SCORE_TIME_LIMIT_SECS: u64 = 300;

/// Penalty applied once if the player died during the run.
pub const SCORE_DEATH_PENALTY: i64 = 20;

// --- Engine defaults ---

/// Default boss max HP.
pub const DEFAULT_BOSS_MAX_HP: i32 = 10;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
