//! Transition functions applied to the combat state each tick.
//!
//! Systems are plain functions over `&mut CombatState`. They do not own
//! state; everything lives in the aggregate, the tuning, or the engine's
//! RNG and queues passed in by the caller.

pub mod boss_ai;
pub mod collision;
pub mod damage;
pub mod parry;
pub mod player_strike;
pub mod stagger;
pub mod vulnerability;
