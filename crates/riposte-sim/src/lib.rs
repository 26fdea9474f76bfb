//! Combat engine for RIPOSTE.
//!
//! Owns the combat state, advances it one tick at a time, and exposes the
//! command and query API consumed by the presentation layer. Completely
//! headless, so every run is reproducible from its seed and input sequence.

pub mod driver;
pub mod engine;
pub mod rng;
pub mod scoring;
pub mod systems;

pub use riposte_core as core;
pub use driver::FixedStepDriver;
pub use engine::{CombatEngine, EngineConfig};
