//! Error types for engine construction and tuning validation.
//!
//! Gameplay rejections (a parry with no attack in flight, a strike while the
//! boss is guarded) are not errors; they are `false` returns or no-ops.

use thiserror::Error;

/// Errors raised while building a combat engine.
#[derive(Debug, Error)]
pub enum CombatError {
    #[error("boss max HP must be positive, got {0}")]
    InvalidMaxHp(i32),

    #[error("invalid tuning: {0}")]
    InvalidTuning(#[from] TuningError),
}

/// Errors raised while loading or validating a `CombatTuning`.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tuning field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl TuningError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        TuningError::Invalid { field, reason }
    }
}
