//! Append-only record of player inputs.

use serde::{Deserialize, Serialize};

use crate::enums::{InputKind, Zone};

/// One logged command call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub frame: u64,
    pub kind: InputKind,
    pub zone: Option<Zone>,
    pub accuracy: Option<f64>,
}

impl InputEvent {
    pub fn block(frame: u64, zone: Zone) -> Self {
        Self {
            frame,
            kind: InputKind::Block,
            zone: Some(zone),
            accuracy: None,
        }
    }

    pub fn attack(frame: u64) -> Self {
        Self {
            frame,
            kind: InputKind::Attack,
            zone: None,
            accuracy: None,
        }
    }

    pub fn parry(frame: u64, zone: Zone, accuracy: f64) -> Self {
        Self {
            frame,
            kind: InputKind::Parry,
            zone: Some(zone),
            accuracy: Some(accuracy),
        }
    }
}
