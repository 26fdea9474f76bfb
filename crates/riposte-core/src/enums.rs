//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Horizontal zone targeted by a boss attack or covered by the player's shield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Left,
    #[default]
    Center,
    Right,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];
}

/// Run mode. Practice never kills the player and allows attack selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Standard,
    Practice,
}

impl GameMode {
    pub fn is_practice(self) -> bool {
        self == GameMode::Practice
    }
}

/// Kind of player input recorded in the input log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Shield moved (logged on every move, not only zone changes).
    Block,
    /// Strike started during a vulnerability window.
    Attack,
    /// Parry attempted, whatever the outcome.
    Parry,
}
