//! Core types and definitions for the RIPOSTE combat simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! zones, the attack catalog, tuning, the combat state aggregate, commands,
//! events, and the input log. It contains no simulation logic.

pub mod attacks;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod tuning;

#[cfg(test)]
mod tests;
