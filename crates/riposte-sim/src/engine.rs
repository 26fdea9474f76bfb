//! Combat engine: the core of the game.
//!
//! `CombatEngine` owns the combat state, processes player commands, runs the
//! tick systems in a fixed order, and hands out snapshots, the input log, and
//! drained events. Completely headless (no rendering or audio dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

use riposte_core::attacks::AttackId;
use riposte_core::commands::PlayerCommand;
use riposte_core::constants::{DEFAULT_BOSS_MAX_HP, DEFAULT_SEED};
use riposte_core::enums::{GameMode, Zone};
use riposte_core::error::CombatError;
use riposte_core::events::CombatEvent;
use riposte_core::input::InputEvent;
use riposte_core::state::CombatState;
use riposte_core::tuning::CombatTuning;

use crate::rng::CombatRng;
use crate::scoring;
use crate::systems;

/// Configuration for starting a new run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    pub boss_max_hp: i32,
    pub mode: GameMode,
    pub tuning: CombatTuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            boss_max_hp: DEFAULT_BOSS_MAX_HP,
            mode: GameMode::Standard,
            tuning: CombatTuning::default(),
        }
    }
}

/// The combat engine. Exclusively owns all simulation state.
#[derive(Debug)]
pub struct CombatEngine {
    state: CombatState,
    tuning: CombatTuning,
    seed: u64,
    rng: CombatRng,
    /// Practice attacks queued by `force_attack`, started in order.
    forced_attacks: VecDeque<AttackId>,
    input_log: Vec<InputEvent>,
    events: Vec<CombatEvent>,
    run_started: Instant,
}

impl CombatEngine {
    /// Create a new engine. Fails on a non-positive max HP or invalid tuning.
    pub fn new(config: EngineConfig) -> Result<Self, CombatError> {
        if config.boss_max_hp <= 0 {
            return Err(CombatError::InvalidMaxHp(config.boss_max_hp));
        }
        config.tuning.validate()?;

        debug!(
            "New {:?} run: seed {}, boss HP {}",
            config.mode, config.seed, config.boss_max_hp
        );
        Ok(Self {
            state: CombatState::new(config.boss_max_hp, config.mode),
            tuning: config.tuning,
            seed: config.seed,
            rng: CombatRng::new(config.seed),
            forced_attacks: VecDeque::new(),
            input_log: Vec::new(),
            events: Vec::new(),
            run_started: Instant::now(),
        })
    }

    /// Advance the simulation by one tick. No-op once the player is dead.
    pub fn tick(&mut self) {
        if !self.state.player_alive {
            return;
        }
        self.state.current_frame += 1;

        // 1. Boss AI (attack selection)
        systems::boss_ai::run(
            &mut self.state,
            &self.tuning,
            &mut self.rng,
            &mut self.forced_attacks,
            &mut self.events,
        );
        // 2. Attack collision at the impact instant + expiry
        systems::collision::run(&mut self.state, &self.tuning, &mut self.events);
        // 3. Player strike resolution
        systems::player_strike::run(&mut self.state, &self.tuning, &mut self.events);
        // 4. Passive stagger decay
        systems::stagger::decay(&mut self.state, &self.tuning);
        // 5. Vulnerability timer
        systems::vulnerability::run(&mut self.state, &self.tuning, &mut self.events);
    }

    // --- Commands ---

    /// Move the shield. Every call is logged, even when the zone is unchanged.
    pub fn move_shield(&mut self, zone: Zone) {
        if !self.state.player_alive {
            return;
        }
        self.state.player_shield_zone = zone;
        self.input_log
            .push(InputEvent::block(self.state.current_frame, zone));
    }

    /// Attempt to parry the in-flight attack. The input is logged whatever
    /// the outcome.
    pub fn attempt_parry(&mut self, zone: Zone, accuracy: f64) -> bool {
        self.input_log
            .push(InputEvent::parry(self.state.current_frame, zone, accuracy));
        if !self.state.player_alive {
            return false;
        }
        systems::parry::attempt(
            &mut self.state,
            &self.tuning,
            zone,
            accuracy,
            &mut self.events,
        )
    }

    /// Start a strike. Only allowed while alive, not already striking, and
    /// the boss is vulnerable.
    pub fn player_attack(&mut self) {
        if !self.state.player_alive || self.state.player_attacking || !self.state.boss_vulnerable {
            return;
        }
        self.state.player_attacking = true;
        self.state.player_attack_frame = self.state.current_frame;
        self.input_log
            .push(InputEvent::attack(self.state.current_frame));
        self.events.push(CombatEvent::StrikeStarted {
            frame: self.state.current_frame,
        });
    }

    /// Practice only: allow or forbid an attack in the random pool.
    pub fn set_practice_attack(&mut self, attack: AttackId, enabled: bool) {
        if !self.state.mode.is_practice() {
            return;
        }
        if enabled {
            self.state.enabled_attacks.insert(attack);
        } else {
            self.state.enabled_attacks.remove(&attack);
        }
    }

    /// Practice only: queue an attack to start as soon as the boss is idle.
    pub fn force_attack(&mut self, attack: AttackId) {
        if !self.state.mode.is_practice() {
            return;
        }
        self.forced_attacks.push_back(attack);
    }

    /// Break the boss open immediately, interrupting any in-flight attack.
    pub fn trigger_vulnerability(&mut self) {
        systems::vulnerability::trigger(&mut self.state, &mut self.events);
    }

    /// Dispatch a command. Returns the parry result for `AttemptParry` and
    /// `true` for every other command.
    pub fn apply(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::AttemptParry { zone, accuracy } => self.attempt_parry(zone, accuracy),
            PlayerCommand::MoveShield { zone } => {
                self.move_shield(zone);
                true
            }
            PlayerCommand::PlayerAttack => {
                self.player_attack();
                true
            }
            PlayerCommand::SetPracticeAttack { attack, enabled } => {
                self.set_practice_attack(attack, enabled);
                true
            }
            PlayerCommand::ForceAttack { attack } => {
                self.force_attack(attack);
                true
            }
        }
    }

    // --- Queries ---

    /// Owned snapshot of the current state.
    pub fn state(&self) -> CombatState {
        self.state.clone()
    }

    /// Borrow the live state without copying.
    pub fn state_ref(&self) -> &CombatState {
        &self.state
    }

    /// Every command call so far, in order.
    pub fn input_log(&self) -> &[InputEvent] {
        &self.input_log
    }

    pub fn run_seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &CombatTuning {
        &self.tuning
    }

    /// Number of practice attacks still waiting to start.
    pub fn forced_queue_len(&self) -> usize {
        self.forced_attacks.len()
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_boss_defeated(&self) -> bool {
        self.state.is_boss_defeated()
    }

    pub fn is_run_over(&self) -> bool {
        self.state.is_run_over()
    }

    /// Score using wall-clock time since construction.
    pub fn calculate_score(&self, base_xp: i64) -> i64 {
        self.score_for_elapsed(base_xp, self.run_started.elapsed())
    }

    /// Score as if the run had taken `elapsed`.
    pub fn score_for_elapsed(&self, base_xp: i64, elapsed: Duration) -> i64 {
        scoring::score_for_elapsed(&self.state, &self.tuning, base_xp, elapsed)
    }

    /// Queue an attack regardless of mode (for tests needing a known attack
    /// in standard mode).
    #[cfg(test)]
    pub fn queue_attack_for_test(&mut self, attack: AttackId) {
        self.forced_attacks.push_back(attack);
    }

    /// Overwrite boss stagger (for tests).
    #[cfg(test)]
    pub fn set_stagger_for_test(&mut self, stagger: f64) {
        self.state.boss_stagger = stagger;
    }
}
