//! Scripted player that reacts to boss attacks.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use riposte_core::enums::Zone;
use riposte_core::events::CombatEvent;
use riposte_sim::CombatEngine;

/// How the bot intends to answer the attack currently in flight.
#[derive(Debug, Clone, Copy)]
enum Plan {
    /// Hold the shield in this zone through the impact.
    Block(Zone),
    /// Parry into this zone once the windup completes.
    Parry { zone: Zone, accuracy: f64 },
    /// Misread the attack.
    Fumble(Zone),
}

/// Reactive bot with its own RNG stream, independent of the engine's.
pub struct ReactiveBot {
    rng: ChaCha8Rng,
    skill: f64,
    /// Start frame of the attack the current plan answers.
    planned_for: Option<u64>,
    plan: Option<Plan>,
    pub vulnerability_windows: u32,
    pub parries_attempted: u32,
}

impl ReactiveBot {
    pub fn new(seed: u64, skill: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            skill: skill.clamp(0.0, 1.0),
            planned_for: None,
            plan: None,
            vulnerability_windows: 0,
            parries_attempted: 0,
        }
    }

    /// Issue commands for the coming frame.
    pub fn act(&mut self, engine: &mut CombatEngine) {
        let state = engine.state_ref();

        if state.boss_vulnerable {
            self.plan = None;
            if !state.player_attacking {
                engine.player_attack();
            }
            return;
        }

        let Some(id) = state.boss_current_attack else {
            self.plan = None;
            return;
        };
        let attack = id.attack();
        let elapsed = state.attack_elapsed();
        let processed = state.boss_attack_hit_processed;

        if self.planned_for != Some(state.boss_attack_start_frame) {
            self.planned_for = Some(state.boss_attack_start_frame);
            let plan = self.choose_plan(attack.zone, attack.blockable);
            debug!("Bot plans {plan:?} against {}", attack.name);
            self.plan = Some(plan);
            match plan {
                Plan::Block(zone) | Plan::Fumble(zone) => engine.move_shield(zone),
                Plan::Parry { .. } => {}
            }
        }

        if let Some(Plan::Parry { zone, accuracy }) = self.plan {
            if !processed && elapsed >= attack.windup_frames {
                self.parries_attempted += 1;
                engine.attempt_parry(zone, accuracy);
                self.plan = None;
            }
        }
    }

    /// Track what happened during the frame.
    pub fn observe(&mut self, events: Vec<CombatEvent>) {
        for event in events {
            if let CombatEvent::VulnerabilityTriggered { .. } = event {
                self.vulnerability_windows += 1;
            }
        }
    }

    fn choose_plan(&mut self, zone: Zone, blockable: bool) -> Plan {
        if !self.rng.gen_bool(self.skill) {
            let wrong: Vec<Zone> = Zone::ALL.into_iter().filter(|z| *z != zone).collect();
            return Plan::Fumble(wrong[self.rng.gen_range(0..wrong.len())]);
        }
        // Parrying builds stagger faster than blocking, so mix it in.
        if blockable && self.rng.gen_bool(0.5) {
            Plan::Block(zone)
        } else {
            Plan::Parry {
                zone,
                accuracy: self.rng.gen_range(0.7..=1.0),
            }
        }
    }
}
