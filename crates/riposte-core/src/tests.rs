#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::attacks::{AttackId, ATTACK_CATALOG};
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::TuningError;
    use crate::events::CombatEvent;
    use crate::input::InputEvent;
    use crate::state::CombatState;
    use crate::tuning::CombatTuning;

    // ---- Attack catalog ----

    #[test]
    fn test_catalog_order_matches_ids() {
        for id in AttackId::ALL {
            assert_eq!(id.attack().id, id, "Catalog entry out of order for {id:?}");
        }
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(ATTACK_CATALOG.len(), 5);

        let zones: HashSet<Zone> = ATTACK_CATALOG.iter().map(|a| a.zone).collect();
        assert_eq!(zones.len(), 3, "Catalog should span all three zones");

        let unblockable = ATTACK_CATALOG.iter().filter(|a| !a.blockable).count();
        assert_eq!(unblockable, 2, "Exactly two must-parry attacks");

        for attack in &ATTACK_CATALOG {
            assert!(
                (100..=120).contains(&attack.windup_frames),
                "{} windup {} outside generous reaction range",
                attack.name,
                attack.windup_frames
            );
            assert_eq!(attack.active_frames, ATTACK_CATALOG[0].active_frames);
            assert_eq!(attack.recovery_frames, ATTACK_CATALOG[0].recovery_frames);
        }
    }

    #[test]
    fn test_impact_lands_inside_active_frames() {
        for attack in &ATTACK_CATALOG {
            let impact = attack.windup_frames + IMPACT_DELAY_FRAMES;
            assert!(impact >= attack.windup_frames);
            assert!(impact < attack.windup_frames + attack.active_frames);
            assert!(impact < attack.total_frames());
        }
    }

    // ---- Tuning ----

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = CombatTuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ticks_per_second, 60);
        assert!((tuning.dt() - 1.0 / 60.0).abs() < 1e-12);
        assert!((tuning.stagger_decay_per_tick() - STAGGER_DECAY_PER_SECOND / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let tuning =
            CombatTuning::from_json(r#"{ "block_stagger": 7.5, "vulnerability_duration_frames": 90 }"#)
                .unwrap();
        assert!((tuning.block_stagger - 7.5).abs() < 1e-12);
        assert_eq!(tuning.vulnerability_duration_frames, 90);
        assert_eq!(tuning.impact_delay_frames, IMPACT_DELAY_FRAMES);
        assert!((tuning.stagger_max - STAGGER_MAX).abs() < 1e-12);
    }

    #[test]
    fn test_tuning_rejects_bad_json() {
        let err = CombatTuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_tuning_rejects_invalid_values() {
        let cases = [
            r#"{ "ticks_per_second": 0 }"#,
            r#"{ "stagger_max": 0.0 }"#,
            r#"{ "attack_chance_per_frame": 1.5 }"#,
            r#"{ "block_stagger": -1.0 }"#,
            r#"{ "player_attack_hit_frame": 20, "player_attack_duration_frames": 20 }"#,
            r#"{ "desperation_hp_fraction": 2.0 }"#,
        ];
        for json in cases {
            let err = CombatTuning::from_json(json).unwrap_err();
            assert!(
                matches!(err, TuningError::Invalid { .. }),
                "{json} should fail validation, got {err:?}"
            );
        }
    }

    #[test]
    fn test_tuning_error_names_field() {
        let err = CombatTuning::from_json(r#"{ "stagger_max": -5.0 }"#).unwrap_err();
        assert!(err.to_string().contains("stagger_max"));
    }

    // ---- State ----

    #[test]
    fn test_new_state_defaults() {
        let state = CombatState::new(10, GameMode::Standard);
        assert_eq!(state.current_frame, 0);
        assert!(state.player_alive);
        assert_eq!(state.player_shield_zone, Zone::Center);
        assert_eq!(state.boss_hp, 10);
        assert_eq!(state.boss_max_hp, 10);
        assert_eq!(state.boss_stagger, 0.0);
        assert!(state.boss_current_attack.is_none());
        assert_eq!(state.enabled_attacks.len(), AttackId::ALL.len());
        assert_eq!(state.death_count, 0);
    }

    #[test]
    fn test_run_over_rules() {
        let mut standard = CombatState::new(10, GameMode::Standard);
        assert!(!standard.is_run_over());
        standard.player_alive = false;
        assert!(standard.is_run_over());

        let mut practice = CombatState::new(10, GameMode::Practice);
        practice.player_alive = false;
        assert!(!practice.is_run_over(), "Practice runs ignore player death");
        practice.boss_hp = 0;
        assert!(practice.is_boss_defeated());
        assert!(practice.is_run_over());
    }

    // ---- Wire formats ----

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::AttemptParry {
            zone: Zone::Left,
            accuracy: 0.95,
        })
        .unwrap();
        assert!(json.contains(r#""type":"AttemptParry""#), "got {json}");

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"ForceAttack","attack":"ShadowCleave"}"#).unwrap();
        assert_eq!(
            back,
            PlayerCommand::ForceAttack {
                attack: AttackId::ShadowCleave
            }
        );
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&CombatEvent::BlockOccurred {
            attack: AttackId::LeftSweep,
            zone: Zone::Left,
        })
        .unwrap();
        assert!(json.contains(r#""type":"BlockOccurred""#), "got {json}");
    }

    #[test]
    fn test_snapshot_serde_preserves_state() {
        let mut state = CombatState::new(25, GameMode::Practice);
        state.boss_current_attack = Some(AttackId::PiercingThrust);
        state.enabled_attacks.remove(&AttackId::LeftSweep);
        let json = serde_json::to_string(&state).unwrap();
        let back: CombatState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_input_event_constructors() {
        let parry = InputEvent::parry(12, Zone::Right, 0.5);
        assert_eq!(parry.kind, InputKind::Parry);
        assert_eq!(parry.zone, Some(Zone::Right));
        assert_eq!(parry.accuracy, Some(0.5));

        let attack = InputEvent::attack(3);
        assert_eq!(attack.kind, InputKind::Attack);
        assert!(attack.zone.is_none());
    }
}
