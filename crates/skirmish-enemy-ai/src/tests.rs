#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skirmish_core::constants::*;
    use skirmish_core::enums::GameMode;

    use crate::fsm::*;
    use crate::profiles::*;

    fn make_context(position: Vec3, waypoint: Vec3, player: Vec3) -> EnemyContext {
        EnemyContext {
            position,
            anchor: position,
            patrol_radius: 5.0,
            waypoint,
            move_speed: 1.0,
            facing: Vec3::Z,
            can_shoot: true,
            last_shot_ms: None,
            player_position: player,
            now_ms: 10_000,
            dt: 0.5,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ---- Patrol ----

    #[test]
    fn test_patrol_steps_toward_waypoint() {
        let ctx = make_context(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::splat(100.0));
        let step = patrol(&ctx, &mut rng());
        assert!(!step.waypoint_changed);
        assert!((step.position - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
        assert_eq!(step.waypoint, ctx.waypoint);
        assert!((step.facing - Vec3::X).length() < 1e-6, "Should face motion");
    }

    #[test]
    fn test_patrol_never_overshoots() {
        let mut ctx = make_context(Vec3::ZERO, Vec3::new(1.2, 0.0, 0.0), Vec3::splat(100.0));
        ctx.move_speed = 10.0;
        let step = patrol(&ctx, &mut rng());
        assert!((step.position - ctx.waypoint).length() < 1e-6);
    }

    #[test]
    fn test_patrol_reached_picks_new_waypoint_on_circle() {
        let anchor = Vec3::new(10.0, 1.0, -3.0);
        let mut ctx = make_context(anchor, anchor + Vec3::new(0.5, 0.0, 0.0), Vec3::splat(100.0));
        ctx.anchor = anchor;
        ctx.patrol_radius = 4.0;
        let mut rng = rng();
        for _ in 0..50 {
            let step = patrol(&ctx, &mut rng);
            assert!(step.waypoint_changed);
            assert_eq!(step.position, ctx.position, "Holds position on the turn");
            let offset = step.waypoint - anchor;
            assert!((offset.length() - 4.0).abs() < 1e-4);
            assert_eq!(step.waypoint.y, anchor.y);
        }
    }

    #[test]
    fn test_random_waypoint_is_deterministic_per_seed() {
        let a = random_waypoint(Vec3::ZERO, 3.0, &mut rng());
        let b = random_waypoint(Vec3::ZERO, 3.0, &mut rng());
        assert_eq!(a, b);
    }

    // ---- Engage ----

    #[test]
    fn test_engage_fires_first_time_in_range() {
        let enemy = Vec3::new(10.0, 1.0, 0.0);
        let player = Vec3::new(10.0, 1.0, 10.0);
        let ctx = make_context(enemy, enemy, player);
        match engage(&ctx) {
            EngageDecision::Fire { origin, direction } => {
                assert!((direction - Vec3::Z).length() < 1e-6);
                assert_eq!(origin, enemy + Vec3::Y * ENEMY_MUZZLE_HEIGHT);
            }
            EngageDecision::Hold => panic!("Enemy in range with no prior shot should fire"),
        }
    }

    #[test]
    fn test_engage_holds_out_of_range() {
        let ctx = make_context(Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 0.0, ENEMY_ENGAGE_RANGE));
        assert_eq!(engage(&ctx), EngageDecision::Hold);
    }

    #[test]
    fn test_engage_holds_without_can_shoot() {
        let mut ctx = make_context(Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        ctx.can_shoot = false;
        assert_eq!(engage(&ctx), EngageDecision::Hold);
    }

    #[test]
    fn test_engage_respects_cooldown() {
        let mut ctx = make_context(Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        ctx.last_shot_ms = Some(9_000);
        assert_eq!(engage(&ctx), EngageDecision::Hold, "Only 1000ms elapsed");

        ctx.last_shot_ms = Some(8_000);
        assert!(matches!(engage(&ctx), EngageDecision::Fire { .. }), "Exactly 2000ms");
    }

    #[test]
    fn test_cooldown_tolerates_clock_before_last_shot() {
        assert!(!cooldown_elapsed(Some(5_000), 1_000));
        assert!(cooldown_elapsed(None, 0));
    }

    #[test]
    fn test_engage_holds_when_player_on_top() {
        let ctx = make_context(Vec3::ONE, Vec3::ONE, Vec3::ONE);
        assert_eq!(engage(&ctx), EngageDecision::Hold);
    }

    #[test]
    fn test_evaluate_patrols_while_firing() {
        let enemy = Vec3::ZERO;
        let ctx = make_context(enemy, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 8.0));
        let update = evaluate(&ctx, &mut rng());
        assert!(update.patrol.position.x > 0.0, "Patrol still moves");
        match update.engage {
            EngageDecision::Fire { origin, .. } => {
                assert_eq!(origin, update.patrol.position + Vec3::Y * ENEMY_MUZZLE_HEIGHT);
            }
            EngageDecision::Hold => panic!("Should fire while patrolling"),
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_by_mode() {
        let practice = get_profile(GameMode::Practice);
        assert!(!practice.can_shoot);
        assert!(practice.one_hit_kill);
        assert!(practice.respawns);

        let duel = get_profile(GameMode::Duel);
        assert!(duel.can_shoot);
        assert!(!duel.one_hit_kill);
        assert!(!duel.respawns);
    }

    #[test]
    fn test_patrol_traits_within_ranges() {
        let mut rng = rng();
        for _ in 0..100 {
            let traits = roll_patrol_traits(&mut rng);
            assert!((ENEMY_MOVE_SPEED_MIN..ENEMY_MOVE_SPEED_MAX).contains(&traits.move_speed));
            assert!((PATROL_RADIUS_MIN..PATROL_RADIUS_MAX).contains(&traits.patrol_radius));
        }
    }
}
