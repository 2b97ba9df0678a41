#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::components::{DeathTimer, Deadly, Eatable, LightUp, Motion, Player, RenderRequest};
    use crate::enums::{EffectId, GeometryId, TextureId};
    use crate::events::AudioEvent;
    use crate::math::{heading_vector, perpendicular, reflect, wrap_angle};
    use crate::registry::Registry;
    use crate::state::GameState;

    // ---- Serde round trips ----

    #[test]
    fn test_audio_event_serde() {
        let variants = vec![
            AudioEvent::CarCrash,
            AudioEvent::PointScored,
            AudioEvent::MusicPaused,
            AudioEvent::MusicResumed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_render_request_serde() {
        let request = RenderRequest {
            texture: Some(TextureId::Car),
            effect: EffectId::Textured,
            geometry: GeometryId::Sprite,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: RenderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }

    // ---- Math helpers ----

    #[test]
    fn test_reflection_inverts_normal_component() {
        let v = Vec2::new(3.0, -2.0);
        let n = Vec2::new(0.6, 0.8); // unit normal
        let r = reflect(v, n);
        assert!(
            (r.dot(n) + v.dot(n)).abs() < 1e-5,
            "normal component should invert: {} vs {}",
            r.dot(n),
            v.dot(n)
        );
    }

    #[test]
    fn test_reflection_preserves_tangential_magnitude() {
        let v = Vec2::new(3.0, -2.0);
        let n = Vec2::new(0.6, 0.8);
        let t = perpendicular(n);
        let r = reflect(v, n);
        assert!(
            (r.dot(t).abs() - v.dot(t).abs()).abs() < 1e-5,
            "tangential magnitude should be preserved"
        );
    }

    #[test]
    fn test_heading_and_perpendicular_are_orthogonal() {
        for angle in [0.0, 0.7, std::f32::consts::PI, -2.3] {
            let h = heading_vector(angle);
            assert!((h.length() - 1.0).abs() < 1e-6);
            assert!(h.dot(perpendicular(h)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wrap_angle_range() {
        for angle in [0.0, 3.5, -3.5, 10.0, -10.0] {
            let wrapped = wrap_angle(angle);
            assert!(
                (-std::f32::consts::PI..=std::f32::consts::PI).contains(&wrapped),
                "wrap_angle({angle}) = {wrapped} out of range"
            );
        }
    }

    // ---- Game state ----

    #[test]
    fn test_game_state_reset() {
        let mut state = GameState::default();
        state.points = 12;
        state.current_speed = 1.8;
        state.set_basic();
        state.darken_screen_factor = 0.4;

        state.reset();
        assert_eq!(state.points, 0);
        assert!(state.advanced, "restart switches to advanced mode");
        assert_eq!(state.current_speed, 1.0);
        assert_eq!(state.darken_screen_factor, 0.0);
    }

    #[test]
    fn test_speed_multiplier_growth() {
        let mut state = GameState::default();
        assert_eq!(state.speed_multiplier(1.05), 1.0);
        state.add_points(1);
        assert!((state.speed_multiplier(1.05) - 1.05).abs() < 1e-6);
        state.add_points(1);
        assert!((state.speed_multiplier(1.05) - 1.1025).abs() < 1e-6);
    }

    // ---- Registry ----

    #[test]
    fn test_remove_all_components_of_empties_every_store() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.motions.insert(e, Motion::default());
        registry.players.insert(e, Player);
        registry.death_timers.insert(e, DeathTimer::default());
        registry.light_ups.insert(e, LightUp::default());

        registry.remove_all_components_of(e);
        assert!(!registry.motions.has(e));
        assert!(!registry.players.has(e));
        assert!(!registry.death_timers.has(e));
        assert!(!registry.light_ups.has(e));
    }

    #[test]
    fn test_destruction_drops_pending_collision_events() {
        let mut registry = Registry::new();
        let a = registry.create();
        let b = registry.create();
        registry.motions.insert(a, Motion::default());
        registry.motions.insert(b, Motion::default());
        registry
            .collisions
            .push(a, crate::components::Collision { other: b });
        registry
            .collisions
            .push(b, crate::components::Collision { other: a });

        registry.remove_all_components_of(a);
        assert_eq!(
            registry.collisions.len(),
            1,
            "only the destroyed entity's own events are dropped"
        );
    }

    #[test]
    fn test_tags_do_not_leak_across_entities() {
        let mut registry = Registry::new();
        let wall = registry.create();
        let bonus = registry.create();
        registry.deadlys.insert(wall, Deadly);
        registry.eatables.insert(bonus, Eatable);

        assert!(registry.deadlys.has(wall));
        assert!(!registry.deadlys.has(bonus));
        assert!(registry.eatables.has(bonus));
        assert!(!registry.eatables.has(wall));
    }
}
