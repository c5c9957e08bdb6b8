//! Tests for locomotion systems (полный Update pipeline, headless).

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;

    use crate::character::{spawn_enemy_character, spawn_player_character};
    use crate::config::GameplayConfig;
    use crate::controller::ViewOrientation;
    use crate::input::{ActionEvent, InputAction};
    use crate::physics::{CharacterMovement, CrouchChanged, CrouchState};
    use crate::create_stepped_app;

    const STEP: Duration = Duration::from_millis(16);

    /// Все CrouchChanged за время теста
    #[derive(Resource, Default)]
    struct CrouchLog(Vec<CrouchState>);

    fn record_crouch(mut events: EventReader<CrouchChanged>, mut log: ResMut<CrouchLog>) {
        for event in events.read() {
            log.0.push(event.state);
        }
    }

    fn test_app() -> (App, Entity) {
        let mut app = create_stepped_app(STEP);
        app.init_resource::<CrouchLog>();
        app.add_systems(Last, record_crouch);

        let config = GameplayConfig::default();
        let player = spawn_player_character(&mut app.world_mut().commands(), &config, Vec3::ZERO);
        app.world_mut().flush();

        // Первый кадр: delta = 0
        app.update();
        (app, player.body)
    }

    fn send(app: &mut App, event: ActionEvent) {
        app.world_mut().send_event(event);
    }

    #[test]
    fn test_crouch_start_complete_transitions_once() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::started(InputAction::Crouch));
        app.update();
        assert_eq!(*app.world().get::<CrouchState>(player).unwrap(), CrouchState::Crouching);

        // Move/Look между фазами не влияют на crouch
        for _ in 0..5 {
            send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 0.5)));
            send(&mut app, ActionEvent::axis(InputAction::Look, Vec2::new(2.0, -1.0)));
            app.update();
        }
        assert_eq!(*app.world().get::<CrouchState>(player).unwrap(), CrouchState::Crouching);

        send(&mut app, ActionEvent::completed(InputAction::Crouch));
        app.update();

        assert_eq!(*app.world().get::<CrouchState>(player).unwrap(), CrouchState::Standing);
        assert_eq!(
            app.world().resource::<CrouchLog>().0,
            vec![CrouchState::Crouching, CrouchState::Standing]
        );
    }

    #[test]
    fn test_double_start_crouches_once() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::started(InputAction::Crouch));
        send(&mut app, ActionEvent::started(InputAction::Crouch));
        app.update();

        assert_eq!(*app.world().get::<CrouchState>(player).unwrap(), CrouchState::Crouching);
        assert_eq!(app.world().resource::<CrouchLog>().0, vec![CrouchState::Crouching]);
    }

    #[test]
    fn test_uncrouch_while_standing_is_noop() {
        let (mut app, player) = test_app();
        let y_before = app.world().get::<Transform>(player).unwrap().translation.y;

        send(&mut app, ActionEvent::completed(InputAction::Crouch));
        app.update();

        assert_eq!(*app.world().get::<CrouchState>(player).unwrap(), CrouchState::Standing);
        assert!(app.world().resource::<CrouchLog>().0.is_empty());
        let y_after = app.world().get::<Transform>(player).unwrap().translation.y;
        assert!((y_after - y_before).abs() < 1e-3);
    }

    #[test]
    fn test_move_uses_flattened_view_yaw() {
        let (mut app, player) = test_app();
        *app.world_mut().get_mut::<ViewOrientation>(player).unwrap() =
            ViewOrientation::new(30.0, 90.0, 0.0);

        let start = app.world().get::<Transform>(player).unwrap().translation;
        for _ in 0..10 {
            send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 0.0)));
            app.update();
        }
        let end = app.world().get::<Transform>(player).unwrap().translation;
        let moved = end - start;

        // yaw 90 → +X; pitch 30 не поднимает персонажа
        assert!(moved.x > 50.0, "moved = {moved:?}");
        assert!(moved.z.abs() < 1e-2, "moved = {moved:?}");
        assert!(moved.y.abs() < 1e-2, "moved = {moved:?}");
    }

    #[test]
    fn test_look_accumulates_additively() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::axis(InputAction::Look, Vec2::new(10.0, 5.0)));
        send(&mut app, ActionEvent::axis(InputAction::Look, Vec2::new(-3.0, 2.0)));
        app.update();

        let o = *app.world().get::<ViewOrientation>(player).unwrap();
        assert!((o.yaw - 7.0).abs() < 1e-4, "{o:?}");
        assert!((o.pitch - 7.0).abs() < 1e-4, "{o:?}");
    }

    #[test]
    fn test_diagonal_speed_capped_by_integrator() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 1.0)));
        app.update();

        let movement = app.world().get::<CharacterMovement>(player).unwrap();
        assert!((movement.horizontal_speed() - 600.0).abs() < 1e-2);
    }

    #[test]
    fn test_crouched_speed() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::started(InputAction::Crouch));
        send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(-1.0, 0.0)));
        app.update();

        let movement = app.world().get::<CharacterMovement>(player).unwrap();
        assert!((movement.horizontal_speed() - 300.0).abs() < 1e-2);
    }

    #[test]
    fn test_input_stops_when_released() {
        let (mut app, player) = test_app();

        send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 0.0)));
        app.update();
        app.update();

        let movement = app.world().get::<CharacterMovement>(player).unwrap();
        assert_eq!(movement.horizontal_speed(), 0.0);
    }

    #[test]
    fn test_enemy_ignores_player_actions() {
        let (mut app, _) = test_app();
        let config = GameplayConfig::default();
        let enemy = spawn_enemy_character(
            &mut app.world_mut().commands(),
            &config,
            Vec3::new(500.0, 0.0, 0.0),
        );
        app.world_mut().flush();
        let before = app.world().get::<Transform>(enemy).unwrap().translation;

        for _ in 0..5 {
            send(&mut app, ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 0.0)));
            send(&mut app, ActionEvent::started(InputAction::Crouch));
            app.update();
        }

        assert_eq!(app.world().get::<Transform>(enemy).unwrap().translation, before);
        assert_eq!(*app.world().get::<CrouchState>(enemy).unwrap(), CrouchState::Standing);
    }
}
