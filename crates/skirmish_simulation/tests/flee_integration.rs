//! Flee integration test
//!
//! Headless App + SimulationPlugin, фиксированный кадр 125ms
//! (первый update всегда с delta = 0).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skirmish_simulation::*;

const FRAME: Duration = Duration::from_millis(125);

fn create_flee_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app
}

fn spawn_player(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((Player, Transform::from_translation(position)))
        .id()
}

fn spawn_critter(app: &mut App, position: Vec3, target: Entity, radius: f32, speed: f32) -> Entity {
    app.world_mut()
        .spawn((
            Critter,
            Transform::from_translation(position),
            FleeController::new(target).with_radius(radius),
            MovementSpeed { speed },
        ))
        .id()
}

fn command(app: &App, entity: Entity) -> MovementCommand {
    *app.world().get::<MovementCommand>(entity).unwrap()
}

#[test]
fn test_flee_requests_destination_away_from_target() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(5.0, 0.0, 0.0));
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 10.0, 3.5);

    app.update();

    assert_eq!(
        command(&app, critter),
        MovementCommand::MoveToPosition {
            target: Vec3::new(-5.0, 0.0, 0.0)
        }
    );
}

#[test]
fn test_flee_ignores_target_exactly_at_radius() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(0.0, 0.0, 4.0));
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 4.0, 3.5);

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(command(&app, critter), MovementCommand::Idle);
    assert_eq!(app.world().get::<Transform>(critter).unwrap().translation, Vec3::ZERO);
}

#[test]
fn test_critter_keeps_last_destination_after_leaving_radius() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(3.0, 0.0, 0.0));
    // 4 m/s × 0.125s = 0.5m за кадр
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 4.0, 4.0);

    app.update(); // delta 0: destination (-3,0,0), стоим
    app.update(); // -0.5
    app.update(); // distance 3.5 < 4 → destination (-4,0,0), -1.0
    assert_eq!(
        command(&app, critter),
        MovementCommand::MoveToPosition {
            target: Vec3::new(-4.0, 0.0, 0.0)
        }
    );

    app.update(); // distance 4.0 — вне радиуса, старый destination
    let translation = app.world().get::<Transform>(critter).unwrap().translation;
    assert_eq!(translation, Vec3::new(-1.5, 0.0, 0.0));
    assert_eq!(
        command(&app, critter),
        MovementCommand::MoveToPosition {
            target: Vec3::new(-4.0, 0.0, 0.0)
        }
    );
}

#[test]
fn test_critter_reaches_destination_once() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(1.0, 0.0, 0.0));
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 1.5, 8.0);

    // delta 0, затем шаги по 1m: (-1) достигнут на первом же шаге
    app.update();
    app.update();

    let translation = app.world().get::<Transform>(critter).unwrap().translation;
    assert_eq!(translation, Vec3::new(-1.0, 0.0, 0.0));

    let state = app.world().get::<NavigationState>(critter).unwrap();
    assert!(state.is_target_reached);
    assert_eq!(state.last_destination, Some(Vec3::new(-1.0, 0.0, 0.0)));
}

#[test]
fn test_dead_critter_does_not_flee() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(1.0, 0.0, 0.0));
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 4.0, 3.5);
    app.world_mut().entity_mut(critter).insert(Dead);

    app.update();

    assert_eq!(command(&app, critter), MovementCommand::Idle);
}

#[test]
#[should_panic(expected = "has no Transform")]
fn test_missing_flee_target_fails_fast() {
    let mut app = create_flee_app();
    let ghost = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(ghost);
    spawn_critter(&mut app, Vec3::ZERO, ghost, 4.0, 3.5);

    app.update();
}

#[test]
#[should_panic(expected = "has no Transform")]
fn test_flee_target_despawned_at_runtime_fails_fast() {
    let mut app = create_flee_app();
    let player = spawn_player(&mut app, Vec3::new(1.0, 0.0, 0.0));
    let critter = spawn_critter(&mut app, Vec3::ZERO, player, 4.0, 3.5);

    for _ in 0..3 {
        app.update();
    }
    assert!(command(&app, critter).destination().is_some());

    app.world_mut().despawn(player);
    app.update();
}
