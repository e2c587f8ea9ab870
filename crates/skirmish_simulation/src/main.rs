//! Headless симуляция Skirmish
//!
//! Игрок стоит в центре, critters разбросаны вокруг (seeded RNG) и убегают;
//! враги стоят по оси рывка. Атака нажимается по скрипту каждые 40 тиков.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::Collider;
use rand::Rng;

use skirmish_simulation::collision_layers::{critter_collision_groups, enemy_collision_groups};
use skirmish_simulation::debug::selected_lunge_count;
use skirmish_simulation::logger::{log_info, set_log_level, LogLevel};
use skirmish_simulation::*;

const TICKS: u32 = 600;
const FRAME: Duration = Duration::from_millis(16);
const CRITTERS: usize = 8;

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    set_log_level(LogLevel::Info);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    log_info(&format!("Starting Skirmish headless simulation (seed: {})", seed));

    let player = app
        .world_mut()
        .spawn((
            Player,
            DebugSelected,
            Transform::from_xyz(0.0, 0.0, 0.0).looking_to(Vec3::Z, Vec3::Y),
        ))
        .id();
    // Player сам себе orientation
    app.world_mut()
        .entity_mut(player)
        .insert(LungeAbility::new(player));

    let critter_positions: Vec<Vec3> = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        (0..CRITTERS)
            .map(|_| Vec3::new(rng.rng.gen_range(-6.0..6.0), 0.0, rng.rng.gen_range(-6.0..6.0)))
            .collect()
    };

    for position in critter_positions {
        app.world_mut().spawn((
            Critter,
            Transform::from_translation(position),
            FleeController::new(player),
            MovementSpeed::default(),
            Collider::ball(0.3),
            critter_collision_groups(),
        ));
    }

    // Враг с Health и без — по оси рывка
    app.world_mut().spawn((
        Enemy,
        Health::new(250),
        Transform::from_xyz(0.0, 0.0, 2.0),
        Collider::ball(0.5),
        enemy_collision_groups(),
    ));
    app.world_mut().spawn((
        Enemy,
        Transform::from_xyz(0.0, 0.0, 4.0),
        Collider::ball(0.5),
        enemy_collision_groups(),
    ));

    log_info(&format!(
        "Debug-selected lunge entities: {}",
        selected_lunge_count(app.world_mut())
    ));

    for tick in 0..TICKS {
        if tick % 40 == 1 {
            app.world_mut().send_event(AttackPressed { entity: player });
        }

        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let enemies = world.query_filtered::<Entity, With<Enemy>>().iter(world).count();
            let fleeing = world
                .query::<&MovementCommand>()
                .iter(world)
                .filter(|command| command.destination().is_some())
                .count();
            log_info(&format!(
                "Tick {}: {} entities, {} enemies left, {} critters with destination",
                tick,
                world.entities().len(),
                enemies,
                fleeing
            ));
        }
    }

    log_info("Simulation complete!");
}
