//! Skirmish Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16:
//! - ai::flee — существо убегает от target (FleeController)
//! - combat::lunge — рывок-атака игрока (LungeAbility)
//! - navigation — исполнение MovementCommand (прямая к destination)
//!
//! Bevy App = host engine: lifecycle entity, frame clock, events.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod ai;
pub mod collision_layers;
pub mod combat;
pub mod components;
pub mod debug;
pub mod error;
pub mod input;
pub mod logger;
pub mod navigation;

pub use ai::{flee_destination, AIPlugin, FleeController, DEFAULT_FLEE_RADIUS};
pub use combat::{
    CombatPlugin, DamageDealt, Dead, EnemyDestroyed, EntityDied, LungeAbility, LungeConfig, LungeHit,
    LungeState, LUNGE_DAMAGE,
};
pub use components::*;
pub use debug::DebugOverlayPlugin;
pub use error::SetupError;
pub use input::{AttackPressed, PlayerInputPlugin};
pub use logger::log;
pub use navigation::NavigationPlugin;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PlayerInputPlugin,
            AIPlugin,
            CombatPlugin,
            NavigationPlugin,
            DebugOverlayPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты сериализуются через Debug, отсортированы по Entity index.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
