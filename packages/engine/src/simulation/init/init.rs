use crate::domain::WorldConfig;
use crate::systems::registry::PhysicsRegistry;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: WorldConfig) -> WorldCore {
    WorldCore {
        registry: PhysicsRegistry::new(config.defaults),
        config,
        sprites: Vec::with_capacity(64),
        next_sprite_id: 1,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
