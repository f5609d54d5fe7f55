use bevy_ecs::prelude::Resource;

/// Simulation time. `delta` is the already-scaled frame delta written once
/// per frame by [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_zero() {
        let wt = WorldTime::default();
        assert_eq!(wt.elapsed, 0.0);
        assert_eq!(wt.delta, 0.0);
        assert_eq!(wt.time_scale, 1.0);
        assert_eq!(wt.frame_count, 0);
    }

    #[test]
    fn test_with_time_scale() {
        let wt = WorldTime::default().with_time_scale(0.5);
        assert_eq!(wt.time_scale, 0.5);
    }
}
