//! Fade-out system.
//!
//! Every sprite's tint alpha decays toward zero by a fixed per-frame
//! factor; entities whose alpha has reached the despawn threshold are
//! removed. Removal goes through [`Commands`], so it is deferred and
//! applied at the schedule's next sync point, before the render pass runs.

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;

/// Per-frame lerp factor toward zero alpha. Not time-scaled.
const FADE_FACTOR: f32 = 0.025;

/// Alpha below which the entity is despawned. Compared against the tint's
/// 0–255 alpha channel, so it only fires once truncation has driven the
/// alpha all the way to 0.
const DESPAWN_THRESHOLD: f32 = 0.005;

/// Decay sprite alpha and despawn entities that have faded out.
pub fn fade_system(mut query: Query<(Entity, &mut Sprite)>, mut commands: Commands) {
    for (entity, mut sprite) in query.iter_mut() {
        let alpha = sprite.tint.a as f32;
        if alpha < DESPAWN_THRESHOLD {
            commands.entity(entity).try_despawn();
        } else {
            sprite.tint.a = (alpha + (0.0 - alpha) * FADE_FACTOR) as u8;
        }
    }
}
