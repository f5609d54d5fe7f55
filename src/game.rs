//! Blob spawning.
//!
//! One spawn creates one entity carrying Transform + Sprite + Squish. The
//! randomized placement is separated into [`SpawnParams`] so it can be
//! rolled from an injected generator and checked in tests.

use std::ops::RangeInclusive;

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::sprite::Sprite;
use crate::components::squish::Squish;
use crate::components::transform::Transform;
use crate::resources::texturestore::TextureHandle;

/// Margin kept between a spawn position and the window edges, in pixels.
const SPAWN_MARGIN: i32 = 100;
/// Squish scale is rolled in per-mille: 100..=200 maps to 0.1..=0.2.
const SQUISH_SCALE_PER_MILLE: RangeInclusive<i32> = 100..=200;
/// Angular frequency range of the squish waveform.
const FREQUENCY_RANGE: RangeInclusive<i32> = 5..=15;

/// Randomized parameters for one spawned blob.
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub pos: Vector2,
    pub squish_scale: Vector2,
    pub frequency: f32,
}

impl SpawnParams {
    /// Roll spawn parameters from `rng` for a `width` x `height` window:
    /// a position inside the margins, two independent squish scales and an
    /// integer frequency.
    pub fn random(rng: &mut fastrand::Rng, width: i32, height: i32) -> Self {
        let pos = Vector2 {
            x: rng.i32(SPAWN_MARGIN..=width - SPAWN_MARGIN) as f32,
            y: rng.i32(SPAWN_MARGIN..=height - SPAWN_MARGIN) as f32,
        };
        let squish_scale = Vector2 {
            x: rng.i32(SQUISH_SCALE_PER_MILLE) as f32 / 1000.0,
            y: rng.i32(SQUISH_SCALE_PER_MILLE) as f32 / 1000.0,
        };
        let frequency = rng.i32(FREQUENCY_RANGE) as f32;
        Self {
            pos,
            squish_scale,
            frequency,
        }
    }
}

/// Spawn one animated blob entity.
///
/// The entity starts at `pos` on the z=0 plane with identity rotation and
/// unit scale, an opaque white center-anchored sprite, and a squish timer
/// at zero. `frequency` is taken as-is; see [`Squish`].
pub fn spawn_blob(
    commands: &mut Commands,
    tex: TextureHandle,
    pos: Vector2,
    squish_scale: Vector2,
    frequency: f32,
) -> Entity {
    commands
        .spawn((
            Transform::from_position(pos.x, pos.y),
            Sprite::new(tex),
            Squish::new(squish_scale, frequency),
        ))
        .id()
}
