//! Squash-and-stretch animation system.
//!
//! Advances every [`Squish`] timer by the scaled frame delta and writes a
//! periodic non-uniform scale into the entity's [`Transform`], giving the
//! sprites their breathing deformation.

use std::f32::consts::PI;

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::components::squish::Squish;
use crate::components::transform::Transform;
use crate::resources::worldtime::WorldTime;

/// Advance squish timers and write the waveform into `Transform.scale`.
///
/// Note the crossed pairing: `scale.y` tracks `squish_scale.x` and
/// `scale.x` tracks `squish_scale.y`.
pub fn squish_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut Transform, &mut Squish), With<Sprite>>,
) {
    let dt = time.delta; // delta is already scaled by time_scale
    for (mut transform, mut squish) in query.iter_mut() {
        squish.timer += dt;

        let phase = squish.timer * squish.frequency;
        transform.scale.y = (phase.sin() / 4.5 + 0.5) * squish.squish_scale.x;
        transform.scale.x =
            ((phase + (squish.timer / 2.0).sin()).cos() / 4.5 + 0.5) * squish.squish_scale.y;

        // Wrap on the raw timer, not the phase: high frequencies run
        // through several waveform cycles before a reset.
        if squish.timer > PI * 2.0 {
            squish.timer = 0.0;
        }
    }
}
