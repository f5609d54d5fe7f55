//! Spawn request event and observer.
//!
//! The input dispatcher triggers one [`SpawnBlobEvent`] per newly-pressed
//! alphabetic key; the observer rolls the randomized placement from the
//! injected [`SpawnRng`] and spawns the entity.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::game::{SpawnParams, spawn_blob};
use crate::resources::demoassets::DemoAssets;
use crate::resources::spawnrng::SpawnRng;
use crate::resources::windowsize::WindowSize;

/// Request to spawn one blob at a randomized position.
#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnBlobEvent {
    /// The key that was pressed. Only logged; every key spawns the same way.
    pub key: KeyboardKey,
}

/// Observer that spawns one blob per [`SpawnBlobEvent`].
pub fn spawn_blob_observer(
    trigger: On<SpawnBlobEvent>,
    assets: Res<DemoAssets>,
    window: Res<WindowSize>,
    mut rng: ResMut<SpawnRng>,
    mut commands: Commands,
) {
    let params = SpawnParams::random(&mut rng.0, window.w, window.h);
    log::debug!(
        "{:?} pressed: blob at ({:.0}, {:.0}), squish ({:.3}, {:.3}), frequency {}",
        trigger.event().key,
        params.pos.x,
        params.pos.y,
        params.squish_scale.x,
        params.squish_scale.y,
        params.frequency
    );
    spawn_blob(
        &mut commands,
        assets.blob.clone(),
        params.pos,
        params.squish_scale,
        params.frequency,
    );
}
