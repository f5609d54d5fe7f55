//! Top-level handles for the demo's assets.
//!
//! Holding the handles in a resource pins the textures for the lifetime of
//! the run, whatever entities come and go; the store only unloads a texture
//! once no handle outside it remains.

use bevy_ecs::prelude::Resource;

use crate::resources::texturestore::TextureHandle;

/// Handles to the textures loaded at startup.
#[derive(Resource)]
pub struct DemoAssets {
    /// The one sprite sheet of this demo: the blob.
    pub blob: TextureHandle,
}
