//! Texture ownership and shared texture handles.
//!
//! The [`TextureStore`] resource owns every decoded [`Texture2D`], keyed by
//! a string id. Sprites never hold the texture itself (components must be
//! `Send + Sync`, and the GPU texture is bound to the main thread's GL
//! context); they hold a [`TextureHandle`] instead: a cheap, clonable,
//! reference-counted descriptor carrying the key and the native pixel size.
//!
//! The store keeps one master handle per entry. When every outside handle
//! has been dropped, [`TextureStore::release_unused`] removes the entry,
//! which drops the `Texture2D` and unloads it from the GPU exactly once.

use bevy_ecs::prelude::{ResMut, Resource};
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug)]
struct TextureInfo {
    key: String,
    width: f32,
    height: f32,
}

/// Shared handle to a texture owned by the [`TextureStore`].
///
/// Cloning bumps the reference count; the texture stays loaded for as long
/// as any handle outside the store is alive. The handle carries the native
/// pixel dimensions so anchor and scale math never needs the store.
#[derive(Clone, Debug)]
pub struct TextureHandle(Arc<TextureInfo>);

impl TextureHandle {
    /// Handle not backed by any store entry.
    ///
    /// Sprites using it are skipped by the render pass; the simulation
    /// systems and tests don't need a window or a GPU texture.
    pub fn untracked(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self(Arc::new(TextureInfo {
            key: key.into(),
            width,
            height,
        }))
    }

    /// Store key this handle refers to.
    pub fn key(&self) -> &str {
        &self.0.key
    }

    /// Native texture size in pixels.
    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.0.width,
            y: self.0.height,
        }
    }

    /// Number of live handles to this texture, the store's own included.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

struct StoreEntry {
    texture: Texture2D,
    master: TextureHandle,
}

/// Loaded textures keyed by string id. See the module docs for the
/// ownership model.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, StoreEntry>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Load a texture from `path` and register it under `key`, replacing
    /// any previous entry with that key.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<TextureHandle, String> {
        let key = key.into();
        let texture = rl.load_texture(thread, path)?;
        log::info!(
            "Loaded texture '{}' from {} ({}x{})",
            key,
            path,
            texture.width,
            texture.height
        );
        let master = TextureHandle(Arc::new(TextureInfo {
            key: key.clone(),
            width: texture.width as f32,
            height: texture.height as f32,
        }));
        let handle = master.clone();
        self.map.insert(key, StoreEntry { texture, master });
        Ok(handle)
    }

    /// Live texture for `key`, if the store has one.
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key).map(|entry| &entry.texture)
    }

    /// Drop every entry whose only remaining handle is the store's own.
    /// Dropping the entry unloads the texture from the GPU.
    pub fn release_unused(&mut self) {
        self.map.retain(|key, entry| {
            let in_use = entry.master.ref_count() > 1;
            if !in_use {
                log::debug!("Unloading texture '{}'", key);
            }
            in_use
        });
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Schedule-friendly wrapper around [`TextureStore::release_unused`].
pub fn release_unused_textures(mut textures: ResMut<TextureStore>) {
    textures.release_unused();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_carries_key_and_size() {
        let handle = TextureHandle::untracked("blob", 64.0, 32.0);
        assert_eq!(handle.key(), "blob");
        assert_eq!(handle.size().x, 64.0);
        assert_eq!(handle.size().y, 32.0);
    }

    #[test]
    fn test_clone_bumps_ref_count_and_drop_lowers_it() {
        let master = TextureHandle::untracked("blob", 64.0, 64.0);
        assert_eq!(master.ref_count(), 1);
        let outside = master.clone();
        assert_eq!(master.ref_count(), 2);
        drop(outside);
        assert_eq!(master.ref_count(), 1);
    }

    #[test]
    fn test_empty_store_lookup_misses() {
        let store = TextureStore::new();
        assert!(store.is_empty());
        assert!(store.get("blob").is_none());
    }
}
