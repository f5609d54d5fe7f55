//! Debug toggle resource.
//!
//! Presence of this resource enables the debug overlay (FPS and entity
//! count); removing it disables the overlay. Toggled at runtime with F11.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
