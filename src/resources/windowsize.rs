//! Window size resource.
//!
//! Dimensions of the OS window in pixels. The spawn logic keeps its random
//! positions inside these bounds (minus a margin).

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
