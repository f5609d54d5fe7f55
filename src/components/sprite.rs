//! 2D sprite component and its anchor descriptor.
//!
//! A [`Sprite`] pairs a shared [`TextureHandle`] with an RGBA tint and an
//! [`Anchor`]. The anchor selects the pivot point (in texture pixels,
//! relative to the top-left corner) used for placement and rotation when
//! rendering; the tint's alpha channel drives visibility and is decayed
//! every frame by the fade system.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::resources::texturestore::TextureHandle;

/// Pivot point of a sprite, relative to its own bounding box.
///
/// The nine named variants map to the corners, edge midpoints and center of
/// the texture; `Custom` carries an explicit offset in texture-pixel space
/// and ignores the texture dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Custom(Vector2),
}

impl Anchor {
    /// Resolve the anchor into a pixel offset for a texture of the given
    /// raw (unscaled) dimensions.
    pub fn to_vec(&self, dimensions: Vector2) -> Vector2 {
        match *self {
            Anchor::TopLeft => Vector2 { x: 0.0, y: 0.0 },
            Anchor::TopCenter => Vector2 {
                x: dimensions.x / 2.0,
                y: 0.0,
            },
            Anchor::TopRight => Vector2 {
                x: dimensions.x,
                y: 0.0,
            },
            Anchor::CenterLeft => Vector2 {
                x: 0.0,
                y: dimensions.y / 2.0,
            },
            Anchor::Center => Vector2 {
                x: dimensions.x / 2.0,
                y: dimensions.y / 2.0,
            },
            Anchor::CenterRight => Vector2 {
                x: dimensions.x,
                y: dimensions.y / 2.0,
            },
            Anchor::BottomLeft => Vector2 {
                x: 0.0,
                y: dimensions.y,
            },
            Anchor::BottomCenter => Vector2 {
                x: dimensions.x / 2.0,
                y: dimensions.y,
            },
            Anchor::BottomRight => Vector2 {
                x: dimensions.x,
                y: dimensions.y,
            },
            Anchor::Custom(offset) => offset,
        }
    }
}

/// Renderable sprite: shared texture, RGBA tint and pivot.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex: TextureHandle,
    pub tint: Color,
    pub anchor: Anchor,
}

impl Sprite {
    /// Sprite with an opaque white tint, anchored at its center.
    pub fn new(tex: TextureHandle) -> Self {
        Self {
            tex,
            tint: Color::WHITE,
            anchor: Anchor::Center,
        }
    }
}
