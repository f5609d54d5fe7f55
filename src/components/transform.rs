use bevy_ecs::prelude::Component;
use raylib::prelude::{Quaternion, Vector3};

/// Full 3D transform for an entity: translation, rotation and scale.
///
/// The demo renders in 2D, so only `translation.x/y` and `scale.x/y` are
/// read while drawing; `z` stays at its spawn value. Rotation is kept as a
/// quaternion and reduced to its Euler roll when rendering.
#[derive(Component, Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
    pub scale: Vector3,
}

impl Transform {
    /// Transform placed at `(x, y)` on the z=0 plane, unrotated and unscaled.
    pub fn from_position(x: f32, y: f32) -> Self {
        Self {
            translation: Vector3 { x, y, z: 0.0 },
            rotation: Quaternion::identity(),
            scale: Vector3 {
                x: 1.0,
                y: 1.0,
                z: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_is_flat_and_unscaled() {
        let t = Transform::from_position(10.0, 20.0);
        assert_eq!(t.translation.x, 10.0);
        assert_eq!(t.translation.y, 20.0);
        assert_eq!(t.translation.z, 0.0);
        assert_eq!(t.scale.x, 1.0);
        assert_eq!(t.scale.y, 1.0);
        assert_eq!(t.scale.z, 1.0);
    }

    #[test]
    fn test_from_position_rotation_is_identity() {
        let t = Transform::from_position(0.0, 0.0);
        let q = t.rotation;
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.w, 1.0);
    }
}
