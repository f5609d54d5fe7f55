//! Render system.
//!
//! Draws every entity with Transform + Sprite using Raylib. This is the
//! only system that touches the drawing handle; the scoped
//! `RaylibDrawHandle` begins the frame on creation and presents it when
//! dropped at the end of the pass.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;

/// Clear the background and draw all sprites, then the debug overlay.
///
/// For each sprite the destination rectangle keeps the anchor point fixed
/// while the sprite scales: the top-left is displaced by
/// `anchor * (1 - scale)` and the size is `native_size * scale`. Rotation
/// is the Euler roll of the transform's quaternion, in degrees. Read-only
/// over entity state.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    query: Query<(&Transform, &Sprite)>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(Color::BLACK);

    for (transform, sprite) in query.iter() {
        let Some(tex) = textures.get(sprite.tex.key()) else {
            // Handle without a store entry; nothing to draw.
            continue;
        };

        let size = Vector2 {
            x: tex.width as f32,
            y: tex.height as f32,
        };
        let anchor = sprite.anchor.to_vec(size);

        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: size.x,
            height: size.y,
        };
        let dest = Rectangle {
            x: transform.translation.x + anchor.x * (1.0 - transform.scale.x),
            y: transform.translation.y + anchor.y * (1.0 - transform.scale.y),
            width: size.x * transform.scale.x,
            height: size.y * transform.scale.y,
        };
        let roll = transform.rotation.to_euler().x.to_degrees();

        d.draw_texture_pro(tex, src, dest, anchor, roll, sprite.tint);
    }

    if debug_mode.is_some() {
        let fps = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps), 10, 10, 10, Color::GREEN);
        let blobs = query.iter().count();
        d.draw_text(&format!("Blobs: {}", blobs), 10, 30, 10, Color::GREEN);
    }
}
