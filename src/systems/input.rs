//! Input dispatcher.
//!
//! Polls Raylib once per frame for edge-triggered key presses. Every
//! alphabetic key spawns one blob (via [`SpawnBlobEvent`]); F11 toggles the
//! debug overlay. Raylib refreshes its keyboard state when the frame is
//! presented, so this system runs after the render pass.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::spawn::SpawnBlobEvent;
use crate::events::switchdebug::SwitchDebugEvent;

/// Keys that spawn a blob when newly pressed: the alphabet, A through Z.
const SPAWN_KEYS: [KeyboardKey; 26] = [
    KeyboardKey::KEY_A,
    KeyboardKey::KEY_B,
    KeyboardKey::KEY_C,
    KeyboardKey::KEY_D,
    KeyboardKey::KEY_E,
    KeyboardKey::KEY_F,
    KeyboardKey::KEY_G,
    KeyboardKey::KEY_H,
    KeyboardKey::KEY_I,
    KeyboardKey::KEY_J,
    KeyboardKey::KEY_K,
    KeyboardKey::KEY_L,
    KeyboardKey::KEY_M,
    KeyboardKey::KEY_N,
    KeyboardKey::KEY_O,
    KeyboardKey::KEY_P,
    KeyboardKey::KEY_Q,
    KeyboardKey::KEY_R,
    KeyboardKey::KEY_S,
    KeyboardKey::KEY_T,
    KeyboardKey::KEY_U,
    KeyboardKey::KEY_V,
    KeyboardKey::KEY_W,
    KeyboardKey::KEY_X,
    KeyboardKey::KEY_Y,
    KeyboardKey::KEY_Z,
];

/// Poll key-press edges and trigger the matching events.
pub fn keyboard_dispatch(rl: NonSend<RaylibHandle>, mut commands: Commands) {
    for key in SPAWN_KEYS {
        if rl.is_key_pressed(key) {
            commands.trigger(SpawnBlobEvent { key });
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }
}
