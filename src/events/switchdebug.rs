//! Event and observer to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the
//! [`DebugMode`] resource; the render pass gates its overlay on it.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::debugmode::DebugMode;

/// Event used to toggle the [`DebugMode`] resource on/off.
///
/// Carries no data; the observer simply switches the presence of the
/// resource.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        log::info!("Debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode {});
        log::info!("Debug overlay enabled");
    }
}
