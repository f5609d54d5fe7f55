use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Periodic squash-and-stretch animation state.
///
/// `timer` accumulates scaled frame time and wraps back to zero once it
/// passes 2π (the wrap is on the raw timer, not on `timer * frequency`, so
/// higher frequencies run through several waveform cycles per wrap).
#[derive(Component, Clone, Copy, Debug)]
pub struct Squish {
    /// Target scale pair the waveform is modulated by.
    pub squish_scale: Vector2,
    /// Phase timer in seconds, in [0, 2π].
    pub timer: f32,
    /// Angular frequency of the waveform. Not validated; zero or negative
    /// values give a degenerate or inverted animation.
    pub frequency: f32,
}

impl Squish {
    pub fn new(squish_scale: Vector2, frequency: f32) -> Self {
        Self {
            squish_scale,
            timer: 0.0,
            frequency,
        }
    }
}
