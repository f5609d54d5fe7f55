//! Event types and observers.
//!
//! Events provide a decoupled way for the input dispatcher to talk to the
//! rest of the demo: it only triggers events, and observers do the work.
//!
//! Submodules:
//! - [`spawn`] – request to spawn one blob at a randomized position
//! - [`switchdebug`] – toggle the debug overlay on/off

pub mod spawn;
pub mod switchdebug;
