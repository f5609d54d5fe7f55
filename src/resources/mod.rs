//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `demoassets` – top-level texture handles pinned for the whole run
//! - `gameconfig` – window and asset settings loaded from config.ini
//! - `spawnrng` – injected random generator for spawn parameters
//! - `texturestore` – loaded textures keyed by string ids, plus handles
//! - `windowsize` – window dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod debugmode;
pub mod demoassets;
pub mod gameconfig;
pub mod spawnrng;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
