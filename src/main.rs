//! Squishy main entry point.
//!
//! A small real-time demo built on:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Press any letter key to spawn a blob at a random position. Every blob
//! breathes with a squash-and-stretch animation and fades out until it is
//! despawned. F11 toggles a debug overlay.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world and resources
//! 2. Load the blob texture into the store, pinned by a top-level handle
//! 3. Register the spawn and debug observers
//! 4. Run the frame loop: advance time, squish, fade (despawn), render,
//!    poll input, release unused textures
//! 5. Exit when the window is closed
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::events::spawn::spawn_blob_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::demoassets::DemoAssets;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spawnrng::SpawnRng;
use crate::resources::texturestore::{TextureStore, release_unused_textures};
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::fade::fade_system;
use crate::systems::input::keyboard_dispatch;
use crate::systems::render::render_system;
use crate::systems::squish::squish_system;
use crate::systems::time::update_world_time;

/// Squishy blob demo
#[derive(Parser)]
#[command(version, about = "Press any letter to spawn a squishy blob")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        // Missing file is the common case; defaults win.
        log::debug!("Using default config: {}", e);
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("squishy");
    if config.msaa {
        builder.msaa_4x();
    }
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    let blob = textures
        .load(
            &mut rl,
            &thread,
            "blob",
            &config.sprite_path.display().to_string(),
        )
        .expect("Failed to load the blob texture");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WindowSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(textures);
    // The top-level handle keeps the texture alive for the whole run,
    // however many blobs come and go.
    world.insert_resource(DemoAssets { blob });
    world.insert_resource(SpawnRng::from_entropy());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(spawn_blob_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers them.
    world.flush();

    // Fixed per-frame order: squish → fade → render → input. The sync
    // point between fade and render applies the deferred despawns, so a
    // faded-out blob is never drawn.
    let mut update = Schedule::default();
    update.add_systems(squish_system);
    update.add_systems(fade_system.after(squish_system));
    update.add_systems(render_system.after(fade_system));
    update.add_systems(keyboard_dispatch.after(render_system));
    update.add_systems(release_unused_textures.after(render_system));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Press A-Z to spawn blobs, F11 for the debug overlay");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    log::info!("Window closed, shutting down");
}
