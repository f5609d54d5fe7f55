//! Frame-tick integration tests for the squish, fade, and spawn behavior.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, Vector2};

use squishy::components::sprite::Sprite;
use squishy::components::squish::Squish;
use squishy::components::transform::Transform;
use squishy::events::spawn::{SpawnBlobEvent, spawn_blob_observer};
use squishy::game::spawn_blob;
use squishy::resources::demoassets::DemoAssets;
use squishy::resources::spawnrng::SpawnRng;
use squishy::resources::texturestore::TextureHandle;
use squishy::resources::windowsize::WindowSize;
use squishy::resources::worldtime::WorldTime;
use squishy::systems::fade::fade_system;
use squishy::systems::squish::squish_system;
use squishy::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world
}

fn test_handle() -> TextureHandle {
    TextureHandle::untracked("blob", 64.0, 64.0)
}

/// Spawn through the real spawn function, then apply the commands.
fn spawn_test_blob(
    world: &mut World,
    pos: Vector2,
    squish_scale: Vector2,
    frequency: f32,
) -> Entity {
    let entity = {
        let mut commands = world.commands();
        spawn_blob(&mut commands, test_handle(), pos, squish_scale, frequency)
    };
    world.flush();
    entity
}

fn tick_squish(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(squish_system);
    schedule.run(world);
}

fn tick_fade(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(fade_system);
    schedule.run(world);
}

fn sprite_count(world: &mut World) -> usize {
    let mut query = world.query::<&Sprite>();
    query.iter(world).count()
}

#[test]
fn squish_matches_waveform_after_one_frame() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 100.0, y: 100.0 },
        Vector2 { x: 0.15, y: 0.15 },
        10.0,
    );

    update_world_time(&mut world, 0.016);
    tick_squish(&mut world);

    let transform = world.get::<Transform>(entity).unwrap();
    let expected_y = ((0.016f32 * 10.0).sin() / 4.5 + 0.5) * 0.15;
    let expected_x = ((0.016f32 * 10.0 + (0.016f32 / 2.0).sin()).cos() / 4.5 + 0.5) * 0.15;
    assert!(approx_eq(transform.scale.y, expected_y));
    assert!(approx_eq(transform.scale.x, expected_x));
    // z is untouched by the 2D animation.
    assert!(approx_eq(transform.scale.z, 1.0));
}

#[test]
fn squish_crosses_scale_targets() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 0.1, y: 0.2 },
        10.0,
    );

    update_world_time(&mut world, 0.016);
    tick_squish(&mut world);

    let transform = world.get::<Transform>(entity).unwrap();
    // scale.y is modulated by squish_scale.x and scale.x by squish_scale.y.
    let expected_y = ((0.016f32 * 10.0).sin() / 4.5 + 0.5) * 0.1;
    let expected_x = ((0.016f32 * 10.0 + (0.016f32 / 2.0).sin()).cos() / 4.5 + 0.5) * 0.2;
    assert!(approx_eq(transform.scale.y, expected_y));
    assert!(approx_eq(transform.scale.x, expected_x));
}

#[test]
fn squish_timer_wraps_to_exactly_zero() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 0.15, y: 0.15 },
        10.0,
    );
    world.get_mut::<Squish>(entity).unwrap().timer = 6.28;

    update_world_time(&mut world, 0.016);
    tick_squish(&mut world);

    let squish = world.get::<Squish>(entity).unwrap();
    assert_eq!(squish.timer, 0.0);
}

#[test]
fn squish_timer_stays_in_range() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 0.15, y: 0.15 },
        12.0,
    );

    for _ in 0..2000 {
        update_world_time(&mut world, 0.016);
        tick_squish(&mut world);
        let timer = world.get::<Squish>(entity).unwrap().timer;
        assert!((0.0..=std::f32::consts::TAU).contains(&timer));
    }
}

#[test]
fn fade_decays_alpha_with_truncation() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 0.15, y: 0.15 },
        10.0,
    );

    tick_fade(&mut world);
    // 255 + (0 - 255) * 0.025 = 248.625, truncated to 248.
    assert_eq!(world.get::<Sprite>(entity).unwrap().tint.a, 248);

    // Follow the decay all the way down: every step matches the truncated
    // lerp and never increases, and despawn happens only after zero.
    let mut previous = 248u8;
    let mut despawned = false;
    for _ in 0..400 {
        tick_fade(&mut world);
        if world.get_entity(entity).is_err() {
            assert_eq!(previous, 0);
            despawned = true;
            break;
        }
        let alpha = world.get::<Sprite>(entity).unwrap().tint.a;
        let expected = (previous as f32 + (0.0 - previous as f32) * 0.025) as u8;
        assert_eq!(alpha, expected);
        assert!(alpha <= previous);
        previous = alpha;
    }
    assert!(despawned);
}

#[test]
fn fade_despawns_only_below_threshold() {
    let mut world = make_world();
    let entity = spawn_test_blob(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 0.15, y: 0.15 },
        10.0,
    );

    // Alpha 1 is above the threshold: the entity survives the pass and
    // truncation drives its alpha to zero.
    world.get_mut::<Sprite>(entity).unwrap().tint.a = 1;
    tick_fade(&mut world);
    assert!(world.get_entity(entity).is_ok());
    assert_eq!(world.get::<Sprite>(entity).unwrap().tint.a, 0);

    // At zero the next pass despawns it.
    tick_fade(&mut world);
    assert!(world.get_entity(entity).is_err());
    assert_eq!(sprite_count(&mut world), 0);
}

#[test]
fn thousand_frames_drain_the_world() {
    let mut world = make_world();
    for i in 0..3 {
        spawn_test_blob(
            &mut world,
            Vector2 {
                x: 100.0 * i as f32,
                y: 100.0,
            },
            Vector2 { x: 0.15, y: 0.15 },
            10.0,
        );
    }
    assert_eq!(sprite_count(&mut world), 3);

    let mut schedule = Schedule::default();
    schedule.add_systems(squish_system);
    schedule.add_systems(fade_system.after(squish_system));

    for _ in 0..1000 {
        update_world_time(&mut world, 0.016);
        schedule.run(&mut world);
    }

    assert_eq!(sprite_count(&mut world), 0);
}

#[test]
fn spawn_event_creates_one_blob_inside_margins() {
    let mut world = make_world();
    world.insert_resource(WindowSize { w: 1280, h: 720 });
    world.insert_resource(SpawnRng::with_seed(42));
    world.insert_resource(DemoAssets {
        blob: test_handle(),
    });
    world.spawn(Observer::new(spawn_blob_observer));
    world.flush();

    world.trigger(SpawnBlobEvent {
        key: KeyboardKey::KEY_A,
    });
    world.flush();

    assert_eq!(sprite_count(&mut world), 1);

    let mut query = world.query::<(&Transform, &Sprite, &Squish)>();
    let blobs: Vec<_> = query.iter(&world).collect();
    let (transform, sprite, squish) = blobs[0];
    assert!(transform.translation.x >= 100.0 && transform.translation.x <= 1180.0);
    assert!(transform.translation.y >= 100.0 && transform.translation.y <= 620.0);
    assert_eq!(transform.translation.z, 0.0);
    assert_eq!(sprite.tint.a, 255);
    assert_eq!(squish.timer, 0.0);
    assert!(squish.frequency >= 5.0 && squish.frequency <= 15.0);
}

#[test]
fn spawn_keeps_texture_handle_shared() {
    let mut world = make_world();
    let pinned = test_handle();
    assert_eq!(pinned.ref_count(), 1);

    let entity = {
        let mut commands = world.commands();
        spawn_blob(
            &mut commands,
            pinned.clone(),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 0.15, y: 0.15 },
            10.0,
        )
    };
    world.flush();
    assert_eq!(pinned.ref_count(), 2);

    world.despawn(entity);
    assert_eq!(pinned.ref_count(), 1);
}
