//! Boom Rig Demo
//!
//! Run with: `cargo run --bin rig_demo [config/rig.example.json]`
//!
//! Headless walk-through of the camera rig: a player anchor walks past a wall
//! while the view swings around, and the lens pose is logged every few frames.
//! Set `RUST_LOG=debug` to see Blocked/Clear transitions, `trace` for every
//! frame.
//!
//! Scene:
//! - Floor slab at y = 0 (tagged Floor, ignored by the probe)
//! - Wall along z in [2, 2.5] for x in [-2, 6]
//! - Pillar near the path (tagged Prop)

use std::collections::HashMap;
use std::process::ExitCode;

use boom_rig_engine::camera::{AnchorId, CameraRig, Transform};
use boom_rig_engine::config::RigConfig;
use boom_rig_engine::input::{CursorControl, LookAxes, capture_cursor};
use boom_rig_engine::physics::{Aabb, Collider, ColliderScene, SurfaceTag};
use boom_rig_engine::RigError;
use glam::Vec3;

// ============================================================================
// CONSTANTS
// ============================================================================

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 360;
const LOG_EVERY: u32 = 30;
const PLAYER: AnchorId = AnchorId(0);
/// Player walking speed along +X (m/s)
const WALK_SPEED: f32 = 2.0;

// ============================================================================
// HEADLESS CURSOR
// ============================================================================

/// Stand-in for a window cursor; just reports what it was asked to do.
struct HeadlessCursor;

impl CursorControl for HeadlessCursor {
    fn set_locked(&mut self, locked: bool) {
        log::info!("cursor locked: {locked}");
    }

    fn set_visible(&mut self, visible: bool) {
        log::info!("cursor visible: {visible}");
    }
}

// ============================================================================
// SCENE
// ============================================================================

fn build_scene() -> ColliderScene {
    let mut scene = ColliderScene::new();
    scene.add_box(
        Vec3::new(-50.0, -1.0, -50.0),
        Vec3::new(50.0, 0.0, 50.0),
        SurfaceTag::Floor,
    );
    scene.add_box(
        Vec3::new(-2.0, 0.0, 2.0),
        Vec3::new(6.0, 3.0, 2.5),
        SurfaceTag::Wall,
    );
    scene.insert(Collider::new(
        Aabb::from_center_half_extents(
            Vec3::new(8.3, 2.0, 1.1),
            Vec3::new(0.3, 2.0, 0.3),
        ),
        SurfaceTag::Prop,
    ));
    scene
}

/// Scripted look input: swing right, then left, with a small pitch wobble.
fn scripted_look(frame: u32) -> (f32, f32) {
    let t = frame as f32 * FRAME_DT;
    let horizontal = if frame < FRAMES / 2 { 0.4 } else { -0.6 };
    let vertical = (t * 2.0).sin() * 0.2;
    (horizontal, vertical)
}

// ============================================================================
// MAIN
// ============================================================================

fn run(config: RigConfig) -> Result<(), RigError> {
    let world = build_scene();
    log::info!(
        "scene: {} colliders, {} floor",
        world.len(),
        world.iter().filter(|c| c.tag.is_floor()).count()
    );
    let start = Vec3::new(-4.0, 1.5, 0.0);
    let mut anchors = HashMap::from([(PLAYER, start)]);

    let mut rig = CameraRig::new(config, PLAYER, Transform::from_position(start))?;
    let mut axes = LookAxes::new();
    capture_cursor(&mut HeadlessCursor);

    for frame in 0..FRAMES {
        if let Some(player) = anchors.get_mut(&PLAYER) {
            player.x += WALK_SPEED * FRAME_DT;
        }

        let (dx, dy) = scripted_look(frame);
        axes.accumulate_pointer(dx, dy);

        let pose = rig.update(axes.sample(), FRAME_DT, &world, &anchors)?;

        if frame % LOG_EVERY == 0 {
            let boom = rig.boom();
            log::info!(
                "frame {frame:3}: lens {:.3} boom {:.3} -> {:.3} ({:?}) yaw {:7.2} pitch {:6.2}",
                pose.position,
                boom.current_distance(),
                boom.target_distance(),
                boom.status(),
                rig.orientation().yaw(),
                rig.orientation().pitch(),
            );
        }
    }

    log::info!("final pivot position {}", rig.pivot().position);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RigConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => RigConfig::default(),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("rig demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
