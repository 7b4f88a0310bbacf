use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use tile_platformer::config::{GameConfig, DEFAULT_CONFIG_PATH};
use tile_platformer::game::{Camera, GameWorld};
use tile_platformer::input::KeyState;
use tile_platformer::input_system::{GameAction, InputSystem};
use tile_platformer::level::Level;
use tile_platformer::render::{render_frame, SpriteSet};

/// Loads the configured level, or the built-in one if none is set or it fails.
fn load_level(config: &GameConfig) -> Level {
    let Some(path) = config.level_path.as_deref() else {
        return Level::default_level(config);
    };

    match Level::load_from_file(path, config) {
        Ok(level) => level,
        Err(e) => {
            log::warn!("{}; using the built-in level", e);
            Level::default_level(config)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting tile platformer v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
    let level = load_level(&config);
    log::info!(
        "Level: {} tiles, {} enemies, goal {}, start ({}, {})",
        level.tiles.len(),
        level.enemy_spawns.len(),
        if level.goal.is_some() { "present" } else { "missing" },
        level.start.x,
        level.start.y
    );

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let image_context = sdl2::image::init(sdl2::image::InitFlag::PNG);
    if let Err(e) = &image_context {
        log::warn!("PNG support unavailable, drawing coloured boxes: {}", e);
    }

    let window = video_subsystem
        .window("Platformer", config.view_width, config.view_height)
        .position_centered()
        .build()
        .context("failed to create window")?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .context("failed to create canvas")?;
    canvas
        .set_logical_size(config.view_width, config.view_height)
        .context("failed to set logical size")?;

    let texture_creator = canvas.texture_creator();
    let sprites = if image_context.is_ok() {
        SpriteSet::load(&texture_creator)
    } else {
        SpriteSet::empty()
    };

    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
    let input_system = InputSystem::new();
    let mut keys = KeyState::new();

    let mut world = GameWorld::new(level, &config);
    let mut camera = Camera::new(config.view_width as f32);
    let mut show_collision_boxes = false;

    let frame_time = Duration::from_secs(1) / config.target_fps.max(1);

    log::info!("Controls: arrows/A/D move, Space/Up jump, R restart, B collision boxes, Esc quit");

    'running: loop {
        let frame_start = Instant::now();

        for action in input_system.poll_events(&mut event_pump, &mut keys) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Restart => {
                    world.respawn();
                    log::info!("Restarted");
                }
                GameAction::ToggleCollisionBoxes => {
                    show_collision_boxes = !show_collision_boxes;
                }
            }
        }

        world.tick(&keys);

        camera.follow(&world.player.body.rect, world.level.width);
        render_frame(&mut canvas, &world, &camera, &sprites, show_collision_boxes)
            .map_err(anyhow::Error::msg)
            .context("failed to render frame")?;
        canvas.present();

        // vsync may be unavailable, so also cap the tick rate here
        if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Exiting after {} ticks", world.ticks());
    Ok(())
}
