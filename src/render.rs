/// SDL2 rendering of the game world
///
/// The simulation only exposes `Drawable`s (a rectangle plus a `ColorTag`). This
/// module owns everything pixel related: the colour of each tag, the optional
/// sprite for each tag, the camera offset and the win overlay.
///
/// # Sprites
///
/// If `assets/sprites/<tag>.png` exists it is stretched over the rectangle,
/// otherwise the rectangle is filled with the tag's colour. Missing sprites are
/// normal; the game is fully playable with coloured boxes.
use crate::collision::Rect;
use crate::game::{Camera, ColorTag, GameWorld};
use crate::text::draw_centered_text;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

pub const SKY_COLOR: Color = Color::RGB(92, 148, 252);
const DEBUG_BOX_COLOR: Color = Color::RGB(0, 255, 0);
const WIN_MESSAGE: &str = "YOU WIN!";
const WIN_TEXT_SCALE: u32 = 6;

pub const ALL_TAGS: [ColorTag; 5] = [
    ColorTag::Ground,
    ColorTag::Platform,
    ColorTag::Goal,
    ColorTag::Enemy,
    ColorTag::Player,
];

pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Ground => Color::RGB(0x65, 0x43, 0x21),
        ColorTag::Platform => Color::RGB(0x8b, 0x5a, 0x2b),
        ColorTag::Goal => Color::RGB(0xff, 0xff, 0x00),
        ColorTag::Enemy => Color::RGB(0xff, 0x00, 0x00),
        ColorTag::Player => Color::RGB(0x00, 0x00, 0xff),
    }
}

fn sprite_path(tag: ColorTag) -> String {
    let name = match tag {
        ColorTag::Ground => "ground",
        ColorTag::Platform => "platform",
        ColorTag::Goal => "flag",
        ColorTag::Enemy => "enemy",
        ColorTag::Player => "player",
    };
    format!("assets/sprites/{}.png", name)
}

/// Converts a world rectangle in view space to an SDL rectangle.
pub fn to_sdl_rect(rect: &Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(
        rect.x.floor() as i32,
        rect.y.floor() as i32,
        rect.width.max(0.0) as u32,
        rect.height.max(0.0) as u32,
    )
}

/// Sprites found on disk, keyed by tag
pub struct SpriteSet<'a> {
    textures: HashMap<ColorTag, Texture<'a>>,
}

impl<'a> SpriteSet<'a> {
    pub fn empty() -> Self {
        SpriteSet {
            textures: HashMap::new(),
        }
    }

    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        let mut textures = HashMap::new();

        for tag in ALL_TAGS {
            let path = sprite_path(tag);
            match texture_creator.load_texture(&path) {
                Ok(texture) => {
                    textures.insert(tag, texture);
                }
                Err(e) => log::debug!("No sprite for {:?} ({}): {}", tag, path, e),
            }
        }

        log::info!("Loaded {} of {} sprites", textures.len(), ALL_TAGS.len());
        SpriteSet { textures }
    }

    pub fn get(&self, tag: ColorTag) -> Option<&Texture<'a>> {
        self.textures.get(&tag)
    }
}

/// Draws one frame. Does not present.
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    camera: &Camera,
    sprites: &SpriteSet,
    show_collision_boxes: bool,
) -> Result<(), String> {
    canvas.set_draw_color(SKY_COLOR);
    canvas.clear();

    for drawable in world.drawables() {
        if !camera.is_visible(&drawable.rect) {
            continue;
        }
        let dest = to_sdl_rect(&camera.to_view(&drawable.rect));

        match sprites.get(drawable.tag) {
            Some(texture) => canvas.copy(texture, None, Some(dest))?,
            None => {
                canvas.set_draw_color(tag_color(drawable.tag));
                canvas.fill_rect(dest)?;
            }
        }
    }

    if show_collision_boxes {
        render_collision_boxes(canvas, world, camera)?;
    }

    if world.has_won() {
        let (width, height) = canvas.logical_size();
        let (width, height) = if width == 0 {
            canvas.output_size()?
        } else {
            (width, height)
        };
        draw_centered_text(
            canvas,
            WIN_MESSAGE,
            width as i32 / 2,
            height as i32 / 2,
            Color::RGB(255, 255, 255),
            WIN_TEXT_SCALE,
        )?;
    }

    Ok(())
}

/// Outlines the start cell, the player, the tiles it overlaps and enemy probes.
fn render_collision_boxes(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    camera: &Camera,
) -> Result<(), String> {
    canvas.set_draw_color(DEBUG_BOX_COLOR);
    canvas.draw_rect(to_sdl_rect(&camera.to_view(&world.level.start_rect())))?;

    let player_bounds = world.player.body.rect;
    canvas.draw_rect(to_sdl_rect(&camera.to_view(&player_bounds)))?;

    for tile in world.level.colliders_overlapping(&player_bounds) {
        canvas.draw_rect(to_sdl_rect(&camera.to_view(&tile.rect)))?;
    }

    for enemy in &world.enemies {
        canvas.draw_rect(to_sdl_rect(&camera.to_view(&enemy.probe_ahead())))?;
    }

    Ok(())
}
