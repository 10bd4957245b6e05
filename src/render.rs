/// Drawing the world
///
/// The renderer only reads the world; it never changes simulation state.
/// Everything is drawn back to front in a fixed order:
///
/// 1. Background
/// 2. Pipes (top segment flipped upside down)
/// 3. HUD text
/// 4. Ground tiles
/// 5. Bird, rotated by its tilt
use crate::assets::GameTextures;
use crate::game::World;
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub const WIN_WIDTH: u32 = 500;
pub const WIN_HEIGHT: u32 = 900;

const HUD_COLOR: Color = Color::RGB(255, 255, 255);
const HUD_Y: i32 = 11;
const SCORE_SCALE: u32 = 3;
const SCORE_RIGHT_MARGIN: i32 = 12;
const HINT_SCALE: u32 = 2;
const HINT_RIGHT_MARGIN: i32 = 283;
const QUIT_HINT: &str = "Press Q to Quit";

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// x position that right-aligns `text` `margin` pixels from the window edge.
pub fn right_aligned_x(text: &str, scale: u32, margin: i32) -> i32 {
    WIN_WIDTH as i32 - margin - text_width(text, scale) as i32
}

/// SDL rotates clockwise, tilt is counter-clockwise (positive = nose up).
pub fn rotation_angle(tilt: i32) -> f64 {
    -(tilt as f64)
}

pub struct Renderer<'t> {
    textures: &'t GameTextures<'t>,
}

impl<'t> Renderer<'t> {
    pub fn new(textures: &'t GameTextures<'t>) -> Self {
        Renderer { textures }
    }

    /// On-screen rectangle for `texture` with its top-left corner at (x, y).
    fn dest(&self, texture: &Texture, x: i32, y: i32) -> Rect {
        let query = texture.query();
        let scale = self.textures.scale;
        Rect::new(x, y, query.width * scale, query.height * scale)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, world: &World) -> Result<(), String> {
        let textures = self.textures;

        let background = self.dest(&textures.background, 0, 0);
        canvas.copy(&textures.background, None, background)?;

        for pipe in &world.pipes {
            let top = self.dest(&textures.pipe, pipe.x, pipe.top_edge);
            canvas.copy_ex(&textures.pipe, None, top, 0.0, None, false, true)?;

            let bottom = self.dest(&textures.pipe, pipe.x, pipe.bottom_edge);
            canvas.copy(&textures.pipe, None, bottom)?;
        }

        self.render_hud(canvas, world.score)?;

        for x in world.base.tile_positions() {
            let tile = self.dest(&textures.base, x, world.base.y);
            canvas.copy(&textures.base, None, tile)?;
        }

        let bird = &world.bird;
        let frame = bird.frame().min(textures.bird.len().saturating_sub(1));
        if let Some(texture) = textures.bird.get(frame) {
            // Rotating about the destination's centre keeps the bird in place
            let dest = self.dest(texture, bird.x, bird.pixel_y());
            canvas.copy_ex(
                texture,
                None,
                dest,
                rotation_angle(bird.tilt),
                None,
                false,
                false,
            )?;
        }

        Ok(())
    }

    fn render_hud(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        let score = score_text(score);
        draw_simple_text(
            canvas,
            &score,
            right_aligned_x(&score, SCORE_SCALE, SCORE_RIGHT_MARGIN),
            HUD_Y,
            HUD_COLOR,
            SCORE_SCALE,
        )?;

        draw_simple_text(
            canvas,
            QUIT_HINT,
            right_aligned_x(QUIT_HINT, HINT_SCALE, HINT_RIGHT_MARGIN),
            HUD_Y,
            HUD_COLOR,
            HINT_SCALE,
        )
    }
}
