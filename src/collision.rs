/// Pixel-exact collision detection for Jumpy Bird
///
/// Collision is decided by opacity masks, never by bounding boxes: the bird's
/// wings and the pipe rims are irregular, and a box test would kill the
/// player on near misses.
///
/// # Architecture
///
/// - `SpriteMasks`: the mask for every sprite that takes part in the
///   simulation, built once at start-up
/// - `segment_offsets()`: where each pipe segment sits relative to the bird
/// - `collides()`: the bird-vs-pipe test used by the world every tick
use crate::animation::FRAME_COUNT;
use crate::bird::Bird;
use crate::mask::Mask;
use crate::pipe::Pipe;

/// Opacity masks for every simulated sprite, already at on-screen scale.
///
/// This is the only sprite data the simulation sees. Textures live with the
/// renderer.
#[derive(Debug, Clone)]
pub struct SpriteMasks {
    pub bird: [Mask; FRAME_COUNT],
    pub pipe_top: Mask,
    pub pipe_bottom: Mask,
    pub base: Mask,
}

impl SpriteMasks {
    /// Mask for the given wing frame. Frames past the end clamp to the last one.
    pub fn bird_frame(&self, frame: usize) -> &Mask {
        &self.bird[frame.min(FRAME_COUNT - 1)]
    }

    pub fn bird_height(&self, frame: usize) -> i32 {
        self.bird_frame(frame).height() as i32
    }

    pub fn pipe_width(&self) -> i32 {
        self.pipe_top.width() as i32
    }

    pub fn pipe_height(&self) -> i32 {
        self.pipe_top.height() as i32
    }

    pub fn base_width(&self) -> i32 {
        self.base.width() as i32
    }

    /// Fully opaque rectangles of the given sizes, for tests that only care
    /// about geometry.
    #[cfg(test)]
    pub fn solid(bird: (u32, u32), pipe: (u32, u32), base: (u32, u32)) -> Self {
        let bird_mask = Mask::filled(bird.0, bird.1);
        SpriteMasks {
            bird: [bird_mask.clone(), bird_mask.clone(), bird_mask],
            pipe_top: Mask::filled(pipe.0, pipe.1),
            pipe_bottom: Mask::filled(pipe.0, pipe.1),
            base: Mask::filled(base.0, base.1),
        }
    }
}

/// Offsets of the top and bottom pipe segments relative to the bird's
/// top-left corner, in that order.
pub fn segment_offsets(bird: &Bird, pipe: &Pipe) -> [(i32, i32); 2] {
    let bird_y = bird.pixel_y();
    let dx = pipe.x - bird.x;
    [(dx, pipe.top_edge - bird_y), (dx, pipe.bottom_edge - bird_y)]
}

/// Returns true if the bird's current frame shares any opaque pixel with
/// either segment of the pipe.
pub fn collides(bird: &Bird, pipe: &Pipe, masks: &SpriteMasks) -> bool {
    let bird_mask = masks.bird_frame(bird.frame());
    let [top_offset, bottom_offset] = segment_offsets(bird, pipe);

    bird_mask.overlaps(&masks.pipe_bottom, bottom_offset)
        || bird_mask.overlaps(&masks.pipe_top, top_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIPE_HEIGHT: i32 = 640;

    fn masks() -> SpriteMasks {
        SpriteMasks::solid((68, 48), (104, 640), (672, 224))
    }

    #[test]
    fn test_segment_offsets() {
        let bird = Bird::new(200, 150.0);
        let pipe = Pipe::with_height(300, 250, PIPE_HEIGHT);

        let [top, bottom] = segment_offsets(&bird, &pipe);
        assert_eq!(top, (100, -390 - 150));
        assert_eq!(bottom, (100, 450 - 150));
    }

    #[test]
    fn test_bird_in_gap_does_not_collide() {
        let masks = masks();
        // Gap spans y = 250..450, bird spans 300..348
        let bird = Bird::new(200, 300.0);
        let pipe = Pipe::with_height(180, 250, PIPE_HEIGHT);

        assert!(!collides(&bird, &pipe, &masks));
    }

    #[test]
    fn test_bird_hits_top_segment() {
        let masks = masks();
        let bird = Bird::new(200, 230.0);
        let pipe = Pipe::with_height(180, 250, PIPE_HEIGHT);

        assert!(collides(&bird, &pipe, &masks));
    }

    #[test]
    fn test_bird_hits_bottom_segment() {
        let masks = masks();
        // Bird bottom at 410 + 48 = 458, bottom segment starts at 450
        let bird = Bird::new(200, 410.0);
        let pipe = Pipe::with_height(180, 250, PIPE_HEIGHT);

        assert!(collides(&bird, &pipe, &masks));
    }

    #[test]
    fn test_pipe_far_ahead_does_not_collide() {
        let masks = masks();
        let bird = Bird::new(200, 230.0);
        let pipe = Pipe::with_height(700, 250, PIPE_HEIGHT);

        assert!(!collides(&bird, &pipe, &masks));
    }

    #[test]
    fn test_transparent_corner_is_not_a_hit() {
        // Bird silhouette with an empty bottom-right corner
        let bird_mask = Mask::from_rows(&["####", "####", "##..", "##.."]);
        let masks = SpriteMasks {
            bird: [bird_mask.clone(), bird_mask.clone(), bird_mask],
            pipe_top: Mask::filled(10, 10),
            pipe_bottom: Mask::filled(10, 10),
            base: Mask::filled(10, 2),
        };

        let bird = Bird::new(0, 0.0);
        // Bottom segment's corner pokes into the bird's empty corner only
        let pipe = Pipe {
            x: 2,
            gap_center_height: -100,
            top_edge: -200,
            bottom_edge: 2,
            passed: false,
        };

        assert!(!collides(&bird, &pipe, &masks));

        // One pixel further left reaches an opaque pixel
        let pipe = Pipe { x: 1, ..pipe };
        assert!(collides(&bird, &pipe, &masks));
    }

    #[test]
    fn test_collision_depends_only_on_relative_offset() {
        let masks = masks();
        let bird_a = Bird::new(200, 300.0);
        let pipe_a = Pipe::with_height(230, 280, PIPE_HEIGHT);

        // Same configuration shifted by (50, 37)
        let bird_b = Bird::new(250, 337.0);
        let pipe_b = Pipe::with_height(280, 317, PIPE_HEIGHT);

        assert_eq!(segment_offsets(&bird_a, &pipe_a), segment_offsets(&bird_b, &pipe_b));
        assert_eq!(
            collides(&bird_a, &pipe_a, &masks),
            collides(&bird_b, &pipe_b, &masks)
        );
    }

    #[test]
    fn test_bird_frame_clamps() {
        let masks = masks();
        assert_eq!(masks.bird_frame(99), &masks.bird[FRAME_COUNT - 1]);
        assert_eq!(masks.bird_height(0), 48);
        assert_eq!(masks.pipe_width(), 104);
        assert_eq!(masks.base_width(), 672);
    }
}
