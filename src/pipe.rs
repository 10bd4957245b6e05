use rand::Rng;
use std::ops::Range;

/// A pair of pipe segments sharing one `x`, with a fixed gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: i32,
    /// Where the top segment ends and the gap begins.
    pub gap_center_height: i32,
    /// y of the top segment's top-left corner (usually negative).
    pub top_edge: i32,
    /// y of the bottom segment's top-left corner.
    pub bottom_edge: i32,
    pub passed: bool,
}

impl Pipe {
    pub const GAP: i32 = 200;
    pub const VELOCITY: i32 = 5;
    pub const HEIGHT_RANGE: Range<i32> = 50..450;

    /// Creates a pipe at `x` with a random gap height.
    ///
    /// `segment_height` is the height of the top segment sprite; its bottom
    /// edge is placed at the chosen gap height.
    pub fn spawn(x: i32, segment_height: i32, rng: &mut impl Rng) -> Self {
        let height = rng.gen_range(Self::HEIGHT_RANGE);
        Self::with_height(x, height, segment_height)
    }

    pub fn with_height(x: i32, height: i32, segment_height: i32) -> Self {
        Pipe {
            x,
            gap_center_height: height,
            top_edge: height - segment_height,
            bottom_edge: height + Self::GAP,
            passed: false,
        }
    }

    pub fn advance(&mut self) {
        self.x -= Self::VELOCITY;
    }

    /// True once the pipe's right edge has scrolled past the left of the screen.
    pub fn is_off_screen(&self, segment_width: i32) -> bool {
        self.x + segment_width < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SEGMENT_WIDTH: i32 = 104;
    const SEGMENT_HEIGHT: i32 = 640;

    #[test]
    fn test_gap_is_always_two_hundred() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let pipe = Pipe::spawn(700, SEGMENT_HEIGHT, &mut rng);
            let top_segment_bottom = pipe.top_edge + SEGMENT_HEIGHT;
            assert_eq!(pipe.bottom_edge - top_segment_bottom, Pipe::GAP);
        }
    }

    #[test]
    fn test_height_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pipe = Pipe::spawn(700, SEGMENT_HEIGHT, &mut rng);
            assert!(Pipe::HEIGHT_RANGE.contains(&pipe.gap_center_height));
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                Pipe::spawn(700, SEGMENT_HEIGHT, &mut rng1),
                Pipe::spawn(700, SEGMENT_HEIGHT, &mut rng2)
            );
        }
    }

    #[test]
    fn test_with_height_edges() {
        let pipe = Pipe::with_height(700, 300, SEGMENT_HEIGHT);
        assert_eq!(pipe.top_edge, -340);
        assert_eq!(pipe.bottom_edge, 500);
    }

    #[test]
    fn test_reaches_zero_after_140_ticks() {
        let mut pipe = Pipe::with_height(700, 300, SEGMENT_HEIGHT);
        for _ in 0..140 {
            pipe.advance();
        }
        assert_eq!(pipe.x, 0);
    }

    #[test]
    fn test_off_screen_only_when_right_edge_negative() {
        let mut pipe = Pipe::with_height(-SEGMENT_WIDTH, 300, SEGMENT_HEIGHT);
        // Right edge exactly at 0 is still on screen
        assert!(!pipe.is_off_screen(SEGMENT_WIDTH));

        pipe.x -= 1;
        assert!(pipe.is_off_screen(SEGMENT_WIDTH));

        let visible = Pipe::with_height(-50, 300, SEGMENT_HEIGHT);
        assert!(!visible.is_off_screen(SEGMENT_WIDTH));
    }
}
