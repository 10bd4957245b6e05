/// The scrolling ground: two identical tiles laid end to end.
///
/// When a tile scrolls fully off the left edge it is moved to sit directly
/// behind its sibling, so the pair always covers a seamless strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub x1: i32,
    pub x2: i32,
    pub y: i32,
    pub width: i32,
}

impl Base {
    pub const VELOCITY: i32 = 5;

    pub fn new(y: i32, width: i32) -> Self {
        Base {
            x1: 0,
            x2: width,
            y,
            width,
        }
    }

    pub fn advance(&mut self) {
        self.x1 -= Self::VELOCITY;
        self.x2 -= Self::VELOCITY;

        if self.x1 + self.width < 0 {
            self.x1 = self.x2 + self.width;
        }

        if self.x2 + self.width < 0 {
            self.x2 = self.x1 + self.width;
        }
    }

    pub fn tile_positions(&self) -> [i32; 2] {
        [self.x1, self.x2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tiles_are_adjacent() {
        let base = Base::new(730, 672);
        assert_eq!(base.tile_positions(), [0, 672]);
    }

    #[test]
    fn test_tiling_invariant_holds_every_tick() {
        let mut base = Base::new(730, 672);
        for tick in 0..2000 {
            base.advance();
            assert_eq!(
                (base.x1 - base.x2).abs(),
                base.width,
                "tiles drifted apart at tick {}",
                tick
            );
        }
    }

    #[test]
    fn test_tiling_invariant_with_uneven_width() {
        // Width not a multiple of the scroll speed
        let mut base = Base::new(730, 333);
        for _ in 0..1000 {
            base.advance();
            assert_eq!((base.x1 - base.x2).abs(), base.width);
        }
    }

    #[test]
    fn test_tile_wraps_behind_sibling() {
        let mut base = Base::new(730, 672);
        // After 135 ticks the first tile is at -675, past its own width
        for _ in 0..135 {
            base.advance();
        }
        assert_eq!(base.x2, -3);
        assert_eq!(base.x1, 669);
    }

    #[test]
    fn test_some_tile_always_covers_the_left_edge() {
        let mut base = Base::new(730, 672);
        for _ in 0..2000 {
            base.advance();
            let covers = base
                .tile_positions()
                .iter()
                .any(|&x| x <= 0 && x + base.width >= 0);
            assert!(covers);
        }
    }
}
