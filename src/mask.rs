//! Per-pixel opacity masks
//!
//! A `Mask` records which pixels of a sprite are opaque. Two masks placed at
//! a relative offset collide when they share at least one opaque pixel. This
//! is the exact collision test the game relies on; sprite silhouettes (wing
//! tips, pipe rims) are irregular, so a bounding box is not enough.
//!
//! Masks are plain data. They are built once from decoded image bytes and
//! never touch SDL afterwards, which keeps them usable in tests.

/// Pixels with alpha at or above this value count as opaque.
pub const ALPHA_THRESHOLD: u8 = 127;

const WORD_BITS: u32 = 64;

/// A 2D bitset, one bit per pixel, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    /// Creates a fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS) as usize;
        Mask {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Creates a fully opaque mask.
    #[cfg(test)]
    pub fn filled(width: u32, height: u32) -> Self {
        let mut mask = Mask::new(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y, true);
            }
        }
        mask
    }

    /// Builds a mask from tightly or loosely packed RGBA8 pixels.
    ///
    /// `pitch` is the byte length of one row, which SDL surfaces may pad
    /// beyond `width * 4`.
    pub fn from_rgba(width: u32, height: u32, pitch: usize, pixels: &[u8]) -> Self {
        let mut mask = Mask::new(width, height);
        for y in 0..height {
            let row_start = y as usize * pitch;
            for x in 0..width {
                let alpha_index = row_start + x as usize * 4 + 3;
                let opaque = pixels
                    .get(alpha_index)
                    .is_some_and(|&alpha| alpha >= ALPHA_THRESHOLD);
                if opaque {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Builds a mask from rows of text, `#` for opaque and anything else for
    /// transparent. Rows shorter than the longest one are padded.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u32;
        let mut mask = Mask::new(width, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    mask.set(x as u32, y as u32, true);
                }
            }
        }
        mask
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the pixel at (x, y) is opaque. Out of range is transparent.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let word = self.bits[self.word_index(x, y)];
        (word >> (x % WORD_BITS)) & 1 == 1
    }

    /// Sets the pixel at (x, y). Out of range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.word_index(x, y);
        let bit = 1u64 << (x % WORD_BITS);
        if opaque {
            self.bits[index] |= bit;
        } else {
            self.bits[index] &= !bit;
        }
    }

    /// Number of opaque pixels.
    #[cfg(test)]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|word| word.count_ones()).sum()
    }

    /// Nearest-neighbour upscale by an integer factor.
    pub fn scaled(&self, factor: u32) -> Mask {
        let factor = factor.max(1);
        let mut scaled = Mask::new(self.width * factor, self.height * factor);
        for y in 0..scaled.height {
            for x in 0..scaled.width {
                if self.get(x / factor, y / factor) {
                    scaled.set(x, y, true);
                }
            }
        }
        scaled
    }

    /// Mirror image across the horizontal axis.
    pub fn flipped_vertical(&self) -> Mask {
        let mut flipped = Mask::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    flipped.set(x, self.height - 1 - y, true);
                }
            }
        }
        flipped
    }

    /// Returns the first shared opaque pixel, in this mask's coordinates,
    /// when `other` is placed with its top-left corner at `offset`.
    ///
    /// Pixels are scanned row-major over the intersection of the two masks.
    pub fn overlap_point(&self, other: &Mask, offset: (i32, i32)) -> Option<(u32, u32)> {
        let (dx, dy) = offset;

        let left = dx.max(0);
        let top = dy.max(0);
        let right = (self.width as i32).min(dx + other.width as i32);
        let bottom = (self.height as i32).min(dy + other.height as i32);

        if left >= right || top >= bottom {
            return None;
        }

        for y in top..bottom {
            for x in left..right {
                if self.get(x as u32, y as u32) && other.get((x - dx) as u32, (y - dy) as u32) {
                    return Some((x as u32, y as u32));
                }
            }
        }

        None
    }

    /// Returns true if any opaque pixel is shared at the given offset.
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        self.overlap_point(other, offset).is_some()
    }

    fn word_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.words_per_row + (x / WORD_BITS) as usize
    }
}
