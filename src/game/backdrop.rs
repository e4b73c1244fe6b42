//! Two-tile horizontally scrolling background.

/// Left edges of the two background tiles. Each tile is one field wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub x1: f64,
    pub x2: f64,
    tile_width: f64,
}

impl Backdrop {
    pub fn new(tile_width: f64) -> Self {
        Self {
            x1: 0.0,
            x2: tile_width,
            tile_width,
        }
    }

    /// Scroll both tiles left by `speed * scale`, wrapping a tile that left
    /// the field back to the right edge.
    pub fn scroll(&mut self, speed: f64, scale: f64) {
        let dx = speed * scale;
        self.x1 -= dx;
        self.x2 -= dx;

        if self.x1 + self.tile_width <= 0.0 {
            self.x1 = self.tile_width;
        }
        if self.x2 + self.tile_width <= 0.0 {
            self.x2 = self.tile_width;
        }

        // Keep the tiles exactly one width apart so rounding never opens a seam.
        if (self.x1 - self.x2).abs() > self.tile_width {
            if self.x1 < self.x2 {
                self.x2 = self.x1 + self.tile_width;
            } else {
                self.x1 = self.x2 + self.tile_width;
            }
        }
    }

    /// Tile offsets snapped to whole units, as drawn.
    pub fn offsets(&self) -> [f64; 2] {
        [self.x1.floor(), self.x2.floor()]
    }
}
