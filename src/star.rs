// Copyright (c) 2026 rezky_nightky

/// Background decoration drifting across the field. Stars never die; on
/// reaching the right edge they wrap to column 0 and the game reassigns them
/// a fresh interior row.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: u16,
    pub y: u16,
    /// Ticks per column advance, 1..=3. Higher means slower; 3 renders dim.
    pub speed: u8,
    pub tick: u8,
}

impl Star {
    /// Advances one tick. Returns true when the star wrapped back to column 0
    /// and needs a new row assigned.
    pub fn advance(&mut self, width: u16) -> bool {
        self.tick += 1;
        if self.tick < self.speed {
            return false;
        }
        self.tick = 0;
        self.x += 1;
        if self.x >= width {
            self.x = 0;
            return true;
        }
        false
    }
}
