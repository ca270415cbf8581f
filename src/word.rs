// Copyright (c) 2026 rezky_nightky

/// A typing target. All words exist from game start; the spawner flips them
/// `active` one at a time in shuffle order. Deactivated words are never
/// reactivated.
#[derive(Clone, Debug)]
pub struct Word {
    pub text: String,
    /// Column of the first character; negative while entering from the left.
    pub x: i32,
    pub y: u16,
    /// Ticks per column advance (frame-count divisor, not a distance).
    pub speed: u8,
    pub tick: u8,
    pub active: bool,
}

impl Word {
    pub fn new(text: String, speed: u8) -> Self {
        Self {
            text,
            x: 0,
            y: 0,
            speed,
            tick: 0,
            active: false,
        }
    }

    /// Advances one tick. Returns true when the word just scrolled off the
    /// right edge and deactivated itself; the caller releases its row.
    pub fn advance(&mut self, width: u16) -> bool {
        self.tick += 1;
        if self.tick < self.speed {
            return false;
        }
        self.tick = 0;
        self.x += 1;
        if self.x >= width as i32 {
            self.active = false;
            return true;
        }
        false
    }
}
