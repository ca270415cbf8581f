// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;

/// Off-screen frame buffer. The game clears and fully repopulates it every
/// tick; diffing against previously emitted output happens in the terminal
/// layer, never here.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::blank(); len],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writes one cell; coordinates outside the grid are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fills a whole row with copies of `cell`.
    pub fn fill_row(&mut self, y: u16, cell: Cell) {
        for x in 0..self.width {
            self.set(x, y, cell);
        }
    }

    /// Draws `text` starting at column `x` (may be negative while an entity is
    /// entering from the left). Characters outside the grid are clipped, the
    /// rest take `style`'s attributes.
    pub fn draw_text(&mut self, x: i32, y: u16, text: &str, style: Cell) {
        for (i, ch) in text.chars().enumerate() {
            let col = x + i as i32;
            if col < 0 {
                continue;
            }
            if col >= self.width as i32 {
                break;
            }
            self.set(col as u16, y, Cell { ch, ..style });
        }
    }
}
