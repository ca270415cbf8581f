// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::frame::Frame;

/// Scoped owner of the raw-mode alternate screen. Construction acquires the
/// terminal, `Drop` restores it; `restore_terminal_best_effort` covers the
/// panic-hook and signal paths where the guard cannot run.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore_terminal_best_effort();
            return Err(e);
        }
        Ok(Self { stdout: out })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll_event(timeout: std::time::Duration) -> Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> Result<event::Event> {
        event::read()
    }

    /// Emits the whole frame in one pass: cursor to each row start, then a
    /// character per cell, queueing an attribute change only when the cell's
    /// attributes differ from the previously emitted ones.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let mut cur_fg: Option<Color> = None;
        let mut cur_bg: Option<Color> = None;
        let mut cur_bold = false;
        let mut cur_dim = false;

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;

        for y in 0..frame.height {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width {
                let cell = match frame.get(x, y) {
                    Some(c) => *c,
                    None => continue,
                };

                if cell.fg != cur_fg {
                    self.stdout
                        .queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
                    cur_fg = cell.fg;
                }

                if cell.bg != cur_bg {
                    self.stdout
                        .queue(SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)))?;
                    cur_bg = cell.bg;
                }

                if cell.bold != cur_bold || cell.dim != cur_dim {
                    self.stdout.queue(SetAttribute(Attribute::NormalIntensity))?;
                    if cell.bold {
                        self.stdout.queue(SetAttribute(Attribute::Bold))?;
                    }
                    if cell.dim {
                        self.stdout.queue(SetAttribute(Attribute::Dim))?;
                    }
                    cur_bold = cell.bold;
                    cur_dim = cell.dim;
                }

                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.stdout.execute(SetAttribute(Attribute::Reset));
        let _ = self.stdout.execute(ResetColor);
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(terminal::EnableLineWrap);
        let _ = self.stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}
