// Copyright (c) 2026 rezky_nightky

mod cell;
mod config;
mod frame;
mod game;
mod star;
mod terminal;
mod word;
mod words;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyEventKind};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::config::Args;
use crate::frame::Frame;
use crate::game::{Game, COLS, ROWS};
use crate::terminal::{restore_terminal_best_effort, Terminal};
use crate::words::load_words;

fn build_info() -> &'static str {
    env!("CATCHME_BUILD")
}

fn require_f64_range(name: &str, v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_u64_range(name: &str, v: u64, min: u64, max: u64) -> u64 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_u8_range(name: &str, v: u8, min: u8, max: u8) -> u8 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let args = Args::parse();

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        println!("Build: {}", build_info());
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        return Ok(());
    }

    let target_fps = require_f64_range("--fps", args.fps, 1.0, 240.0);
    let duration_s = require_u64_range("--duration", args.duration, 5, 3600);
    let max_per_row = require_u8_range("--max-per-row", args.max_per_row, 1, 4);

    let pool = load_words(&args.words);
    if pool.is_empty() {
        eprintln!(
            "warning: no words loaded from {} (nothing will spawn)",
            args.words.display()
        );
    }

    let mut term = Terminal::new()?;
    let (tw, th) = term.size()?;
    if tw < COLS || th < ROWS {
        drop(term);
        eprintln!(
            "terminal too small: need at least {}x{}, got {}x{}",
            COLS, ROWS, tw, th
        );
        std::process::exit(1);
    }

    let mut game = Game::new(
        pool,
        Duration::from_secs(duration_s),
        max_per_row,
        args.seed,
        Instant::now(),
    );
    let mut frame = Frame::new(COLS, ROWS);

    let target_period = Duration::from_secs_f64(1.0 / target_fps);
    let mut next_frame = Instant::now() + target_period;

    while !game.quit {
        let now = Instant::now();

        // At most one key event per tick; no input means no state change.
        if Terminal::poll_event(Duration::ZERO)? {
            if let Event::Key(k) = Terminal::read_event()? {
                if k.kind == KeyEventKind::Press {
                    game.handle_key(k.code, now);
                }
            }
        }

        game.update(now);

        frame.clear();
        game.draw(&mut frame, now);
        term.draw(&frame)?;

        // End-of-frame sleep is the loop's only yield point.
        let now = Instant::now();
        if next_frame > now {
            thread::sleep(next_frame - now);
        }
        next_frame += target_period;
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }

    Ok(())
}
