// Copyright (c) 2026 rezky_nightky

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use crossterm::style::Color;
use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    seq::SliceRandom,
    SeedableRng,
};

use crate::cell::Cell;
use crate::frame::Frame;
use crate::star::Star;
use crate::word::Word;

pub const COLS: u16 = 80;
pub const ROWS: u16 = 26;

const MAX_STARS: usize = 100;
const WORD_SPEED: u8 = 10;

const FIRST_WAVE_SIZE: usize = 10;
const WAVE_INCREMENT: usize = 5;
const INITIAL_WAVE_INTERVAL: f32 = 7.0;
const INITIAL_SPAWN_INTERVAL: f32 = 0.5;
const WAVE_INTERVAL_DECAY: f32 = 0.98;
const SPAWN_INTERVAL_DECAY: f32 = 0.95;
const WAVE_INTERVAL_FLOOR: f32 = 3.0;
const SPAWN_INTERVAL_FLOOR: f32 = 0.1;

const LOW_TIME_SECS: u64 = 10;
const BLINK_PERIOD_MS: u128 = 500;

const LOGO: [&str; 5] = [
    r"__   ____    _  _____ ____ _   _ __  __ _____ __",
    r"\ \ / ___|  / \|_   _/ ___| | | |  \/  | ____/ /",
    r" \ \ |     / _ \ | || |   | |_| | |\/| |  _|/ /",
    r" / / |___ / ___ \| || |___|  _  | |  | | |__\ \",
    r"/_/ \____/_/   \_\_| \____|_| |_|_|  |_|_____\_\",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Play,
    Final,
}

/// The whole simulation: entities, spawn scheduler, countdown and the
/// screen state machine. Advanced once per tick by `update`, drawn into a
/// `Frame` by `draw`; both take the same per-frame `Instant` so the displayed
/// timer and the PLAY -> FINAL transition never disagree.
pub struct Game {
    pub screen: Screen,
    pub quit: bool,

    words: Vec<Word>,
    stars: Vec<Star>,
    /// Active words per row, kept in lock-step with the active set. Bounded
    /// by `max_per_row` so words do not pile up on one line.
    row_count: Vec<u8>,
    max_per_row: u8,

    typed: String,
    score: u32,

    total_time: Duration,
    start_time: Option<Instant>,

    spawned_count: usize,
    allowed_count: usize,
    wave_interval: f32,
    spawn_interval: f32,
    last_wave_time: Instant,
    last_spawn_time: Instant,

    rng: StdRng,
    rand_chance: Uniform<f32>,
    rand_row: Uniform<u16>,
}

impl Game {
    pub fn new(
        pool: Vec<String>,
        total_time: Duration,
        max_per_row: u8,
        seed: Option<u64>,
        now: Instant,
    ) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        let rand_chance: Uniform<f32> = Uniform::new(0.0, 1.0).expect("valid range");
        // Interior rows only: the top and bottom bars stay clear of entities.
        let rand_row: Uniform<u16> = Uniform::new_inclusive(1, ROWS - 2).expect("valid range");
        let rand_col: Uniform<u16> = Uniform::new_inclusive(0, COLS - 1).expect("valid range");
        let rand_star_speed: Uniform<u8> = Uniform::new_inclusive(1, 3).expect("valid range");

        let stars = (0..MAX_STARS)
            .map(|_| Star {
                x: rand_col.sample(&mut rng),
                y: rand_row.sample(&mut rng),
                speed: rand_star_speed.sample(&mut rng),
                tick: 0,
            })
            .collect();

        let mut words: Vec<Word> = pool
            .into_iter()
            .map(|text| Word::new(text, WORD_SPEED))
            .collect();
        words.shuffle(&mut rng);

        Self {
            screen: Screen::Welcome,
            quit: false,
            words,
            stars,
            row_count: vec![0; ROWS as usize],
            max_per_row,
            typed: String::new(),
            score: 0,
            total_time,
            start_time: None,
            spawned_count: 0,
            allowed_count: FIRST_WAVE_SIZE,
            wave_interval: INITIAL_WAVE_INTERVAL,
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            last_wave_time: now,
            last_spawn_time: now,
            rng,
            rand_chance,
            rand_row,
        }
    }

    /// Whole seconds left on the clock, floored at zero. Elapsed time is
    /// truncated to whole seconds first, so the count stays at 1 through the
    /// final fractional second; the PLAY -> FINAL transition keys off the
    /// same value, and the PLAY layout never displays 0:00.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let elapsed = match self.start_time {
            Some(start) => now.saturating_duration_since(start),
            None => Duration::ZERO,
        };
        self.total_time.as_secs().saturating_sub(elapsed.as_secs())
    }

    /// Applies one key. The main loop feeds at most one event per tick.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match self.screen {
            Screen::Welcome => match code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Char(' ') => {
                    self.screen = Screen::Play;
                    self.typed.clear();
                    self.start_time = Some(now);
                }
                _ => {}
            },
            Screen::Play => match code {
                KeyCode::Esc => self.quit = true,
                KeyCode::Backspace => {
                    self.typed.pop();
                }
                KeyCode::Char(' ') => self.match_attempt(),
                KeyCode::Char(c) if !c.is_control() => self.typed.push(c),
                _ => {}
            },
            Screen::Final => {
                if code == KeyCode::Esc {
                    self.quit = true;
                }
            }
        }
    }

    /// Deactivates every active word equal to the typed buffer. Duplicate
    /// texts in the pool all resolve in the same attempt; the buffer clears
    /// whether or not anything matched.
    fn match_attempt(&mut self) {
        for w in &mut self.words {
            if w.active && w.text == self.typed {
                w.active = false;
                self.score += 1;
                self.row_count[w.y as usize] = self.row_count[w.y as usize].saturating_sub(1);
            }
        }
        self.typed.clear();
    }

    /// One fixed-rate simulation tick.
    pub fn update(&mut self, now: Instant) {
        for star in &mut self.stars {
            if star.advance(COLS) {
                star.y = self.rand_row.sample(&mut self.rng);
            }
        }

        if self.screen != Screen::Play {
            return;
        }

        self.run_spawner(now);

        for w in &mut self.words {
            if !w.active {
                continue;
            }
            if w.advance(COLS) {
                // Scrolled off the right edge: unscored, row freed.
                self.row_count[w.y as usize] = self.row_count[w.y as usize].saturating_sub(1);
            }
        }

        if self.remaining_secs(now) == 0 {
            self.screen = Screen::Final;
        }
    }

    /// Wave advance and steady spawn, evaluated independently; both may fire
    /// on the same tick.
    fn run_spawner(&mut self, now: Instant) {
        let wave_elapsed = now.saturating_duration_since(self.last_wave_time).as_secs_f32();
        if wave_elapsed >= self.wave_interval {
            self.last_wave_time = now;
            self.allowed_count = (self.allowed_count + WAVE_INCREMENT).min(self.words.len());
            self.spawn_interval = (self.spawn_interval * SPAWN_INTERVAL_DECAY).max(SPAWN_INTERVAL_FLOOR);
            self.wave_interval = (self.wave_interval * WAVE_INTERVAL_DECAY).max(WAVE_INTERVAL_FLOOR);
        }

        let spawn_elapsed = now
            .saturating_duration_since(self.last_spawn_time)
            .as_secs_f32();
        if spawn_elapsed >= self.spawn_interval
            && self.spawned_count < self.allowed_count
            && self.spawned_count < self.words.len()
        {
            self.last_spawn_time = now;

            let row = self.rand_row.sample(&mut self.rng);
            if self.row_count[row as usize] >= self.max_per_row {
                // Full row: the attempt is skipped outright, no retry this tick.
                return;
            }

            let w = &mut self.words[self.spawned_count];
            let half = w.text.chars().count() as i32 / 2;
            w.x = if self.rand_chance.sample(&mut self.rng) < 0.5 {
                -1
            } else {
                -half
            };
            w.y = row;
            w.tick = 0;
            w.active = true;
            self.row_count[row as usize] += 1;
            self.spawned_count += 1;
        }
    }

    pub fn draw(&self, frame: &mut Frame, now: Instant) {
        let bar = Cell::blank().bg(Color::Blue);
        frame.fill_row(0, bar);
        frame.fill_row(ROWS - 1, bar);

        for s in &self.stars {
            let mut cell = Cell::new('.').fg(Color::White);
            if s.speed == 3 {
                cell = cell.dim();
            }
            frame.set(s.x, s.y, cell);
        }

        match self.screen {
            Screen::Welcome => self.draw_welcome(frame),
            Screen::Play => self.draw_play(frame, now),
            Screen::Final => self.draw_final(frame),
        }
    }

    fn draw_welcome(&self, frame: &mut Frame) {
        let top = 5;
        for (i, line) in LOGO.iter().enumerate() {
            frame.draw_text(16, top + i as u16, line, Cell::blank().fg(Color::White).bold());
        }
        frame.draw_text(
            29,
            top + LOGO.len() as u16,
            "<Press SPACE to start>",
            Cell::blank().bold(),
        );
    }

    fn draw_play(&self, frame: &mut Frame, now: Instant) {
        for w in &self.words {
            if !w.active {
                continue;
            }
            for (i, ch) in w.text.chars().enumerate() {
                let col = w.x + i as i32;
                if col < 0 || col >= COLS as i32 {
                    continue;
                }
                // Color tracks how far across the field the cell sits.
                let frac = col as f32 / COLS as f32;
                let color = if frac >= 0.8 {
                    Color::Red
                } else if frac >= 0.6 {
                    Color::Yellow
                } else {
                    Color::Green
                };
                frame.set(col as u16, w.y, Cell::new(ch).fg(color).bold());
            }
        }

        let type_box = format!("[Type: {}]", self.typed);
        frame.draw_text(
            0,
            ROWS - 1,
            &type_box,
            Cell::blank().fg(Color::White).bg(Color::Blue),
        );

        let sec = self.remaining_secs(now);
        let timer_text = format!("{}:{:02}", sec / 60, sec % 60);
        let mut timer_style = Cell::blank().fg(Color::White).bg(Color::Blue);
        if sec <= LOW_TIME_SECS && self.blink_on(now) {
            timer_style = Cell::blank().fg(Color::Red).bg(Color::Blue).bold();
        }
        frame.draw_text((COLS - 8) as i32, ROWS - 1, &timer_text, timer_style);
    }

    fn draw_final(&self, frame: &mut Frame) {
        let text = format!("Your result is {}w/m", self.score);
        let x = (COLS as i32 - text.chars().count() as i32) / 2;
        frame.draw_text(x, ROWS / 2 - 2, &text, Cell::blank().fg(Color::White).bold());
    }

    fn blink_on(&self, now: Instant) -> bool {
        let elapsed = self
            .start_time
            .map(|s| now.saturating_duration_since(s))
            .unwrap_or_default();
        (elapsed.as_millis() / BLINK_PERIOD_MS) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(words: &[&str], now: Instant) -> Game {
        Game::new(
            words.iter().map(|s| s.to_string()).collect(),
            Duration::from_secs(60),
            1,
            Some(7),
            now,
        )
    }

    fn start_play(g: &mut Game, now: Instant) {
        g.handle_key(KeyCode::Char(' '), now);
        assert_eq!(g.screen, Screen::Play);
    }

    fn type_word(g: &mut Game, text: &str, now: Instant) {
        for c in text.chars() {
            g.handle_key(KeyCode::Char(c), now);
        }
        g.handle_key(KeyCode::Char(' '), now);
    }

    fn occupancy_in_lock_step(g: &Game) {
        let mut counts = vec![0u8; ROWS as usize];
        for w in &g.words {
            if w.active {
                counts[w.y as usize] += 1;
            }
        }
        assert_eq!(counts, g.row_count);
        for &c in &g.row_count {
            assert!(c <= g.max_per_row);
        }
    }

    #[test]
    fn welcome_q_quits_and_space_starts() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        g.handle_key(KeyCode::Char('q'), now);
        assert!(g.quit);

        let mut g = game_with(&["cat"], now);
        g.handle_key(KeyCode::Char('x'), now);
        assert_eq!(g.screen, Screen::Welcome);
        g.handle_key(KeyCode::Char(' '), now);
        assert_eq!(g.screen, Screen::Play);
        assert!(g.typed.is_empty());
        assert_eq!(g.start_time, Some(now));
    }

    #[test]
    fn esc_quits_outside_welcome() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.handle_key(KeyCode::Esc, now);
        assert!(g.quit);
    }

    #[test]
    fn spawner_activates_one_word_after_interval() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "dog"], now);
        start_play(&mut g, now);

        let later = now + Duration::from_secs(1);
        g.update(later);

        assert_eq!(g.spawned_count, 1);
        let active: Vec<_> = g.words.iter().filter(|w| w.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(g.row_count[active[0].y as usize], 1);
        assert!((1..=ROWS - 2).contains(&active[0].y));
        occupancy_in_lock_step(&g);
    }

    #[test]
    fn spawner_skips_full_rows_without_retry() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "dog"], now);
        start_play(&mut g, now);
        g.row_count.iter_mut().for_each(|c| *c = 1);

        g.run_spawner(now + Duration::from_secs(1));
        assert_eq!(g.spawned_count, 0);
        assert!(g.words.iter().all(|w| !w.active));
    }

    #[test]
    fn spawner_never_exceeds_pool_or_allowance() {
        let now = Instant::now();
        let mut g = game_with(&["a", "b", "c"], now);
        start_play(&mut g, now);

        for step in 1..120 {
            let t = now + Duration::from_millis(step * 600);
            g.update(t);
            assert!(g.spawned_count <= g.allowed_count);
            assert!(g.spawned_count <= g.words.len());
            occupancy_in_lock_step(&g);
        }
    }

    #[test]
    fn waves_grow_allowance_and_shrink_intervals() {
        let now = Instant::now();
        let pool: Vec<String> = (0..40).map(|i| format!("w{i}")).collect();
        let mut g = Game::new(pool, Duration::from_secs(60), 1, Some(7), now);
        start_play(&mut g, now);

        g.update(now + Duration::from_secs(8));
        assert_eq!(g.allowed_count, FIRST_WAVE_SIZE + WAVE_INCREMENT);
        assert!(g.spawn_interval < INITIAL_SPAWN_INTERVAL);
        assert!(g.wave_interval < INITIAL_WAVE_INTERVAL);
        assert!(g.spawn_interval >= SPAWN_INTERVAL_FLOOR);
        assert!(g.wave_interval >= WAVE_INTERVAL_FLOOR);
    }

    #[test]
    fn matching_scores_and_clears_buffer() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "dog"], now);
        start_play(&mut g, now);
        g.update(now + Duration::from_secs(1));

        let active_text = g
            .words
            .iter()
            .find(|w| w.active)
            .map(|w| w.text.clone())
            .unwrap();

        type_word(&mut g, &active_text, now);
        assert_eq!(g.score, 1);
        assert!(g.typed.is_empty());
        assert!(g.words.iter().all(|w| !w.active));
        occupancy_in_lock_step(&g);
    }

    #[test]
    fn failed_match_still_clears_buffer() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.update(now + Duration::from_secs(1));

        type_word(&mut g, "wrong", now);
        assert_eq!(g.score, 0);
        assert!(g.typed.is_empty());
        assert_eq!(g.words.iter().filter(|w| w.active).count(), 1);
        occupancy_in_lock_step(&g);
    }

    #[test]
    fn duplicate_texts_resolve_in_one_attempt() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "cat"], now);
        start_play(&mut g, now);
        g.words[0].active = true;
        g.words[0].y = 3;
        g.row_count[3] += 1;
        g.words[1].active = true;
        g.words[1].y = 4;
        g.row_count[4] += 1;

        type_word(&mut g, "cat", now);
        assert_eq!(g.score, 2);
        assert!(g.words.iter().all(|w| !w.active));
        occupancy_in_lock_step(&g);
    }

    #[test]
    fn cat_dog_end_to_end() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "dog"], now);
        start_play(&mut g, now);
        g.update(now + Duration::from_secs(1));

        let active: Vec<_> = g.words.iter().filter(|w| w.active).collect();
        assert_eq!(active.len(), 1);
        let was_cat = active[0].text == "cat";
        assert_eq!(g.row_count[active[0].y as usize], 1);

        type_word(&mut g, "cat", now);
        assert_eq!(g.score, if was_cat { 1 } else { 0 });
        assert!(g.typed.is_empty());
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.handle_key(KeyCode::Char('c'), now);
        g.handle_key(KeyCode::Char('x'), now);
        g.handle_key(KeyCode::Backspace, now);
        assert_eq!(g.typed, "c");
        g.handle_key(KeyCode::Backspace, now);
        g.handle_key(KeyCode::Backspace, now);
        assert!(g.typed.is_empty());
    }

    #[test]
    fn word_exit_frees_row_without_scoring() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.words[0].active = true;
        g.words[0].x = (COLS - 1) as i32;
        g.words[0].y = 3;
        g.words[0].speed = 1;
        g.row_count[3] = 1;

        g.update(now + Duration::from_millis(33));
        assert!(!g.words[0].active);
        assert_eq!(g.row_count[3], 0);
        assert_eq!(g.score, 0);
        occupancy_in_lock_step(&g);
    }

    #[test]
    fn star_wraps_to_interior_row() {
        let now = Instant::now();
        let mut g = game_with(&[], now);
        g.stars[0] = Star {
            x: COLS - 1,
            y: 5,
            speed: 1,
            tick: 0,
        };
        g.update(now);
        assert_eq!(g.stars[0].x, 0);
        assert!((1..=ROWS - 2).contains(&g.stars[0].y));
    }

    #[test]
    fn remaining_time_is_monotonic_and_floored() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);

        let mut last = g.remaining_secs(now);
        for ms in 1..280 {
            let r = g.remaining_secs(now + Duration::from_millis(ms * 250));
            assert!(r <= last);
            last = r;
        }
        assert_eq!(g.remaining_secs(now + Duration::from_secs(120)), 0);
    }

    #[test]
    fn timeout_transition_is_stable() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);

        let end = now + Duration::from_secs(61);
        g.update(end);
        assert_eq!(g.screen, Screen::Final);
        g.update(end + Duration::from_secs(5));
        assert_eq!(g.screen, Screen::Final);
    }

    #[test]
    fn empty_pool_stays_playable() {
        let now = Instant::now();
        let mut g = game_with(&[], now);
        start_play(&mut g, now);
        for s in 1..30 {
            g.update(now + Duration::from_secs(s));
            assert_eq!(g.spawned_count, 0);
        }
        assert_eq!(g.screen, Screen::Play);
    }

    #[test]
    fn word_color_tracks_travel_distance() {
        let now = Instant::now();
        let mut g = game_with(&["cat", "dog", "owl"], now);
        start_play(&mut g, now);
        for (i, (x, row)) in [(2i32, 3u16), (50, 4), (70, 5)].into_iter().enumerate() {
            g.words[i].active = true;
            g.words[i].x = x;
            g.words[i].y = row;
            g.row_count[row as usize] += 1;
        }

        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, now);
        assert_eq!(frame.get(2, 3).unwrap().fg, Some(Color::Green));
        assert_eq!(frame.get(50, 4).unwrap().fg, Some(Color::Yellow));
        assert_eq!(frame.get(70, 5).unwrap().fg, Some(Color::Red));
    }

    #[test]
    fn entering_word_clips_at_left_edge() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.words[0].active = true;
        g.words[0].x = -2;
        g.words[0].y = 3;
        g.row_count[3] = 1;

        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, now);
        // Only the third character is on screen; the clipped ones never land.
        assert_eq!(frame.get(0, 3).unwrap().ch, 't');
        assert_ne!(frame.get(1, 3).unwrap().ch, 'a');
        assert_ne!(frame.get(1, 3).unwrap().ch, 't');
    }

    #[test]
    fn typed_buffer_is_rendered_on_the_bottom_bar() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);
        g.handle_key(KeyCode::Char('c'), now);
        g.handle_key(KeyCode::Char('a'), now);

        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, now);
        assert_eq!(frame.get(0, ROWS - 1).unwrap().ch, '[');
        assert_eq!(frame.get(7, ROWS - 1).unwrap().ch, 'c');
        assert_eq!(frame.get(8, ROWS - 1).unwrap().ch, 'a');
        assert_eq!(frame.get(9, ROWS - 1).unwrap().ch, ']');
    }

    #[test]
    fn timer_blinks_red_in_the_last_ten_seconds() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);

        // 8 s remaining, blink phase on (52.0 s elapsed).
        let t_on = now + Duration::from_secs(52);
        let mut frame = Frame::new(COLS, ROWS);
        g.update(t_on);
        g.draw(&mut frame, t_on);
        let cell = frame.get(COLS - 8, ROWS - 1).unwrap();
        assert_eq!(cell.fg, Some(Color::Red));
        assert!(cell.bold);

        // Half a period later the normal color is back.
        let t_off = t_on + Duration::from_millis(500);
        frame.clear();
        g.update(t_off);
        g.draw(&mut frame, t_off);
        assert_eq!(frame.get(COLS - 8, ROWS - 1).unwrap().fg, Some(Color::White));
    }

    #[test]
    fn play_layout_never_shows_a_zero_timer() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);

        // Mid-way through the final second the round is still running; the
        // clock must read 0:01, never 0:00, until the FINAL transition.
        let t = now + Duration::from_millis(59_500);
        g.update(t);
        assert_eq!(g.screen, Screen::Play);

        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, t);
        let timer: String = (COLS - 8..COLS - 4)
            .map(|x| frame.get(x, ROWS - 1).unwrap().ch)
            .collect();
        assert_eq!(timer, "0:01");

        // One whole elapsed minute flips to FINAL on the same arithmetic.
        g.update(now + Duration::from_secs(60));
        assert_eq!(g.screen, Screen::Final);
    }

    #[test]
    fn final_screen_draws_without_crashing_at_zero() {
        let now = Instant::now();
        let mut g = game_with(&["cat"], now);
        start_play(&mut g, now);

        let end = now + Duration::from_secs(60);
        g.update(end);
        assert_eq!(g.screen, Screen::Final);

        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, end);
        let row = ROWS / 2 - 2;
        let rendered: String = (0..COLS)
            .map(|x| frame.get(x, row).unwrap().ch)
            .collect();
        assert!(rendered.contains("Your result is 0w/m"));
    }

    #[test]
    fn welcome_screen_shows_logo_and_prompt() {
        let now = Instant::now();
        let g = game_with(&["cat"], now);
        let mut frame = Frame::new(COLS, ROWS);
        g.draw(&mut frame, now);

        assert_eq!(frame.get(16, 5).unwrap().ch, '_');
        let prompt_row = 5 + LOGO.len() as u16;
        let rendered: String = (0..COLS)
            .map(|x| frame.get(x, prompt_row).unwrap().ch)
            .collect();
        assert!(rendered.contains("<Press SPACE to start>"));
    }
}
