// Copyright (c) 2026 rezky_nightky

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one target word per line. A missing or unreadable file yields an
/// empty pool: the game still runs, nothing ever spawns.
pub fn load_words(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Vec::new(),
    };

    BufReader::new(file)
        .lines()
        .map_while(|line| line.ok())
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
