// Copyright (c) 2026 rezky_nightky

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "catchme", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        short = 'w',
        long = "words",
        default_value = "english.txt",
        help_heading = "GAME",
        help = "Word list file, one target word per line"
    )]
    pub words: PathBuf,

    #[arg(
        short = 'd',
        long = "duration",
        default_value_t = 60,
        help_heading = "GAME",
        help = "Round length in seconds (min 5 max 3600)"
    )]
    pub duration: u64,

    #[arg(
        long = "max-per-row",
        default_value_t = 1,
        help_heading = "GAME",
        help = "Active words allowed on one row (min 1 max 4)"
    )]
    pub max_per_row: u8,

    #[arg(
        long = "fps",
        default_value_t = 30.0,
        help_heading = "GENERAL",
        help = "Target frame rate (min 1 max 240)"
    )]
    pub fps: f64,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the RNG for a reproducible run"
    )]
    pub seed: Option<u64>,

    #[arg(
        short = 'v',
        long = "version",
        help_heading = "HELP",
        help = "Print version"
    )]
    pub version: bool,

    #[arg(
        long = "info",
        help_heading = "HELP",
        help = "Print version and build details"
    )]
    pub info: bool,
}
