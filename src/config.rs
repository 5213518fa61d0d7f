// Command-line configuration for the latte-art window.

use crate::stroke::FoamConfig;
use crate::types::Color;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "latte-art", version, about = "Pour latte art onto a software canvas")]
pub struct Config {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Maximum foam diameter a pour grows to.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub brush_size: u32,

    /// Foam diameter at the start of every pour.
    #[arg(long, default_value_t = 3)]
    pub min_brush_size: u32,

    /// Growth per second, as a fraction of the brush size.
    #[arg(long, default_value_t = 1.5)]
    pub expansion_rate: f32,

    /// Initial milk colour.
    #[arg(long, default_value = "#ffffff")]
    pub color: Color,

    /// Espresso colour used when clearing the cup.
    #[arg(long, default_value = "#654321")]
    pub background: Color,

    /// Directory PNG exports are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log stroke and frame details.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    pub fn foam(&self) -> FoamConfig {
        FoamConfig {
            min_brush_size: self.min_brush_size,
            max_brush_size: self.brush_size,
            expansion_rate: self.expansion_rate,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ESPRESSO, MILK};

    #[test]
    fn defaults_match_the_cafe() {
        let cfg = Config::try_parse_from(["latte-art"]).unwrap();
        assert_eq!((cfg.width, cfg.height), (600, 400));
        assert_eq!(cfg.color, MILK);
        assert_eq!(cfg.background, ESPRESSO);
        assert_eq!(cfg.foam(), FoamConfig::default());
        assert_eq!(cfg.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn parses_overrides() {
        let cfg = Config::try_parse_from([
            "latte-art",
            "--width",
            "320",
            "--brush-size",
            "12",
            "--color",
            "#c68e52",
            "-v",
        ])
        .unwrap();
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.foam().max_brush_size, 12);
        assert_eq!(cfg.color, Color::rgb(198, 142, 82));
        assert_eq!(cfg.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_parse_from(["latte-art", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["latte-art", "--brush-size", "101"]).is_err());
        assert!(Config::try_parse_from(["latte-art", "--color", "brown"]).is_err());
        assert!(Config::try_parse_from(["latte-art", "-v", "-q"]).is_err());
    }
}
