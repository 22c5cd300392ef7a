/// CLI argument parsing and the one-shot (non-TUI) mode.
use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::RngExt;

use crate::color::{Color, Tone};
use crate::theme::ThemeTable;

pub const DEFAULT_SWATCHES: usize = 5;
pub const MAX_SWATCHES: usize = 8;

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - a terminal color palette generator"
)]
pub struct Cli {
    /// Theme hint biasing the first swatch (e.g. "gaming", "fintech startup")
    #[arg(short = 't', long = "hint")]
    pub hint: Option<String>,

    /// Number of swatches in the palette
    #[arg(short = 'n', long = "swatches", default_value_t = DEFAULT_SWATCHES)]
    pub swatches: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one generated palette to stdout and exit
    Palette {
        /// Theme hint biasing the first color
        #[arg(short = 't', long = "hint")]
        hint: Option<String>,
        /// Number of colors to print
        #[arg(short = 'n', long = "swatches", default_value_t = DEFAULT_SWATCHES)]
        swatches: usize,
    },
}

pub fn clamp_swatches(count: usize) -> usize {
    count.clamp(1, MAX_SWATCHES)
}

/// Execute a CLI subcommand without entering the TUI.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Palette { hint, swatches } => {
            let mut rng = rand::rng();
            for line in palette_lines(hint.as_deref(), clamp_swatches(swatches), &mut rng) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// One line per color: the hex code plus the overlay tone that keeps text
/// readable on it.
fn palette_lines<R: RngExt>(hint: Option<&str>, count: usize, rng: &mut R) -> Vec<String> {
    let table = ThemeTable::builtin();
    let starter = hint.and_then(|h| table.resolve(h, rng));
    (0..count)
        .map(|index| {
            let color = match starter {
                Some(color) if index == 0 => color,
                _ => Color::random(rng),
            };
            let overlay = match color.tone() {
                Tone::Light => "white text",
                Tone::Dark => "black text",
            };
            format!("{color}  ({overlay})")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn palette_lines_start_with_hex_codes() {
        let mut rng = StdRng::seed_from_u64(21);
        let lines = palette_lines(None, 4, &mut rng);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(Color::parse(&line[..7]).is_some(), "bad line: {line}");
        }
    }

    #[test]
    fn hinted_palette_starts_from_the_matched_theme() {
        let mut rng = StdRng::seed_from_u64(22);
        let lines = palette_lines(Some("gaming app"), 3, &mut rng);
        let first = &lines[0][..7];
        assert!(["#8B5CF6", "#F43F5E", "#14B8A6"].contains(&first));
    }

    #[test]
    fn swatch_count_is_clamped() {
        assert_eq!(clamp_swatches(0), 1);
        assert_eq!(clamp_swatches(5), 5);
        assert_eq!(clamp_swatches(64), MAX_SWATCHES);
    }
}
