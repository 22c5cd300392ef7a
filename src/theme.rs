/// Keyword-to-palette lookup used to bias the first swatch.
use rand::RngExt;

use crate::color::Color;

/// One keyword and its three starter colors.
pub struct ThemeEntry {
    pub keyword: &'static str,
    pub palette: [Color; 3],
}

/// Ordered keyword table. Declaration order is the tie-break rule when an
/// input contains several keywords (first match wins), so this must stay a
/// sequence and never become a hash map.
pub struct ThemeTable {
    entries: Vec<ThemeEntry>,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

impl ThemeTable {
    /// The built-in table. Keywords are lowercase; inputs are normalized
    /// before matching.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                // professional / trustworthy
                ThemeEntry {
                    keyword: "finance",
                    palette: [rgb(0x1E, 0x3A, 0x8A), rgb(0x06, 0x5F, 0x46), rgb(0x10, 0xB9, 0x81)],
                },
                ThemeEntry {
                    keyword: "tech",
                    palette: [rgb(0x3B, 0x82, 0xF6), rgb(0x63, 0x66, 0xF1), rgb(0x14, 0xB8, 0xA6)],
                },
                ThemeEntry {
                    keyword: "startup",
                    palette: [rgb(0x3B, 0x82, 0xF6), rgb(0x63, 0x66, 0xF1), rgb(0x14, 0xB8, 0xA6)],
                },
                ThemeEntry {
                    keyword: "ecommerce",
                    palette: [rgb(0xFB, 0xBF, 0x24), rgb(0xEF, 0x44, 0x44), rgb(0x93, 0x33, 0xEA)],
                },
                ThemeEntry {
                    keyword: "retail",
                    palette: [rgb(0xFB, 0xBF, 0x24), rgb(0xEF, 0x44, 0x44), rgb(0x93, 0x33, 0xEA)],
                },
                // active / health / nature
                ThemeEntry {
                    keyword: "fitness",
                    palette: [rgb(0xEF, 0x44, 0x44), rgb(0x10, 0xB9, 0x81), rgb(0xF5, 0x9E, 0x0B)],
                },
                ThemeEntry {
                    keyword: "health",
                    palette: [rgb(0x06, 0x5F, 0x46), rgb(0x10, 0xB9, 0x81), rgb(0x34, 0xD3, 0x99)],
                },
                ThemeEntry {
                    keyword: "nature",
                    palette: [rgb(0x06, 0x5F, 0x46), rgb(0x10, 0xB9, 0x81), rgb(0x34, 0xD3, 0x99)],
                },
                // creative / fun
                ThemeEntry {
                    keyword: "gaming",
                    palette: [rgb(0x8B, 0x5C, 0xF6), rgb(0xF4, 0x3F, 0x5E), rgb(0x14, 0xB8, 0xA6)],
                },
                ThemeEntry {
                    keyword: "art",
                    palette: [rgb(0xEC, 0x48, 0x99), rgb(0xF9, 0x73, 0x16), rgb(0x6D, 0x28, 0xD9)],
                },
            ],
        }
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    /// Find the palette for the first keyword contained in `input`, if any.
    pub fn matched_entry(&self, input: &str) -> Option<&ThemeEntry> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| normalized.contains(entry.keyword))
    }

    /// Resolve a free-text hint to a starter color: first matching keyword
    /// wins, then one of its three colors is picked at random. `None` when
    /// nothing matches.
    pub fn resolve<R: RngExt>(&self, input: &str, rng: &mut R) -> Option<Color> {
        let entry = self.matched_entry(input)?;
        Some(entry.palette[rng.random_range(0..entry.palette.len())])
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn first_declared_keyword_wins() {
        let table = ThemeTable::builtin();
        // "fintech startup" contains both tech and startup as substrings
        // (not finance); tech is declared first, so its palette must be
        // the one picked from.
        let entry = table.matched_entry("Fintech Startup").unwrap();
        assert_eq!(entry.keyword, "tech");

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let color = table.resolve("Fintech Startup", &mut rng).unwrap();
            assert!(entry.palette.contains(&color), "{color} not in tech palette");
        }
    }

    #[test]
    fn matching_is_case_insensitive_and_trims() {
        let table = ThemeTable::builtin();
        assert_eq!(table.matched_entry("  GAMING app  ").unwrap().keyword, "gaming");
        assert_eq!(table.matched_entry("Art portfolio").unwrap().keyword, "art");
    }

    #[test]
    fn unmatched_inputs_resolve_to_none() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        assert!(table.resolve("", &mut rng).is_none());
        assert!(table.resolve("  ", &mut rng).is_none());
        assert!(table.resolve("potato", &mut rng).is_none());
    }

    #[test]
    fn every_entry_has_three_colors_and_lowercase_keyword() {
        let table = ThemeTable::builtin();
        assert!(!table.entries().is_empty());
        for entry in table.entries() {
            assert_eq!(entry.palette.len(), 3);
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
        }
    }

    #[test]
    fn resolve_eventually_returns_each_palette_color() {
        let table = ThemeTable::builtin();
        let entry = table.matched_entry("gaming").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let color = table.resolve("gaming", &mut rng).unwrap();
            let index = entry.palette.iter().position(|c| *c == color).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
