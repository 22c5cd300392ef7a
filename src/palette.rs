/// The swatch row and its refresh/lock semantics.
use rand::RngExt;

use crate::color::{Color, Tone};
use crate::theme::ThemeTable;

/// One palette slot: its color, the derived overlay tone, and whether it
/// is excluded from refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub tone: Tone,
    pub locked: bool,
}

impl Swatch {
    fn with_color(color: Color) -> Self {
        Self {
            color,
            tone: color.tone(),
            locked: false,
        }
    }

    fn assign(&mut self, color: Color) {
        self.color = color;
        self.tone = color.tone();
    }
}

/// Fixed-length ordered row of swatches. Slots are mutated in place and
/// never added or removed during a session.
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn new<R: RngExt>(count: usize, rng: &mut R) -> Self {
        let swatches = (0..count)
            .map(|_| Swatch::with_color(Color::random(rng)))
            .collect();
        Self { swatches }
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// Re-color every unlocked swatch. The theme hint is resolved once per
    /// call; a match lands on swatch 0, everything else (and swatch 0
    /// without a match) gets a fresh random color. Locked swatches are
    /// skipped entirely, keeping both their color and their tone.
    pub fn refresh<R: RngExt>(&mut self, hint: Option<&str>, table: &ThemeTable, rng: &mut R) {
        let starter = hint.and_then(|h| table.resolve(h, rng));
        for (index, swatch) in self.swatches.iter_mut().enumerate() {
            if swatch.locked {
                continue;
            }
            let color = match starter {
                Some(color) if index == 0 => color,
                _ => Color::random(rng),
            };
            swatch.assign(color);
        }
    }

    /// Flip a swatch between Unlocked and Locked. Out-of-range indices are
    /// ignored.
    pub fn toggle_lock(&mut self, index: usize) {
        if let Some(swatch) = self.swatches.get_mut(index) {
            swatch.locked = !swatch.locked;
        }
    }

    #[cfg(test)]
    fn set(&mut self, index: usize, color: Color) {
        self.swatches[index].assign(color);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const GAMING: [&str; 3] = ["#8B5CF6", "#F43F5E", "#14B8A6"];

    #[test]
    fn themed_refresh_biases_only_the_first_swatch() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let mut palette = Palette::new(3, &mut rng);

        palette.refresh(Some("gaming app"), &table, &mut rng);

        let first = palette.get(0).unwrap();
        assert!(GAMING.contains(&first.color.to_string().as_str()));
        for swatch in palette.iter() {
            assert_eq!(swatch.tone, swatch.color.tone());
        }
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn refresh_without_hint_is_fully_random() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(12);
        let mut palette = Palette::new(4, &mut rng);

        let before: Vec<_> = palette.iter().copied().collect();
        palette.refresh(None, &table, &mut rng);
        // With a 24-bit space, four slots all repeating is not a plausible
        // seeded outcome.
        assert!(
            palette
                .iter()
                .zip(&before)
                .any(|(now, then)| now.color != then.color)
        );
        for swatch in palette.iter() {
            assert_eq!(swatch.tone, swatch.color.tone());
        }
    }

    #[test]
    fn unmatched_hint_falls_back_to_random_on_swatch_zero() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(13);
        let mut palette = Palette::new(1, &mut rng);
        // No keyword matches, so swatch 0 must not be pinned to any theme
        // palette across repeated refreshes.
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..20 {
            palette.refresh(Some("potato"), &table, &mut rng);
            distinct.insert(palette.get(0).unwrap().color.to_string());
        }
        assert!(distinct.len() > 3);
    }

    #[test]
    fn locked_swatch_keeps_color_and_tone() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(14);
        let mut palette = Palette::new(3, &mut rng);

        let pinned = Color::parse("#123456").unwrap();
        palette.set(1, pinned);
        palette.toggle_lock(1);
        let tone_at_lock = palette.get(1).unwrap().tone;

        for _ in 0..10 {
            palette.refresh(Some("gaming app"), &table, &mut rng);
            let locked = palette.get(1).unwrap();
            assert_eq!(locked.color, pinned);
            assert_eq!(locked.tone, tone_at_lock);
        }
    }

    #[test]
    fn refresh_is_a_no_op_when_everything_is_locked() {
        let table = ThemeTable::builtin();
        let mut rng = StdRng::seed_from_u64(15);
        let mut palette = Palette::new(5, &mut rng);
        for index in 0..palette.len() {
            palette.toggle_lock(index);
        }

        let frozen: Vec<_> = palette.iter().copied().collect();
        for _ in 0..25 {
            palette.refresh(Some("fitness studio"), &table, &mut rng);
        }
        assert_eq!(palette.iter().copied().collect::<Vec<_>>(), frozen);
    }

    #[test]
    fn toggle_lock_flips_state_and_ignores_out_of_range() {
        let mut rng = StdRng::seed_from_u64(16);
        let mut palette = Palette::new(2, &mut rng);
        assert!(!palette.get(0).unwrap().locked);
        palette.toggle_lock(0);
        assert!(palette.get(0).unwrap().locked);
        palette.toggle_lock(0);
        assert!(!palette.get(0).unwrap().locked);
        palette.toggle_lock(99);
    }
}
