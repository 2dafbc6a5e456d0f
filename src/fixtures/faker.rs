//! Random sample values for fixtures.

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::constants::fixtures::EARLIEST_SEASON_YEAR;
use crate::parser::slug::capitalize;

const FIRST_NAMES: &[&str] = &[
    "Camille", "Léa", "Manon", "Chloé", "Inès", "Sarah", "Julie", "Alice", "Louise", "Emma",
    "Lucas", "Hugo", "Louis", "Nathan", "Gabriel", "Arthur", "Jules", "Thomas", "Théo", "Paul",
];

const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David", "Bertrand", "Roux",
    "Vincent", "Fournier",
];

const WORDS: &[&str] = &[
    "nuit", "ville", "survivant", "maison", "secret", "ombre", "route", "famille", "silence",
    "feu", "hiver", "frontière", "mémoire", "retour", "colère", "lumière", "forêt", "prison",
    "alliance", "trahison", "refuge", "horde", "promesse", "dernier", "premier", "perdu",
    "sombre", "ancien", "nouveau", "vivant", "mort", "caché", "long", "froid", "rouge", "loin",
    "contre", "avec", "sans", "avant", "après", "toujours", "encore", "jamais", "ensemble",
];

/// Generates plausible-looking sample values from a seeded RNG, so a run can
/// be replayed from its seed.
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn random_digit(&mut self) -> i32 {
        self.rng.random_range(0..=9)
    }

    pub fn year(&mut self) -> i32 {
        let current = chrono::Utc::now().year();
        self.rng.random_range(EARLIEST_SEASON_YEAR..=current)
    }

    pub fn name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Camille");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Martin");
        format!("{first} {last}")
    }

    /// A short capitalised phrase without trailing punctuation.
    pub fn title(&mut self) -> String {
        let count = self.rng.random_range(2..=4);
        capitalize(&self.words(count).join(" "))
    }

    pub fn sentence(&mut self) -> String {
        let count = self.rng.random_range(6..=12);
        format!("{}.", capitalize(&self.words(count).join(" ")))
    }

    /// Sentences appended until the text would exceed `max_chars`.
    pub fn text(&mut self, max_chars: usize) -> String {
        let mut text = self.sentence();
        loop {
            let next = self.sentence();
            if text.chars().count() + 1 + next.chars().count() > max_chars {
                break;
            }
            text.push(' ');
            text.push_str(&next);
        }
        text
    }

    fn words(&mut self, count: usize) -> Vec<&'static str> {
        (0..count)
            .filter_map(|_| WORDS.choose(&mut self.rng).copied())
            .collect()
    }
}
