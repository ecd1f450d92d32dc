//! Built-in word pairs, used whenever remote generation is unavailable.
//! Thirty pairs, ten per difficulty tier, easiest first.

use once_cell::sync::Lazy;
use rand::Rng;

use crate::models::word::{Difficulty, WordPair};

const TIER_SIZE: usize = 10;

pub static FALLBACK_WORDS: Lazy<Vec<WordPair>> = Lazy::new(|| {
    vec![
        // Easy
        WordPair::new("Book", "Novel", "Both are reading materials, but one is general and one is specific"),
        WordPair::new("Tea", "Coffee", "Both are hot beverages"),
        WordPair::new("Dog", "Cat", "Both are common pets"),
        WordPair::new("Sun", "Moon", "Both are celestial bodies"),
        WordPair::new("Hot", "Cold", "Temperature opposites"),
        WordPair::new("Water", "Juice", "Both are liquids to drink"),
        WordPair::new("Bread", "Toast", "Both are baked goods"),
        WordPair::new("Flower", "Rose", "General vs specific flower"),
        WordPair::new("Tree", "Forest", "Single tree vs collection of trees"),
        WordPair::new("Rain", "Storm", "Both are weather phenomena"),
        // Medium
        WordPair::new("Doctor", "Nurse", "Both are medical professionals"),
        WordPair::new("Train", "Metro", "Both are rail transport systems"),
        WordPair::new("Television", "Cinema", "Both are visual entertainment mediums"),
        WordPair::new("Castle", "Palace", "Both are royal structures"),
        WordPair::new("River", "Ocean", "Both are water bodies"),
        WordPair::new("Airplane", "Helicopter", "Both are aircraft"),
        WordPair::new("Music", "Song", "General vs specific musical expression"),
        WordPair::new("Game", "Match", "General sport vs specific game event"),
        WordPair::new("Medicine", "Pill", "Both are medical treatments"),
        WordPair::new("Wedding", "Marriage", "Both are relationship celebrations"),
        // Hard
        WordPair::new("Justice", "Fairness", "Similar legal and moral concepts"),
        WordPair::new("Freedom", "Liberty", "Similar concepts of independence"),
        WordPair::new("Courage", "Bravery", "Same meaning - being brave"),
        WordPair::new("Knowledge", "Wisdom", "Information vs applied knowledge"),
        WordPair::new("Love", "Romance", "General love vs romantic love"),
        WordPair::new("Art", "Painting", "General art vs specific art form"),
        WordPair::new("Science", "Physics", "General science vs specific science"),
        WordPair::new("History", "Heritage", "Past events vs cultural legacy"),
        WordPair::new("Education", "School", "Process vs institution"),
        WordPair::new("Religion", "Faith", "Organized belief vs personal belief"),
    ]
});

fn tier(difficulty: Option<Difficulty>) -> &'static [WordPair] {
    match difficulty {
        Some(Difficulty::Easy) => &FALLBACK_WORDS[..TIER_SIZE],
        Some(Difficulty::Medium) => &FALLBACK_WORDS[TIER_SIZE..2 * TIER_SIZE],
        Some(Difficulty::Hard) => &FALLBACK_WORDS[2 * TIER_SIZE..],
        None => &FALLBACK_WORDS,
    }
}

/// Uniform pick from the requested tier, or from the whole list when no
/// difficulty is given. Always succeeds.
pub fn random_pair<R: Rng>(difficulty: Option<Difficulty>, rng: &mut R) -> WordPair {
    let pool = tier(difficulty);
    pool[rng.gen_range(0..pool.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn carries_ten_pairs_per_tier() {
        assert_eq!(FALLBACK_WORDS.len(), 3 * TIER_SIZE);
        assert_eq!(tier(Some(Difficulty::Easy)).len(), TIER_SIZE);
        assert_eq!(tier(Some(Difficulty::Medium)).len(), TIER_SIZE);
        assert_eq!(tier(Some(Difficulty::Hard)).len(), TIER_SIZE);
    }

    #[test]
    fn picks_stay_inside_the_requested_tier() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let picked = random_pair(Some(Difficulty::Hard), &mut rng);
            assert!(tier(Some(Difficulty::Hard)).contains(&picked));
        }
    }

    #[test]
    fn no_difficulty_draws_from_the_whole_list() {
        let mut rng = StdRng::seed_from_u64(12);
        let picked = random_pair(None, &mut rng);
        assert!(FALLBACK_WORDS.contains(&picked));
    }

    #[test]
    fn pairs_have_distinct_words() {
        for word_pair in FALLBACK_WORDS.iter() {
            assert_ne!(word_pair.civilian_word, word_pair.undercover_word);
            assert!(!word_pair.relationship.is_empty());
        }
    }
}
