use rand::Rng;
use rand::seq::SliceRandom;
use wordmaze_core::{DifficultyConfig, DifficultyParams, TargetWords, Tier};

const EASY_WORDS: &[&str] = &[
    "CAT", "DOG", "SUN", "RUN", "BIG", "RED", "FUN", "JOY", "KEY", "SKY", "ART", "BED", "BOX",
    "BOY", "BUS", "CAN", "CAR", "CUP", "CUT", "DAY", "EAR", "EAT", "EGG", "END", "EYE", "FLY",
    "FOG", "FOR", "GET", "GUY", "HAT", "HEN", "HER", "HIM", "HIS", "HOT", "ICE", "INK", "JAM",
    "JAR",
];

const MEDIUM_WORDS: &[&str] = &[
    "APPLE", "BEACH", "BRAIN", "CHAIR", "DANCE", "EARTH", "FRUIT", "GHOST", "HAPPY", "LIGHT",
    "MAGIC", "MONEY", "MUSIC", "NIGHT", "OCEAN", "PARTY", "PIZZA", "PLANT", "QUIET", "RIVER",
    "ANGEL", "BREAD", "BRICK", "CLOUD", "COAST", "CYCLE", "DREAM", "DRINK", "EAGLE", "FIELD",
    "FLAME", "FLOWER", "FOREST", "GREEN", "GUARD", "HEART", "HONEY", "HORSE", "HOTEL", "HOUSE",
    "IMAGE", "ISLAND", "JELLY", "JUICE", "JUNGLE", "KNIFE", "LEMON", "LUNCH", "MAPLE", "MONTH",
];

const HARD_WORDS: &[&str] = &[
    "ADVENTURE", "BEAUTIFUL", "CHALLENGE", "COMPUTER", "CREATIVE", "DANGEROUS", "EDUCATION",
    "EXCELLENT", "FANTASY", "FREEDOM", "GENEROUS", "HAPPINESS", "IMAGINE", "JOURNEY", "KNOWLEDGE",
    "LIBRARY", "MYSTERY", "PERFECT", "QUESTION", "SCIENCE", "SUCCESS", "THOUGHT", "TREASURE",
    "VICTORY", "WONDERFUL", "ABSOLUTE", "ACCIDENT", "ACTIVITY", "AMAZING", "ANYTHING", "AUDIENCE",
    "AUTHORITY", "AVAILABLE", "BACKGROUND", "BEHAVIOR", "BUSINESS", "CALENDAR", "CAPACITY",
    "CATEGORY", "CHEMICAL", "CHILDHOOD", "CHOCOLATE", "COMMUNITY", "COMPANY", "COMPETENT",
    "CONDITION", "CONSCIOUS", "CONSIDER", "CONSTANT", "LANGUAGE", "LEADER", "MACHINE", "MAGAZINE",
    "MANAGER", "MARKET",
];

/// Built-in word pools, one per tier, with the stock grid presets.
#[derive(Copy, Clone, Debug, Default)]
pub struct WordBank;

impl WordBank {
    pub fn pool(tier: Tier) -> &'static [&'static str] {
        match tier {
            Tier::Easy => EASY_WORDS,
            Tier::Medium => MEDIUM_WORDS,
            Tier::Hard => HARD_WORDS,
        }
    }
}

impl DifficultyConfig for WordBank {
    fn params(&self, tier: Tier) -> DifficultyParams {
        DifficultyParams::preset(tier)
    }

    /// Pool words within the tier's length bounds, shuffled, first `word_count` of them.
    fn select_words<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> TargetWords {
        let params = self.params(tier);
        let mut words: Vec<&str> = Self::pool(tier)
            .iter()
            .copied()
            .filter(|word| params.accepts_word(word))
            .collect();
        words.shuffle(rng);
        words.truncate(usize::from(params.word_count));

        if words.len() < usize::from(params.word_count) {
            log::warn!(
                "Only {} {tier} words available, wanted {}",
                words.len(),
                params.word_count
            );
        }

        TargetWords::new(words).unwrap_or_else(|err| {
            log::error!("Unusable {tier} word pool: {err}");
            TargetWords::default()
        })
    }
}
