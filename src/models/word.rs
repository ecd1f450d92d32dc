use serde::{Deserialize, Serialize};

/// A pair of related secret words; civilians get one, undercovers the other.
/// `relationship` is flavour text for the reveal screen and has no effect on
/// the rules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordPair {
    pub civilian_word: String,
    pub undercover_word: String,
    pub relationship: String,
}

impl WordPair {
    pub fn new(
        civilian_word: impl Into<String>,
        undercover_word: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            civilian_word: civilian_word.into(),
            undercover_word: undercover_word.into(),
            relationship: relationship.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
