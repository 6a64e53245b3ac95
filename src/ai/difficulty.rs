use std::fmt;

use super::rules::Rule;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random legal column
    Easy,
    /// Wins or blocks when it can, otherwise random
    #[default]
    Medium,
    /// Full rule cascade before falling back to random
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Rules tried in priority order before the random fallback
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Difficulty::Easy => &[],
            Difficulty::Medium => &[Rule::Win, Rule::BlockWin],
            Difficulty::Hard => &Rule::CASCADE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
