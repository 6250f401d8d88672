use serde::{Deserialize, Serialize};

use super::Comment;

/// A single user's stance on a comment, as understood by the toggle endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    #[default]
    Neutral,
    Like,
    Dislike,
}

impl Reaction {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ToggleReactionRequest {
    pub action: Reaction,
    pub previous_action: Reaction,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReactionOutcome {
    pub comment: Comment,
    #[serde(rename = "user_action")]
    pub applied: Reaction,
    pub likes: i64,
}
