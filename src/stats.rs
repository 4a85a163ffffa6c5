//! Solved-problem statistics model and response classification.

use serde::Deserialize;

/// Per-difficulty problem statistics as returned by the stats provider.
/// Fields the provider omits default to zero, matching the provider's
/// loosely specified payload shape.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStats {
    pub status: String,
    pub total_solved: u64,
    pub ranking: u64,
    pub easy_solved: u64,
    pub total_easy: u64,
    pub medium_solved: u64,
    pub total_medium: u64,
    pub hard_solved: u64,
    pub total_hard: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl UserStats {
    /// (solved, total) pair for one difficulty category.
    pub fn solved_pair(&self, difficulty: Difficulty) -> (u64, u64) {
        match difficulty {
            Difficulty::Easy => (self.easy_solved, self.total_easy),
            Difficulty::Medium => (self.medium_solved, self.total_medium),
            Difficulty::Hard => (self.hard_solved, self.total_hard),
        }
    }
}

/// The two terminal error states a fetch can end in. Both are cleared only
/// by the next fetch; there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The provider answered with `status: "error"`.
    NotFound,
    /// Transport failure or a body that does not parse as JSON.
    FetchFailed,
}

impl FetchError {
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "User not found",
            Self::FetchFailed => "Failed to fetch data",
        }
    }
}

/// Classify a provider response body.
///
/// A parsed body with `status == "error"` means the username is unknown.
/// Any other parsed body is taken wholesale as the user's statistics; no
/// cross-field validation is performed (a provider payload where
/// `solved > total` flows through untouched). A body that is not JSON at
/// all collapses into the generic fetch failure.
pub fn classify_response(body: &str) -> Result<UserStats, FetchError> {
    let stats: UserStats = serde_json::from_str(body).map_err(|e| {
        log::debug!("Response body did not parse as JSON: {}", e);
        FetchError::FetchFailed
    })?;
    if stats.status == "error" {
        return Err(FetchError::NotFound);
    }
    Ok(stats)
}
