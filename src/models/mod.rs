use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod quiz;
pub mod title;

pub use quiz::{Dimension, QuizAnswers, QuizAnswersInput, ANY_LANGUAGE};
pub use title::{Medium, Runtime, Title, TitleId};

/// A ranked title returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(flatten)]
    pub title: Title,
    /// Display-only match percentage, 0-100
    pub mood_score: u8,
}

// ============================================================================
// Explanation Types
// ============================================================================

/// What contributed to a title's score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    BaseAffinity,
    MoodMatch,
    FeelingMatch,
    DurationMatch,
    CompanyMatch,
    LanguageMatch,
    SubtitleMatch,
    NoLanguageSupport,
    GenreAffinity,
    TooLongForShortSession,
    TooLongForHourSession,
}

/// A single scoring contribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreFactor {
    pub kind: FactorKind,
    pub points: i32,
}

/// "Why this" details for a title against a set of answers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Explanation {
    pub title_id: TitleId,
    pub name: String,
    pub rationale: String,
    pub mood_score: u8,
    pub rating: f32,
    pub genres: Vec<String>,
    pub language: String,
    pub subtitles: Vec<String>,
    pub runtime: Runtime,
    /// Ranking score after clamping
    pub total_score: u32,
    pub factors: Vec<ScoreFactor>,
}

// ============================================================================
// Watch Together Types
// ============================================================================

/// Mock watch-together session; nothing is registered server-side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchSession {
    pub code: String,
    pub share_url: String,
    pub title_id: TitleId,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to start a watch-together session
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub title_id: TitleId,
}

// ============================================================================
// Quiz Definition Types
// ============================================================================

/// One selectable answer in the quiz
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizOption {
    pub value: String,
    pub emoji: String,
    /// Names of titles from this option's category bucket
    pub samples: Vec<String>,
}

/// A quiz question bound to one dimension
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    pub dimension: Dimension,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}
