use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Language answer that disables language scoring
pub const ANY_LANGUAGE: &str = "Any";

/// One of the five quiz dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// How the user feels right now
    Mood,
    /// How the user wants to feel afterwards
    Feeling,
    Duration,
    /// Who the user is watching with
    Company,
    Language,
}

impl Dimension {
    /// All dimensions, in quiz order
    pub const ALL: [Dimension; 5] = [
        Dimension::Mood,
        Dimension::Feeling,
        Dimension::Duration,
        Dimension::Company,
        Dimension::Language,
    ];

    /// Field name used in requests and error messages
    pub fn field_name(&self) -> &'static str {
        match self {
            Dimension::Mood => "mood",
            Dimension::Feeling => "feeling",
            Dimension::Duration => "duration",
            Dimension::Company => "company",
            Dimension::Language => "language",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Raw quiz answers as submitted by a client, possibly incomplete
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuizAnswersInput {
    pub mood: Option<String>,
    pub feeling: Option<String>,
    pub duration: Option<String>,
    pub company: Option<String>,
    pub language: Option<String>,
}

/// A complete set of quiz answers
///
/// Construction goes through [`QuizAnswers::new`] or `TryFrom<QuizAnswersInput>`,
/// so every value that reaches the scoring engine has all five answers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct QuizAnswers {
    mood: String,
    feeling: String,
    duration: String,
    company: String,
    language: String,
}

impl QuizAnswers {
    pub fn new(
        mood: impl Into<String>,
        feeling: impl Into<String>,
        duration: impl Into<String>,
        company: impl Into<String>,
        language: impl Into<String>,
    ) -> AppResult<Self> {
        QuizAnswersInput {
            mood: Some(mood.into()),
            feeling: Some(feeling.into()),
            duration: Some(duration.into()),
            company: Some(company.into()),
            language: Some(language.into()),
        }
        .try_into()
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn feeling(&self) -> &str {
        &self.feeling
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The answer given for a dimension
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Mood => &self.mood,
            Dimension::Feeling => &self.feeling,
            Dimension::Duration => &self.duration,
            Dimension::Company => &self.company,
            Dimension::Language => &self.language,
        }
    }

    /// True unless the user asked for a specific language
    pub fn accepts_any_language(&self) -> bool {
        self.language == ANY_LANGUAGE
    }
}

fn required(value: Option<String>, dimension: Dimension) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::InvalidAnswers(format!(
            "missing answer for '{}'",
            dimension
        ))),
    }
}

impl TryFrom<QuizAnswersInput> for QuizAnswers {
    type Error = AppError;

    fn try_from(input: QuizAnswersInput) -> AppResult<Self> {
        Ok(Self {
            mood: required(input.mood, Dimension::Mood)?,
            feeling: required(input.feeling, Dimension::Feeling)?,
            duration: required(input.duration, Dimension::Duration)?,
            company: required(input.company, Dimension::Company)?,
            language: required(input.language, Dimension::Language)?,
        })
    }
}
