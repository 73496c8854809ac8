use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

/// Identifier for a catalog title (e.g. "19")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleId(pub String);

impl TitleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TitleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Whether a title is a single film or an episodic series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Film,
    Series,
}

/// Structured runtime of a title
///
/// Keeps the catalog's own descriptor ("148 min", "22 min episodes") for
/// display and serialization next to the parsed values used for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    /// Minutes for a film, minutes per episode for a series
    pub minutes: u16,
    pub episodic: bool,
    descriptor: String,
}

impl Runtime {
    pub fn film(minutes: u16) -> Self {
        Self {
            minutes,
            episodic: false,
            descriptor: format!("{} min", minutes),
        }
    }

    pub fn episodes(minutes: u16) -> Self {
        Self {
            minutes,
            episodic: true,
            descriptor: format!("{} min episodes", minutes),
        }
    }

    /// Parses a descriptor such as "148 min" or "22 min episodes".
    ///
    /// A descriptor without a leading integer yields zero minutes; one too
    /// large for `u16` saturates.
    pub fn parse(descriptor: &str) -> Self {
        let trimmed = descriptor.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        let minutes = if digits.is_empty() {
            0
        } else {
            digits.parse::<u16>().unwrap_or(u16::MAX)
        };
        let episodic = trimmed.to_ascii_lowercase().contains("episode");

        Self {
            minutes,
            episodic,
            descriptor: descriptor.to_string(),
        }
    }

    /// The descriptor exactly as the catalog gave it
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.descriptor)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.descriptor)
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let descriptor = String::deserialize(deserializer)?;
        Ok(Runtime::parse(&descriptor))
    }
}

/// A film or series in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub id: TitleId,
    pub name: String,
    pub medium: Medium,
    /// Streaming platforms, in display order
    pub platforms: Vec<String>,
    /// Critical rating, 0-10
    pub rating: f32,
    /// Base suitability score, 0-100, independent of any answers
    pub mood_affinity: u8,
    pub synopsis: String,
    pub trailer_url: String,
    /// Primary spoken language
    pub language: String,
    pub subtitles: Vec<String>,
    pub dubbing: Vec<String>,
    pub poster_url: String,
    pub year: u16,
    pub genres: Vec<String>,
    pub runtime: Runtime,
    /// Why this title is a prototypical fit
    pub rationale: String,
}

impl Title {
    pub fn is_film(&self) -> bool {
        self.medium == Medium::Film
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn has_subtitles(&self, language: &str) -> bool {
        self.subtitles.iter().any(|l| l == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_parse_film() {
        let runtime = Runtime::parse("148 min");
        assert_eq!(runtime, Runtime::film(148));
    }

    #[test]
    fn test_runtime_parse_episodes() {
        let runtime = Runtime::parse("22 min episodes");
        assert_eq!(runtime, Runtime::episodes(22));
    }

    #[test]
    fn test_runtime_parse_without_leading_number() {
        let runtime = Runtime::parse("about two hours");
        assert_eq!(runtime.minutes, 0);
        assert!(!runtime.episodic);
    }

    #[test]
    fn test_runtime_display() {
        assert_eq!(Runtime::film(95).to_string(), "95 min");
        assert_eq!(Runtime::episodes(50).to_string(), "50 min episodes");
    }

    #[test]
    fn test_runtime_serde_uses_descriptor() {
        let json = serde_json::to_string(&Runtime::episodes(47)).unwrap();
        assert_eq!(json, r#""47 min episodes""#);

        let runtime: Runtime = serde_json::from_str(r#""187 min""#).unwrap();
        assert_eq!(runtime, Runtime::film(187));
    }

    #[test]
    fn test_runtime_keeps_free_text_descriptor() {
        for descriptor in ["2h 28m", "Limited series, 6 episodes", "148 min"] {
            let runtime: Runtime = serde_json::from_str(&format!("{:?}", descriptor)).unwrap();
            assert_eq!(runtime.descriptor(), descriptor);
            assert_eq!(serde_json::to_string(&runtime).unwrap(), format!("{:?}", descriptor));
        }

        let runtime = Runtime::parse("Limited series, 6 episodes");
        assert_eq!(runtime.minutes, 0);
        assert!(runtime.episodic);
        assert_eq!(runtime.to_string(), "Limited series, 6 episodes");
    }

    #[test]
    fn test_runtime_parse_saturates_huge_values() {
        let runtime = Runtime::parse("70000 min");
        assert_eq!(runtime.minutes, u16::MAX);
        assert_eq!(runtime.descriptor(), "70000 min");
    }

    #[test]
    fn test_title_id_serde_transparent() {
        let id = TitleId::new("19");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""19""#);
        assert_eq!(format!("{}", id), "19");
    }

    #[test]
    fn test_medium_serialization() {
        assert_eq!(serde_json::to_string(&Medium::Film).unwrap(), r#""film""#);
        assert_eq!(serde_json::to_string(&Medium::Series).unwrap(), r#""series""#);
    }
}
