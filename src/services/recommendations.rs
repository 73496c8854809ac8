use std::collections::HashSet;

use crate::{
    catalog::Catalog,
    models::{Dimension, FactorKind, QuizAnswers, Recommendation, ScoreFactor, Title},
};

/// Maximum number of titles returned by a recommendation request
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Duration answer for sessions under half an hour
pub const SHORT_SESSION: &str = "<30 min";
/// Duration answer for roughly an hour of watching
pub const HOUR_SESSION: &str = "~1 hr";

/// Films longer than this are penalized for an hour-long session
const HOUR_SESSION_MAX_MINUTES: u16 = 120;

/// Mood-specific genre bonuses: (mood, any of these genres, points)
const GENRE_AFFINITIES: &[(&str, &[&str], i32)] = &[
    ("Happy", &["Comedy"], 10),
    ("Stressed", &["Comedy", "Adventure"], 15),
    ("Tired", &["Drama", "Documentary"], 10),
    ("Anxious", &["Comedy"], 20),
    ("Lonely", &["Romance", "Drama"], 15),
    ("Bored", &["Action", "Thriller"], 15),
];

/// Point values for every scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub mood_match: i32,
    pub feeling_match: i32,
    pub duration_match: i32,
    pub company_match: i32,
    pub language_match: i32,
    pub subtitle_match: i32,
    /// Applied (as a negative) when neither audio nor subtitles fit
    pub no_language_support: i32,
    pub short_session_film: i32,
    pub long_film_for_hour: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            mood_match: 25,
            feeling_match: 20,
            duration_match: 15,
            company_match: 10,
            language_match: 15,
            subtitle_match: 5,
            no_language_support: -20,
            short_session_film: -30,
            long_film_for_hour: -20,
        }
    }
}

/// Every contribution to one title's score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub factors: Vec<ScoreFactor>,
}

impl ScoreBreakdown {
    /// Sum of all factors, possibly negative
    pub fn raw(&self) -> i32 {
        self.factors.iter().map(|f| f.points).sum()
    }

    /// Ranking score, clamped at zero
    pub fn total(&self) -> u32 {
        self.raw().max(0) as u32
    }

    /// Display-only match percentage
    ///
    /// Never below the title's base affinity and never above 100.
    pub fn mood_score(&self, title: &Title) -> u8 {
        let base = i32::from(title.mood_affinity);
        self.raw().max(base).min(100) as u8
    }

    fn push(&mut self, kind: FactorKind, points: i32) {
        self.factors.push(ScoreFactor { kind, points });
    }
}

/// Scores one title against a set of answers
pub fn score_title(
    title: &Title,
    answers: &QuizAnswers,
    catalog: &Catalog,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        factors: Vec::with_capacity(8),
    };
    breakdown.push(FactorKind::BaseAffinity, i32::from(title.mood_affinity));

    let index = catalog.index();
    let bucket_bonuses = [
        (Dimension::Mood, FactorKind::MoodMatch, weights.mood_match),
        (Dimension::Feeling, FactorKind::FeelingMatch, weights.feeling_match),
        (Dimension::Duration, FactorKind::DurationMatch, weights.duration_match),
        (Dimension::Company, FactorKind::CompanyMatch, weights.company_match),
    ];
    for (dimension, kind, points) in bucket_bonuses {
        if index.contains(dimension, answers.get(dimension), &title.id) {
            breakdown.push(kind, points);
        }
    }

    if !answers.accepts_any_language() {
        let language = answers.language();
        if title.language == language {
            breakdown.push(FactorKind::LanguageMatch, weights.language_match);
        } else if title.has_subtitles(language) {
            breakdown.push(FactorKind::SubtitleMatch, weights.subtitle_match);
        } else {
            breakdown.push(FactorKind::NoLanguageSupport, weights.no_language_support);
        }
    }

    for (mood, genres, points) in GENRE_AFFINITIES {
        if answers.mood() == *mood && genres.iter().any(|g| title.has_genre(g)) {
            breakdown.push(FactorKind::GenreAffinity, *points);
        }
    }

    if title.is_film() {
        match answers.duration() {
            SHORT_SESSION => {
                breakdown.push(FactorKind::TooLongForShortSession, weights.short_session_film)
            }
            HOUR_SESSION if title.runtime.minutes > HOUR_SESSION_MAX_MINUTES => {
                breakdown.push(FactorKind::TooLongForHourSession, weights.long_film_for_hour)
            }
            _ => {}
        }
    }

    breakdown
}

/// Ranks the catalog for a set of answers using the default weights
///
/// Returns at most [`MAX_RECOMMENDATIONS`] distinct titles, best first.
/// Titles with equal scores keep their catalog order.
pub fn recommend(answers: &QuizAnswers, catalog: &Catalog) -> Vec<Recommendation> {
    recommend_with(answers, catalog, &ScoringWeights::default())
}

/// Ranks the catalog for a set of answers using custom weights
pub fn recommend_with(
    answers: &QuizAnswers,
    catalog: &Catalog,
    weights: &ScoringWeights,
) -> Vec<Recommendation> {
    let mut scored: Vec<(&Title, ScoreBreakdown)> = catalog
        .titles()
        .iter()
        .map(|title| (title, score_title(title, answers, catalog, weights)))
        .collect();

    // Stable sort keeps catalog order among equal scores
    scored.sort_by(|(_, a), (_, b)| b.total().cmp(&a.total()));

    let mut seen = HashSet::new();
    let recommendations: Vec<Recommendation> = scored
        .into_iter()
        .filter(|(title, _)| seen.insert(title.id.clone()))
        .take(MAX_RECOMMENDATIONS)
        .map(|(title, breakdown)| Recommendation {
            mood_score: breakdown.mood_score(title),
            title: title.clone(),
        })
        .collect();

    tracing::debug!(
        mood = answers.mood(),
        feeling = answers.feeling(),
        duration = answers.duration(),
        company = answers.company(),
        language = answers.language(),
        candidates = catalog.len(),
        returned = recommendations.len(),
        "Scored catalog"
    );

    recommendations
}

/// The curated "surprise me" list; ignores quiz answers entirely
pub fn trending(catalog: &Catalog) -> Vec<Recommendation> {
    catalog
        .trending_ids()
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|title| Recommendation {
            mood_score: title.mood_affinity.min(100),
            title: title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin, test_support::title, CategoryIndex};
    use crate::models::{Medium, TitleId};

    fn sample_catalog() -> Catalog {
        Catalog::new(builtin::titles(), builtin::category_index(), builtin::trending()).unwrap()
    }

    fn answers(mood: &str, feeling: &str, duration: &str, company: &str, language: &str) -> QuizAnswers {
        QuizAnswers::new(mood, feeling, duration, company, language).unwrap()
    }

    fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.title.id.as_str()).collect()
    }

    #[test]
    fn test_returns_at_most_six_unique_titles() {
        let catalog = sample_catalog();
        let moods = ["Happy", "Stressed", "Tired", "Anxious", "Lonely", "Bored", "Curious"];
        let durations = ["<30 min", "~1 hr", "2+ hrs", "Binge-ready"];
        let languages = ["Any", "English", "Hindi", "Tamil", "Klingon"];

        for mood in moods {
            for duration in durations {
                for language in languages {
                    let result = recommend(&answers(mood, "Relaxed", duration, "Solo", language), &catalog);
                    assert_eq!(result.len(), MAX_RECOMMENDATIONS);
                    let unique: HashSet<_> = result.iter().map(|r| &r.title.id).collect();
                    assert_eq!(unique.len(), result.len());
                }
            }
        }
    }

    #[test]
    fn test_scores_never_negative() {
        let catalog = sample_catalog();
        let harsh = answers("Curious", "Nostalgic", "<30 min", "Nobody", "Tamil");
        let weights = ScoringWeights::default();

        for title in catalog.titles() {
            let breakdown = score_title(title, &harsh, &catalog, &weights);
            assert_eq!(breakdown.total(), breakdown.raw().max(0) as u32);
            assert!(breakdown.mood_score(title) >= title.mood_affinity.min(100));
        }
    }

    #[test]
    fn test_clamp_applies_when_raw_is_negative() {
        let mut film = title("1", Medium::Film, &["Horror"]);
        film.mood_affinity = 10;
        let catalog = Catalog::new(vec![film], CategoryIndex::default(), vec![]).unwrap();

        let breakdown = score_title(
            &catalog.titles()[0],
            &answers("Happy", "Relaxed", "<30 min", "Solo", "Korean"),
            &catalog,
            &ScoringWeights::default(),
        );
        assert_eq!(breakdown.raw(), 10 - 20 - 30);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_is_deterministic() {
        let catalog = sample_catalog();
        let input = answers("Lonely", "Relaxed", "2+ hrs", "Partner", "Hindi");
        assert_eq!(recommend(&input, &catalog), recommend(&input, &catalog));
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let catalog = Catalog::default();
        let result = recommend(&answers("Happy", "Uplifted", "2+ hrs", "Family", "Any"), &catalog);
        assert!(result.is_empty());
    }

    #[test]
    fn test_short_catalog_returns_everything() {
        let catalog = Catalog::new(
            vec![
                title("1", Medium::Film, &["Drama"]),
                title("2", Medium::Series, &["Comedy"]),
            ],
            CategoryIndex::default(),
            vec![],
        )
        .unwrap();
        let result = recommend(&answers("Happy", "Uplifted", "2+ hrs", "Family", "Any"), &catalog);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_exact_language_outranks_unsupported_language() {
        let mut native = title("native", Medium::Film, &["Drama"]);
        native.language = "Korean".to_string();
        let foreign = title("foreign", Medium::Film, &["Drama"]);

        // Foreign first so catalog order alone would favour it
        let catalog = Catalog::new(vec![foreign, native], CategoryIndex::default(), vec![]).unwrap();
        let input = answers("Happy", "Uplifted", "2+ hrs", "Solo", "Korean");
        let weights = ScoringWeights::default();

        let native_score = score_title(&catalog.titles()[1], &input, &catalog, &weights).total();
        let foreign_score = score_title(&catalog.titles()[0], &input, &catalog, &weights).total();
        assert_eq!(native_score - foreign_score, 35);

        assert_eq!(ids(&recommend(&input, &catalog)), vec!["native", "foreign"]);
    }

    #[test]
    fn test_subtitles_give_partial_credit() {
        let mut subtitled = title("s", Medium::Series, &["Drama"]);
        subtitled.subtitles = vec!["Hindi".to_string()];
        let catalog = Catalog::new(vec![subtitled], CategoryIndex::default(), vec![]).unwrap();

        let breakdown = score_title(
            &catalog.titles()[0],
            &answers("Curious", "Relaxed", "Binge-ready", "Solo", "Hindi"),
            &catalog,
            &ScoringWeights::default(),
        );
        assert!(breakdown
            .factors
            .contains(&ScoreFactor { kind: FactorKind::SubtitleMatch, points: 5 }));
        assert_eq!(breakdown.raw(), 55);
    }

    #[test]
    fn test_any_language_skips_language_scoring() {
        let catalog = Catalog::new(
            vec![title("1", Medium::Series, &["Drama"])],
            CategoryIndex::default(),
            vec![],
        )
        .unwrap();
        let breakdown = score_title(
            &catalog.titles()[0],
            &answers("Curious", "Relaxed", "Binge-ready", "Solo", "Any"),
            &catalog,
            &ScoringWeights::default(),
        );
        assert_eq!(breakdown.factors.len(), 1);
        assert_eq!(breakdown.raw(), 50);
    }

    #[test]
    fn test_short_session_puts_series_ahead_of_equal_film() {
        let film = title("film", Medium::Film, &["Comedy"]);
        let series = title("series", Medium::Series, &["Comedy"]);
        let catalog = Catalog::new(vec![film, series], CategoryIndex::default(), vec![]).unwrap();

        let result = recommend(&answers("Happy", "Uplifted", "<30 min", "Solo", "Any"), &catalog);
        assert_eq!(ids(&result), vec!["series", "film"]);
    }

    #[test]
    fn test_hour_session_penalizes_only_long_films() {
        let mut long_film = title("long", Medium::Film, &["Drama"]);
        long_film.runtime = crate::models::Runtime::film(121);
        let mut short_film = title("short", Medium::Film, &["Drama"]);
        short_film.runtime = crate::models::Runtime::film(120);
        let catalog =
            Catalog::new(vec![long_film, short_film], CategoryIndex::default(), vec![]).unwrap();
        let input = answers("Curious", "Relaxed", "~1 hr", "Solo", "Any");
        let weights = ScoringWeights::default();

        assert_eq!(score_title(&catalog.titles()[0], &input, &catalog, &weights).raw(), 30);
        assert_eq!(score_title(&catalog.titles()[1], &input, &catalog, &weights).raw(), 50);
    }

    #[test]
    fn test_unparsed_runtime_is_not_penalized() {
        let mut film = title("odd", Medium::Film, &["Drama"]);
        film.runtime = crate::models::Runtime::parse("feature length");
        let catalog = Catalog::new(vec![film], CategoryIndex::default(), vec![]).unwrap();

        let breakdown = score_title(
            &catalog.titles()[0],
            &answers("Curious", "Relaxed", "~1 hr", "Solo", "Any"),
            &catalog,
            &ScoringWeights::default(),
        );
        assert_eq!(breakdown.raw(), 50);
    }

    #[test]
    fn test_oversized_runtime_still_penalized_for_hour_session() {
        let mut film = title("epic", Medium::Film, &["Drama"]);
        film.runtime = crate::models::Runtime::parse("70000 min");
        let catalog = Catalog::new(vec![film], CategoryIndex::default(), vec![]).unwrap();

        let breakdown = score_title(
            &catalog.titles()[0],
            &answers("Curious", "Relaxed", "~1 hr", "Solo", "Any"),
            &catalog,
            &ScoringWeights::default(),
        );
        assert_eq!(breakdown.raw(), 30);
    }

    #[test]
    fn test_genre_and_bucket_bonuses_stack() {
        let catalog = sample_catalog();
        let friends = catalog.get(&TitleId::new("27")).unwrap();
        let breakdown = score_title(
            friends,
            &answers("Anxious", "Relaxed", "<30 min", "Friends", "Any"),
            &catalog,
            &ScoringWeights::default(),
        );
        // 94 base + 25 mood + 15 duration + 10 company + 20 anxious comedy
        assert_eq!(breakdown.raw(), 164);
    }

    #[test]
    fn test_bucket_with_unknown_id_is_ignored() {
        let mut index = CategoryIndex::default();
        index.insert(Dimension::Mood, "Happy", TitleId::new("ghost"));
        let catalog = Catalog::new(
            vec![title("1", Medium::Series, &["Drama"])],
            index,
            vec![],
        )
        .unwrap();

        let result = recommend(&answers("Happy", "Uplifted", "2+ hrs", "Family", "Any"), &catalog);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_bored_binge_scenario_favours_action_thrillers() {
        let catalog = sample_catalog();
        let result = recommend(
            &answers("Bored", "Mind-blown", "Binge-ready", "Friends", "Any"),
            &catalog,
        );

        // Money Heist (17) sits in every matching bucket plus the thriller bonus
        assert_eq!(result[0].title.id.as_str(), "17");
        let top_three = &ids(&result)[..3];
        assert!(top_three.contains(&"16"));
        assert!(top_three.contains(&"23"));
        for recommendation in &result[..3] {
            assert!(catalog
                .index()
                .contains(Dimension::Duration, "Binge-ready", &recommendation.title.id));
        }
    }

    #[test]
    fn test_uncovered_language_still_returns_six() {
        let catalog = sample_catalog();
        let input = answers("Tired", "Relaxed", "~1 hr", "Solo", "Tamil");
        let result = recommend(&input, &catalog);

        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
        let weights = ScoringWeights::default();
        for recommendation in &result {
            let breakdown = score_title(&recommendation.title, &input, &catalog, &weights);
            assert!(breakdown.total() > 0);
            assert!(recommendation.mood_score <= 100);
        }
    }

    #[test]
    fn test_mood_score_is_capped_display_value() {
        let catalog = sample_catalog();
        let result = recommend(&answers("Happy", "Uplifted", "2+ hrs", "Family", "Any"), &catalog);
        // Kantara: 96 base + 25 + 20 + 15 lands well over 100
        let kantara = result.iter().find(|r| r.title.id.as_str() == "1").unwrap();
        assert_eq!(kantara.mood_score, 100);
        assert!(result.iter().all(|r| r.mood_score >= r.title.mood_affinity.min(100)));
    }

    #[test]
    fn test_custom_weights_change_ranking() {
        let catalog = Catalog::new(
            vec![
                title("funny", Medium::Series, &["Comedy"]),
                title("plain", Medium::Series, &["Drama"]),
            ],
            {
                let mut index = CategoryIndex::default();
                index.insert(Dimension::Company, "Solo", TitleId::new("plain"));
                index
            },
            vec![],
        )
        .unwrap();
        let input = answers("Curious", "Relaxed", "Binge-ready", "Solo", "Any");

        assert_eq!(ids(&recommend(&input, &catalog)), vec!["plain", "funny"]);

        let weights = ScoringWeights {
            company_match: 0,
            ..ScoringWeights::default()
        };
        // Tie now resolved by catalog order
        assert_eq!(ids(&recommend_with(&input, &catalog, &weights)), vec!["funny", "plain"]);
    }

    #[test]
    fn test_trending_ignores_answers() {
        let catalog = sample_catalog();
        let result = trending(&catalog);
        assert_eq!(ids(&result), vec!["1", "2", "19", "20", "4", "21"]);
    }

    #[test]
    fn test_trending_skips_unknown_ids() {
        let catalog = Catalog::new(
            vec![title("1", Medium::Film, &["Drama"])],
            CategoryIndex::default(),
            vec![TitleId::new("missing"), TitleId::new("1")],
        )
        .unwrap();
        assert_eq!(ids(&trending(&catalog)), vec!["1"]);
    }
}
