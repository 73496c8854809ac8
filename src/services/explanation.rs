use crate::{
    catalog::Catalog,
    models::{Explanation, QuizAnswers, Title},
    services::recommendations::{score_title, ScoringWeights},
};

/// Builds the "why this" view for a title
///
/// Combines the title's curated rationale with the exact factors that
/// produced its score for these answers.
pub fn explain(
    title: &Title,
    answers: &QuizAnswers,
    catalog: &Catalog,
    weights: &ScoringWeights,
) -> Explanation {
    let breakdown = score_title(title, answers, catalog, weights);

    Explanation {
        title_id: title.id.clone(),
        name: title.name.clone(),
        rationale: title.rationale.clone(),
        mood_score: breakdown.mood_score(title),
        rating: title.rating,
        genres: title.genres.clone(),
        language: title.language.clone(),
        subtitles: title.subtitles.clone(),
        runtime: title.runtime.clone(),
        total_score: breakdown.total(),
        factors: breakdown.factors,
    }
}
