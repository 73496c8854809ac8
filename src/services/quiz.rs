use crate::{
    catalog::Catalog,
    models::{Dimension, Question, QuizOption},
};

/// Sample titles shown under each option
const SAMPLES_PER_OPTION: usize = 4;

struct QuestionDef {
    dimension: Dimension,
    prompt: &'static str,
    options: &'static [(&'static str, &'static str)],
}

const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        dimension: Dimension::Mood,
        prompt: "How are you feeling today?",
        options: &[
            ("Happy", "😊"),
            ("Stressed", "😰"),
            ("Tired", "😴"),
            ("Anxious", "😟"),
            ("Lonely", "😞"),
            ("Bored", "😐"),
        ],
    },
    QuestionDef {
        dimension: Dimension::Feeling,
        prompt: "What would you like to feel after watching?",
        options: &[
            ("Uplifted", "😄"),
            ("Entertained", "🎉"),
            ("Relaxed", "😌"),
            ("Inspired", "💡"),
            ("Mind-blown", "🤯"),
        ],
    },
    QuestionDef {
        dimension: Dimension::Duration,
        prompt: "How long do you want to watch?",
        options: &[
            ("<30 min", "⏳"),
            ("~1 hr", "⏱️"),
            ("2+ hrs", "⏰"),
            ("Binge-ready", "🍿"),
        ],
    },
    QuestionDef {
        dimension: Dimension::Company,
        prompt: "Watching alone or with someone?",
        options: &[
            ("Solo", "👤"),
            ("Partner", "💞"),
            ("Friends", "🧑‍🤝‍🧑"),
            ("Family", "👨‍👩‍👧‍👦"),
        ],
    },
    QuestionDef {
        dimension: Dimension::Language,
        prompt: "Preferred Language",
        options: &[
            ("Hindi", "🇮🇳"),
            ("Tamil", "🇮🇳"),
            ("Telugu", "🇮🇳"),
            ("Kannada", "🇮🇳"),
            ("Malayalam", "🇮🇳"),
            ("English", "🇬🇧"),
            ("Korean", "🇰🇷"),
            ("Spanish", "🇪🇸"),
            ("French", "🇫🇷"),
            ("Any", "🌍"),
        ],
    },
];

/// The five quiz questions, in order, with sample titles per option
pub fn questions(catalog: &Catalog) -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|def| Question {
            dimension: def.dimension,
            prompt: def.prompt.to_string(),
            options: def
                .options
                .iter()
                .map(|(value, emoji)| QuizOption {
                    value: value.to_string(),
                    emoji: emoji.to_string(),
                    samples: catalog
                        .index()
                        .bucket(def.dimension, value)
                        .iter()
                        .filter_map(|id| catalog.get(id))
                        .take(SAMPLES_PER_OPTION)
                        .map(|title| title.name.clone())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn sample_catalog() -> Catalog {
        Catalog::new(builtin::titles(), builtin::category_index(), builtin::trending()).unwrap()
    }

    #[test]
    fn test_questions_follow_dimension_order() {
        let questions = questions(&sample_catalog());
        let dimensions: Vec<Dimension> = questions.iter().map(|q| q.dimension).collect();
        assert_eq!(dimensions, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_option_samples_come_from_buckets() {
        let questions = questions(&sample_catalog());
        let mood = &questions[0];
        let bored = mood.options.iter().find(|o| o.value == "Bored").unwrap();
        assert_eq!(
            bored.samples,
            vec![
                "The Boys",
                "Money Heist (La Casa de Papel)",
                "Squid Game",
                "Stranger Things"
            ]
        );
    }

    #[test]
    fn test_samples_are_capped_and_may_be_empty() {
        let questions = questions(&sample_catalog());
        let language = &questions[4];

        let any = language.options.iter().find(|o| o.value == "Any").unwrap();
        assert_eq!(any.samples.len(), SAMPLES_PER_OPTION);

        let tamil = language.options.iter().find(|o| o.value == "Tamil").unwrap();
        assert!(tamil.samples.is_empty());
    }

    #[test]
    fn test_empty_catalog_still_lists_questions() {
        let questions = questions(&Catalog::default());
        assert_eq!(questions.len(), 5);
        assert!(questions
            .iter()
            .flat_map(|q| &q.options)
            .all(|o| o.samples.is_empty()));
    }
}
