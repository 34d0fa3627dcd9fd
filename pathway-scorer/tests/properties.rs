#![expect(
    clippy::expect_used,
    reason = "generated configurations are valid by construction"
)]

//! Property-based tests for the scoring pipeline.
//!
//! # Invariants tested
//!
//! - **Single winner:** exactly one path holds Core Focus and it has the
//!   highest absolute percentage, ties going to the first path.
//! - **Determinism:** scoring the same responses twice gives equal results.
//! - **Bounds:** absolute percentages stay within `0..=100`.
//! - **Display cap:** the leading display value equals the cap whenever any
//!   path scores above its floor, and no value exceeds it.
//! - **Monotonicity:** raising a chosen answer's contribution for a path never
//!   lowers that path's raw, absolute or display score.

use std::collections::BTreeMap;

use pathway_core::{Path, PathMap, Question, Responses, Tier};
use pathway_scorer::{
    DISPLAY_TOP_CAP, PathwayScorer, QuizConfig, QuizConfigFile, Thresholds,
};
use proptest::prelude::*;

const SCORED: [Question; 4] = [
    Question::Motivation,
    Question::IdealDay,
    Question::SuccessVision,
    Question::SuccessDefinition,
];

const TOLERANCE: f64 = 1e-9;

/// A randomly generated quiz: one weight and a list of contribution rows per
/// scored question.
#[derive(Debug, Clone)]
struct GeneratedQuiz {
    weights: [f64; 4],
    rows: Vec<Vec<[f64; 3]>>,
}

impl GeneratedQuiz {
    fn config(&self) -> QuizConfig {
        let weights = SCORED
            .iter()
            .zip(self.weights)
            .map(|(question, weight)| (question.as_str().to_owned(), weight))
            .collect();
        let matrix = SCORED
            .iter()
            .zip(&self.rows)
            .map(|(question, rows)| {
                let answers = rows
                    .iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let contributions = Path::ALL
                            .iter()
                            .zip(row)
                            .map(|(path, value)| (path.as_str().to_owned(), *value))
                            .collect::<BTreeMap<_, _>>();
                        (answer_id(index), contributions)
                    })
                    .collect();
                (question.as_str().to_owned(), answers)
            })
            .collect();
        let file = QuizConfigFile {
            weights,
            matrix,
            stage_levels: Vec::new(),
            display_top_cap: DISPLAY_TOP_CAP,
            thresholds: Thresholds::default(),
        };
        QuizConfig::try_from(file).expect("generated quiz is valid")
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices are drawn from the generated dimensions"
    )]
    #[expect(clippy::float_arithmetic, reason = "raises one contribution")]
    fn raised(&self, question: usize, answer: usize, path: usize, delta: f64) -> Self {
        let mut raised = self.clone();
        let value = &mut raised.rows[question][answer][path];
        *value = (*value + delta).min(1.0);
        raised
    }
}

fn answer_id(index: usize) -> String {
    format!("answer-{index}")
}

fn responses_for(choices: &[Option<usize>]) -> Responses {
    let mut responses = Responses::new();
    for (question, choice) in SCORED.iter().zip(choices) {
        if let Some(index) = choice {
            responses.insert(*question, answer_id(*index));
        }
    }
    responses
}

fn quiz_strategy() -> impl Strategy<Value = GeneratedQuiz> {
    let weights = proptest::array::uniform4(0.05_f64..=1.0);
    let rows = proptest::collection::vec(
        proptest::collection::vec(proptest::array::uniform3(0.0_f64..=1.0), 1..=4),
        SCORED.len(),
    );
    (weights, rows).prop_map(|(weights, rows)| GeneratedQuiz { weights, rows })
}

/// A quiz plus an optional answer index per scored question.
fn quiz_with_choices() -> impl Strategy<Value = (GeneratedQuiz, Vec<Option<usize>>)> {
    quiz_strategy().prop_flat_map(|quiz| {
        let choices: Vec<_> = quiz
            .rows
            .iter()
            .map(|rows| proptest::option::of(0..rows.len()))
            .collect();
        (Just(quiz), choices)
    })
}

/// A quiz where every question is answered, plus a path and amount to raise
/// one chosen answer by.
fn quiz_with_raise()
-> impl Strategy<Value = (GeneratedQuiz, Vec<usize>, usize, usize, f64)> {
    quiz_strategy().prop_flat_map(|quiz| {
        let choices: Vec<_> = quiz.rows.iter().map(|rows| 0..rows.len()).collect();
        (
            Just(quiz),
            choices,
            0..SCORED.len(),
            0..Path::ALL.len(),
            0.05_f64..=0.5,
        )
    })
}

/// Answers drawn from the reference quiz, including unknown and junk input.
fn reference_responses() -> impl Strategy<Value = Responses> {
    let motivation = proptest::option::of(prop_oneof![
        Just("stage-energy"),
        Just("self-expression"),
        Just("crafting-songs"),
        Just("collaboration"),
        Just("unknown"),
    ]);
    let ideal_day = proptest::option::of(prop_oneof![
        Just("performing"),
        Just("creating-content"),
        Just("studio-session"),
        Just("writing-camp"),
    ]);
    let vision = proptest::option::of(prop_oneof![
        Just("touring-artist"),
        Just("independent-creator"),
        Just("hit-songwriter"),
    ]);
    let definition = proptest::option::of(prop_oneof![
        Just("live-performer"),
        Just("loyal-fanbase"),
        Just("industry-credits"),
        Just("creative-freedom"),
    ]);
    let junk = proptest::option::of("[a-z]{1,8}");
    (motivation, ideal_day, vision, definition, junk).prop_map(
        |(motivation, ideal_day, vision, definition, junk)| {
            let answers = [motivation, ideal_day, vision, definition];
            let mut responses = Responses::new();
            for (question, answer) in SCORED.iter().zip(answers) {
                if let Some(answer) = answer {
                    responses.insert(*question, answer);
                }
            }
            if let Some(key) = junk {
                responses.insert_raw(format!("x-{key}"), "anything");
            }
            responses
        },
    )
}

#[expect(clippy::float_arithmetic, reason = "comparison within a tolerance")]
fn at_least(actual: f64, floor: f64) -> bool {
    actual >= floor - TOLERANCE
}

#[expect(clippy::float_arithmetic, reason = "comparison within a tolerance")]
fn at_most(actual: f64, ceiling: f64) -> bool {
    actual <= ceiling + TOLERANCE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: one Core Focus, held by the first path with the highest
    /// absolute percentage.
    #[test]
    fn exactly_one_core_focus_at_the_maximum(responses in reference_responses()) {
        let result = PathwayScorer::reference().score_user(&responses);
        let holders: Vec<Path> = result
            .levels
            .iter()
            .filter(|(_, tier)| **tier == Tier::CoreFocus)
            .map(|(path, _)| path)
            .collect();
        prop_assert_eq!(holders.len(), 1);
        let winner = holders.first().copied().expect("one holder");
        let best = *result.abs_pct.get(winner);
        for (path, value) in result.abs_pct.iter() {
            prop_assert!(*value <= best, "{} beats the Core Focus path", path);
            if path < winner {
                prop_assert!(*value < best, "{} ties and comes first", path);
            }
        }
        prop_assert_eq!(result.recommendation.path, winner);
    }

    /// Property: scoring is a pure function of its input.
    #[test]
    fn scoring_is_deterministic(responses in reference_responses()) {
        let scorer = PathwayScorer::reference();
        prop_assert_eq!(scorer.score_user(&responses), scorer.score_user(&responses));
    }

    /// Property: absolute percentages stay within `0..=100` for any quiz.
    #[test]
    fn absolute_percentages_are_bounded((quiz, choices) in quiz_with_choices()) {
        let scorer = PathwayScorer::new(quiz.config());
        let result = scorer.score_user(&responses_for(&choices));
        for (path, value) in result.abs_pct.iter() {
            prop_assert!(value.is_finite(), "{} is not finite", path);
            prop_assert!(*value >= 0.0, "{} is negative: {}", path, value);
            prop_assert!(at_most(*value, 100.0), "{} exceeds 100: {}", path, value);
        }
    }

    /// Property: the display leader shows the cap whenever any path scores
    /// above its floor.
    #[test]
    fn display_cap_is_reached((quiz, choices) in quiz_with_choices()) {
        let scorer = PathwayScorer::new(quiz.config());
        let result = scorer.score_user(&responses_for(&choices));
        let top = result.display_pct.iter().map(|(_, value)| *value).max().unwrap_or(0);
        prop_assert!(f64::from(top) <= DISPLAY_TOP_CAP);
        let above_floor = result
            .raw
            .iter()
            .any(|(path, raw)| *raw > *scorer.bounds().min.get(path));
        if above_floor {
            prop_assert_eq!(f64::from(top), DISPLAY_TOP_CAP);
        } else {
            prop_assert_eq!(result.display_pct, PathMap::splat(0));
        }
    }

    /// Property: raising a chosen answer's contribution for one path never
    /// lowers that path's scores.
    #[test]
    fn raising_a_contribution_is_monotonic(
        (quiz, choices, question, path_index, delta) in quiz_with_raise(),
    ) {
        let answer = choices.get(question).copied().expect("choice per question");
        let responses = responses_for(&choices.iter().copied().map(Some).collect::<Vec<_>>());
        let path = Path::ALL.get(path_index).copied().expect("path index in range");

        let before = PathwayScorer::new(quiz.config()).score_user(&responses);
        let raised = quiz.raised(question, answer, path_index, delta);
        let after = PathwayScorer::new(raised.config()).score_user(&responses);

        prop_assert!(*after.raw.get(path) >= *before.raw.get(path));
        prop_assert!(at_least(*after.abs_pct.get(path), *before.abs_pct.get(path)));
        prop_assert!(*after.display_pct.get(path) >= *before.display_pct.get(path));
    }
}
