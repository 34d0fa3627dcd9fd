//! Static quiz configuration: question weights, the fuzzy matrix, display cap
//! and tier thresholds.
//!
//! A [`QuizConfig`] can only be obtained from [`QuizConfig::reference`] or by
//! validating a [`QuizConfigFile`], so the scorer never sees negative weights,
//! unknown paths or a matrix row missing a path.
//!
//! Example JSON:
//! ```json
//! {
//!   "weights": { "motivation": 0.3 },
//!   "matrix": {
//!     "motivation": {
//!       "stage-energy": {
//!         "touring-performer": 1.0,
//!         "creative-artist": 0.4,
//!         "writer-producer": 0.1
//!       }
//!     }
//!   },
//!   "stageLevels": ["planning"],
//!   "displayTopCap": 97,
//!   "thresholds": { "coreFocus": 60, "strategicSecondary": 35 }
//! }
//! ```
#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use camino::Utf8Path;
use pathway_core::{Path, PathMap, Question};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, QuizConfigError};

/// Display percentage shown for the leading path in the reference quiz.
pub const DISPLAY_TOP_CAP: f64 = 97.0;

const REFERENCE_WEIGHTS: [(Question, f64); 4] = [
    (Question::Motivation, 0.30),
    (Question::IdealDay, 0.25),
    (Question::SuccessVision, 0.25),
    (Question::SuccessDefinition, 0.20),
];

// Contributions are listed as [touring-performer, creative-artist, writer-producer].
const REFERENCE_MATRIX: [(Question, &str, [f64; 3]); 15] = [
    (Question::Motivation, "stage-energy", [1.0, 0.4, 0.1]),
    (Question::Motivation, "self-expression", [0.3, 1.0, 0.4]),
    (Question::Motivation, "crafting-songs", [0.1, 0.5, 1.0]),
    (Question::Motivation, "collaboration", [0.4, 0.3, 0.8]),
    (Question::IdealDay, "performing", [1.0, 0.3, 0.1]),
    (Question::IdealDay, "creating-content", [0.3, 1.0, 0.3]),
    (Question::IdealDay, "studio-session", [0.1, 0.4, 1.0]),
    (Question::IdealDay, "writing-camp", [0.2, 0.5, 0.9]),
    (Question::SuccessVision, "touring-artist", [1.0, 0.4, 0.1]),
    (Question::SuccessVision, "independent-creator", [0.3, 1.0, 0.3]),
    (Question::SuccessVision, "hit-songwriter", [0.1, 0.3, 1.0]),
    (Question::SuccessDefinition, "live-performer", [1.0, 0.3, 0.1]),
    (Question::SuccessDefinition, "loyal-fanbase", [0.5, 1.0, 0.2]),
    (Question::SuccessDefinition, "industry-credits", [0.1, 0.3, 1.0]),
    (Question::SuccessDefinition, "creative-freedom", [0.4, 0.6, 0.5]),
];

const REFERENCE_STAGE_LEVELS: [&str; 4] = ["planning", "launching", "growing", "established"];

/// Percentage thresholds driving tier and blend classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Thresholds {
    /// Minimum absolute percentage for Core Focus (inclusive).
    pub core_focus: f64,
    /// Minimum absolute percentage for Strategic Secondary (inclusive).
    pub strategic_secondary: f64,
    /// Top-two gap below which the blend is Hybrid Multi-Creator.
    pub hybrid_gap: f64,
    /// Minimum runner-up percentage for Blend 70/30 (inclusive).
    pub blend_secondary: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            core_focus: 60.0,
            strategic_secondary: 35.0,
            hybrid_gap: 10.0,
            blend_secondary: 35.0,
        }
    }
}

/// Weight and fuzzy-matrix rows for one scored question.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionConfig {
    weight: f64,
    answers: BTreeMap<String, PathMap<f64>>,
}

impl QuestionConfig {
    /// Return the question weight; zero means the question is skipped.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Return the contribution vector for `answer`, if configured.
    #[must_use]
    pub fn contribution(&self, answer: &str) -> Option<&PathMap<f64>> {
        self.answers.get(answer)
    }

    /// Iterate `(answer id, contributions)` rows.
    pub fn answers(&self) -> impl Iterator<Item = (&str, &PathMap<f64>)> + '_ {
        self.answers
            .iter()
            .map(|(answer, contributions)| (answer.as_str(), contributions))
    }
}

/// Validated quiz configuration consumed by the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    questions: BTreeMap<Question, QuestionConfig>,
    stage_levels: Vec<String>,
    display_top_cap: f64,
    thresholds: Thresholds,
}

impl QuizConfig {
    /// Build the reference quiz shipped with the engine.
    ///
    /// # Examples
    /// ```
    /// use pathway_core::Question;
    /// use pathway_scorer::{DISPLAY_TOP_CAP, QuizConfig};
    ///
    /// let config = QuizConfig::reference();
    /// assert_eq!(config.weight(Question::Motivation), Some(0.30));
    /// assert_eq!(config.weight(Question::StageLevel), None);
    /// assert_eq!(config.display_top_cap(), DISPLAY_TOP_CAP);
    /// ```
    #[must_use]
    pub fn reference() -> Self {
        let mut questions: BTreeMap<Question, QuestionConfig> = BTreeMap::new();
        for (question, weight) in REFERENCE_WEIGHTS {
            questions.entry(question).or_default().weight = weight;
        }
        for (question, answer, [tp, ca, wp]) in REFERENCE_MATRIX {
            let contributions = PathMap {
                touring_performer: tp,
                creative_artist: ca,
                writer_producer: wp,
            };
            questions
                .entry(question)
                .or_default()
                .answers
                .insert(answer.to_owned(), contributions);
        }
        Self {
            questions,
            stage_levels: REFERENCE_STAGE_LEVELS.map(str::to_owned).to_vec(),
            display_top_cap: DISPLAY_TOP_CAP,
            thresholds: Thresholds::default(),
        }
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`QuizConfigError::Parse`] when the document is malformed and
    /// [`QuizConfigError::Invalid`] listing every broken rule otherwise.
    pub fn from_json_str(json: &str) -> Result<Self, QuizConfigError> {
        let file: QuizConfigFile =
            serde_json::from_str(json).map_err(|source| QuizConfigError::Parse { source })?;
        Self::try_from(file)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`QuizConfigError::Read`] when the file cannot be read, and
    /// the errors of [`QuizConfig::from_json_str`] otherwise.
    pub fn from_path(path: &Utf8Path) -> Result<Self, QuizConfigError> {
        let json = pathway_fs::read_to_string(path).map_err(|source| QuizConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded quiz configuration from {path}");
        Self::from_json_str(&json)
    }

    /// Return the weight configured for `question`.
    #[must_use]
    pub fn weight(&self, question: Question) -> Option<f64> {
        self.questions.get(&question).map(QuestionConfig::weight)
    }

    /// Return the configuration for `question`, if it is scored.
    #[must_use]
    pub fn question(&self, question: Question) -> Option<&QuestionConfig> {
        self.questions.get(&question)
    }

    /// Iterate configured questions in canonical order.
    pub fn questions(&self) -> impl Iterator<Item = (Question, &QuestionConfig)> + '_ {
        self.questions
            .iter()
            .map(|(question, config)| (*question, config))
    }

    /// Iterate questions that contribute to scores: configured with a nonzero
    /// weight, in canonical order.
    pub fn weighted_questions(&self) -> impl Iterator<Item = (Question, &QuestionConfig)> + '_ {
        self.questions().filter(|(_, config)| config.weight > 0.0)
    }

    /// Return the known `stage-level` answers; empty means any value is accepted.
    #[must_use]
    pub fn stage_levels(&self) -> &[String] {
        &self.stage_levels
    }

    /// Return the display percentage assigned to the leading path.
    #[must_use]
    pub const fn display_top_cap(&self) -> f64 {
        self.display_top_cap
    }

    /// Return the classification thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Serialised form of a quiz configuration, keyed by identifier strings.
///
/// Convert it with [`QuizConfig::try_from`] to validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct QuizConfigFile {
    /// Weight per question identifier.
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    /// Contribution per path, per answer, per question identifier.
    #[serde(default)]
    pub matrix: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>,
    /// Known `stage-level` answers.
    #[serde(default)]
    pub stage_levels: Vec<String>,
    /// Display percentage for the leading path.
    #[serde(default = "default_display_top_cap")]
    pub display_top_cap: f64,
    /// Classification thresholds; omitted fields keep their defaults.
    #[serde(default)]
    pub thresholds: Thresholds,
}

const fn default_display_top_cap() -> f64 {
    DISPLAY_TOP_CAP
}

impl From<&QuizConfig> for QuizConfigFile {
    fn from(config: &QuizConfig) -> Self {
        let weights = config
            .questions()
            .map(|(question, entry)| (question.as_str().to_owned(), entry.weight))
            .collect();
        let matrix = config
            .questions()
            .map(|(question, entry)| {
                let rows = entry
                    .answers()
                    .map(|(answer, contributions)| {
                        let row = contributions
                            .iter()
                            .map(|(path, value)| (path.as_str().to_owned(), *value))
                            .collect();
                        (answer.to_owned(), row)
                    })
                    .collect();
                (question.as_str().to_owned(), rows)
            })
            .collect();
        Self {
            weights,
            matrix,
            stage_levels: config.stage_levels.clone(),
            display_top_cap: config.display_top_cap,
            thresholds: config.thresholds,
        }
    }
}

impl TryFrom<QuizConfigFile> for QuizConfig {
    type Error = QuizConfigError;

    fn try_from(file: QuizConfigFile) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let mut questions: BTreeMap<Question, QuestionConfig> = BTreeMap::new();
        let mut with_answers = BTreeSet::new();

        for (id, weight) in &file.weights {
            let Some(question) = parse_scored_question(id, &mut errors) else {
                continue;
            };
            if !is_unit_interval(*weight) {
                errors.push(ConfigError::WeightOutOfRange {
                    question,
                    weight: *weight,
                });
            }
            questions.entry(question).or_default().weight = *weight;
        }

        for (id, rows) in &file.matrix {
            let Some(question) = parse_scored_question(id, &mut errors) else {
                continue;
            };
            if !rows.is_empty() {
                with_answers.insert(question);
            }
            let entry = questions.entry(question).or_default();
            for (answer, row) in rows {
                if let Some(contributions) = parse_row(question, answer, row, &mut errors) {
                    entry.answers.insert(answer.clone(), contributions);
                }
            }
        }

        // Zero-weight questions are skipped when scoring, so they may omit rows.
        for (question, entry) in &questions {
            if entry.weight > 0.0 && !with_answers.contains(question) {
                errors.push(ConfigError::EmptyAnswers {
                    question: *question,
                });
            }
        }

        validate_display_cap(file.display_top_cap, &mut errors);
        validate_thresholds(&file.thresholds, &mut errors);

        if errors.is_empty() {
            Ok(Self {
                questions,
                stage_levels: file.stage_levels,
                display_top_cap: file.display_top_cap,
                thresholds: file.thresholds,
            })
        } else {
            Err(QuizConfigError::Invalid { errors })
        }
    }
}

fn parse_scored_question(id: &str, errors: &mut Vec<ConfigError>) -> Option<Question> {
    match Question::from_str(id) {
        Ok(question) if question.is_scored() => Some(question),
        Ok(question) => {
            errors.push(ConfigError::UnscoredQuestion { question });
            None
        }
        Err(_) => {
            errors.push(ConfigError::UnknownQuestion {
                question: id.to_owned(),
            });
            None
        }
    }
}

fn parse_row(
    question: Question,
    answer: &str,
    row: &BTreeMap<String, f64>,
    errors: &mut Vec<ConfigError>,
) -> Option<PathMap<f64>> {
    let before = errors.len();
    let mut parsed: PathMap<Option<f64>> = PathMap::splat(None);
    for (id, value) in row {
        let Ok(path) = Path::from_str(id) else {
            errors.push(ConfigError::UnknownPath {
                question,
                answer: answer.to_owned(),
                path: id.clone(),
            });
            continue;
        };
        if !is_unit_interval(*value) {
            errors.push(ConfigError::ContributionOutOfRange {
                question,
                answer: answer.to_owned(),
                path,
                value: *value,
            });
        }
        parsed.set(path, Some(*value));
    }
    for (path, value) in parsed.iter() {
        if value.is_none() {
            errors.push(ConfigError::MissingContribution {
                question,
                answer: answer.to_owned(),
                path,
            });
        }
    }
    (errors.len() == before).then(|| parsed.map(|_, value| value.unwrap_or_default()))
}

fn validate_display_cap(value: f64, errors: &mut Vec<ConfigError>) {
    if !(value > 0.0 && value <= 100.0) {
        errors.push(ConfigError::DisplayCapOutOfRange { value });
    }
}

fn validate_thresholds(thresholds: &Thresholds, errors: &mut Vec<ConfigError>) {
    let named = [
        ("coreFocus", thresholds.core_focus),
        ("strategicSecondary", thresholds.strategic_secondary),
        ("hybridGap", thresholds.hybrid_gap),
        ("blendSecondary", thresholds.blend_secondary),
    ];
    for (name, value) in named {
        if !(0.0..=100.0).contains(&value) {
            errors.push(ConfigError::ThresholdOutOfRange { name, value });
        }
    }
    if thresholds.strategic_secondary > thresholds.core_focus {
        errors.push(ConfigError::ThresholdOrder {
            core_focus: thresholds.core_focus,
            strategic_secondary: thresholds.strategic_secondary,
        });
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
