//! Unit tests for the `bounds` and `config` commands.

use super::helpers::{Workspace, decode};
use super::*;
use crate::inspect::{execute_bounds, execute_config};
use pathway_core::Question;
use pathway_scorer::{ConfigError, QuizConfigError, QuizConfigFile};
use rstest::rstest;

fn assert_close(actual: &serde_json::Value, expected: f64) {
    let value = actual.as_f64().expect("numeric bound");
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, found {value}"
    );
}

#[rstest]
fn bounds_reports_reference_range() {
    let mut buffer = Vec::new();
    execute_bounds(&BoundsArgs::default(), &mut buffer).expect("bounds should succeed");
    let bounds: serde_json::Value = decode(&buffer);

    for path in ["touring-performer", "creative-artist", "writer-producer"] {
        assert_close(&bounds["max"][path], 1.0);
    }
    assert_close(&bounds["min"]["touring-performer"], 0.1);
    assert_close(&bounds["min"]["creative-artist"], 0.3);
    assert_close(&bounds["min"]["writer-producer"], 0.1);
}

#[rstest]
fn config_prints_reference_quiz() {
    let mut buffer = Vec::new();
    execute_config(&ConfigArgs::default(), &mut buffer).expect("config should succeed");
    let file: QuizConfigFile = decode(&buffer);
    let config = QuizConfig::try_from(file).expect("printed quiz should validate");
    assert_eq!(config, QuizConfig::reference());
}

#[rstest]
fn config_output_reloads_as_custom_quiz() {
    let workspace = Workspace::new();
    let exported = workspace.path("quiz.json");
    let export = ConfigArgs {
        output: Some(exported.clone()),
        ..ConfigArgs::default()
    };
    let mut stdout = Vec::new();
    execute_config(&export, &mut stdout).expect("export reference quiz");
    assert!(stdout.is_empty());

    let reload = BoundsArgs {
        quiz_config: Some(exported),
        output: None,
    };
    let mut buffer = Vec::new();
    execute_bounds(&reload, &mut buffer).expect("bounds from exported quiz");
    let bounds: serde_json::Value = decode(&buffer);
    assert_close(&bounds["max"]["creative-artist"], 1.0);
}

#[rstest]
fn config_reports_every_validation_error() {
    let workspace = Workspace::new();
    let quiz = workspace.write(
        "quiz.json",
        r#"{
            "weights": { "motivation": 1.5, "stage-level": 0.2 },
            "matrix": {
                "motivation": {
                    "stage-energy": { "touring-performer": 1.0, "creative-artist": 0.4 }
                }
            }
        }"#,
    );
    let args = ConfigArgs {
        quiz_config: Some(quiz),
        output: None,
    };

    let err = execute_config(&args, &mut Vec::new()).expect_err("invalid quiz");
    match err {
        CliError::QuizConfig(error @ QuizConfigError::Invalid { .. }) => {
            let errors = error.validation_errors();
            assert!(errors.contains(&ConfigError::WeightOutOfRange {
                question: Question::Motivation,
                weight: 1.5,
            }));
            assert!(errors.contains(&ConfigError::UnscoredQuestion {
                question: Question::StageLevel,
            }));
        }
        other => panic!("expected invalid quiz error, found {other:?}"),
    }
}

#[rstest]
fn bounds_reports_missing_quiz_config() {
    let workspace = Workspace::new();
    let args = BoundsArgs {
        quiz_config: Some(workspace.path("absent.json")),
        output: None,
    };
    let err = execute_bounds(&args, &mut Vec::new()).expect_err("missing quiz");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_QUIZ_CONFIG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}
