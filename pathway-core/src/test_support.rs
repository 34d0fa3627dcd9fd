//! Canned quiz responses shared by unit, behaviour and property tests.
//!
//! The answer identifiers match the reference quiz shipped by
//! `pathway-scorer`.

use crate::{Question, Responses};

/// Every answer leans towards touring and live performance.
#[must_use]
pub fn pure_performer() -> Responses {
    Responses::new()
        .with_answer(Question::Motivation, "stage-energy")
        .with_answer(Question::IdealDay, "performing")
        .with_answer(Question::SuccessVision, "touring-artist")
        .with_answer(Question::SuccessDefinition, "live-performer")
        .with_answer(Question::StageLevel, "planning")
}

/// Every answer leans towards content creation and artistry.
#[must_use]
pub fn pure_artist() -> Responses {
    Responses::new()
        .with_answer(Question::Motivation, "self-expression")
        .with_answer(Question::IdealDay, "creating-content")
        .with_answer(Question::SuccessVision, "independent-creator")
        .with_answer(Question::SuccessDefinition, "loyal-fanbase")
}

/// Every answer leans towards songwriting and production.
#[must_use]
pub fn pure_writer() -> Responses {
    Responses::new()
        .with_answer(Question::Motivation, "crafting-songs")
        .with_answer(Question::IdealDay, "studio-session")
        .with_answer(Question::SuccessVision, "hit-songwriter")
        .with_answer(Question::SuccessDefinition, "industry-credits")
}

/// Performer and artist answers mixed so both clear the Core Focus threshold.
#[must_use]
pub fn performer_artist_hybrid() -> Responses {
    Responses::new()
        .with_answer(Question::Motivation, "stage-energy")
        .with_answer(Question::IdealDay, "creating-content")
        .with_answer(Question::SuccessVision, "touring-artist")
        .with_answer(Question::SuccessDefinition, "loyal-fanbase")
        .with_answer(Question::StageLevel, "growing")
}

/// Two writer-leaning answers; no path reaches the Core Focus threshold.
#[must_use]
pub fn partial_writer() -> Responses {
    Responses::new()
        .with_answer(Question::Motivation, "collaboration")
        .with_answer(Question::IdealDay, "writing-camp")
}
