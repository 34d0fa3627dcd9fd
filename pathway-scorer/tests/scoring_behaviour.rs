#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when a step runs out of order"
)]

//! Behavioural coverage for the scoring pipeline.

use std::cell::{Cell, RefCell};

use pathway_core::{BlendType, Path, PathMap, Responses, ScoreResult, Tier, test_support};
use pathway_scorer::{PathwayScorer, blend_from_abs, level_from_pct};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state shared by the scoring scenarios.
#[derive(Default)]
struct ScoringWorld {
    scorer: RefCell<Option<PathwayScorer>>,
    responses: RefCell<Responses>,
    result: RefCell<Option<ScoreResult>>,
    tier: Cell<Option<Tier>>,
    blend: Cell<Option<BlendType>>,
}

impl ScoringWorld {
    fn result(&self) -> ScoreResult {
        self.result
            .borrow()
            .clone()
            .expect("responses should be scored first")
    }

    fn classify(&self, pct: f64) {
        let scorer = self.scorer.borrow();
        let thresholds = scorer
            .as_ref()
            .expect("quiz should be loaded")
            .config()
            .thresholds();
        self.tier.set(Some(level_from_pct(pct, false, thresholds)));
    }

    fn blend_leaders(&self, first: f64, second: f64) {
        let scorer = self.scorer.borrow();
        let thresholds = scorer
            .as_ref()
            .expect("quiz should be loaded")
            .config()
            .thresholds();
        let abs = PathMap {
            touring_performer: first,
            creative_artist: second,
            writer_producer: 0.0,
        };
        self.blend.set(Some(blend_from_abs(&abs, thresholds)));
    }

    fn assert_level(&self, path: Path, expected: Tier) {
        assert_eq!(*self.result().levels.get(path), expected, "tier of {path}");
    }
}

#[fixture]
fn world() -> ScoringWorld {
    ScoringWorld::default()
}

#[given("the reference quiz")]
fn given_reference_quiz(world: &ScoringWorld) {
    world.scorer.replace(Some(PathwayScorer::reference()));
}

#[given("the pure performer responses")]
fn given_pure_performer(world: &ScoringWorld) {
    world.responses.replace(test_support::pure_performer());
}

#[given("the performer and artist hybrid responses")]
fn given_hybrid(world: &ScoringWorld) {
    world
        .responses
        .replace(test_support::performer_artist_hybrid());
}

#[given("the partial writer responses")]
fn given_partial_writer(world: &ScoringWorld) {
    world.responses.replace(test_support::partial_writer());
}

#[given("no responses")]
fn given_no_responses(world: &ScoringWorld) {
    world.responses.replace(Responses::new());
}

#[when("the responses are scored")]
fn when_scored(world: &ScoringWorld) {
    let scorer = world.scorer.borrow();
    let result = scorer
        .as_ref()
        .expect("quiz should be loaded")
        .score_user(&world.responses.borrow());
    world.blend.set(Some(result.blend_type));
    world.result.replace(Some(result));
}

#[when("an absolute percentage of 60 is classified")]
fn when_classify_sixty(world: &ScoringWorld) {
    world.classify(60.0);
}

#[when("an absolute percentage of 59.999 is classified")]
fn when_classify_just_below(world: &ScoringWorld) {
    world.classify(59.999);
}

#[when("absolute percentages of 50 and 41 are blended")]
fn when_blend_nine_point_gap(world: &ScoringWorld) {
    world.blend_leaders(50.0, 41.0);
}

#[when("absolute percentages of 50 and 40 are blended")]
fn when_blend_ten_point_gap(world: &ScoringWorld) {
    world.blend_leaders(50.0, 40.0);
}

#[then("touring-performer holds Core Focus")]
fn then_performer_core(world: &ScoringWorld) {
    let result = world.result();
    assert_eq!(result.core_focus(), Some(Path::TouringPerformer));
    assert_eq!(result.recommendation.path, Path::TouringPerformer);
}

#[then("writer-producer holds Core Focus")]
fn then_writer_core(world: &ScoringWorld) {
    let result = world.result();
    assert_eq!(result.core_focus(), Some(Path::WriterProducer));
    assert_eq!(result.recommendation.path, Path::WriterProducer);
}

#[then("touring-performer is recommended without promotion")]
fn then_performer_recommended(world: &ScoringWorld) {
    let result = world.result();
    let ranked = result.abs_pct.ranked();
    assert_eq!(ranked.first().map(|(path, _)| *path), Some(Path::TouringPerformer));
    assert!(!result.recommendation.promoted);
}

#[then("the stage level planning is passed through")]
fn then_stage_level(world: &ScoringWorld) {
    assert_eq!(world.result().stage_level.as_deref(), Some("planning"));
}

#[then("creative-artist is Strategic Secondary")]
fn then_artist_secondary(world: &ScoringWorld) {
    world.assert_level(Path::CreativeArtist, Tier::StrategicSecondary);
}

#[then("the other paths are Noise")]
fn then_others_noise(world: &ScoringWorld) {
    world.assert_level(Path::CreativeArtist, Tier::Noise);
    world.assert_level(Path::WriterProducer, Tier::Noise);
}

#[then("every display percentage is 0")]
fn then_display_zero(world: &ScoringWorld) {
    assert_eq!(world.result().display_pct, PathMap::splat(0));
}

#[then("the tier is Core Focus")]
fn then_tier_core(world: &ScoringWorld) {
    assert_eq!(world.tier.get(), Some(Tier::CoreFocus));
}

#[then("the tier is Strategic Secondary")]
fn then_tier_secondary(world: &ScoringWorld) {
    assert_eq!(world.tier.get(), Some(Tier::StrategicSecondary));
}

#[then("the blend is Hybrid Multi-Creator")]
fn then_blend_hybrid(world: &ScoringWorld) {
    assert_eq!(world.blend.get(), Some(BlendType::HybridMultiCreator));
}

#[then("the blend is Blend 70/30")]
fn then_blend_seventy_thirty(world: &ScoringWorld) {
    assert_eq!(world.blend.get(), Some(BlendType::Blend7030));
}

#[then("the blend is Focused")]
fn then_blend_focused(world: &ScoringWorld) {
    assert_eq!(world.blend.get(), Some(BlendType::Focused));
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn pure_performer_is_recommended(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn sixty_percent_is_core_focus(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn just_below_sixty_is_secondary(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn nine_point_gap_is_hybrid(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 4)]
fn ten_point_gap_is_blend(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 5)]
fn empty_responses_force_first_path(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 6)]
fn second_core_focus_is_demoted(world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scoring.feature", index = 7)]
fn low_leader_is_promoted(world: ScoringWorld) {
    let _ = world;
}
