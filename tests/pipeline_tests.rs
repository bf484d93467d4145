//! Full-pipeline integration tests.
//!
//! Each test builds a corpus the way a form layer would, runs the families
//! in their mandated order (positive scoring first, then the negative model
//! that reads it, then Maslow, then the combined verdict), and checks the
//! readings end to end.

use ikigai_core::anti::{classify_anti_ikigai, AntiIkigaiReading, AntiIkigaiState, RiskLevel};
use ikigai_core::corpus::ResponseCorpus;
use ikigai_core::ikigai::{classify_ikigai, IkigaiReading, IkigaiState};
use ikigai_core::maslow::{classify_maslow, MaslowLevel, Readiness};
use ikigai_core::overall::{combine, OverallStatus};
use ikigai_core::score::{compute_positive_scores, PositiveScores};

// ── Helpers ──────────────────────────────────────────────────────────────

/// Run the whole pipeline over a corpus.
fn run(corpus: &ResponseCorpus) -> (PositiveScores, IkigaiReading, AntiIkigaiReading, OverallStatus) {
    let positive = compute_positive_scores(corpus);
    let ikigai = classify_ikigai(&positive);
    let anti = classify_anti_ikigai(corpus, &positive);
    let status = combine(&ikigai, &anti).status;
    (positive, ikigai, anti, status)
}

/// A corpus answered entirely through dimension-named sliders.
fn rated(heart: f32, body: f32, mind: f32, soul: f32) -> ResponseCorpus {
    let mut corpus = ResponseCorpus::new();
    corpus.insert_rating("heart_rating", heart);
    corpus.insert_rating("body_rating", body);
    corpus.insert_rating("mind_rating", mind);
    corpus.insert_rating("soul_rating", soul);
    corpus
}

// ── Empty corpus ─────────────────────────────────────────────────────────

#[test]
fn test_empty_corpus_baseline() {
    let corpus = ResponseCorpus::new();
    let (positive, ikigai, anti, status) = run(&corpus);

    assert_eq!(positive, PositiveScores::default());
    assert_eq!(ikigai.state, IkigaiState::Exploring);
    assert_eq!(ikigai.progress, 0.0);
    assert_eq!(ikigai.achieved_count, 0);

    // Zero positive scores count as dangerously low, so the cross-dimension
    // penalties fire even with nothing answered.
    assert_eq!(anti.scores.power, 20.0);
    assert_eq!(anti.scores.money, 20.0);
    assert_eq!(anti.scores.endurance, 15.0);
    assert_eq!(anti.scores.skills, 0.0);
    assert_eq!(anti.state, AntiIkigaiState::Safe);
    assert_eq!(anti.risk, RiskLevel::Low);

    assert_eq!(status, OverallStatus::Developing);

    let maslow = classify_maslow(&corpus);
    assert_eq!(maslow.dominant, MaslowLevel::Physiological);
    assert_eq!(maslow.readiness, Readiness::SurvivalFocused);
}

// ── Slider-driven journeys ───────────────────────────────────────────────

#[test]
fn test_all_dimensions_achieved_is_ikigai() {
    let corpus = rated(82.0, 75.0, 90.0, 71.0);
    let (positive, ikigai, anti, status) = run(&corpus);

    assert_eq!(positive, PositiveScores { heart: 82.0, body: 75.0, mind: 90.0, soul: 71.0 });
    assert_eq!(ikigai.state, IkigaiState::Ikigai);
    assert_eq!(ikigai.achieved_count, 4);
    assert_eq!(ikigai.progress, 79.5);

    // A strong mind score aliases into skills — flagged, but only Medium,
    // so it never overrides the achieved state.
    assert_eq!(anti.scores.skills, 90.0);
    assert_eq!(anti.state, AntiIkigaiState::SkillsWithoutPurpose);
    assert_eq!(anti.risk, RiskLevel::Medium);

    assert_eq!(status, OverallStatus::IkigaiAchieved);
}

#[test]
fn test_heart_and_mind_pair_is_passion() {
    let corpus = rated(80.0, 20.0, 80.0, 20.0);
    let (positive, ikigai, _, status) = run(&corpus);

    assert_eq!(positive.heart, 80.0);
    assert_eq!(positive.body, 20.0);
    assert_eq!(ikigai.state, IkigaiState::Passion);
    assert_eq!(ikigai.achieved_count, 2);
    assert_eq!(status, OverallStatus::IntermediateState);
}

#[test]
fn test_intermediate_verdict_carries_state_recommendations() {
    let corpus = rated(80.0, 20.0, 80.0, 20.0);
    let (_, ikigai, anti, _) = run(&corpus);
    let overall = combine(&ikigai, &anti);

    assert_eq!(overall.status, OverallStatus::IntermediateState);
    assert_eq!(overall.recommendations, ikigai.recommendations);
}

#[test]
fn test_corruption_pattern_overrides_strong_positive() {
    let mut corpus = rated(80.0, 80.0, 10.0, 80.0);
    corpus.insert_rating("power_rating", 70.0);
    corpus.insert_rating("endurance_rating", 70.0);

    let (positive, ikigai, anti, status) = run(&corpus);

    // Six answers -> engagement floor of 12 lifts the weak mind score.
    assert_eq!(positive.mind, 12.0);
    assert_eq!(ikigai.achieved_count, 3);

    assert_eq!(anti.state, AntiIkigaiState::Corruption);
    assert_eq!(anti.risk, RiskLevel::Critical);
    assert_eq!(status, OverallStatus::CriticalRisk);
}

#[test]
fn test_power_money_pair_stays_unclassified() {
    // The pair with no named archetype: the verdict must not invent one,
    // and risk stays Low no matter how high the two scores run.
    let mut corpus = ResponseCorpus::new();
    corpus.insert_rating("power_check", 95.0);
    corpus.insert_rating("money_focus", 80.0);

    let (positive, _, anti, status) = run(&corpus);

    // Two answers, no positive evidence: every positive score is the
    // floor of 4, which is dangerously low, so all three penalties fire.
    assert_eq!(positive.heart, 4.0);
    assert_eq!(anti.scores.power, 100.0);
    assert_eq!(anti.scores.money, 100.0);
    assert_eq!(anti.scores.endurance, 15.0);

    assert_eq!(anti.state, AntiIkigaiState::Unclassified);
    assert!(anti.warnings.is_empty());
    assert_eq!(anti.risk, RiskLevel::Low);
    assert_eq!(status, OverallStatus::Developing);
}

// ── Cross-family coupling ────────────────────────────────────────────────

#[test]
fn test_low_heart_raises_power_and_endurance() {
    let mut corpus = ResponseCorpus::new();
    corpus.insert_rating("heart_rating", 20.0);

    let (positive, _, anti, _) = run(&corpus);

    assert_eq!(positive.heart, 20.0);
    assert!(anti.scores.power >= 20.0);
    assert!(anti.scores.endurance >= 15.0);
    assert!(anti.scores.money >= 20.0, "soul is also low here");
}

#[test]
fn test_healthy_positive_scores_disarm_penalties() {
    let corpus = rated(50.0, 50.0, 50.0, 50.0);
    let (_, _, anti, _) = run(&corpus);

    assert_eq!(anti.scores.power, 0.0);
    assert_eq!(anti.scores.money, 0.0);
    assert_eq!(anti.scores.endurance, 0.0);
    assert_eq!(anti.state, AntiIkigaiState::Safe);
}

// ── Text-driven journeys ─────────────────────────────────────────────────

#[test]
fn test_text_evidence_reaches_the_reading() {
    let mut corpus = ResponseCorpus::new();
    corpus.insert_text(
        "motivation",
        "I love this work and my passion for it keeps growing every year",
    );
    corpus.insert_text(
        "purpose",
        "I want to help people and make a real impact on the world",
    );

    let (positive, ikigai, _, _) = run(&corpus);

    assert!(positive.heart > positive.body);
    assert!(positive.soul > positive.body);
    assert!(ikigai.progress > 0.0);
}

#[test]
fn test_maslow_slider_routes_to_its_level() {
    let mut corpus = ResponseCorpus::new();
    corpus.insert_rating("transcendence_slider", 50.0);

    let maslow = classify_maslow(&corpus);
    assert_eq!(maslow.dominant, MaslowLevel::Transcendence);
    assert_eq!(maslow.readiness, Readiness::PurposeDriven);
    assert_eq!(maslow.recommendations.len(), 3);
}

#[test]
fn test_maslow_text_evidence_picks_safety() {
    let mut corpus = ResponseCorpus::new();
    corpus.insert_text("q1", "i have job security and an emergency fund");

    let maslow = classify_maslow(&corpus);
    assert_eq!(maslow.dominant, MaslowLevel::Safety);
    assert_eq!(maslow.readiness, Readiness::SurvivalFocused);
}

// ── Properties ───────────────────────────────────────────────────────────

#[test]
fn test_pipeline_is_deterministic() {
    let mut corpus = rated(64.0, 71.0, 58.0, 90.0);
    corpus.insert_text("extra", "I enjoy solving problems and learning new skills");

    let first = run(&corpus);
    let second = run(&corpus);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
    assert_eq!(first.3, second.3);
}

#[test]
fn test_all_scores_stay_bounded() {
    let mut corpus = rated(100.0, 100.0, 100.0, 100.0);
    corpus.insert_rating("power_rating_2", 100.0);
    corpus.insert_rating("money_rating_2", 100.0);
    corpus.insert_rating("endurance_rating_2", 100.0);
    for i in 0..10 {
        corpus.insert_text(
            format!("q{i}"),
            "love passion money profit power control survive endure impact help",
        );
    }

    let (positive, _, anti, _) = run(&corpus);
    for score in [positive.heart, positive.body, positive.mind, positive.soul] {
        assert!((0.0..=100.0).contains(&score), "{score}");
    }
    for score in [
        anti.scores.power,
        anti.scores.skills,
        anti.scores.money,
        anti.scores.endurance,
    ] {
        assert!((0.0..=100.0).contains(&score), "{score}");
    }

    let maslow = classify_maslow(&corpus);
    for level in MaslowLevel::ALL {
        let score = maslow.scores.get(level);
        assert!((0.0..=100.0).contains(&score), "{level:?}: {score}");
    }
}

#[test]
fn test_every_rating_grid_point_produces_a_verdict() {
    // Sweep a coarse grid of slider corpora; the pipeline must classify
    // every one of them without panicking.
    let levels = [0.0, 30.0, 65.0, 95.0];
    for h in levels {
        for b in levels {
            for m in levels {
                for s in levels {
                    let corpus = rated(h, b, m, s);
                    let (_, ikigai, anti, status) = run(&corpus);
                    assert!(ikigai.recommendations.len() >= 2, "{h} {b} {m} {s}");
                    assert!(anti.risk <= RiskLevel::Critical);
                    let _ = status;
                }
            }
        }
    }
}

#[test]
fn test_answering_more_never_lowers_the_floor() {
    let mut corpus = ResponseCorpus::new();
    let mut last_floor = 0.0;
    for i in 0..20 {
        corpus.insert_text(format!("q{i}"), "zzz");
        let positive = compute_positive_scores(&corpus);
        // No keyword evidence: every score is exactly the engagement floor.
        assert!(positive.heart >= last_floor);
        last_floor = positive.heart;
    }
    assert_eq!(last_floor, 40.0, "20 answers at 2 points each");
}
