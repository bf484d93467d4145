//! Positive (Ikigai) state classification.
//!
//! Thresholds the four positive dimension scores at 70, buckets by how many
//! dimensions are achieved, and resolves a canonical named state:
//!
//! ```text
//! k = 4  → Ikigai
//! k = 3  → one of four missing-one variants, named by the absent dimension
//! k = 2  → pair lookup: 4 canonical intersections (Passion, Mission,
//!          Profession, Vocation) + 2 cross pairs → Developing
//! k = 1  → Emerging, message keyed by the single achieved dimension
//! k = 0  → Exploring
//! ```
//!
//! The classifier is total: every point of `[0, 100]^4` resolves to exactly
//! one state, and classification is a pure function of the scores.

use crate::score::{PositiveDimension, PositiveScores, POSITIVE_TUNING};

// ─── IkigaiState ────────────────────────────────────────────────────────────

/// Named state of the positive assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IkigaiState {
    /// All four dimensions achieved — the full intersection.
    Ikigai,
    /// Missing heart: skills, market, and purpose without passion.
    ProfessionVocationMission,
    /// Missing body: passion, skills, and purpose without monetization.
    PassionMissionProfession,
    /// Missing mind: passion, purpose, and market without the skills.
    PassionMissionVocation,
    /// Missing soul: passion, skills, and market without meaningful purpose.
    PassionProfessionVocation,
    /// Heart + mind: you love it and you're good at it.
    Passion,
    /// Heart + soul: you love it and the world needs it.
    Mission,
    /// Mind + body: you're good at it and paid for it.
    Profession,
    /// Soul + body: the world needs it and pays for it.
    Vocation,
    /// A cross pair (heart+body or mind+soul) — strengths without a
    /// canonical intersection yet.
    Developing,
    /// Exactly one dimension achieved.
    Emerging(PositiveDimension),
    /// Nothing achieved yet — the start of the journey.
    Exploring,
}

// ─── IkigaiReading ──────────────────────────────────────────────────────────

/// The full positive reading for one score set.
///
/// Serialize-only under the `serde` feature: the attached text is static
/// engine data, so deserialization goes through [`crate::report`] records
/// instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IkigaiReading {
    /// The resolved state.
    pub state: IkigaiState,
    /// Fixed descriptive text for the state.
    pub description: &'static str,
    /// Two to four next-step recommendations.
    pub recommendations: Vec<&'static str>,
    /// Mean of the four dimension scores, in [0, 100].
    pub progress: f32,
    /// Number of dimensions at or above the achieved threshold.
    pub achieved_count: usize,
}

// ─── Pair lookup table ──────────────────────────────────────────────────────

/// The six unordered achieved pairs, keyed by canonical sorted order
/// (heart < body < mind < soul). Mutually exclusive by construction; the two
/// cross pairs resolve to [`IkigaiState::Developing`].
const PAIR_STATES: [(PositiveDimension, PositiveDimension, IkigaiState); 6] = [
    (PositiveDimension::Heart, PositiveDimension::Mind, IkigaiState::Passion),
    (PositiveDimension::Heart, PositiveDimension::Soul, IkigaiState::Mission),
    (PositiveDimension::Body, PositiveDimension::Mind, IkigaiState::Profession),
    (PositiveDimension::Body, PositiveDimension::Soul, IkigaiState::Vocation),
    (PositiveDimension::Heart, PositiveDimension::Body, IkigaiState::Developing),
    (PositiveDimension::Mind, PositiveDimension::Soul, IkigaiState::Developing),
];

fn pair_state(a: PositiveDimension, b: PositiveDimension) -> IkigaiState {
    PAIR_STATES
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, state)| *state)
        // Both orderings of all six pairs are covered above; a distinct pair
        // of dimensions cannot miss the table.
        .unwrap_or(IkigaiState::Developing)
}

// ─── Classification ─────────────────────────────────────────────────────────

/// Classify a positive score set into its named state.
///
/// Total over `[0, 100]^4`; never errors. Evaluation order within a
/// cardinality bucket follows the canonical dimension order for
/// reproducibility.
pub fn classify_ikigai(scores: &PositiveScores) -> IkigaiReading {
    let threshold = POSITIVE_TUNING.achieved_threshold;
    let achieved = scores.achieved(threshold);
    let progress = scores.mean();

    let (state, description, recommendations): (IkigaiState, &'static str, Vec<&'static str>) =
        match achieved.as_slice() {
            [_, _, _, _] => (
                IkigaiState::Ikigai,
                "Congratulations! You have achieved your entrepreneurial Ikigai - the \
                 perfect intersection of what you love, what you're good at, what the \
                 world needs, and what you can be paid for.",
                vec![
                    "Focus on maintaining balance across all four dimensions",
                    "Consider mentoring others on their entrepreneurial journey",
                    "Continuously evolve your business to stay aligned with your Ikigai",
                ],
            ),
            [_, _, _] => {
                // Exactly one dimension is below threshold; name the state
                // after the gap.
                let missing = PositiveDimension::ALL
                    .into_iter()
                    .find(|d| scores.get(*d) < threshold)
                    .unwrap_or(PositiveDimension::Heart);
                missing_one(missing)
            }
            [a, b] => classify_pair(*a, *b),
            [single] => (
                IkigaiState::Emerging(*single),
                emerging_description(*single),
                vec![
                    "Build on your existing strength",
                    "Gradually develop the other three dimensions",
                    "Take time for self-reflection and exploration",
                ],
            ),
            _ => (
                IkigaiState::Exploring,
                "You're at the beginning of your entrepreneurial journey. This is an \
                 exciting time of exploration and discovery.",
                vec![
                    "Take time to explore your interests and passions",
                    "Assess your current skills and identify areas for growth",
                    "Research market opportunities and social needs",
                    "Start with small experiments and projects",
                ],
            ),
        };

    IkigaiReading {
        state,
        description,
        recommendations,
        progress,
        achieved_count: achieved.len(),
    }
}

fn missing_one(missing: PositiveDimension) -> (IkigaiState, &'static str, Vec<&'static str>) {
    match missing {
        PositiveDimension::Heart => (
            IkigaiState::ProfessionVocationMission,
            "You have skills, market demand, and purpose, but lack passion. You may \
             feel successful but unfulfilled.",
            vec![
                "Explore what truly excites you about your work",
                "Find ways to incorporate your personal interests",
                "Consider pivoting to align with your passions",
            ],
        ),
        PositiveDimension::Body => (
            IkigaiState::PassionMissionProfession,
            "You have passion, skills, and purpose, but struggle with monetization. \
             You may feel fulfilled but financially insecure.",
            vec![
                "Develop a clear revenue model",
                "Research market demand for your solution",
                "Consider different pricing strategies",
            ],
        ),
        PositiveDimension::Mind => (
            IkigaiState::PassionMissionVocation,
            "You have passion, purpose, and market demand, but lack the necessary \
             skills. You may feel motivated but inadequate.",
            vec![
                "Identify specific skill gaps",
                "Invest in learning and development",
                "Consider partnering with skilled individuals",
            ],
        ),
        PositiveDimension::Soul => (
            IkigaiState::PassionProfessionVocation,
            "You have passion, skills, and market demand, but lack meaningful \
             purpose. You may feel successful but empty.",
            vec![
                "Define the impact you want to make",
                "Research social and environmental needs",
                "Align your business with a greater purpose",
            ],
        ),
    }
}

fn classify_pair(
    a: PositiveDimension,
    b: PositiveDimension,
) -> (IkigaiState, &'static str, Vec<&'static str>) {
    let state = pair_state(a, b);
    match state {
        IkigaiState::Passion => (
            state,
            "You have PASSION - you love what you do and you're good at it. However, \
             you may feel satisfied but not making a difference, and struggling \
             financially.",
            vec![
                "Research market needs that align with your passion",
                "Develop a business model around your skills",
                "Find ways to create meaningful impact",
            ],
        ),
        IkigaiState::Mission => (
            state,
            "You have MISSION - you love what you do and it serves the world. You \
             feel delight and fulfillment but may lack wealth and confidence in your \
             abilities.",
            vec![
                "Develop the skills needed to execute your mission",
                "Create a sustainable revenue model",
                "Build confidence through small wins",
            ],
        ),
        IkigaiState::Profession => (
            state,
            "You have PROFESSION - you're skilled and well-paid. You feel comfortable \
             and secure but may sense something is missing - passion and purpose.",
            vec![
                "Explore what truly motivates you",
                "Find ways to make a meaningful impact",
                "Consider how to align your work with your values",
            ],
        ),
        IkigaiState::Vocation => (
            state,
            "You have VOCATION - your work serves the world and pays well. You enjoy \
             wealth and impact but may lack self-belief and passion.",
            vec![
                "Develop skills to increase confidence",
                "Find personal connection to your work",
                "Build on your strengths and achievements",
            ],
        ),
        _ => (
            IkigaiState::Developing,
            "You're developing multiple dimensions of your entrepreneurial journey. \
             Keep building on your strengths while addressing gaps.",
            vec![
                "Focus on the dimensions where you're strongest",
                "Gradually work on weaker areas",
                "Seek mentorship and guidance",
            ],
        ),
    }
}

fn emerging_description(achieved: PositiveDimension) -> &'static str {
    match achieved {
        PositiveDimension::Heart => {
            "You have strong passion but need to develop skills, find market demand, \
             and create meaningful impact."
        }
        PositiveDimension::Body => {
            "You understand market demand but need to develop passion, skills, and \
             purpose."
        }
        PositiveDimension::Mind => {
            "You have strong skills but need to find passion, market demand, and \
             meaningful purpose."
        }
        PositiveDimension::Soul => {
            "You have a clear sense of purpose but need to develop passion, skills, \
             and market viability."
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(heart: f32, body: f32, mind: f32, soul: f32) -> PositiveScores {
        PositiveScores { heart, body, mind, soul }
    }

    #[test]
    fn test_all_achieved_is_ikigai() {
        let reading = classify_ikigai(&scores(80.0, 80.0, 80.0, 80.0));
        assert_eq!(reading.state, IkigaiState::Ikigai);
        assert_eq!(reading.achieved_count, 4);
        assert_eq!(reading.progress, 80.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let reading = classify_ikigai(&scores(70.0, 70.0, 70.0, 70.0));
        assert_eq!(reading.state, IkigaiState::Ikigai);
    }

    #[test]
    fn test_missing_one_variants() {
        let cases = [
            (scores(60.0, 80.0, 80.0, 80.0), IkigaiState::ProfessionVocationMission),
            (scores(80.0, 60.0, 80.0, 80.0), IkigaiState::PassionMissionProfession),
            (scores(80.0, 80.0, 60.0, 80.0), IkigaiState::PassionMissionVocation),
            (scores(80.0, 80.0, 80.0, 60.0), IkigaiState::PassionProfessionVocation),
        ];
        for (s, expected) in cases {
            let reading = classify_ikigai(&s);
            assert_eq!(reading.state, expected);
            assert_eq!(reading.achieved_count, 3);
        }
    }

    #[test]
    fn test_canonical_pairs() {
        let cases = [
            (scores(80.0, 20.0, 80.0, 20.0), IkigaiState::Passion),
            (scores(80.0, 20.0, 20.0, 80.0), IkigaiState::Mission),
            (scores(20.0, 80.0, 80.0, 20.0), IkigaiState::Profession),
            (scores(20.0, 80.0, 20.0, 80.0), IkigaiState::Vocation),
        ];
        for (s, expected) in cases {
            let reading = classify_ikigai(&s);
            assert_eq!(reading.state, expected, "scores {s:?}");
            assert_eq!(reading.achieved_count, 2);
        }
    }

    #[test]
    fn test_cross_pairs_are_developing() {
        let heart_body = classify_ikigai(&scores(80.0, 80.0, 20.0, 20.0));
        assert_eq!(heart_body.state, IkigaiState::Developing);

        let mind_soul = classify_ikigai(&scores(20.0, 20.0, 80.0, 80.0));
        assert_eq!(mind_soul.state, IkigaiState::Developing);
    }

    #[test]
    fn test_single_dimension_is_emerging() {
        for dim in PositiveDimension::ALL {
            let mut s = scores(20.0, 20.0, 20.0, 20.0);
            match dim {
                PositiveDimension::Heart => s.heart = 90.0,
                PositiveDimension::Body => s.body = 90.0,
                PositiveDimension::Mind => s.mind = 90.0,
                PositiveDimension::Soul => s.soul = 90.0,
            }
            let reading = classify_ikigai(&s);
            assert_eq!(reading.state, IkigaiState::Emerging(dim));
            assert_eq!(reading.achieved_count, 1);
        }
    }

    #[test]
    fn test_nothing_achieved_is_exploring() {
        let reading = classify_ikigai(&scores(0.0, 0.0, 0.0, 0.0));
        assert_eq!(reading.state, IkigaiState::Exploring);
        assert_eq!(reading.progress, 0.0);
        assert_eq!(reading.recommendations.len(), 4);
    }

    #[test]
    fn test_recommendation_counts_in_contract_range() {
        let sets = [
            scores(80.0, 80.0, 80.0, 80.0),
            scores(60.0, 80.0, 80.0, 80.0),
            scores(80.0, 20.0, 80.0, 20.0),
            scores(80.0, 80.0, 20.0, 20.0),
            scores(90.0, 20.0, 20.0, 20.0),
            scores(0.0, 0.0, 0.0, 0.0),
        ];
        for s in sets {
            let n = classify_ikigai(&s).recommendations.len();
            assert!((2..=4).contains(&n), "{s:?}: {n} recommendations");
        }
    }

    #[test]
    fn test_totality_sweep() {
        // Every point of a coarse grid over [0, 100]^4 must classify.
        let grid = [0.0, 35.0, 69.9, 70.0, 100.0];
        for h in grid {
            for b in grid {
                for m in grid {
                    for s in grid {
                        let reading = classify_ikigai(&scores(h, b, m, s));
                        assert!(
                            reading.achieved_count <= 4,
                            "({h},{b},{m},{s}) produced an impossible count"
                        );
                        assert!(!reading.description.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_progress_is_mean() {
        let reading = classify_ikigai(&scores(40.0, 60.0, 80.0, 20.0));
        assert_eq!(reading.progress, 50.0);
    }

    #[test]
    fn test_classification_idempotent() {
        let s = scores(72.0, 45.0, 88.0, 13.0);
        assert_eq!(classify_ikigai(&s), classify_ikigai(&s));
    }
}
