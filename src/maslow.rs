//! Maslow hierarchy selector — dominant need and entrepreneurial readiness.
//!
//! Eight independently scored levels (see [`crate::score::compute_maslow_scores`]);
//! the level with the highest score is the dominant need. Ties break toward
//! the *lower* level: the scan walks declaration order (physiological first)
//! and replaces the leader only on a strictly greater score. This is an
//! explicit rule, not an accident of sort stability — when nothing
//! distinguishes two needs, the more foundational one wins.
//!
//! The dominant level's position in the hierarchy maps to a readiness bucket:
//!
//! | Levels | Readiness |
//! |--------|-----------|
//! | 1–2 (physiological, safety) | survival focused |
//! | 3–4 (belonging, esteem) | security seeking |
//! | 5–6 (cognitive, aesthetic) | growth oriented |
//! | 7–8 (self-actualization, transcendence) | purpose driven |

use crate::corpus::ResponseCorpus;
use crate::score::{compute_maslow_scores, MaslowScores};

// ─── MaslowLevel ────────────────────────────────────────────────────────────

/// One level of the extended eight-level Maslow hierarchy.
///
/// Declaration order is hierarchy order — it drives both the tie-break in
/// [`select_dominant`] and the ordinal used for readiness bucketing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaslowLevel {
    /// Level 1 — food, water, shelter, sleep.
    Physiological,
    /// Level 2 — security, employment, health, stability.
    Safety,
    /// Level 3 — friendship, intimacy, family, connection.
    Belonging,
    /// Level 4 — respect, recognition, achievement.
    Esteem,
    /// Level 5 — knowledge, understanding, learning.
    Cognitive,
    /// Level 6 — beauty, balance, form, creativity.
    Aesthetic,
    /// Level 7 — personal growth, realizing potential.
    SelfActualization,
    /// Level 8 — helping others self-actualize, spiritual connection.
    Transcendence,
}

impl MaslowLevel {
    /// All eight levels, in hierarchy order (physiological first).
    pub const ALL: [MaslowLevel; 8] = [
        MaslowLevel::Physiological,
        MaslowLevel::Safety,
        MaslowLevel::Belonging,
        MaslowLevel::Esteem,
        MaslowLevel::Cognitive,
        MaslowLevel::Aesthetic,
        MaslowLevel::SelfActualization,
        MaslowLevel::Transcendence,
    ];

    /// One-based position in the hierarchy (physiological = 1).
    pub fn ordinal(&self) -> u8 {
        *self as u8 + 1
    }

    /// Identifier slug, used to route slider question ids to a level.
    pub fn slug(&self) -> &'static str {
        match self {
            MaslowLevel::Physiological => "physiological",
            MaslowLevel::Safety => "safety",
            MaslowLevel::Belonging => "belonging",
            MaslowLevel::Esteem => "esteem",
            MaslowLevel::Cognitive => "cognitive",
            MaslowLevel::Aesthetic => "aesthetic",
            MaslowLevel::SelfActualization => "self_actualization",
            MaslowLevel::Transcendence => "transcendence",
        }
    }

    /// Display name of the level.
    pub fn name(&self) -> &'static str {
        match self {
            MaslowLevel::Physiological => "Physiological Needs",
            MaslowLevel::Safety => "Safety Needs",
            MaslowLevel::Belonging => "Love and Belonging",
            MaslowLevel::Esteem => "Esteem Needs",
            MaslowLevel::Cognitive => "Cognitive Needs",
            MaslowLevel::Aesthetic => "Aesthetic Needs",
            MaslowLevel::SelfActualization => "Self-Actualization",
            MaslowLevel::Transcendence => "Transcendence",
        }
    }

    /// Static descriptive text for the level.
    pub fn description(&self) -> &'static str {
        match self {
            MaslowLevel::Physiological => "Food, water, shelter, sleep, clothing, reproduction",
            MaslowLevel::Safety => "Security, employment, health, property, stability",
            MaslowLevel::Belonging => "Friendship, intimacy, family, connection",
            MaslowLevel::Esteem => "Respect, recognition, prestige, freedom, achievement",
            MaslowLevel::Cognitive => "Knowledge, self-awareness, understanding, learning",
            MaslowLevel::Aesthetic => "Search for beauty, balance, form, creativity",
            MaslowLevel::SelfActualization => "Personal growth, fulfillment, realizing potential",
            MaslowLevel::Transcendence => "Helping others to self-actualize, spiritual connection",
        }
    }

    /// How this need colors an entrepreneurial motivation.
    pub fn entrepreneurial_context(&self) -> &'static str {
        match self {
            MaslowLevel::Physiological => "Survival-driven entrepreneurship",
            MaslowLevel::Safety => "Security-seeking entrepreneurship",
            MaslowLevel::Belonging => "Community-building entrepreneurship",
            MaslowLevel::Esteem => "Achievement-oriented entrepreneurship",
            MaslowLevel::Cognitive => "Knowledge-driven entrepreneurship",
            MaslowLevel::Aesthetic => "Creative and design-focused entrepreneurship",
            MaslowLevel::SelfActualization => "Purpose-driven entrepreneurship",
            MaslowLevel::Transcendence => "Legacy and impact-focused entrepreneurship",
        }
    }

    /// Readiness bucket for this level's position in the hierarchy.
    pub fn readiness(&self) -> Readiness {
        match self.ordinal() {
            1..=2 => Readiness::SurvivalFocused,
            3..=4 => Readiness::SecuritySeeking,
            5..=6 => Readiness::GrowthOriented,
            _ => Readiness::PurposeDriven,
        }
    }
}

// ─── Readiness ──────────────────────────────────────────────────────────────

/// Entrepreneurial readiness bucket, derived from the dominant need's
/// position in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Readiness {
    /// Dominant need at levels 1–2: stabilize basics before taking risk.
    SurvivalFocused,
    /// Dominant need at levels 3–4: prefers proven, predictable models.
    SecuritySeeking,
    /// Dominant need at levels 5–6: ready for innovative, creative ventures.
    GrowthOriented,
    /// Dominant need at levels 7–8: ready for impact and legacy building.
    PurposeDriven,
}

impl Readiness {
    /// Fixed descriptive text for the bucket.
    pub fn description(&self) -> &'static str {
        match self {
            Readiness::SurvivalFocused => {
                "Your entrepreneurial motivation is primarily driven by survival needs. \
                 Focus on stable, low-risk opportunities."
            }
            Readiness::SecuritySeeking => {
                "You seek entrepreneurship for security and stability. Consider proven \
                 business models with predictable returns."
            }
            Readiness::GrowthOriented => {
                "You're motivated by personal growth and creative expression. You're \
                 ready for innovative ventures."
            }
            Readiness::PurposeDriven => {
                "You're driven by higher purpose and impact. Focus on meaningful, \
                 legacy-building entrepreneurship."
            }
        }
    }

    /// Three fixed recommendations for the bucket.
    pub fn recommendations(&self) -> [&'static str; 3] {
        match self {
            Readiness::SurvivalFocused => [
                "Focus on stabilizing your basic needs before pursuing high-risk entrepreneurship",
                "Consider low-risk, immediate income-generating opportunities",
                "Look for entrepreneurship programs that provide basic support and resources",
            ],
            Readiness::SecuritySeeking => [
                "Develop a solid business plan with financial projections",
                "Build an emergency fund before taking entrepreneurial risks",
                "Focus on proven business models with predictable outcomes",
            ],
            Readiness::GrowthOriented => [
                "You're ready for innovative and creative entrepreneurial ventures",
                "Focus on personal growth and learning through entrepreneurship",
                "Consider businesses that allow for creative expression and problem-solving",
            ],
            Readiness::PurposeDriven => [
                "Focus on creating meaningful impact and helping others",
                "Consider social entrepreneurship or mission-driven businesses",
                "Think about creating a lasting legacy through your entrepreneurial work",
            ],
        }
    }
}

// ─── Selection ──────────────────────────────────────────────────────────────

/// The full Maslow reading for one corpus state.
///
/// Serialize-only under the `serde` feature — see [`crate::report`] for the
/// owned, round-trippable record form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaslowReading {
    /// The dominant need — highest score, ties toward the lower level.
    pub dominant: MaslowLevel,
    /// All eight level scores.
    pub scores: MaslowScores,
    /// Readiness bucket of the dominant level.
    pub readiness: Readiness,
    /// Three bucket-specific recommendations.
    pub recommendations: [&'static str; 3],
}

/// Pick the dominant level: highest score, ties broken toward the lower
/// level by scanning declaration order with a strictly-greater comparison.
pub fn select_dominant(scores: &MaslowScores) -> MaslowLevel {
    let mut dominant = MaslowLevel::Physiological;
    let mut best = scores.get(dominant);
    for level in MaslowLevel::ALL {
        let s = scores.get(level);
        if s > best {
            dominant = level;
            best = s;
        }
    }
    dominant
}

/// Classify an already-computed score set.
pub fn classify_maslow_scores(scores: MaslowScores) -> MaslowReading {
    let dominant = select_dominant(&scores);
    let readiness = dominant.readiness();
    MaslowReading {
        dominant,
        scores,
        readiness,
        recommendations: readiness.recommendations(),
    }
}

/// Score the corpus and classify in one step.
pub fn classify_maslow(corpus: &ResponseCorpus) -> MaslowReading {
    classify_maslow_scores(compute_maslow_scores(corpus))
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f32; 8]) -> MaslowScores {
        MaslowScores::from_raw(values)
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, level) in MaslowLevel::ALL.into_iter().enumerate() {
            assert_eq!(level.ordinal() as usize, i + 1);
        }
    }

    #[test]
    fn test_dominant_is_argmax() {
        let s = scores([10.0, 20.0, 70.0, 20.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(select_dominant(&s), MaslowLevel::Belonging);
    }

    #[test]
    fn test_tie_breaks_toward_lower_level() {
        let s = scores([50.0, 50.0, 10.0, 10.0, 10.0, 10.0, 10.0, 50.0]);
        assert_eq!(
            select_dominant(&s),
            MaslowLevel::Physiological,
            "equal scores must resolve to the most foundational level"
        );
    }

    #[test]
    fn test_all_zero_defaults_to_physiological() {
        let s = scores([0.0; 8]);
        let reading = classify_maslow_scores(s);
        assert_eq!(reading.dominant, MaslowLevel::Physiological);
        assert_eq!(reading.readiness, Readiness::SurvivalFocused);
    }

    #[test]
    fn test_readiness_buckets() {
        let cases = [
            (MaslowLevel::Physiological, Readiness::SurvivalFocused),
            (MaslowLevel::Safety, Readiness::SurvivalFocused),
            (MaslowLevel::Belonging, Readiness::SecuritySeeking),
            (MaslowLevel::Esteem, Readiness::SecuritySeeking),
            (MaslowLevel::Cognitive, Readiness::GrowthOriented),
            (MaslowLevel::Aesthetic, Readiness::GrowthOriented),
            (MaslowLevel::SelfActualization, Readiness::PurposeDriven),
            (MaslowLevel::Transcendence, Readiness::PurposeDriven),
        ];
        for (level, expected) in cases {
            assert_eq!(level.readiness(), expected, "{level:?}");
        }
    }

    #[test]
    fn test_transcendence_dominant_is_purpose_driven() {
        // A lone high transcendence score.
        let s = scores([10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 50.0]);
        let reading = classify_maslow_scores(s);
        assert_eq!(reading.dominant, MaslowLevel::Transcendence);
        assert_eq!(reading.readiness, Readiness::PurposeDriven);
        assert_eq!(reading.recommendations.len(), 3);
    }

    #[test]
    fn test_corpus_classification_end_to_end() {
        let mut corpus = ResponseCorpus::new();
        corpus.insert_text(
            "q1",
            "I want to leave a legacy of service and help others reach their potential",
        );
        let reading = classify_maslow(&corpus);
        // "legacy", "service", "help others" all land in transcendence.
        assert_eq!(reading.dominant, MaslowLevel::Transcendence);
        assert_eq!(reading.readiness, Readiness::PurposeDriven);
    }

    #[test]
    fn test_classification_idempotent() {
        let mut corpus = ResponseCorpus::new();
        corpus.insert_text("q1", "learning and knowledge drive everything I do");
        assert_eq!(classify_maslow(&corpus), classify_maslow(&corpus));
    }
}
