//! Dimension score sets and the per-family aggregation rules.
//!
//! Raw keyword accumulations (from [`crate::extract`]) become bounded
//! `[0, 100]` scores here. Each family applies its own tuning:
//!
//! - **Positive**: `clamp(max(raw, answered × 2), 0, 100)`, rounded — the
//!   engagement floor guarantees 2 points per answered question.
//! - **Negative**: raw hits plus fixed cross-reads of the *already computed*
//!   positive scores; no floor. The positive scores are a required parameter,
//!   which makes the mandatory pipeline order (positive before negative)
//!   visible in the signature.
//! - **Maslow**: `clamp(raw + answered × 5, 0, 100)` — a deliberately
//!   different floor constant, per-family tuning rather than a shared one.
//!
//! # Invariants
//!
//! - Every score field of every set is always in [0.0, 100.0].
//! - Aggregation is a pure function of the corpus (and, for the negative
//!   family, of the positive scores): identical input yields identical output.

use crate::corpus::ResponseCorpus;
use crate::extract::{maslow_hits, negative_hits, positive_hits};
use crate::maslow::MaslowLevel;

// ─── Dimensions ─────────────────────────────────────────────────────────────

/// One axis of the positive (Ikigai) family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositiveDimension {
    /// What you love.
    Heart,
    /// What you can be paid for.
    Body,
    /// What you are good at.
    Mind,
    /// What the world needs.
    Soul,
}

impl PositiveDimension {
    /// All four dimensions, in canonical order.
    pub const ALL: [PositiveDimension; 4] = [
        PositiveDimension::Heart,
        PositiveDimension::Body,
        PositiveDimension::Mind,
        PositiveDimension::Soul,
    ];

    /// Identifier slug, used to route slider question ids to a dimension.
    pub fn slug(&self) -> &'static str {
        match self {
            PositiveDimension::Heart => "heart",
            PositiveDimension::Body => "body",
            PositiveDimension::Mind => "mind",
            PositiveDimension::Soul => "soul",
        }
    }
}

/// One axis of the negative (Anti-Ikigai) family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegativeDimension {
    /// What brings power (instead of love).
    Power,
    /// What you are good at (without purpose).
    Skills,
    /// What you can be paid for (without fulfillment).
    Money,
    /// What you can bear (without passion).
    Endurance,
}

impl NegativeDimension {
    /// All four dimensions, in canonical order.
    pub const ALL: [NegativeDimension; 4] = [
        NegativeDimension::Power,
        NegativeDimension::Skills,
        NegativeDimension::Money,
        NegativeDimension::Endurance,
    ];

    /// Identifier slug, used to route slider question ids to a dimension.
    pub fn slug(&self) -> &'static str {
        match self {
            NegativeDimension::Power => "power",
            NegativeDimension::Skills => "skills",
            NegativeDimension::Money => "money",
            NegativeDimension::Endurance => "endurance",
        }
    }
}

// ─── Family tuning ──────────────────────────────────────────────────────────

/// Named tuning constants for one threshold-based family.
///
/// Thresholds and floor multipliers are per-family data, not globals — the
/// positive and negative families deliberately differ on both.
#[derive(Clone, Copy, Debug)]
pub struct FamilyTuning {
    /// Score at or above which a dimension counts as achieved.
    pub achieved_threshold: f32,
    /// Guaranteed points per answered question, regardless of content.
    pub floor_per_answer: f32,
}

/// Positive family: achieved at 70, engagement floor of 2 per answer.
pub const POSITIVE_TUNING: FamilyTuning = FamilyTuning {
    achieved_threshold: 70.0,
    floor_per_answer: 2.0,
};

/// Negative family: achieved at 60, no engagement floor — risk must be
/// evidenced, never granted for mere participation.
pub const NEGATIVE_TUNING: FamilyTuning = FamilyTuning {
    achieved_threshold: 60.0,
    floor_per_answer: 0.0,
};

/// Maslow family engagement floor (the family has no achieved threshold —
/// its selector is argmax-based, see [`crate::maslow`]).
pub const MASLOW_FLOOR_PER_ANSWER: f32 = 5.0;

/// Positive score below which a dimension counts as dangerously low and
/// triggers the negative family's cross-dimension penalties.
pub const LOW_POSITIVE_CUTOFF: f32 = 30.0;
/// Penalty added to power when heart is low: low love reads as power seeking.
pub const LOW_HEART_POWER_PENALTY: f32 = 20.0;
/// Penalty added to money when soul is low: low purpose reads as money focus.
pub const LOW_SOUL_MONEY_PENALTY: f32 = 20.0;
/// Penalty added to endurance when heart is low: low passion reads as just
/// enduring.
pub const LOW_HEART_ENDURANCE_PENALTY: f32 = 15.0;

// ─── Score sets ─────────────────────────────────────────────────────────────

/// The four positive dimension scores, each in [0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositiveScores {
    /// What you love.
    pub heart: f32,
    /// What you can be paid for.
    pub body: f32,
    /// What you are good at.
    pub mind: f32,
    /// What the world needs.
    pub soul: f32,
}

impl PositiveScores {
    /// Score for one dimension.
    pub fn get(&self, dim: PositiveDimension) -> f32 {
        match dim {
            PositiveDimension::Heart => self.heart,
            PositiveDimension::Body => self.body,
            PositiveDimension::Mind => self.mind,
            PositiveDimension::Soul => self.soul,
        }
    }

    /// Mean of the four scores — the overall journey progress.
    pub fn mean(&self) -> f32 {
        (self.heart + self.body + self.mind + self.soul) / 4.0
    }

    /// Dimensions at or above a threshold, in canonical order.
    pub fn achieved(&self, threshold: f32) -> Vec<PositiveDimension> {
        PositiveDimension::ALL
            .into_iter()
            .filter(|d| self.get(*d) >= threshold)
            .collect()
    }
}

/// The four negative dimension scores, each in [0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeScores {
    /// What brings power.
    pub power: f32,
    /// What you are good at, without purpose. Alias of the positive mind
    /// score — never independently derived.
    pub skills: f32,
    /// What you can be paid for, without fulfillment.
    pub money: f32,
    /// What you can bear, without passion.
    pub endurance: f32,
}

impl NegativeScores {
    /// Score for one dimension.
    pub fn get(&self, dim: NegativeDimension) -> f32 {
        match dim {
            NegativeDimension::Power => self.power,
            NegativeDimension::Skills => self.skills,
            NegativeDimension::Money => self.money,
            NegativeDimension::Endurance => self.endurance,
        }
    }

    /// Dimensions at or above a threshold, in canonical order.
    pub fn achieved(&self, threshold: f32) -> Vec<NegativeDimension> {
        NegativeDimension::ALL
            .into_iter()
            .filter(|d| self.get(*d) >= threshold)
            .collect()
    }
}

/// The eight Maslow level scores, each in [0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaslowScores {
    scores: [f32; 8],
}

impl MaslowScores {
    /// Build from raw per-level values, clamping each to [0, 100].
    ///
    /// Values are indexed by [`MaslowLevel`] declaration order
    /// (physiological first).
    pub fn from_raw(raw: [f32; 8]) -> Self {
        let mut scores = raw;
        for s in &mut scores {
            *s = s.clamp(0.0, 100.0);
        }
        Self { scores }
    }

    /// Score for one level.
    pub fn get(&self, level: MaslowLevel) -> f32 {
        self.scores[level.ordinal() as usize - 1]
    }

    /// All eight scores in declaration order (physiological first).
    pub fn as_array(&self) -> [f32; 8] {
        self.scores
    }
}

// ─── Aggregation ────────────────────────────────────────────────────────────

/// Compute the four positive dimension scores from a corpus.
///
/// Applies the engagement floor (`answered × 2`), the cap at 100, and
/// whole-point rounding. Pure; safe to call on every corpus mutation.
pub fn compute_positive_scores(corpus: &ResponseCorpus) -> PositiveScores {
    let hits = positive_hits(corpus);
    let floor = hits.answered as f32 * POSITIVE_TUNING.floor_per_answer;
    let finish = |raw: f32| raw.max(floor).clamp(0.0, 100.0).round();

    PositiveScores {
        heart: finish(hits.get(PositiveDimension::Heart)),
        body: finish(hits.get(PositiveDimension::Body)),
        mind: finish(hits.get(PositiveDimension::Mind)),
        soul: finish(hits.get(PositiveDimension::Soul)),
    }
}

/// Compute the four negative dimension scores from a corpus and the
/// already-computed positive scores.
///
/// The positive scores are required because three fixed penalties cross-read
/// them (low heart raises power and endurance, low soul raises money) and
/// because skills is an alias of the positive mind score. Positive scores
/// must always be computed first; this signature makes the ordering a
/// compile-time fact rather than a convention.
pub fn compute_negative_scores(
    corpus: &ResponseCorpus,
    positive: &PositiveScores,
) -> NegativeScores {
    let hits = negative_hits(corpus);

    let mut power = hits.get(NegativeDimension::Power);
    let mut money = hits.get(NegativeDimension::Money);
    let mut endurance = hits.get(NegativeDimension::Endurance);

    if positive.heart < LOW_POSITIVE_CUTOFF {
        power += LOW_HEART_POWER_PENALTY;
        endurance += LOW_HEART_ENDURANCE_PENALTY;
    }
    if positive.soul < LOW_POSITIVE_CUTOFF {
        money += LOW_SOUL_MONEY_PENALTY;
    }

    NegativeScores {
        power: power.clamp(0.0, 100.0),
        skills: positive.mind.clamp(0.0, 100.0),
        money: money.clamp(0.0, 100.0),
        endurance: endurance.clamp(0.0, 100.0),
    }
}

/// Compute the eight Maslow level scores from a corpus.
///
/// Applies the Maslow engagement floor (`answered × 5`) additively to every
/// level before clamping — unfulfilled-indicator penalties can pull a raw
/// score negative, and the floor is what keeps early sparse corpora from
/// pinning every level at zero.
pub fn compute_maslow_scores(corpus: &ResponseCorpus) -> MaslowScores {
    let hits = maslow_hits(corpus);
    let floor = hits.answered as f32 * MASLOW_FLOOR_PER_ANSWER;

    let mut raw = hits.raw;
    for r in &mut raw {
        *r += floor;
    }
    MaslowScores::from_raw(raw)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
