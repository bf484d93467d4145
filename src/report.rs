//! Serializable snapshot of a full assessment run.
//!
//! A snapshot is populated from a [`ResponseCorpus`] by running the whole
//! pipeline once — positive scoring first, then the negative model (which
//! reads the positive scores for its cross-dimension penalties), then the
//! Maslow selector, then the combined verdict. The result is a single flat
//! record that round-trips through any serde format.
//!
//! Reading structs in the classifier modules borrow their descriptive text
//! from the engine's static tables, so they serialize but do not
//! deserialize. The record types here own their strings instead; converting
//! a reading into its record form is what makes the snapshot restorable.
//!
//! This module requires the `serde` feature.
//!
//! [`ResponseCorpus`]: crate::corpus::ResponseCorpus

use crate::anti::{classify_anti_ikigai, AntiIkigaiReading, AntiIkigaiState, RiskLevel};
use crate::corpus::ResponseCorpus;
use crate::ikigai::{classify_ikigai, IkigaiReading, IkigaiState};
use crate::maslow::{classify_maslow, MaslowLevel, MaslowReading, Readiness};
use crate::overall::{combine, OverallReading, OverallStatus};
use crate::score::{compute_positive_scores, MaslowScores, NegativeScores, PositiveScores};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// A serializable snapshot of one complete assessment.
///
/// Captures the scores of all three families and the four readings derived
/// from them, so a stored snapshot can be rendered or compared later without
/// re-running the pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use ikigai_core::corpus::ResponseCorpus;
/// use ikigai_core::report::AssessmentSnapshot;
///
/// let snapshot = AssessmentSnapshot::from_corpus(&corpus);
/// let json = serde_json::to_string(&snapshot).unwrap();
/// let restored: AssessmentSnapshot = serde_json::from_str(&json).unwrap();
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct AssessmentSnapshot {
    /// Format version — always [`SNAPSHOT_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Number of answered entries in the source corpus.
    pub answered: usize,
    /// Positive dimension scores.
    pub positive: PositiveScores,
    /// Negative dimension scores, cross-penalties included.
    pub negative: NegativeScores,
    /// All eight Maslow level scores.
    pub maslow_scores: MaslowScores,
    /// The positive reading.
    pub ikigai: IkigaiRecord,
    /// The negative reading.
    pub anti: AntiRecord,
    /// The Maslow reading.
    pub maslow: MaslowRecord,
    /// The combined verdict.
    pub overall: OverallRecord,
}

/// Owned, serializable representation of an [`IkigaiReading`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct IkigaiRecord {
    /// The resolved positive state.
    pub state: IkigaiState,
    /// Descriptive text for the state.
    pub description: String,
    /// Next-step recommendations.
    pub recommendations: Vec<String>,
    /// Mean of the four dimension scores, in [0, 100].
    pub progress: f32,
    /// Number of dimensions at or above the achieved threshold.
    pub achieved_count: usize,
}

impl From<&IkigaiReading> for IkigaiRecord {
    fn from(r: &IkigaiReading) -> Self {
        Self {
            state: r.state,
            description: r.description.to_owned(),
            recommendations: r.recommendations.iter().map(|s| (*s).to_owned()).collect(),
            progress: r.progress,
            achieved_count: r.achieved_count,
        }
    }
}

/// Owned, serializable representation of an [`AntiIkigaiReading`].
///
/// The negative scores themselves live in [`AssessmentSnapshot::negative`]
/// rather than being duplicated here.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct AntiRecord {
    /// The resolved negative state.
    pub state: AntiIkigaiState,
    /// Warning strings attached to the state.
    pub warnings: Vec<String>,
    /// Severity of the detected pattern.
    pub risk: RiskLevel,
}

impl From<&AntiIkigaiReading> for AntiRecord {
    fn from(r: &AntiIkigaiReading) -> Self {
        Self {
            state: r.state,
            warnings: r.warnings.iter().map(|s| (*s).to_owned()).collect(),
            risk: r.risk,
        }
    }
}

/// Owned, serializable representation of a [`MaslowReading`].
///
/// The level scores live in [`AssessmentSnapshot::maslow_scores`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct MaslowRecord {
    /// The dominant need level.
    pub dominant: MaslowLevel,
    /// Readiness bucket of the dominant level.
    pub readiness: Readiness,
    /// Bucket-specific recommendations.
    pub recommendations: Vec<String>,
}

impl From<&MaslowReading> for MaslowRecord {
    fn from(r: &MaslowReading) -> Self {
        Self {
            dominant: r.dominant,
            readiness: r.readiness,
            recommendations: r.recommendations.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Owned, serializable representation of an [`OverallReading`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct OverallRecord {
    /// The combined status.
    pub status: OverallStatus,
    /// Status-specific recommendations.
    pub recommendations: Vec<String>,
}

impl From<&OverallReading> for OverallRecord {
    fn from(r: &OverallReading) -> Self {
        Self {
            status: r.status,
            recommendations: r.recommendations.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl AssessmentSnapshot {
    /// Run the full pipeline over `corpus` and capture the result.
    ///
    /// Evaluation order is fixed: positive scores, positive reading,
    /// negative reading (which consumes the positive scores), Maslow
    /// reading, combined verdict.
    pub fn from_corpus(corpus: &ResponseCorpus) -> Self {
        let positive = compute_positive_scores(corpus);
        let ikigai = classify_ikigai(&positive);
        let anti = classify_anti_ikigai(corpus, &positive);
        let maslow = classify_maslow(corpus);
        let overall = combine(&ikigai, &anti);

        Self {
            version: SNAPSHOT_VERSION,
            answered: corpus.answered_count(),
            positive,
            negative: anti.scores,
            maslow_scores: maslow.scores,
            ikigai: IkigaiRecord::from(&ikigai),
            anti: AntiRecord::from(&anti),
            maslow: MaslowRecord::from(&maslow),
            overall: OverallRecord::from(&overall),
        }
    }

    /// Whether the combined verdict flags an overriding negative risk.
    pub fn is_at_risk(&self) -> bool {
        matches!(
            self.overall.status,
            OverallStatus::CriticalRisk | OverallStatus::HighRisk
        )
    }
}
