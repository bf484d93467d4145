//! Negative (Anti-Ikigai) risk classification.
//!
//! Structurally mirrors the positive classifier but with its own threshold
//! (60), its own cardinality semantics, and attached risk levels:
//!
//! ```text
//! k >= 3 → AntiIkigai, Critical — one terminal state, fixed warnings
//! k = 2  → pair lookup: Ambition, ProfessionTrap, Desperation (High),
//!          Corruption (Critical); the two remaining pairs are Unclassified
//! k = 1  → single-dimension warning, Medium
//! k = 0  → Safe, Low
//! ```
//!
//! The `{power, money}` and `{skills, endurance}` pairs were a silent
//! fallthrough in the system this engine derives from: no state assigned, no
//! warning produced, risk left at its Low default. That behaviour is pinned
//! here as the explicit, testable [`AntiIkigaiState::Unclassified`] entry
//! rather than guessed into a new archetype — see DESIGN.md.

use crate::corpus::ResponseCorpus;
use crate::score::{
    compute_negative_scores, NegativeDimension, NegativeScores, PositiveScores, NEGATIVE_TUNING,
};

// ─── RiskLevel ──────────────────────────────────────────────────────────────

/// Ordered severity of the detected risk pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// No concerning pattern.
    Low,
    /// One concerning dimension — course correction recommended.
    Medium,
    /// A dangerous two-dimension intersection.
    High,
    /// Approaching the full Anti-Ikigai, or a corruption pattern.
    Critical,
}

// ─── AntiIkigaiState ────────────────────────────────────────────────────────

/// Named state of the negative assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntiIkigaiState {
    /// Three or four dimensions elevated — the toxic full intersection.
    AntiIkigai,
    /// Power + skills: ruthlessly capable, emotionally hollow.
    Ambition,
    /// Skills + money: financial success without fulfillment.
    ProfessionTrap,
    /// Money + endurance: surviving financially, not thriving.
    Desperation,
    /// Power + endurance: toxic leadership and ethical compromise.
    Corruption,
    /// Power alone elevated.
    PowerSeeking,
    /// Money alone elevated.
    MoneyFocused,
    /// Endurance alone elevated.
    SurvivalMode,
    /// Skills alone elevated.
    SkillsWithoutPurpose,
    /// Nothing elevated — healthy trajectory.
    Safe,
    /// An elevated pair with no named archetype ({power, money} or
    /// {skills, endurance}). Carries no warnings and leaves risk at Low —
    /// pinned legacy behaviour made visible.
    Unclassified,
}

// ─── AntiIkigaiReading ──────────────────────────────────────────────────────

/// The full negative reading for one corpus state.
///
/// Serialize-only under the `serde` feature — see [`crate::report`] for the
/// owned, round-trippable record form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AntiIkigaiReading {
    /// The resolved state.
    pub state: AntiIkigaiState,
    /// Warning strings attached to the state. Empty for Safe and
    /// Unclassified.
    pub warnings: Vec<&'static str>,
    /// Severity of the detected pattern.
    pub risk: RiskLevel,
    /// The negative dimension scores the classification was made from.
    pub scores: NegativeScores,
}

// ─── Pair lookup table ──────────────────────────────────────────────────────

/// The six unordered elevated pairs, keyed by canonical sorted order
/// (power < skills < money < endurance). Two pairs are deliberately
/// Unclassified — see the module docs.
const PAIR_STATES: [(NegativeDimension, NegativeDimension, AntiIkigaiState, RiskLevel); 6] = [
    (NegativeDimension::Power, NegativeDimension::Skills, AntiIkigaiState::Ambition, RiskLevel::High),
    (NegativeDimension::Skills, NegativeDimension::Money, AntiIkigaiState::ProfessionTrap, RiskLevel::High),
    (NegativeDimension::Money, NegativeDimension::Endurance, AntiIkigaiState::Desperation, RiskLevel::High),
    (NegativeDimension::Power, NegativeDimension::Endurance, AntiIkigaiState::Corruption, RiskLevel::Critical),
    (NegativeDimension::Power, NegativeDimension::Money, AntiIkigaiState::Unclassified, RiskLevel::Low),
    (NegativeDimension::Skills, NegativeDimension::Endurance, AntiIkigaiState::Unclassified, RiskLevel::Low),
];

fn pair_entry(a: NegativeDimension, b: NegativeDimension) -> (AntiIkigaiState, RiskLevel) {
    PAIR_STATES
        .iter()
        .find(|(x, y, _, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, state, risk)| (*state, *risk))
        // All six pairs are covered in both orderings.
        .unwrap_or((AntiIkigaiState::Unclassified, RiskLevel::Low))
}

// ─── Classification ─────────────────────────────────────────────────────────

/// Classify an already-computed negative score set.
pub fn classify_anti_scores(scores: NegativeScores) -> AntiIkigaiReading {
    let elevated = scores.achieved(NEGATIVE_TUNING.achieved_threshold);

    let (state, risk, warnings): (AntiIkigaiState, RiskLevel, Vec<&'static str>) =
        match elevated.as_slice() {
            [_, _, _, ..] => (
                AntiIkigaiState::AntiIkigai,
                RiskLevel::Critical,
                vec![
                    "CRITICAL: You are approaching Anti-Ikigai - a toxic entrepreneurial state",
                    "Your motivations appear driven by power, money, or endurance rather than \
                     passion and purpose",
                    "Immediate course correction needed to avoid burnout and ethical compromises",
                ],
            ),
            [a, b] => {
                let (state, risk) = pair_entry(*a, *b);
                (state, risk, pair_warnings(state))
            }
            [single] => {
                let (state, warnings) = single_entry(*single);
                (state, RiskLevel::Medium, warnings)
            }
            _ => (AntiIkigaiState::Safe, RiskLevel::Low, Vec::new()),
        };

    AntiIkigaiReading {
        state,
        warnings,
        risk,
        scores,
    }
}

/// Score the corpus against the negative lexicon and classify.
///
/// Requires the already-computed positive scores — the negative family
/// cross-reads them (low heart raises power and endurance, low soul raises
/// money, skills aliases mind), so the positive pass must always run first.
pub fn classify_anti_ikigai(
    corpus: &ResponseCorpus,
    positive: &PositiveScores,
) -> AntiIkigaiReading {
    classify_anti_scores(compute_negative_scores(corpus, positive))
}

fn pair_warnings(state: AntiIkigaiState) -> Vec<&'static str> {
    match state {
        AntiIkigaiState::Ambition => vec![
            "AMBITION WARNING: You have power and skills but may lack love and purpose",
            "Risk: Becoming ruthlessly successful but emotionally hollow",
            "Focus on: What you truly love and how to serve others",
        ],
        AntiIkigaiState::ProfessionTrap => vec![
            "PROFESSION TRAP: You have skills and money focus but may lack passion",
            "Risk: Financial success without fulfillment or meaning",
            "Focus on: Finding your passion and creating positive impact",
        ],
        AntiIkigaiState::Desperation => vec![
            "DESPERATION WARNING: You are focused on money and just enduring",
            "Risk: Surviving financially but not thriving personally",
            "Focus on: Developing skills and finding what you love",
        ],
        AntiIkigaiState::Corruption => vec![
            "CORRUPTION RISK: Power-seeking combined with endurance can lead to toxic \
             leadership",
            "Risk: Becoming manipulative and ethically compromised",
            "Focus on: Developing genuine care for others and meaningful purpose",
        ],
        // Unclassified pairs carry no warnings — pinned legacy behaviour.
        _ => Vec::new(),
    }
}

fn single_entry(dim: NegativeDimension) -> (AntiIkigaiState, Vec<&'static str>) {
    match dim {
        NegativeDimension::Power => (
            AntiIkigaiState::PowerSeeking,
            vec![
                "Power-seeking detected: Be careful not to prioritize control over genuine \
                 value creation",
                "Balance with: Love, purpose, and service to others",
            ],
        ),
        NegativeDimension::Money => (
            AntiIkigaiState::MoneyFocused,
            vec![
                "Money-focused approach: Financial success without fulfillment leads to \
                 emptiness",
                "Balance with: Passion, skills development, and meaningful impact",
            ],
        ),
        NegativeDimension::Endurance => (
            AntiIkigaiState::SurvivalMode,
            vec![
                "Survival mode detected: Just enduring without passion leads to burnout",
                "Balance with: Finding what you love and developing your strengths",
            ],
        ),
        NegativeDimension::Skills => (
            AntiIkigaiState::SkillsWithoutPurpose,
            vec![
                "Skills without purpose: Technical competence needs direction and meaning",
                "Balance with: Clear purpose and genuine care for impact",
            ],
        ),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
