//! Combined verdict over the positive and negative readings.
//!
//! Negative risk dominates: a Critical or High risk pattern overrides
//! whatever the positive reading says, because an unhealthy motivation
//! undermines any intersection the positive scores suggest. Only below that
//! does the positive state decide the verdict.

use crate::anti::AntiIkigaiReading;
use crate::anti::RiskLevel;
use crate::ikigai::{IkigaiReading, IkigaiState};

// ─── OverallStatus ──────────────────────────────────────────────────────────

/// The combined assessment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverallStatus {
    /// Critical negative risk — overrides everything.
    CriticalRisk,
    /// High negative risk.
    HighRisk,
    /// Full positive intersection with no overriding risk.
    IkigaiAchieved,
    /// One of the four canonical two-dimension intersections.
    IntermediateState,
    /// Everything else — still building.
    Developing,
}

/// The combined reading: status plus its recommendation set.
///
/// Serialize-only under the `serde` feature — see [`crate::report`] for the
/// owned, round-trippable record form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OverallReading {
    /// The combined status.
    pub status: OverallStatus,
    /// Status-specific recommendations. For [`OverallStatus::IntermediateState`]
    /// these are the positive reading's own.
    pub recommendations: Vec<&'static str>,
}

/// Combine the positive and negative readings into one verdict.
///
/// Pure function of its two inputs; evaluation order (risk first, then
/// positive state) is part of the contract.
pub fn combine(ikigai: &IkigaiReading, anti: &AntiIkigaiReading) -> OverallReading {
    let (status, recommendations): (OverallStatus, Vec<&'static str>) =
        if anti.risk == RiskLevel::Critical {
            (
                OverallStatus::CriticalRisk,
                vec![
                    "Immediate intervention required to avoid toxic entrepreneurial patterns",
                    "Consider taking a break to reassess your motivations and values",
                    "Seek mentorship or counseling to realign with healthy entrepreneurship",
                ],
            )
        } else if anti.risk == RiskLevel::High {
            (
                OverallStatus::HighRisk,
                vec![
                    "Significant course correction needed to avoid unhealthy patterns",
                    "Focus on rediscovering your genuine passions and purpose",
                    "Prioritize relationships and collaborative success over individual gain",
                ],
            )
        } else if ikigai.state == IkigaiState::Ikigai {
            (
                OverallStatus::IkigaiAchieved,
                vec![
                    "Congratulations! You have achieved entrepreneurial Ikigai",
                    "Focus on maintaining balance across all four dimensions",
                    "Consider mentoring others on their entrepreneurial journey",
                ],
            )
        } else if matches!(
            ikigai.state,
            IkigaiState::Passion
                | IkigaiState::Mission
                | IkigaiState::Profession
                | IkigaiState::Vocation
        ) {
            (OverallStatus::IntermediateState, ikigai.recommendations.clone())
        } else {
            (
                OverallStatus::Developing,
                vec![
                    "Continue developing all four Ikigai dimensions",
                    "Provide more detailed responses to improve your assessment",
                    "Focus on areas where you scored lowest",
                ],
            )
        };

    OverallReading {
        status,
        recommendations,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anti::classify_anti_scores;
    use crate::ikigai::classify_ikigai;
    use crate::score::{NegativeScores, PositiveScores};

    fn positive(heart: f32, body: f32, mind: f32, soul: f32) -> IkigaiReading {
        classify_ikigai(&PositiveScores { heart, body, mind, soul })
    }

    fn negative(power: f32, skills: f32, money: f32, endurance: f32) -> AntiIkigaiReading {
        classify_anti_scores(NegativeScores { power, skills, money, endurance })
    }

    #[test]
    fn test_critical_risk_overrides_ikigai() {
        let ikigai = positive(90.0, 90.0, 90.0, 90.0);
        let anti = negative(80.0, 80.0, 80.0, 80.0);
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::CriticalRisk);
    }

    #[test]
    fn test_high_risk_overrides_intermediate() {
        let ikigai = positive(80.0, 20.0, 80.0, 20.0); // Passion
        let anti = negative(70.0, 70.0, 20.0, 20.0); // Ambition, High
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::HighRisk);
    }

    #[test]
    fn test_ikigai_achieved_when_safe() {
        let ikigai = positive(80.0, 80.0, 80.0, 80.0);
        let anti = negative(10.0, 10.0, 10.0, 10.0);
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::IkigaiAchieved);
    }

    #[test]
    fn test_intermediate_state_carries_positive_recommendations() {
        let ikigai = positive(80.0, 20.0, 80.0, 20.0); // Passion
        let anti = negative(10.0, 10.0, 10.0, 10.0);
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::IntermediateState);
        assert_eq!(overall.recommendations, ikigai.recommendations);
    }

    #[test]
    fn test_medium_risk_does_not_override() {
        // A single elevated negative dimension is Medium — the verdict
        // still follows the positive state.
        let ikigai = positive(80.0, 80.0, 80.0, 80.0);
        let anti = negative(70.0, 10.0, 10.0, 10.0);
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::IkigaiAchieved);
    }

    #[test]
    fn test_default_is_developing() {
        let ikigai = positive(10.0, 10.0, 10.0, 10.0); // Exploring
        let anti = negative(0.0, 0.0, 0.0, 0.0); // Safe
        let overall = combine(&ikigai, &anti);
        assert_eq!(overall.status, OverallStatus::Developing);
        assert_eq!(overall.recommendations.len(), 3);
    }
}
