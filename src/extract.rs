//! Feature extraction — the pure corpus scan behind every family.
//!
//! One pass over the [`ResponseCorpus`] per family produces raw per-dimension
//! accumulations plus the answered-question count. Nothing here is bounded or
//! floored; that is the aggregator's job ([`crate::score`]).
//!
//! Two answer kinds, two paths:
//!
//! - **Text** answers are lowercased once and tested against every lexicon
//!   entry of the family by substring containment, with the family's per-hit
//!   weighting applied ([`crate::lexicon`]).
//! - **Rating** answers bypass keyword scanning and feed their target
//!   dimension directly. The target is named in the question id: a rating
//!   whose id contains a dimension slug (`"heart_rating_2"`, `"power_q1"`,
//!   `"esteem_slider"`) routes to that dimension. Ratings with no
//!   recognizable slug contribute nothing but still count as answered.
//!
//! Every function here is pure — no side effects, no caching, `O(responses ×
//! lexicon size)`.

use crate::corpus::{word_count, ResponseCorpus, ResponseValue};
use crate::lexicon;
use crate::maslow::MaslowLevel;
use crate::score::{NegativeDimension, PositiveDimension};

// ─── Routing ────────────────────────────────────────────────────────────────

/// `true` if a question id names the given dimension slug.
///
/// Matching is case-insensitive substring containment, the same rule the
/// lexicon uses for answer text. The first slug that matches (in canonical
/// dimension order) wins, so ids should name exactly one dimension.
fn id_routes_to(question_id: &str, slug: &str) -> bool {
    question_id.to_lowercase().contains(slug)
}

// ─── Positive family ────────────────────────────────────────────────────────

/// Raw positive-family accumulations: unbounded, pre-floor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositiveHits {
    /// Raw accumulation per dimension, indexed by canonical order
    /// (heart, body, mind, soul).
    pub raw: [f32; 4],
    /// Total answered questions (text and rating alike).
    pub answered: usize,
}

impl PositiveHits {
    /// Raw accumulation for one dimension.
    pub fn get(&self, dim: PositiveDimension) -> f32 {
        let idx = PositiveDimension::ALL.iter().position(|d| *d == dim);
        self.raw[idx.unwrap_or(0)]
    }
}

/// Scan the corpus for positive-family features.
///
/// Per text answer: each keyword hit contributes `min(word_count × 0.5, 10)`
/// to its dimension; answers over 50 words additionally grant a depth bonus
/// `min((word_count − 50) × 0.2, 15)` to every dimension whose trigger terms
/// appear. Per rating answer: the value goes straight to the routed dimension.
pub fn positive_hits(corpus: &ResponseCorpus) -> PositiveHits {
    let mut hits = PositiveHits {
        answered: corpus.answered_count(),
        ..PositiveHits::default()
    };

    for (question_id, value) in corpus.iter() {
        match value {
            ResponseValue::Text(text) => {
                let lower = text.to_lowercase();
                let words = word_count(text);
                let per_hit = (words as f32 * lexicon::POSITIVE_HIT_WORD_FACTOR)
                    .min(lexicon::POSITIVE_HIT_CAP);

                for (idx, dim) in PositiveDimension::ALL.into_iter().enumerate() {
                    for term in lexicon::positive_terms(dim) {
                        if lower.contains(term) {
                            hits.raw[idx] += per_hit;
                        }
                    }
                }

                if words > lexicon::DEPTH_BONUS_MIN_WORDS {
                    let bonus = ((words - lexicon::DEPTH_BONUS_MIN_WORDS) as f32
                        * lexicon::DEPTH_BONUS_WORD_FACTOR)
                        .min(lexicon::DEPTH_BONUS_CAP);
                    for (idx, dim) in PositiveDimension::ALL.into_iter().enumerate() {
                        if lexicon::depth_triggers(dim).iter().any(|t| lower.contains(t)) {
                            hits.raw[idx] += bonus;
                        }
                    }
                }
            }
            ResponseValue::Rating(v) => {
                if let Some(idx) = PositiveDimension::ALL
                    .iter()
                    .position(|d| id_routes_to(question_id, d.slug()))
                {
                    hits.raw[idx] += v;
                }
            }
        }
    }

    hits
}

// ─── Negative family ────────────────────────────────────────────────────────

/// Raw negative-family accumulations: unbounded, pre-penalty.
///
/// The skills dimension never accumulates here — it is an alias of the
/// positive mind score, resolved by the aggregator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NegativeHits {
    /// Raw accumulation per dimension, indexed by canonical order
    /// (power, skills, money, endurance). The skills slot stays zero.
    pub raw: [f32; 4],
    /// Total answered questions.
    pub answered: usize,
}

impl NegativeHits {
    /// Raw accumulation for one dimension.
    pub fn get(&self, dim: NegativeDimension) -> f32 {
        let idx = NegativeDimension::ALL.iter().position(|d| *d == dim);
        self.raw[idx.unwrap_or(0)]
    }
}

/// Scan the corpus for negative-family features.
///
/// Text answers: each power / money / endurance keyword hit contributes a
/// flat +10 to its dimension; each manipulation-term hit contributes +15 to
/// power. Rating answers route to power, money, or endurance by slug; there
/// is no skills route because skills is derived, not answered.
pub fn negative_hits(corpus: &ResponseCorpus) -> NegativeHits {
    let mut hits = NegativeHits {
        answered: corpus.answered_count(),
        ..NegativeHits::default()
    };

    for (question_id, value) in corpus.iter() {
        match value {
            ResponseValue::Text(text) => {
                let lower = text.to_lowercase();

                for (idx, dim) in NegativeDimension::ALL.into_iter().enumerate() {
                    for term in lexicon::negative_terms(dim) {
                        if lower.contains(term) {
                            hits.raw[idx] += lexicon::NEGATIVE_HIT_WEIGHT;
                        }
                    }
                }
                for term in lexicon::MANIPULATION_TERMS {
                    if lower.contains(term) {
                        hits.raw[0] += lexicon::MANIPULATION_HIT_WEIGHT;
                    }
                }
            }
            ResponseValue::Rating(v) => {
                let routable = [
                    NegativeDimension::Power,
                    NegativeDimension::Money,
                    NegativeDimension::Endurance,
                ];
                if let Some(dim) = routable
                    .into_iter()
                    .find(|d| id_routes_to(question_id, d.slug()))
                {
                    let idx = NegativeDimension::ALL.iter().position(|d| *d == dim);
                    hits.raw[idx.unwrap_or(0)] += v;
                }
            }
        }
    }

    hits
}

// ─── Maslow family ──────────────────────────────────────────────────────────

/// Raw Maslow accumulations: unbounded, pre-floor. Unfulfilled-indicator
/// penalties can pull a raw value negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaslowHits {
    /// Raw accumulation per level, indexed by declaration order
    /// (physiological first).
    pub raw: [f32; 8],
    /// Total answered questions.
    pub answered: usize,
}

/// Scan the corpus for Maslow-family features.
///
/// Per text answer, per level: fulfilled indicators +20, unfulfilled
/// indicators −15, domain keywords +10. Ratings route by level slug.
pub fn maslow_hits(corpus: &ResponseCorpus) -> MaslowHits {
    let mut hits = MaslowHits {
        answered: corpus.answered_count(),
        ..MaslowHits::default()
    };

    for (question_id, value) in corpus.iter() {
        match value {
            ResponseValue::Text(text) => {
                let lower = text.to_lowercase();

                for (idx, level) in MaslowLevel::ALL.into_iter().enumerate() {
                    let lex = lexicon::level_lexicon(level);
                    for term in lex.fulfilled {
                        if lower.contains(term) {
                            hits.raw[idx] += lexicon::FULFILLED_HIT_WEIGHT;
                        }
                    }
                    for term in lex.unfulfilled {
                        if lower.contains(term) {
                            hits.raw[idx] -= lexicon::UNFULFILLED_HIT_PENALTY;
                        }
                    }
                    for term in lex.domain {
                        if lower.contains(term) {
                            hits.raw[idx] += lexicon::MASLOW_DOMAIN_HIT_WEIGHT;
                        }
                    }
                }
            }
            ResponseValue::Rating(v) => {
                if let Some(idx) = MaslowLevel::ALL
                    .iter()
                    .position(|l| id_routes_to(question_id, l.slug()))
                {
                    hits.raw[idx] += v;
                }
            }
        }
    }

    hits
}

// ─── Tests ──────────────────────────────────────────────────────────────────
