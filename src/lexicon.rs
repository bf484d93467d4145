//! Static lexicon tables — the read-only keyword data behind every family.
//!
//! Each assessment family scores free text by case-insensitive substring
//! containment against these tables. The tables are compile-time data; the
//! weights attached to a hit differ per family:
//!
//! | Family | Contribution per hit |
//! |--------|---------------------|
//! | Positive (Ikigai) | `min(word_count × 0.5, 10)`, plus a depth bonus `min((word_count − 50) × 0.2, 15)` for responses over 50 words, routed by trigger terms |
//! | Negative (Anti-Ikigai) | flat +10; manipulation terms +15 (to power) |
//! | Maslow | fulfilled indicator +20, unfulfilled indicator −15, domain keyword +10 |
//!
//! Multi-word entries ("business model", "help others") match as phrases —
//! containment is tested against the whole lowercased response, so phrase
//! entries behave exactly like single words.

use crate::maslow::MaslowLevel;
use crate::score::{NegativeDimension, PositiveDimension};

// ─── Positive family (Ikigai) ───────────────────────────────────────────────

/// Per-hit scale factor applied to the response word count.
pub const POSITIVE_HIT_WORD_FACTOR: f32 = 0.5;
/// Cap on a single keyword hit's contribution.
pub const POSITIVE_HIT_CAP: f32 = 10.0;
/// Word count above which a response earns a depth bonus.
pub const DEPTH_BONUS_MIN_WORDS: usize = 50;
/// Scale factor for the depth bonus (per word over the minimum).
pub const DEPTH_BONUS_WORD_FACTOR: f32 = 0.2;
/// Cap on the depth bonus per response per dimension.
pub const DEPTH_BONUS_CAP: f32 = 15.0;

/// Passion indicators — Heart ("what you love").
const HEART_TERMS: &[&str] = &[
    "love", "passion", "excited", "energized", "enjoy", "fulfilling",
    "meaningful", "inspiring", "motivating", "dream", "vision",
];

/// Market-viability indicators — Body ("what you can be paid for").
const BODY_TERMS: &[&str] = &[
    "customers", "market", "demand", "revenue", "profit", "business model",
    "pricing", "sales", "monetize", "value proposition", "competitive advantage",
];

/// Skill and competency indicators — Mind ("what you are good at").
const MIND_TERMS: &[&str] = &[
    "skilled", "experienced", "expert", "competent", "talented", "capable",
    "knowledge", "expertise", "proficient", "accomplished", "qualified",
];

/// Purpose and impact indicators — Soul ("what the world needs").
const SOUL_TERMS: &[&str] = &[
    "impact", "help", "solve", "improve", "change", "benefit", "serve",
    "contribute", "difference", "purpose", "mission", "social", "community",
];

/// Keyword table for one positive dimension.
pub fn positive_terms(dim: PositiveDimension) -> &'static [&'static str] {
    match dim {
        PositiveDimension::Heart => HEART_TERMS,
        PositiveDimension::Body => BODY_TERMS,
        PositiveDimension::Mind => MIND_TERMS,
        PositiveDimension::Soul => SOUL_TERMS,
    }
}

/// Trigger terms that route a long response's depth bonus to a dimension.
///
/// A response over [`DEPTH_BONUS_MIN_WORDS`] words grants its bonus to every
/// dimension whose trigger appears in it — a reflective answer can deepen
/// more than one dimension at once.
pub fn depth_triggers(dim: PositiveDimension) -> &'static [&'static str] {
    match dim {
        PositiveDimension::Heart => &["passion", "love"],
        PositiveDimension::Body => &["market", "customer"],
        PositiveDimension::Mind => &["skill", "experience"],
        PositiveDimension::Soul => &["impact", "help"],
    }
}

// ─── Negative family (Anti-Ikigai) ──────────────────────────────────────────

/// Flat contribution of one negative-family keyword hit.
pub const NEGATIVE_HIT_WEIGHT: f32 = 10.0;
/// Contribution of one manipulation-term hit (routed to power).
pub const MANIPULATION_HIT_WEIGHT: f32 = 15.0;

/// Power-seeking language.
const POWER_TERMS: &[&str] = &[
    "control", "dominate", "power", "authority", "influence", "status",
    "recognition", "prestige", "superiority", "command", "rule",
];

/// Money-only focus.
const MONEY_TERMS: &[&str] = &[
    "money", "profit", "wealth", "rich", "expensive", "luxury",
    "financial gain", "revenue", "income", "cash", "salary",
];

/// Mere-endurance language — tolerating rather than thriving.
const ENDURANCE_TERMS: &[&str] = &[
    "tolerate", "bear", "endure", "survive", "cope", "manage",
    "deal with", "put up with", "handle", "withstand",
];

/// Manipulation indicators. Weighted heavier than plain power terms and
/// routed to the power dimension — see [`MANIPULATION_HIT_WEIGHT`].
pub const MANIPULATION_TERMS: &[&str] = &[
    "manipulate", "exploit", "use people", "take advantage",
    "deceive", "trick", "fool", "mislead",
];

/// Keyword table for one negative dimension.
///
/// The skills dimension has no lexicon of its own — its score is an alias of
/// the positive mind score (high skill without purpose is the risk), so this
/// returns an empty table for it.
pub fn negative_terms(dim: NegativeDimension) -> &'static [&'static str] {
    match dim {
        NegativeDimension::Power => POWER_TERMS,
        NegativeDimension::Skills => &[],
        NegativeDimension::Money => MONEY_TERMS,
        NegativeDimension::Endurance => ENDURANCE_TERMS,
    }
}

// ─── Maslow family ──────────────────────────────────────────────────────────

/// Contribution of a fulfilled-indicator hit.
pub const FULFILLED_HIT_WEIGHT: f32 = 20.0;
/// Penalty of an unfulfilled-indicator hit (subtracted).
pub const UNFULFILLED_HIT_PENALTY: f32 = 15.0;
/// Contribution of a level domain-keyword hit.
pub const MASLOW_DOMAIN_HIT_WEIGHT: f32 = 10.0;

/// The three term tables attached to one Maslow level.
pub struct LevelLexicon {
    /// Indicators that the need is being met.
    pub fulfilled: &'static [&'static str],
    /// Indicators that the need is going unmet.
    pub unfulfilled: &'static [&'static str],
    /// Domain vocabulary of the level itself.
    pub domain: &'static [&'static str],
}

/// Term tables for one Maslow level.
pub fn level_lexicon(level: MaslowLevel) -> LevelLexicon {
    match level {
        MaslowLevel::Physiological => LevelLexicon {
            fulfilled: &["stable housing", "regular meals", "adequate sleep", "basic healthcare"],
            unfulfilled: &["food insecurity", "housing instability", "sleep deprivation", "health issues"],
            domain: &["food", "shelter", "sleep", "health", "basic needs", "survival"],
        },
        MaslowLevel::Safety => LevelLexicon {
            fulfilled: &["job security", "health insurance", "emergency fund", "stable environment"],
            unfulfilled: &["job insecurity", "financial stress", "health concerns", "unstable environment"],
            domain: &["security", "stable", "safe", "insurance", "savings", "job"],
        },
        MaslowLevel::Belonging => LevelLexicon {
            fulfilled: &["close relationships", "social support", "sense of belonging", "intimate connections"],
            unfulfilled: &["loneliness", "social isolation", "relationship conflicts", "lack of community"],
            domain: &["family", "friends", "community", "love", "relationship", "connection"],
        },
        MaslowLevel::Esteem => LevelLexicon {
            fulfilled: &["self-confidence", "recognition", "achievement", "respect from others"],
            unfulfilled: &["low self-esteem", "lack of recognition", "feeling undervalued", "imposter syndrome"],
            domain: &["respect", "recognition", "achievement", "success", "confidence", "pride"],
        },
        MaslowLevel::Cognitive => LevelLexicon {
            fulfilled: &["love of learning", "intellectual curiosity", "problem-solving", "continuous growth"],
            unfulfilled: &["intellectual stagnation", "lack of challenge", "limited learning opportunities"],
            domain: &["learn", "knowledge", "understand", "curious", "research", "study"],
        },
        MaslowLevel::Aesthetic => LevelLexicon {
            fulfilled: &["creative expression", "aesthetic appreciation", "artistic pursuits", "beautiful environment"],
            unfulfilled: &["creative blocks", "ugly surroundings", "lack of artistic outlet", "aesthetic dissatisfaction"],
            domain: &["beautiful", "creative", "art", "design", "aesthetic", "harmony"],
        },
        MaslowLevel::SelfActualization => LevelLexicon {
            fulfilled: &["personal growth", "authentic living", "fulfilling potential", "inner satisfaction"],
            unfulfilled: &["feeling stuck", "not living authentically", "unfulfilled potential", "existential dissatisfaction"],
            domain: &["potential", "growth", "authentic", "fulfillment", "purpose", "meaning"],
        },
        MaslowLevel::Transcendence => LevelLexicon {
            fulfilled: &["helping others grow", "spiritual connection", "legacy focus", "service orientation"],
            unfulfilled: &["self-centered focus", "lack of meaning", "no sense of higher purpose"],
            domain: &["help others", "legacy", "impact", "service", "spiritual", "humanity"],
        },
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
