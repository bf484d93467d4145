//! The response corpus — the engine's only input.
//!
//! Every assessment session owns one [`ResponseCorpus`]: a map from question
//! identifier to the answer given. Answers are typed at ingestion as
//! [`ResponseValue::Text`] (free text, keyword-scanned) or
//! [`ResponseValue::Rating`] (a pre-normalized slider value in [0.0, 100.0]
//! that bypasses keyword scanning entirely). Anything that is neither never
//! enters the corpus — the form layer drops it, so downstream code never
//! inspects a runtime type.
//!
//! The corpus grows monotonically during a session: answers are added or
//! edited, never removed. Every mutation is followed by a fresh recompute of
//! scores and states by the caller; the engine holds no cached state.
//!
//! # Invariants
//!
//! - Question identifiers are unique; re-answering replaces the prior value.
//! - Rating values are clamped to [0.0, 100.0] at ingestion.
//! - No classifier relies on corpus iteration order.

use hashbrown::HashMap;

// ─── ResponseValue ───────────────────────────────────────────────────────────

/// A single answer, typed at ingestion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseValue {
    /// Free-text answer. Scanned against the lexicon of each family.
    Text(String),
    /// Slider-driven numeric answer, pre-normalized to [0.0, 100.0].
    ///
    /// Ratings feed their target dimension directly (the question id names
    /// the dimension — see [`crate::extract`]) and are never keyword-scanned.
    Rating(f32),
}

impl ResponseValue {
    /// The free text, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            ResponseValue::Rating(_) => None,
        }
    }

    /// The slider value, if this is a rating answer.
    pub fn as_rating(&self) -> Option<f32> {
        match self {
            ResponseValue::Text(_) => None,
            ResponseValue::Rating(v) => Some(*v),
        }
    }
}

// ─── ResponseCorpus ──────────────────────────────────────────────────────────

/// All answers collected so far in one assessment session.
///
/// ```rust
/// use ikigai_core::corpus::ResponseCorpus;
///
/// let mut corpus = ResponseCorpus::new();
/// corpus.insert_text("heart_q1", "I love building products that help people");
/// corpus.insert_rating("mind_rating_1", 85.0);
/// assert_eq!(corpus.answered_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseCorpus {
    entries: HashMap<String, ResponseValue>,
}

impl ResponseCorpus {
    /// Create an empty corpus — the state at assessment start.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record a free-text answer. Replaces any prior answer to the question.
    pub fn insert_text(&mut self, question_id: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(question_id.into(), ResponseValue::Text(text.into()));
    }

    /// Record a slider answer, clamped to [0.0, 100.0].
    /// Replaces any prior answer to the question.
    pub fn insert_rating(&mut self, question_id: impl Into<String>, value: f32) {
        self.entries
            .insert(question_id.into(), ResponseValue::Rating(value.clamp(0.0, 100.0)));
    }

    /// Look up the answer to a question, if any.
    pub fn get(&self, question_id: &str) -> Option<&ResponseValue> {
        self.entries.get(question_id)
    }

    /// Number of answered questions. This drives every family's floor term.
    pub fn answered_count(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no question has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (question id, answer) pairs. Order is unspecified
    /// and no consumer may depend on it.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Whitespace-delimited word count of a text answer.
///
/// Used for the positive family's per-hit scaling and depth bonus.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
