//! # ikigai-core
//!
//! Deterministic scoring and state classification for multi-dimensional
//! self-assessments: the Ikigai positive model, the Anti-Ikigai negative
//! risk model, and an eight-level Maslow need selector.
//!
//! ---
//!
//! ## This is not a survey renderer. It is a scoring engine.
//!
//! Three independent families read the same answer corpus and produce three
//! readings, which a final step folds into one verdict.
//!
//! **The positive family** — four dimensions (heart, body, mind, soul)
//! scored from keyword evidence in free-text answers plus routed slider
//! ratings, with an engagement floor so that answering at all is worth
//! something. Dimensions at or above the achieved threshold determine which
//! of the classical Ikigai intersection states the corpus is in.
//!
//! **The negative family** — four risk dimensions (power, skills, money,
//! endurance) scored the same way but with no engagement floor: risk must be
//! evidenced, never granted for participation. It also reads the positive
//! scores — a dangerously low heart or soul score converts into power,
//! endurance, or money penalties.
//! > "What you lack in love, you make up in leverage."
//!
//! **The Maslow family** — eight need levels scored from fulfilled,
//! unfulfilled, and domain keyword evidence, with the dominant level chosen
//! by a strictly-greater scan so ties resolve toward the lower, more
//! foundational need.
//!
//! None of the families shares mutable state. The same corpus always
//! produces the same three readings — except that the negative family must
//! run after positive scoring, because it consumes those scores.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! ResponseCorpus ─→ extract ─→ score ──→ ikigai  ─┐
//!        │                       │                ├─→ overall
//!        │                       └────→ anti    ──┘
//!        └─────────→ extract ─→ score ─→ maslow
//!                        ↑         ↑
//!                    lexicon   FamilyTuning
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`corpus`] | [`ResponseCorpus`], [`ResponseValue`] | Tagged answer storage: text or clamped rating |
//! | [`lexicon`] | [`LevelLexicon`] | Static keyword tables and per-hit weights |
//! | [`extract`] | [`PositiveHits`], [`NegativeHits`], [`MaslowHits`] | Raw evidence extraction from the corpus |
//! | [`score`] | [`PositiveScores`], [`NegativeScores`], [`MaslowScores`], [`FamilyTuning`] | Floors, caps, cross-dimension penalties |
//! | [`ikigai`] | [`IkigaiState`], [`IkigaiReading`] | Positive intersection classifier |
//! | [`anti`] | [`AntiIkigaiState`], [`RiskLevel`] | Negative pattern classifier with severity |
//! | [`maslow`] | [`MaslowLevel`], [`Readiness`] | Dominant-need selector and readiness bucket |
//! | [`overall`] | [`OverallStatus`] | Combined verdict — risk overrides achievement |
//! | [`report`] | [`report::AssessmentSnapshot`] | Serializable full-run snapshot (requires `serde` feature) |
//!
//! ## Features
//!
//! The crate has no default features. Enable `serde` for serialization
//! support on the public score and state types and for the [`report`]
//! snapshot module.
//!
//! [`ResponseCorpus`]: corpus::ResponseCorpus
//! [`ResponseValue`]: corpus::ResponseValue
//! [`LevelLexicon`]: lexicon::LevelLexicon
//! [`PositiveHits`]: extract::PositiveHits
//! [`NegativeHits`]: extract::NegativeHits
//! [`MaslowHits`]: extract::MaslowHits
//! [`PositiveScores`]: score::PositiveScores
//! [`NegativeScores`]: score::NegativeScores
//! [`MaslowScores`]: score::MaslowScores
//! [`FamilyTuning`]: score::FamilyTuning
//! [`IkigaiState`]: ikigai::IkigaiState
//! [`IkigaiReading`]: ikigai::IkigaiReading
//! [`AntiIkigaiState`]: anti::AntiIkigaiState
//! [`RiskLevel`]: anti::RiskLevel
//! [`MaslowLevel`]: maslow::MaslowLevel
//! [`Readiness`]: maslow::Readiness
//! [`OverallStatus`]: overall::OverallStatus

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod corpus; // ResponseValue + ResponseCorpus
pub mod lexicon; // keyword tables + per-hit weights
pub mod extract; // raw evidence extraction
pub mod score; // floors, caps, cross-penalties
pub mod ikigai; // positive intersection classifier
pub mod anti; // negative pattern classifier
pub mod maslow; // dominant-need selector
pub mod overall; // combined verdict
#[cfg(feature = "serde")]
pub mod report; // serializable full-run snapshot
