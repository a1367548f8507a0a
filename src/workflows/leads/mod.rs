//! Lead intent scoring workflow.
//!
//! A batch of prospect leads is scored against the active sales offer by combining a
//! deterministic rule score (role seniority, industry overlap, data completeness) with
//! an intent verdict parsed from an external language-model oracle. The session holds
//! the active offer, the uploaded lead batch, and the most recent scored batch; each is
//! replaced wholesale, never mutated element by element.

pub mod classifier;
pub mod domain;
pub mod export;
pub mod ingest;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

pub use classifier::{
    CompletionOracle, GeminiOracle, IntentClassifier, IntentVerdict, OracleError,
};
pub use domain::{Intent, Lead, Offer, ScoredLead};
pub use export::ExportError;
pub use ingest::LeadImport;
pub use router::scoring_router;
pub use scoring::RuleBreakdown;
pub use service::{LeadScoreError, LeadScoringService, ScoringError, ScoringReport};
pub use session::{ScoredBatch, ScoringSession};
