//! Intent classifier adapter: builds one natural-language prompt per lead, issues a
//! single call to the external completion oracle, and parses the free-text reply into
//! a structured verdict. Only transport failures and empty payloads are errors;
//! ambiguous text degrades to a Low verdict instead.

mod gemini;
mod parser;
mod prompt;

pub use gemini::GeminiOracle;
pub use parser::{parse_verdict, IntentVerdict, NO_EXPLANATION_PLACEHOLDER};
pub use prompt::build_prompt;

use std::sync::Arc;

use async_trait::async_trait;

use super::domain::{Lead, Offer};

/// One-shot text completion boundary. No schema is enforced on the reply; the parser
/// is solely responsible for extracting structure.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("oracle returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("oracle returned an empty response")]
    EmptyResponse,
}

/// Classifies a lead's buying intent against the active offer.
pub struct IntentClassifier<O> {
    oracle: Arc<O>,
}

impl<O: CompletionOracle> IntentClassifier<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    /// Exactly one oracle call per lead; no batching, no retry.
    pub async fn classify(&self, lead: &Lead, offer: &Offer) -> Result<IntentVerdict, OracleError> {
        let prompt = prompt::build_prompt(lead, offer);
        let response = self.oracle.complete(&prompt).await?;
        if response.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(parser::parse_verdict(&response))
    }
}
