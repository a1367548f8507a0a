use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::classifier::{CompletionOracle, IntentClassifier, IntentVerdict, OracleError};
use super::domain::{Lead, Offer, ScoredLead};
use super::export::{self, ExportError};
use super::scoring::{self, RuleBreakdown};
use super::session::ScoringSession;

/// Service composing the rule scorer, intent classifier, and session state.
pub struct LeadScoringService<O> {
    session: Arc<ScoringSession>,
    classifier: Arc<IntentClassifier<O>>,
}

impl<O> LeadScoringService<O>
where
    O: CompletionOracle + 'static,
{
    pub fn new(session: Arc<ScoringSession>, oracle: Arc<O>) -> Self {
        Self {
            session,
            classifier: Arc::new(IntentClassifier::new(oracle)),
        }
    }

    /// Replaces the active offer. The offer name is the only structurally required
    /// field; the value-prop and use-case lists may be empty.
    pub fn set_offer(&self, offer: Offer) -> Result<(), ScoringError> {
        if offer.name.trim().is_empty() {
            return Err(ScoringError::InvalidOffer);
        }
        self.session.set_offer(offer);
        Ok(())
    }

    /// Replaces the lead batch wholesale, returning the new batch size.
    pub fn replace_leads(&self, leads: Vec<Lead>) -> usize {
        let accepted = leads.len();
        self.session.replace_leads(leads);
        accepted
    }

    /// Current scored batch in feed order, empty until a run has committed.
    pub fn results(&self) -> Vec<ScoredLead> {
        self.session
            .scored()
            .map(|batch| batch.leads.as_ref().clone())
            .unwrap_or_default()
    }

    pub fn export_csv(&self) -> Result<String, ExportError> {
        export::write_csv(&self.results())
    }

    /// Scores the whole batch: precondition checks, then one concurrent pipeline per
    /// lead, awaited in input order so results line up with the upload.
    ///
    /// The run is all-or-nothing. Any per-lead failure (incomplete fields or an oracle
    /// failure) aborts the run and leaves the previously committed batch untouched;
    /// only a fully successful run is committed, in a single swap.
    pub async fn run_scoring(&self) -> Result<ScoringReport, ScoringError> {
        let offer = self.session.offer().ok_or(ScoringError::NoActiveOffer)?;
        let leads = self.session.leads();
        if leads.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }

        // Every lead must be complete before any oracle call goes out.
        for lead in leads.iter() {
            let missing = lead.missing_fields();
            if !missing.is_empty() {
                return Err(ScoringError::Lead {
                    name: lead.display_name().to_string(),
                    source: LeadScoreError::MissingFields(missing.join(", ")),
                });
            }
        }

        let mut handles = Vec::with_capacity(leads.len());
        for lead in leads.iter().cloned() {
            let classifier = Arc::clone(&self.classifier);
            let offer = Arc::clone(&offer);
            handles.push(tokio::spawn(async move {
                let name = lead.display_name().to_string();
                score_lead(&classifier, &offer, lead)
                    .await
                    .map_err(|source| ScoringError::Lead { name, source })
            }));
        }

        // Await the entire batch before deciding anything; report the first failure.
        let mut scored = Vec::with_capacity(handles.len());
        let mut failure: Option<ScoringError> = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(lead)) => scored.push(lead),
                Ok(Err(err)) => {
                    failure.get_or_insert(err);
                }
                Err(err) => {
                    failure.get_or_insert(ScoringError::TaskJoin(err.to_string()));
                }
            }
        }
        if let Some(err) = failure {
            return Err(err);
        }

        let batch = self.session.commit_scored(scored);
        info!(scored = batch.leads.len(), "lead scoring committed");
        Ok(ScoringReport {
            scored: batch.leads.len(),
            scored_at: batch.scored_at,
        })
    }
}

async fn score_lead<O: CompletionOracle>(
    classifier: &IntentClassifier<O>,
    offer: &Offer,
    lead: Lead,
) -> Result<ScoredLead, LeadScoreError> {
    let rules = scoring::score_lead(&lead, offer);
    let verdict = classifier.classify(&lead, offer).await?;
    Ok(combine(lead, rules, &verdict))
}

/// Merges the rule score and the classifier verdict. The reasoning format is a stable
/// contract consumed by the CSV export.
pub fn combine(lead: Lead, rules: RuleBreakdown, verdict: &IntentVerdict) -> ScoredLead {
    let rule_total = rules.total();
    ScoredLead {
        lead,
        intent: verdict.intent,
        score: rule_total + verdict.intent.points(),
        reasoning: format!(
            "Rule Score: {}. AI reasoning: {}",
            rule_total, verdict.explanation
        ),
    }
}

/// Summary returned to the caller after a committed run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub scored: usize,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no active offer; submit an offer before scoring")]
    NoActiveOffer,
    #[error("offer name must not be blank")]
    InvalidOffer,
    #[error("no leads uploaded")]
    EmptyBatch,
    #[error("failed to score lead '{name}': {source}")]
    Lead {
        name: String,
        #[source]
        source: LeadScoreError,
    },
    #[error("scoring task failed: {0}")]
    TaskJoin(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LeadScoreError {
    #[error("missing required fields: {0}")]
    MissingFields(String),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
