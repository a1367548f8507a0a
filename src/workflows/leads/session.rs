use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use super::domain::{Lead, Offer, ScoredLead};

/// A committed scoring run and when it happened.
#[derive(Debug, Clone)]
pub struct ScoredBatch {
    pub leads: Arc<Vec<ScoredLead>>,
    pub scored_at: DateTime<Utc>,
}

/// Process-wide scoring state, owned by the orchestrating layer and passed explicitly
/// rather than living in ambient globals.
///
/// Every setter swaps a whole `Arc`, so readers either see the previous batch or the
/// new one in full; a half-filled batch is never observable.
#[derive(Debug, Default)]
pub struct ScoringSession {
    offer: RwLock<Option<Arc<Offer>>>,
    leads: RwLock<Arc<Vec<Lead>>>,
    scored: RwLock<Option<ScoredBatch>>,
}

impl ScoringSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offer(&self, offer: Offer) {
        *self.offer.write().expect("offer lock poisoned") = Some(Arc::new(offer));
    }

    pub fn offer(&self) -> Option<Arc<Offer>> {
        self.offer.read().expect("offer lock poisoned").clone()
    }

    pub fn replace_leads(&self, leads: Vec<Lead>) {
        *self.leads.write().expect("leads lock poisoned") = Arc::new(leads);
    }

    pub fn leads(&self) -> Arc<Vec<Lead>> {
        self.leads.read().expect("leads lock poisoned").clone()
    }

    /// Replaces the scored batch in one swap and stamps the commit time.
    pub fn commit_scored(&self, leads: Vec<ScoredLead>) -> ScoredBatch {
        let batch = ScoredBatch {
            leads: Arc::new(leads),
            scored_at: Utc::now(),
        };
        *self.scored.write().expect("scored lock poisoned") = Some(batch.clone());
        batch
    }

    pub fn scored(&self) -> Option<ScoredBatch> {
        self.scored.read().expect("scored lock poisoned").clone()
    }
}
