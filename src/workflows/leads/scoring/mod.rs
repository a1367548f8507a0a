//! Deterministic rule layer: 0-50 points per lead, no I/O.

mod rules;

use super::domain::{Lead, Offer};
use serde::Serialize;

/// The three independently-capped sub-scores. Each is a multiple of 10, so the total
/// always lands in {0, 10, 20, 30, 40, 50}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleBreakdown {
    pub role: u8,
    pub industry: u8,
    pub completeness: u8,
}

impl RuleBreakdown {
    pub fn total(&self) -> u8 {
        self.role + self.industry + self.completeness
    }
}

pub fn score_lead(lead: &Lead, offer: &Offer) -> RuleBreakdown {
    RuleBreakdown {
        role: rules::role_points(&lead.role),
        industry: rules::industry_points(&lead.industry, &offer.ideal_use_cases),
        completeness: rules::completeness_points(lead),
    }
}
