use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales offer the current lead batch is evaluated against.
///
/// Exactly one offer is active at a time; submitting a new one replaces the previous
/// offer wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub value_props: Vec<String>,
    #[serde(default)]
    pub ideal_use_cases: Vec<String>,
}

/// A prospect record. All six fields are semantically required but not enforced at
/// parse time; completeness is checked when the batch is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub linkedin_bio: String,
}

impl Lead {
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", &self.name),
            ("role", &self.role),
            ("company", &self.company),
            ("industry", &self.industry),
            ("location", &self.location),
            ("linkedin_bio", &self.linkedin_bio),
        ]
    }

    /// Names of required fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Label used when wrapping per-lead failures for diagnostics.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "unknown"
        } else {
            &self.name
        }
    }
}

/// Classifier verdict for a lead. The points mapping is fixed: Low is the degrade
/// target for ambiguous oracle responses, so an unparseable verdict still earns the
/// minimum rather than failing the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    High,
    Medium,
    Low,
}

impl Intent {
    pub fn points(self) -> u8 {
        match self {
            Intent::High => 50,
            Intent::Medium => 30,
            Intent::Low => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intent::High => "High",
            Intent::Medium => "Medium",
            Intent::Low => "Low",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lead with its final score. `score` is 0-100 by construction: 0-50 rule points
/// plus 10-50 intent points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub lead: Lead,
    pub intent: Intent,
    pub score: u8,
    pub reasoning: String,
}
