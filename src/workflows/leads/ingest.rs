use std::io::Read;

use serde::Deserialize;
use tracing::warn;

use super::domain::Lead;

/// Outcome of parsing an uploaded lead CSV.
#[derive(Debug)]
pub struct LeadImport {
    pub leads: Vec<Lead>,
    pub skipped: usize,
}

/// Parses a CSV with header `name,role,company,industry,location,linkedin_bio`.
///
/// Rows missing any required field (or rows the CSV reader cannot decode) are skipped
/// and logged rather than failing the upload; the caller replaces the lead batch with
/// whatever survived.
pub fn parse_leads<R: Read>(reader: R) -> LeadImport {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut leads = Vec::new();
    let mut skipped = 0;

    for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
        let row_number = index + 1;
        match record {
            Ok(row) => {
                let lead = row.into_lead();
                let missing = lead.missing_fields();
                if missing.is_empty() {
                    leads.push(lead);
                } else {
                    skipped += 1;
                    warn!(
                        row = row_number,
                        missing = %missing.join(", "),
                        "skipping lead row with missing fields"
                    );
                }
            }
            Err(err) => {
                skipped += 1;
                warn!(row = row_number, %err, "skipping undecodable lead row");
            }
        }
    }

    LeadImport { leads, skipped }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    linkedin_bio: String,
}

impl LeadRow {
    fn into_lead(self) -> Lead {
        Lead {
            name: self.name,
            role: self.role,
            company: self.company,
            industry: self.industry,
            location: self.location,
            linkedin_bio: self.linkedin_bio,
        }
    }
}
