use super::domain::ScoredLead;

/// Column order is an external contract consumed by downstream spreadsheets.
pub const EXPORT_HEADER: [&str; 9] = [
    "name",
    "role",
    "company",
    "industry",
    "location",
    "linkedin_bio",
    "intent",
    "score",
    "reasoning",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize results: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush results: {0}")]
    Flush(String),
    #[error("exported csv was not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders the scored batch as CSV. Fields containing commas or quotes (the reasoning
/// string regularly does) are quoted by the writer; an unscored session exports the
/// header line only.
pub fn write_csv(leads: &[ScoredLead]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for scored in leads {
        let score = scored.score.to_string();
        writer.write_record([
            scored.lead.name.as_str(),
            scored.lead.role.as_str(),
            scored.lead.company.as_str(),
            scored.lead.industry.as_str(),
            scored.lead.location.as_str(),
            scored.lead.linkedin_bio.as_str(),
            scored.intent.label(),
            score.as_str(),
            scored.reasoning.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
