use super::super::domain::{Lead, Offer};

/// Single prompt embedding the offer and all six lead fields. The reply format it
/// requests is the contract the parser is built around.
pub fn build_prompt(lead: &Lead, offer: &Offer) -> String {
    format!(
        "Offer: {} - Value Props: {} - Ideal Use Cases: {}.\n\
         Prospect: Name: {}, Role: {}, Company: {}, Industry: {}, Location: {}, LinkedIn Bio: {}.\n\
         Classify intent (High/Medium/Low) and explain in 1-2 sentences. \
         Respond in this format: Intent: [High/Medium/Low]. Explanation: [1-2 sentences].",
        offer.name,
        offer.value_props.join(","),
        offer.ideal_use_cases.join(","),
        lead.name,
        lead.role,
        lead.company,
        lead.industry,
        lead.location,
        lead.linkedin_bio,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_offer_and_lead_fields() {
        let lead = Lead {
            name: "Bob".to_string(),
            role: "Marketing Manager".to_string(),
            company: "TechCorp".to_string(),
            industry: "SaaS".to_string(),
            location: "New York".to_string(),
            linkedin_bio: "Marketing professional".to_string(),
        };
        let offer = Offer {
            name: "AI Outreach Automation".to_string(),
            value_props: vec!["24/7 outreach".to_string(), "6x more meetings".to_string()],
            ideal_use_cases: vec!["B2B SaaS mid-market".to_string()],
        };

        let prompt = build_prompt(&lead, &offer);
        assert!(prompt.contains("Offer: AI Outreach Automation"));
        assert!(prompt.contains("Value Props: 24/7 outreach,6x more meetings"));
        assert!(prompt.contains("Ideal Use Cases: B2B SaaS mid-market"));
        assert!(prompt.contains("Name: Bob"));
        assert!(prompt.contains("Role: Marketing Manager"));
        assert!(prompt.contains("LinkedIn Bio: Marketing professional"));
        assert!(prompt.contains("Intent: [High/Medium/Low]"));
    }
}
