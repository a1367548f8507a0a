use super::super::domain::Lead;

const DECISION_MAKER_KEYWORDS: [&str; 6] = ["head", "ceo", "director", "cfo", "cto", "vp"];
const INFLUENCER_KEYWORDS: [&str; 3] = ["manager", "lead", "specialist"];

/// Case-insensitive substring match; decision-maker keywords take priority and
/// short-circuit the influencer check.
pub(crate) fn role_points(role: &str) -> u8 {
    let role = role.to_lowercase();
    if DECISION_MAKER_KEYWORDS
        .iter()
        .any(|keyword| role.contains(keyword))
    {
        20
    } else if INFLUENCER_KEYWORDS
        .iter()
        .any(|keyword| role.contains(keyword))
    {
        10
    } else {
        0
    }
}

/// Word-overlap heuristic between the lead's industry and each ideal use case.
///
/// An exact match (every word of the use-case phrase appears in the lead's industry,
/// counted with duplicates on the lead side) is worth 20 and stops the scan at the
/// first such phrase. Any partial overlap is worth 10 but scanning continues, since a
/// later exact match must still win. No stemming or fuzzy matching.
pub(crate) fn industry_points(industry: &str, ideal_use_cases: &[String]) -> u8 {
    let lead_words: Vec<String> = industry
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut points = 0;
    for use_case in ideal_use_cases {
        let use_case_words: Vec<String> = use_case
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let overlap = lead_words
            .iter()
            .filter(|word| use_case_words.contains(word))
            .count();

        if !use_case_words.is_empty() && overlap == use_case_words.len() {
            return 20;
        }
        if overlap > 0 {
            points = 10;
        }
    }

    points
}

pub(crate) fn completeness_points(lead: &Lead) -> u8 {
    if lead.is_complete() {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::super::score_lead;
    use super::*;
    use crate::workflows::leads::domain::{Lead, Offer};

    fn sample_offer() -> Offer {
        Offer {
            name: "AI Outreach Automation".to_string(),
            value_props: vec!["24/7 outreach".to_string(), "6x more meetings".to_string()],
            ideal_use_cases: vec!["B2B SaaS mid-market".to_string()],
        }
    }

    fn lead(role: &str, industry: &str) -> Lead {
        Lead {
            name: "Alice".to_string(),
            role: role.to_string(),
            company: "FlowMetrics".to_string(),
            industry: industry.to_string(),
            location: "San Francisco".to_string(),
            linkedin_bio: "Experienced growth leader".to_string(),
        }
    }

    #[test]
    fn decision_maker_roles_score_twenty() {
        for role in [
            "Head of Growth",
            "CEO",
            "Sales Director",
            "cfo",
            "Group CTO",
            "VP of Sales",
        ] {
            assert_eq!(role_points(role), 20, "role: {role}");
        }
    }

    #[test]
    fn influencer_roles_score_ten() {
        for role in ["Marketing Manager", "Tech Lead", "Payroll Specialist"] {
            assert_eq!(role_points(role), 10, "role: {role}");
        }
    }

    #[test]
    fn decision_maker_keywords_win_over_influencer_keywords() {
        // "lead" is an influencer keyword but "head" wins.
        assert_eq!(role_points("Head of Lead Generation"), 20);
    }

    #[test]
    fn unrelated_roles_score_zero() {
        assert_eq!(role_points("Intern"), 0);
        assert_eq!(role_points(""), 0);
    }

    #[test]
    fn exact_icp_match_scores_twenty() {
        assert_eq!(
            industry_points("B2B SaaS mid-market", &sample_offer().ideal_use_cases),
            20
        );
        // Case-insensitive.
        assert_eq!(
            industry_points("b2b saas MID-MARKET", &sample_offer().ideal_use_cases),
            20
        );
    }

    #[test]
    fn partial_overlap_scores_ten() {
        assert_eq!(
            industry_points("SaaS", &sample_offer().ideal_use_cases),
            10
        );
        assert_eq!(
            industry_points("B2B SaaS enterprise", &sample_offer().ideal_use_cases),
            10
        );
    }

    #[test]
    fn no_overlap_scores_zero() {
        assert_eq!(industry_points("Retail", &sample_offer().ideal_use_cases), 0);
    }

    #[test]
    fn later_exact_match_overrides_earlier_partial_overlap() {
        let use_cases = vec!["B2B SaaS mid-market".to_string(), "Retail".to_string()];
        assert_eq!(industry_points("Retail", &use_cases), 20);
    }

    #[test]
    fn empty_use_case_list_scores_zero() {
        assert_eq!(industry_points("B2B SaaS mid-market", &[]), 0);
    }

    #[test]
    fn blank_use_case_phrase_never_counts_as_exact() {
        let use_cases = vec!["   ".to_string()];
        assert_eq!(industry_points("B2B SaaS mid-market", &use_cases), 0);
    }

    #[test]
    fn completeness_requires_every_field_non_blank() {
        let complete = lead("Intern", "Retail");
        assert_eq!(completeness_points(&complete), 10);

        let mut incomplete = complete.clone();
        incomplete.location = String::new();
        assert_eq!(completeness_points(&incomplete), 0);
    }

    #[test]
    fn decision_maker_exact_icp_complete_scores_fifty() {
        let breakdown = score_lead(&lead("Head of Growth", "B2B SaaS mid-market"), &sample_offer());
        assert_eq!(breakdown.role, 20);
        assert_eq!(breakdown.industry, 20);
        assert_eq!(breakdown.completeness, 10);
        assert_eq!(breakdown.total(), 50);
    }

    #[test]
    fn influencer_adjacent_complete_scores_thirty() {
        let breakdown = score_lead(&lead("Marketing Manager", "SaaS"), &sample_offer());
        assert_eq!(breakdown.total(), 30);
    }

    #[test]
    fn incomplete_lead_with_adjacent_industry_scores_ten() {
        let mut incomplete = lead("Intern", "SaaS");
        incomplete.location = String::new();
        incomplete.linkedin_bio = String::new();
        let breakdown = score_lead(&incomplete, &sample_offer());
        assert_eq!(breakdown.role, 0);
        assert_eq!(breakdown.industry, 10);
        assert_eq!(breakdown.completeness, 0);
        assert_eq!(breakdown.total(), 10);
    }

    #[test]
    fn totals_stay_in_rule_score_range() {
        let offers = sample_offer();
        for (role, industry) in [
            ("Intern", "Forestry"),
            ("Manager", "SaaS"),
            ("VP of Sales", "B2B SaaS mid-market"),
        ] {
            let total = score_lead(&lead(role, industry), &offers).total();
            assert!(total <= 50);
            assert_eq!(total % 10, 0);
        }
    }
}
