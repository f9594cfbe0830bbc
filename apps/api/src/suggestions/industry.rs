//! Fixed, content-independent suggestions: ATS headings and industry keywords.

use crate::models::suggestion::{
    sections, Priority, Suggestion, SuggestionCategory, SuggestionKind,
};
use crate::suggestions::templates;

const FALLBACK_INDUSTRY: &str = "technology";

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "agile",
            "scrum",
            "CI/CD",
            "cloud computing",
            "API development",
            "microservices",
        ],
    ),
    (
        "marketing",
        &[
            "digital marketing",
            "SEO",
            "content strategy",
            "brand management",
            "analytics",
            "conversion optimization",
        ],
    ),
    (
        "finance",
        &[
            "financial analysis",
            "risk management",
            "compliance",
            "budgeting",
            "forecasting",
            "audit",
        ],
    ),
    (
        "healthcare",
        &[
            "patient care",
            "clinical protocols",
            "HIPAA compliance",
            "medical records",
            "quality assurance",
        ],
    ),
    (
        "education",
        &[
            "curriculum development",
            "student assessment",
            "classroom management",
            "educational technology",
        ],
    ),
];

/// Keyword list for an industry, matched case-insensitively. Unknown
/// industries get the technology list.
pub fn keywords_for(industry: &str) -> &'static [&'static str] {
    let wanted = industry.to_lowercase();
    let lookup = |name: &str| {
        INDUSTRY_KEYWORDS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, keywords)| *keywords)
    };
    lookup(&wanted)
        .or_else(|| lookup(FALLBACK_INDUSTRY))
        .unwrap_or(&[])
}

/// Always exactly one suggestion recommending standard section headings.
pub fn optimize_for_ats() -> Vec<Suggestion> {
    vec![Suggestion::new(
        sections::ATS_OPTIMIZATION,
        SuggestionKind::Formatting,
        Priority::High,
        SuggestionCategory::Structure,
        templates::ATS_MESSAGE,
    )
    .with_improved(templates::ATS_IMPROVED)]
}

/// Always exactly one suggestion listing the industry's keywords.
pub fn enhance_with_industry_keywords(industry: &str) -> Vec<Suggestion> {
    let keywords = keywords_for(industry);
    vec![Suggestion::new(
        sections::INDUSTRY_KEYWORDS,
        SuggestionKind::Improvement,
        Priority::High,
        SuggestionCategory::Keywords,
        templates::industry_message(industry),
    )
    .with_improved(format!(
        "{}{}",
        templates::INDUSTRY_IMPROVED_PREFIX,
        keywords.join(", ")
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_is_single_fixed_suggestion() {
        let out = optimize_for_ats();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].priority, Priority::High);
        assert_eq!(out[0].kind, SuggestionKind::Formatting);
        assert_eq!(out[0].category, SuggestionCategory::Structure);
        assert_eq!(out, optimize_for_ats());
    }

    #[test]
    fn test_mixed_case_finance_lists_finance_keywords() {
        let out = enhance_with_industry_keywords("Finance");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].priority, Priority::High);
        assert_eq!(out[0].category, SuggestionCategory::Keywords);
        assert_eq!(
            out[0].improved.as_deref(),
            Some("Consider incorporating: financial analysis, risk management, compliance, budgeting, forecasting, audit")
        );
        assert!(out[0].message.contains("Finance"));
    }

    #[test]
    fn test_unknown_industry_falls_back_to_technology() {
        assert_eq!(keywords_for("Underwater Basket Weaving"), keywords_for("technology"));
        assert!(keywords_for("TECHNOLOGY").contains(&"microservices"));
    }

    #[test]
    fn test_blank_or_padded_industry_falls_back_to_technology() {
        assert_eq!(keywords_for(""), keywords_for("technology"));
        assert_eq!(keywords_for(" finance "), keywords_for("technology"));
        assert_eq!(enhance_with_industry_keywords("").len(), 1);
    }

    #[test]
    fn test_every_industry_resolves() {
        for (name, keywords) in INDUSTRY_KEYWORDS {
            assert_eq!(keywords_for(&name.to_uppercase()), *keywords);
        }
    }
}
