//! Suggestion application policy: folds a suggestion's improved text back
//! into the document.
//!
//! Only the personal summary has a merge strategy. Every other section is
//! dismissed without touching the document.

use crate::models::resume::Document;
use crate::models::suggestion::{sections, Suggestion};

/// Closed classification of the free-text section labels the engine emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    PersonalSummary,
    Keywords,
    OverallContent,
    Experience { position: String },
    Skills,
    Achievements,
    Education,
    AtsOptimization,
    IndustryKeywords,
    Other(String),
}

impl SectionKind {
    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Self {
        match label {
            sections::PERSONAL_SUMMARY => SectionKind::PersonalSummary,
            sections::KEYWORDS => SectionKind::Keywords,
            sections::OVERALL_CONTENT => SectionKind::OverallContent,
            sections::SKILLS => SectionKind::Skills,
            sections::ACHIEVEMENTS => SectionKind::Achievements,
            sections::EDUCATION => SectionKind::Education,
            sections::ATS_OPTIMIZATION => SectionKind::AtsOptimization,
            sections::INDUSTRY_KEYWORDS => SectionKind::IndustryKeywords,
            other => match other.strip_prefix(sections::EXPERIENCE_PREFIX) {
                Some(position) => SectionKind::Experience {
                    position: position.to_string(),
                },
                None => SectionKind::Other(other.to_string()),
            },
        }
    }
}

/// Applies `suggestion` to `document`. Without improved text, or for any
/// section other than the personal summary, the document comes back as-is.
pub fn apply(mut document: Document, suggestion: &Suggestion) -> Document {
    let Some(improved) = suggestion.improved.as_deref() else {
        return document;
    };
    match SectionKind::from_label(&suggestion.section) {
        SectionKind::PersonalSummary => {
            document.personal_info.summary = improved.to_string();
        }
        kind => {
            tracing::debug!("No merge strategy for {kind:?}; dismissing suggestion");
        }
    }
    document
}

/// Applies the pending suggestion at `index` and drops it from the pending
/// list, whether or not the document changed. An out-of-range index returns
/// both inputs untouched.
pub fn apply_pending(
    document: Document,
    mut pending: Vec<Suggestion>,
    index: usize,
) -> (Document, Vec<Suggestion>) {
    if index >= pending.len() {
        return (document, pending);
    }
    let suggestion = pending.remove(index);
    (apply(document, &suggestion), pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::suggestion::{Priority, SuggestionCategory, SuggestionKind};
    use chrono::Utc;

    fn suggestion(section: &str, improved: Option<&str>) -> Suggestion {
        let s = Suggestion::new(
            section,
            SuggestionKind::Improvement,
            Priority::High,
            SuggestionCategory::Content,
            "msg",
        );
        match improved {
            Some(text) => s.with_improved(text),
            None => s,
        }
    }

    fn doc_with_summary(summary: &str) -> Document {
        let mut doc = Document::new(Utc::now());
        doc.personal_info.summary = summary.to_string();
        doc
    }

    #[test]
    fn test_summary_suggestion_replaces_summary() {
        let doc = doc_with_summary("old");
        let s = suggestion(sections::PERSONAL_SUMMARY, Some("new summary"));
        assert_eq!(apply(doc, &s).personal_info.summary, "new summary");
    }

    #[test]
    fn test_applying_summary_twice_is_stable() {
        let doc = doc_with_summary("old");
        let s = suggestion(sections::PERSONAL_SUMMARY, Some("X"));
        let once = apply(doc, &s);
        let twice = apply(once.clone(), &s);
        assert_eq!(twice.personal_info.summary, "X");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_other_sections_leave_document_unchanged() {
        let doc = doc_with_summary("keep me");
        for section in [
            sections::KEYWORDS,
            sections::SKILLS,
            "Experience - Engineer",
            "personal summary",
            "Something Else",
        ] {
            let s = suggestion(section, Some("replacement"));
            assert_eq!(apply(doc.clone(), &s), doc, "section {section}");
        }
    }

    #[test]
    fn test_missing_improved_text_is_noop() {
        let doc = doc_with_summary("keep me");
        let s = suggestion(sections::PERSONAL_SUMMARY, None);
        assert_eq!(apply(doc.clone(), &s), doc);
    }

    #[test]
    fn test_section_kind_classification() {
        assert_eq!(
            SectionKind::from_label("Experience - Staff Engineer"),
            SectionKind::Experience {
                position: "Staff Engineer".to_string()
            }
        );
        assert_eq!(SectionKind::from_label("ATS Optimization"), SectionKind::AtsOptimization);
        assert_eq!(
            SectionKind::from_label("Misc"),
            SectionKind::Other("Misc".to_string())
        );
    }

    #[test]
    fn test_apply_pending_removes_even_without_merge() {
        let doc = doc_with_summary("keep me");
        let pending = vec![
            suggestion(sections::SKILLS, Some("Consider adding: Rust")),
            suggestion(sections::PERSONAL_SUMMARY, Some("fresh")),
        ];

        let (doc_after, pending) = apply_pending(doc.clone(), pending, 0);
        assert_eq!(doc_after, doc);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].section, sections::PERSONAL_SUMMARY);

        let (doc_after, pending) = apply_pending(doc_after, pending, 0);
        assert_eq!(doc_after.personal_info.summary, "fresh");
        assert!(pending.is_empty());
    }

    #[test]
    fn test_apply_pending_out_of_range_is_noop() {
        let doc = doc_with_summary("keep me");
        let pending = vec![suggestion(sections::SKILLS, None)];
        let (doc_after, pending_after) = apply_pending(doc.clone(), pending.clone(), 5);
        assert_eq!(doc_after, doc);
        assert_eq!(pending_after, pending);
    }
}
