use serde::{Deserialize, Serialize};

/// Section labels emitted by the suggestion engine.
pub mod sections {
    pub const PERSONAL_SUMMARY: &str = "Personal Summary";
    pub const KEYWORDS: &str = "Keywords";
    pub const OVERALL_CONTENT: &str = "Overall Content";
    pub const EXPERIENCE_PREFIX: &str = "Experience - ";
    pub const SKILLS: &str = "Skills";
    pub const ACHIEVEMENTS: &str = "Achievements";
    pub const EDUCATION: &str = "Education";
    pub const ATS_OPTIMIZATION: &str = "ATS Optimization";
    pub const INDUSTRY_KEYWORDS: &str = "Industry Keywords";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Addition,
    Formatting,
}

/// Declaration order doubles as display order: `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Content,
    Formatting,
    Structure,
    Keywords,
}

/// One piece of heuristic feedback about a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub category: SuggestionCategory,
    #[serde(rename = "suggestion")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved: Option<String>,
}

impl Suggestion {
    pub fn new(
        section: impl Into<String>,
        kind: SuggestionKind,
        priority: Priority,
        category: SuggestionCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            kind,
            priority,
            category,
            message: message.into(),
            original: None,
            improved: None,
        }
    }

    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn with_improved(mut self, improved: impl Into<String>) -> Self {
        self.improved = Some(improved.into());
        self
    }
}

/// Suggestions bucketed by priority, highest first.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub suggestions: Vec<Suggestion>,
}

/// Buckets suggestions High → Medium → Low. Order inside a bucket follows the
/// input; empty buckets are omitted.
pub fn group_by_priority(suggestions: &[Suggestion]) -> Vec<PriorityGroup> {
    Priority::ALL
        .iter()
        .filter_map(|&priority| {
            let bucket: Vec<Suggestion> = suggestions
                .iter()
                .filter(|s| s.priority == priority)
                .cloned()
                .collect();
            (!bucket.is_empty()).then_some(PriorityGroup {
                priority,
                suggestions: bucket,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(section: &str, priority: Priority) -> Suggestion {
        Suggestion::new(
            section,
            SuggestionKind::Improvement,
            priority,
            SuggestionCategory::Content,
            "msg",
        )
    }

    #[test]
    fn test_wire_names_match_panel_format() {
        let s = make("Skills", Priority::Medium).with_improved("Consider adding: Rust");
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], "improvement");
        assert_eq!(v["priority"], "medium");
        assert_eq!(v["category"], "content");
        assert_eq!(v["suggestion"], "msg");
        assert!(v.get("original").is_none());
        assert_eq!(v["improved"], "Consider adding: Rust");
    }

    #[test]
    fn test_group_by_priority_orders_high_first_and_skips_empty() {
        let input = vec![
            make("a", Priority::Low),
            make("b", Priority::High),
            make("c", Priority::Low),
            make("d", Priority::High),
        ];
        let groups = group_by_priority(&input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].priority, Priority::High);
        let high: Vec<_> = groups[0].suggestions.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(high, ["b", "d"]);
        assert_eq!(groups[1].priority, Priority::Low);
        let low: Vec<_> = groups[1].suggestions.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(low, ["a", "c"]);
    }

    #[test]
    fn test_group_by_priority_empty_input() {
        assert!(group_by_priority(&[]).is_empty());
    }
}
