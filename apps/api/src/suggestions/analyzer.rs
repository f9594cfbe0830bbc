//! Heuristic analyzer: rule checks over a document snapshot.
//!
//! Each rule reads the document and appends zero or more suggestions; no rule
//! depends on another's outcome. Output order is the rule order below, with
//! the two per-experience rules interleaved entry by entry.
//!
//! The only non-determinism is the wording picked for thin experience
//! descriptions and for the skill-count rule, drawn through `ChoiceSource`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{Document, ExperienceEntry};
use crate::models::suggestion::{
    sections, Priority, Suggestion, SuggestionCategory, SuggestionKind,
};
use crate::suggestions::choice::{choose, ChoiceSource};
use crate::suggestions::templates;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_DISTINCT_KEYWORDS: usize = 3;
const MIN_TOTAL_CONTENT_CHARS: usize = 300;
const MIN_EXPERIENCE_CHARS: usize = 100;
const MIN_SKILLS: usize = 5;

const IMPORTANT_KEYWORDS: &[&str] = &[
    "project",
    "team",
    "develop",
    "manage",
    "lead",
    "improve",
    "implement",
];

const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "implemented",
    "created",
    "managed",
    "optimized",
    "designed",
    "built",
    "established",
    "achieved",
];

/// An ASCII number (optionally with `%` or `$`), or an achievement verb
/// followed later on the same line by one.
static QUANTIFIED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9]+[%$]?|\b(increased|decreased|improved|reduced|saved|managed|led)\s+.*?[0-9]+")
        .expect("quantified-achievement pattern is valid")
});

/// Runs every content rule against `document`.
pub fn analyze(document: &Document, choice: &mut dyn ChoiceSource) -> Vec<Suggestion> {
    let mut out = Vec::new();

    check_summary(document, &mut out);
    check_keywords(document, &mut out);
    check_content_length(document, &mut out);
    for exp in &document.experience {
        check_experience_depth(exp, choice, &mut out);
        check_action_verbs(exp, &mut out);
    }
    check_skill_count(document, choice, &mut out);
    check_quantified_achievements(document, &mut out);
    check_education(document, &mut out);

    out
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

fn check_summary(document: &Document, out: &mut Vec<Suggestion>) {
    if char_len(&document.personal_info.summary) >= MIN_SUMMARY_CHARS {
        return;
    }
    out.push(
        Suggestion::new(
            sections::PERSONAL_SUMMARY,
            SuggestionKind::Improvement,
            Priority::High,
            SuggestionCategory::Content,
            templates::SUMMARY_MESSAGE,
        )
        .with_improved(generate_summary(document)),
    );
}

fn check_keywords(document: &Document, out: &mut Vec<Suggestion>) {
    let content = summary_and_experience_text(document).to_lowercase();
    let present = IMPORTANT_KEYWORDS
        .iter()
        .filter(|kw| content.contains(*kw))
        .count();
    if present >= MIN_DISTINCT_KEYWORDS {
        return;
    }
    out.push(
        Suggestion::new(
            sections::KEYWORDS,
            SuggestionKind::Improvement,
            Priority::High,
            SuggestionCategory::Keywords,
            templates::KEYWORDS_MESSAGE,
        )
        .with_improved(templates::KEYWORDS_IMPROVED),
    );
}

fn check_content_length(document: &Document, out: &mut Vec<Suggestion>) {
    if total_content_chars(document) >= MIN_TOTAL_CONTENT_CHARS {
        return;
    }
    out.push(Suggestion::new(
        sections::OVERALL_CONTENT,
        SuggestionKind::Addition,
        Priority::Medium,
        SuggestionCategory::Content,
        templates::CONTENT_LENGTH_MESSAGE,
    ));
}

fn check_experience_depth(
    exp: &ExperienceEntry,
    choice: &mut dyn ChoiceSource,
    out: &mut Vec<Suggestion>,
) {
    if char_len(&exp.description) >= MIN_EXPERIENCE_CHARS {
        return;
    }
    out.push(
        Suggestion::new(
            experience_section(exp),
            SuggestionKind::Improvement,
            Priority::High,
            SuggestionCategory::Content,
            templates::experience_depth_message(&exp.position),
        )
        .with_original(exp.description.clone())
        .with_improved(choose(choice, &templates::EXPERIENCE_BULLETS)),
    );
}

fn check_action_verbs(exp: &ExperienceEntry, out: &mut Vec<Suggestion>) {
    if exp.description.is_empty() || has_action_verb(&exp.description) {
        return;
    }
    out.push(
        Suggestion::new(
            experience_section(exp),
            SuggestionKind::Improvement,
            Priority::Medium,
            SuggestionCategory::Content,
            templates::ACTION_VERBS_MESSAGE,
        )
        .with_original(exp.description.clone()),
    );
}

fn check_skill_count(document: &Document, choice: &mut dyn ChoiceSource, out: &mut Vec<Suggestion>) {
    if document.skills.len() >= MIN_SKILLS {
        return;
    }
    let picked = choose(choice, &templates::SKILL_SETS);
    out.push(
        Suggestion::new(
            sections::SKILLS,
            SuggestionKind::Addition,
            Priority::Medium,
            SuggestionCategory::Content,
            templates::SKILLS_MESSAGE,
        )
        .with_improved(format!("{}{picked}", templates::SKILLS_IMPROVED_PREFIX)),
    );
}

fn check_quantified_achievements(document: &Document, out: &mut Vec<Suggestion>) {
    if has_quantified_achievement(&summary_and_experience_text(document)) {
        return;
    }
    out.push(
        Suggestion::new(
            sections::ACHIEVEMENTS,
            SuggestionKind::Improvement,
            Priority::High,
            SuggestionCategory::Content,
            templates::ACHIEVEMENTS_MESSAGE,
        )
        .with_improved(templates::ACHIEVEMENTS_IMPROVED),
    );
}

fn check_education(document: &Document, out: &mut Vec<Suggestion>) {
    if !document.education.is_empty() {
        return;
    }
    out.push(Suggestion::new(
        sections::EDUCATION,
        SuggestionKind::Addition,
        Priority::Low,
        SuggestionCategory::Content,
        templates::EDUCATION_MESSAGE,
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn experience_section(exp: &ExperienceEntry) -> String {
    format!("{}{}", sections::EXPERIENCE_PREFIX, exp.position)
}

/// Summary followed by every experience description, space separated.
fn summary_and_experience_text(document: &Document) -> String {
    let descriptions: Vec<&str> = document
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    format!("{} {}", document.personal_info.summary, descriptions.join(" "))
}

fn total_content_chars(document: &Document) -> usize {
    char_len(&document.personal_info.summary)
        + document
            .experience
            .iter()
            .map(|e| char_len(&e.description))
            .sum::<usize>()
        + document
            .education
            .iter()
            .map(|e| char_len(&e.description))
            .sum::<usize>()
}

pub fn has_action_verb(text: &str) -> bool {
    let lower = text.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}

pub fn has_quantified_achievement(text: &str) -> bool {
    QUANTIFIED_PATTERN.is_match(text)
}

/// Replacement summary: tailored when both experience and skills exist.
fn generate_summary(document: &Document) -> String {
    match document.skills.first() {
        Some(primary) if !document.experience.is_empty() => {
            let years = if document.experience.len() > 2 { "5+" } else { "3+" };
            let skill = if primary.name.is_empty() {
                "technology"
            } else {
                primary.name.as_str()
            };
            templates::experienced_summary(years, skill)
        }
        _ => templates::GENERIC_SUMMARY.to_string(),
    }
}
