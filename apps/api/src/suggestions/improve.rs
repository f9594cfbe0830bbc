use crate::suggestions::templates;

/// Canned rewrite for a section's content. Only `summary` and `experience`
/// (any case) have a rewrite; other sections return `content` unchanged.
pub fn improve_section_content(content: &str, section: &str) -> String {
    match section.to_lowercase().as_str() {
        "summary" => templates::REWRITTEN_SUMMARY.to_string(),
        "experience" => templates::REWRITTEN_EXPERIENCE.to_string(),
        _ => content.to_string(),
    }
}
