//! Template projector: turns a `Document` into a render description.
//!
//! The description is presentation data only: which sections appear, in what
//! order, with display-ready text. The JSON preview and the HTML export are
//! both built from it.

use serde::Serialize;

use crate::models::resume::{Document, EducationEntry, ExperienceEntry, SkillEntry};
use crate::preview::dates::format_month_year;
use crate::preview::styles::{style_bundle, StyleBundle};

const NAME_PLACEHOLDER: &str = "Your Name";
const PRESENT: &str = "Present";
const LINKEDIN_LABEL: &str = "LinkedIn";

const SUMMARY_TITLE: &str = "Professional Summary";
const EXPERIENCE_TITLE: &str = "Professional Experience";
const EDUCATION_TITLE: &str = "Education";
const SKILLS_TITLE: &str = "Skills";

// ────────────────────────────────────────────────────────────────────────────
// Render description
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescription {
    pub template: &'static str,
    pub style: StyleBundle,
    pub header: RenderHeader,
    pub sections: Vec<RenderSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHeader {
    pub name: String,
    pub contacts: Vec<ContactItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub kind: ContactKind,
    /// Text shown on the page.
    pub label: String,
    /// Link target, when the label is not the value itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderSection {
    Summary { title: &'static str, text: String },
    Experience { title: &'static str, items: Vec<TimelineItem> },
    Education { title: &'static str, items: Vec<TimelineItem> },
    Skills { title: &'static str, groups: Vec<SkillGroup> },
}

impl RenderSection {
    pub fn title(&self) -> &'static str {
        match self {
            RenderSection::Summary { title, .. }
            | RenderSection::Experience { title, .. }
            | RenderSection::Education { title, .. }
            | RenderSection::Skills { title, .. } => *title,
        }
    }
}

/// One experience or education row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub title: String,
    pub organization: String,
    pub dates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBadge {
    pub name: String,
    pub level: String,
    pub label: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

pub fn project(document: &Document) -> RenderDescription {
    let mut sections = Vec::new();

    let summary = &document.personal_info.summary;
    if !summary.is_empty() {
        sections.push(RenderSection::Summary {
            title: SUMMARY_TITLE,
            text: summary.clone(),
        });
    }
    if !document.experience.is_empty() {
        sections.push(RenderSection::Experience {
            title: EXPERIENCE_TITLE,
            items: document.experience.iter().map(experience_item).collect(),
        });
    }
    if !document.education.is_empty() {
        sections.push(RenderSection::Education {
            title: EDUCATION_TITLE,
            items: document.education.iter().map(education_item).collect(),
        });
    }
    if !document.skills.is_empty() {
        sections.push(RenderSection::Skills {
            title: SKILLS_TITLE,
            groups: group_skills_by_category(&document.skills),
        });
    }

    RenderDescription {
        template: document.template.as_str(),
        style: style_bundle(document.template),
        header: header(document),
        sections,
    }
}

fn header(document: &Document) -> RenderHeader {
    let info = &document.personal_info;
    let name = if info.full_name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };

    let plain = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
        (ContactKind::Website, &info.website),
    ];
    let mut contacts: Vec<ContactItem> = plain
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| ContactItem {
            kind,
            label: value.clone(),
            href: None,
        })
        .collect();
    if !info.linkedin.is_empty() {
        contacts.push(ContactItem {
            kind: ContactKind::Linkedin,
            label: LINKEDIN_LABEL.to_string(),
            href: web_link(&info.linkedin),
        });
    }

    RenderHeader {
        name,
        contacts,
        photo: info.photo.clone().filter(|p| !p.is_empty()),
    }
}

/// Only `http(s)` URLs become links; anything else is shown as a label only.
fn web_link(value: &str) -> Option<String> {
    let url = value.trim();
    let scheme_end = url.find("://")?;
    let scheme = &url[..scheme_end];
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        .then(|| url.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn experience_item(entry: &ExperienceEntry) -> TimelineItem {
    let end = if entry.current {
        PRESENT.to_string()
    } else {
        format_month_year(&entry.end_date)
    };
    TimelineItem {
        title: entry.position.clone(),
        organization: entry.company.clone(),
        dates: format!("{} - {}", format_month_year(&entry.start_date), end),
        location: non_empty(&entry.location),
        detail: None,
        description: non_empty(&entry.description),
    }
}

fn education_item(entry: &EducationEntry) -> TimelineItem {
    TimelineItem {
        title: format!("{} in {}", entry.degree, entry.field),
        organization: entry.institution.clone(),
        dates: format_month_year(&entry.graduation_date),
        location: None,
        detail: entry
            .gpa
            .as_deref()
            .filter(|gpa| !gpa.is_empty())
            .map(|gpa| format!("GPA: {gpa}")),
        description: non_empty(&entry.description),
    }
}

/// Groups skills by category. Categories appear in the order they are first
/// seen; skills keep their list order inside each group.
pub fn group_skills_by_category(skills: &[SkillEntry]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let badge = SkillBadge {
            name: skill.name.clone(),
            level: skill.level.to_string(),
            label: format!("{} ({})", skill.name, skill.level),
        };
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(badge),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![badge],
            }),
        }
    }
    groups
}
