//! Document mutations.
//!
//! Every operation leaves the document consistent: entry ids stay unique
//! within their list, insertion order is kept, and a `current` experience
//! never carries an end date. Writes addressed to an id that is not in the
//! list are silent no-ops reported through the `bool` return.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{
    Document, EducationEntry, ExperienceEntry, PersonalInfo, SkillEntry, SkillLevel, TemplateId,
};

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Field-level merge for `PersonalInfo`; `None` leaves the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub marital_status: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub id: Option<Uuid>,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEducation {
    pub id: Option<Uuid>,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub graduation_date: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSkill {
    pub id: Option<Uuid>,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// List helpers
// ────────────────────────────────────────────────────────────────────────────

trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for ExperienceEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for SkillEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Honours the requested id when it is non-nil and unused in `entries`,
/// otherwise draws a fresh one.
fn assign_id<T: Identified>(entries: &[T], requested: Option<Uuid>) -> Uuid {
    let taken = |id: Uuid| entries.iter().any(|e| e.id() == id);
    match requested {
        Some(id) if !id.is_nil() && !taken(id) => id,
        _ => loop {
            let id = Uuid::new_v4();
            if !taken(id) {
                break id;
            }
        },
    }
}

fn update_by_id<T: Identified>(entries: &mut [T], id: Uuid, apply: impl FnOnce(&mut T)) -> bool {
    match entries.iter_mut().find(|e| e.id() == id) {
        Some(entry) => {
            apply(entry);
            true
        }
        None => false,
    }
}

fn remove_by_id<T: Identified>(entries: &mut Vec<T>, id: Uuid) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id() != id);
    entries.len() != before
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document operations
// ────────────────────────────────────────────────────────────────────────────

impl Document {
    /// A fresh, empty resume using the modern template.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            template: TemplateId::Modern,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn set_template(&mut self, template: TemplateId) {
        self.template = template;
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        let info = &mut self.personal_info;
        merge(&mut info.full_name, patch.full_name);
        merge(&mut info.email, patch.email);
        merge(&mut info.phone, patch.phone);
        merge(&mut info.location, patch.location);
        merge(&mut info.website, patch.website);
        merge(&mut info.linkedin, patch.linkedin);
        merge(&mut info.summary, patch.summary);
        if patch.photo.is_some() {
            info.photo = patch.photo;
        }
        if patch.date_of_birth.is_some() {
            info.date_of_birth = patch.date_of_birth;
        }
        if patch.nationality.is_some() {
            info.nationality = patch.nationality;
        }
        if patch.marital_status.is_some() {
            info.marital_status = patch.marital_status;
        }
        if patch.languages.is_some() {
            info.languages = patch.languages;
        }
    }

    // ── experience ──────────────────────────────────────────────────────────

    pub fn add_experience(&mut self, new: NewExperience) -> Uuid {
        let id = assign_id(&self.experience, new.id);
        let end_date = if new.current { String::new() } else { new.end_date };
        self.experience.push(ExperienceEntry {
            id,
            company: new.company,
            position: new.position,
            location: new.location,
            start_date: new.start_date,
            end_date,
            current: new.current,
            description: new.description,
        });
        id
    }

    pub fn update_experience(&mut self, id: Uuid, patch: ExperiencePatch) -> bool {
        update_by_id(&mut self.experience, id, |exp| {
            merge(&mut exp.company, patch.company);
            merge(&mut exp.position, patch.position);
            merge(&mut exp.location, patch.location);
            merge(&mut exp.start_date, patch.start_date);
            merge(&mut exp.end_date, patch.end_date);
            merge(&mut exp.current, patch.current);
            merge(&mut exp.description, patch.description);
            if exp.current {
                exp.end_date.clear();
            }
        })
    }

    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.experience, id)
    }

    /// Replaces the whole list; every entry gets a fresh id.
    pub fn replace_experience(&mut self, entries: Vec<NewExperience>) {
        self.experience.clear();
        for new in entries {
            self.add_experience(NewExperience { id: None, ..new });
        }
    }

    // ── education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self, new: NewEducation) -> Uuid {
        let id = assign_id(&self.education, new.id);
        self.education.push(EducationEntry {
            id,
            institution: new.institution,
            degree: new.degree,
            field: new.field,
            graduation_date: new.graduation_date,
            gpa: new.gpa,
            description: new.description,
        });
        id
    }

    pub fn update_education(&mut self, id: Uuid, patch: EducationPatch) -> bool {
        update_by_id(&mut self.education, id, |edu| {
            merge(&mut edu.institution, patch.institution);
            merge(&mut edu.degree, patch.degree);
            merge(&mut edu.field, patch.field);
            merge(&mut edu.graduation_date, patch.graduation_date);
            if patch.gpa.is_some() {
                edu.gpa = patch.gpa;
            }
            merge(&mut edu.description, patch.description);
        })
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.education, id)
    }

    pub fn replace_education(&mut self, entries: Vec<NewEducation>) {
        self.education.clear();
        for new in entries {
            self.add_education(NewEducation { id: None, ..new });
        }
    }

    // ── skills ──────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, new: NewSkill) -> Uuid {
        let id = assign_id(&self.skills, new.id);
        self.skills.push(SkillEntry {
            id,
            name: new.name,
            level: new.level,
            category: new.category,
        });
        id
    }

    pub fn update_skill(&mut self, id: Uuid, patch: SkillPatch) -> bool {
        update_by_id(&mut self.skills, id, |skill| {
            merge(&mut skill.name, patch.name);
            merge(&mut skill.level, patch.level);
            merge(&mut skill.category, patch.category);
        })
    }

    pub fn remove_skill(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.skills, id)
    }

    pub fn replace_skills(&mut self, entries: Vec<NewSkill>) {
        self.skills.clear();
        for new in entries {
            self.add_skill(NewSkill { id: None, ..new });
        }
    }
}
