//! Per-row view-models.
//!
//! A row holds the raw text of its form controls exactly as the user sees
//! them. `from_entry` fills the controls from a document entry; `collect`
//! reads them back, trimming and splitting, and yields `None` when a required
//! field is blank so the row is left out of the collected document.

use uuid::Uuid;

use crate::collect::{non_empty, split_commas, split_lines};
use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, Proficiency,
    ProjectEntry,
};

/// Stable handle of a rendered row. Survives add/remove of other rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Row: Sized {
    type Entry: Default;
    type Field: Copy;

    fn from_entry(entry: &Self::Entry) -> Self;
    fn collect(&self) -> Option<Self::Entry>;
    fn id(&self) -> RowId;
    fn heading(&self) -> String;
    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: &str);
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Title,
    Dates,
    Location,
    /// One achievement per line.
    Responsibilities,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRow {
    id: RowId,
    pub company: String,
    pub title: String,
    pub dates: String,
    pub location: String,
    pub responsibilities: String,
}

impl Row for ExperienceRow {
    type Entry = ExperienceEntry;
    type Field = ExperienceField;

    fn from_entry(entry: &ExperienceEntry) -> Self {
        Self {
            id: RowId::new(),
            company: entry.company.clone(),
            title: entry.title.clone(),
            dates: entry.dates.clone(),
            location: entry.location.clone().unwrap_or_default(),
            responsibilities: entry.responsibilities.join("\n"),
        }
    }

    fn collect(&self) -> Option<ExperienceEntry> {
        let company = self.company.trim();
        let title = self.title.trim();
        let dates = self.dates.trim();
        if company.is_empty() || title.is_empty() || dates.is_empty() {
            return None;
        }
        Some(ExperienceEntry {
            company: company.to_string(),
            title: title.to_string(),
            dates: dates.to_string(),
            location: non_empty(&self.location),
            responsibilities: split_lines(&self.responsibilities),
        })
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn heading(&self) -> String {
        format!(
            "{} at {}",
            or_fallback(&self.title, "Untitled"),
            or_fallback(&self.company, "Unknown")
        )
    }

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Title => &self.title,
            ExperienceField::Dates => &self.dates,
            ExperienceField::Location => &self.location,
            ExperienceField::Responsibilities => &self.responsibilities,
        }
    }

    fn set(&mut self, field: ExperienceField, value: &str) {
        let slot = match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Title => &mut self.title,
            ExperienceField::Dates => &mut self.dates,
            ExperienceField::Location => &mut self.location,
            ExperienceField::Responsibilities => &mut self.responsibilities,
        };
        *slot = value.to_string();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Dates,
    Gpa,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationRow {
    id: RowId,
    pub school: String,
    pub degree: String,
    pub dates: String,
    pub gpa: String,
}

impl Row for EducationRow {
    type Entry = EducationEntry;
    type Field = EducationField;

    fn from_entry(entry: &EducationEntry) -> Self {
        Self {
            id: RowId::new(),
            school: entry.school.clone(),
            degree: entry.degree.clone(),
            dates: entry.dates.clone(),
            gpa: entry.gpa.clone().unwrap_or_default(),
        }
    }

    fn collect(&self) -> Option<EducationEntry> {
        let school = self.school.trim();
        let degree = self.degree.trim();
        let dates = self.dates.trim();
        if school.is_empty() || degree.is_empty() || dates.is_empty() {
            return None;
        }
        Some(EducationEntry {
            school: school.to_string(),
            degree: degree.to_string(),
            dates: dates.to_string(),
            gpa: non_empty(&self.gpa),
        })
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn heading(&self) -> String {
        format!(
            "{} - {}",
            or_fallback(&self.degree, "Untitled"),
            or_fallback(&self.school, "Unknown")
        )
    }

    fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::Dates => &self.dates,
            EducationField::Gpa => &self.gpa,
        }
    }

    fn set(&mut self, field: EducationField, value: &str) {
        let slot = match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::Dates => &mut self.dates,
            EducationField::Gpa => &mut self.gpa,
        };
        *slot = value.to_string();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    /// Comma-separated.
    Technologies,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    id: RowId,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub url: String,
}

impl Row for ProjectRow {
    type Entry = ProjectEntry;
    type Field = ProjectField;

    fn from_entry(entry: &ProjectEntry) -> Self {
        Self {
            id: RowId::new(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            technologies: entry.technologies.join(", "),
            url: entry.url.clone().unwrap_or_default(),
        }
    }

    fn collect(&self) -> Option<ProjectEntry> {
        let name = self.name.trim();
        let description = self.description.trim();
        if name.is_empty() || description.is_empty() {
            return None;
        }
        Some(ProjectEntry {
            name: name.to_string(),
            description: description.to_string(),
            technologies: split_commas(&self.technologies),
            url: non_empty(&self.url),
        })
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn heading(&self) -> String {
        or_fallback(&self.name, "Untitled Project").to_string()
    }

    fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Name => &self.name,
            ProjectField::Description => &self.description,
            ProjectField::Technologies => &self.technologies,
            ProjectField::Url => &self.url,
        }
    }

    fn set(&mut self, field: ProjectField, value: &str) {
        let slot = match field {
            ProjectField::Name => &mut self.name,
            ProjectField::Description => &mut self.description,
            ProjectField::Technologies => &mut self.technologies,
            ProjectField::Url => &mut self.url,
        };
        *slot = value.to_string();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationField {
    Name,
    Issuer,
    Date,
    Expiry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRow {
    id: RowId,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiry: String,
}

impl Row for CertificationRow {
    type Entry = CertificationEntry;
    type Field = CertificationField;

    fn from_entry(entry: &CertificationEntry) -> Self {
        Self {
            id: RowId::new(),
            name: entry.name.clone(),
            issuer: entry.issuer.clone().unwrap_or_default(),
            date: entry.date.clone().unwrap_or_default(),
            expiry: entry.expiry.clone().unwrap_or_default(),
        }
    }

    fn collect(&self) -> Option<CertificationEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(CertificationEntry {
            name: name.to_string(),
            issuer: non_empty(&self.issuer),
            date: non_empty(&self.date),
            expiry: non_empty(&self.expiry),
        })
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn heading(&self) -> String {
        or_fallback(&self.name, "Untitled Certification").to_string()
    }

    fn get(&self, field: CertificationField) -> &str {
        match field {
            CertificationField::Name => &self.name,
            CertificationField::Issuer => &self.issuer,
            CertificationField::Date => &self.date,
            CertificationField::Expiry => &self.expiry,
        }
    }

    fn set(&mut self, field: CertificationField, value: &str) {
        let slot = match field {
            CertificationField::Name => &mut self.name,
            CertificationField::Issuer => &mut self.issuer,
            CertificationField::Date => &mut self.date,
            CertificationField::Expiry => &mut self.expiry,
        };
        *slot = value.to_string();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

/// Free-text fields of a language row. Proficiency is a fixed choice and is
/// set through `LanguageRow::proficiency` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageField {
    Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    id: RowId,
    pub language: String,
    pub proficiency: Proficiency,
}

impl Row for LanguageRow {
    type Entry = LanguageEntry;
    type Field = LanguageField;

    fn from_entry(entry: &LanguageEntry) -> Self {
        Self {
            id: RowId::new(),
            language: entry.language.clone(),
            proficiency: entry.proficiency,
        }
    }

    fn collect(&self) -> Option<LanguageEntry> {
        let language = self.language.trim();
        if language.is_empty() {
            return None;
        }
        Some(LanguageEntry {
            language: language.to_string(),
            proficiency: self.proficiency,
        })
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn heading(&self) -> String {
        format!("{} - {}", or_fallback(&self.language, "Unknown"), self.proficiency)
    }

    fn get(&self, field: LanguageField) -> &str {
        match field {
            LanguageField::Language => &self.language,
        }
    }

    fn set(&mut self, field: LanguageField, value: &str) {
        match field {
            LanguageField::Language => self.language = value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_row_drops_when_title_blank() {
        let mut row = ExperienceRow::from_entry(&ExperienceEntry::default());
        row.set(ExperienceField::Company, "Acme");
        row.set(ExperienceField::Title, "   ");
        row.set(ExperienceField::Dates, "2020-2021");
        assert_eq!(row.collect(), None);
    }

    #[test]
    fn test_experience_row_collects_trimmed_fields() {
        let mut row = ExperienceRow::from_entry(&ExperienceEntry::default());
        row.set(ExperienceField::Company, " Acme ");
        row.set(ExperienceField::Title, "Engineer");
        row.set(ExperienceField::Dates, "2020 - Present");
        row.set(ExperienceField::Location, "  ");
        row.set(ExperienceField::Responsibilities, "Did X\n\nDid Y\n");

        let entry = row.collect().unwrap();
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.location, None);
        assert_eq!(entry.responsibilities, vec!["Did X", "Did Y"]);
    }

    #[test]
    fn test_experience_heading_fallbacks() {
        let row = ExperienceRow::from_entry(&ExperienceEntry::default());
        assert_eq!(row.heading(), "Untitled at Unknown");
    }

    #[test]
    fn test_project_row_splits_technologies() {
        let mut row = ProjectRow::from_entry(&ProjectEntry::default());
        row.set(ProjectField::Name, "Tracker");
        row.set(ProjectField::Description, "Time tracking");
        row.set(ProjectField::Technologies, "Python, Django,  PostgreSQL ");

        let entry = row.collect().unwrap();
        assert_eq!(entry.technologies, vec!["Python", "Django", "PostgreSQL"]);
        assert_eq!(entry.url, None);
    }

    #[test]
    fn test_project_row_fills_technologies_joined() {
        let entry = ProjectEntry {
            name: "Tracker".to_string(),
            description: "Time tracking".to_string(),
            technologies: vec!["Rust".to_string(), "Axum".to_string()],
            url: Some("https://example.com".to_string()),
        };
        let row = ProjectRow::from_entry(&entry);
        assert_eq!(row.get(ProjectField::Technologies), "Rust, Axum");
        assert_eq!(row.collect(), Some(entry));
    }

    #[test]
    fn test_education_requires_dates() {
        let mut row = EducationRow::from_entry(&EducationEntry::default());
        row.set(EducationField::School, "MIT");
        row.set(EducationField::Degree, "BSc");
        assert_eq!(row.collect(), None);
        row.set(EducationField::Dates, "2014 - 2018");
        row.set(EducationField::Gpa, "3.8/4.0");
        assert_eq!(row.collect().unwrap().gpa.as_deref(), Some("3.8/4.0"));
        assert_eq!(row.heading(), "BSc - MIT");
    }

    #[test]
    fn test_certification_only_name_required() {
        let mut row = CertificationRow::from_entry(&CertificationEntry::default());
        assert_eq!(row.collect(), None);
        row.set(CertificationField::Name, "CKA");
        let entry = row.collect().unwrap();
        assert_eq!(entry.issuer, None);
        assert_eq!(entry.expiry, None);
    }

    #[test]
    fn test_language_row_keeps_proficiency() {
        let mut row = LanguageRow::from_entry(&LanguageEntry::default());
        assert_eq!(row.proficiency, Proficiency::Professional);
        row.set(LanguageField::Language, "Spanish");
        row.proficiency = Proficiency::Fluent;
        assert_eq!(row.heading(), "Spanish - Fluent");
        assert_eq!(row.collect().unwrap().proficiency, Proficiency::Fluent);
    }

    #[test]
    fn test_row_ids_are_unique() {
        let a = LanguageRow::from_entry(&LanguageEntry::default());
        let b = LanguageRow::from_entry(&LanguageEntry::default());
        assert_ne!(a.id(), b.id());
    }
}
