//! The editable view: form controls for personal info, summary and skills,
//! and one panel of rows per list section.

pub mod rows;

use crate::models::{PersonalInfo, Section, SkillCategory, Skills};

pub use rows::{
    CertificationField, CertificationRow, EducationField, EducationRow, ExperienceField,
    ExperienceRow, LanguageField, LanguageRow, ProjectField, ProjectRow, Row, RowId,
};

/// What a mounted section container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent<R> {
    Placeholder(&'static str),
    Rows(Vec<R>),
}

/// The container of one list section. A panel built with `detached` has no
/// container in the host page; every operation on it is a no-op.
#[derive(Debug, Clone)]
pub struct SectionPanel<R> {
    section: Section,
    content: Option<PanelContent<R>>,
}

impl<R: Row> SectionPanel<R> {
    pub fn mounted(section: Section) -> Self {
        Self {
            section,
            content: Some(PanelContent::Placeholder(section.placeholder())),
        }
    }

    pub fn detached(section: Section) -> Self {
        Self {
            section,
            content: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_mounted(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&PanelContent<R>> {
        self.content.as_ref()
    }

    /// Rebuilds the panel from `entries`, one row per entry in order.
    pub fn render(&mut self, entries: &[R::Entry]) {
        let Some(content) = self.content.as_mut() else {
            return;
        };
        *content = if entries.is_empty() {
            PanelContent::Placeholder(self.section.placeholder())
        } else {
            PanelContent::Rows(entries.iter().map(R::from_entry).collect())
        };
    }

    /// Appends a row for a newly added entry, leaving existing rows as they are.
    pub(crate) fn push(&mut self, entry: &R::Entry) {
        match self.content.as_mut() {
            None => {}
            Some(PanelContent::Rows(rows)) => rows.push(R::from_entry(entry)),
            Some(content @ PanelContent::Placeholder(_)) => {
                *content = PanelContent::Rows(vec![R::from_entry(entry)]);
            }
        }
    }

    /// Drops the row at `position`, falling back to the placeholder when it
    /// was the last one.
    pub(crate) fn remove(&mut self, position: usize) {
        let placeholder = self.section.placeholder();
        if let Some(PanelContent::Rows(rows)) = &mut self.content {
            if position < rows.len() {
                rows.remove(position);
            }
            if rows.is_empty() {
                self.content = Some(PanelContent::Placeholder(placeholder));
            }
        }
    }

    pub fn rows(&self) -> &[R] {
        match &self.content {
            Some(PanelContent::Rows(rows)) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn row(&self, position: usize) -> Option<&R> {
        self.rows().get(position)
    }

    pub(crate) fn row_mut(&mut self, position: usize) -> Option<&mut R> {
        match &mut self.content {
            Some(PanelContent::Rows(rows)) => rows.get_mut(position),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.content {
            Some(PanelContent::Placeholder(text)) => Some(text),
            _ => None,
        }
    }

    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows().iter().position(|row| row.id() == id)
    }

    /// Entries of every row that passes its required-field check, in row order.
    pub fn collect(&self) -> Vec<R::Entry> {
        self.rows().iter().filter_map(R::collect).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Linkedin,
    Location,
    Summary,
}

/// Personal-info controls plus the summary text area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalPanel {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub summary: String,
}

impl PersonalPanel {
    pub fn fill(&mut self, info: &PersonalInfo, summary: &str) {
        self.name = info.name.clone();
        self.email = info.email.clone();
        self.phone = info.phone.clone();
        self.linkedin = info.linkedin.clone();
        self.location = info.location.clone();
        self.summary = summary.to_string();
    }

    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::Location => &self.location,
            PersonalField::Summary => &self.summary,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: &str) {
        let slot = match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::Location => &mut self.location,
            PersonalField::Summary => &mut self.summary,
        };
        *slot = value.to_string();
    }
}

/// One comma-separated text control per fixed skill category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsPanel {
    inputs: [String; 4],
}

impl SkillsPanel {
    pub fn render(&mut self, skills: &Skills) {
        for category in SkillCategory::ALL {
            self.inputs[category.index()] = skills.get(category).join(", ");
        }
    }

    pub fn get(&self, category: SkillCategory) -> &str {
        &self.inputs[category.index()]
    }

    pub fn set(&mut self, category: SkillCategory, value: &str) {
        self.inputs[category.index()] = value.to_string();
    }

    /// `(category, text)` for every category, in display order.
    pub fn inputs(&self) -> impl Iterator<Item = (SkillCategory, &str)> + '_ {
        SkillCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Addresses one editable text field of a list-section row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Experience(ExperienceField),
    Education(EducationField),
    Project(ProjectField),
    Certification(CertificationField),
    Language(LanguageField),
}

impl RowField {
    pub fn section(&self) -> Section {
        match self {
            RowField::Experience(_) => Section::Experience,
            RowField::Education(_) => Section::Education,
            RowField::Project(_) => Section::Projects,
            RowField::Certification(_) => Section::Certifications,
            RowField::Language(_) => Section::Languages,
        }
    }
}

/// Everything the editor renders.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub personal: PersonalPanel,
    pub skills: SkillsPanel,
    pub experience: SectionPanel<ExperienceRow>,
    pub education: SectionPanel<EducationRow>,
    pub projects: SectionPanel<ProjectRow>,
    pub certifications: SectionPanel<CertificationRow>,
    pub languages: SectionPanel<LanguageRow>,
}

impl ViewState {
    /// A view whose host page provides containers only for `sections`.
    pub fn with_sections(sections: &[Section]) -> Self {
        fn panel<R: Row>(section: Section, sections: &[Section]) -> SectionPanel<R> {
            if sections.contains(&section) {
                SectionPanel::mounted(section)
            } else {
                SectionPanel::detached(section)
            }
        }

        Self {
            personal: PersonalPanel::default(),
            skills: SkillsPanel::default(),
            experience: panel(Section::Experience, sections),
            education: panel(Section::Education, sections),
            projects: panel(Section::Projects, sections),
            certifications: panel(Section::Certifications, sections),
            languages: panel(Section::Languages, sections),
        }
    }

    pub fn is_mounted(&self, section: Section) -> bool {
        match section {
            Section::Experience => self.experience.is_mounted(),
            Section::Education => self.education.is_mounted(),
            Section::Projects => self.projects.is_mounted(),
            Section::Certifications => self.certifications.is_mounted(),
            Section::Languages => self.languages.is_mounted(),
        }
    }

    pub fn placeholder(&self, section: Section) -> Option<&'static str> {
        match section {
            Section::Experience => self.experience.placeholder(),
            Section::Education => self.education.placeholder(),
            Section::Projects => self.projects.placeholder(),
            Section::Certifications => self.certifications.placeholder(),
            Section::Languages => self.languages.placeholder(),
        }
    }

    pub fn row_count(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.rows().len(),
            Section::Education => self.education.rows().len(),
            Section::Projects => self.projects.rows().len(),
            Section::Certifications => self.certifications.rows().len(),
            Section::Languages => self.languages.rows().len(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_sections(&Section::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, LanguageEntry};

    fn acme() -> ExperienceEntry {
        ExperienceEntry {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            dates: "2020 - 2021".to_string(),
            location: None,
            responsibilities: vec!["Shipped 3 releases".to_string()],
        }
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let mut panel: SectionPanel<ExperienceRow> = SectionPanel::mounted(Section::Experience);
        panel.render(&[acme()]);
        assert_eq!(panel.rows().len(), 1);

        panel.render(&[]);
        assert_eq!(panel.placeholder(), Some(Section::Experience.placeholder()));
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn test_render_detached_is_noop() {
        let mut panel: SectionPanel<ExperienceRow> = SectionPanel::detached(Section::Experience);
        panel.render(&[acme()]);
        panel.push(&acme());
        panel.remove(0);
        assert!(!panel.is_mounted());
        assert!(panel.content().is_none());
        assert!(panel.collect().is_empty());
    }

    #[test]
    fn test_push_and_remove_keep_other_rows() {
        let mut panel: SectionPanel<LanguageRow> = SectionPanel::mounted(Section::Languages);
        panel.push(&LanguageEntry::default());
        panel.push(&LanguageEntry::default());
        panel
            .row_mut(0)
            .unwrap()
            .set(LanguageField::Language, "French");
        let first = panel.rows()[0].id();

        panel.remove(1);
        assert_eq!(panel.rows().len(), 1);
        assert_eq!(panel.rows()[0].language, "French");
        assert_eq!(panel.position_of(first), Some(0));

        panel.remove(0);
        assert_eq!(panel.placeholder(), Some(Section::Languages.placeholder()));
    }

    #[test]
    fn test_rerender_reproduces_same_rows() {
        let mut panel: SectionPanel<ExperienceRow> = SectionPanel::mounted(Section::Experience);
        panel.render(&[acme()]);
        let first: Vec<_> = panel.collect();
        panel.render(&[acme()]);
        assert_eq!(panel.collect(), first);
    }

    #[test]
    fn test_skills_panel_joins_with_comma_space() {
        let mut panel = SkillsPanel::default();
        let skills = Skills {
            tools: vec!["Git".to_string(), "Docker".to_string()],
            ..Default::default()
        };
        panel.render(&skills);
        assert_eq!(panel.get(SkillCategory::Tools), "Git, Docker");
        assert_eq!(panel.get(SkillCategory::Languages), "");
        assert_eq!(panel.inputs().count(), 4);
    }

    #[test]
    fn test_with_sections_mounts_only_listed() {
        let view = ViewState::with_sections(&[Section::Projects]);
        assert!(view.is_mounted(Section::Projects));
        assert!(!view.is_mounted(Section::Experience));
        assert_eq!(view.placeholder(Section::Experience), None);
    }

    #[test]
    fn test_row_field_section() {
        assert_eq!(
            RowField::Project(ProjectField::Url).section(),
            Section::Projects
        );
        assert_eq!(
            RowField::Language(LanguageField::Language).section(),
            Section::Languages
        );
    }
}
