use std::fmt;

/// The list-valued parts of a profile, each rendered into its own container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Certifications,
    Languages,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Certifications,
        Section::Languages,
    ];

    /// Stable identifier of the container the section renders into.
    pub fn container_id(&self) -> &'static str {
        match self {
            Section::Experience => "experience-container",
            Section::Education => "education-container",
            Section::Projects => "projects-container",
            Section::Certifications => "certifications-container",
            Section::Languages => "languages-container",
        }
    }

    /// Question put to the user before a row of this section is removed.
    pub fn remove_prompt(&self) -> &'static str {
        match self {
            Section::Experience => "Are you sure you want to remove this experience?",
            Section::Education => "Are you sure you want to remove this education entry?",
            Section::Projects => "Are you sure you want to remove this project?",
            Section::Certifications => "Are you sure you want to remove this certification?",
            Section::Languages => "Are you sure you want to remove this language?",
        }
    }

    /// Empty-state text shown instead of rows.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Section::Experience => {
                "No work experience added yet. Click \"Add Experience\" to get started."
            }
            Section::Education => {
                "No education entries added yet. Click \"Add Education\" to get started."
            }
            Section::Projects => "No projects added yet. Click \"Add Project\" to get started.",
            Section::Certifications => {
                "No certifications added yet. Click \"Add Certification\" to get started."
            }
            Section::Languages => "No languages added yet. Click \"Add Language\" to get started.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Languages => "languages",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fixed skill categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Add {} (comma-separated)", self.label().to_lowercase())
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            SkillCategory::Languages => 0,
            SkillCategory::Frameworks => 1,
            SkillCategory::Tools => 2,
            SkillCategory::SoftSkills => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_ids_are_distinct() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.container_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_skill_category_index_matches_display_order() {
        for (i, category) in SkillCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(
            SkillCategory::SoftSkills.placeholder(),
            "Add soft skills (comma-separated)"
        );
    }
}
