//! Reads the rendered view back into a fresh `Profile`.

use crate::models::{PersonalInfo, Profile, Skills};
use crate::view::ViewState;

/// One entry per non-blank line. Every line is trimmed on its own, so
/// indentation and trailing spaces inside multi-line text are not kept.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated tokens, trimmed, blanks dropped.
pub fn split_commas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Some(trimmed)` unless the text is blank.
pub fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Rows missing a required field are left out without notice; they never
/// block the rest of the profile from being saved.
pub fn collect(view: &ViewState) -> Profile {
    let personal = &view.personal;

    let mut skills = Skills::default();
    for (category, text) in view.skills.inputs() {
        skills.set(category, split_commas(text));
    }

    Profile {
        personal_info: PersonalInfo {
            name: personal.name.trim().to_string(),
            email: personal.email.trim().to_string(),
            phone: personal.phone.trim().to_string(),
            linkedin: personal.linkedin.trim().to_string(),
            location: personal.location.trim().to_string(),
        },
        summary: personal.summary.trim().to_string(),
        skills,
        experience: view.experience.collect(),
        education: view.education.collect(),
        projects: view.projects.collect(),
        certifications: view.certifications.collect(),
        languages: view.languages.collect(),
    }
}
