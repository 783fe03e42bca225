//! `ProfileEditor`: owns the profile document and its rendered view.
//!
//! Flow: `load` → `populate` → user edits / `add` / `remove` → `save`
//! (which runs `collect` and `validate` before the single store request).
//!
//! The editor is single-owner: every operation takes `&mut self`, so no two
//! mutations of the document can interleave.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::client::{HttpProfileApi, ProfileApi};
use crate::collect::collect;
use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::host::{HostCapabilities, Severity};
use crate::models::{Proficiency, Profile, Section, SkillCategory};
use crate::tabs::{Tab, TabBar};
use crate::validation::{validate, ValidationError};
use crate::view::{PersonalField, Row, RowField, SectionPanel, ViewState};

pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// How a call to `save` ended. The user has already been notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Blocked before any request was made.
    Invalid(ValidationError),
    Saved,
    /// The server answered `success: false`.
    Rejected(String),
    NetworkError(String),
}

pub struct ProfileEditor {
    profile: Profile,
    view: ViewState,
    tabs: TabBar,
    api: Arc<dyn ProfileApi>,
    host: HostCapabilities,
    reload_delay: Duration,
}

impl ProfileEditor {
    /// Starts from an empty profile with every section container mounted.
    pub fn new(api: Arc<dyn ProfileApi>, host: HostCapabilities) -> Self {
        Self::with_view(api, host, ViewState::default())
    }

    pub fn with_view(api: Arc<dyn ProfileApi>, host: HostCapabilities, view: ViewState) -> Self {
        let mut editor = Self {
            profile: Profile::default(),
            view,
            tabs: TabBar::default(),
            api,
            host,
            reload_delay: DEFAULT_RELOAD_DELAY,
        };
        editor.populate();
        editor
    }

    /// Builds an editor talking to the HTTP profile API named in `config`.
    pub fn from_config(
        config: &EditorConfig,
        host: HostCapabilities,
    ) -> Result<Self, crate::client::ClientError> {
        let api = HttpProfileApi::from_config(config)?;
        Ok(Self::new(Arc::new(api), host).with_reload_delay(config.reload_delay))
    }

    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    pub fn switch_tab(&mut self, name: &str) -> Result<Tab, EditorError> {
        self.tabs.switch_to(name)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Load / render
    // ────────────────────────────────────────────────────────────────────────

    /// Replaces the document with the stored profile and repopulates the view.
    ///
    /// A missing profile or a failed request leaves the current document in
    /// place; that is the normal first-run case and is not reported to the
    /// user. Returns whether a stored profile was applied.
    pub async fn load(&mut self) -> bool {
        match self.api.fetch_profile().await {
            Ok(Some(profile)) => {
                info!(
                    "Loaded stored profile ({} experience, {} education, {} projects)",
                    profile.experience.len(),
                    profile.education.len(),
                    profile.projects.len()
                );
                self.profile = profile;
                self.populate();
                true
            }
            Ok(None) => {
                debug!("No existing profile to load");
                false
            }
            Err(e) => {
                debug!("No existing profile to load: {e}");
                false
            }
        }
    }

    /// Pushes every field of the document into the view. Idempotent.
    pub fn populate(&mut self) {
        self.view
            .personal
            .fill(&self.profile.personal_info, &self.profile.summary);
        self.render_skills();
        for section in Section::ALL {
            self.render(section);
        }
    }

    pub fn render_skills(&mut self) {
        self.view.skills.render(&self.profile.skills);
    }

    /// Rebuilds one section's rows from the document, discarding unsaved
    /// edits in that section. No-op when the section has no container.
    pub fn render(&mut self, section: Section) {
        let Self { profile, view, .. } = self;
        match section {
            Section::Experience => view.experience.render(&profile.experience),
            Section::Education => view.education.render(&profile.education),
            Section::Projects => view.projects.render(&profile.projects),
            Section::Certifications => view.certifications.render(&profile.certifications),
            Section::Languages => view.languages.render(&profile.languages),
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Add / remove
    // ────────────────────────────────────────────────────────────────────────

    /// Appends an entry with default fields to `section`, shows its row and
    /// scrolls a mounted section into view. Returns the new entry's position.
    pub fn add(&mut self, section: Section) -> usize {
        let Self { profile, view, .. } = self;
        let position = match section {
            Section::Experience => append(&mut profile.experience, &mut view.experience),
            Section::Education => append(&mut profile.education, &mut view.education),
            Section::Projects => append(&mut profile.projects, &mut view.projects),
            Section::Certifications => {
                append(&mut profile.certifications, &mut view.certifications)
            }
            Section::Languages => append(&mut profile.languages, &mut view.languages),
        };
        debug!("Added {section} entry at position {position}");
        if self.view.is_mounted(section) {
            self.host.page.scroll_into_view(section.container_id());
        }
        position
    }

    /// Removes the entry at `position` after the user confirms.
    ///
    /// Positions follow render order; any add/remove/render shifts them.
    /// Returns `Ok(false)` when the user declines, in which case nothing
    /// changes.
    pub fn remove(&mut self, section: Section, position: usize) -> Result<bool, EditorError> {
        let len = self.len(section);
        if position >= len {
            return Err(EditorError::RowOutOfRange {
                section,
                position,
                len,
            });
        }

        if !self.host.confirm.confirm(section.remove_prompt()) {
            return Ok(false);
        }

        let Self { profile, view, .. } = self;
        match section {
            Section::Experience => delete(&mut profile.experience, &mut view.experience, position),
            Section::Education => delete(&mut profile.education, &mut view.education, position),
            Section::Projects => delete(&mut profile.projects, &mut view.projects, position),
            Section::Certifications => delete(
                &mut profile.certifications,
                &mut view.certifications,
                position,
            ),
            Section::Languages => delete(&mut profile.languages, &mut view.languages, position),
        }
        debug!("Removed {section} entry at position {position}");
        Ok(true)
    }

    /// Number of entries the document holds for `section`.
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.profile.experience.len(),
            Section::Education => self.profile.education.len(),
            Section::Projects => self.profile.projects.len(),
            Section::Certifications => self.profile.certifications.len(),
            Section::Languages => self.profile.languages.len(),
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Edits
    // ────────────────────────────────────────────────────────────────────────

    pub fn edit_personal(&mut self, field: PersonalField, value: &str) {
        self.view.personal.set(field, value);
    }

    pub fn edit_skills(&mut self, category: SkillCategory, value: &str) {
        self.view.skills.set(category, value);
    }

    /// Sets the text of one field of the row at `position`.
    pub fn edit_row(
        &mut self,
        position: usize,
        field: RowField,
        value: &str,
    ) -> Result<(), EditorError> {
        let view = &mut self.view;
        let updated = match field {
            RowField::Experience(f) => set_field(&mut view.experience, position, f, value),
            RowField::Education(f) => set_field(&mut view.education, position, f, value),
            RowField::Project(f) => set_field(&mut view.projects, position, f, value),
            RowField::Certification(f) => set_field(&mut view.certifications, position, f, value),
            RowField::Language(f) => set_field(&mut view.languages, position, f, value),
        };
        if updated {
            Ok(())
        } else {
            Err(self.row_out_of_range(field.section(), position))
        }
    }

    pub fn select_proficiency(
        &mut self,
        position: usize,
        proficiency: Proficiency,
    ) -> Result<(), EditorError> {
        let err = self.row_out_of_range(Section::Languages, position);
        let row = self.view.languages.row_mut(position).ok_or(err)?;
        row.proficiency = proficiency;
        Ok(())
    }

    fn row_out_of_range(&self, section: Section, position: usize) -> EditorError {
        EditorError::RowOutOfRange {
            section,
            position,
            len: self.view.row_count(section),
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Collect / save
    // ────────────────────────────────────────────────────────────────────────

    /// Reads the current view into a fresh profile. The document is untouched.
    pub fn collect(&self) -> Profile {
        collect(&self.view)
    }

    /// Collects, validates and stores the profile, notifying the user of the
    /// result. On success the editor is closed and the page reloaded after
    /// the reload delay. Failures are reported once and never retried.
    pub async fn save(&mut self) -> SaveOutcome {
        let profile = self.collect();

        if let Err(e) = validate(&profile) {
            self.host.notifier.notify(&e.to_string(), Severity::Error);
            return SaveOutcome::Invalid(e);
        }

        match self.api.store_profile(&profile).await {
            Ok(response) if response.success => {
                info!("Profile saved");
                self.profile = profile;
                self.host
                    .notifier
                    .notify("Profile saved successfully!", Severity::Success);
                self.host.page.close_editor();
                tokio::time::sleep(self.reload_delay).await;
                self.host.page.reload();
                SaveOutcome::Saved
            }
            Ok(response) => {
                let detail = response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string());
                self.host.notifier.notify(
                    &format!("Error saving profile: {detail}"),
                    Severity::Error,
                );
                SaveOutcome::Rejected(detail)
            }
            Err(e) => {
                warn!("Profile save failed: {e}");
                self.host
                    .notifier
                    .notify(&format!("Network error: {e}"), Severity::Error);
                SaveOutcome::NetworkError(e.to_string())
            }
        }
    }
}

fn append<R: Row>(entries: &mut Vec<R::Entry>, panel: &mut SectionPanel<R>) -> usize {
    let rows_in_sync = panel.rows().len() == entries.len();
    entries.push(R::Entry::default());
    let position = entries.len() - 1;
    if rows_in_sync {
        panel.push(&entries[position]);
    } else {
        panel.render(entries);
    }
    position
}

fn delete<R: Row>(entries: &mut Vec<R::Entry>, panel: &mut SectionPanel<R>, position: usize) {
    let rows_in_sync = panel.rows().len() == entries.len();
    entries.remove(position);
    if rows_in_sync {
        panel.remove(position);
    } else {
        panel.render(entries);
    }
}

fn set_field<R: Row>(
    panel: &mut SectionPanel<R>,
    position: usize,
    field: R::Field,
    value: &str,
) -> bool {
    match panel.row_mut(position) {
        Some(row) => {
            row.set(field, value);
            true
        }
        None => false,
    }
}
