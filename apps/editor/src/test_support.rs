//! Recording host and stub API shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::{ClientError, ProfileApi, SaveResponse};
use crate::host::{Confirm, Notifier, PageHost, Severity};
use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    Proficiency, Profile, ProjectEntry, Skills,
};

pub struct RecordingHost {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    notifications: Mutex<Vec<(String, Severity)>>,
    scrolled: Mutex<Vec<String>>,
    page_events: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::default(),
            notifications: Mutex::default(),
            scrolled: Mutex::default(),
            page_events: Mutex::default(),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.lock().unwrap().clone()
    }

    pub fn page_events(&self) -> Vec<String> {
        self.page_events.lock().unwrap().clone()
    }
}

impl Confirm for RecordingHost {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}

impl Notifier for RecordingHost {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

impl PageHost for RecordingHost {
    fn scroll_into_view(&self, container_id: &str) {
        self.scrolled.lock().unwrap().push(container_id.to_string());
    }

    fn close_editor(&self) {
        self.page_events.lock().unwrap().push("close".to_string());
    }

    fn reload(&self) {
        self.page_events.lock().unwrap().push("reload".to_string());
    }
}

enum Behavior {
    Stored(Option<Profile>),
    Reject(Option<String>),
    Unreachable,
}

pub struct StubApi {
    behavior: Behavior,
    stored: Mutex<Vec<Profile>>,
}

impl StubApi {
    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            stored: Mutex::default(),
        }
    }

    pub fn empty() -> Self {
        Self::with(Behavior::Stored(None))
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self::with(Behavior::Stored(Some(profile)))
    }

    pub fn accepting() -> Self {
        Self::empty()
    }

    pub fn rejecting(error: Option<&str>) -> Self {
        Self::with(Behavior::Reject(error.map(str::to_string)))
    }

    pub fn unreachable() -> Self {
        Self::with(Behavior::Unreachable)
    }

    pub fn store_calls(&self) -> usize {
        self.stored.lock().unwrap().len()
    }

    pub fn last_stored(&self) -> Option<Profile> {
        self.stored.lock().unwrap().last().cloned()
    }
}

fn transport_error() -> ClientError {
    ClientError::Decode(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
}

#[async_trait]
impl ProfileApi for StubApi {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ClientError> {
        match &self.behavior {
            Behavior::Stored(profile) => Ok(profile.clone()),
            Behavior::Reject(_) => Ok(None),
            Behavior::Unreachable => Err(transport_error()),
        }
    }

    async fn store_profile(&self, profile: &Profile) -> Result<SaveResponse, ClientError> {
        match &self.behavior {
            Behavior::Stored(_) => {
                self.stored.lock().unwrap().push(profile.clone());
                Ok(SaveResponse {
                    success: true,
                    error: None,
                    message: Some("Profile updated successfully".to_string()),
                })
            }
            Behavior::Reject(error) => Ok(SaveResponse {
                success: false,
                error: error.clone(),
                message: None,
            }),
            Behavior::Unreachable => Err(transport_error()),
        }
    }
}

/// A profile already in collected form: trimmed, complete rows, no empty optionals.
pub fn sample_profile() -> Profile {
    Profile {
        personal_info: PersonalInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            linkedin: String::new(),
            location: "London".to_string(),
        },
        summary: "Analyst of engines.".to_string(),
        skills: Skills {
            languages: vec!["Rust".to_string(), "Python".to_string()],
            frameworks: vec![],
            tools: vec!["Git".to_string()],
            soft_skills: vec!["Writing".to_string()],
        },
        experience: vec![
            ExperienceEntry {
                company: "Analytical Engines Ltd".to_string(),
                title: "Engineer".to_string(),
                dates: "1842 - 1843".to_string(),
                location: Some("London".to_string()),
                responsibilities: vec![
                    "Wrote the first published algorithm".to_string(),
                    "Translated 1 paper with 7 notes".to_string(),
                ],
            },
            ExperienceEntry {
                company: "Initech".to_string(),
                title: "Analyst".to_string(),
                dates: "1840 - 1842".to_string(),
                location: None,
                responsibilities: vec![],
            },
        ],
        education: vec![EducationEntry {
            school: "Home tutoring".to_string(),
            degree: "Mathematics".to_string(),
            dates: "1830 - 1835".to_string(),
            gpa: None,
        }],
        projects: vec![ProjectEntry {
            name: "Note G".to_string(),
            description: "Bernoulli number computation".to_string(),
            technologies: vec!["Punch cards".to_string(), "Mill".to_string()],
            url: Some("https://example.com/note-g".to_string()),
        }],
        certifications: vec![CertificationEntry {
            name: "Royal Society Reader".to_string(),
            issuer: Some("Royal Society".to_string()),
            date: None,
            expiry: None,
        }],
        languages: vec![
            LanguageEntry {
                language: "English".to_string(),
                proficiency: Proficiency::Native,
            },
            LanguageEntry {
                language: "French".to_string(),
                proficiency: Proficiency::Fluent,
            },
        ],
    }
}
