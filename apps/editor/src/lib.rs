pub mod client;
pub mod collect;
pub mod config;
pub mod editor;
pub mod errors;
pub mod host;
pub mod models;
pub mod tabs;
pub mod validation;
pub mod view;

#[cfg(test)]
mod test_support;

pub use client::{ClientError, HttpProfileApi, ProfileApi, SaveResponse};
pub use config::EditorConfig;
pub use editor::{ProfileEditor, SaveOutcome};
pub use errors::EditorError;
pub use host::{Confirm, HostCapabilities, Notifier, PageHost, Severity};
pub use models::{Profile, Section, SkillCategory};
