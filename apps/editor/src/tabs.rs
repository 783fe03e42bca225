use std::fmt;
use std::str::FromStr;

use crate::errors::EditorError;

/// Tabs of the editor page. Presentation only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Personal,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Languages,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Personal,
        Tab::Skills,
        Tab::Experience,
        Tab::Education,
        Tab::Projects,
        Tab::Certifications,
        Tab::Languages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Personal => "personal",
            Tab::Skills => "skills",
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::Projects => "projects",
            Tab::Certifications => "certifications",
            Tab::Languages => "languages",
        }
    }

    /// Identifier of the tab's content element.
    pub fn content_id(&self) -> String {
        format!("tab-{}", self.name())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| EditorError::UnknownTab(s.to_string()))
    }
}

/// Exactly one tab (and its content) is active at a time.
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Activates the tab called `name`; unknown names leave the bar as it was.
    pub fn switch_to(&mut self, name: &str) -> Result<Tab, EditorError> {
        let tab: Tab = name.parse()?;
        self.activate(tab);
        Ok(tab)
    }

    /// Every tab with its active flag, in display order.
    pub fn states(&self) -> impl Iterator<Item = (Tab, bool)> + '_ {
        Tab::ALL.into_iter().map(move |tab| (tab, tab == self.active))
    }
}
