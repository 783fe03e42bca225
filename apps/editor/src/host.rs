//! Capabilities the hosting page lends to the editor.

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Interactive yes/no prompt guarding destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Toast/alert surface.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

pub trait PageHost: Send + Sync {
    fn scroll_into_view(&self, container_id: &str);
    fn close_editor(&self);
    fn reload(&self);
}

/// The injected capabilities, held by the editor as trait objects.
#[derive(Clone)]
pub struct HostCapabilities {
    pub confirm: Arc<dyn Confirm>,
    pub notifier: Arc<dyn Notifier>,
    pub page: Arc<dyn PageHost>,
}

impl HostCapabilities {
    /// Uses one object for all three capabilities.
    pub fn shared<H>(host: Arc<H>) -> Self
    where
        H: Confirm + Notifier + PageHost + 'static,
    {
        Self {
            confirm: host.clone(),
            notifier: host.clone(),
            page: host,
        }
    }
}
