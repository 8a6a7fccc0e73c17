use crate::settings::DashboardSettings;
use std::collections::HashSet;

/// Answers whether an application is installed and available.
pub trait AppManager: Send + Sync {
    fn is_installed(&self, app: &str) -> bool;
}

impl<F> AppManager for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_installed(&self, app: &str) -> bool {
        self(app)
    }
}

/// Installation checker backed by a set of application names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledApps {
    /// `None` means every application is installed.
    enabled: Option<HashSet<String>>,
}

impl InstalledApps {
    pub fn all() -> Self {
        Self { enabled: None }
    }

    pub fn only<I, S>(apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: Some(apps.into_iter().map(Into::into).collect()),
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            enabled: settings.enabled_apps.clone(),
        }
    }
}

impl AppManager for InstalledApps {
    fn is_installed(&self, app: &str) -> bool {
        self.enabled
            .as_ref()
            .map(|enabled| enabled.contains(app))
            .unwrap_or(true)
    }
}
