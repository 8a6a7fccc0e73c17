use crate::apps::{AppManager, InstalledApps};
use crate::dashboard::error::{CollaboratorUnavailable, DashboardError};
use crate::dashboard::model::{Payload, WidgetConfig};
use crate::dashboard::registry::{ServiceKind, ServiceRegistry};
use crate::dashboard::services::{EventPublisher, WidgetConfigProvider};
use crate::settings::DashboardSettings;
use std::sync::Arc;

/// Name of the application owning the dashboard collaborators.
pub const DASHBOARD_APP: &str = "dashboard";

/// Unique token forwarded when the caller supplies none.
pub const NO_UNIQUE_ID: &str = "";

/// Public dashboard operations.
///
/// Event operations forward `unique_id` verbatim, or `""` when it is `None`.
pub trait DashboardApi {
    /// Returns the widgets collaborator's config for `widget_id` and `user_id`, unmodified.
    fn widget_config(&self, widget_id: &str, user_id: &str) -> Result<WidgetConfig, DashboardError>;

    /// Forwards an event for the listed users to the events collaborator.
    fn create_users_event(
        &self,
        widget_id: &str,
        users: &[String],
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError>;

    /// Forwards an event for the listed groups to the events collaborator.
    fn create_groups_event(
        &self,
        widget_id: &str,
        groups: &[String],
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError>;

    /// Forwards an event for every user to the events collaborator.
    fn create_global_event(
        &self,
        widget_id: &str,
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError>;
}

/// Forwards dashboard calls to the collaborators of the dashboard app, once
/// that app is known to be installed.
#[derive(Clone)]
pub struct DashboardManager {
    app_name: String,
    app_manager: Arc<dyn AppManager>,
    registry: Arc<dyn ServiceRegistry>,
}

impl DashboardManager {
    pub fn new(app_manager: Arc<dyn AppManager>, registry: Arc<dyn ServiceRegistry>) -> Self {
        Self {
            app_name: DASHBOARD_APP.to_string(),
            app_manager,
            registry,
        }
    }

    pub fn from_settings(settings: &DashboardSettings, registry: Arc<dyn ServiceRegistry>) -> Self {
        Self::new(Arc::new(InstalledApps::from_settings(settings)), registry)
            .with_app_name(&settings.app_name)
    }

    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = app_name.to_string();
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    fn resolve<T: ?Sized>(
        &self,
        kind: ServiceKind,
        lookup: impl FnOnce(&dyn ServiceRegistry) -> anyhow::Result<Arc<T>>,
    ) -> Result<Arc<T>, CollaboratorUnavailable> {
        if !self.app_manager.is_installed(&self.app_name) {
            tracing::warn!(app = %self.app_name, service = %kind, "dashboard app not installed");
            return Err(CollaboratorUnavailable::app_not_installed(&self.app_name));
        }
        lookup(self.registry.as_ref()).map_err(|err| {
            tracing::warn!(service = %kind, "dashboard collaborator lookup failed: {err}");
            CollaboratorUnavailable::lookup_failed(kind, err)
        })
    }

    fn widgets(&self) -> Result<Arc<dyn WidgetConfigProvider>, CollaboratorUnavailable> {
        self.resolve(ServiceKind::Widgets, |registry| registry.widgets())
    }

    fn events(&self) -> Result<Arc<dyn EventPublisher>, CollaboratorUnavailable> {
        self.resolve(ServiceKind::Events, |registry| registry.events())
    }
}

fn check_widget_id(widget_id: &str) -> Result<(), DashboardError> {
    if widget_id.is_empty() {
        return Err(DashboardError::EmptyWidgetId);
    }
    Ok(())
}

impl DashboardApi for DashboardManager {
    fn widget_config(&self, widget_id: &str, user_id: &str) -> Result<WidgetConfig, DashboardError> {
        check_widget_id(widget_id)?;
        let widgets = self.widgets()?;
        tracing::debug!(widget_id, user_id, "fetching widget config");
        widgets
            .widget_config(widget_id, user_id)
            .map_err(DashboardError::Collaborator)
    }

    fn create_users_event(
        &self,
        widget_id: &str,
        users: &[String],
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError> {
        check_widget_id(widget_id)?;
        let events = self.events()?;
        tracing::debug!(widget_id, users = users.len(), "creating users event");
        events
            .create_users_event(widget_id, users, payload, unique_id.unwrap_or(NO_UNIQUE_ID))
            .map_err(DashboardError::Collaborator)
    }

    fn create_groups_event(
        &self,
        widget_id: &str,
        groups: &[String],
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError> {
        check_widget_id(widget_id)?;
        let events = self.events()?;
        tracing::debug!(widget_id, groups = groups.len(), "creating groups event");
        events
            .create_groups_event(widget_id, groups, payload, unique_id.unwrap_or(NO_UNIQUE_ID))
            .map_err(DashboardError::Collaborator)
    }

    fn create_global_event(
        &self,
        widget_id: &str,
        payload: &Payload,
        unique_id: Option<&str>,
    ) -> Result<(), DashboardError> {
        check_widget_id(widget_id)?;
        let events = self.events()?;
        tracing::debug!(widget_id, "creating global event");
        events
            .create_global_event(widget_id, payload, unique_id.unwrap_or(NO_UNIQUE_ID))
            .map_err(DashboardError::Collaborator)
    }
}
