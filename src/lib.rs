pub mod apps;
pub mod dashboard;
pub mod logging;
pub mod settings;

pub use apps::{AppManager, InstalledApps};
pub use dashboard::{
    CollaboratorUnavailable, Collaborators, DashboardApi, DashboardError, DashboardManager,
    EventPublisher, Payload, ServiceKind, ServiceRegistry, UnavailableReason, WidgetConfig,
    WidgetConfigProvider, WidgetPosition,
};
pub use settings::DashboardSettings;
