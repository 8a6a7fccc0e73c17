pub mod error;
pub mod manager;
pub mod model;
pub mod registry;
pub mod services;

pub use error::{CollaboratorUnavailable, DashboardError, UnavailableReason};
pub use manager::{DashboardApi, DashboardManager, DASHBOARD_APP, NO_UNIQUE_ID};
pub use model::{Payload, WidgetConfig, WidgetPosition};
pub use registry::{Collaborators, ServiceKind, ServiceRegistry};
pub use services::{EventPublisher, WidgetConfigProvider};
