use crate::dashboard::registry::ServiceKind;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a collaborator could not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The owning application is not installed.
    AppNotInstalled,
    /// The registry failed to provide the collaborator.
    LookupFailed,
}

/// Raised when the dashboard backend cannot be resolved.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CollaboratorUnavailable {
    reason: UnavailableReason,
    service: Option<ServiceKind>,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl CollaboratorUnavailable {
    pub fn app_not_installed(app: &str) -> Self {
        Self {
            reason: UnavailableReason::AppNotInstalled,
            service: None,
            message: format!("the {app} app is not installed/available"),
            source: None,
        }
    }

    pub fn lookup_failed(service: ServiceKind, cause: anyhow::Error) -> Self {
        Self {
            reason: UnavailableReason::LookupFailed,
            service: Some(service),
            message: format!("issue while querying {service}: {cause}"),
            source: Some(cause.into()),
        }
    }

    pub fn reason(&self) -> UnavailableReason {
        self.reason
    }

    /// Collaborator whose lookup failed, if any.
    pub fn service(&self) -> Option<ServiceKind> {
        self.service
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned by every dashboard operation.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("widget id must not be empty")]
    EmptyWidgetId,
    #[error(transparent)]
    Unavailable(#[from] CollaboratorUnavailable),
    /// Failure reported by the collaborator itself, passed through as is.
    #[error(transparent)]
    Collaborator(anyhow::Error),
}

impl DashboardError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    pub fn as_unavailable(&self) -> Option<&CollaboratorUnavailable> {
        match self {
            Self::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}
