use crate::dashboard::services::{EventPublisher, WidgetConfigProvider};
use anyhow::anyhow;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Collaborators the dashboard facade delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Widgets,
    Events,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Widgets => "WidgetsService",
            ServiceKind::Events => "EventsService",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of dashboard collaborators. Lookups may fail for any reason; the
/// facade reports such failures as unavailability.
pub trait ServiceRegistry: Send + Sync {
    fn widgets(&self) -> anyhow::Result<Arc<dyn WidgetConfigProvider>>;
    fn events(&self) -> anyhow::Result<Arc<dyn EventPublisher>>;
}

type Factory<T> = Arc<dyn Fn() -> anyhow::Result<Arc<T>> + Send + Sync>;

/// One registered collaborator: either handed in ready-made or built on first
/// use by a factory. A failed build is not cached.
struct ServiceSlot<T: ?Sized> {
    factory: Option<Factory<T>>,
    instance: OnceCell<Arc<T>>,
}

impl<T: ?Sized> Default for ServiceSlot<T> {
    fn default() -> Self {
        Self {
            factory: None,
            instance: OnceCell::new(),
        }
    }
}

impl<T: ?Sized> ServiceSlot<T> {
    fn ready(instance: Arc<T>) -> Self {
        Self {
            factory: None,
            instance: OnceCell::with_value(instance),
        }
    }

    fn lazy(factory: Factory<T>) -> Self {
        Self {
            factory: Some(factory),
            instance: OnceCell::new(),
        }
    }

    fn is_registered(&self) -> bool {
        self.instance.get().is_some() || self.factory.is_some()
    }

    fn resolve(&self, kind: ServiceKind) -> anyhow::Result<Arc<T>> {
        if let Some(instance) = self.instance.get() {
            return Ok(Arc::clone(instance));
        }
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| anyhow!("no {kind} registered"))?;
        let instance = self.instance.get_or_try_init(|| {
            tracing::debug!(service = %kind, "constructing dashboard collaborator");
            factory()
        })?;
        Ok(Arc::clone(instance))
    }
}

/// Registry filled by constructor injection.
#[derive(Default)]
pub struct Collaborators {
    widgets: ServiceSlot<dyn WidgetConfigProvider>,
    events: ServiceSlot<dyn EventPublisher>,
}

impl Collaborators {
    pub fn new(widgets: Arc<dyn WidgetConfigProvider>, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            widgets: ServiceSlot::ready(widgets),
            events: ServiceSlot::ready(events),
        }
    }

    pub fn with_widgets(mut self, widgets: Arc<dyn WidgetConfigProvider>) -> Self {
        self.widgets = ServiceSlot::ready(widgets);
        self
    }

    pub fn with_events(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = ServiceSlot::ready(events);
        self
    }

    pub fn with_widgets_factory<F>(mut self, build: F) -> Self
    where
        F: Fn() -> anyhow::Result<Arc<dyn WidgetConfigProvider>> + Send + Sync + 'static,
    {
        self.widgets = ServiceSlot::lazy(Arc::new(build));
        self
    }

    pub fn with_events_factory<F>(mut self, build: F) -> Self
    where
        F: Fn() -> anyhow::Result<Arc<dyn EventPublisher>> + Send + Sync + 'static,
    {
        self.events = ServiceSlot::lazy(Arc::new(build));
        self
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        match kind {
            ServiceKind::Widgets => self.widgets.is_registered(),
            ServiceKind::Events => self.events.is_registered(),
        }
    }
}

impl ServiceRegistry for Collaborators {
    fn widgets(&self) -> anyhow::Result<Arc<dyn WidgetConfigProvider>> {
        self.widgets.resolve(ServiceKind::Widgets)
    }

    fn events(&self) -> anyhow::Result<Arc<dyn EventPublisher>> {
        self.events.resolve(ServiceKind::Events)
    }
}
