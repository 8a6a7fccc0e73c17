use crate::dashboard::model::{Payload, WidgetConfig};

/// Computes the configuration of a widget for a user.
pub trait WidgetConfigProvider: Send + Sync {
    fn widget_config(&self, widget_id: &str, user_id: &str) -> anyhow::Result<WidgetConfig>;
}

/// Creates widget events for a targeted audience.
///
/// `unique_id` is forwarded verbatim from the caller and is empty when none
/// was supplied.
pub trait EventPublisher: Send + Sync {
    fn create_users_event(
        &self,
        widget_id: &str,
        users: &[String],
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()>;

    fn create_groups_event(
        &self,
        widget_id: &str,
        groups: &[String],
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()>;

    fn create_global_event(
        &self,
        widget_id: &str,
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()>;
}
