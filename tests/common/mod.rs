#![allow(dead_code)]

use anyhow::anyhow;
use dashboard_manager::{
    EventPublisher, Payload, ServiceRegistry, WidgetConfig, WidgetConfigProvider,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum EventCall {
    Users {
        widget_id: String,
        users: Vec<String>,
        payload: Payload,
        unique_id: String,
    },
    Groups {
        widget_id: String,
        groups: Vec<String>,
        payload: Payload,
        unique_id: String,
    },
    Global {
        widget_id: String,
        payload: Payload,
        unique_id: String,
    },
}

/// Events collaborator that records every call, optionally failing after.
#[derive(Default)]
pub struct RecordingEvents {
    pub calls: Mutex<Vec<EventCall>>,
    pub fail_with: Option<String>,
}

impl RecordingEvents {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<EventCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: EventCall) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

impl EventPublisher for RecordingEvents {
    fn create_users_event(
        &self,
        widget_id: &str,
        users: &[String],
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()> {
        self.record(EventCall::Users {
            widget_id: widget_id.to_string(),
            users: users.to_vec(),
            payload: payload.clone(),
            unique_id: unique_id.to_string(),
        })
    }

    fn create_groups_event(
        &self,
        widget_id: &str,
        groups: &[String],
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()> {
        self.record(EventCall::Groups {
            widget_id: widget_id.to_string(),
            groups: groups.to_vec(),
            payload: payload.clone(),
            unique_id: unique_id.to_string(),
        })
    }

    fn create_global_event(
        &self,
        widget_id: &str,
        payload: &Payload,
        unique_id: &str,
    ) -> anyhow::Result<()> {
        self.record(EventCall::Global {
            widget_id: widget_id.to_string(),
            payload: payload.clone(),
            unique_id: unique_id.to_string(),
        })
    }
}

/// Widgets collaborator returning a fixed config and recording its inputs.
pub struct StubWidgets {
    pub config: WidgetConfig,
    pub calls: Mutex<Vec<(String, String)>>,
    pub fail_with: Option<String>,
}

impl StubWidgets {
    pub fn returning(config: WidgetConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            config: WidgetConfig::new("unused", "unused"),
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl WidgetConfigProvider for StubWidgets {
    fn widget_config(&self, widget_id: &str, user_id: &str) -> anyhow::Result<WidgetConfig> {
        self.calls
            .lock()
            .unwrap()
            .push((widget_id.to_string(), user_id.to_string()));
        match &self.fail_with {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(self.config.clone()),
        }
    }
}

/// Registry whose every lookup fails with the same message.
pub struct BrokenRegistry {
    pub message: String,
}

impl BrokenRegistry {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl ServiceRegistry for BrokenRegistry {
    fn widgets(&self) -> anyhow::Result<Arc<dyn WidgetConfigProvider>> {
        Err(anyhow!(self.message.clone()))
    }

    fn events(&self) -> anyhow::Result<Arc<dyn EventPublisher>> {
        Err(anyhow!(self.message.clone()))
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn payload(pairs: &[(&str, &str)]) -> Payload {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}
