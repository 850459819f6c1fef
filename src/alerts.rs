use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertLevel {
    Success,
    Failure,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Alert {
    pub id: Uuid,
    pub level: AlertLevel,
    pub title: String,
    pub message: Option<String>,
}

impl Alert {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: AlertLevel::Success,
            title: title.into(),
            message: None,
        }
    }

    pub fn failure(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: AlertLevel::Failure,
            title: title.into(),
            message,
        }
    }
}

/// Destination for transient notifications. Emitting is fire-and-forget;
/// display duration and dismissal belong to whoever renders the queue.
pub trait AlertSink {
    fn emit(&mut self, alert: Alert);
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AlertQueue {
    alerts: Vec<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn retire(&mut self, id: Uuid) {
        self.alerts.retain(|a| a.id != id);
    }
}

impl AlertSink for AlertQueue {
    fn emit(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }
}
