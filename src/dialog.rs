use crate::alerts::{Alert, AlertSink};
use crate::registry::RegistryError;

/// Shown inline and in the failure alert when the backend response
/// carries no usable message.
pub const DELETE_FALLBACK_MESSAGE: &str = "Failed to delete organization";

/// Interaction state for the delete-organization confirmation dialog.
///
/// The app decides whether the dialog is open at all; this type tracks
/// everything between opening and closing: the target name (fixed for
/// the dialog's lifetime), the inline error from the last failed
/// attempt, and whether a delete request is outstanding.
#[derive(Clone, PartialEq, Debug)]
pub struct DeleteDialog {
    organization: String,
    error: Option<String>,
    pending: bool,
}

impl DeleteDialog {
    pub fn open(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            error: None,
            pending: false,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending
    }

    /// Start a delete attempt. Returns false while a previous attempt is
    /// still outstanding; the caller must not issue another request then.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.error = None;
        self.pending = true;
        true
    }

    /// Apply the outcome of the delete request, emitting the matching
    /// alert into `sink`. Returns true when the dialog should close.
    pub fn settle(
        &mut self,
        outcome: Result<(), RegistryError>,
        sink: &mut impl AlertSink,
    ) -> bool {
        self.pending = false;
        match outcome {
            Ok(()) => {
                self.error = None;
                sink.emit(Alert::success(format!(
                    "Successfully deleted organization {}",
                    self.organization
                )));
                true
            }
            Err(err) => {
                let detail = err
                    .error_message()
                    .unwrap_or(DELETE_FALLBACK_MESSAGE)
                    .to_string();
                sink.emit(Alert::failure(
                    format!("Failed to delete organization {}", self.organization),
                    Some(detail.clone()),
                ));
                self.error = Some(detail);
                false
            }
        }
    }

    /// Cancel/close. Clears the inline error so a reopened dialog starts
    /// clean.
    pub fn close(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertLevel, AlertQueue};

    fn api_error(message: Option<&str>) -> RegistryError {
        RegistryError::Api {
            status: 400,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_open_starts_clean() {
        let dialog = DeleteDialog::open("acme");
        assert_eq!(dialog.organization(), "acme");
        assert_eq!(dialog.error(), None);
        assert!(!dialog.is_loading());
    }

    #[test]
    fn test_begin_sets_pending() {
        let mut dialog = DeleteDialog::open("acme");
        assert!(dialog.begin());
        assert!(dialog.is_loading());
    }

    #[test]
    fn test_begin_while_pending_is_rejected() {
        let mut dialog = DeleteDialog::open("acme");
        assert!(dialog.begin());
        assert!(!dialog.begin());
        assert!(dialog.is_loading());
    }

    #[test]
    fn test_begin_clears_stale_error() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");
        dialog.begin();
        dialog.settle(Err(api_error(Some("quota exceeded"))), &mut queue);
        assert!(dialog.error().is_some());

        assert!(dialog.begin());
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn test_success_emits_alert_and_closes() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");
        dialog.begin();

        let should_close = dialog.settle(Ok(()), &mut queue);

        assert!(should_close);
        assert!(!dialog.is_loading());
        assert_eq!(dialog.error(), None);

        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Success);
        assert_eq!(alerts[0].title, "Successfully deleted organization acme");
        assert_eq!(alerts[0].message, None);
    }

    #[test]
    fn test_failure_keeps_dialog_open_with_backend_message() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");
        dialog.begin();

        let should_close = dialog.settle(Err(api_error(Some("quota exceeded"))), &mut queue);

        assert!(!should_close);
        assert!(!dialog.is_loading());
        assert_eq!(dialog.error(), Some("quota exceeded"));

        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Failure);
        assert_eq!(alerts[0].title, "Failed to delete organization acme");
        assert_eq!(alerts[0].message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");
        dialog.begin();

        dialog.settle(Err(api_error(None)), &mut queue);

        assert_eq!(dialog.error(), Some(DELETE_FALLBACK_MESSAGE));
        assert_eq!(
            queue.alerts()[0].message.as_deref(),
            Some(DELETE_FALLBACK_MESSAGE)
        );
    }

    #[test]
    fn test_close_clears_error() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");
        dialog.begin();
        dialog.settle(Err(api_error(Some("quota exceeded"))), &mut queue);

        dialog.close();

        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn test_retry_after_failure_can_succeed() {
        let mut queue = AlertQueue::new();
        let mut dialog = DeleteDialog::open("acme");

        dialog.begin();
        assert!(!dialog.settle(Err(api_error(Some("quota exceeded"))), &mut queue));

        assert!(dialog.begin());
        assert!(dialog.settle(Ok(()), &mut queue));

        assert_eq!(queue.alerts().len(), 2);
        assert_eq!(queue.alerts()[1].level, AlertLevel::Success);
    }
}
