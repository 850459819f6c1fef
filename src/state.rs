use crate::alerts::AlertQueue;
use crate::dialog::DeleteDialog;
use crate::registry::{AppConfig, Organization, RegistryClient};

#[derive(Clone, Debug)]
pub struct AppState {
    pub organizations: Vec<Organization>,
    pub is_fetching: bool,
    pub fetch_error: Option<String>,
    pub new_org_name: String,
    pub is_creating: bool,
    pub delete_dialog: Option<DeleteDialog>,
    pub alerts: AlertQueue,
    pub config: AppConfig,
    pub client: RegistryClient,
}

impl AppState {
    pub fn new() -> Self {
        let config = AppConfig::default();
        let client = RegistryClient::new(&config.api_base_url);

        Self {
            organizations: Vec::new(),
            is_fetching: false,
            fetch_error: None,
            new_org_name: String::new(),
            is_creating: false,
            delete_dialog: None,
            alerts: AlertQueue::new(),
            config,
            client,
        }
    }

    pub fn apply_config(&mut self, config: AppConfig) {
        self.client = RegistryClient::new(&config.api_base_url);
        self.config = config;
    }

    pub fn request_delete(&mut self, organization: impl Into<String>) {
        self.delete_dialog = Some(DeleteDialog::open(organization));
    }

    pub fn close_delete_dialog(&mut self) {
        if let Some(dialog) = self.delete_dialog.as_mut() {
            dialog.close();
        }
        self.delete_dialog = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
