use crate::alerts::{Alert, AlertSink};
use crate::components::*;
use crate::registry::{NewOrganization, load_config};
use crate::state::AppState;
use dioxus::prelude::*;
use tracing::{error, info};

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(AppState::new);

    use_effect(move || {
        spawn(async move {
            initialize_app(state).await;
        });
    });

    let on_refresh = move |_| {
        spawn(async move {
            refresh_organizations(state).await;
        });
    };

    let on_name_change = move |name: String| {
        state.write().new_org_name = name;
    };

    let on_create = move |_| {
        spawn(async move {
            create_organization(state).await;
        });
    };

    let on_delete_request = move |name: String| {
        state.write().request_delete(name);
    };

    let on_confirm_delete = move |_| {
        spawn(async move {
            confirm_delete(state).await;
        });
    };

    let on_cancel_delete = move |_| {
        state.write().close_delete_dialog();
    };

    let dialog = state.read().delete_dialog.clone();

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header {}
            div { class: "content",
                CreateOrgForm {
                    state: state,
                    on_name_change: on_name_change,
                    on_create: on_create
                }
                OrgList {
                    state: state,
                    on_refresh: on_refresh,
                    on_delete: on_delete_request
                }
            }
            StatusBar { state: state }
            AlertStack { state: state }
            if let Some(dialog) = dialog {
                DeleteConfirmDialog {
                    dialog: dialog,
                    on_confirm: on_confirm_delete,
                    on_cancel: on_cancel_delete
                }
            }
        }
    }
}

async fn initialize_app(mut state: Signal<AppState>) {
    match load_config() {
        Ok(config) => {
            info!("using backend at {}", config.api_base_url);
            state.write().apply_config(config);
        }
        Err(e) => {
            error!("failed to load config, using defaults: {e}");
            state.write().alerts.emit(Alert::failure(
                "Failed to load configuration",
                Some(e.to_string()),
            ));
        }
    }

    refresh_organizations(state).await;
}

async fn refresh_organizations(mut state: Signal<AppState>) {
    let client = {
        let mut write_state = state.write();
        write_state.is_fetching = true;
        write_state.fetch_error = None;
        write_state.client.clone()
    };

    let result = client.list_organizations().await;

    let mut write_state = state.write();
    write_state.is_fetching = false;
    match result {
        Ok(organizations) => {
            info!("fetched {} organizations", organizations.len());
            write_state.organizations = organizations;
        }
        Err(e) => {
            error!("failed to fetch organizations: {e}");
            write_state.fetch_error = Some(e.to_string());
        }
    }
}

async fn create_organization(mut state: Signal<AppState>) {
    let request = {
        let mut write_state = state.write();
        if write_state.is_creating {
            return;
        }
        let name = write_state.new_org_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        write_state.is_creating = true;
        NewOrganization { name, email: None }
    };

    let client = state.read().client.clone();
    let result = client.create_organization(&request).await;

    let created = {
        let mut write_state = state.write();
        write_state.is_creating = false;
        match result {
            Ok(()) => {
                info!("created organization {}", request.name);
                write_state.new_org_name.clear();
                write_state
                    .alerts
                    .emit(Alert::success(format!("Created organization {}", request.name)));
                true
            }
            Err(e) => {
                error!("failed to create organization {}: {e}", request.name);
                let detail = e
                    .error_message()
                    .unwrap_or("Failed to create organization")
                    .to_string();
                write_state.alerts.emit(Alert::failure(
                    format!("Failed to create organization {}", request.name),
                    Some(detail),
                ));
                false
            }
        }
    };

    if created {
        refresh_organizations(state).await;
    }
}

async fn confirm_delete(mut state: Signal<AppState>) {
    let name = {
        let mut write_state = state.write();
        let Some(dialog) = write_state.delete_dialog.as_mut() else {
            return;
        };
        if !dialog.begin() {
            return;
        }
        dialog.organization().to_string()
    };

    let client = state.read().client.clone();
    let outcome = client.delete_organization(&name).await;

    let closed = {
        let mut write_state = state.write();
        let AppState {
            delete_dialog,
            alerts,
            ..
        } = &mut *write_state;
        // The dialog may have been closed, or reopened for another row,
        // while the request was in flight; a stale outcome is dropped.
        let Some(dialog) = delete_dialog.as_mut() else {
            return;
        };
        if dialog.organization() != name {
            return;
        }
        dialog.settle(outcome, alerts)
    };

    if closed {
        info!("deleted organization {name}");
        state.write().delete_dialog = None;
        refresh_organizations(state).await;
    }
}
