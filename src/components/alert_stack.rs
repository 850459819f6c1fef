use crate::alerts::AlertLevel;
use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdCheckCircle;
use dioxus_free_icons::icons::md_alert_icons::MdError;
use std::collections::HashSet;
use std::time::Duration;
use uuid::Uuid;

/// How long an alert stays on screen before it is retired. Manual
/// dismissal via the close button retires it earlier.
const DISPLAY_TTL: Duration = Duration::from_secs(5);

#[component]
pub fn AlertStack(state: Signal<AppState>) -> Element {
    let mut scheduled = use_signal(HashSet::<Uuid>::new);

    use_effect(move || {
        let ids: Vec<Uuid> = state.read().alerts.alerts().iter().map(|a| a.id).collect();
        for id in ids {
            if scheduled.write().insert(id) {
                spawn(async move {
                    tokio::time::sleep(DISPLAY_TTL).await;
                    state.write().alerts.retire(id);
                    scheduled.write().remove(&id);
                });
            }
        }
    });

    let alerts = state.read().alerts.alerts().to_vec();

    rsx! {
        div { class: "alert-stack",
            for alert in alerts {
                div {
                    key: "{alert.id}",
                    class: if alert.level == AlertLevel::Success { "alert success" } else { "alert failure" },
                    if alert.level == AlertLevel::Success {
                        Icon { width: 18, height: 18, icon: MdCheckCircle }
                    } else {
                        Icon { width: 18, height: 18, icon: MdError }
                    }
                    div { class: "alert-body",
                        div { class: "alert-title", "{alert.title}" }
                        if let Some(message) = &alert.message {
                            div { class: "alert-message", "{message}" }
                        }
                    }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| state.write().alerts.retire(alert.id),
                        "×"
                    }
                }
            }
        }
    }
}
