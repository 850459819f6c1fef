use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(state: Signal<AppState>) -> Element {
    let base_url = state.read().config.api_base_url.clone();
    let count = state.read().organizations.len();

    rsx! {
        div { class: "status-bar",
            div { class: "status-section",
                div { class: "status-label", "Backend:" }
                div { class: "status-value", "{base_url}" }
            }
            div { class: "status-section",
                div { class: "status-label", "Organizations:" }
                div { class: "status-value", "{count}" }
            }
        }
    }
}
