use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

#[component]
pub fn OrgList(
    state: Signal<AppState>,
    on_refresh: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let organizations = state.read().organizations.clone();
    let is_fetching = state.read().is_fetching;
    let fetch_error = state.read().fetch_error.clone();

    rsx! {
        div { class: "section",
            div { class: "section-header",
                div { class: "section-title", "Organizations" }
                button {
                    class: "secondary",
                    disabled: is_fetching,
                    onclick: move |_| on_refresh.call(()),
                    if is_fetching { "Refreshing..." } else { "Refresh" }
                }
            }

            if let Some(error) = fetch_error {
                div { class: "message error", "{error}" }
            }

            if organizations.is_empty() && !is_fetching {
                div { class: "empty-state", "No organizations yet" }
            }

            ul { class: "org-list",
                for org in organizations {
                    li { class: "org-row",
                        div { class: "org-info",
                            div { class: "org-name", "{org.name}" }
                            if let Some(email) = &org.email {
                                div { class: "org-email", "{email}" }
                            }
                        }
                        button {
                            class: "secondary danger",
                            onclick: {
                                let name = org.name.clone();
                                move |_| on_delete.call(name.clone())
                            },
                            Icon {
                                width: 16,
                                height: 16,
                                icon: MdDelete
                            }
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
