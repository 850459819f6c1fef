use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CreateOrgForm(
    state: Signal<AppState>,
    on_name_change: EventHandler<String>,
    on_create: EventHandler<()>,
) -> Element {
    let name = state.read().new_org_name.clone();
    let is_creating = state.read().is_creating;
    let can_create = !is_creating && !name.trim().is_empty();

    rsx! {
        div { class: "section",
            div { class: "section-title", "New Organization" }
            div { class: "create-org-form",
                input {
                    r#type: "text",
                    placeholder: "Organization name",
                    disabled: is_creating,
                    value: "{name}",
                    oninput: move |evt: Event<FormData>| {
                        on_name_change.call(evt.value());
                    },
                }
                button {
                    class: "primary",
                    disabled: !can_create,
                    onclick: move |_| on_create.call(()),
                    if is_creating { "Creating..." } else { "Create" }
                }
            }
        }
    }
}
