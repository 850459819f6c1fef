use crate::dialog::DeleteDialog;
use dioxus::prelude::*;

/// Confirmation dialog for deleting an organization. Both actions are
/// disabled while the delete request is outstanding, so the dialog can
/// neither be re-confirmed nor closed mid-flight.
#[component]
pub fn DeleteConfirmDialog(
    dialog: DeleteDialog,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_loading = dialog.is_loading();

    rsx! {
        div { class: "dialog-overlay",
            div { class: "delete-confirm-dialog",
                h3 { "Delete Organization" }
                p {
                    "Deleting organization \"{dialog.organization()}\" removes all of its "
                    "repositories and cannot be undone. Continue?"
                }
                if let Some(error) = dialog.error() {
                    div { class: "dialog-error", "{error}" }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        disabled: is_loading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary danger",
                        disabled: is_loading,
                        onclick: move |_| on_confirm.call(()),
                        if is_loading { "Deleting..." } else { "OK" }
                    }
                }
            }
        }
    }
}
