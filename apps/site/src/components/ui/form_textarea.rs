use super::field_class;
use dioxus::prelude::*;
use foh_kernel::prelude::ContactField;

/// Labelled multi-line input, same contract as [`super::FormInput`].
#[component]
pub fn FormTextarea(
    field: ContactField,
    value: String,
    #[props(default = 3)] rows: u32,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] error: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let id = field.id();

    rsx! {
        div { class: field_class(&error),
            label { r#for: id, "{field.label()}" }
            textarea {
                id,
                name: id,
                rows: "{rows}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if !error.is_empty() {
                span { class: "error", role: "alert", "{error}" }
            }
        }
    }
}
