use dioxus::prelude::*;
use foh_kernel::prelude::ContactField;

/// Wrapper class for a labelled field.
#[must_use]
pub fn field_class(error: &str) -> &'static str {
    if error.is_empty() { "field" } else { "field invalid" }
}

/// Labelled single-line input. An empty `error` means the field is valid.
#[component]
pub fn FormInput(
    field: ContactField,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] error: String,
    #[props(default, into)] helper_text: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let id = field.id();

    rsx! {
        div { class: field_class(&error),
            label { r#for: id, "{field.label()}" }
            input {
                id,
                name: id,
                r#type: input_type,
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                "aria-invalid": !error.is_empty(),
                oninput: move |evt| oninput.call(evt),
            }
            if !error.is_empty() {
                span { class: "error", role: "alert", "{error}" }
            } else if !helper_text.is_empty() {
                span { class: "helper", "{helper_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_invalid_fields() {
        assert_eq!(field_class(""), "field");
        assert_eq!(field_class("Name must be at least 2 characters"), "field invalid");
    }
}
