use dioxus::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

/// Class list for a button; a loading button is also shown as disabled.
#[must_use]
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    inactive: bool,
    extra: &str,
) -> String {
    let mut classes = vec!["btn", variant.class(), size.class()];
    if full_width {
        classes.push("btn-full");
    }
    if inactive {
        classes.push("btn-disabled");
    }
    if !extra.trim().is_empty() {
        classes.push(extra.trim());
    }
    classes.join(" ")
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] full_width: bool,
    #[props(default)] is_loading: bool,
    #[props(default)] disabled: bool,
    #[props(default = "button")] kind: &'static str,
    #[props(default, into)] class: String,
    #[props(default = "")] label: &'static str,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let inactive = disabled || is_loading;
    let classes = button_class(variant, size, full_width, inactive, &class);

    rsx! {
        button {
            class: "{classes}",
            r#type: kind,
            disabled: inactive,
            "aria-label": label,
            "aria-busy": is_loading,
            onclick: move |evt| onclick.call(evt),
            if is_loading {
                span { class: "spinner" }
            }
            {children}
        }
    }
}
