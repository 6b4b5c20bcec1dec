use crate::context::AppContext;
use dioxus::prelude::*;
use foh_kernel::prelude::{Appearance, UiState};
use tracing::{debug, warn};

// Reports the current OS scheme, then every change, until the page goes away.
const WATCH_COLOR_SCHEME: &str = r"
    const query = window.matchMedia('(prefers-color-scheme: dark)');
    dioxus.send(query.matches);
    query.addEventListener('change', (event) => dioxus.send(event.matches));
    await new Promise(() => {});
";

/// Whether the OS currently prefers a dark scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsPreference(pub Signal<bool>);

impl OsPreference {
    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        *self.0.read()
    }
}

/// Script that puts exactly one of `light`/`dark` on `<html>`.
#[must_use]
fn apply_appearance_script(appearance: Appearance) -> String {
    format!(
        "document.documentElement.classList.remove('{}'); document.documentElement.classList.add('{}');",
        appearance.opposite().css_class(),
        appearance.css_class()
    )
}

/// Tracks the OS scheme and keeps the document class in sync with the resolved theme.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let ui = use_context::<Signal<UiState>>();
    let mut os_dark = use_signal(|| false);
    use_context_provider(|| OsPreference(os_dark));

    use_future(move || async move {
        let mut watcher = document::eval(WATCH_COLOR_SCHEME);
        loop {
            match watcher.recv::<bool>().await {
                Ok(dark) => {
                    debug!(dark, "OS color scheme changed");
                    os_dark.set(dark);
                },
                Err(err) => {
                    warn!(error = ?err, "Stopped watching the OS color scheme");
                    break;
                },
            }
        }
    });

    let appearance = use_memo(move || ui.read().theme().resolve(os_dark()));
    use_effect(move || {
        let _ = document::eval(&apply_appearance_script(appearance()));
    });

    rsx! { {children} }
}

/// Flips between light and dark; the first click from `System` pins the opposite of the OS.
#[component]
pub fn ThemeToggle() -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let os = use_context::<OsPreference>();
    let ctx = use_context::<AppContext>();

    let appearance = ui.read().theme().resolve(os.prefers_dark());
    let label = match appearance {
        Appearance::Light => "Switch to dark mode",
        Appearance::Dark => "Switch to light mode",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: label,
            "aria-label": label,
            onclick: move |_| {
                let theme = ui.write().toggle_theme(os.prefers_dark());
                ctx.persist_theme(theme);
            },
            if appearance == Appearance::Dark {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M12 3v2.25m6.364.386-1.591 1.591M21 12h-2.25m-.386 6.364-1.591-1.591M12 18.75V21m-4.773-4.227-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 1 1-7.5 0 3.75 3.75 0 0 1 7.5 0Z",
            }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M21.752 15.002A9.72 9.72 0 0 1 18 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 0 0 3 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 0 0 9.002-5.998Z",
            }
        }
    }
}
