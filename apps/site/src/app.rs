use crate::components::{ContactForm, FeatureHighlights, Footer, HeroContent};
use crate::context::AppContext;
use crate::theme::{ThemeProvider, ThemeToggle};
use dioxus::prelude::*;
use foh_kernel::prelude::UiState;

const NOTIFY_PAGE: &str = "Get Notified";

/// Page root: seeds the UI state from the persisted theme and lays out the page.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context_provider(|| Signal::new(ctx.initial_state()));

    let form_open = use_memo(move || ui.read().is_contact_form_open());
    let title = ctx.metadata.page_title(form_open().then_some(NOTIFY_PAGE));
    let company = &ctx.config.site.company;

    rsx! {
        document::Title { "{title}" }
        ThemeProvider {
            div { class: "page",
                header { class: "topbar",
                    div { class: "wordmark", "{company.name}" }
                    ThemeToggle {}
                }
                HeroContent {
                    FeatureHighlights {}
                }
                Footer {}
                ContactForm {}
            }
        }
    }
}
