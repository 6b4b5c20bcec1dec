use super::ui::{Button, ButtonSize};
use crate::context::AppContext;
use dioxus::prelude::*;
use foh_kernel::domain::constants::{CTA_LABEL, HERO_BLURB};
use foh_kernel::domain::motion::{
    STAGGER_STEP_S, fade_in, fade_in_with_delay, floating, stagger_children,
};
use foh_kernel::prelude::UiState;

/// Headline, blurb, call to action; `children` render between blurb and button.
#[component]
pub fn HeroContent(children: Element) -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let ctx = use_context::<AppContext>();
    let company = &ctx.config.site.company;

    let blobs = [
        ("blob blob-primary", floating(15.0, 6.0)),
        ("blob blob-secondary", floating(30.0, 15.0)),
        ("blob blob-accent", floating(20.0, 18.0)),
    ];
    let entrance = fade_in();

    rsx! {
        section { class: "hero", style: stagger_children().style(),
            div { class: "hero-bg", "aria-hidden": "true",
                for (class, motion) in blobs {
                    div { class, style: motion.style() }
                }
            }
            h1 { style: entrance.style(), "{company.name}" }
            h2 { class: "tagline", style: entrance.staggered(1, STAGGER_STEP_S).style(), "{company.tagline}" }
            p { style: entrance.staggered(2, STAGGER_STEP_S).style(), "{HERO_BLURB}" }
            {children}
            div { style: fade_in_with_delay(0.6).style(),
                Button {
                    size: ButtonSize::Lg,
                    onclick: move |_| {
                        ui.write().toggle_contact_form(Some(true));
                    },
                    "{CTA_LABEL}"
                }
            }
        }
    }
}
