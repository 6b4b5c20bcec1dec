use crate::context::AppContext;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let site = &ctx.config.site;
    let links = [
        ("Twitter", site.social.twitter.as_str()),
        ("Instagram", site.social.instagram.as_str()),
        ("Facebook", site.social.facebook.as_str()),
    ];

    rsx! {
        footer { class: "footer",
            span { "© {site.company.name}" }
            nav { class: "social", "aria-label": "Social media",
                for (label, href) in links {
                    a { key: "{label}", href, target: "_blank", rel: "noopener noreferrer", "{label}" }
                }
            }
            a { href: "mailto:{site.company.contact_email}", "{site.company.contact_email}" }
        }
    }
}
