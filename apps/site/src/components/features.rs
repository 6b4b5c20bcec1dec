use crate::context::AppContext;
use dioxus::prelude::*;
use foh_kernel::domain::motion::{feature_enter, feature_exit};
use foh_kernel::prelude::{Carousel, UiState};

/// The slide on screen and the one still playing its exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slides {
    current: usize,
    outgoing: Option<usize>,
}

impl Slides {
    const fn new(current: usize) -> Self {
        Self { current, outgoing: None }
    }

    fn show(&mut self, next: usize) {
        if next != self.current {
            self.outgoing = Some(self.current);
            self.current = next;
        }
    }
}

/// Rotating feature card with one dot per feature.
///
/// The rotation task belongs to this component and stops when it unmounts.
#[component]
pub fn FeatureHighlights() -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let ctx = use_context::<AppContext>();
    let carousel = Carousel::from_config(&ctx.config.timing);

    use_future(move || async move {
        carousel
            .run(move || {
                carousel.tick(&mut ui.write());
            })
            .await;
    });

    let index = use_memo(move || ui.read().current_feature_index());
    let mut slides = use_signal(|| Slides::new(ui.peek().current_feature_index()));
    use_effect(move || {
        let next = index();
        slides.write().show(next);
    });

    let site = &ctx.config.site;
    let Slides { current, outgoing } = slides();
    let Some(feature) = site.feature(current) else {
        return rsx! {};
    };

    // Fresh keys on every change remount both slides, replaying exit and entrance.
    let mut shown = Vec::with_capacity(2);
    if let Some((prev, leaving)) = outgoing.and_then(|i| site.feature(i).map(|f| (i, f))) {
        shown.push((format!("out-{prev}"), "feature-slide leaving", feature_exit().style(), leaving));
    }
    shown.push((format!("in-{current}"), "feature-slide", feature_enter().style(), feature));

    rsx! {
        div { class: "features",
            for (key, class, style, feature) in shown {
                div {
                    key: "{key}",
                    class,
                    style,
                    "aria-hidden": class != "feature-slide",
                    h3 { "{feature.title}" }
                    p { "{feature.description}" }
                }
            }
            nav { class: "dots", "aria-label": "Features",
                for (dot, item) in site.features.iter().enumerate() {
                    button {
                        key: "{dot}",
                        r#type: "button",
                        class: if dot == current { "dot active" } else { "dot" },
                        title: "{item.title}",
                        "aria-label": "Show feature {dot + 1}",
                        "aria-current": dot == current,
                        onclick: move |_| {
                            ui.write().set_feature_index(dot);
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_keeps_previous_slide_for_exit() {
        let mut slides = Slides::new(0);
        slides.show(1);
        assert_eq!(slides, Slides { current: 1, outgoing: Some(0) });

        slides.show(1);
        assert_eq!(slides, Slides { current: 1, outgoing: Some(0) });

        slides.show(0);
        assert_eq!(slides, Slides { current: 0, outgoing: Some(1) });
    }
}
