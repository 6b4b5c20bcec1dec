//! Entrance/exit animations described as data and rendered to plain CSS.
//!
//! Each [`Variant`] is a two-keyframe animation (`from` → `to`) plus timing.
//! Components reference a variant by its class name and the page stylesheet
//! is produced once from [`stylesheet`].

use std::fmt::Write as _;
use std::time::Duration;

/// Timing function of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used by the modal pop-in.
    pub const POP: Self = Self::CubicBezier(0.19, 1.0, 0.22, 1.0);

    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Loops forever, reversing direction on every pass.
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_s: f32,
    pub delay_s: f32,
    pub ease: Easing,
    pub repeat: Repeat,
}

impl Transition {
    #[must_use]
    pub const fn new(duration_s: f32, ease: Easing) -> Self {
        Self { duration_s, delay_s: 0.0, ease, repeat: Repeat::Once }
    }

    #[must_use]
    pub const fn delayed(mut self, delay_s: f32) -> Self {
        self.delay_s = delay_s;
        self
    }

    #[must_use]
    pub const fn alternating(mut self) -> Self {
        self.repeat = Repeat::Alternate;
        self
    }
}

/// Visual properties at one end of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub scale: f32,
}

impl Keyframe {
    pub const VISIBLE: Self = Self { opacity: 1.0, translate_y_px: 0.0, scale: 1.0 };

    #[must_use]
    pub const fn hidden() -> Self {
        Self { opacity: 0.0, translate_y_px: 0.0, scale: 1.0 }
    }

    #[must_use]
    pub const fn shifted(mut self, translate_y_px: f32) -> Self {
        self.translate_y_px = translate_y_px;
        self
    }

    #[must_use]
    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn css(self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y_px, self.scale
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub from: Keyframe,
    pub to: Keyframe,
    pub transition: Transition,
}

impl Variant {
    #[must_use]
    pub fn new(name: impl Into<String>, from: Keyframe, to: Keyframe, transition: Transition) -> Self {
        Self { name: name.into(), from, to, transition }
    }

    /// `@keyframes` rule for this variant.
    #[must_use]
    pub fn css_keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.name,
            self.from.css(),
            self.to.css()
        )
    }

    /// Value for the CSS `animation` property.
    #[must_use]
    pub fn animation(&self) -> String {
        let t = &self.transition;
        let iteration = match t.repeat {
            Repeat::Once => "1 normal",
            Repeat::Alternate => "infinite alternate",
        };
        format!("{} {}s {} {}s {iteration} both", self.name, t.duration_s, t.ease.css(), t.delay_s)
    }

    /// Inline `style` attribute value, handy when the delay is computed per element.
    #[must_use]
    pub fn style(&self) -> String {
        format!("animation: {};", self.animation())
    }

    /// Same animation starting `index * step_s` later, for list children.
    #[must_use]
    pub fn staggered(&self, index: usize, step_s: f32) -> Self {
        let mut next = self.clone();
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f32 * step_s;
        next.transition.delay_s += offset;
        next
    }

    /// Delay plus one pass; how long to keep an exiting element mounted.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        Duration::from_secs_f32(self.transition.delay_s + self.transition.duration_s)
    }

    fn renamed(mut self, name: &str) -> Self {
        name.clone_into(&mut self.name);
        self
    }
}

/// Fade in while rising 20px.
#[must_use]
pub fn fade_in() -> Variant {
    Variant::new(
        "fade-in",
        Keyframe::hidden().shifted(20.0),
        Keyframe::VISIBLE,
        Transition::new(0.6, Easing::EaseOut),
    )
}

/// [`fade_in`] starting `delay_s` later; shares the `fade-in` keyframes.
#[must_use]
pub fn fade_in_with_delay(delay_s: f32) -> Variant {
    let mut variant = fade_in();
    variant.transition = variant.transition.delayed(delay_s);
    variant
}

/// Modal entrance.
#[must_use]
pub fn pop_in() -> Variant {
    Variant::new(
        "pop-in",
        Keyframe::hidden().scaled(0.95),
        Keyframe::VISIBLE,
        Transition::new(0.4, Easing::POP),
    )
}

/// Modal exit.
#[must_use]
pub fn pop_out() -> Variant {
    Variant::new(
        "pop-out",
        Keyframe::VISIBLE,
        Keyframe::hidden().scaled(0.95),
        Transition::new(0.3, Easing::EaseIn),
    )
}

#[must_use]
pub fn fade_in_place() -> Variant {
    Variant::new(
        "fade-in-place",
        Keyframe::hidden(),
        Keyframe::VISIBLE,
        Transition::new(0.5, Easing::EaseInOut),
    )
}

/// Parent fade for staggered lists; children use [`Variant::staggered`] with [`STAGGER_STEP_S`].
#[must_use]
pub fn stagger_children() -> Variant {
    fade_in_place().renamed("stagger-children")
}

pub const STAGGER_STEP_S: f32 = 0.1;

/// New carousel slide coming in from below.
#[must_use]
pub fn feature_enter() -> Variant {
    Variant::new(
        "feature-enter",
        Keyframe::hidden().shifted(20.0),
        Keyframe::VISIBLE,
        Transition::new(0.5, Easing::EaseInOut),
    )
}

/// Old carousel slide leaving upward.
#[must_use]
pub fn feature_exit() -> Variant {
    Variant::new(
        "feature-exit",
        Keyframe::VISIBLE,
        Keyframe::hidden().shifted(-20.0),
        Transition::new(0.3, Easing::EaseInOut),
    )
}

/// Endless vertical drift for background blobs.
#[must_use]
pub fn floating(y_offset_px: f32, duration_s: f32) -> Variant {
    let up = Keyframe::VISIBLE.shifted(-y_offset_px);
    let down = Keyframe::VISIBLE.shifted(y_offset_px);
    Variant::new(
        format!("floating-{y_offset_px}-{duration_s}").replace('.', "_"),
        up,
        down,
        Transition::new(duration_s, Easing::EaseInOut).alternating(),
    )
}

/// All `@keyframes` rules the page needs, one per line.
#[must_use]
pub fn stylesheet() -> String {
    let variants = [
        fade_in(),
        pop_in(),
        pop_out(),
        fade_in_place(),
        stagger_children(),
        feature_enter(),
        feature_exit(),
        floating(15.0, 6.0),
        floating(30.0, 15.0),
        floating(20.0, 18.0),
    ];

    variants.iter().fold(String::new(), |mut css, variant| {
        let _ = writeln!(css, "{}", variant.css_keyframes());
        css
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_easing_renders_bezier() {
        assert_eq!(Easing::POP.css(), "cubic-bezier(0.19, 1, 0.22, 1)");
    }

    #[test]
    fn delayed_fade_keeps_curve_and_sets_delay() {
        let v = fade_in_with_delay(0.4);
        assert_eq!(v.animation(), "fade-in 0.6s ease-out 0.4s 1 normal both");
    }

    #[test]
    fn exit_duration_covers_one_pass() {
        assert_eq!(pop_out().total_duration().as_millis(), 300);
        assert!(fade_in_with_delay(0.4).total_duration() > fade_in().total_duration());
    }

    #[test]
    fn floating_loops_forever() {
        let v = floating(15.0, 6.0);
        assert_eq!(v.name, "floating-15-6");
        assert!(v.animation().contains("infinite alternate"));
        assert!(v.css_keyframes().contains("translateY(-15px)"));
    }

    #[test]
    fn stagger_offsets_each_child() {
        let child = fade_in_place().staggered(3, STAGGER_STEP_S);
        assert!((child.transition.delay_s - 0.3).abs() < f32::EPSILON * 4.0);
    }

    #[test]
    fn stylesheet_contains_every_rule() {
        let css = stylesheet();
        for name in ["fade-in", "pop-in", "pop-out", "feature-enter", "feature-exit"] {
            assert!(css.contains(&format!("@keyframes {name} ")), "missing {name}");
        }
    }
}
